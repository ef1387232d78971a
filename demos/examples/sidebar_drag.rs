// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar drag handle.
//!
//! Feeds a scripted pointer gesture through a raw `DragTracker` and through the
//! navigator's `PanelHandle`, printing each sample.
//!
//! Run:
//! - `cargo run -p signpost_demos --example sidebar_drag`

use std::num::NonZeroU64;

use kurbo::Point;
use signpost::{DocNavigator, IntersectionSource, NavigatorConfig};
use signpost_event_state::capture::{ListenerRegistry, PointerCapability, PointerId};
use signpost_event_state::drag::DragTracker;

#[derive(Debug, Default)]
struct Handles;

impl ListenerRegistry<&'static str> for Handles {
    fn attach(&mut self, element: &&'static str) {
        println!("attach listeners to {element}");
    }

    fn detach(&mut self, element: &&'static str) {
        println!("detach listeners from {element}");
    }
}

impl IntersectionSource for Handles {
    fn watch(&mut self, _id: &str, _threshold: f64) {}
    fn unwatch(&mut self, _id: &str) {}
}

impl PointerCapability for Handles {
    fn suppress_capture(&mut self, pointer: PointerId) {
        println!("pointer {pointer} stays on the page, not the handle");
    }

    fn suppress_default_cancel(&mut self) {}
}

fn main() {
    signpost_demos::init_logging();

    let pointer = NonZeroU64::new(1).expect("non-zero pointer id");
    let path = [
        Point::new(280.0, 40.0),
        Point::new(250.0, 41.0),
        Point::new(190.0, 45.0),
        Point::new(90.0, 45.0),
        Point::new(60.0, 44.0),
    ];
    let mut handles = Handles;

    println!("-- raw tracker");
    let mut tracker = DragTracker::<&'static str>::new();
    tracker.set_on_drag(|details| {
        println!(
            "  delta {:?} total {:?} heading {}",
            details.delta, details.total, details.direction_x
        );
    });
    tracker.retarget(Some("resize-grip"), &mut handles);
    tracker.pointer_down(&"resize-grip", pointer, path[0], &mut handles);
    for point in &path[1..] {
        tracker.pointer_move(pointer, *point);
    }
    println!("  released with total {:?}", tracker.pointer_up(pointer));
    tracker.release(&mut handles);

    println!("-- navigator sidebar");
    let mut nav = DocNavigator::<&'static str>::new(NavigatorConfig::default());
    let panel = nav.panel_mut();
    panel.bind(Some("sidebar-grip"), &mut handles);
    panel.pointer_down(&"sidebar-grip", pointer, path[0], &mut handles);
    for point in &path[1..] {
        if let Some(width) = panel.pointer_move(pointer, *point) {
            println!("  width {width}");
        }
    }
    panel.pointer_up(pointer);
    println!(
        "  collapsed: {}, laid out at {}px",
        panel.is_collapsed(),
        panel.visible_width()
    );
    nav.unmount(&mut handles);
}
