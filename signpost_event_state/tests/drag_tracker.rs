// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `DragTracker`: gesture lifecycle, listener bookkeeping, and
//! platform overrides.

use std::cell::RefCell;
use std::num::NonZeroU64;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use signpost_event_state::capture::{ListenerRegistry, PointerCapability, PointerId};
use signpost_event_state::drag::{DragDetails, DragTracker};

#[derive(Debug, Default)]
struct FakeHost {
    attached: Vec<u32>,
    calls: Vec<String>,
    released_captures: Vec<u64>,
    cancels_suppressed: u32,
}

impl ListenerRegistry<u32> for FakeHost {
    fn attach(&mut self, element: &u32) {
        assert!(
            !self.attached.contains(element),
            "listeners attached twice to {element}"
        );
        self.attached.push(*element);
        self.calls.push(format!("attach {element}"));
    }

    fn detach(&mut self, element: &u32) {
        self.attached.retain(|e| e != element);
        self.calls.push(format!("detach {element}"));
    }
}

impl PointerCapability for FakeHost {
    fn suppress_capture(&mut self, pointer: PointerId) {
        self.released_captures.push(pointer.get());
    }

    fn suppress_default_cancel(&mut self) {
        self.cancels_suppressed += 1;
    }
}

fn pid(n: u64) -> PointerId {
    NonZeroU64::new(n).unwrap()
}

#[test]
fn three_moves_scenario() {
    let mut host = FakeHost::default();
    let mut tracker = DragTracker::<u32>::new();
    tracker.retarget(Some(7), &mut host);

    assert!(tracker.pointer_down(&7, pid(1), Point::new(10.0, 10.0), &mut host));
    assert_eq!(host.released_captures, [1]);

    let m1 = tracker.pointer_move(pid(1), Point::new(13.0, 10.0)).unwrap();
    assert_eq!(m1.delta, Vec2::new(3.0, 0.0));
    assert_eq!(m1.direction_x, 1);

    let m2 = tracker.pointer_move(pid(1), Point::new(12.0, 12.0)).unwrap();
    assert_eq!(m2.delta, Vec2::new(-1.0, 2.0));
    assert_eq!(m2.direction_x, -1);
    assert_eq!(m2.direction_y, 1);

    let m3 = tracker.pointer_move(pid(1), Point::new(12.0, 10.0)).unwrap();
    assert_eq!(m3.delta, Vec2::new(0.0, -2.0));
    assert_eq!(m3.total, Vec2::new(2.0, 0.0));
    assert_eq!(m3.direction_x, -1, "zero X delta keeps the previous sign");
    assert_eq!(m3.direction_y, -1);
}

#[test]
fn reported_deltas_sum_to_total() {
    let mut host = FakeHost::default();
    let sum = Rc::new(RefCell::new(Vec2::ZERO));
    let last = Rc::new(RefCell::new(None::<DragDetails>));
    let mut tracker = DragTracker::<u32>::new();
    {
        let sum = Rc::clone(&sum);
        let last = Rc::clone(&last);
        tracker.set_on_drag(move |d| {
            *sum.borrow_mut() += d.delta;
            *last.borrow_mut() = Some(*d);
        });
    }
    tracker.retarget(Some(1), &mut host);
    tracker.pointer_down(&1, pid(3), Point::new(0.0, 0.0), &mut host);

    let samples = [(4.0, 1.0), (2.0, 6.0), (-3.0, 6.0), (-3.0, -2.0), (8.0, 0.5)];
    for (x, y) in samples {
        tracker.pointer_move(pid(3), Point::new(x, y));
    }

    let total = last.borrow().unwrap().total;
    assert_eq!(*sum.borrow(), total);
    assert_eq!(tracker.pointer_up(pid(3)), Some(total));
}

#[test]
fn callback_runs_once_per_accepted_move() {
    let mut host = FakeHost::default();
    let count = Rc::new(RefCell::new(0_u32));
    let mut tracker = DragTracker::<u32>::new();
    let c = Rc::clone(&count);
    tracker.set_on_drag(move |_| *c.borrow_mut() += 1);
    tracker.retarget(Some(1), &mut host);

    // Idle: ignored.
    assert!(tracker.pointer_move(pid(1), Point::new(1.0, 1.0)).is_none());

    tracker.pointer_down(&1, pid(1), Point::ZERO, &mut host);
    tracker.pointer_move(pid(1), Point::new(1.0, 0.0));
    // Another pointer: ignored.
    assert!(tracker.pointer_move(pid(2), Point::new(5.0, 0.0)).is_none());
    tracker.pointer_move(pid(1), Point::new(2.0, 0.0));
    tracker.pointer_up(pid(1));
    // After release: ignored.
    tracker.pointer_move(pid(1), Point::new(3.0, 0.0));

    assert_eq!(*count.borrow(), 2);
}

#[test]
fn retarget_detaches_before_attaching() {
    let mut host = FakeHost::default();
    let mut tracker = DragTracker::<u32>::new();

    tracker.retarget(Some(1), &mut host);
    tracker.retarget(Some(1), &mut host);
    tracker.retarget(Some(2), &mut host);

    assert_eq!(host.calls, ["attach 1", "detach 1", "attach 2"]);
    assert_eq!(host.attached, [2]);
    assert_eq!(tracker.target(), Some(&2));
}

#[test]
fn retarget_to_none_is_a_clean_unbind() {
    let mut host = FakeHost::default();
    let mut tracker = DragTracker::<u32>::new();

    tracker.retarget(None, &mut host);
    assert!(host.calls.is_empty());

    tracker.retarget(Some(4), &mut host);
    tracker.pointer_down(&4, pid(1), Point::ZERO, &mut host);
    tracker.release(&mut host);

    assert!(host.attached.is_empty());
    assert!(!tracker.is_dragging());
    assert!(!tracker.pointer_down(&4, pid(1), Point::ZERO, &mut host));
}

#[test]
fn press_rules() {
    let mut host = FakeHost::default();
    let mut tracker = DragTracker::<u32>::new();
    tracker.retarget(Some(1), &mut host);

    assert!(!tracker.pointer_down(&2, pid(1), Point::ZERO, &mut host));
    assert!(tracker.pointer_down(&1, pid(1), Point::ZERO, &mut host));
    assert!(
        !tracker.pointer_down(&1, pid(2), Point::ZERO, &mut host),
        "one gesture at a time"
    );
    assert_eq!(tracker.pointer_up(pid(2)), None);
    assert!(tracker.is_dragging());
}

#[test]
fn cancel_is_suppressed_and_drag_continues() {
    let mut host = FakeHost::default();
    let mut tracker = DragTracker::<u32>::new();
    tracker.retarget(Some(1), &mut host);
    tracker.pointer_down(&1, pid(1), Point::ZERO, &mut host);

    tracker.pointer_cancel(&mut host);

    assert_eq!(host.cancels_suppressed, 1);
    assert!(tracker.is_dragging());
    let d = tracker.pointer_move(pid(1), Point::new(0.0, 5.0)).unwrap();
    assert_eq!(d.total, Vec2::new(0.0, 5.0));
}
