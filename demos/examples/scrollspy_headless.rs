// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless scroll spy.
//!
//! Loads a documentation page from JSON, scrolls a simulated viewport through
//! it, and prints the table of contents after each throttle window closes.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p signpost_demos --example scrollspy_headless`

use std::collections::HashMap;

use signpost::{
    AnchorLayout, AnchorScroller, ContentPane, DocNavigator, Document, IntersectionSource,
    NavigatorConfig, VisibilityEvent,
};

const DOCUMENT: &str = r##"{
    "sections": [
        { "slug": "intro", "title": "Introduction" },
        { "slug": "install", "title": "Installation", "children": [
            { "slug": "install-npm", "title": "npm" },
            { "slug": "install-yarn", "title": "yarn" }
        ]},
        { "slug": "usage", "title": "Usage" }
    ],
    "content": "<h1 id=\"intro\">Introduction</h1>..."
}"##;

/// Page with fixed anchor offsets and a scroll position.
struct Page {
    offsets: HashMap<&'static str, f64>,
    scroll_y: f64,
    viewport: f64,
    watched: Vec<String>,
}

impl Page {
    fn new() -> Self {
        let offsets = [
            ("intro", 0.0),
            ("install", 600.0),
            ("install-npm", 900.0),
            ("install-yarn", 1_300.0),
            ("usage", 1_900.0),
        ];
        Self {
            offsets: offsets.into_iter().collect(),
            scroll_y: 0.0,
            viewport: 500.0,
            watched: Vec::new(),
        }
    }

    /// Notifications the platform would deliver for the current scroll position.
    fn visible(&self) -> Vec<VisibilityEvent> {
        let mut events: Vec<VisibilityEvent> = self
            .watched
            .iter()
            .filter_map(|id| {
                let top = self.anchor_top(id)?;
                let ratio = if (0.0..self.viewport).contains(&top) { 1.0 } else { 0.0 };
                Some(VisibilityEvent::new(id.as_str(), ratio, top))
            })
            .collect();
        events.sort_by(|a, b| a.bounding_top.total_cmp(&b.bounding_top));
        events
    }
}

impl AnchorLayout for Page {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).map(|offset| offset - self.scroll_y)
    }
}

impl IntersectionSource for Page {
    fn watch(&mut self, id: &str, _threshold: f64) {
        self.watched.push(id.to_owned());
    }

    fn unwatch(&mut self, id: &str) {
        self.watched.retain(|w| w != id);
    }
}

impl AnchorScroller for Page {
    fn scroll_into_view(&mut self, id: &str) {
        if let Some(offset) = self.offsets.get(id) {
            self.scroll_y = *offset;
        }
    }
}

fn print_toc(nav: &DocNavigator<u32>) {
    for row in nav.toc_rows().iter().filter(|row| row.visible) {
        let marker = if row.active { '>' } else { ' ' };
        let indent = "  ".repeat(row.depth);
        println!("  {marker} {indent}{}", row.title);
    }
}

fn main() {
    signpost_demos::init_logging();

    let document: Document = serde_json::from_str(DOCUMENT).expect("valid document JSON");
    let mut page = Page::new();
    let mut nav = DocNavigator::<u32>::new(NavigatorConfig::default());
    nav.active_listeners_mut().subscribe(|active: &Option<String>| {
        println!("active section -> {active:?}");
    });

    let report = nav
        .load(document, Some("#install"), &mut page)
        .expect("section slugs are unique");
    println!(
        "observing {} anchors, deep link scrolled to {:?}",
        report.observed, report.scrolled_to
    );
    if let ContentPane::Ready { content, .. } = nav.content_pane() {
        println!("content: {content}");
    }
    nav.toggle_branch("Installation");

    let mut now = 0;
    for step in 0..8 {
        page.scroll_y = f64::from(step) * 250.0;
        for event in page.visible() {
            nav.on_intersection(event, now);
        }
        now += 10;
        if let Some(deadline) = nav.next_deadline() {
            now = deadline;
            nav.poll(now, &page);
        }
        println!("scroll_y = {}:", page.scroll_y);
        print_toc(&nav);
        now += 100;
    }
}
