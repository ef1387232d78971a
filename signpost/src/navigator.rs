// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted documentation page: tree, observer, resolver, and sidebar state.

use alloc::string::String;
use alloc::vec::Vec;

use signpost_event_state::capture::ListenerRegistry;
use signpost_outline::{ExpansionChange, ExpansionStore, Listeners, SectionTree, TreeError};
use signpost_scrollspy::{
    ActiveSectionResolver, AnchorLayout, AnchorScroller, DeepLink, IntersectionSource, Offer,
    ResolverConfig, ViewportObserver, VisibilityEvent, deep_link, parse_fragment,
};
use signpost_timing::Millis;

use crate::toc::{self, TocRow};
use crate::{ContentPane, Document, Lifecycle, NavigatorConfig, PanelHandle};

/// Summary of what [`DocNavigator::load`] bound and scrolled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Anchors now observed.
    pub observed: usize,
    /// Anchors named by the tree but not rendered by the host.
    pub skipped: Vec<String>,
    /// Anchor scrolled into view for the initial fragment.
    pub scrolled_to: Option<String>,
}

/// Headless state for one documentation page.
///
/// The host drives it with lifecycle calls and raw events, and reads back
/// [`DocNavigator::toc_rows`] and [`DocNavigator::content_pane`] to render.
/// `E` is the host's element handle type for the sidebar drag handle.
#[derive(Debug)]
pub struct DocNavigator<E> {
    config: NavigatorConfig,
    lifecycle: Lifecycle,
    tree: SectionTree,
    content: String,
    translation_missing: bool,
    fragment: Option<String>,
    observer: ViewportObserver,
    resolver: ActiveSectionResolver,
    expansion: ExpansionStore,
    overlay_open: bool,
    overlay_listeners: Listeners<bool>,
    panel: PanelHandle<E>,
}

impl<E: PartialEq> DocNavigator<E> {
    /// Creates a navigator in the [`Lifecycle::Loading`] state.
    #[must_use]
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Loading,
            tree: SectionTree::default(),
            content: String::new(),
            translation_missing: false,
            fragment: None,
            observer: ViewportObserver::new(),
            resolver: ActiveSectionResolver::new(config.resolver),
            expansion: ExpansionStore::new(),
            overlay_open: false,
            overlay_listeners: Listeners::new(),
            panel: PanelHandle::new(config.panel),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Installs a loaded document.
    ///
    /// Call after the host has rendered `document.content`. Anchors at the
    /// configured depth are observed and scanned; ones the host did not render
    /// are reported as skipped.
    /// If `fragment` names a rendered anchor it is scrolled into view directly,
    /// without going through the throttle.
    ///
    /// Loading again replaces the previous document and its registrations. An
    /// invalid tree leaves the navigator in [`Lifecycle::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if a slug is empty or repeated.
    pub fn load<H>(
        &mut self,
        document: Document,
        fragment: Option<&str>,
        host: &mut H,
    ) -> Result<LoadReport, TreeError>
    where
        H: AnchorLayout + IntersectionSource + AnchorScroller + ?Sized,
    {
        if self.lifecycle == Lifecycle::Unmounted {
            tracing::warn!("load after unmount ignored");
            return Ok(LoadReport::default());
        }
        self.detach(host);
        let tree = match SectionTree::new(document.sections) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::warn!(%err, "rejecting section tree");
                self.fail(host);
                return Err(err);
            }
        };
        self.tree = tree;
        self.content = document.content;
        self.translation_missing = document.translation_missing;
        self.resolver.reset();
        self.resolver.set_tree(&self.tree);

        let ResolverConfig { threshold, depth, .. } = self.config.resolver;
        let mut report = LoadReport::default();
        for slug in self.tree.anchors(depth) {
            if self.observer.observe_in(slug, threshold, host) {
                report.observed += 1;
            } else {
                report.skipped.push(String::from(slug));
            }
        }

        self.fragment = fragment.and_then(parse_fragment).map(String::from);
        if let DeepLink::Scrolled(id) = deep_link(self.fragment.as_deref(), host) {
            report.scrolled_to = Some(String::from(id));
        }
        self.lifecycle = Lifecycle::Ready;
        tracing::debug!(
            observed = report.observed,
            skipped = report.skipped.len(),
            "document loaded"
        );
        Ok(report)
    }

    /// Records that loading failed.
    ///
    /// Any observations from an earlier load are released on `source`.
    pub fn fail<S>(&mut self, source: &mut S)
    where
        S: IntersectionSource + ?Sized,
    {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.detach(source);
        self.tree = SectionTree::default();
        self.content.clear();
        self.translation_missing = false;
        self.resolver.reset();
        self.lifecycle = Lifecycle::Failed;
    }

    /// Feeds a raw intersection notification observed at `now`.
    ///
    /// Notifications that do not cross their anchor's threshold, arrive before
    /// the document is ready, or carry a zero ratio are ignored.
    pub fn on_intersection(&mut self, event: VisibilityEvent, now: Millis) -> Offer {
        if self.lifecycle != Lifecycle::Ready {
            return Offer::Ignored;
        }
        match self.observer.process(event) {
            Some(event) => self.resolver.offer(event, now),
            None => Offer::Ignored,
        }
    }

    /// Resolves the pending event if its throttle window has closed.
    ///
    /// Returns `true` if the active section changed.
    pub fn poll<L>(&mut self, now: Millis, layout: &L) -> bool
    where
        L: AnchorLayout + ?Sized,
    {
        self.resolver.poll(now, layout)
    }

    /// When the host should call [`DocNavigator::poll`] next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.resolver.deadline()
    }

    /// The active section slug.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.resolver.active()
    }

    /// The loaded section tree. Empty until a document loads.
    #[must_use]
    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Toggles the branch keyed by the top-level `title`. Returns the new state.
    pub fn toggle_branch(&mut self, title: &str) -> bool {
        self.expansion.toggle(title)
    }

    /// Returns `true` if the branch keyed by `title` is expanded.
    #[must_use]
    pub fn is_expanded(&self, title: &str) -> bool {
        self.expansion.is_expanded(title)
    }

    /// Handles a click on a table-of-contents link.
    ///
    /// Records the fragment and closes the mobile overlay. Expansion is left
    /// alone, and the active section follows from the scroll the link causes.
    pub fn select_entry(&mut self, slug: &str) {
        self.set_fragment(Some(slug));
        self.dismiss_overlay();
    }

    /// Updates the current URL fragment. Accepts `"#id"`, `"id"`, or a URL.
    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.and_then(parse_fragment).map(String::from);
    }

    /// The current URL fragment without `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns `true` if the mobile table-of-contents overlay is open.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Opens or closes the mobile overlay. Returns the new state.
    pub fn toggle_overlay(&mut self) -> bool {
        self.set_overlay(!self.overlay_open);
        self.overlay_open
    }

    /// Closes the mobile overlay.
    pub fn dismiss_overlay(&mut self) {
        self.set_overlay(false);
    }

    fn set_overlay(&mut self, open: bool) {
        if self.overlay_open == open {
            return;
        }
        self.overlay_open = open;
        self.overlay_listeners.notify(&open);
    }

    /// Flat rows for the sidebar.
    #[must_use]
    pub fn toc_rows(&self) -> Vec<TocRow<'_>> {
        toc::rows(
            &self.tree,
            &self.expansion,
            self.resolver.active(),
            self.fragment.as_deref(),
        )
    }

    /// What the main pane should show.
    #[must_use]
    pub fn content_pane(&self) -> ContentPane<'_> {
        match self.lifecycle {
            Lifecycle::Ready => ContentPane::Ready {
                content: &self.content,
                translation_missing: self.translation_missing,
            },
            Lifecycle::Failed => ContentPane::Failed,
            Lifecycle::Loading | Lifecycle::Unmounted => ContentPane::Loading,
        }
    }

    /// Listeners notified with the new active slug.
    pub fn active_listeners_mut(&mut self) -> &mut Listeners<Option<String>> {
        self.resolver.listeners_mut()
    }

    /// Listeners notified when a branch is toggled.
    pub fn expansion_listeners_mut(&mut self) -> &mut Listeners<ExpansionChange> {
        self.expansion.listeners_mut()
    }

    /// Listeners notified with the new overlay state.
    pub fn overlay_listeners_mut(&mut self) -> &mut Listeners<bool> {
        &mut self.overlay_listeners
    }

    /// The sidebar drag handle.
    pub fn panel(&self) -> &PanelHandle<E> {
        &self.panel
    }

    /// Mutable access to the sidebar drag handle, for forwarding pointer events.
    pub fn panel_mut(&mut self) -> &mut PanelHandle<E> {
        &mut self.panel
    }

    /// Tears the page down.
    ///
    /// Releases every observation and drag listener, drops any pending event,
    /// and clears subscribers. Calling it again does nothing.
    pub fn unmount<H>(&mut self, host: &mut H)
    where
        H: IntersectionSource + ListenerRegistry<E> + ?Sized,
    {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.detach(host);
        self.panel.release(host);
        self.resolver.listeners_mut().clear();
        self.expansion.listeners_mut().clear();
        self.overlay_listeners.clear();
        self.lifecycle = Lifecycle::Unmounted;
        tracing::debug!("navigator unmounted");
    }

    fn detach<S>(&mut self, source: &mut S)
    where
        S: IntersectionSource + ?Sized,
    {
        let released = self.observer.disconnect(source);
        if self.resolver.cancel() {
            tracing::trace!("dropped pending visibility event");
        }
        if released > 0 {
            tracing::debug!(released, "released anchor observations");
        }
    }
}
