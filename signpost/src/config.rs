// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use signpost_scrollspy::ResolverConfig;

/// Sizing rules for the draggable sidebar handle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Initial width in pixels.
    pub width: f64,
    /// Narrowest width a drag can produce.
    pub min_width: f64,
    /// Widest width a drag can produce.
    pub max_width: f64,
    /// Releasing a drag whose unclamped width is below this collapses the panel.
    pub collapse_below: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 280.0,
            min_width: 200.0,
            max_width: 480.0,
            collapse_below: 120.0,
        }
    }
}

/// Configuration for [`DocNavigator`](crate::DocNavigator).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Observation threshold, throttle window, and anchor depth.
    pub resolver: ResolverConfig,
    /// Sidebar drag-handle sizing.
    pub panel: PanelConfig,
}

impl NavigatorConfig {
    /// Replaces the resolver configuration.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the panel configuration.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panel = panel;
        self
    }
}
