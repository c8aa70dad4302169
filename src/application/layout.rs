//! Adaptive layout signals consumed by the navigator.

use serde::{Deserialize, Serialize};

/// The two externally driven booleans that gate cross-pane substitution.
///
/// `cross_pane_enabled` comes from configuration and is fixed for the
/// session; `three_panes_visible` follows the current window size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveLayout {
    cross_pane_enabled: bool,
    three_panes_visible: bool,
}

impl AdaptiveLayout {
    pub fn new(cross_pane_enabled: bool) -> Self {
        Self {
            cross_pane_enabled,
            three_panes_visible: false,
        }
    }

    pub fn cross_pane_enabled(&self) -> bool {
        self.cross_pane_enabled
    }

    pub fn three_panes_visible(&self) -> bool {
        self.three_panes_visible
    }

    pub fn set_three_panes_visible(&mut self, visible: bool) {
        self.three_panes_visible = visible;
    }

    /// True only when both signals agree that three panes are on screen.
    pub fn cross_pane_active(&self) -> bool {
        self.cross_pane_enabled && self.three_panes_visible
    }
}

/// How many panes the host currently shows side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    SinglePane,
    TwoPane,
    ThreePane,
}

impl LayoutMode {
    pub fn pane_count(self) -> usize {
        match self {
            LayoutMode::SinglePane => 1,
            LayoutMode::TwoPane => 2,
            LayoutMode::ThreePane => 3,
        }
    }

    /// Maps a window width (terminal columns) to a mode. Three panes are
    /// only offered when the layout enables them.
    pub fn for_width(width: u16, thresholds: LayoutThresholds, three_pane_enabled: bool) -> Self {
        if three_pane_enabled && width >= thresholds.three_pane_min_width {
            LayoutMode::ThreePane
        } else if width >= thresholds.two_pane_min_width {
            LayoutMode::TwoPane
        } else {
            LayoutMode::SinglePane
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::SinglePane => "single pane",
            LayoutMode::TwoPane => "two panes",
            LayoutMode::ThreePane => "three panes",
        }
    }
}

/// Minimum widths at which the host switches to more panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutThresholds {
    pub two_pane_min_width: u16,
    pub three_pane_min_width: u16,
}

impl Default for LayoutThresholds {
    fn default() -> Self {
        Self {
            two_pane_min_width: 80,
            three_pane_min_width: 140,
        }
    }
}
