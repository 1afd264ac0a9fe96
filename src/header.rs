//! Header elevation and the published header height.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::{ELEVATE_THRESHOLD_PX, HEADER_HEIGHT_FALLBACK_PX, HEADER_HEIGHT_VAR};
use crate::effect::{Effect, Target};

/// Presentational state of `.site-header`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    /// Whether the page has scrolled past the elevation threshold.
    pub elevated: bool,
    /// Last height written to `--header-h`.
    pub height_px: f64,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self { elevated: false, height_px: HEADER_HEIGHT_FALLBACK_PX }
    }
}

impl HeaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        self.elevated = scroll_y > ELEVATE_THRESHOLD_PX;
        vec![Effect::ToggleClass { target: Target::Header, class: "is-elevated", on: self.elevated }]
    }

    /// Publish the measured header height, or the fallback when the header
    /// is missing or reports no usable height.
    pub fn recompute_height(&mut self, measured: Option<f64>) -> Vec<Effect> {
        self.height_px = match measured {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => HEADER_HEIGHT_FALLBACK_PX,
        };
        vec![Effect::SetRootVar { name: HEADER_HEIGHT_VAR, value: format!("{}px", self.height_px) }]
    }
}
