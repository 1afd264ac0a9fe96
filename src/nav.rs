//! Mobile navigation menu.
//!
//! The open flag is mirrored three ways: `aria-expanded` on `#nav` and on the
//! `.nav-toggle` button, and the `menu-open` class on `<body>` which the
//! stylesheet uses to lock background scrolling. The menu can never stay
//! open on a desktop-width viewport.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::MOBILE_BREAKPOINT_PX;
use crate::effect::{Effect, Target};

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state on load: collapsed.
    pub fn init(&mut self) -> Vec<Effect> {
        self.expanded = false;
        sync(false, false)
    }

    /// Flip the menu from the toggle button.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.expanded = !self.expanded;
        let mut effects = sync(self.expanded, true);
        effects.push(Effect::RecomputeHeaderHeight);
        effects
    }

    /// A link inside the menu was clicked.
    pub fn on_link_click(&mut self, viewport_width: f64) -> Vec<Effect> {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            return Vec::new();
        }
        self.expanded = false;
        let mut effects = sync(false, true);
        effects.push(Effect::RecomputeHeaderHeight);
        effects
    }

    /// The window was resized; desktop widths force the menu closed.
    pub fn on_resize(&mut self, viewport_width: f64) -> Vec<Effect> {
        if viewport_width <= MOBILE_BREAKPOINT_PX {
            return Vec::new();
        }
        self.expanded = false;
        sync(false, true)
    }
}

fn sync(expanded: bool, body: bool) -> Vec<Effect> {
    let mut effects = vec![
        Effect::aria(Target::Nav, "aria-expanded", expanded),
        Effect::aria(Target::NavToggle, "aria-expanded", expanded),
    ];
    if body {
        effects.push(Effect::ToggleClass { target: Target::Body, class: "menu-open", on: expanded });
    }
    effects
}
