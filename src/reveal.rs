//! Scroll-triggered reveal animations.
//!
//! Each observed element moves from `Pending` to `Revealed` exactly once per
//! page load. When the visitor prefers reduced motion, or the browser lacks
//! `IntersectionObserver`, the controller stays disabled and the elements
//! keep their default, visible styling.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::effect::{Effect, Target};

/// Lifecycle of one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Hidden and offset, waiting to enter the viewport.
    Pending,
    /// Shown; no longer observed.
    Revealed,
}

/// The fixed set of elements taking part in reveal.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    phases: Vec<RevealPhase>,
    armed: bool,
}

impl RevealSet {
    /// A set of `len` elements, not yet armed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { phases: vec![RevealPhase::Pending; len], armed: false }
    }

    /// Whether [`RevealSet::arm`] activated the controller.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[cfg(test)]
    pub(crate) fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    /// Put every element into its pending style, unless motion should be
    /// avoided or the observer primitive is missing.
    pub fn arm(&mut self, reduced_motion: bool, observer_available: bool) -> Vec<Effect> {
        if reduced_motion || !observer_available {
            self.armed = false;
            return Vec::new();
        }
        self.armed = true;
        let mut effects = Vec::with_capacity(self.phases.len() * 3);
        for (i, phase) in self.phases.iter_mut().enumerate() {
            *phase = RevealPhase::Pending;
            let target = Target::Observed(i);
            effects.push(Effect::style(target, "opacity", "0"));
            effects.push(Effect::style(target, "transform", "translateY(14px)"));
            effects.push(Effect::style(target, "transition", "opacity .5s ease, transform .5s ease"));
        }
        effects
    }

    /// An intersection entry arrived for element `index`.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        if !self.armed || !is_intersecting {
            return Vec::new();
        }
        let Some(phase) = self.phases.get_mut(index) else {
            return Vec::new();
        };
        if *phase == RevealPhase::Revealed {
            return Vec::new();
        }
        *phase = RevealPhase::Revealed;
        let target = Target::Observed(index);
        vec![
            Effect::style(target, "opacity", "1"),
            Effect::style(target, "transform", "translateY(0)"),
            Effect::Unobserve(index),
        ]
    }
}
