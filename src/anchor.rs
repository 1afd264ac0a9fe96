//! Focus management after in-page anchor navigation.
//!
//! A click on `a[href^="#"]` lets the browser smooth-scroll, then moves
//! keyboard focus to the target once the scroll has settled. Each click gets
//! its own [`TaskId`]; earlier tasks are left to fire, so the last one to
//! fire owns the final focus. Tasks can still be cancelled one at a time.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use std::collections::BTreeMap;

use crate::consts::FOCUS_DELAY_MS;
use crate::effect::{Effect, TaskId};

/// Element id named by an in-page `href` or location hash.
///
/// Returns `None` for anything that is not a non-empty `#fragment`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Pending deferred focus moves.
#[derive(Debug, Clone, Default)]
pub struct AnchorFocus {
    next_task: u32,
    pending: BTreeMap<TaskId, String>,
}

impl AnchorFocus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled tasks that have not fired yet.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `task` is scheduled and has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self, task: TaskId) -> bool {
        self.pending.contains_key(&task)
    }

    /// An in-page link was clicked. `target_exists` reports whether the
    /// document has an element with the fragment's id.
    pub fn on_click(&mut self, href: &str, target_exists: impl FnOnce(&str) -> bool) -> Vec<Effect> {
        let Some(id) = fragment_id(href) else {
            return Vec::new();
        };
        if !target_exists(id) {
            return Vec::new();
        }
        let task = TaskId(self.next_task);
        self.next_task = self.next_task.wrapping_add(1);
        self.pending.insert(task, id.to_owned());
        vec![Effect::ScheduleFocus { task, element_id: id.to_owned(), delay_ms: FOCUS_DELAY_MS }]
    }

    /// The delay for `task` elapsed.
    pub fn fire(&mut self, task: TaskId) -> Vec<Effect> {
        match self.pending.remove(&task) {
            Some(element_id) => vec![Effect::Focus { element_id }],
            None => Vec::new(),
        }
    }

    /// Drop a scheduled task before it fires.
    pub fn cancel(&mut self, task: TaskId) -> Vec<Effect> {
        match self.pending.remove(&task) {
            Some(_) => vec![Effect::CancelFocus(task)],
            None => Vec::new(),
        }
    }

    /// The page finished loading with `hash` in the location.
    #[must_use]
    pub fn on_load(hash: &str, target_exists: impl FnOnce(&str) -> bool) -> Vec<Effect> {
        match fragment_id(hash) {
            Some(id) if target_exists(id) => vec![Effect::ScrollIntoView { element_id: id.to_owned() }],
            _ => Vec::new(),
        }
    }
}
