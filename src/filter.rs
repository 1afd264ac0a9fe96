//! Portfolio category filters.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::FILTER_ALL;
use crate::effect::{Effect, Target};

/// Whether a card with `card_type` is shown under the `selected` filter.
///
/// A control without `data-filter` selects the cards without `data-type`.
#[must_use]
pub fn is_visible(selected: Option<&str>, card_type: Option<&str>) -> bool {
    selected == Some(FILTER_ALL) || selected == card_type
}

/// Filter controls and the cards they act on, captured at startup.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// `data-filter` of each `.filter` control, in document order.
    pub filters: Vec<Option<String>>,
    /// `data-type` of each `.work` card, in document order.
    pub cards: Vec<Option<String>>,
    /// Index of the active control, once one has been clicked.
    pub active: Option<usize>,
}

impl FilterState {
    #[must_use]
    pub fn new(filters: Vec<Option<String>>, cards: Vec<Option<String>>) -> Self {
        Self { filters, cards, active: None }
    }

    /// Show or hide every card for `selected`.
    #[must_use]
    pub fn apply_filter(&self, selected: Option<&str>) -> Vec<Effect> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card_type)| {
                let display = if is_visible(selected, card_type.as_deref()) { "" } else { "none" };
                Effect::style(Target::Work(i), "display", display)
            })
            .collect()
    }

    /// A filter control was clicked.
    pub fn select(&mut self, index: usize) -> Vec<Effect> {
        let Some(selected) = self.filters.get(index).cloned() else {
            return Vec::new();
        };
        self.active = Some(index);

        let mut effects = Vec::with_capacity(self.filters.len() * 2 + self.cards.len());
        for i in 0..self.filters.len() {
            let on = i == index;
            effects.push(Effect::ToggleClass { target: Target::Filter(i), class: "is-active", on });
            effects.push(Effect::aria(Target::Filter(i), "aria-selected", on));
        }
        effects.extend(self.apply_filter(selected.as_deref()));
        effects
    }
}
