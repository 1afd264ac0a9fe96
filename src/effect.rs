//! Side effects emitted by the behavior cores.
//!
//! Every core reacts to an event by mutating its own state and returning a
//! list of [`Effect`]s. The cores never touch the DOM; the host in
//! [`crate::dom`] applies the effects in order. This keeps the cores testable
//! without a browser.

/// Task handle for a deferred focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

/// An element the host resolved at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `<html>`.
    Root,
    /// `<body>`.
    Body,
    /// `.site-header`.
    Header,
    /// `#nav`.
    Nav,
    /// `.nav-toggle`.
    NavToggle,
    /// `#theme-toggle`.
    ThemeToggle,
    /// `.theme-ico` inside the theme toggle.
    ThemeIcon,
    /// `meta[name="theme-color"]`.
    ThemeMeta,
    /// The n-th `.filter` control.
    Filter(usize),
    /// The n-th `.work` card.
    Work(usize),
    /// The n-th element of the reveal set.
    Observed(usize),
}

/// A DOM side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove a class.
    ToggleClass { target: Target, class: &'static str, on: bool },
    /// Set an attribute.
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Set an inline style property; an empty value removes it.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Replace an element's text content.
    SetText { target: Target, text: String },
    /// Set a CSS custom property on the root element.
    SetRootVar { name: &'static str, value: String },
    /// Write a value to `localStorage`.
    Persist { key: String, value: String },
    /// Point the browser at a new location.
    Navigate(String),
    /// Focus `element_id` after `delay_ms`.
    ScheduleFocus { task: TaskId, element_id: String, delay_ms: u32 },
    /// Drop a scheduled focus move.
    CancelFocus(TaskId),
    /// Make `element_id` focusable and focus it without scrolling.
    Focus { element_id: String },
    /// Scroll `element_id` into view.
    ScrollIntoView { element_id: String },
    /// Stop observing the n-th reveal element.
    Unobserve(usize),
    /// Re-measure the header and republish its height.
    RecomputeHeaderHeight,
}

impl Effect {
    /// Shorthand for [`Effect::SetAttribute`] with a boolean string value.
    #[must_use]
    pub fn aria(target: Target, name: &'static str, value: bool) -> Self {
        Self::SetAttribute { target, name, value: value.to_string() }
    }

    /// Shorthand for [`Effect::SetStyle`].
    #[must_use]
    pub fn style(target: Target, property: &'static str, value: &str) -> Self {
        Self::SetStyle { target, property, value: value.to_owned() }
    }
}
