use proptest::prelude::*;

use super::*;

fn aria_expanded(effects: &[Effect], target: Target) -> Option<&str> {
    effects.iter().find_map(|e| match e {
        Effect::SetAttribute { target: t, name: "aria-expanded", value } if *t == target => Some(value.as_str()),
        _ => None,
    })
}

fn menu_open(effects: &[Effect]) -> Option<bool> {
    effects.iter().find_map(|e| match e {
        Effect::ToggleClass { target: Target::Body, class: "menu-open", on } => Some(*on),
        _ => None,
    })
}

#[test]
fn init_collapses_without_touching_body() {
    let mut nav = NavState { expanded: true };
    let effects = nav.init();
    assert!(!nav.expanded);
    assert_eq!(aria_expanded(&effects, Target::Nav), Some("false"));
    assert_eq!(aria_expanded(&effects, Target::NavToggle), Some("false"));
    assert_eq!(menu_open(&effects), None);
}

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut nav = NavState::new();
    let effects = nav.toggle();
    assert!(nav.expanded);
    assert_eq!(aria_expanded(&effects, Target::Nav), Some("true"));
    assert_eq!(aria_expanded(&effects, Target::NavToggle), Some("true"));
    assert_eq!(menu_open(&effects), Some(true));
    assert_eq!(effects.last(), Some(&Effect::RecomputeHeaderHeight));
}

#[test]
fn toggle_twice_closes() {
    let mut nav = NavState::new();
    nav.toggle();
    let effects = nav.toggle();
    assert!(!nav.expanded);
    assert_eq!(menu_open(&effects), Some(false));
}

#[test]
fn link_click_on_mobile_collapses() {
    let mut nav = NavState::new();
    nav.toggle();
    let effects = nav.on_link_click(860.0);
    assert!(!nav.expanded);
    assert_eq!(aria_expanded(&effects, Target::Nav), Some("false"));
    assert_eq!(menu_open(&effects), Some(false));
    assert!(effects.contains(&Effect::RecomputeHeaderHeight));
}

#[test]
fn link_click_on_desktop_is_ignored() {
    let mut nav = NavState { expanded: true };
    assert!(nav.on_link_click(861.0).is_empty());
    assert!(nav.expanded);
}

#[test]
fn resize_to_mobile_keeps_state() {
    let mut nav = NavState::new();
    nav.toggle();
    assert!(nav.on_resize(500.0).is_empty());
    assert!(nav.expanded);
}

#[test]
fn resize_to_desktop_closes_even_when_already_closed() {
    let mut nav = NavState::new();
    let effects = nav.on_resize(1280.0);
    assert!(!nav.expanded);
    assert_eq!(menu_open(&effects), Some(false));
}

proptest! {
    #[test]
    fn desktop_resize_always_collapses(width in 860.001f64..5000.0, opened in any::<bool>()) {
        let mut nav = NavState { expanded: opened };
        let effects = nav.on_resize(width);
        prop_assert!(!nav.expanded);
        prop_assert_eq!(aria_expanded(&effects, Target::Nav), Some("false"));
        prop_assert_eq!(menu_open(&effects), Some(false));
    }
}
