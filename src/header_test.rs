#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn root_var(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|e| match e {
        Effect::SetRootVar { name, value } if *name == HEADER_HEIGHT_VAR => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn starts_flat() {
    let state = HeaderState::new();
    assert!(!state.elevated);
    assert_eq!(state.height_px, 64.0);
}

#[test]
fn threshold_is_exclusive() {
    let mut state = HeaderState::new();
    state.on_scroll(6.0);
    assert!(!state.elevated);
    state.on_scroll(6.5);
    assert!(state.elevated);
    state.on_scroll(0.0);
    assert!(!state.elevated);
}

#[test]
fn scroll_toggles_header_class() {
    let mut state = HeaderState::new();
    let effects = state.on_scroll(120.0);
    assert_eq!(effects, vec![Effect::ToggleClass { target: Target::Header, class: "is-elevated", on: true }]);
}

#[test]
fn scroll_is_idempotent() {
    let mut state = HeaderState::new();
    let first = state.on_scroll(40.0);
    let second = state.on_scroll(40.0);
    assert_eq!(first, second);
}

#[test]
fn measured_height_is_published() {
    let mut state = HeaderState::new();
    let effects = state.recompute_height(Some(88.0));
    assert_eq!(root_var(&effects), Some("88px"));
    assert_eq!(state.height_px, 88.0);
}

#[test]
fn unmeasurable_height_falls_back() {
    let mut state = HeaderState::new();
    for measured in [None, Some(0.0), Some(f64::NAN), Some(-3.0)] {
        let effects = state.recompute_height(measured);
        assert_eq!(root_var(&effects), Some("64px"), "measured {measured:?}");
    }
}

proptest! {
    #[test]
    fn elevated_iff_past_threshold(y in -100.0f64..10_000.0) {
        let mut state = HeaderState::new();
        let effects = state.on_scroll(y);
        prop_assert_eq!(state.elevated, y > 6.0);
        prop_assert_eq!(
            effects,
            vec![Effect::ToggleClass { target: Target::Header, class: "is-elevated", on: y > 6.0 }]
        );
    }
}
