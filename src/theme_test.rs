use super::*;

fn state() -> ThemeState {
    ThemeState::new(ThemePalette::from(&SiteConfig::default()))
}

fn root_theme(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|e| match e {
        Effect::SetAttribute { target: Target::Root, name: "data-theme", value } => Some(value.as_str()),
        _ => None,
    })
}

fn persisted(effects: &[Effect]) -> Vec<(&str, &str)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Persist { key, value } => Some((key.as_str(), value.as_str())),
            _ => None,
        })
        .collect()
}

#[test]
fn stored_values_parse_strictly() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("system")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn from_str_rejects_unknown() {
    assert_eq!("auto".parse::<Theme>(), Err(UnknownTheme("auto".into())));
}

#[test]
fn default_without_preference_is_light() {
    let mut theme = state();
    let effects = theme.init(None);
    assert_eq!(theme.current, Theme::Light);
    assert_eq!(root_theme(&effects), Some("light"));
    assert!(persisted(&effects).is_empty());
}

#[test]
fn apply_dark_updates_every_surface() {
    let mut theme = state();
    let effects = theme.apply(Theme::Dark);
    assert_eq!(
        effects,
        vec![
            Effect::SetAttribute { target: Target::Root, name: "data-theme", value: "dark".into() },
            Effect::aria(Target::ThemeToggle, "aria-pressed", true),
            Effect::SetText { target: Target::ThemeIcon, text: THEME_ICON_DARK.into() },
            Effect::SetAttribute { target: Target::ThemeMeta, name: "content", value: "#0f1215".into() },
            Effect::RecomputeHeaderHeight,
        ]
    );
}

#[test]
fn dark_then_light_restores_initial_surfaces() {
    let mut theme = state();
    let initial = theme.apply(Theme::Light);
    theme.apply(Theme::Dark);
    let restored = theme.apply(Theme::Light);
    assert_eq!(initial, restored);
}

#[test]
fn toggle_persists_then_applies_opposite() {
    let mut theme = state();
    let effects = theme.toggle(Some("light"));
    assert_eq!(effects.first(), Some(&Effect::Persist { key: "a14_theme".into(), value: "dark".into() }));
    assert_eq!(root_theme(&effects), Some("dark"));

    let effects = theme.toggle(Some("dark"));
    assert_eq!(persisted(&effects), vec![("a14_theme", "light")]);
    assert_eq!(theme.current, Theme::Light);
}

#[test]
fn toggle_from_missing_attribute_goes_dark() {
    let mut theme = state();
    let effects = theme.toggle(None);
    assert_eq!(persisted(&effects), vec![("a14_theme", "dark")]);
}

#[test]
fn persisted_value_tracks_last_toggle() {
    let mut theme = state();
    let mut attr = Theme::Light;
    let mut last = None;
    for _ in 0..5 {
        let effects = theme.toggle(Some(attr.as_str()));
        last = persisted(&effects).first().map(|(_, v)| (*v).to_owned());
        attr = theme.current;
    }
    assert_eq!(last.as_deref(), Some(theme.current.as_str()));
}

#[test]
fn custom_palette_is_used() {
    let config = SiteConfig { theme_color_dark: "#000000".into(), ..SiteConfig::default() };
    let mut theme = ThemeState::new(ThemePalette::from(&config));
    let effects = theme.apply(Theme::Dark);
    assert!(effects.contains(&Effect::SetAttribute {
        target: Target::ThemeMeta,
        name: "content",
        value: "#000000".into()
    }));
}
