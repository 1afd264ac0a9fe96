//! Light/dark theme toggle.
//!
//! The preference is persisted under a single `localStorage` key and defaults
//! to light. Applying a theme always writes `data-theme` on `<html>` rather
//! than removing it, so the page never falls back to an unstyled state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::consts::{THEME_ICON_DARK, THEME_ICON_LIGHT};
use crate::effect::{Effect, Target};

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme from a stored or attribute value; anything unrecognized is light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            _ => Self::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Theme`] from a string other than
/// `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Storage key and browser chrome colors used by the toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePalette {
    pub storage_key: String,
    pub light_color: String,
    pub dark_color: String,
}

impl From<&SiteConfig> for ThemePalette {
    fn from(config: &SiteConfig) -> Self {
        Self {
            storage_key: config.theme_storage_key.clone(),
            light_color: config.theme_color_light.clone(),
            dark_color: config.theme_color_dark.clone(),
        }
    }
}

/// The applied theme.
#[derive(Debug, Clone)]
pub struct ThemeState {
    pub palette: ThemePalette,
    pub current: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(palette: ThemePalette) -> Self {
        Self { palette, current: Theme::Light }
    }

    /// Apply `mode` to the root attribute, toggle button, and theme-color meta.
    pub fn apply(&mut self, mode: Theme) -> Vec<Effect> {
        self.current = mode;
        let dark = mode == Theme::Dark;
        let (icon, color) = if dark {
            (THEME_ICON_DARK, &self.palette.dark_color)
        } else {
            (THEME_ICON_LIGHT, &self.palette.light_color)
        };
        vec![
            Effect::SetAttribute { target: Target::Root, name: "data-theme", value: mode.to_string() },
            Effect::aria(Target::ThemeToggle, "aria-pressed", dark),
            Effect::SetText { target: Target::ThemeIcon, text: icon.to_owned() },
            Effect::SetAttribute { target: Target::ThemeMeta, name: "content", value: color.clone() },
            Effect::RecomputeHeaderHeight,
        ]
    }

    /// Apply the stored preference at startup.
    pub fn init(&mut self, stored: Option<&str>) -> Vec<Effect> {
        self.apply(Theme::from_stored(stored))
    }

    /// The toggle was clicked while `<html>` carried `current_attr`.
    pub fn toggle(&mut self, current_attr: Option<&str>) -> Vec<Effect> {
        let next = Theme::from_stored(current_attr).opposite();
        let mut effects =
            vec![Effect::Persist { key: self.palette.storage_key.clone(), value: next.as_str().to_owned() }];
        effects.extend(self.apply(next));
        effects
    }
}
