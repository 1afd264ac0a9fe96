//! Site configuration embedded in the page.
//!
//! The page may carry a `<script type="application/json" id="site-config">`
//! block. Any field it omits keeps its default, so an absent block is the
//! same as `{}`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_CONTACT_EMAIL: &str = "a14studio.cba@gmail.com";
pub const DEFAULT_CONTACT_SUBJECT: &str = "Consulta desde la web A14 Studio";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5493510000000";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "a14_theme";
pub const DEFAULT_THEME_COLOR_LIGHT: &str = "#ff5a00";
pub const DEFAULT_THEME_COLOR_DARK: &str = "#0f1215";

/// Deployment settings for the page behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Recipient of the contact form's compose request.
    pub contact_email: String,
    /// Subject line of the compose request.
    pub contact_subject: String,
    /// Destination number for rewritten WhatsApp links.
    pub whatsapp_number: String,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Browser chrome color while the light theme is active.
    pub theme_color_light: String,
    /// Browser chrome color while the dark theme is active.
    pub theme_color_dark: String,
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_owned(),
            contact_subject: DEFAULT_CONTACT_SUBJECT.to_owned(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            theme_color_light: DEFAULT_THEME_COLOR_LIGHT.to_owned(),
            theme_color_dark: DEFAULT_THEME_COLOR_DARK.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from the embedded JSON text.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse configuration, logging and falling back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }

    /// The configured messaging number reduced to its digits.
    #[must_use]
    pub fn whatsapp_digits(&self) -> String {
        self.whatsapp_number.chars().filter(char::is_ascii_digit).collect()
    }

    /// Parsed log level, `Info` when unrecognized.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
