//! Error types for the page controller.
//!
//! Nothing here is ever surfaced to the visitor. Errors are logged and the
//! owning behavior degrades, so the rest of the page keeps working.

use wasm_bindgen::JsValue;

/// Failure inside a page behavior or while touching the DOM.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A DOM call returned a JavaScript exception.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// A required anchor element is not in the document.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// A link destination could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The configured messaging number has no digits.
    #[error("messaging number is empty")]
    EmptyNumber,
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let text = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(text)
    }
}

/// Failure while loading [`crate::config::SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded JSON block is not valid configuration.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
}
