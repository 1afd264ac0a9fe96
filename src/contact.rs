//! Contact form to `mailto:` hand-off.
//!
//! The form never posts anywhere. Submission is turned into a compose request
//! for the visitor's mail client; delivery is out of our hands.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::effect::Effect;

/// Characters `encodeURIComponent` leaves alone besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Trimmed fields of one form submission; empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw field values.
    #[must_use]
    pub fn new(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Self {
        let field = |v: Option<&str>| v.map(str::trim).unwrap_or_default().to_owned();
        Self { name: field(name), email: field(email), message: field(message) }
    }

    /// Plain-text mail body, one line per present field.
    #[must_use]
    pub fn body(&self) -> String {
        let mut lines = Vec::with_capacity(5);
        if !self.name.is_empty() {
            lines.push(format!("Nombre: {}", self.name));
        }
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        if !self.message.is_empty() {
            lines.push(String::new());
            lines.push("Mensaje:".to_owned());
            lines.push(self.message.clone());
        }
        lines.join("\n")
    }

    /// The `mailto:` URL for this submission.
    #[must_use]
    pub fn mailto(&self, recipient: &str, subject: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(subject),
            encode_component(&self.body())
        )
    }

    /// Effects of submitting the form: a single navigation.
    #[must_use]
    pub fn submit(&self, recipient: &str, subject: &str) -> Vec<Effect> {
        vec![Effect::Navigate(self.mailto(recipient, subject))]
    }
}
