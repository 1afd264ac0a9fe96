//! Rewrites placeholder WhatsApp links to the configured number.
//!
//! Links are authored as `https://wa.me/XXXXXXXXXXX?text=...` and pointed at
//! the real number once the page loads. Each link is rewritten on its own; a
//! malformed one is left as authored and does not stop the rest.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use url::Url;

use crate::consts::{WHATSAPP_BASE, WHATSAPP_PLACEHOLDER};
use crate::error::SiteError;

/// Whether `href` is an unconfigured messaging link.
#[must_use]
pub fn is_placeholder(href: &str) -> bool {
    href.contains(WHATSAPP_PLACEHOLDER)
}

/// Destination for a placeholder link, keeping its pre-filled `text`.
pub fn rewrite_href(href: &str, number: &str) -> Result<String, SiteError> {
    if number.is_empty() {
        return Err(SiteError::EmptyNumber);
    }
    let original = Url::parse(href)?;
    let mut rewritten = Url::parse(WHATSAPP_BASE)?.join(number)?;
    let text = original
        .query()
        .and_then(|q| q.split('&').find(|pair| pair.starts_with("text=")));
    rewritten.set_query(text);
    Ok(rewritten.into())
}

/// Rewrite every placeholder in `hrefs`, returning `(index, new_href)` for
/// the links that changed.
pub fn rewrite_all<'a, I>(hrefs: I, number: &str) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_placeholder(href))
        .filter_map(|(i, href)| match rewrite_href(href, number) {
            Ok(next) => Some((i, next)),
            Err(err) => {
                log::warn!("leaving messaging link {href:?} unchanged: {err}");
                None
            }
        })
        .collect()
}
