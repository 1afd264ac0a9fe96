//! Page behavior controller for the A14 Studio landing page.
//!
//! This crate is compiled to WebAssembly and loaded by the page as an ES
//! module, so it starts after the document has been parsed. Each behavior is a
//! small state core that turns an event into a list of [`effect::Effect`]s;
//! the [`dom`] host owns the browser side, wiring listeners and applying those
//! effects. Every behavior activates only when its markup is present.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | Header elevation and the `--header-h` layout variable |
//! | [`nav`] | Mobile navigation toggle and scroll lock |
//! | [`filter`] | Portfolio category filters |
//! | [`reveal`] | One-shot scroll reveal animations |
//! | [`anchor`] | Deferred focus after in-page navigation |
//! | [`theme`] | Persisted light/dark theme toggle |
//! | [`contact`] | Contact form to `mailto:` hand-off |
//! | [`links`] | Placeholder WhatsApp link rewriting |
//! | [`effect`] | Side-effect vocabulary shared by the cores |
//! | [`lifecycle`] | `readyState` handling for work tied to window `load` |
//! | [`dom`] | Browser host: element lookup, listeners, effect application |
//! | [`config`] | Deployment settings embedded in the page |
//! | [`error`] | Error types |
//! | [`consts`] | Thresholds, selectors and other fixed values |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod effect;
pub mod error;
pub mod filter;
pub mod header;
pub mod lifecycle;
pub mod links;
pub mod nav;
pub mod reveal;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::SiteConfig;

/// Module entry point: set up logging, read the config, wire the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        log::debug!("keeping existing logger: {err}");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; page behaviors disabled");
        return;
    };

    let config = SiteConfig::from_json_or_default(dom::config_text(&document).as_deref());
    log::set_max_level(config.log_level().to_level_filter());

    let page = dom::Page::resolve(window, document, config);
    page.install();
    log::info!("page behaviors ready");
}
