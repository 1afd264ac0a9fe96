//! Shared constants for the page behaviors.

// ── Header / navigation ─────────────────────────────────────────

/// Vertical scroll offset past which the header is elevated.
pub const ELEVATE_THRESHOLD_PX: f64 = 6.0;

/// Header height published when the element cannot be measured.
pub const HEADER_HEIGHT_FALLBACK_PX: f64 = 64.0;

/// Widest viewport still treated as mobile for the navigation menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 860.0;

/// CSS custom property on `<html>` carrying the header height.
pub const HEADER_HEIGHT_VAR: &str = "--header-h";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Elements that take part in scroll-triggered reveal.
pub const REVEAL_SELECTOR: &str = ".card, .work, .about-card, .steps li, .pay, .contact-form";

// ── Anchor focus ────────────────────────────────────────────────

/// Delay before focusing an anchor target, letting smooth scroll settle.
pub const FOCUS_DELAY_MS: u32 = 300;

// ── Filters ─────────────────────────────────────────────────────

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

// ── Messaging ───────────────────────────────────────────────────

/// Marker carried by unconfigured WhatsApp links.
pub const WHATSAPP_PLACEHOLDER: &str = "wa.me/XXXXXXXXXXX";

/// Base of the rewritten WhatsApp links.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

// ── Theme ───────────────────────────────────────────────────────

/// Icon shown while the dark theme is active (offers to switch to light).
pub const THEME_ICON_DARK: &str = "\u{2600}\u{fe0f}";

/// Icon shown while the light theme is active.
pub const THEME_ICON_LIGHT: &str = "\u{1f319}";
