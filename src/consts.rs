//! Shared constants: DOM contract names, colours, thresholds and delays.

// ── DOM contract ────────────────────────────────────────────────

/// Added to the root element so CSS can tell scripting is active.
pub const JS_CLASS: &str = "js";

/// Marks a fade element as armed (enables the CSS transition).
pub const FADE_READY_CLASS: &str = "fade-ready";

/// Marks a fade element as currently shown.
pub const VISIBLE_CLASS: &str = "visible";

/// Inverse (dark background) marker on the header.
pub const HEADER_INVERSE_CLASS: &str = "header--inverse";

/// Attribute carrying a section's header theme tag.
pub const THEME_ATTRIBUTE: &str = "data-header-theme";

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "page-motion-config";

// ── Colours ─────────────────────────────────────────────────────

/// Header text colour over dark sections.
pub const LIGHT_TEXT_COLOR: &str = "#fbf9f5";

/// Header text colour over light sections.
pub const DARK_TEXT_COLOR: &str = "#120f08";

// ── Fade ────────────────────────────────────────────────────────

/// Minimum visible fraction for an element to count as intersecting.
pub const FADE_THRESHOLD: f64 = 0.1;

/// Observer root margin; `"50px"` pre-triggers before the element enters.
pub const FADE_ROOT_MARGIN: &str = "0px";

// ── Layout ──────────────────────────────────────────────────────

/// Widest viewport, in CSS pixels, that gets the fixed hero height.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset below which the first themed section may apply without spanning the header.
pub const TOP_OF_PAGE_PX: f64 = 100.0;

// ── Delays ──────────────────────────────────────────────────────

/// Delay before re-sizing the hero after start and after orientation changes.
pub const HERO_RESIZE_DELAY_MS: u32 = 100;

/// Upper bound on the readiness gate before persistent elements are revealed.
pub const REVEAL_TIMEOUT_MS: u32 = 2000;

/// Animation frames awaited before the first reveal.
pub const REVEAL_FRAMES: u32 = 1;
