//! Typed configuration.
//!
//! Every field has a default, so a page without a config element behaves like
//! the stock site. Pages can override any subset by embedding JSON:
//!
//! ```html
//! <script type="application/json" id="page-motion-config">
//!   { "fade": { "root_margin": "50px" }, "reveal_gate": { "wait_for_fonts": true } }
//! </script>
//! ```
//!
//! Parsing goes through [`Config::from_json`], which also validates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FADE_ROOT_MARGIN, FADE_THRESHOLD, HERO_RESIZE_DELAY_MS, MOBILE_BREAKPOINT_PX, REVEAL_FRAMES, REVEAL_TIMEOUT_MS,
    TOP_OF_PAGE_PX,
};
use crate::error::{Error, Result};
use crate::fade::PersistentPolicy;
use crate::scroll::ScrollMode;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fade: FadeConfig,
    pub reveal_gate: RevealGateConfig,
    pub hero: HeroConfig,
    pub header: HeaderConfig,
    pub scroll: ScrollConfig,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade: FadeConfig::default(),
            reveal_gate: RevealGateConfig::default(),
            hero: HeroConfig::default(),
            header: HeaderConfig::default(),
            scroll: ScrollConfig::default(),
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeConfig {
    pub selector: String,
    /// Fade elements matching any of these are persistent.
    pub persistent_selectors: Vec<String>,
    pub policy: PersistentPolicy,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            selector: ".fade".into(),
            persistent_selectors: vec![".hero.fade".into(), ".header.fade".into()],
            policy: PersistentPolicy::default(),
            threshold: FADE_THRESHOLD,
            root_margin: FADE_ROOT_MARGIN.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealGateConfig {
    /// Wait for `document.fonts.ready`.
    pub wait_for_fonts: bool,
    /// Animation frames to wait.
    pub animation_frames: u32,
    /// Element that must render (non-zero box and opacity) before the reveal.
    pub headline_selector: Option<String>,
    /// Upper bound on the fonts/frames/headline wait.
    pub timeout_ms: u32,
    /// Extra delay after the wait resolves.
    pub settle_ms: u32,
}

impl Default for RevealGateConfig {
    fn default() -> Self {
        Self {
            wait_for_fonts: false,
            animation_frames: REVEAL_FRAMES,
            headline_selector: None,
            timeout_ms: REVEAL_TIMEOUT_MS,
            settle_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub selector: String,
    pub breakpoint_px: f64,
    /// Delay for the follow-up sizing after start and orientation changes.
    pub resize_delay_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            selector: ".hero:not(.legal)".into(),
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            resize_delay_ms: HERO_RESIZE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub selector: String,
    pub section_selector: String,
    pub label_selector: String,
    pub contact_selector: String,
    pub top_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header".into(),
            section_selector: "[data-header-theme]".into(),
            label_selector: ".header__label".into(),
            contact_selector: ".header__contact".into(),
            top_threshold_px: TOP_OF_PAGE_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub mode: ScrollMode,
    /// Elements considered page sections when clearing the previous one.
    pub section_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { mode: ScrollMode::default(), section_selector: "section".into() }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the type system does not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.fade.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(invalid("fade.threshold", format!("{threshold} is outside 0..=1")));
        }
        if self.fade.selector.trim().is_empty() {
            return Err(invalid("fade.selector", "must not be empty".into()));
        }
        if self.fade.root_margin.trim().is_empty() {
            return Err(invalid("fade.root_margin", "must not be empty".into()));
        }
        if !self.hero.breakpoint_px.is_finite() || self.hero.breakpoint_px < 0.0 {
            return Err(invalid("hero.breakpoint_px", format!("{} is not a width", self.hero.breakpoint_px)));
        }
        if !self.header.top_threshold_px.is_finite() {
            return Err(invalid("header.top_threshold_px", "must be finite".into()));
        }
        if self.log_filter().is_none() {
            return Err(invalid("log_level", format!("unknown level {:?}", self.log_level)));
        }
        Ok(())
    }

    /// The configured log level.
    #[must_use]
    pub fn log_filter(&self) -> Option<log::Level> {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "error" => Some(log::Level::Error),
            "warn" => Some(log::Level::Warn),
            "info" => Some(log::Level::Info),
            "debug" => Some(log::Level::Debug),
            "trace" => Some(log::Level::Trace),
            _ => None,
        }
    }
}

fn invalid(field: &'static str, reason: String) -> Error {
    Error::InvalidConfig { field, reason }
}
