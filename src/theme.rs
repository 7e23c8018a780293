//! Header theme resolution.
//!
//! The fixed header takes its colours from whichever themed section currently
//! spans its bottom edge. Near the top of the page, before any section has
//! scrolled under the header, the first section may still claim the dark
//! theme so a dark hero starts with light header text.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_TEXT_COLOR, LIGHT_TEXT_COLOR};
use crate::geom::Rect;

/// Two-valued header theme, named after the section background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderTheme {
    Dark,
    #[default]
    Light,
}

impl HeaderTheme {
    /// Parse a `data-header-theme` value. Anything but `dark`/`light` is `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Classes and colours the header takes under this theme.
    #[must_use]
    pub fn style(self) -> HeaderStyle {
        match self {
            Self::Dark => HeaderStyle { inverse: true, color: LIGHT_TEXT_COLOR },
            Self::Light => HeaderStyle { inverse: false, color: DARK_TEXT_COLOR },
        }
    }
}

/// Text colour painted before the first resolution.
///
/// Matches the dark theme, so a dark hero does not flash dark header text
/// while the page loads.
#[must_use]
pub fn initial_color() -> &'static str {
    HeaderTheme::Dark.style().color
}

/// Header presentation derived from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Whether `header--inverse` is applied.
    pub inverse: bool,
    /// Text colour for the header and its label/contact children.
    pub color: &'static str,
}

/// A section carrying a header theme tag, with its current viewport box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemedSection {
    /// Parsed tag; `None` when the attribute holds an unrecognised value.
    pub theme: Option<HeaderTheme>,
    pub rect: Rect,
}

impl ThemedSection {
    #[must_use]
    pub fn new(theme: Option<HeaderTheme>, rect: Rect) -> Self {
        Self { theme, rect }
    }
}

/// Index of the first section (document order) spanning the header's bottom edge.
#[must_use]
pub fn active_section(header_height: f64, sections: &[ThemedSection]) -> Option<usize> {
    sections.iter().position(|s| s.rect.spans(header_height))
}

/// Resolve the header theme.
///
/// `scroll_y` is the window scroll offset and `top_threshold` the offset below
/// which the first section may apply without spanning the header.
#[must_use]
pub fn resolve(header_height: f64, sections: &[ThemedSection], scroll_y: f64, top_threshold: f64) -> HeaderTheme {
    if let Some(index) = active_section(header_height, sections) {
        return sections[index].theme.unwrap_or_default();
    }
    if scroll_y < top_threshold {
        if let Some(first) = sections.first() {
            if first.theme == Some(HeaderTheme::Dark) {
                return HeaderTheme::Dark;
            }
        }
    }
    HeaderTheme::Light
}

/// Tracks the last applied theme so changes can be reported.
#[derive(Debug, Default)]
pub struct ThemeTracker {
    current: Option<HeaderTheme>,
}

impl ThemeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<HeaderTheme> {
        self.current
    }

    /// Record a resolved theme. Returns `true` when it differs from the last one.
    pub fn record(&mut self, theme: HeaderTheme) -> bool {
        let changed = self.current != Some(theme);
        self.current = Some(theme);
        changed
    }
}
