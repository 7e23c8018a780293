#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Viewport height signals, in CSS pixels.
///
/// Mobile browsers disagree on which of these tracks the visible area while the
/// address bar collapses, so the hero uses the largest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// `window.innerWidth`.
    pub inner_width: f64,
    /// `window.innerHeight`.
    pub inner_height: f64,
    /// `window.visualViewport.height`, when the API exists.
    pub visual_height: Option<f64>,
    /// `document.documentElement.clientHeight`.
    pub client_height: f64,
}

impl ViewportMetrics {
    /// The most generous of the available height signals.
    #[must_use]
    pub fn tallest_height(&self) -> f64 {
        let visual = self.visual_height.unwrap_or(self.inner_height);
        self.inner_height.max(visual).max(self.client_height)
    }
}

/// What to do with the hero's inline height properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroSizing {
    /// Pin `height`, `min-height` and `max-height` to this many pixels.
    Fixed(f64),
    /// Clear all three so the stylesheet decides.
    Natural,
}

impl HeroSizing {
    /// Inline style value for all three properties; empty clears them.
    #[must_use]
    pub fn css_value(&self) -> String {
        match self {
            Self::Fixed(px) => format!("{px}px"),
            Self::Natural => String::new(),
        }
    }
}

/// Hero sizing for the given viewport. Viewports up to `breakpoint` wide count as mobile.
#[must_use]
pub fn hero_sizing(metrics: &ViewportMetrics, breakpoint: f64) -> HeroSizing {
    if metrics.inner_width <= breakpoint {
        HeroSizing::Fixed(metrics.tallest_height())
    } else {
        HeroSizing::Natural
    }
}
