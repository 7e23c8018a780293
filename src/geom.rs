#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// Vertical extent of a box in CSS pixels.
///
/// Coordinates are viewport-relative, as reported by `getBoundingClientRect`,
/// unless a caller shifts them into document space with [`Rect::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Build from a top edge and a height.
    #[must_use]
    pub fn from_top_height(top: f64, height: f64) -> Self {
        Self { top, bottom: top + height }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the horizontal line at `y` passes through this box.
    ///
    /// The top edge is inclusive and the bottom edge exclusive, so two stacked
    /// boxes never both span the same line.
    #[must_use]
    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom > y
    }

    /// Shift the box down by `dy` (e.g. the scroll offset, to get document coordinates).
    #[must_use]
    pub fn offset(&self, dy: f64) -> Self {
        Self { top: self.top + dy, bottom: self.bottom + dy }
    }
}
