//! In-page anchor scrolling.
//!
//! Anchor clicks are filtered with [`anchor_target`]; the landing offset is
//! computed by [`scroll_offset`] so the fixed header never covers the target
//! and the section before it is fully scrolled away.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::Deserialize;

use crate::geom::Rect;

/// How an intercepted anchor click scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    /// Compute the offset with [`scroll_offset`] and `scrollTo` it.
    #[default]
    Manual,
    /// Use the platform's `scrollIntoView` aligned to start.
    Native,
}

/// The selector an anchor `href` points at, if the click should be intercepted.
///
/// Only fragment links with a non-empty id qualify; a bare `#` or an empty
/// `href` keeps the browser's default behaviour.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}

/// Layout snapshot for one scroll computation.
///
/// Boxes are in document coordinates (viewport box shifted by the scroll offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub header_height: f64,
    pub viewport_height: f64,
    pub target: Rect,
    /// Bottom edge of the section preceding the target, when the target is a section.
    pub previous_bottom: Option<f64>,
}

/// The section directly before `target` in document order.
///
/// `None` when the target is the first section or not a section at all.
#[must_use]
pub fn previous_section<'a, T: PartialEq>(sections: &'a [T], target: &T) -> Option<&'a T> {
    let index = sections.iter().position(|section| section == target)?;
    index.checked_sub(1).and_then(|previous| sections.get(previous))
}

/// Document scroll offset that brings the target into view below the header.
#[must_use]
pub fn scroll_offset(geometry: &ScrollGeometry) -> f64 {
    let ScrollGeometry { header_height, viewport_height, target, previous_bottom } = *geometry;
    let available = viewport_height - header_height;
    let height = target.height();

    let mut position = target.top - header_height;
    if height <= available && position + height > viewport_height {
        position = target.bottom - viewport_height;
    }

    if let Some(previous_bottom) = previous_bottom {
        if position < previous_bottom {
            position = previous_bottom;
        }
    }

    position.max(0.0)
}
