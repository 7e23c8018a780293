#![allow(clippy::float_cmp)]

use super::*;

fn geometry(top: f64, height: f64) -> ScrollGeometry {
    ScrollGeometry {
        header_height: 80.0,
        viewport_height: 800.0,
        target: Rect::from_top_height(top, height),
        previous_bottom: None,
    }
}

// --- anchor filtering ---

#[test]
fn fragment_links_are_intercepted() {
    assert_eq!(anchor_target("#contact"), Some("#contact"));
}

#[test]
fn bare_hash_is_not_intercepted() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn empty_href_is_not_intercepted() {
    assert_eq!(anchor_target(""), None);
}

#[test]
fn non_fragment_links_are_not_intercepted() {
    assert_eq!(anchor_target("/about#team"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}

// --- previous section ---

#[test]
fn previous_section_is_the_one_before_the_target() {
    let sections = ["hero", "work", "contact"];
    assert_eq!(previous_section(&sections, &"contact"), Some(&"work"));
    assert_eq!(previous_section(&sections, &"work"), Some(&"hero"));
}

#[test]
fn first_section_has_no_previous() {
    assert_eq!(previous_section(&["hero", "work"], &"hero"), None);
}

#[test]
fn target_outside_the_section_list_has_no_previous() {
    assert_eq!(previous_section(&["hero", "work"], &"footer-link"), None);
    assert_eq!(previous_section::<&str>(&[], &"hero"), None);
}

// --- offsets ---

#[test]
fn fitting_target_lands_below_header() {
    let g = geometry(100.0, 300.0);
    let offset = scroll_offset(&g);
    assert_eq!(offset, 20.0);
    assert!(offset + 300.0 <= 800.0);
}

#[test]
fn fitting_target_is_clamped_to_viewport_height() {
    // 620 + 300 overshoots 800, so align the block's bottom instead.
    let g = geometry(700.0, 300.0);
    assert_eq!(scroll_offset(&g), 200.0);
}

#[test]
fn tall_target_aligns_top_with_header() {
    let g = geometry(1500.0, 900.0);
    assert_eq!(scroll_offset(&g), 1420.0);
}

#[test]
fn target_exactly_filling_available_height_counts_as_fitting() {
    let g = geometry(50.0, 720.0);
    // -30 + 720 < 800, no clamp; negative offset floors at zero.
    assert_eq!(scroll_offset(&g), 0.0);
}

#[test]
fn previous_section_is_scrolled_fully_away() {
    let mut g = geometry(1500.0, 900.0);
    g.previous_bottom = Some(1450.0);
    assert_eq!(scroll_offset(&g), 1450.0);
}

#[test]
fn previous_section_above_landing_does_not_move_it() {
    let mut g = geometry(1500.0, 900.0);
    g.previous_bottom = Some(1400.0);
    assert_eq!(scroll_offset(&g), 1420.0);
}

#[test]
fn offset_never_negative() {
    let g = geometry(10.0, 100.0);
    assert_eq!(scroll_offset(&g), 0.0);
}

#[test]
fn scroll_mode_defaults_to_manual() {
    assert_eq!(ScrollMode::default(), ScrollMode::Manual);
    let mode: ScrollMode = serde_json::from_str("\"native\"").unwrap();
    assert_eq!(mode, ScrollMode::Native);
}
