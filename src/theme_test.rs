use super::*;

const HEADER: f64 = 80.0;

fn section(tag: &str, top: f64, bottom: f64) -> ThemedSection {
    ThemedSection::new(HeaderTheme::parse(tag), Rect::new(top, bottom))
}

// --- parsing ---

#[test]
fn parse_known_tags() {
    assert_eq!(HeaderTheme::parse("dark"), Some(HeaderTheme::Dark));
    assert_eq!(HeaderTheme::parse("light"), Some(HeaderTheme::Light));
    assert_eq!(HeaderTheme::parse(" dark "), Some(HeaderTheme::Dark));
}

#[test]
fn parse_unknown_tag_is_none() {
    assert_eq!(HeaderTheme::parse("sepia"), None);
    assert_eq!(HeaderTheme::parse(""), None);
    assert_eq!(HeaderTheme::parse("Dark"), None);
}

#[test]
fn as_str_matches_attribute_values() {
    assert_eq!(HeaderTheme::Dark.as_str(), "dark");
    assert_eq!(HeaderTheme::Light.as_str(), "light");
}

// --- style ---

#[test]
fn dark_theme_inverts_with_light_text() {
    let style = HeaderTheme::Dark.style();
    assert!(style.inverse);
    assert_eq!(style.color, "#fbf9f5");
}

#[test]
fn initial_color_is_light_text() {
    assert_eq!(initial_color(), "#fbf9f5");
    assert_eq!(initial_color(), HeaderTheme::Dark.style().color);
}

#[test]
fn light_theme_uses_dark_text() {
    let style = HeaderTheme::Light.style();
    assert!(!style.inverse);
    assert_eq!(style.color, "#120f08");
}

// --- resolution ---

#[test]
fn spanning_section_wins() {
    let sections = [section("dark", -900.0, -100.0), section("light", -100.0, 600.0), section("dark", 600.0, 1400.0)];
    assert_eq!(active_section(HEADER, &sections), Some(1));
    assert_eq!(resolve(HEADER, &sections, 900.0, 100.0), HeaderTheme::Light);
}

#[test]
fn dark_section_under_header_gives_dark() {
    let sections = [section("light", -900.0, 20.0), section("dark", 20.0, 700.0)];
    assert_eq!(resolve(HEADER, &sections, 900.0, 100.0), HeaderTheme::Dark);
}

#[test]
fn section_top_exactly_at_header_bottom_spans() {
    let sections = [section("light", -500.0, 80.0), section("dark", 80.0, 900.0)];
    assert_eq!(active_section(HEADER, &sections), Some(1));
}

#[test]
fn first_match_in_document_order_wins_on_overlap() {
    let sections = [section("dark", 0.0, 500.0), section("light", 40.0, 300.0)];
    assert_eq!(resolve(HEADER, &sections, 500.0, 100.0), HeaderTheme::Dark);
}

#[test]
fn unknown_tag_on_spanning_section_is_light() {
    let sections = [section("dark", -900.0, 0.0), section("sepia", 0.0, 900.0)];
    assert_eq!(resolve(HEADER, &sections, 0.0, 100.0), HeaderTheme::Light);
}

#[test]
fn near_top_without_span_uses_dark_first_section() {
    // Hero starts below the header, so nothing spans yet.
    let sections = [section("dark", 120.0, 900.0), section("light", 900.0, 1600.0)];
    assert_eq!(active_section(HEADER, &sections), None);
    assert_eq!(resolve(HEADER, &sections, 0.0, 100.0), HeaderTheme::Dark);
}

#[test]
fn near_top_with_light_first_section_is_light() {
    let sections = [section("light", 120.0, 900.0), section("dark", 900.0, 1600.0)];
    assert_eq!(resolve(HEADER, &sections, 40.0, 100.0), HeaderTheme::Light);
}

#[test]
fn fallback_ignored_once_scrolled_past_threshold() {
    let sections = [section("dark", 120.0, 900.0)];
    assert_eq!(resolve(HEADER, &sections, 100.0, 100.0), HeaderTheme::Light);
    assert_eq!(resolve(HEADER, &sections, 99.0, 100.0), HeaderTheme::Dark);
}

#[test]
fn no_sections_is_light() {
    assert_eq!(resolve(HEADER, &[], 0.0, 100.0), HeaderTheme::Light);
}

#[test]
fn resolving_twice_is_idempotent() {
    let sections = [section("light", -900.0, 20.0), section("dark", 20.0, 700.0)];
    let first = resolve(HEADER, &sections, 900.0, 100.0);
    let second = resolve(HEADER, &sections, 900.0, 100.0);
    assert_eq!(first, second);
    assert_eq!(first.style(), second.style());
}

// --- tracker ---

#[test]
fn tracker_reports_first_and_changed_themes_only() {
    let mut tracker = ThemeTracker::new();
    assert_eq!(tracker.current(), None);
    assert!(tracker.record(HeaderTheme::Dark));
    assert!(!tracker.record(HeaderTheme::Dark));
    assert!(tracker.record(HeaderTheme::Light));
    assert_eq!(tracker.current(), Some(HeaderTheme::Light));
}
