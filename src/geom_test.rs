#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn from_top_height_sets_bottom() {
    let r = Rect::from_top_height(40.0, 300.0);
    assert_eq!(r.bottom, 340.0);
    assert_eq!(r.height(), 300.0);
}

#[test]
fn spans_includes_top_edge() {
    assert!(Rect::new(80.0, 200.0).spans(80.0));
}

#[test]
fn spans_excludes_bottom_edge() {
    assert!(!Rect::new(0.0, 80.0).spans(80.0));
}

#[test]
fn stacked_boxes_never_share_a_line() {
    let upper = Rect::new(-400.0, 80.0);
    let lower = Rect::new(80.0, 900.0);
    assert!(!upper.spans(80.0));
    assert!(lower.spans(80.0));
}

#[test]
fn offset_moves_both_edges() {
    let r = Rect::new(10.0, 20.0).offset(500.0);
    assert_eq!(r, Rect::new(510.0, 520.0));
}
