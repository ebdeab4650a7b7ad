#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn anchor_target_skips_bare_and_missing() {
    assert_eq!(anchor_target(None), None);
    assert_eq!(anchor_target(Some("")), None);
    assert_eq!(anchor_target(Some("#")), None);
}

#[test]
fn anchor_target_accepts_fragments() {
    assert_eq!(anchor_target(Some("#projects")), Some("#projects"));
    assert_eq!(anchor_target(Some("#a")), Some("#a"));
}

#[test]
fn offset_adds_gap_to_header() {
    let anchors = SmoothAnchors::new(AnchorConfig::default());
    assert_eq!(anchors.offset(Some(64.0)), 76.0);
    assert_eq!(anchors.offset(None), 0.0);
}

#[test]
fn scroll_top_accounts_for_current_scroll() {
    let anchors = SmoothAnchors::new(AnchorConfig::default());
    assert_eq!(anchors.scroll_top(500.0, 1000.0, Some(64.0)), 1424.0);
    assert_eq!(anchors.scroll_top(-200.0, 1000.0, None), 800.0);
}

#[test]
fn extra_offset_is_configurable() {
    let anchors = SmoothAnchors::new(AnchorConfig { extra_offset_px: 0.0 });
    assert_eq!(anchors.scroll_top(100.0, 0.0, Some(50.0)), 50.0);
}
