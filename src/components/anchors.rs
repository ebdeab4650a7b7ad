//! In-page anchor scrolling that clears the sticky header.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use crate::config::AnchorConfig;

/// Fragment selector for an in-page link, or `None` when the browser's
/// default handling should apply (`#`, empty, or missing `href`).
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    href.filter(|id| id.len() > 1 && id.starts_with('#'))
}

#[derive(Debug, Clone)]
pub struct SmoothAnchors {
    config: AnchorConfig,
}

impl SmoothAnchors {
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Pixels to keep clear above the target. Zero without a header.
    pub fn offset(&self, header_height: Option<f64>) -> f64 {
        header_height.map_or(0.0, |h| h + self.config.extra_offset_px)
    }

    /// Document-relative scroll position for a target whose viewport top is
    /// `target_top` while the page is scrolled to `scroll_y`.
    pub fn scroll_top(&self, target_top: f64, scroll_y: f64, header_height: Option<f64>) -> f64 {
        target_top + scroll_y - self.offset(header_height)
    }
}
