//! Site tunables parsed from an optional inline JSON block.
//!
//! DESIGN
//! ======
//! Every section defaults to the values the stock page layout was tuned
//! against, so a page without `#site-config` behaves identically to one
//! that spells the defaults out. Pixel thresholds live here rather than in
//! component logic because they depend on the page's header and hero sizes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme-preference-v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub showcase: ShowcaseConfig,
    pub theme: ThemeConfig,
    pub header: HeaderConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub interval_ms: u64,
}

impl ShowcaseConfig {
    /// Rotation cadence. A zero interval is clamped to 1ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self { interval_ms: DEFAULT_ROTATION_INTERVAL_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned() }
    }
}

/// Layout-specific thresholds for the over-hero header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Header height assumed when the header cannot be measured.
    pub fallback_height_px: f64,
    /// Extra pixels shaved off the observer's top root margin.
    pub root_margin_extra_px: f64,
    /// How far below the header bottom the hero top may sit and still count.
    pub top_slack_px: f64,
    pub thresholds: Vec<f64>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            fallback_height_px: 64.0,
            root_margin_extra_px: 10.0,
            top_slack_px: 20.0,
            thresholds: vec![0.0, 0.01, 0.1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Gap kept between the sticky header and a scrolled-to section.
    pub extra_offset_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { extra_offset_px: 12.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.15 }
    }
}
