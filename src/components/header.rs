//! Transparent site header while it overlaps the hero section.
//!
//! An intersection observer watches the hero with a negative top root margin
//! roughly equal to the header height. The header is "over the hero" while
//! the hero is still intersecting and its top edge has not dropped more than
//! a small slack below the header's bottom edge.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::config::HeaderConfig;
use crate::dom::Element;

const OVER_HERO_CLASS: &str = "over-hero";

/// The fields of an `IntersectionObserverEntry` the predicate needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroObservation {
    pub is_intersecting: bool,
    pub intersection_height: f64,
    pub bounding_top: f64,
}

pub struct OverHeroHeader<E> {
    header: E,
    config: HeaderConfig,
}

impl<E: Element> OverHeroHeader<E> {
    pub fn new(header: E, config: HeaderConfig) -> Self {
        Self { header, config }
    }

    /// Observer `rootMargin`, e.g. `-74px 0px 0px 0px` for a 64px header.
    pub fn root_margin(&self, header_height: Option<f64>) -> String {
        let height = header_height.filter(|h| *h > 0.0).unwrap_or(self.config.fallback_height_px);
        format!("-{}px 0px 0px 0px", height + self.config.root_margin_extra_px)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.config.thresholds
    }

    pub fn is_over_hero(&self, obs: HeroObservation, header_height: f64) -> bool {
        obs.is_intersecting
            && obs.intersection_height > 0.0
            && obs.bounding_top <= header_height + self.config.top_slack_px
    }

    /// Reflect one observer entry onto the header's class list.
    pub fn observe(&self, obs: HeroObservation, header_height: f64) -> bool {
        let over = self.is_over_hero(obs, header_height);
        self.header.toggle_class(OVER_HERO_CLASS, over);
        over
    }
}
