//! Rotating media showcase with interactive override.
//!
//! DESIGN
//! ======
//! Exactly one item is active at a time and its image/link are mirrored into
//! the preview. A recurring timer advances the selection while the section is
//! idle (`Running`); hovering or focusing the section cancels the timer
//! (`Paused`). A user selection always restarts the cadence from zero so a
//! stale tick cannot fire right after the click.
//!
//! The controller owns at most one live timer handle. Every path that arms a
//! timer cancels the previous one first.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use std::time::Duration;

use crate::dom::{Element, Scheduler};

const ACTIVE_CLASS: &str = "active";
const CALLOUT_CLASS: &str = "callout";
const PLACEHOLDER_LINK: &str = "#";

/// One selectable entry, aligned by index with its DOM element.
#[derive(Debug, Clone)]
pub struct ShowcaseItem<E> {
    pub element: E,
    pub image_source: Option<String>,
    pub link_target: Option<String>,
    pub is_active_initially: bool,
}

impl<E: Element> ShowcaseItem<E> {
    /// Read `data-image`, `data-link`, and the `active` marker off `element`.
    pub fn from_element(element: E) -> Self {
        let image_source = element.attribute("data-image").filter(|src| !src.is_empty());
        let link_target = element.attribute("data-link");
        let is_active_initially = element.has_class(ACTIVE_CLASS);
        Self { element, image_source, link_target, is_active_initially }
    }

    /// Link target usable for navigation: non-blank and not a bare `#`.
    pub fn usable_link(&self) -> Option<&str> {
        self.link_target
            .as_deref()
            .map(str::trim)
            .filter(|href| !href.is_empty() && *href != PLACEHOLDER_LINK)
    }
}

/// Auto-rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Running,
    Paused,
}

/// Whether a `KeyboardEvent.key` value counts as activating a focused item.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub struct ShowcaseController<E, S: Scheduler> {
    items: Vec<ShowcaseItem<E>>,
    image: E,
    link: Option<E>,
    scheduler: S,
    interval: Duration,
    active_index: usize,
    timer: Option<S::Handle>,
}

impl<E: Element, S: Scheduler> ShowcaseController<E, S> {
    /// Build the controller, show the starting item, and start rotating.
    ///
    /// Returns `None` when there are no items; the section is left untouched.
    pub fn new(items: Vec<ShowcaseItem<E>>, image: E, link: Option<E>, scheduler: S, interval: Duration) -> Option<Self> {
        if items.is_empty() {
            log::debug!("showcase: no items, staying inert");
            return None;
        }
        let start = items.iter().position(|item| item.is_active_initially).unwrap_or(0);
        let mut controller = Self { items, image, link, scheduler, interval, active_index: start, timer: None };
        controller.activate(index_as_isize(start));
        controller.resume();
        log::debug!("showcase: {} items, starting at {start}", controller.items.len());
        Some(controller)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ShowcaseItem<E>] {
        &self.items
    }

    pub fn state(&self) -> RotationState {
        if self.timer.is_some() { RotationState::Running } else { RotationState::Paused }
    }

    /// Make item `index` (wrapped into range, negatives included) the only
    /// active item and mirror it into the preview.
    pub fn activate(&mut self, index: isize) {
        let len = index_as_isize(self.items.len());
        if len == 0 {
            return;
        }
        self.active_index = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
        let item = &self.items[self.active_index];

        if let Some(src) = item.image_source.as_deref() {
            self.image.set_attribute("src", src);
        }

        if let Some(link) = &self.link {
            match item.usable_link() {
                Some(href) => {
                    link.set_attribute("href", href);
                    link.set_style("pointer-events", "");
                    link.set_attribute("aria-disabled", "false");
                }
                None => {
                    link.set_attribute("href", PLACEHOLDER_LINK);
                    link.set_style("pointer-events", "none");
                    link.set_attribute("aria-disabled", "true");
                }
            }
        }

        for (idx, item) in self.items.iter().enumerate() {
            let on = idx == self.active_index;
            item.element.toggle_class(ACTIVE_CLASS, on);
            item.element.toggle_class(CALLOUT_CLASS, on);
            item.element.set_attribute("aria-current", if on { "true" } else { "false" });
        }
    }

    /// Timer tick: move to the next item, wrapping at the end.
    pub fn advance(&mut self) {
        self.activate(index_as_isize(self.active_index) + 1);
    }

    /// User picked item `index` by click or keyboard.
    pub fn select(&mut self, index: usize) {
        self.activate(index_as_isize(index));
        self.resume();
    }

    /// Cancel the live timer, if any.
    pub fn pause(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Arm a fresh full-length timer, replacing any live one.
    pub fn resume(&mut self) {
        self.pause();
        self.timer = Some(self.scheduler.schedule(self.interval));
    }
}

fn index_as_isize(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
