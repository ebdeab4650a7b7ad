//! Light/dark theme selection.
//!
//! Applies a `data-theme` attribute to the root element and persists the
//! choice under a single storage key. A stored `"light"`/`"dark"` wins;
//! otherwise the system color-scheme preference decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A rejected write (private browsing, quota)
//! still leaves the page themed for the current view; the error is logged
//! and dropped.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::dom::{Element, PreferenceStore};

const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolve the starting theme from a stored value and the system preference.
pub fn preferred_mode(stored: Option<&str>, system_prefers_light: bool) -> ThemeMode {
    stored.and_then(ThemeMode::parse).unwrap_or(if system_prefers_light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    })
}

pub struct ThemeController<E, P> {
    root: E,
    store: P,
    storage_key: String,
}

impl<E: Element, P: PreferenceStore> ThemeController<E, P> {
    pub fn new(root: E, store: P, storage_key: impl Into<String>) -> Self {
        Self { root, store, storage_key: storage_key.into() }
    }

    /// Apply whatever the store or system preference resolves to.
    pub fn init(&self, system_prefers_light: bool) -> ThemeMode {
        let stored = self.store.get(&self.storage_key);
        let mode = preferred_mode(stored.as_deref(), system_prefers_light);
        self.apply(mode);
        mode
    }

    /// Set `data-theme` and persist the choice, ignoring storage failures.
    pub fn apply(&self, mode: ThemeMode) {
        self.root.set_attribute(THEME_ATTRIBUTE, mode.as_str());
        if let Err(err) = self.store.set(&self.storage_key, mode.as_str()) {
            log::debug!("theme: preference not persisted: {err}");
        }
    }

    /// Flip the theme currently on the root element.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().map_or(ThemeMode::Dark, ThemeMode::flipped);
        self.apply(next);
        next
    }

    pub fn current(&self) -> Option<ThemeMode> {
        self.root.attribute(THEME_ATTRIBUTE).as_deref().and_then(ThemeMode::parse)
    }
}
