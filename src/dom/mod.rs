//! Element, scheduler, and storage seams between components and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never query the document themselves. The boot code in
//! [`crate::web`] resolves element handles and passes them in, so every
//! component can run against [`fake`] handles in native tests.

#[cfg(test)]
pub(crate) mod fake;

use std::time::Duration;

/// Minimal mutable view of one DOM element.
///
/// Methods take `&self` because DOM handles are shared references with
/// interior mutability. Mutations are best-effort and never fail loudly.
pub trait Element {
    /// Current value of attribute `name`, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    fn has_class(&self, name: &str) -> bool;

    /// Add `name` when `on` is true, remove it otherwise.
    fn toggle_class(&self, name: &str, on: bool);

    /// Set an inline style property. An empty `value` clears it.
    fn set_style(&self, property: &str, value: &str);

    fn set_text(&self, text: &str);

    fn focus(&self);

    /// Set or clear the boolean `hidden` attribute.
    fn set_hidden(&self, hidden: bool) {
        if hidden {
            self.set_attribute("hidden", "");
        } else {
            self.remove_attribute("hidden");
        }
    }
}

/// Periodic callback facility with cancel support.
///
/// The tick target is bound when the scheduler is built; `schedule` only
/// arms a new recurring timer and hands back its handle.
pub trait Scheduler {
    type Handle;

    /// Start a recurring timer firing every `period`.
    fn schedule(&mut self, period: Duration) -> Self::Handle;

    /// Cancel a timer. No tick from `handle` fires after this returns.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Failure writing or reading a persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write for key {key}")]
    WriteRejected { key: String },
}

/// String key/value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Callers treat this as best-effort.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
