//! In-memory element, scheduler, and store doubles for native tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::Duration;

use super::{Element, PreferenceStore, Scheduler, StorageError};

#[derive(Debug, Default)]
struct ElementState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
    text: String,
    focus_count: usize,
}

/// Shared-handle fake element. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_class(self, name: &str) -> Self {
        self.toggle_class(name, true);
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().style.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn focus_count(&self) -> usize {
        self.state.borrow().focus_count
    }

    pub fn is_hidden(&self) -> bool {
        self.attribute("hidden").is_some()
    }
}

impl Element for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.state.borrow().classes.contains(name)
    }

    fn toggle_class(&self, name: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        if on {
            state.classes.insert(name.to_owned());
        } else {
            state.classes.remove(name);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.style.remove(property);
        } else {
            state.style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.state.borrow_mut().text);
    }

    fn focus(&self) {
        self.state.borrow_mut().focus_count += 1;
    }
}

// =============================================================
// Virtual clock scheduler
// =============================================================

#[derive(Debug)]
struct ArmedTimer {
    id: u64,
    period_ms: u64,
    next_fire_ms: u64,
}

#[derive(Debug, Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    armed: Vec<ArmedTimer>,
    scheduled_total: usize,
}

/// Recurring-timer double driven by explicit clock advances.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of timers currently armed.
    pub fn live_count(&self) -> usize {
        self.clock.borrow().armed.len()
    }

    /// Total number of `schedule` calls so far.
    pub fn scheduled_total(&self) -> usize {
        self.clock.borrow().scheduled_total
    }

    /// Move the clock forward by `ms`, invoking `on_tick` once per due
    /// firing in time order. Returns the number of ticks delivered.
    pub fn advance_by(&self, ms: u64, mut on_tick: impl FnMut()) -> usize {
        let target = self.clock.borrow().now_ms + ms;
        let mut fired = 0;
        loop {
            {
                let mut guard = self.clock.borrow_mut();
                let clock = &mut *guard;
                let Some(due) = clock
                    .armed
                    .iter_mut()
                    .filter(|t| t.next_fire_ms <= target)
                    .min_by_key(|t| t.next_fire_ms)
                else {
                    clock.now_ms = target;
                    break;
                };
                let at = due.next_fire_ms;
                due.next_fire_ms += due.period_ms;
                clock.now_ms = at;
            }
            fired += 1;
            on_tick();
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(&mut self, period: Duration) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        clock.scheduled_total += 1;
        let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1);
        let next_fire_ms = clock.now_ms + period_ms;
        clock.armed.push(ArmedTimer { id, period_ms, next_fire_ms });
        TimerId(id)
    }

    fn cancel(&mut self, handle: TimerId) {
        self.clock.borrow_mut().armed.retain(|t| t.id != handle.0);
    }
}

// =============================================================
// Preference store
// =============================================================

/// Map-backed store; `failing()` rejects every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { reject_writes: true, ..Self::default() }
    }

    pub fn with(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
