//! `setInterval`-backed [`Scheduler`] using `gloo-timers`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;

use crate::dom::Scheduler;

/// Shared tick target, filled in once the owning component exists.
pub type TickTarget = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

#[derive(Default)]
pub struct IntervalScheduler {
    target: TickTarget,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot the tick callback is read from on every firing.
    pub fn target(&self) -> TickTarget {
        Rc::clone(&self.target)
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&mut self, period: Duration) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let target = Rc::clone(&self.target);
        Interval::new(millis, move || {
            let tick = target.borrow().clone();
            if let Some(tick) = tick {
                tick();
            }
        })
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle.cancel());
    }
}
