//! Time source abstraction for the attendance engine.
//!
//! Every duration in the core is derived from absolute timestamps supplied by
//! a [`Clock`], never accumulated incrementally. Injecting the clock keeps the
//! transition engine and the duration math deterministic under test.

use chrono::{Local, NaiveDate, NaiveDateTime};
use parking_lot::Mutex;

/// Supplies the current instant to the attendance core.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually driven clock for tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        *self.now.lock() = instant;
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

// Lets a caller keep a handle on a shared clock it hands to the tracker.
impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> NaiveDateTime {
        self.as_ref().now()
    }
}
