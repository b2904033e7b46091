//! Attendance session state and the pure duration calculator.
//!
//! [`AttendanceState`] is the single source of truth for the live session:
//! whether the user is checked in, when the session started, whether a break
//! is running and how much completed break time has accumulated. All derived
//! values (worked time, break time) are recomputed from these absolute
//! timestamps on every call, so display frequency has no effect on
//! correctness and no floating-point drift can build up.
//!
//! ## Invariants
//!
//! - `is_on_break` implies `is_checked_in` and a set `break_start_time`
//! - checked out implies all time fields cleared and a zero break accumulator
//! - `total_break_time` only holds *completed* breaks; an in-progress break
//!   is added on top for display and folded in at break end
//! - computed work duration is never negative, even if the wall clock moved

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Live state of the tracked work session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceState {
    pub is_checked_in: bool,
    pub start_time: Option<NaiveDateTime>,
    pub is_on_break: bool,
    pub break_start_time: Option<NaiveDateTime>,
    /// Accumulated duration of completed breaks within the current session.
    pub total_break_time: Duration,
}

impl Default for AttendanceState {
    fn default() -> Self {
        Self {
            is_checked_in: false,
            start_time: None,
            is_on_break: false,
            break_start_time: None,
            total_break_time: Duration::zero(),
        }
    }
}

/// The logical phase of the session, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CheckedOut,
    Working,
    OnBreak,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Phase::CheckedOut => "checked out",
            Phase::Working => "working",
            Phase::OnBreak => "on break",
        };
        write!(f, "{}", label)
    }
}

impl AttendanceState {
    pub fn phase(&self) -> Phase {
        if !self.is_checked_in {
            Phase::CheckedOut
        } else if self.is_on_break {
            Phase::OnBreak
        } else {
            Phase::Working
        }
    }

    /// Returns to the checked-out defaults, discarding the break accumulator.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Repairs a state that violates the struct invariants.
    ///
    /// A previously observed persisted state carried a `start_time` while
    /// `is_checked_in` was false; such a state is reset to the defaults.
    /// A break flag without a running session or a break start timestamp is
    /// cleared, and a negative break accumulator is clamped to zero.
    pub fn sanitized(mut self) -> Self {
        // Covers the observed corruption: start_time left behind after an
        // incomplete checkout write.
        if !self.is_checked_in || self.start_time.is_none() {
            return Self::default();
        }
        if self.is_on_break && self.break_start_time.is_none() {
            self.is_on_break = false;
        }
        if !self.is_on_break {
            self.break_start_time = None;
        }
        if self.total_break_time < Duration::zero() {
            self.total_break_time = Duration::zero();
        }
        self
    }
}

/// Computes the net work duration at `now`.
///
/// Returns zero when not checked in. Otherwise the elapsed time since
/// check-in minus the effective break time, clamped to zero.
pub fn work_duration(state: &AttendanceState, now: NaiveDateTime) -> Duration {
    if !state.is_checked_in {
        return Duration::zero();
    }
    let Some(start) = state.start_time else {
        return Duration::zero();
    };
    let elapsed = now.signed_duration_since(start);
    let on_break = break_duration(state, now);
    (elapsed - on_break).max(Duration::zero())
}

/// Total break time at `now`: completed breaks plus the running one, if any.
pub fn break_duration(state: &AttendanceState, now: NaiveDateTime) -> Duration {
    let mut total = state.total_break_time;
    if state.is_on_break {
        if let Some(break_start) = state.break_start_time {
            total += now.signed_duration_since(break_start);
        }
    }
    total.max(Duration::zero())
}

/// Converts a duration to fractional hours for record fields and summaries.
pub fn duration_to_hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 3_600_000.0
}
