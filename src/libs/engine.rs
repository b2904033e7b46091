//! The attendance transition engine.
//!
//! A small state machine over [`AttendanceState`] with three logical phases
//! (checked out, working, on break) and four events. The engine owns the only
//! mutation path for the live state: every other component reads it. It has
//! no I/O; callers feed it an explicit `now` and act on the returned
//! [`Effect`] to update the record store and schedule persistence.
//!
//! | Phase      | Event      | Next       | Effect                              |
//! |------------|------------|------------|-------------------------------------|
//! | CheckedOut | CheckIn    | Working    | start time set, break fields clear  |
//! | Working    | BreakStart | OnBreak    | break start recorded                |
//! | OnBreak    | BreakEnd   | Working    | break folded into the accumulator   |
//! | Working    | CheckOut   | CheckedOut | final totals computed, state reset  |
//! | OnBreak    | CheckOut   | CheckedOut | implicit BreakEnd, then as above    |
//!
//! Any other combination is rejected with [`EngineError::InvalidTransition`]
//! and leaves the state untouched.

use crate::libs::activity::ActivityLog;
use crate::libs::attendance::{work_duration, AttendanceState, Phase};
use chrono::{Duration, NaiveDateTime};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceEvent {
    CheckIn,
    CheckOut,
    BreakStart,
    BreakEnd,
}

impl fmt::Display for AttendanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AttendanceEvent::CheckIn => "check in",
            AttendanceEvent::CheckOut => "check out",
            AttendanceEvent::BreakStart => "start a break",
            AttendanceEvent::BreakEnd => "end a break",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot {event} while {phase}")]
    InvalidTransition { event: AttendanceEvent, phase: Phase },
}

/// What an accepted transition did, for the owner to mirror into the
/// daily record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    CheckedIn {
        at: NaiveDateTime,
    },
    CheckedOut {
        at: NaiveDateTime,
        worked: Duration,
        on_break: Duration,
    },
    BreakStarted {
        at: NaiveDateTime,
    },
    BreakEnded {
        at: NaiveDateTime,
        total_break: Duration,
    },
}

#[derive(Debug, Default)]
pub struct Engine {
    state: AttendanceState,
    log: ActivityLog,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs the engine from a loaded state, repairing any
    /// inconsistency the persisted copy may carry.
    pub fn from_state(state: AttendanceState) -> Self {
        Self {
            state: state.sanitized(),
            log: ActivityLog::new(),
        }
    }

    pub fn state(&self) -> &AttendanceState {
        &self.state
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Applies one event at `now`, returning the effect or rejecting the
    /// event without any state change.
    pub fn apply(&mut self, event: AttendanceEvent, now: NaiveDateTime) -> Result<Effect, EngineError> {
        let phase = self.state.phase();
        let effect = match (phase, event) {
            (Phase::CheckedOut, AttendanceEvent::CheckIn) => {
                self.state = AttendanceState {
                    is_checked_in: true,
                    start_time: Some(now),
                    ..AttendanceState::default()
                };
                Effect::CheckedIn { at: now }
            }
            (Phase::Working, AttendanceEvent::BreakStart) => {
                self.state.is_on_break = true;
                self.state.break_start_time = Some(now);
                Effect::BreakStarted { at: now }
            }
            (Phase::OnBreak, AttendanceEvent::BreakEnd) => {
                self.fold_break(now);
                Effect::BreakEnded {
                    at: now,
                    total_break: self.state.total_break_time,
                }
            }
            (Phase::Working | Phase::OnBreak, AttendanceEvent::CheckOut) => {
                // A running break counts as ended at the checkout instant.
                if phase == Phase::OnBreak {
                    self.fold_break(now);
                }
                let worked = work_duration(&self.state, now);
                let on_break = self.state.total_break_time;
                self.state.reset();
                Effect::CheckedOut { at: now, worked, on_break }
            }
            _ => return Err(EngineError::InvalidTransition { event, phase }),
        };
        self.log.push(event, now);
        Ok(effect)
    }

    /// Moves the running break into the completed-break accumulator.
    fn fold_break(&mut self, now: NaiveDateTime) {
        if let Some(break_start) = self.state.break_start_time.take() {
            let span = now.signed_duration_since(break_start).max(Duration::zero());
            self.state.total_break_time += span;
        }
        self.state.is_on_break = false;
    }
}
