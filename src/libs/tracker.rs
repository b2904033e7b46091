//! Session façade tying the engine to storage.
//!
//! A [`Tracker`] owns the live attendance state (through the engine), the
//! daily record store, the snapshot file and the save debouncer. Commands go
//! through it exclusively: every mutation flows through the transition
//! engine, the matching record update happens in the same call, and a save is
//! scheduled. Persistence failures are logged and swallowed; the in-memory
//! state stays authoritative for the session; durability is best effort.

use crate::db::records::{DailyRecord, Records};
use crate::libs::activity::ActivityEntry;
use crate::libs::attendance::{break_duration, duration_to_hours, work_duration, AttendanceState, Phase};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::{Config, TrackerConfig};
use crate::libs::debounce::SaveDebouncer;
use crate::libs::engine::{AttendanceEvent, Effect, Engine};
use crate::libs::messages::Message;
use crate::libs::state_file::{StateFile, StateSnapshot};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Plain-data snapshot of the session for rendering.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub phase: Phase,
    pub checked_in_at: Option<NaiveDateTime>,
    pub worked: Duration,
    pub on_break: Duration,
    pub activity: Vec<ActivityEntry>,
}

pub struct Tracker<C: Clock> {
    clock: C,
    engine: Engine,
    records: Records,
    state_file: StateFile,
    debouncer: SaveDebouncer,
    config: TrackerConfig,
}

impl Tracker<SystemClock> {
    /// Opens the session against the wall clock, restoring persisted state.
    pub fn open() -> Result<Self> {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Tracker<C> {
    pub fn with_clock(clock: C) -> Result<Self> {
        let config = Config::read()?.tracker();
        let state_file = StateFile::new()?;

        // Load failure falls back to the checked-out defaults; durability is
        // best effort and must never block a session.
        let engine = match state_file.load() {
            Ok(Some(snapshot)) => {
                if !snapshot.is_checked_in && snapshot.start_time.is_some() {
                    msg_warning!(Message::StateRepaired);
                }
                Engine::from_state(snapshot.restore())
            }
            Ok(None) => Engine::new(),
            Err(err) => {
                msg_warning!(Message::StateLoadFailed(err.to_string()));
                Engine::new()
            }
        };

        let records = Records::new()?;
        let debouncer = SaveDebouncer::new(std::time::Duration::from_millis(config.save_debounce_ms));

        Ok(Self {
            clock,
            engine,
            records,
            state_file,
            debouncer,
            config,
        })
    }

    pub fn check_in(&mut self) -> Result<Effect> {
        self.apply(AttendanceEvent::CheckIn)
    }

    pub fn check_out(&mut self) -> Result<Effect> {
        self.apply(AttendanceEvent::CheckOut)
    }

    pub fn start_break(&mut self) -> Result<Effect> {
        self.apply(AttendanceEvent::BreakStart)
    }

    pub fn end_break(&mut self) -> Result<Effect> {
        self.apply(AttendanceEvent::BreakEnd)
    }

    /// Runs one event through the engine and mirrors the effect into today's
    /// record. The engine rejecting the event leaves both untouched.
    fn apply(&mut self, event: AttendanceEvent) -> Result<Effect> {
        let now = self.clock.now();
        let effect = self.engine.apply(event, now)?;
        let today = now.date();

        match effect {
            Effect::CheckedIn { at } => {
                self.records.apply_check_in(today, at.time())?;
            }
            Effect::CheckedOut { at, worked, on_break } => {
                self.records.apply_check_out(
                    today,
                    at.time(),
                    duration_to_hours(worked),
                    duration_to_hours(on_break),
                    self.config.full_day_hours,
                )?;
            }
            Effect::BreakStarted { .. } => {
                self.records.ensure_today(today)?;
            }
            Effect::BreakEnded { total_break, .. } => {
                self.records.apply_break_total(today, duration_to_hours(total_break))?;
            }
        }

        self.debouncer.mark();
        Ok(effect)
    }

    pub fn state(&self) -> &AttendanceState {
        self.engine.state()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn status(&self) -> StatusReport {
        let now = self.clock.now();
        let state = self.engine.state();
        StatusReport {
            phase: state.phase(),
            checked_in_at: state.start_time,
            worked: work_duration(state, now),
            on_break: break_duration(state, now),
            activity: self.engine.log().iter().cloned().collect(),
        }
    }

    /// All records, newest first, with today's row created and refreshed.
    pub fn daily_records(&mut self) -> Result<Vec<DailyRecord>> {
        self.records.ensure_today(self.clock.today())?;
        self.refresh_live()?;
        self.records.fetch_all()
    }

    /// Records of the month containing `date`, today refreshed when in range.
    pub fn records_for_month(&mut self, date: NaiveDate) -> Result<Vec<DailyRecord>> {
        self.records.ensure_today(self.clock.today())?;
        self.refresh_live()?;
        self.records.fetch_month(date)
    }

    pub fn records_for_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyRecord>> {
        self.records.ensure_today(self.clock.today())?;
        self.refresh_live()?;
        self.records.fetch_range(from, to)
    }

    /// Rewrites today's running totals while checked in; a no-op otherwise.
    pub fn refresh_live(&mut self) -> Result<()> {
        let state = self.engine.state();
        if !state.is_checked_in {
            return Ok(());
        }
        let now = self.clock.now();
        let worked = duration_to_hours(work_duration(state, now));
        let on_break = duration_to_hours(break_duration(state, now));
        self.records.refresh_live(now.date(), worked, on_break)
    }

    /// Re-reads the snapshot so a long-running loop follows changes made
    /// from another terminal (a checkout, a break toggled elsewhere).
    pub fn sync_from_disk(&mut self) {
        if let Ok(Some(snapshot)) = self.state_file.load() {
            self.engine = Engine::from_state(snapshot.restore());
        }
    }

    /// One watch-loop step: refresh the open record and flush if the
    /// debounce deadline has passed.
    pub fn tick(&mut self) -> Result<()> {
        self.refresh_live()?;
        if self.debouncer.due() {
            self.flush();
        }
        Ok(())
    }

    /// Saves the state snapshot. Failures are logged, never propagated: the
    /// session already reflects the change and durability is best effort.
    pub fn flush(&mut self) {
        let snapshot = StateSnapshot::capture(self.engine.state());
        match self.state_file.save(&snapshot) {
            Ok(()) => {
                self.debouncer.clear();
                msg_debug!("state snapshot saved");
            }
            Err(err) => {
                msg_warning!(Message::StateSaveFailed(err.to_string()));
            }
        }
    }

    /// Flushes any pending change; called before a command exits.
    pub fn finish(&mut self) {
        if self.debouncer.is_armed() {
            self.flush();
        }
    }
}
