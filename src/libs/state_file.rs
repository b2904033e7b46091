//! Durable snapshot of the live attendance state.
//!
//! The snapshot is a small versioned JSON object stored in the platform data
//! directory. It is the source of truth on cold start; during a session the
//! in-memory state is authoritative and saves are best effort. Loading never
//! aborts startup: a malformed or inconsistent snapshot is clamped and
//! repaired into a usable state, and an unreadable file simply yields no
//! snapshot at all.

use crate::libs::attendance::AttendanceState;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const STATE_FILE_NAME: &str = "state.json";
pub const STATE_VERSION: u32 = 1;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

fn default_version() -> u32 {
    STATE_VERSION
}

/// Wire form of [`AttendanceState`]: timestamps as ISO-8601 strings, the
/// break accumulator as milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub is_checked_in: bool,
    pub start_time: Option<String>,
    pub is_on_break: bool,
    pub break_start_time: Option<String>,
    pub total_break_ms: i64,
}

impl StateSnapshot {
    pub fn capture(state: &AttendanceState) -> Self {
        Self {
            version: STATE_VERSION,
            is_checked_in: state.is_checked_in,
            start_time: state.start_time.map(format_timestamp),
            is_on_break: state.is_on_break,
            break_start_time: state.break_start_time.map(format_timestamp),
            total_break_ms: state.total_break_time.num_milliseconds(),
        }
    }

    /// Rebuilds the live state, repairing whatever the stored copy got wrong.
    ///
    /// Unparseable timestamps drop to `None`, a negative break accumulator
    /// clamps to zero and flag inconsistencies resolve through
    /// [`AttendanceState::sanitized`].
    pub fn restore(&self) -> AttendanceState {
        let state = AttendanceState {
            is_checked_in: self.is_checked_in,
            start_time: self.start_time.as_deref().and_then(parse_timestamp),
            is_on_break: self.is_on_break,
            break_start_time: self.break_start_time.as_deref().and_then(parse_timestamp),
            total_break_time: Duration::milliseconds(self.total_break_ms.max(0)),
        };
        state.sanitized()
    }
}

fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// File-backed persistence gateway for the state snapshot.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        Ok(Self { path })
    }

    pub fn save(&self, snapshot: &StateSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Loads the stored snapshot, if any.
    ///
    /// A missing file is a normal first start. A file that fails to parse is
    /// reported as an error for the caller to log; the session then begins
    /// from the checked-out defaults.
    pub fn load(&self) -> Result<Option<StateSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let snapshot: StateSnapshot = serde_json::from_str(&json)?;
        Ok(Some(snapshot))
    }
}
