//! Session activity feed.
//!
//! A bounded, most-recent-first log of accepted transitions. The capacity is
//! a display concern for the status view, not a correctness one.

use crate::libs::engine::AttendanceEvent;
use chrono::NaiveDateTime;
use std::collections::VecDeque;

/// Number of entries kept for the status feed.
pub const ACTIVITY_FEED_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub event: AttendanceEvent,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted transition, evicting the oldest entry when full.
    pub fn push(&mut self, event: AttendanceEvent, timestamp: NaiveDateTime) {
        self.entries.push_front(ActivityEntry { event, timestamp });
        self.entries.truncate(ACTIVITY_FEED_CAPACITY);
    }

    /// Entries ordered newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
