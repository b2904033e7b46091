//! Dirty-flag save debouncing.
//!
//! State changes arrive in bursts (check out folds a break, writes a record
//! and resets the live state within one event), so snapshot saves are
//! coalesced: each change re-arms a deadline and the flush happens once the
//! burst quiets down. The last state before a quiescent period wins; there is
//! no transactional guarantee across a crash mid-write.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SaveDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SaveDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Marks the state dirty, pushing the flush deadline `delay` from `now`.
    pub fn mark_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn mark(&mut self) {
        self.mark_at(Instant::now());
    }

    /// Whether a flush is owed at `now`.
    pub fn due_at(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    pub fn due(&self) -> bool {
        self.due_at(Instant::now())
    }

    /// Whether any unsaved change is pending, due or not.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears the pending flush after a successful save.
    pub fn clear(&mut self) {
        self.deadline = None;
    }
}
