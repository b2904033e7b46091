//! Live tracking loop.
//!
//! Ticks at the configured poll interval, rewriting today's running totals
//! and flushing the state snapshot whenever the debounce deadline passes.
//! The loop ends when the session is no longer checked in (another process
//! checked out) or on Ctrl-C, flushing once more on the way out.

use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use std::time::Duration;

pub async fn cmd() -> Result<()> {
    let mut tracker = Tracker::open()?;
    if !tracker.state().is_checked_in {
        msg_warning!(Message::WatchNotCheckedIn);
        return Ok(());
    }

    let interval = tracker.config().poll_interval_secs;
    msg_print!(Message::WatchStarted(interval));

    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                tracker.sync_from_disk();
                if !tracker.state().is_checked_in {
                    break;
                }
                tracker.tick()?;
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    tracker.finish();
    msg_print!(Message::WatchStopped);
    Ok(())
}
