use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tracker = Tracker::open()?;
    let report = tracker.status();

    msg_print!(Message::StatusTitle, true);
    View::status(&report)?;
    if report.activity.is_empty() {
        msg_print!(Message::NoActivityYet);
    }

    Ok(())
}
