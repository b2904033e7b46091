use crate::libs::engine::Effect;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut tracker = Tracker::open()?;
    match tracker.check_out() {
        Ok(Effect::CheckedOut { at, worked, .. }) => {
            msg_success!(Message::CheckedOutAt(
                at.format("%H:%M").to_string(),
                format_duration(&worked)
            ));
        }
        Ok(_) => {}
        Err(err) => return super::report_rejection(err),
    }
    tracker.finish();
    Ok(())
}
