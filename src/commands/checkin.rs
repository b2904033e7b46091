use crate::libs::engine::Effect;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut tracker = Tracker::open()?;
    match tracker.check_in() {
        Ok(Effect::CheckedIn { at }) => {
            msg_success!(Message::CheckedInAt(at.format("%H:%M").to_string()));
        }
        Ok(_) => {}
        Err(err) => return super::report_rejection(err),
    }
    tracker.finish();
    Ok(())
}
