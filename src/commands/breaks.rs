use crate::libs::engine::Effect;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum BreakAction {
    Start,
    End,
}

#[derive(Debug, Args)]
pub struct BreakArgs {
    #[arg(value_enum, help = "Start or end the break")]
    action: BreakAction,
}

pub fn cmd(args: BreakArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;
    let outcome = match args.action {
        BreakAction::Start => tracker.start_break(),
        BreakAction::End => tracker.end_break(),
    };
    match outcome {
        Ok(Effect::BreakStarted { at }) => {
            msg_success!(Message::BreakStartedAt(at.format("%H:%M").to_string()));
        }
        Ok(Effect::BreakEnded { at, total_break }) => {
            msg_success!(Message::BreakEndedAt(
                at.format("%H:%M").to_string(),
                format_duration(&total_break)
            ));
        }
        Ok(_) => {}
        Err(err) => return super::report_rejection(err),
    }
    tracker.finish();
    Ok(())
}
