//! Monthly and weekly attendance summaries.

use crate::db::leaves::Leaves;
use crate::libs::messages::Message;
use crate::libs::summary::{week_start, SummaryCalculator};
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Include the current week's summary")]
    week: bool,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();

    let mut tracker = Tracker::open()?;
    let records = tracker.records_for_month(today)?;
    let monthly = records.monthly(today.year(), today.month());

    msg_print!(Message::MonthlySummaryTitle(now.format("%B, %Y").to_string()), true);
    View::monthly(&monthly)?;

    let leaves_taken = Leaves::new()?.approved_in_month(today)?;
    msg_print!(Message::LeavesTakenThisMonth(leaves_taken));

    if args.week {
        let start = week_start(today);
        let week_records = tracker.records_for_range(start, today)?;
        let weekly = week_records.weekly(start, tracker.config().weekly_target_hours);

        msg_print!(Message::WeeklySummaryTitle(start.format("%Y-%m-%d").to_string()), true);
        View::weekly(&weekly)?;
    }
    tracker.finish();

    Ok(())
}
