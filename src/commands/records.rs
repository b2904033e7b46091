//! Display daily attendance records.
//!
//! Shows every tracked day by default, newest first, or a single month with
//! `--month`. Today's row is created on demand and refreshed with the live
//! session totals before display.

use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[arg(long, short, help = "Restrict to one month (YYYY-MM or 'current')")]
    month: Option<String>,
}

pub fn cmd(args: RecordsArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;

    let (records, label) = match args.month.as_deref() {
        None => (tracker.daily_records()?, "all time".to_string()),
        Some(selector) => {
            let date = parse_month(selector)?;
            (tracker.records_for_month(date)?, date.format("%B %Y").to_string())
        }
    };
    tracker.finish();

    msg_print!(Message::RecordsTitle(label), true);
    if records.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }
    View::records(&records)?;

    Ok(())
}

/// Resolves a month selector to a date within that month.
fn parse_month(selector: &str) -> Result<NaiveDate> {
    if selector.eq_ignore_ascii_case("current") {
        return Ok(Local::now().date_naive());
    }
    Ok(NaiveDate::parse_from_str(&format!("{}-01", selector), "%Y-%m-%d")?)
}
