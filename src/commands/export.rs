//! Export attendance records to CSV or JSON.

use crate::db::records::DailyRecord;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, help = "Output format")]
    format: ExportFormat,
    #[arg(long, short, help = "Restrict to one month (YYYY-MM)")]
    month: Option<String>,
    #[arg(long, short, help = "Output file path")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;
    let records = match args.month.as_deref() {
        None => tracker.daily_records()?,
        Some(selector) => {
            let date = NaiveDate::parse_from_str(&format!("{}-01", selector), "%Y-%m-%d")?;
            tracker.records_for_month(date)?
        }
    };
    tracker.finish();

    if records.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| default_path(args.format));
    match args.format {
        ExportFormat::Csv => write_csv(&path, &records)?,
        ExportFormat::Json => write_json(&path, &records)?,
    }

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}

fn default_path(format: ExportFormat) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("attendance-{}.{}", stamp, format.extension()))
}

fn write_csv(path: &PathBuf, records: &[DailyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "check_in", "check_out", "work_hours", "break_hours", "status"])?;
    for record in records {
        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record
                .check_in
                .map_or_else(String::new, |t| t.format("%H:%M:%S").to_string()),
            record
                .check_out
                .map_or_else(String::new, |t| t.format("%H:%M:%S").to_string()),
            format!("{:.2}", record.work_hours),
            format!("{:.2}", record.break_hours),
            record.status.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &PathBuf, records: &[DailyRecord]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}
