use crate::db::leaves::{LeaveBalance, LeaveRequest};
use crate::db::records::DailyRecord;
use crate::libs::formatter::{format_duration, format_duration_hms, format_hours};
use crate::libs::summary::{MonthlySummary, WeeklySummary};
use crate::libs::tracker::StatusReport;
use anyhow::Result;
use prettytable::{row, Row, Table};

const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

pub struct View {}

impl View {
    pub fn status(report: &StatusReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["STATE", "SINCE", "WORKED", "ON BREAK"]);
        table.add_row(row![
            report.phase,
            report
                .checked_in_at
                .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string()),
            format_duration_hms(&report.worked),
            format_duration(&report.on_break)
        ]);
        table.printstd();

        if !report.activity.is_empty() {
            let mut feed = Table::new();
            feed.add_row(row!["RECENT ACTIVITY", "AT"]);
            for entry in &report.activity {
                feed.add_row(row![entry.event, entry.timestamp.format("%H:%M:%S")]);
            }
            feed.printstd();
        }

        Ok(())
    }

    pub fn records(records: &[DailyRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "CHECK IN", "CHECK OUT", "HOURS", "BREAK", "STATUS"]);
        for record in records {
            table.add_row(row![
                record.date.format("%Y-%m-%d"),
                record
                    .check_in
                    .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string()),
                record
                    .check_out
                    .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string()),
                format_hours(record.work_hours),
                format_hours(record.break_hours),
                record.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn monthly(summary: &MonthlySummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAYS WORKED", "TOTAL HOURS", "BREAK TIME", "ATTENDANCE"]);
        table.add_row(row![
            summary.days_worked,
            format_hours(summary.total_hours),
            format_hours(summary.total_break_hours),
            format!("{}%", summary.attendance_rate)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn weekly(summary: &WeeklySummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL HOURS", "BREAK TIME", "ATTENDANCE", "PRODUCTIVITY"]);
        table.add_row(row![
            format_hours(summary.total_hours),
            format_hours(summary.total_break_hours),
            format!("{}%", summary.attendance_rate),
            format!("{:.0}%", summary.productivity)
        ]);
        table.printstd();

        let mut pattern = Table::new();
        pattern.add_row(Row::from(WEEKDAYS));
        pattern.add_row(Row::from(summary.pattern.iter().map(|h| format_hours(*h))));
        pattern.printstd();

        Ok(())
    }

    pub fn leaves(requests: &[LeaveRequest]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TYPE", "FROM", "TO", "DAYS", "STATUS", "REASON"]);
        for request in requests {
            table.add_row(row![
                request.id,
                request.leave_type,
                request.start_date.format("%Y-%m-%d"),
                request.end_date.format("%Y-%m-%d"),
                request.days(),
                request.status,
                request.reason.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn balances(balances: &[LeaveBalance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TYPE", "TOTAL", "USED", "REMAINING"]);
        for balance in balances {
            table.add_row(row![balance.leave_type, balance.total, balance.used, balance.remaining]);
        }
        table.printstd();

        Ok(())
    }
}
