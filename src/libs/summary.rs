//! Aggregation of daily records into period summaries.
//!
//! Pure calculations over slices of [`DailyRecord`]; empty inputs degrade to
//! all-zero summaries with no divide-by-zero.

use crate::db::records::DailyRecord;
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    /// Days classified present or partial.
    pub days_worked: usize,
    pub total_hours: f64,
    pub total_break_hours: f64,
    /// Percentage of tracked days that were worked, rounded.
    pub attendance_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySummary {
    pub total_hours: f64,
    pub total_break_hours: f64,
    /// Days worked against a five-day week, as a rounded percentage.
    pub attendance_rate: u32,
    /// Worked hours against the weekly target, capped at 100.
    pub productivity: f64,
    /// Worked hours per weekday, Monday first.
    pub pattern: [f64; 7],
}

pub trait SummaryCalculator {
    fn monthly(&self, year: i32, month: u32) -> MonthlySummary;
    fn weekly(&self, week_start: NaiveDate, target_hours: f64) -> WeeklySummary;
}

impl SummaryCalculator for [DailyRecord] {
    fn monthly(&self, year: i32, month: u32) -> MonthlySummary {
        let in_month: Vec<&DailyRecord> = self
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect();

        let days_worked = in_month.iter().filter(|r| r.status.is_worked()).count();
        let total_hours: f64 = in_month.iter().map(|r| r.work_hours).sum();
        let total_break_hours: f64 = in_month.iter().map(|r| r.break_hours).sum();
        let attendance_rate = rate(days_worked, in_month.len());

        MonthlySummary {
            days_worked,
            total_hours,
            total_break_hours,
            attendance_rate,
        }
    }

    fn weekly(&self, week_start: NaiveDate, target_hours: f64) -> WeeklySummary {
        let week_end = week_start + Duration::days(7);
        let in_week: Vec<&DailyRecord> = self
            .iter()
            .filter(|r| r.date >= week_start && r.date < week_end)
            .collect();

        let total_hours: f64 = in_week.iter().map(|r| r.work_hours).sum();
        let total_break_hours: f64 = in_week.iter().map(|r| r.break_hours).sum();
        let days_worked = in_week.iter().filter(|r| r.status.is_worked()).count();

        let mut pattern = [0.0; 7];
        for record in &in_week {
            pattern[record.date.weekday().num_days_from_monday() as usize] = record.work_hours;
        }

        WeeklySummary {
            total_hours,
            total_break_hours,
            // A five-day working week is the denominator, so weekend work
            // can push the rate past 100.
            attendance_rate: rate(days_worked, 5),
            productivity: productivity(total_hours, target_hours),
            pattern,
        }
    }
}

/// Worked hours against a target as a percentage, capped at 100.
pub fn productivity(worked_hours: f64, target_hours: f64) -> f64 {
    if target_hours <= 0.0 {
        return 0.0;
    }
    (worked_hours / target_hours * 100.0).min(100.0)
}

/// The Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn rate(worked: usize, tracked: usize) -> u32 {
    if tracked == 0 {
        return 0;
    }
    (worked as f64 / tracked as f64 * 100.0).round() as u32
}
