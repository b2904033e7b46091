//! Daily attendance record store.
//!
//! One row per calendar date. The record for "today" is created lazily the
//! first time anything needs it and mutated in place on every transition and
//! on periodic ticks while checked in; records for past dates are left alone.
//! Lookups never fail: a date with no row simply means an absent day.

use crate::db::db::Db;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

const SCHEMA_RECORDS: &str = "CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY,
    date DATE NOT NULL UNIQUE,
    check_in TIME,
    check_out TIME,
    work_hours REAL NOT NULL DEFAULT 0,
    break_hours REAL NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'absent'
);";
const INSERT_ABSENT: &str = "INSERT INTO records (date, status) VALUES (?1, 'absent')";
const UPDATE_CHECK_IN: &str = "UPDATE records SET check_in = ?2, status = 'present' WHERE date = ?1";
const UPDATE_CHECK_OUT: &str = "UPDATE records SET check_out = ?2, work_hours = ?3, break_hours = ?4, status = ?5 WHERE date = ?1";
const UPDATE_BREAK_TOTAL: &str = "UPDATE records SET break_hours = ?2 WHERE date = ?1";
const UPDATE_LIVE: &str = "UPDATE records SET work_hours = ?2, break_hours = ?3 WHERE date = ?1";
const SELECT_BY_DATE: &str = "SELECT id, date, check_in, check_out, work_hours, break_hours, status FROM records WHERE date = ?1";
const SELECT_BY_MONTH: &str =
    "SELECT id, date, check_in, check_out, work_hours, break_hours, status FROM records WHERE strftime('%Y-%m', date) = strftime('%Y-%m', ?1) ORDER BY date DESC";
const SELECT_BY_RANGE: &str =
    "SELECT id, date, check_in, check_out, work_hours, break_hours, status FROM records WHERE date >= ?1 AND date <= ?2 ORDER BY date DESC";
const SELECT_ALL: &str = "SELECT id, date, check_in, check_out, work_hours, break_hours, status FROM records ORDER BY date DESC";

/// Attendance classification of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Present,
    Partial,
    Absent,
}

impl RecordStatus {
    /// Classifies a closed day from its net worked hours.
    ///
    /// Two effective bands: a full day is `present`, anything shorter is
    /// `partial`. Days under four hours deliberately share the `partial`
    /// label with the four-to-seven band, pending a product decision on a
    /// third band.
    pub fn classify(work_hours: f64, full_day_hours: f64) -> Self {
        if work_hours >= full_day_hours {
            RecordStatus::Present
        } else {
            RecordStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Present => "present",
            RecordStatus::Partial => "partial",
            RecordStatus::Absent => "absent",
        }
    }

    /// Whether the day counts as worked for attendance-rate purposes.
    pub fn is_worked(&self) -> bool {
        matches!(self, RecordStatus::Present | RecordStatus::Partial)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "present" => Ok(RecordStatus::Present),
            "partial" => Ok(RecordStatus::Partial),
            "absent" => Ok(RecordStatus::Absent),
            _ => Err(()),
        }
    }
}

/// Durable per-day summary of a session's timing and status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    #[serde(skip)]
    pub id: i32,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub work_hours: f64,
    pub break_hours: f64,
    pub status: RecordStatus,
}

pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_RECORDS, [])?;
        Ok(Records { conn: db.conn })
    }

    /// Returns today's record, creating an absent placeholder if missing.
    /// Idempotent: a second call returns the same row.
    pub fn ensure_today(&mut self, date: NaiveDate) -> Result<DailyRecord> {
        if let Some(record) = self.fetch(date)? {
            return Ok(record);
        }
        self.conn.execute(INSERT_ABSENT, params![date_str(date)])?;
        // The row was just inserted, so the fetch cannot miss.
        self.fetch(date)?
            .ok_or_else(|| anyhow::anyhow!("record for {} missing after insert", date))
    }

    pub fn apply_check_in(&mut self, date: NaiveDate, time: NaiveTime) -> Result<()> {
        self.ensure_today(date)?;
        self.conn.execute(UPDATE_CHECK_IN, params![date_str(date), time_str(time)])?;
        Ok(())
    }

    /// Closes the day: final check-out time, totals and status.
    pub fn apply_check_out(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        work_hours: f64,
        break_hours: f64,
        full_day_hours: f64,
    ) -> Result<DailyRecord> {
        self.ensure_today(date)?;
        let status = RecordStatus::classify(work_hours, full_day_hours);
        self.conn.execute(
            UPDATE_CHECK_OUT,
            params![date_str(date), time_str(time), work_hours.max(0.0), break_hours.max(0.0), status.as_str()],
        )?;
        self.fetch(date)?
            .ok_or_else(|| anyhow::anyhow!("record for {} missing after checkout", date))
    }

    /// Mirrors the session break accumulator into the durable record.
    pub fn apply_break_total(&mut self, date: NaiveDate, break_hours: f64) -> Result<()> {
        self.ensure_today(date)?;
        self.conn.execute(UPDATE_BREAK_TOTAL, params![date_str(date), break_hours.max(0.0)])?;
        Ok(())
    }

    /// Periodic-tick refresh of the open day's running totals.
    pub fn refresh_live(&mut self, date: NaiveDate, work_hours: f64, break_hours: f64) -> Result<()> {
        self.ensure_today(date)?;
        self.conn.execute(UPDATE_LIVE, params![date_str(date), work_hours.max(0.0), break_hours.max(0.0)])?;
        Ok(())
    }

    pub fn fetch(&mut self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        let record = self
            .conn
            .query_row(SELECT_BY_DATE, params![date_str(date)], map_record)
            .optional()?;
        Ok(record)
    }

    /// All records within the month containing `date`, newest first.
    pub fn fetch_month(&mut self, date: NaiveDate) -> Result<Vec<DailyRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_MONTH)?;
        let iter = stmt.query_map(params![date_str(date)], map_record)?;
        collect(iter)
    }

    /// Records with `from <= date <= to`, newest first.
    pub fn fetch_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_RANGE)?;
        let iter = stmt.query_map(params![date_str(from), date_str(to)], map_record)?;
        collect(iter)
    }

    /// Every record, newest first. Descending order is the display contract.
    pub fn fetch_all(&mut self) -> Result<Vec<DailyRecord>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let iter = stmt.query_map([], map_record)?;
        collect(iter)
    }
}

fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn time_str(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

fn map_record(row: &Row) -> rusqlite::Result<DailyRecord> {
    let status: String = row.get(6)?;
    Ok(DailyRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        check_in: row.get(2)?,
        check_out: row.get(3)?,
        work_hours: row.get(4)?,
        break_hours: row.get(5)?,
        // Unknown labels written by other versions degrade to absent.
        status: status.parse().unwrap_or(RecordStatus::Absent),
    })
}

fn collect(iter: impl Iterator<Item = rusqlite::Result<DailyRecord>>) -> Result<Vec<DailyRecord>> {
    let mut records = Vec::new();
    for record in iter {
        records.push(record?);
    }
    Ok(records)
}
