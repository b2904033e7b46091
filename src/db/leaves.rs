//! Leave requests and balances.
//!
//! Requests are stored per date range and leave type; balances are derived on
//! read from the configured totals and the days consumed by approved
//! requests, so `remaining == total - used` holds by construction.

use crate::db::db::Db;
use crate::libs::config::LeaveConfig;
use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SCHEMA_LEAVES: &str = "CREATE TABLE IF NOT EXISTS leave_requests (
    id INTEGER PRIMARY KEY,
    leave_type TEXT NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    reason TEXT
);";
const INSERT_REQUEST: &str = "INSERT INTO leave_requests (leave_type, start_date, end_date, status, reason) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_STATUS: &str = "UPDATE leave_requests SET status = ?2 WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, leave_type, start_date, end_date, status, reason FROM leave_requests ORDER BY start_date DESC";
const SELECT_APPROVED_BY_TYPE: &str = "SELECT id, leave_type, start_date, end_date, status, reason FROM leave_requests WHERE status = 'approved' AND leave_type = ?1";
const COUNT_APPROVED_BY_MONTH: &str =
    "SELECT COUNT(*) FROM leave_requests WHERE status = 'approved' AND strftime('%Y-%m', start_date) = strftime('%Y-%m', ?1)";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Vacation, LeaveType::Sick, LeaveType::Personal];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "vacation" => Ok(LeaveType::Vacation),
            "sick" => Ok(LeaveType::Sick),
            "personal" => Ok(LeaveType::Personal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRequest {
    pub id: i32,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Calendar days covered by the request, inclusive of both ends.
    pub fn days(&self) -> i64 {
        self.end_date.signed_duration_since(self.start_date).num_days() + 1
    }
}

/// Balance of one leave type; `remaining` is always `total - used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBalance {
    pub leave_type: LeaveType,
    pub total: u32,
    pub used: u32,
    pub remaining: u32,
}

impl LeaveBalance {
    pub fn new(leave_type: LeaveType, total: u32, used: u32) -> Self {
        Self {
            leave_type,
            total,
            used,
            remaining: total.saturating_sub(used),
        }
    }
}

pub struct Leaves {
    conn: Connection,
}

impl Leaves {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_LEAVES, [])?;
        Ok(Leaves { conn: db.conn })
    }

    pub fn insert(
        &mut self,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<&str>,
    ) -> Result<()> {
        self.conn.execute(
            INSERT_REQUEST,
            params![
                leave_type.as_str(),
                start_date.format("%Y-%m-%d").to_string(),
                end_date.format("%Y-%m-%d").to_string(),
                LeaveStatus::Pending.as_str(),
                reason
            ],
        )?;
        Ok(())
    }

    pub fn set_status(&mut self, id: i32, status: LeaveStatus) -> Result<bool> {
        let updated = self.conn.execute(UPDATE_STATUS, params![id, status.as_str()])?;
        Ok(updated > 0)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<LeaveRequest>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let iter = stmt.query_map([], map_request)?;
        let mut requests = Vec::new();
        for request in iter {
            requests.push(request?);
        }
        Ok(requests)
    }

    /// Days consumed by approved requests of one leave type.
    pub fn used_days(&mut self, leave_type: LeaveType) -> Result<u32> {
        let mut stmt = self.conn.prepare(SELECT_APPROVED_BY_TYPE)?;
        let iter = stmt.query_map(params![leave_type.as_str()], map_request)?;
        let mut days: i64 = 0;
        for request in iter {
            days += request?.days();
        }
        Ok(days.max(0) as u32)
    }

    /// Balances for every leave type against the configured totals.
    pub fn balances(&mut self, config: &LeaveConfig) -> Result<Vec<LeaveBalance>> {
        let mut balances = Vec::with_capacity(LeaveType::ALL.len());
        for leave_type in LeaveType::ALL {
            let used = self.used_days(leave_type)?;
            balances.push(LeaveBalance::new(leave_type, config.total_for(leave_type), used));
        }
        Ok(balances)
    }

    /// Approved requests starting in the month containing `date`.
    pub fn approved_in_month(&mut self, date: NaiveDate) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            COUNT_APPROVED_BY_MONTH,
            params![date.format("%Y-%m-%d").to_string()],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as usize)
    }
}

fn map_request(row: &Row) -> rusqlite::Result<LeaveRequest> {
    let leave_type: String = row.get(1)?;
    let status: String = row.get(4)?;
    Ok(LeaveRequest {
        id: row.get(0)?,
        leave_type: leave_type.parse().unwrap_or(LeaveType::Personal),
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        status: match status.as_str() {
            "approved" => LeaveStatus::Approved,
            "rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        },
        reason: row.get(5)?,
    })
}
