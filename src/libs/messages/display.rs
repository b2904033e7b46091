//! Display implementation for stint application messages.
//!
//! All user-facing text lives here, keeping message wording in one place and
//! the call sites type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            // === ATTENDANCE MESSAGES ===
            Message::CheckedInAt(time) => format!("Checked in at {}", time),
            Message::CheckedOutAt(time, worked) => format!("Checked out at {} after {} of work", time, worked),
            Message::BreakStartedAt(time) => format!("Break started at {}", time),
            Message::BreakEndedAt(time, total) => format!("Break ended at {} (total break time {})", time, total),
            Message::TransitionRejected(reason) => format!("Rejected: {}", reason),
            Message::StatusTitle => "Attendance status".to_string(),
            Message::NoActivityYet => "No activity recorded in this session".to_string(),

            // === STATE MESSAGES ===
            Message::StateSaveFailed(err) => format!("Failed to save attendance state: {}", err),
            Message::StateLoadFailed(err) => format!("Failed to load attendance state, starting checked out: {}", err),
            Message::StateRepaired => "Stored attendance state was inconsistent and has been reset".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleLeave => "Leave settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptFullDayHours => "Hours of net work for a full day".to_string(),
            Message::PromptDailyTarget => "Daily target hours".to_string(),
            Message::PromptWeeklyTarget => "Weekly target hours".to_string(),
            Message::PromptPollInterval => "Watch poll interval in seconds".to_string(),
            Message::PromptSaveDebounce => "Save debounce delay in milliseconds".to_string(),
            Message::PromptVacationDays => "Vacation days per year".to_string(),
            Message::PromptSickDays => "Sick days per year".to_string(),
            Message::PromptPersonalDays => "Personal days per year".to_string(),

            // === RECORD AND SUMMARY MESSAGES ===
            Message::RecordsTitle(period) => format!("Attendance records, {}", period),
            Message::NoRecordsFound => "No attendance records found".to_string(),
            Message::MonthlySummaryTitle(month) => format!("Summary for {}", month),
            Message::WeeklySummaryTitle(week) => format!("Week of {}", week),
            Message::LeavesTakenThisMonth(count) => format!("Approved leaves this month: {}", count),

            // === LEAVE MESSAGES ===
            Message::LeaveRequested(leave_type, days) => {
                format!("Requested {} day(s) of {} leave", days, leave_type)
            }
            Message::LeaveStatusSet(id, status) => format!("Leave request {} is now {}", id, status),
            Message::LeaveNotFound(id) => format!("Leave request {} not found", id),
            Message::LeaveInsufficientBalance(requested, remaining) => {
                format!("Not enough leave balance: requested {} day(s), {} remaining", requested, remaining)
            }
            Message::LeaveInvalidRange => "Leave end date must not be before the start date".to_string(),
            Message::LeaveListTitle => "Leave requests".to_string(),
            Message::LeaveBalancesTitle => "Leave balances".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Records exported to {}", path),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => {
                format!("Watching the session, refreshing every {}s (Ctrl-C to stop)", interval)
            }
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchNotCheckedIn => "Not checked in, nothing to watch".to_string(),
        };
        write!(f, "{}", text)
    }
}
