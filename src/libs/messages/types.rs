#[derive(Debug, Clone)]
pub enum Message {
    // === ATTENDANCE MESSAGES ===
    CheckedInAt(String),                   // time
    CheckedOutAt(String, String),          // time, worked
    BreakStartedAt(String),                // time
    BreakEndedAt(String, String),          // time, total break
    TransitionRejected(String),            // engine error text
    StatusTitle,
    NoActivityYet,

    // === STATE MESSAGES ===
    StateSaveFailed(String),
    StateLoadFailed(String),
    StateRepaired,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTracker,
    ConfigModuleLeave,
    PromptSelectModules,
    PromptFullDayHours,
    PromptDailyTarget,
    PromptWeeklyTarget,
    PromptPollInterval,
    PromptSaveDebounce,
    PromptVacationDays,
    PromptSickDays,
    PromptPersonalDays,

    // === RECORD AND SUMMARY MESSAGES ===
    RecordsTitle(String),      // period label
    NoRecordsFound,
    MonthlySummaryTitle(String), // month label
    WeeklySummaryTitle(String),  // week start date
    LeavesTakenThisMonth(usize),

    // === LEAVE MESSAGES ===
    LeaveRequested(String, i64),          // type, days
    LeaveStatusSet(i32, String),          // id, status
    LeaveNotFound(i32),
    LeaveInsufficientBalance(i64, u32),   // requested days, remaining
    LeaveInvalidRange,
    LeaveListTitle,
    LeaveBalancesTitle,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === WATCH MESSAGES ===
    WatchStarted(u64), // poll interval seconds
    WatchStopped,
    WatchNotCheckedIn,
}
