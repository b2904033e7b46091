#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use stint::db::records::{DailyRecord, RecordStatus};
    use stint::libs::summary::{productivity, week_start, SummaryCalculator};

    fn record(date: NaiveDate, work_hours: f64, break_hours: f64, status: RecordStatus) -> DailyRecord {
        DailyRecord {
            id: 0,
            date,
            check_in: NaiveTime::from_hms_opt(9, 0, 0),
            check_out: None,
            work_hours,
            break_hours,
            status,
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn test_monthly_summary() {
        let records = vec![
            record(date(6, 2), 8.0, 0.5, RecordStatus::Present),
            record(date(6, 3), 4.0, 0.25, RecordStatus::Partial),
            record(date(6, 4), 0.0, 0.0, RecordStatus::Absent),
            record(date(6, 5), 7.5, 1.0, RecordStatus::Present),
        ];

        let summary = records.monthly(2025, 6);
        assert_eq!(summary.days_worked, 3);
        assert_eq!(summary.total_hours, 19.5);
        assert_eq!(summary.total_break_hours, 1.75);
        assert_eq!(summary.attendance_rate, 75);
    }

    #[test]
    fn test_monthly_ignores_other_months() {
        let records = vec![
            record(date(6, 2), 8.0, 0.0, RecordStatus::Present),
            record(date(7, 2), 8.0, 0.0, RecordStatus::Present),
        ];
        let summary = records.monthly(2025, 6);
        assert_eq!(summary.days_worked, 1);
        assert_eq!(summary.total_hours, 8.0);
        assert_eq!(summary.attendance_rate, 100);
    }

    #[test]
    fn test_empty_summaries_are_all_zero() {
        let records: Vec<DailyRecord> = Vec::new();

        let monthly = records.monthly(2025, 6);
        assert_eq!(monthly.days_worked, 0);
        assert_eq!(monthly.total_hours, 0.0);
        assert_eq!(monthly.attendance_rate, 0);

        let weekly = records.weekly(date(6, 2), 40.0);
        assert_eq!(weekly.total_hours, 0.0);
        assert_eq!(weekly.attendance_rate, 0);
        assert_eq!(weekly.productivity, 0.0);
        assert_eq!(weekly.pattern, [0.0; 7]);
    }

    #[test]
    fn test_weekly_summary_and_pattern() {
        // 2025-06-02 is a Monday.
        let monday = date(6, 2);
        let records = vec![
            record(date(6, 2), 8.0, 0.5, RecordStatus::Present),
            record(date(6, 3), 6.0, 0.5, RecordStatus::Partial),
            record(date(6, 5), 8.0, 1.0, RecordStatus::Present),
            // Next week, outside the window.
            record(date(6, 9), 8.0, 0.0, RecordStatus::Present),
        ];

        let summary = records.weekly(monday, 40.0);
        assert_eq!(summary.total_hours, 22.0);
        assert_eq!(summary.total_break_hours, 2.0);
        assert_eq!(summary.attendance_rate, 60);
        assert_eq!(summary.productivity, 55.0);
        assert_eq!(summary.pattern[0], 8.0); // Monday
        assert_eq!(summary.pattern[1], 6.0); // Tuesday
        assert_eq!(summary.pattern[2], 0.0); // Wednesday
        assert_eq!(summary.pattern[3], 8.0); // Thursday
    }

    #[test]
    fn test_productivity_caps_at_hundred() {
        assert_eq!(productivity(50.0, 40.0), 100.0);
        assert_eq!(productivity(20.0, 40.0), 50.0);
        assert_eq!(productivity(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-06-04 is a Wednesday.
        assert_eq!(week_start(date(6, 4)), date(6, 2));
        assert_eq!(week_start(date(6, 2)), date(6, 2));
        assert_eq!(week_start(date(6, 8)), date(6, 2));
    }
}
