#[cfg(test)]
mod tests {
    use stint::db::leaves::LeaveType;
    use stint::libs::config::{Config, LeaveConfig, TrackerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.tracker.is_none());
        assert!(config.leave.is_none());
        assert_eq!(config.tracker(), TrackerConfig::default());
        assert_eq!(config.leave(), LeaveConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tracker: Some(TrackerConfig {
                full_day_hours: 6.0,
                daily_target_hours: 7.0,
                weekly_target_hours: 35.0,
                poll_interval_secs: 5,
                save_debounce_ms: 500,
            }),
            leave: Some(LeaveConfig {
                vacation_days: 25,
                sick_days: 12,
                personal_days: 8,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.tracker().full_day_hours, 6.0);
    }

    #[test]
    fn test_tracker_defaults() {
        let tracker = TrackerConfig::default();
        assert_eq!(tracker.full_day_hours, 7.0);
        assert_eq!(tracker.daily_target_hours, 8.0);
        assert_eq!(tracker.weekly_target_hours, 40.0);
        assert_eq!(tracker.poll_interval_secs, 1);
        assert_eq!(tracker.save_debounce_ms, 2000);
    }

    #[test]
    fn test_leave_totals_by_type() {
        let leave = LeaveConfig::default();
        assert_eq!(leave.total_for(LeaveType::Vacation), 20);
        assert_eq!(leave.total_for(LeaveType::Sick), 15);
        assert_eq!(leave.total_for(LeaveType::Personal), 10);
    }
}
