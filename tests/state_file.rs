#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use stint::libs::attendance::AttendanceState;
    use stint::libs::data_storage::DataStorage;
    use stint::libs::state_file::{StateFile, StateSnapshot, STATE_FILE_NAME, STATE_VERSION};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StateFileTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StateFileTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StateFileTestContext { _temp_dir: temp_dir }
        }
    }

    fn working_state() -> AttendanceState {
        AttendanceState {
            is_checked_in: true,
            start_time: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0),
            is_on_break: false,
            break_start_time: None,
            total_break_time: Duration::minutes(45),
        }
    }

    #[test_context(StateFileTestContext)]
    #[test]
    fn test_missing_file_yields_no_snapshot(_ctx: &mut StateFileTestContext) {
        let state_file = StateFile::new().unwrap();
        assert!(state_file.load().unwrap().is_none());
    }

    #[test_context(StateFileTestContext)]
    #[test]
    fn test_save_and_load_round_trip(_ctx: &mut StateFileTestContext) {
        let state_file = StateFile::new().unwrap();
        let snapshot = StateSnapshot::capture(&working_state());

        state_file.save(&snapshot).unwrap();
        let loaded = state_file.load().unwrap().unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.version, STATE_VERSION);
        assert_eq!(loaded.restore(), working_state());
    }

    #[test_context(StateFileTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(_ctx: &mut StateFileTestContext) {
        let path = DataStorage::new().get_path(STATE_FILE_NAME).unwrap();
        std::fs::write(path, "{not json").unwrap();

        let state_file = StateFile::new().unwrap();
        assert!(state_file.load().is_err());
    }

    #[test]
    fn test_restore_repairs_orphaned_start_time() {
        let snapshot = StateSnapshot {
            version: STATE_VERSION,
            is_checked_in: false,
            start_time: Some("2025-03-10T09:00:00.000".to_string()),
            is_on_break: false,
            break_start_time: None,
            total_break_ms: 0,
        };
        assert_eq!(snapshot.restore(), AttendanceState::default());
    }

    #[test]
    fn test_restore_clamps_negative_accumulator() {
        let snapshot = StateSnapshot {
            version: STATE_VERSION,
            is_checked_in: true,
            start_time: Some("2025-03-10T09:00:00.000".to_string()),
            is_on_break: false,
            break_start_time: None,
            total_break_ms: -5000,
        };
        assert_eq!(snapshot.restore().total_break_time, Duration::zero());
    }

    #[test]
    fn test_restore_drops_unparseable_timestamp() {
        let snapshot = StateSnapshot {
            version: STATE_VERSION,
            is_checked_in: true,
            start_time: Some("yesterday-ish".to_string()),
            is_on_break: false,
            break_start_time: None,
            total_break_ms: 0,
        };
        // No usable start time means the session cannot be running.
        assert_eq!(snapshot.restore(), AttendanceState::default());
    }

    #[test]
    fn test_snapshot_without_version_field_defaults() {
        let json = r#"{
            "is_checked_in": false,
            "start_time": null,
            "is_on_break": false,
            "break_start_time": null,
            "total_break_ms": 0
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.version, STATE_VERSION);
    }

    #[test]
    fn test_restore_accepts_timestamps_without_millis() {
        let snapshot = StateSnapshot {
            version: STATE_VERSION,
            is_checked_in: true,
            start_time: Some("2025-03-10T09:00:00".to_string()),
            is_on_break: false,
            break_start_time: None,
            total_break_ms: 0,
        };
        let state = snapshot.restore();
        assert_eq!(state.start_time, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0));
    }
}
