#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use stint::libs::attendance::{break_duration, duration_to_hours, work_duration, AttendanceState, Phase};

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn working_since(start: NaiveDateTime) -> AttendanceState {
        AttendanceState {
            is_checked_in: true,
            start_time: Some(start),
            ..AttendanceState::default()
        }
    }

    #[test]
    fn test_work_duration_zero_when_checked_out() {
        let state = AttendanceState::default();
        assert_eq!(work_duration(&state, at(12, 0)), Duration::zero());
    }

    #[test]
    fn test_work_duration_subtracts_breaks() {
        let state = AttendanceState {
            total_break_time: Duration::minutes(30),
            ..working_since(at(9, 0))
        };
        assert_eq!(work_duration(&state, at(13, 0)), Duration::minutes(3 * 60 + 30));
    }

    #[test]
    fn test_work_duration_subtracts_running_break() {
        let state = AttendanceState {
            is_on_break: true,
            break_start_time: Some(at(12, 0)),
            total_break_time: Duration::minutes(15),
            ..working_since(at(9, 0))
        };
        // 4h elapsed, 15m completed break, 30m running break.
        assert_eq!(work_duration(&state, at(13, 0)), Duration::minutes(3 * 60 + 15));
        assert_eq!(break_duration(&state, at(13, 0)), Duration::minutes(45));
    }

    #[test]
    fn test_work_duration_never_negative() {
        let state = working_since(at(9, 0));
        assert_eq!(work_duration(&state, at(8, 0)), Duration::zero());

        let state = AttendanceState {
            total_break_time: Duration::hours(5),
            ..working_since(at(9, 0))
        };
        assert_eq!(work_duration(&state, at(10, 0)), Duration::zero());
    }

    #[test]
    fn test_work_duration_monotonic_while_working() {
        let state = working_since(at(9, 0));
        let mut previous = Duration::zero();
        for minute in 0..120 {
            let worked = work_duration(&state, at(9, 0) + Duration::minutes(minute));
            assert!(worked >= previous);
            previous = worked;
        }
    }

    #[test]
    fn test_phase_derivation() {
        assert_eq!(AttendanceState::default().phase(), Phase::CheckedOut);
        assert_eq!(working_since(at(9, 0)).phase(), Phase::Working);

        let on_break = AttendanceState {
            is_on_break: true,
            break_start_time: Some(at(10, 0)),
            ..working_since(at(9, 0))
        };
        assert_eq!(on_break.phase(), Phase::OnBreak);
    }

    #[test]
    fn test_sanitized_resets_orphaned_start_time() {
        let state = AttendanceState {
            is_checked_in: false,
            start_time: Some(at(9, 0)),
            ..AttendanceState::default()
        };
        assert_eq!(state.sanitized(), AttendanceState::default());
    }

    #[test]
    fn test_sanitized_resets_checked_in_without_start() {
        let state = AttendanceState {
            is_checked_in: true,
            start_time: None,
            ..AttendanceState::default()
        };
        assert_eq!(state.sanitized(), AttendanceState::default());
    }

    #[test]
    fn test_sanitized_clears_break_without_timestamp() {
        let state = AttendanceState {
            is_on_break: true,
            break_start_time: None,
            ..working_since(at(9, 0))
        };
        let repaired = state.sanitized();
        assert!(!repaired.is_on_break);
        assert!(repaired.is_checked_in);
        assert_eq!(repaired.start_time, Some(at(9, 0)));
    }

    #[test]
    fn test_sanitized_clamps_negative_accumulator() {
        let state = AttendanceState {
            total_break_time: Duration::minutes(-10),
            ..working_since(at(9, 0))
        };
        assert_eq!(state.sanitized().total_break_time, Duration::zero());
    }

    #[test]
    fn test_sanitized_keeps_valid_state() {
        let state = AttendanceState {
            is_on_break: true,
            break_start_time: Some(at(12, 0)),
            total_break_time: Duration::minutes(20),
            ..working_since(at(9, 0))
        };
        assert_eq!(state.clone().sanitized(), state);
    }

    #[test]
    fn test_duration_to_hours() {
        assert_eq!(duration_to_hours(Duration::hours(2)), 2.0);
        assert_eq!(duration_to_hours(Duration::minutes(90)), 1.5);
        assert_eq!(duration_to_hours(Duration::zero()), 0.0);
    }
}
