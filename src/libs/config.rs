//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory and split into
//! optional sections, each with sensible defaults so the tool works without
//! ever running `init`. The interactive wizard rewrites only the sections the
//! user selects.

use crate::db::leaves::LeaveType;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Work-time targets and tracking cadence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Net worked hours from which a closed day classifies as present.
    pub full_day_hours: f64,
    /// Daily target used for the productivity figure.
    pub daily_target_hours: f64,
    /// Weekly target used for the weekly productivity figure.
    pub weekly_target_hours: f64,
    /// Tick cadence of the watch loop in seconds.
    pub poll_interval_secs: u64,
    /// Quiet period before a dirty state snapshot is flushed, in milliseconds.
    pub save_debounce_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            full_day_hours: 7.0,
            daily_target_hours: 8.0,
            weekly_target_hours: 40.0,
            poll_interval_secs: 1,
            save_debounce_ms: 2000,
        }
    }
}

/// Annual leave entitlements in days.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaveConfig {
    pub vacation_days: u32,
    pub sick_days: u32,
    pub personal_days: u32,
}

impl Default for LeaveConfig {
    fn default() -> Self {
        Self {
            vacation_days: 20,
            sick_days: 15,
            personal_days: 10,
        }
    }
}

impl LeaveConfig {
    pub fn total_for(&self, leave_type: LeaveType) -> u32 {
        match leave_type {
            LeaveType::Vacation => self.vacation_days,
            LeaveType::Sick => self.sick_days,
            LeaveType::Personal => self.personal_days,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub tracker: Option<TrackerConfig>,
    pub leave: Option<LeaveConfig>,
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when the
    /// file does not exist yet.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn tracker(&self) -> TrackerConfig {
        self.tracker.clone().unwrap_or_default()
    }

    pub fn leave(&self) -> LeaveConfig {
        self.leave.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Tracker", "Leave"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        full_day_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFullDayHours.to_string())
                            .default(default.full_day_hours)
                            .interact_text()?,
                        daily_target_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDailyTarget.to_string())
                            .default(default.daily_target_hours)
                            .interact_text()?,
                        weekly_target_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWeeklyTarget.to_string())
                            .default(default.weekly_target_hours)
                            .interact_text()?,
                        poll_interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval_secs)
                            .interact_text()?,
                        save_debounce_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSaveDebounce.to_string())
                            .default(default.save_debounce_ms)
                            .interact_text()?,
                    });
                }
                "Leave" => {
                    let default = config.leave.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLeave);
                    config.leave = Some(LeaveConfig {
                        vacation_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptVacationDays.to_string())
                            .default(default.vacation_days)
                            .interact_text()?,
                        sick_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSickDays.to_string())
                            .default(default.sick_days)
                            .interact_text()?,
                        personal_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPersonalDays.to_string())
                            .default(default.personal_days)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
