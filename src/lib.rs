//! # Stint - Employee Attendance Tracking
//!
//! A command-line utility for tracking daily attendance, breaks, and leave,
//! with monthly and weekly summaries.
//!
//! ## Features
//!
//! - **Attendance Sessions**: Check in, check out, and track breaks
//! - **Daily Records**: One durable row per day with worked and break hours
//! - **Summaries**: Monthly and weekly attendance reports
//! - **Leave Management**: Request vacation, sick, and personal leave
//! - **Data Export**: Export records to CSV and JSON
//! - **Live Tracking**: Keep today's record current while working
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stint::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
