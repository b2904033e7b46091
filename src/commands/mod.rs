pub mod breaks;
pub mod checkin;
pub mod checkout;
pub mod export;
pub mod init;
pub mod leave;
pub mod records;
pub mod status;
pub mod sum;
pub mod watch;

use crate::libs::engine::EngineError;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(name = "in", about = "Check in and start the workday")]
    In,
    #[command(name = "out", about = "Check out and close today's record")]
    Out,
    #[command(about = "Start or end a break")]
    Break(breaks::BreakArgs),
    #[command(about = "Show the current attendance status")]
    Status,
    #[command(about = "Display daily attendance records")]
    Records(records::RecordsArgs),
    #[command(about = "Monthly and weekly summaries")]
    Sum(sum::SumArgs),
    #[command(about = "Manage leave requests and balances")]
    Leave(leave::LeaveArgs),
    #[command(about = "Export attendance records")]
    Export(export::ExportArgs),
    #[command(about = "Keep today's record up to date while working")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::In => checkin::cmd(),
            Commands::Out => checkout::cmd(),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Records(args) => records::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Leave(args) => leave::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Watch => watch::cmd().await,
        }
    }
}

fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// A rejected transition is a user-facing outcome, not a failure: report it
/// and exit cleanly. Anything else propagates.
pub(crate) fn report_rejection(err: anyhow::Error) -> Result<()> {
    match err.downcast_ref::<EngineError>() {
        Some(engine_err) => {
            msg_error!(Message::TransitionRejected(engine_err.to_string()));
            Ok(())
        }
        None => Err(err),
    }
}
