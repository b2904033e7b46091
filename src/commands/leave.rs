//! Leave request management.
//!
//! Requests are created as pending and only consume balance once approved.
//! A request is refused up front when it would exceed the remaining balance
//! of its leave type.

use crate::db::leaves::{LeaveStatus, LeaveType, Leaves};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LeaveArgs {
    #[command(subcommand)]
    command: LeaveCommand,
}

#[derive(Debug, Subcommand)]
enum LeaveCommand {
    #[command(about = "Request a new leave")]
    Request {
        #[arg(value_enum, help = "Type of leave")]
        leave_type: LeaveType,
        #[arg(long, help = "First day of the leave (YYYY-MM-DD)")]
        from: NaiveDate,
        #[arg(long, help = "Last day of the leave (YYYY-MM-DD)")]
        to: NaiveDate,
        #[arg(long, help = "Optional reason")]
        reason: Option<String>,
    },
    #[command(about = "List all leave requests")]
    List,
    #[command(about = "Show leave balances")]
    Balance,
    #[command(about = "Approve a pending request")]
    Approve {
        #[arg(help = "Request id")]
        id: i32,
    },
    #[command(about = "Reject a pending request")]
    Reject {
        #[arg(help = "Request id")]
        id: i32,
    },
}

pub fn cmd(args: LeaveArgs) -> Result<()> {
    let mut leaves = Leaves::new()?;

    match args.command {
        LeaveCommand::Request {
            leave_type,
            from,
            to,
            reason,
        } => {
            if to < from {
                msg_error!(Message::LeaveInvalidRange);
                return Ok(());
            }
            let days = to.signed_duration_since(from).num_days() + 1;
            let config = Config::read()?.leave();
            let used = leaves.used_days(leave_type)?;
            let remaining = config.total_for(leave_type).saturating_sub(used);
            if days > i64::from(remaining) {
                msg_error!(Message::LeaveInsufficientBalance(days, remaining));
                return Ok(());
            }
            leaves.insert(leave_type, from, to, reason.as_deref())?;
            msg_success!(Message::LeaveRequested(leave_type.to_string(), days));
        }
        LeaveCommand::List => {
            let requests = leaves.fetch_all()?;
            msg_print!(Message::LeaveListTitle, true);
            View::leaves(&requests)?;
        }
        LeaveCommand::Balance => {
            let config = Config::read()?.leave();
            let balances = leaves.balances(&config)?;
            msg_print!(Message::LeaveBalancesTitle, true);
            View::balances(&balances)?;
        }
        LeaveCommand::Approve { id } => set_status(&mut leaves, id, LeaveStatus::Approved)?,
        LeaveCommand::Reject { id } => set_status(&mut leaves, id, LeaveStatus::Rejected)?,
    }

    Ok(())
}

fn set_status(leaves: &mut Leaves, id: i32, status: LeaveStatus) -> Result<()> {
    if leaves.set_status(id, status)? {
        msg_success!(Message::LeaveStatusSet(id, status.to_string()));
    } else {
        msg_error!(Message::LeaveNotFound(id));
    }
    Ok(())
}
