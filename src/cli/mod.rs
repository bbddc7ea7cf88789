use crate::reports::ReportKind;
use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;

#[derive(Parser)]
#[command(name = "recon-desk")]
#[command(about = "Dashboard client for transaction reconciliation exception reports")]
#[command(long_about = "Recon Desk tracks and resolves exception records (mismatched or missing \
                       transactions) synchronized from the line-of-business system. Run without \
                       arguments for the dashboard, or 'recon-desk report <kind>' for one \
                       report's task list.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display per-report metrics for all four exception reports (default)
    Dashboard,
    /// List one report's tasks with filtering and sorting
    Report {
        /// Report kind: missing-trx, missing-bw, multi-trade, duplicate-or-missing
        kind: ReportKind,
        /// Filter by status (repeatable): open, in_progress, resolved
        #[arg(long, help = "Restrict to tasks with this status; repeat for multiple")]
        status: Vec<String>,
        /// Filter by assignee id
        #[arg(long, help = "Restrict to tasks assigned to this user id")]
        assignee: Option<String>,
        /// Sort by imported-at date
        #[arg(long, value_enum, default_value = "desc", help = "Sort order for the imported-at column")]
        sort: SortOrder,
        /// Show the per-task time breakdown instead of data columns
        #[arg(long, help = "Show time open / time assigned / time to resolve per task")]
        timings: bool,
    },
    /// Assign a task to a user (or clear the assignment)
    Assign {
        /// Task id
        task_id: String,
        /// User id to assign; omit together with --clear to unassign
        user_id: Option<String>,
        /// Clear the current assignment
        #[arg(long, conflicts_with = "user_id", help = "Unassign the task instead of assigning")]
        clear: bool,
    },
    /// Mark a task resolved
    Resolve {
        /// Task id
        task_id: String,
    },
    /// Append a note to a task's annotation trail
    Note {
        /// Task id
        task_id: String,
        /// Note text
        message: String,
    },
    /// Trigger a bulk import of the latest source extracts
    Import,
    /// List registered users (admin)
    Users {
        /// Only show signups awaiting approval
        #[arg(long, help = "Only show users whose signup is pending approval")]
        pending: bool,
    },
    /// Approve a pending user signup (admin)
    Approve {
        /// Email of the pending user
        email: String,
    },
    /// Reset a user's login so they can recreate it (admin)
    ResetLogin {
        /// Email of the user to reset
        email: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Sign in against the auth provider
    Login {
        /// Account email
        email: String,
        /// Prompt for a password instead of sending a magic link
        #[arg(long, help = "Use password sign-in (reads the password from stdin)")]
        password: bool,
    },
    /// Discard the stored session
    Logout,
}
