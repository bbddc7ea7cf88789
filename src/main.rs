use anyhow::Result;
use clap::Parser;

use recon_desk::cli::commands::{
    dashboard::DashboardCommand,
    import::ImportCommand,
    login::{LoginCommand, LogoutCommand},
    report::ReportCommand,
    task::{AssignCommand, NoteCommand, ResolveCommand},
    users::{ApproveCommand, ResetLoginCommand, UsersCommand},
    Command,
};
use recon_desk::cli::{Cli, Commands};
use recon_desk::telemetry::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        init_telemetry()?;

        match cli.command {
            // Default behavior: no subcommand shows the dashboard, the same
            // landing view the old web UI routed everything to.
            None | Some(Commands::Dashboard) => DashboardCommand::new().execute().await,
            Some(Commands::Report {
                kind,
                status,
                assignee,
                sort,
                timings,
            }) => {
                ReportCommand::new(kind, status, assignee, sort, timings)
                    .execute()
                    .await
            }
            Some(Commands::Assign {
                task_id,
                user_id,
                clear,
            }) => {
                if user_id.is_none() && !clear {
                    anyhow::bail!("provide a user id, or --clear to unassign");
                }
                AssignCommand::new(task_id, user_id).execute().await
            }
            Some(Commands::Resolve { task_id }) => ResolveCommand::new(task_id).execute().await,
            Some(Commands::Note { task_id, message }) => {
                NoteCommand::new(task_id, message).execute().await
            }
            Some(Commands::Import) => ImportCommand::new().execute().await,
            Some(Commands::Users { pending }) => UsersCommand::new(pending).execute().await,
            Some(Commands::Approve { email }) => ApproveCommand::new(email).execute().await,
            Some(Commands::ResetLogin { email, yes }) => {
                ResetLoginCommand::new(email, yes).execute().await
            }
            Some(Commands::Login { email, password }) => {
                LoginCommand::new(email, password).execute().await
            }
            Some(Commands::Logout) => LogoutCommand::new().execute().await,
        }
    })
}
