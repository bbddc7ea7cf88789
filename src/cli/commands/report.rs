use super::{with_backend_client, Command};
use crate::backend::types::Task;
use crate::backend::TaskQuery;
use crate::cli::SortOrder;
use crate::metrics::{task_timings, MetricsReporter};
use crate::reports::ReportKind;
use crate::status::classify;
use anyhow::Result;

/// Width cap for the data columns so the table stays readable in a terminal.
const MAX_DATA_COLUMNS: usize = 6;

pub struct ReportCommand {
    pub kind: ReportKind,
    pub statuses: Vec<String>,
    pub assignee: Option<String>,
    pub sort: SortOrder,
    pub timings: bool,
}

impl ReportCommand {
    pub fn new(
        kind: ReportKind,
        statuses: Vec<String>,
        assignee: Option<String>,
        sort: SortOrder,
        timings: bool,
    ) -> Self {
        Self {
            kind,
            statuses,
            assignee,
            sort,
            timings,
        }
    }
}

impl Command for ReportCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            let query = TaskQuery {
                statuses: self.statuses.clone(),
                assignee_id: self.assignee.clone(),
            };
            let mut tasks = client
                .tasks()
                .fetch_report_tasks_filtered(self.kind, &query)
                .await?;

            // Sort by imported-at; tasks missing the timestamp sink to the end.
            tasks.sort_by(|a, b| match (a.imported_at, b.imported_at) {
                (Some(a_at), Some(b_at)) => match self.sort {
                    SortOrder::Asc => a_at.cmp(&b_at),
                    SortOrder::Desc => b_at.cmp(&a_at),
                },
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });

            println!("📋 {} - {} tasks", self.kind.display_name(), tasks.len());
            println!();

            if tasks.is_empty() {
                println!("No matching tasks");
                return Ok(());
            }

            if self.timings {
                for task in &tasks {
                    println!("── {} ({})", task.id, classify(task));
                    print!("{}", MetricsReporter::format_task_timings(&task_timings(task)));
                }
                return Ok(());
            }

            let columns: Vec<&str> = self
                .kind
                .columns()
                .iter()
                .take(MAX_DATA_COLUMNS)
                .copied()
                .collect();
            println!(
                "{:<24} {:<20} {:<14} {:<12} {}",
                "TASK",
                "STATUS",
                "ASSIGNEE",
                "IMPORTED",
                columns.join(" | ")
            );
            for task in &tasks {
                println!("{}", format_row(task, &columns));
            }
            Ok(())
        })
        .await
    }
}

fn format_row(task: &Task, columns: &[&str]) -> String {
    let assignee = task.assignee_id.as_deref().unwrap_or("Unassigned");
    let imported = task
        .imported_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".to_string());
    let data: Vec<String> = columns
        .iter()
        .map(|col| {
            task.data_row
                .get(*col)
                .map(display_value)
                .unwrap_or_else(|| "—".to_string())
        })
        .collect();
    format!(
        "{:<24} {:<20} {:<14} {:<12} {}",
        task.id,
        classify(task).to_string(),
        assignee,
        imported,
        data.join(" | ")
    )
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "—".to_string(),
        other => other.to_string(),
    }
}
