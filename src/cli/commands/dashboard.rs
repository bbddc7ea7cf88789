use super::{with_backend_client, Command};
use crate::dashboard::{DashboardSnapshot, ReportCard};
use crate::metrics::MetricsReporter;
use anyhow::Result;

pub struct DashboardCommand;

impl DashboardCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for DashboardCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            println!("📊 RECON DESK - Exception Reports");
            println!("==================================");
            println!();

            // The import summary is independent of the report fetches and is
            // allowed to be absent (nothing imported yet, or endpoint down).
            match client.import().last_summary().await {
                Ok(summary) => {
                    let text = MetricsReporter::format_import_summary(&summary);
                    if !text.is_empty() {
                        println!("{text}");
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "no import summary available");
                }
            }

            let snapshot = DashboardSnapshot::load(&client).await;
            for (kind, card) in &snapshot.cards {
                match card {
                    ReportCard::Ready(metrics) => {
                        println!("{}", MetricsReporter::format_report_card(*kind, metrics));
                    }
                    ReportCard::Unavailable(err) => {
                        println!(
                            "{}",
                            MetricsReporter::format_unavailable_card(*kind, &short_error(err))
                        );
                    }
                }
            }

            println!(
                "Generated at {}",
                snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        })
        .await
    }
}

/// First line of the detailed error display; the card stays one-screen.
fn short_error(err: &impl std::fmt::Display) -> String {
    err.to_string().lines().next().unwrap_or("error").to_string()
}
