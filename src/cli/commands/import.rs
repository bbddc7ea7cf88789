use super::{with_backend_client, Command};
use crate::metrics::MetricsReporter;
use anyhow::Result;

pub struct ImportCommand;

impl ImportCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImportCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ImportCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            println!("⏳ Pulling reports from the source system...");
            let summary = client.import().trigger().await?;

            println!("✅ Import finished");
            println!();
            let text = MetricsReporter::format_import_summary(&summary);
            if text.is_empty() {
                println!("No files were imported");
            } else {
                println!("{text}");
            }
            Ok(())
        })
        .await
    }
}
