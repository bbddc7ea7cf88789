use super::client::BackendClient;
use super::errors::BackendError;
use super::types::ImportSummary;
use serde_json::json;

/// Handler for the bulk-import trigger and its summary. The import job runs
/// on the backend; this client only kicks it off and renders the result.
#[derive(Debug, Clone)]
pub struct ImportHandler {
    client: BackendClient,
}

impl ImportHandler {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Trigger a bulk import of the latest source extracts. Blocks until the
    /// backend finishes and returns the per-file summary.
    pub async fn trigger(&self) -> Result<ImportSummary, BackendError> {
        self.client.post_json("/import", &json!({})).await
    }

    /// Fetch the summary of the most recent import, if any ran.
    pub async fn last_summary(&self) -> Result<ImportSummary, BackendError> {
        self.client.get_json("/import/summary", &[]).await
    }
}
