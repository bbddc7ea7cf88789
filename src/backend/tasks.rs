use super::client::BackendClient;
use super::errors::BackendError;
use super::types::{Task, TaskPage};
use crate::reports::ReportKind;
use serde_json::{json, Value};

/// Server-side filter for a report's task listing. Status filters may repeat
/// (`?status=open&status=in_progress`).
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub statuses: Vec<String>,
    pub assignee_id: Option<String>,
}

/// Handler for task listing and task mutations. Every mutation is a single
/// confirmed round trip - callers refresh or patch local state only after
/// success.
#[derive(Debug, Clone)]
pub struct TaskHandler {
    client: BackendClient,
}

impl TaskHandler {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch all tasks for one report kind.
    pub async fn fetch_report_tasks(&self, kind: ReportKind) -> Result<Vec<Task>, BackendError> {
        self.fetch_report_tasks_filtered(kind, &TaskQuery::default())
            .await
    }

    pub async fn fetch_report_tasks_filtered(
        &self,
        kind: ReportKind,
        query: &TaskQuery,
    ) -> Result<Vec<Task>, BackendError> {
        let mut params: Vec<(&str, String)> = query
            .statuses
            .iter()
            .map(|status| ("status", status.clone()))
            .collect();
        if let Some(assignee) = &query.assignee_id {
            params.push(("assignee_id", assignee.clone()));
        }

        let page: TaskPage = self
            .client
            .get_json(&format!("/report/{}/tasks", kind.id()), &params)
            .await?;
        Ok(page.tasks)
    }

    /// Assign a task to a user, or clear the assignment with `None`.
    pub async fn assign(&self, task_id: &str, assignee_id: Option<&str>) -> Result<(), BackendError> {
        let body = match assignee_id {
            Some(id) => json!({ "assignee_id": id }),
            None => json!({ "assignee_id": Value::Null }),
        };
        self.client
            .post_confirm(&format!("/task/{task_id}/assign"), &body)
            .await
    }

    /// Mark a task resolved.
    pub async fn resolve(&self, task_id: &str) -> Result<(), BackendError> {
        self.client
            .post_confirm(&format!("/task/{task_id}/resolve"), &json!({}))
            .await
    }

    /// Append an annotation to a task's note trail. Notes are append-only;
    /// there is no edit or delete.
    pub async fn append_note(&self, task_id: &str, message: &str) -> Result<(), BackendError> {
        self.client
            .post_confirm(&format!("/task/{task_id}/note"), &json!({ "message": message }))
            .await
    }
}
