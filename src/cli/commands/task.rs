use super::{with_backend_client, Command};
use anyhow::Result;

// Task mutations are confirmed round trips: nothing is shown as changed
// until the backend acknowledges the call.

pub struct AssignCommand {
    pub task_id: String,
    pub user_id: Option<String>,
}

impl AssignCommand {
    pub fn new(task_id: String, user_id: Option<String>) -> Self {
        Self { task_id, user_id }
    }
}

impl Command for AssignCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            client
                .tasks()
                .assign(&self.task_id, self.user_id.as_deref())
                .await?;
            match &self.user_id {
                Some(user) => println!("✅ Task {} assigned to {}", self.task_id, user),
                None => println!("✅ Task {} unassigned", self.task_id),
            }
            Ok(())
        })
        .await
    }
}

pub struct ResolveCommand {
    pub task_id: String,
}

impl ResolveCommand {
    pub fn new(task_id: String) -> Self {
        Self { task_id }
    }
}

impl Command for ResolveCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            client.tasks().resolve(&self.task_id).await?;
            println!("✅ Task {} marked resolved", self.task_id);
            Ok(())
        })
        .await
    }
}

pub struct NoteCommand {
    pub task_id: String,
    pub message: String,
}

impl NoteCommand {
    pub fn new(task_id: String, message: String) -> Self {
        Self { task_id, message }
    }
}

impl Command for NoteCommand {
    async fn execute(&self) -> Result<()> {
        with_backend_client(|client| async move {
            client
                .tasks()
                .append_note(&self.task_id, &self.message)
                .await?;
            println!("✅ Note added to task {}", self.task_id);
            Ok(())
        })
        .await
    }
}
