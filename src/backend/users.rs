use super::client::BackendClient;
use super::errors::BackendError;
use super::types::User;
use serde_json::json;

/// Handler for user listing and the admin approval/reset surface.
#[derive(Debug, Clone)]
pub struct UserHandler {
    client: BackendClient,
}

impl UserHandler {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch every registered user, approved or pending.
    pub async fn fetch_all(&self) -> Result<Vec<User>, BackendError> {
        self.client.get_json("/users/all", &[]).await
    }

    /// Approve a pending signup. Idempotent on the backend.
    pub async fn approve(&self, email: &str) -> Result<(), BackendError> {
        self.client
            .post_confirm("/users/approve", &json!({ "email": email }))
            .await
    }

    /// Reset a user's login so they can recreate it. Destructive - callers
    /// confirm with the operator first.
    pub async fn reset_password(&self, email: &str) -> Result<(), BackendError> {
        self.client
            .post_confirm("/users/reset_password", &json!({ "email": email }))
            .await
    }
}
