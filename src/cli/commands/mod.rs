use crate::auth::Session;
use crate::backend::BackendClient;
use crate::config::config;
use anyhow::Result;

pub mod dashboard;
pub mod import;
pub mod login;
pub mod report;
pub mod task;
pub mod users;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Build the backend client and hand it to the command body.
pub async fn with_backend_client<F, Fut, R>(f: F) -> Result<R>
where
    F: FnOnce(BackendClient) -> Fut,
    Fut: std::future::Future<Output = Result<R>>,
{
    match BackendClient::new() {
        Ok(client) => f(client).await,
        Err(e) => {
            println!("❌ Failed to initialize backend client: {e}");
            Err(e.into())
        }
    }
}

/// Admin surfaces (user approval, login reset) are gated on the configured
/// admin account matching the stored session.
pub fn require_admin() -> Result<Session> {
    let session = Session::load()?
        .ok_or_else(|| anyhow::anyhow!("not signed in - run 'recon-desk login <email>' first"))?;

    let admin_email = config()?
        .auth
        .as_ref()
        .and_then(|auth| auth.admin_email.clone())
        .ok_or_else(|| anyhow::anyhow!("no admin account configured (auth.admin_email)"))?;

    if !session.email.eq_ignore_ascii_case(&admin_email) {
        anyhow::bail!("access denied - {} is not the admin account", session.email);
    }
    Ok(session)
}
