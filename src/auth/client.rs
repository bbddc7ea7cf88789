use super::session::Session;
use crate::config::config;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth provider rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("could not reach the auth provider: {0}")]
    Network(#[from] reqwest::Error),
    #[error("auth configuration missing: {0}")]
    Config(String),
    #[error("could not persist session: {0}")]
    Session(#[from] std::io::Error),
}

/// Client for the external auth provider (GoTrue-style API). Sign-in state
/// lives with the provider; this client only requests links/tokens and
/// persists the resulting session locally.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    email: String,
}

impl AuthClient {
    pub fn new() -> Result<Self, AuthError> {
        let cfg = config().map_err(|e| AuthError::Config(e.to_string()))?;
        let auth = cfg
            .auth
            .as_ref()
            .ok_or_else(|| AuthError::Config("no [auth] section configured".to_string()))?;
        Ok(Self::with_endpoint(auth.url.clone(), auth.anon_key.clone()))
    }

    pub fn with_endpoint(auth_url: String, anon_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: auth_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    /// Request a magic sign-in link be mailed to the user. Completing the
    /// link happens in the browser; the CLI path for non-interactive use is
    /// the password grant below.
    pub async fn request_magic_link(&self, email: &str) -> Result<(), AuthError> {
        debug!(email, "requesting magic link");
        let response = self
            .http
            .post(format!("{}/auth/v1/otp", self.auth_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Password sign-in. On success the session is persisted and becomes the
    /// backend bearer token.
    pub async fn password_login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        debug!(email, "password sign-in");
        let response = self
            .http
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.auth_url
            ))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let token: TokenResponse = Self::check(response).await?.json().await?;

        let session = Session {
            access_token: token.access_token,
            user_id: token.user.id,
            email: token.user.email,
        };
        session.save()?;
        Ok(session)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
