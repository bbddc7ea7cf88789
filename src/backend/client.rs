use super::errors::BackendError;
use super::import::ImportHandler;
use super::tasks::TaskHandler;
use super::users::UserHandler;
use crate::auth::session::Session;
use crate::config::config;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Client for the exception-tracking backend. Cheap to clone; handlers share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl BackendClient {
    /// Build a client from the global configuration and the stored session
    /// (if any). Most read endpoints work unauthenticated against dev
    /// backends, so a missing session is not an error here; the backend
    /// answers 401 where it cares.
    pub fn new() -> Result<Self, BackendError> {
        let cfg = config().map_err(|e| BackendError::ConfigNotFound(e.to_string()))?;
        let token = match Session::load() {
            Ok(Some(session)) => Some(session.access_token),
            _ => cfg.backend.token.clone(),
        };
        Ok(Self::with_base_url(cfg.backend.url.clone(), token))
    }

    pub fn with_base_url(base_url: String, bearer_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tasks(&self) -> TaskHandler {
        TaskHandler::new(self.clone())
    }

    pub fn users(&self) -> UserHandler {
        UserHandler::new(self.clone())
    }

    pub fn import(&self) -> ImportHandler {
        ImportHandler::new(self.clone())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let correlation_id = uuid::Uuid::new_v4();
        debug!(%correlation_id, path, "backend GET");
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let correlation_id = uuid::Uuid::new_v4();
        debug!(%correlation_id, path, "backend POST");
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST where the caller only cares that the mutation was confirmed.
    pub(crate) async fn post_confirm<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), BackendError> {
        let correlation_id = uuid::Uuid::new_v4();
        debug!(%correlation_id, path, "backend POST");
        let response = self.request(Method::POST, path).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BackendError::ApiError { status, message })
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError { status, message });
        }
        response.json::<T>().await.map_err(BackendError::from)
    }
}
