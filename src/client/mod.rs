use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::{AuthResponse, PublicUser};
use crate::todos::Todo;

pub mod session;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Token missing, expired or rejected. The caller should drop the stored
    /// session and ask for a fresh login.
    #[error("authentication required")]
    Unauthenticated,
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Thin typed wrapper over the REST API, one request per call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// The server answers errors with `{"error": "..."}`; surface that
    /// string directly.
    async fn handle<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthenticated);
        }
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| format!("request failed with status {}", status));
        Err(ClientError::Api { status, message })
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let resp = self
            .request(reqwest::Method::POST, "/api/auth/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let resp = self
            .request(reqwest::Method::POST, "/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn me(&self) -> Result<PublicUser, ClientError> {
        let resp = self.request(reqwest::Method::GET, "/api/auth/me").send().await?;
        Self::handle(resp).await
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let resp = self.request(reqwest::Method::GET, "/api/todos").send().await?;
        Self::handle(resp).await
    }

    pub async fn create_todo(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, ClientError> {
        let resp = self
            .request(reqwest::Method::POST, "/api/todos")
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn update_todo(&self, id: i64, patch: Value) -> Result<Todo, ClientError> {
        let resp = self
            .request(reqwest::Method::PUT, &format!("/api/todos/{}", id))
            .json(&patch)
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn delete_todo(&self, id: i64) -> Result<Value, ClientError> {
        let resp = self
            .request(reqwest::Method::DELETE, &format!("/api/todos/{}", id))
            .send()
            .await?;
        Self::handle(resp).await
    }
}
