//! REST client for the project API.
//!
//! Wraps the `/api/projects` endpoints using [`reqwest`]. Error responses
//! are decoded from the server's `{ "error", "code" }` envelope.

use async_trait::async_trait;
use folio_core::projects::{CreateProject, ProjectRecord, UpdateProject};
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors from the project API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable code from the error envelope, if any.
        code: Option<String>,
        /// Human-readable message suitable for display.
        message: String,
    },
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    code: Option<String>,
}

/// Confirmation body returned by a delete.
#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: String,
}

/// The operations the gallery and the form need from the API.
#[async_trait]
pub trait ProjectBackend: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError>;

    async fn create_project(&self, input: &CreateProject) -> Result<ProjectRecord, ClientError>;
}

/// HTTP client for a running project API.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectsApi {
    /// Create a client for the API served at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/projects", self.base_url)
    }

    fn item_url(&self, id: DbId) -> String {
        format!("{}/api/projects/{id}", self.base_url)
    }

    /// `GET /api/projects`
    pub async fn list(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}`
    pub async fn get(&self, id: DbId) -> Result<ProjectRecord, ClientError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects`
    pub async fn create(&self, input: &CreateProject) -> Result<ProjectRecord, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/projects/{id}`
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self.client.put(self.item_url(id)).json(input).send().await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/projects/{id}`. Returns the server's confirmation message.
    pub async fn delete(&self, id: DbId) -> Result<String, ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        let body: MessageEnvelope = Self::parse_response(response).await?;
        Ok(body.message)
    }

    // ---- private helpers ----

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let envelope = response.json::<ErrorEnvelope>().await.ok();
        let (code, message) = match envelope {
            Some(ErrorEnvelope { error, code }) => (code, error),
            None => (None, None),
        };
        let message = message.unwrap_or_else(|| format!("Request failed with status {status}"));
        tracing::debug!(status = status.as_u16(), ?code, %message, "Project API error");

        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[async_trait]
impl ProjectBackend for ProjectsApi {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        self.list().await
    }

    async fn create_project(&self, input: &CreateProject) -> Result<ProjectRecord, ClientError> {
        self.create(input).await
    }
}
