#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use folio_client::api::{ClientError, ProjectBackend};
use folio_core::projects::{CreateProject, ProjectRecord};
use tokio_util::sync::CancellationToken;

/// What the stub answers to a list request.
pub enum ListReply {
    Records(Vec<ProjectRecord>),
    Error { status: u16, message: &'static str },
    /// Never resolves.
    Hang,
    /// Cancels the token, then resolves with the records.
    CancelThenReturn(CancellationToken, Vec<ProjectRecord>),
}

/// In-process stand-in for the project API.
pub struct StubBackend {
    pub list_reply: ListReply,
    pub create_error: Option<&'static str>,
    pub list_calls: AtomicUsize,
    pub created: Mutex<Vec<CreateProject>>,
}

impl StubBackend {
    pub fn new(list_reply: ListReply) -> Self {
        Self {
            list_reply,
            create_error: None,
            list_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_creates(message: &'static str) -> Self {
        Self {
            create_error: Some(message),
            ..Self::new(ListReply::Records(Vec::new()))
        }
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

#[async_trait]
impl ProjectBackend for StubBackend {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.list_reply {
            ListReply::Records(records) => Ok(records.clone()),
            ListReply::Error { status, message } => Err(ClientError::Api {
                status: *status,
                code: Some("INTERNAL_ERROR".to_string()),
                message: message.to_string(),
            }),
            ListReply::Hang => std::future::pending().await,
            ListReply::CancelThenReturn(token, records) => {
                token.cancel();
                Ok(records.clone())
            }
        }
    }

    async fn create_project(&self, input: &CreateProject) -> Result<ProjectRecord, ClientError> {
        let mut created = self.created.lock().unwrap();
        created.push(input.clone());
        if let Some(message) = self.create_error {
            return Err(ClientError::Api {
                status: 400,
                code: Some("VALIDATION_ERROR".to_string()),
                message: message.to_string(),
            });
        }
        Ok(ProjectRecord {
            id: Some(created.len() as i64 + 100),
            title: input.title.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            project_url: input.project_url.clone(),
            github_url: input.github_url.clone(),
            technologies: input.technologies.clone(),
            ..Default::default()
        })
    }
}

pub fn record(id: i64, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: Some(id),
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string()],
        ..Default::default()
    }
}
