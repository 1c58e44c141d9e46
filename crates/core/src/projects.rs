//! Project record payloads and request validation.
//!
//! Handlers call these before touching the store so that malformed input is
//! rejected as a validation error and never reaches the database.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::patch::Patch;
use crate::types::{DbId, Timestamp};

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Project";

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Parse a path segment into a project id.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer is an [`CoreError::InvalidIdentifier`].
pub fn parse_project_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::InvalidIdentifier(format!("Invalid project ID '{raw}'")))
}

// ---------------------------------------------------------------------------
// Wire record
// ---------------------------------------------------------------------------

/// A project as seen by API consumers.
///
/// Every field is tolerant of omission so that optimistically inserted
/// records (which may not carry an id yet) can be reconciled alongside
/// records fetched from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// DTO for creating a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
}

impl CreateProject {
    /// Check required fields: non-blank title, description and technology entries.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required_text("title", &self.title)?;
        validate_required_text("description", &self.description)?;
        validate_technologies(&self.technologies)
    }

    /// Collapse empty optional URLs to absent.
    pub fn normalized(self) -> Self {
        Self {
            image_url: normalize_optional_url(self.image_url),
            project_url: normalize_optional_url(self.project_url),
            github_url: normalize_optional_url(self.github_url),
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// DTO for a partial update. Only [`Patch::Set`] fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub image_url: Patch<Option<String>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub project_url: Patch<Option<String>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub github_url: Patch<Option<String>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub technologies: Patch<Vec<String>>,
}

impl UpdateProject {
    /// Build an update from a raw JSON request body.
    ///
    /// - `null`, `{}` or any non-object body is [`CoreError::EmptyUpdate`].
    /// - A present `technologies` key that is not an array is
    ///   [`CoreError::InvalidTechnologies`].
    /// - Any other shape mismatch is [`CoreError::Validation`].
    ///
    /// URL fields supplied as `null` or `""` are normalized to absent.
    /// Title and description are taken as given.
    pub fn from_json(body: serde_json::Value) -> Result<Self, CoreError> {
        let fields = match &body {
            serde_json::Value::Object(fields) if !fields.is_empty() => fields,
            _ => return Err(CoreError::EmptyUpdate),
        };

        if let Some(technologies) = fields.get("technologies") {
            if !technologies.is_array() {
                return Err(CoreError::InvalidTechnologies);
            }
        }

        let update: UpdateProject = serde_json::from_value(body)
            .map_err(|e| CoreError::Validation(format!("Invalid update payload: {e}")))?;

        if let Some(technologies) = update.technologies.as_set() {
            validate_technologies(technologies)?;
        }

        Ok(update.normalized())
    }

    /// Collapse supplied-but-empty URL fields to an explicit absent value.
    pub fn normalized(self) -> Self {
        Self {
            image_url: self.image_url.map(normalize_optional_url),
            project_url: self.project_url.map(normalize_optional_url),
            github_url: self.github_url.map(normalize_optional_url),
            ..self
        }
    }

    /// `true` when no recognised field is supplied.
    pub fn is_noop(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.image_url.is_absent()
            && self.project_url.is_absent()
            && self.github_url.is_absent()
            && self.technologies.is_absent()
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Treat an empty URL string the same as no URL.
pub fn normalize_optional_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.is_empty())
}

fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("Field '{field}' is required")));
    }
    Ok(())
}

/// Every technology label must be non-blank. Duplicates are allowed.
pub fn validate_technologies(technologies: &[String]) -> Result<(), CoreError> {
    for (i, tech) in technologies.iter().enumerate() {
        if tech.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Technology at index {i} must not be empty"
            )));
        }
    }
    Ok(())
}
