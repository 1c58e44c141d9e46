//! Project creation form: field state and client-side validation.
//!
//! Validation collects every field error at once into [`FormErrors`]; a
//! form with any error must not be submitted.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::projects::{normalize_optional_url, CreateProject};

/// Loose "http(s)://host.something" check used for the optional URL fields.
const URL_PATTERN: &str = r"^https?://.+\..+";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

/// Keys an error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Description,
    Technologies,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
    /// Top-level error from the server; not tied to an input.
    Submit,
}

/// Field name to message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

/// Raw input values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub github_url: String,
    pub technologies: Vec<String>,
}

impl ProjectForm {
    /// Check every field and return all errors found.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, "Description is required");
        }
        if self.technologies.is_empty() {
            errors.insert(FormField::Technologies, "Add at least one technology");
        }

        let urls = [
            (FormField::ImageUrl, &self.image_url, "Image URL must be a valid URL"),
            (FormField::ProjectUrl, &self.project_url, "Project URL must be a valid URL"),
            (FormField::GithubUrl, &self.github_url, "GitHub URL must be a valid URL"),
        ];
        for (field, value, message) in urls {
            if !value.is_empty() && !is_loose_url(value) {
                errors.insert(field, message);
            }
        }

        errors
    }

    /// The create request body for the current values.
    pub fn to_payload(&self) -> CreateProject {
        CreateProject {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: normalize_optional_url(Some(self.image_url.clone())),
            project_url: normalize_optional_url(Some(self.project_url.clone())),
            github_url: normalize_optional_url(Some(self.github_url.clone())),
            technologies: self.technologies.clone(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `true` if `value` looks like `http(s)://host.something`.
pub fn is_loose_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectForm {
        ProjectForm {
            title: "Portfolio".into(),
            description: "Personal site".into(),
            technologies: vec!["Rust".into()],
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn empty_title_and_technologies_report_two_errors() {
        let form = ProjectForm {
            title: String::new(),
            technologies: Vec::new(),
            ..filled()
        };
        let errors = form.validate();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(
            errors.get(FormField::Technologies),
            Some("Add at least one technology")
        );
    }

    #[test]
    fn whitespace_only_description_is_missing() {
        let form = ProjectForm {
            description: "  \n".into(),
            ..filled()
        };
        assert!(form.validate().get(FormField::Description).is_some());
    }

    #[test]
    fn malformed_urls_are_all_reported() {
        let form = ProjectForm {
            image_url: "not a url".into(),
            project_url: "ftp://example.com".into(),
            github_url: "https://localhost".into(),
            ..filled()
        };
        let errors = form.validate();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            [FormField::ImageUrl, FormField::ProjectUrl, FormField::GithubUrl]
        );
    }

    #[test]
    fn well_formed_urls_pass() {
        let form = ProjectForm {
            image_url: "https://cdn.example.com/a.png".into(),
            project_url: "http://demo.example.org".into(),
            github_url: "https://github.com/me/site".into(),
            ..filled()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn payload_drops_empty_urls() {
        let payload = ProjectForm {
            project_url: "https://demo.example.org".into(),
            ..filled()
        }
        .to_payload();
        assert_eq!(payload.image_url, None);
        assert_eq!(payload.project_url.as_deref(), Some("https://demo.example.org"));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::ImageUrl, "bad");
        errors.insert(FormField::Submit, "server said no");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"imageUrl": "bad", "submit": "server said no"}));
    }

    #[test]
    fn clear_resets_fields() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ProjectForm::default());
    }
}
