//! "Add project" form controller.
//!
//! Owns the form fields, the technology tag input and the state of the
//! create request. Submission validates locally first and never calls the
//! API while any field error exists or while a create is in flight.

use folio_core::load_state::LoadState;
use folio_core::project_form::{FormErrors, FormField, ProjectForm};
use folio_core::projects::ProjectRecord;
use folio_core::technology_input::{InputKey, TechnologyInput};

use crate::api::{ClientError, ProjectBackend};

/// Result of a [`ProjectFormController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The project was created; the form has been cleared.
    Created(ProjectRecord),
    /// Local validation failed; see [`ProjectFormController::errors`].
    Invalid,
    /// The server rejected the request; the message is under [`FormField::Submit`].
    Rejected,
    /// A create request is already outstanding.
    Busy,
}

#[derive(Debug, Default)]
pub struct ProjectFormController {
    pub form: ProjectForm,
    tags: TechnologyInput,
    errors: FormErrors,
    submission: LoadState<()>,
}

impl ProjectFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// `true` while a create request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn submission(&self) -> &LoadState<()> {
        &self.submission
    }

    // -- technology tags ------------------------------------------------------

    pub fn tags(&self) -> &TechnologyInput {
        &self.tags
    }

    pub fn set_technology_draft(&mut self, value: impl Into<String>) {
        self.tags.set_draft(value);
    }

    pub fn add_technology(&mut self, value: &str) -> bool {
        self.tags.add(&mut self.form.technologies, value)
    }

    pub fn add_quick_pick(&mut self, index: usize) -> bool {
        self.tags.add_quick_pick(&mut self.form.technologies, index)
    }

    pub fn submit_technology_draft(&mut self) -> bool {
        self.tags.submit_draft(&mut self.form.technologies)
    }

    pub fn technology_key(&mut self, key: InputKey) -> bool {
        self.tags.handle_key(key, &mut self.form.technologies)
    }

    pub fn remove_technology(&mut self, index: usize) -> Option<String> {
        TechnologyInput::remove(&mut self.form.technologies, index)
    }

    // -- submission -----------------------------------------------------------

    /// Validate and, if clean, create the project through `backend`.
    pub async fn submit<B>(&mut self, backend: &B) -> SubmitOutcome
    where
        B: ProjectBackend + ?Sized,
    {
        if self.submission.is_loading() {
            return SubmitOutcome::Busy;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            tracing::debug!(fields = self.errors.len(), "Project form has errors");
            return SubmitOutcome::Invalid;
        }

        self.submission.begin();
        match backend.create_project(&self.form.to_payload()).await {
            Ok(created) => {
                self.submission.succeed(());
                self.form.clear();
                self.tags = TechnologyInput::default();
                self.errors.clear();
                tracing::info!(project_id = ?created.id, "Project created from form");
                SubmitOutcome::Created(created)
            }
            Err(err) => {
                let message = match err {
                    ClientError::Api { message, .. } => message,
                    other => other.to_string(),
                };
                self.errors.insert(FormField::Submit, message.clone());
                self.submission.fail(message);
                SubmitOutcome::Rejected
            }
        }
    }
}
