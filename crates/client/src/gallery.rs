//! Gallery loader: fetch project records and derive the display list.
//!
//! A load runs `Idle → Loading → Success | Error`. The fetch races a
//! [`CancellationToken`]; if the token fires before the response is
//! committed, the response is discarded and the state returns to `Idle`.

use folio_core::gallery::{reconcile, DisplayProject, Placeholders};
use folio_core::load_state::LoadState;
use folio_core::projects::ProjectRecord;
use tokio_util::sync::CancellationToken;

use crate::api::{ClientError, ProjectBackend};

/// Message shown when the API answers a list request with an error status.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load projects";

/// Result of a [`Gallery::load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The display list was recomputed from this many records.
    Loaded(usize),
    /// The fetch failed; the message is in the load state.
    Failed,
    /// The token fired before the result was committed.
    Cancelled,
    /// A load was already in flight; nothing was started.
    AlreadyLoading,
}

#[derive(Debug, Default)]
pub struct Gallery {
    placeholders: Placeholders,
    records: Vec<ProjectRecord>,
    state: LoadState<Vec<DisplayProject>>,
}

impl Gallery {
    pub fn new(placeholders: Placeholders) -> Self {
        Self {
            placeholders,
            records: Vec::new(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<DisplayProject>> {
        &self.state
    }

    /// Cards to render; empty unless the last load succeeded.
    pub fn projects(&self) -> &[DisplayProject] {
        self.state.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Records as last received, before reconciliation.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Fetch all records from `backend` and rebuild the display list.
    pub async fn load<B>(&mut self, backend: &B, cancel: &CancellationToken) -> LoadOutcome
    where
        B: ProjectBackend + ?Sized,
    {
        if !self.state.begin() {
            return LoadOutcome::AlreadyLoading;
        }

        let fetched = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            result = backend.list_projects() => Some(result),
        };

        let Some(result) = fetched.filter(|_| !cancel.is_cancelled()) else {
            tracing::debug!("Gallery load cancelled; discarding response");
            self.state.reset();
            return LoadOutcome::Cancelled;
        };

        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.state.succeed(reconcile(&self.records, &self.placeholders));
                tracing::debug!(count, "Gallery loaded");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Gallery load failed");
                let message = match err {
                    ClientError::Api { .. } => LOAD_ERROR_MESSAGE.to_string(),
                    ClientError::Request(e) => e.to_string(),
                };
                self.state.fail(message);
                LoadOutcome::Failed
            }
        }
    }

    /// Put a freshly created record at the front and recompute the cards.
    ///
    /// The reconciler's identity de-duplication absorbs the overlap if the
    /// same record later arrives from a fetch as well.
    pub fn insert_created(&mut self, record: ProjectRecord) {
        self.records.insert(0, record);
        if let LoadState::Success(display) = &mut self.state {
            *display = reconcile(&self.records, &self.placeholders);
        }
    }
}
