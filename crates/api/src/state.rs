use std::sync::Arc;

use folio_db::store::ProjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project record store (PostgreSQL or in-memory).
    pub store: Arc<dyn ProjectStore>,
}
