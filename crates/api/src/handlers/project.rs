//! Handlers for the `/projects` resource.
//!
//! Path ids arrive as raw strings so that a non-numeric id is reported as
//! `INVALID_IDENTIFIER` in the JSON error envelope. Every check runs before
//! the store is touched.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::projects::{self, CreateProject, UpdateProject};
use folio_core::types::DbId;
use folio_db::models::project::Project;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Decode an update body. An empty or whitespace-only body is `null`.
fn parse_update_body(headers: &HeaderMap, body: &[u8]) -> AppResult<serde_json::Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }

    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"));
    if !is_json {
        return Err(AppError::BadRequest(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    serde_json::from_slice(body).map_err(|e| {
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
    })
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: projects::ENTITY,
        id,
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list().await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = projects::parse_project_id(&raw_id)?;
    let project = state.store.find_by_id(id).await?.ok_or(not_found(id))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload?;
    input.validate()?;
    let input = input.normalized();

    let project = state.store.create(&input).await?;
    tracing::info!(project_id = project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
///
/// Only fields present in the body are written. `imageUrl`, `projectUrl`
/// and `githubUrl` supplied as `null` or `""` are cleared. A missing body
/// counts as an empty update.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Project>> {
    let id = projects::parse_project_id(&raw_id)?;
    let body = parse_update_body(&headers, &body)?;
    let input = UpdateProject::from_json(body)?;

    let project = state.store.update(id, &input).await?.ok_or(not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = projects::parse_project_id(&raw_id)?;
    if !state.store.delete(id).await? {
        return Err(not_found(id).into());
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}
