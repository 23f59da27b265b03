//! CRUD handlers for `/api/presentations`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::model::{Presentation, PresentationDraft};
use crate::server::error::ApiError;
use crate::store::PresentationStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PresentationStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PresentationStore>) -> Self {
        Self { store }
    }
}

fn parse_draft(
    payload: Result<Json<PresentationDraft>, JsonRejection>,
) -> Result<PresentationDraft, ApiError> {
    let Json(draft) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    draft.validate()?;
    Ok(draft)
}

/// GET /api/presentations
pub async fn list_presentations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Presentation>>, ApiError> {
    Ok(Json(state.store.list()?))
}

/// GET /api/presentations/{id}
pub async fn get_presentation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Presentation>, ApiError> {
    state.store.get(&id)?.map(Json).ok_or(ApiError::NotFound)
}

/// POST /api/presentations
pub async fn create_presentation(
    State(state): State<AppState>,
    payload: Result<Json<PresentationDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Presentation>), ApiError> {
    let draft = parse_draft(payload)?;
    let presentation = state.store.create(draft)?;
    tracing::info!(
        id = presentation.id(),
        slides = presentation.slide_count(),
        "Created presentation"
    );
    Ok((StatusCode::CREATED, Json(presentation)))
}

/// PATCH /api/presentations/{id}
///
/// Replaces title, slides, duration and font size as a whole.
pub async fn update_presentation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PresentationDraft>, JsonRejection>,
) -> Result<Json<Presentation>, ApiError> {
    let draft = parse_draft(payload)?;
    let presentation = state.store.update(&id, draft)?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = presentation.id(), "Updated presentation");
    Ok(Json(presentation))
}

/// DELETE /api/presentations/{id}
pub async fn delete_presentation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&id)? {
        tracing::info!(id = %id, "Deleted presentation");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
