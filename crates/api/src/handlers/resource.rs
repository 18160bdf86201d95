//! Handlers shared by every catalog resource.
//!
//! Each handler is generic over the [`Document`] it serves and is
//! instantiated per resource in `routes/`, e.g. `resource::list::<Track>`.
//! Albums and sample packs use the `*_populated` read variants.

use axum::extract::{Path, State};
use axum::Json;
use catalog_core::document::{Document, Populate, Record};
use catalog_core::error::CoreError;
use catalog_core::types::{parse_doc_id, DocId};
use catalog_db::DocumentRepo;
use chrono::Utc;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/{resource}
///
/// Validate the body and persist a new document.
pub async fn create<D: Document>(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<D::Create>,
) -> AppResult<Json<Record<D>>> {
    let doc = D::from_create(input, Utc::now()).map_err(CoreError::from)?;
    let record = DocumentRepo::create(state.store.as_ref(), &doc).await?;
    tracing::info!(collection = %D::COLLECTION, id = %record.id, "Document created");
    Ok(Json(record))
}

/// GET /api/{resource}
pub async fn list<D: Document>(State(state): State<AppState>) -> AppResult<Json<Vec<Record<D>>>> {
    let records = DocumentRepo::list::<D>(state.store.as_ref()).await?;
    Ok(Json(records))
}

/// GET /api/{resource} with references expanded.
pub async fn list_populated<D: Populate>(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Record<D::Populated>>>> {
    let records = DocumentRepo::list_populated::<D>(state.store.as_ref()).await?;
    Ok(Json(records))
}

/// GET /api/{resource}/{id}
pub async fn get_one<D: Document>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Record<D>>> {
    let id = resolve_id::<D>(&raw_id)?;
    let record = DocumentRepo::find_by_id::<D>(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found::<D>(&raw_id))?;
    Ok(Json(record))
}

/// GET /api/{resource}/{id} with references expanded.
pub async fn get_populated<D: Populate>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Record<D::Populated>>> {
    let id = resolve_id::<D>(&raw_id)?;
    let record = DocumentRepo::find_populated::<D>(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found::<D>(&raw_id))?;
    Ok(Json(record))
}

/// PUT /api/{resource}/{id}
///
/// Apply the whitelisted fields present in the body. Fields absent from the
/// body keep their stored values. An unknown id answers not-found before
/// the body is decoded or validated.
pub async fn update<D: Document>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<Record<D>>> {
    let id = resolve_id::<D>(&raw_id)?;
    if DocumentRepo::find_by_id::<D>(state.store.as_ref(), id)
        .await?
        .is_none()
    {
        return Err(not_found::<D>(&raw_id));
    }

    let patch: D::Patch =
        serde_json::from_value(body).map_err(|err| AppError::MalformedBody(err.to_string()))?;
    D::validate_patch(&patch).map_err(CoreError::from)?;
    let record = DocumentRepo::update::<D>(state.store.as_ref(), id, &patch)
        .await?
        .ok_or_else(|| not_found::<D>(&raw_id))?;
    tracing::info!(collection = %D::COLLECTION, %id, "Document updated");
    Ok(Json(record))
}

/// DELETE /api/{resource}/{id}
///
/// Hard delete; documents referencing this one are not touched.
pub async fn delete<D: Document>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = resolve_id::<D>(&raw_id)?;
    if !DocumentRepo::delete::<D>(state.store.as_ref(), id).await? {
        return Err(not_found::<D>(&raw_id));
    }
    tracing::info!(collection = %D::COLLECTION, %id, "Document removed");
    Ok(Json(MessageResponse::removed(D::ENTITY)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Malformed ids answer exactly like unknown ones.
fn resolve_id<D: Document>(raw_id: &str) -> Result<DocId, AppError> {
    parse_doc_id(raw_id).ok_or_else(|| not_found::<D>(raw_id))
}

fn not_found<D: Document>(raw_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: D::ENTITY,
        id: raw_id.to_string(),
    })
}
