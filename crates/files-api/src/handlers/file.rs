//! File create, lookup, listing, visibility and content handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use files_core::error::{AppError, ErrorKind};
use files_entity::file::FileRecord;

use crate::dto::request::{CreateFileRequest, ListFilesQuery};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_file_id, parse_page};
use crate::state::AppState;

/// POST /files
///
/// The body is parsed by hand so that an empty or malformed body becomes a
/// validation error instead of an extractor rejection.
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<FileRecord>), ApiError> {
    let request: CreateFileRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateFileRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::with_source(ErrorKind::Validation, "Invalid JSON body", e))?
    };

    let record = state.upload_service.create(&auth, request.into()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let file_id = parse_file_id(&id)?;
    let record = state.file_service.get(&auth, file_id).await?;
    Ok(Json(record))
}

/// GET /files?parentId=...&page=...
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ListFilesQuery>, QueryRejection>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let page = parse_page(query.page.as_deref())?;

    let records = state
        .file_service
        .list(&auth, query.parent_id.as_deref(), page)
        .await?;
    Ok(Json(records))
}

/// PUT /files/{id}/publish
pub async fn publish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let file_id = parse_file_id(&id)?;
    let record = state.file_service.publish(&auth, file_id).await?;
    Ok(Json(record))
}

/// PUT /files/{id}/unpublish
pub async fn unpublish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let file_id = parse_file_id(&id)?;
    let record = state.file_service.unpublish(&auth, file_id).await?;
    Ok(Json(record))
}

/// GET /files/{id}/data
pub async fn get_file_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let file_id = parse_file_id(&id)?;
    let content = state.download_service.get_content(&auth, file_id).await?;

    Ok((
        [(header::CONTENT_TYPE, content.content_type)],
        content.data,
    )
        .into_response())
}
