//! Route handlers for the résumé API.
//!
//! All state lives in the shared `ResumeSlot`; handlers clone the record out
//! of the lock for read paths and hold the write lock only for the actual
//! mutation, never across a network call.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::export_document;
use crate::models::resume::{Project, ResumeRecord};
use crate::render::{render, DocumentTree, TemplateVariant};
use crate::resume::editor::{EditOp, EditSession};
use crate::resume::projects::{
    add_project, delete_project, generate_description, position_of, update_project, ProjectForm,
};
use crate::state::AppState;
use crate::stats::{aggregate, StatsResponse};

const NO_RESUME: &str = "no resume loaded; fetch a GitHub profile first";

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct VariantQuery {
    #[serde(default)]
    pub variant: TemplateVariant,
}

#[derive(Debug, Deserialize)]
pub struct EditsRequest {
    pub ops: Vec<EditOp>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub title: String,
    #[serde(rename = "type", default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/v1/resume/fetch
/// Fetches the GitHub profile and repositories and builds a fresh record.
pub async fn handle_fetch(
    State(state): State<AppState>,
    Json(req): Json<FetchRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }

    // Ticket before the round-trip; commit after, so a slow older fetch
    // cannot overwrite a newer one.
    let ticket = state.resume.write().await.begin_fetch();
    let record = state.github.fetch_resume(username).await?;

    let mut slot = state.resume.write().await;
    if !slot.commit_fetch(ticket, record) {
        warn!(username, "dropping stale fetch result");
    }
    let current = slot
        .record()
        .cloned()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))?;
    Ok(Json(current))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = current_record(&state).await?;
    Ok(Json(record))
}

/// PUT /api/v1/resume — wholesale replacement of the record.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut slot = state.resume.write().await;
    slot.replace(record.clone());
    Ok(Json(record))
}

/// POST /api/v1/resume/edits — applies a batch of edits atomically.
/// Any failing op aborts the whole batch and leaves the record untouched.
pub async fn handle_edits(
    State(state): State<AppState>,
    Json(req): Json<EditsRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut slot = state.resume.write().await;
    let record = slot
        .record()
        .cloned()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))?;

    let mut session = EditSession::begin(record);
    for op in &req.ops {
        if let Err(err) = session.apply(op) {
            // Atomic batch: put the committed record back untouched.
            slot.replace(session.cancel());
            return Err(err);
        }
    }
    let saved = session.save();
    slot.replace(saved.clone());
    info!(ops = req.ops.len(), "applied edit batch");
    Ok(Json(saved))
}

/// GET /api/v1/resume/render?variant=
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<DocumentTree>, AppError> {
    let record = current_record(&state).await?;
    Ok(Json(render(&record, query.variant)))
}

/// POST /api/v1/resume/export?variant= — paginated PDF download.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<impl IntoResponse, AppError> {
    let record = current_record(&state).await?;
    let variant = query.variant;
    let rasterizer = state.rasterizer.clone();

    // Rasterization and JPEG/PDF encoding are CPU-bound.
    let document = tokio::task::spawn_blocking(move || {
        export_document(&record, variant, &rasterizer)
    })
    .await
    .map_err(|e| AppError::Export(format!("export task failed: {e}")))??;

    info!(
        variant = ?variant,
        bytes = document.bytes.len(),
        "exported resume PDF"
    );
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];
    Ok((headers, document.bytes))
}

/// GET /api/v1/resume/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = current_record(&state).await?;
    Ok(Json(aggregate(&record)))
}

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Json(form): Json<ProjectForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut slot = state.resume.write().await;
    let record = slot
        .record_mut()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))?;
    let id = add_project(record, form)?;
    let position = position_of(&record.projects, id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "position": position })),
    ))
}

/// PUT /api/v1/resume/projects/:id
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<ProjectForm>,
) -> Result<Json<Project>, AppError> {
    let mut slot = state.resume.write().await;
    let record = slot
        .record_mut()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))?;
    update_project(record, id, form)?;
    let updated = record
        .projects
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("project {id} not found")))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut slot = state.resume.write().await;
    let record = slot
        .record_mut()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))?;
    delete_project(record, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/projects/describe
/// Generates a description for the submitted form. Nothing is saved; the
/// caller decides whether to keep the text.
pub async fn handle_describe_project(
    State(state): State<AppState>,
    Json(req): Json<DescribeRequest>,
) -> Result<Json<Value>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation(
            "project title is required to generate a description".to_string(),
        ));
    }
    let text = generate_description(
        &req.title,
        &req.project_type,
        &req.description,
        state.generator.as_ref(),
    )
    .await?;
    Ok(Json(json!({ "description": text })))
}

async fn current_record(state: &AppState) -> Result<ResumeRecord, AppError> {
    state
        .resume
        .read()
        .await
        .record()
        .cloned()
        .ok_or_else(|| AppError::NotFound(NO_RESUME.to_string()))
}
