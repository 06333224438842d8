//! Project route handlers.
//!
//! The admin function surface over HTTP. Unknown category names read as
//! empty lists; mutations against them are rejected with 404 since there is
//! no list to act on.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use folio_core::{ProjectCategory, ProjectRecord, ProjectStatus};
use folio_render::RenderReport;

use super::internal_error;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

fn parse_category(name: &str) -> Result<ProjectCategory, (StatusCode, String)> {
    ProjectCategory::parse(name)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown category: {}", name)))
}

/// GET /api/projects/{category} - Active projects, in display order.
pub async fn list_active(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<ProjectRecord>> {
    let site = state.site.lock().await;
    let projects: Vec<ProjectRecord> = site
        .store()
        .get_active_projects_named(&category)
        .into_iter()
        .cloned()
        .collect();
    Json(projects)
}

/// POST /api/projects/{category} - Append a project.
pub async fn add_project(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(record): Json<ProjectRecord>,
) -> Result<(StatusCode, Json<RenderReport>), (StatusCode, String)> {
    let category = parse_category(&category)?;
    if record.category() != category {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Record of type '{}' posted to '{}'", record.category(), category),
        ));
    }

    let mut site = state.site.lock().await;
    let report = site.add_project(record).map_err(internal_error)?.clone();
    Ok((StatusCode::CREATED, Json(report)))
}

/// DELETE /api/projects/{category}/{title} - Remove the first matching project.
pub async fn remove_project(
    State(state): State<AppState>,
    Path((category, title)): Path<(String, String)>,
) -> Result<Json<RenderReport>, (StatusCode, String)> {
    let category = parse_category(&category)?;
    let mut site = state.site.lock().await;
    let report = site.remove_project(category, &title).map_err(internal_error)?;
    Ok(Json(report.clone()))
}

/// PUT /api/projects/{category}/{title}/status - Change a project's status.
pub async fn set_status(
    State(state): State<AppState>,
    Path((category, title)): Path<(String, String)>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<RenderReport>, (StatusCode, String)> {
    let category = parse_category(&category)?;
    let status: ProjectStatus = req
        .status
        .parse()
        .map_err(|e: folio_core::FolioError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    debug!(%category, title = %title, %status, "Status update requested");
    let mut site = state.site.lock().await;
    let report = site.set_status(category, &title, status).map_err(internal_error)?;
    Ok(Json(report.clone()))
}
