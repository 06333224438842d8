//! Section visibility route handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use folio_core::ProjectCategory;
use folio_render::RenderReport;

use super::internal_error;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SectionsResponse {
    pub visible: Vec<ProjectCategory>,
    pub render_count: u64,
}

/// GET /api/sections - Visible categories in display order.
pub async fn list_sections(State(state): State<AppState>) -> Json<SectionsResponse> {
    let site = state.site.lock().await;
    Json(SectionsResponse {
        visible: site.get_visible_categories(),
        render_count: site.render_count(),
    })
}

/// POST /api/refresh - Force a render pass.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RenderReport>, (StatusCode, String)> {
    let mut site = state.site.lock().await;
    let report = site.refresh().map_err(internal_error)?;
    Ok(Json(report.clone()))
}
