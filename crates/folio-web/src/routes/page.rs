//! Page route handler.
//!
//! Serves the full site as rendered from the live document.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};

use super::internal_error;
use crate::state::AppState;

/// GET / - Render the current page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let site = state.site.lock().await;
    let html = state
        .pages
        .render(site.config(), site.presenter())
        .map_err(internal_error)?;
    Ok(Html(html))
}
