//! Route handlers.

use axum::http::StatusCode;
use folio_core::FolioError;

pub mod page;
pub mod projects;
pub mod sections;

/// Map a render failure to a 500 response.
pub(crate) fn internal_error(err: FolioError) -> (StatusCode, String) {
    tracing::error!(error = %err, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
