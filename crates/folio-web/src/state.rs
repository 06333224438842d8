//! Application state.

use folio_render::{PageDocument, PageRenderer, Site};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The live site behind the preview server.
pub type SharedSite = Arc<Mutex<Site<PageDocument>>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: SharedSite,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(site: Site<PageDocument>) -> Self {
        let pages = Arc::new(PageRenderer::new(site.templates()));
        Self {
            site: Arc::new(Mutex::new(site)),
            pages,
        }
    }
}
