//! Embedded page and grid item templates.
//!
//! All templates live in one autoescaping [`Tera`] instance. Each active
//! record renders through its category partial into exactly one top-level
//! `<div class="<category>-item">` node.

use std::error::Error;
use tera::{Context, Tera};

use folio_core::{FolioError, FolioResult, ProjectCategory, ProjectRecord};

pub(crate) const PAGE: &str = "page.html";
const SCRIPTING_ITEM: &str = "partials/scripting_item.html";
const WEB_ITEM: &str = "partials/web_item.html";
const BOT_ITEM: &str = "partials/bot_item.html";
const PLACEHOLDER: &str = "partials/placeholder.html";

const SOURCES: [(&str, &str); 5] = [
    (PAGE, include_str!("../templates/page.html")),
    (SCRIPTING_ITEM, include_str!("../templates/partials/scripting_item.html")),
    (WEB_ITEM, include_str!("../templates/partials/web_item.html")),
    (BOT_ITEM, include_str!("../templates/partials/bot_item.html")),
    (PLACEHOLDER, include_str!("../templates/partials/placeholder.html")),
];

const DEFAULT_BOT_ICON: &str = "fas fa-robot";

/// Class of the grid container inside a category section.
pub fn grid_class(category: ProjectCategory) -> String {
    format!("{}-grid", category.as_str())
}

/// Compiled site templates.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile the embedded templates.
    pub fn new() -> FolioResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES)
            .map_err(|e| FolioError::template(format!("Failed to compile templates: {}", e)))?;
        Ok(Self { tera })
    }

    /// The "nothing to show" message for an empty grid.
    pub fn placeholder(&self, category: ProjectCategory) -> FolioResult<String> {
        let subject = match category {
            ProjectCategory::Scripting => "No scripting projects",
            ProjectCategory::Web => "No web projects",
            ProjectCategory::Bot => "No bots",
        };
        let mut context = Context::new();
        context.insert("subject", subject);
        self.render(PLACEHOLDER, &context)
    }

    /// Render one record with its category partial.
    pub fn render_item(&self, record: &ProjectRecord) -> FolioResult<String> {
        let mut context = Context::new();
        let name = match record {
            ProjectRecord::Scripting(p) => {
                context.insert("project", p);
                context.insert("image", &non_empty(p.image.as_deref()));
                SCRIPTING_ITEM
            }
            ProjectRecord::Web(p) => {
                context.insert("project", p);
                context.insert("image", &non_empty(p.image.as_deref()));
                context.insert("github", &non_empty(p.github_url.as_deref()));
                WEB_ITEM
            }
            ProjectRecord::Bot(p) => {
                context.insert("project", p);
                context.insert("icon", non_empty(p.icon.as_deref()).unwrap_or(DEFAULT_BOT_ICON));
                BOT_ITEM
            }
        };
        self.render(name, &context)
    }

    pub(crate) fn render(&self, name: &str, context: &Context) -> FolioResult<String> {
        let html = self
            .tera
            .render(name, context)
            .map_err(|e| FolioError::template(format!("Failed to render '{}': {}", name, describe(&e))))?;
        Ok(html.trim().to_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Tera keeps the useful part of a render failure in the source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
