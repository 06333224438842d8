//! Section renderer.
//!
//! One render pass recomputes visibility from scratch and rewrites every
//! category's nav entry, section and grid through a [`Presenter`]. Grid
//! markup is built before the presenter is touched, so a template failure
//! leaves the document as it was.

use std::sync::Arc;

use folio_core::{FolioResult, Portfolio, ProjectCategory};
use serde::Serialize;
use tracing::debug;

use crate::presenter::{GridContent, Presenter};
use crate::templates::Templates;

/// Outcome of one grid regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSummary {
    pub category: ProjectCategory,
    pub items: usize,
    pub placeholder: bool,
}

/// What a render pass did. Skipped targets are informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub pass: u64,
    pub visible: Vec<ProjectCategory>,
    pub grids: Vec<GridSummary>,
    pub missing_nav: Vec<ProjectCategory>,
    pub missing_sections: Vec<ProjectCategory>,
    pub missing_grids: Vec<ProjectCategory>,
}

/// Drives render passes and counts them.
pub struct SectionRenderer {
    templates: Arc<Templates>,
    passes: u64,
}

impl SectionRenderer {
    pub fn new(templates: Arc<Templates>) -> Self {
        Self { templates, passes: 0 }
    }

    pub fn templates(&self) -> &Arc<Templates> {
        &self.templates
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Run one full render pass.
    pub fn render<P: Presenter + ?Sized>(
        &mut self,
        portfolio: &Portfolio,
        presenter: &mut P,
    ) -> FolioResult<RenderReport> {
        let grids = ProjectCategory::ALL
            .into_iter()
            .map(|category| grid_content(&self.templates, portfolio, category))
            .collect::<FolioResult<Vec<_>>>()?;

        self.passes += 1;
        let visible = portfolio.visible_categories();
        debug!(pass = self.passes, ?visible, "Rendering portfolio");

        let mut report = RenderReport {
            pass: self.passes,
            visible: visible.clone(),
            ..Default::default()
        };

        for (category, content) in ProjectCategory::ALL.into_iter().zip(grids) {
            let shown = visible.contains(&category);

            if !presenter.set_nav_visible(category, shown) {
                report.missing_nav.push(category);
            }

            if !presenter.set_section_visible(category, shown) {
                debug!(%category, "Section not in document, skipping");
                report.missing_sections.push(category);
                continue;
            }

            if !presenter.has_grid(category) {
                debug!(%category, "Grid not in document, skipping");
                report.missing_grids.push(category);
                continue;
            }

            report.grids.push(GridSummary {
                category,
                items: content.item_count(),
                placeholder: content.is_placeholder(),
            });
            presenter.replace_grid(category, content);
        }

        Ok(report)
    }
}

/// Build a category's grid: its active items in order, or the placeholder.
pub fn grid_content(
    templates: &Templates,
    portfolio: &Portfolio,
    category: ProjectCategory,
) -> FolioResult<GridContent> {
    let active = portfolio.active_projects(category);
    if active.is_empty() {
        return Ok(GridContent::Placeholder(templates.placeholder(category)?));
    }
    let items = active
        .into_iter()
        .map(|record| templates.render_item(record))
        .collect::<FolioResult<Vec<_>>>()?;
    Ok(GridContent::Items(items))
}
