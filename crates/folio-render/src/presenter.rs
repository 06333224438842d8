//! Presentation layer seam.
//!
//! The renderer only decides *what* is visible and *which* markup each grid
//! holds; a [`Presenter`] applies those decisions to whatever document model
//! is in use.

use folio_core::ProjectCategory;
use serde::Serialize;

/// Contents of a category grid. A grid is always exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "html", rename_all = "snake_case")]
pub enum GridContent {
    /// Single "no projects" message.
    Placeholder(String),
    /// One markup node per active project, in display order.
    Items(Vec<String>),
}

impl GridContent {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Number of item nodes; zero for a placeholder.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Placeholder(_) => 0,
            Self::Items(items) => items.len(),
        }
    }

    /// Concatenated markup as it lands inside the grid container.
    pub fn to_html(&self) -> String {
        match self {
            Self::Placeholder(html) => html.clone(),
            Self::Items(items) => items.concat(),
        }
    }
}

/// Applies render decisions to a document.
///
/// Methods that target an element return `false` when the element is absent;
/// callers treat that as "skip", never as an error.
pub trait Presenter {
    /// Show or hide the navigation entry anchored at the category.
    fn set_nav_visible(&mut self, category: ProjectCategory, visible: bool) -> bool;

    /// Show or hide the category's section container.
    fn set_section_visible(&mut self, category: ProjectCategory, visible: bool) -> bool;

    /// Whether the category's section contains a grid container.
    fn has_grid(&self, category: ProjectCategory) -> bool;

    /// Replace the grid's children wholesale.
    fn replace_grid(&mut self, category: ProjectCategory, content: GridContent) -> bool;
}
