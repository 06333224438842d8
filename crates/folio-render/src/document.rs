//! In-memory page document.
//!
//! Models the parts of the page the renderer touches: navigation links keyed
//! by anchor and one section per category, each optionally holding a grid.
//! Any of those may be absent; a partial document is a valid document.

use folio_core::ProjectCategory;
use serde::Serialize;

use crate::presenter::{GridContent, Presenter};

/// A navigation entry pointing at `#anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
    pub visible: bool,
}

/// A category section container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSection {
    pub category: ProjectCategory,
    pub visible: bool,
    /// `None` when the section has no grid container at all.
    pub grid: Option<Grid>,
}

/// A grid container. `content` stays `None` until the first render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub content: Option<GridContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageDocument {
    nav: Vec<NavLink>,
    sections: Vec<ProjectSection>,
}

impl PageDocument {
    /// A document with no nav links and no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full single-page layout: every nav entry and every category
    /// section with its grid.
    pub fn standard() -> Self {
        let mut doc = Self::empty()
            .with_nav_link("home", "Home")
            .with_nav_link("about", "About")
            .with_nav_link("team", "Team");
        for category in ProjectCategory::ALL {
            doc = doc
                .with_nav_link(category.as_str(), category.display_name())
                .with_section(category, true);
        }
        doc.with_nav_link("contact", "Contact")
    }

    pub fn with_nav_link(mut self, anchor: &str, label: &str) -> Self {
        self.nav.push(NavLink {
            anchor: anchor.to_string(),
            label: label.to_string(),
            visible: true,
        });
        self
    }

    /// Add (or replace) the section for a category.
    pub fn with_section(mut self, category: ProjectCategory, with_grid: bool) -> Self {
        self.sections.retain(|s| s.category != category);
        self.sections.push(ProjectSection {
            category,
            visible: true,
            grid: with_grid.then(Grid::default),
        });
        self
    }

    pub fn without_section(mut self, category: ProjectCategory) -> Self {
        self.sections.retain(|s| s.category != category);
        self
    }

    pub fn without_nav_link(mut self, anchor: &str) -> Self {
        self.nav.retain(|l| l.anchor != anchor);
        self
    }

    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn nav_link(&self, anchor: &str) -> Option<&NavLink> {
        self.nav.iter().find(|l| l.anchor == anchor)
    }

    pub fn sections(&self) -> &[ProjectSection] {
        &self.sections
    }

    pub fn section(&self, category: ProjectCategory) -> Option<&ProjectSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Current grid content, if the grid exists and has been rendered.
    pub fn grid(&self, category: ProjectCategory) -> Option<&GridContent> {
        self.section(category)?.grid.as_ref()?.content.as_ref()
    }

    fn section_mut(&mut self, category: ProjectCategory) -> Option<&mut ProjectSection> {
        self.sections.iter_mut().find(|s| s.category == category)
    }
}

impl Presenter for PageDocument {
    fn set_nav_visible(&mut self, category: ProjectCategory, visible: bool) -> bool {
        let mut found = false;
        for link in self.nav.iter_mut().filter(|l| l.anchor == category.as_str()) {
            link.visible = visible;
            found = true;
        }
        found
    }

    fn set_section_visible(&mut self, category: ProjectCategory, visible: bool) -> bool {
        match self.section_mut(category) {
            Some(section) => {
                section.visible = visible;
                true
            }
            None => false,
        }
    }

    fn has_grid(&self, category: ProjectCategory) -> bool {
        self.section(category).is_some_and(|s| s.grid.is_some())
    }

    fn replace_grid(&mut self, category: ProjectCategory, content: GridContent) -> bool {
        match self.section_mut(category).and_then(|s| s.grid.as_mut()) {
            Some(grid) => {
                grid.content = Some(content);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let doc = PageDocument::standard();
        assert_eq!(doc.sections().len(), 3);
        assert_eq!(doc.nav().len(), 7);
        assert!(doc.nav_link("web").is_some());
        for category in ProjectCategory::ALL {
            assert!(doc.has_grid(category));
            assert!(doc.grid(category).is_none());
        }
    }

    #[test]
    fn test_nav_toggle_leaves_other_links() {
        let mut doc = PageDocument::standard();
        assert!(doc.set_nav_visible(ProjectCategory::Bot, false));
        assert!(!doc.nav_link("bot").unwrap().visible);
        assert!(doc.nav_link("contact").unwrap().visible);
        assert!(doc.nav_link("home").unwrap().visible);
    }

    #[test]
    fn test_missing_targets_report_false() {
        let mut doc = PageDocument::standard()
            .without_section(ProjectCategory::Bot)
            .without_nav_link("bot")
            .with_section(ProjectCategory::Web, false);

        assert!(!doc.set_nav_visible(ProjectCategory::Bot, true));
        assert!(!doc.set_section_visible(ProjectCategory::Bot, true));
        assert!(!doc.has_grid(ProjectCategory::Web));
        assert!(!doc.replace_grid(ProjectCategory::Web, GridContent::Items(vec![])));
        assert!(doc.set_section_visible(ProjectCategory::Web, false));
    }

    #[test]
    fn test_replace_grid_overwrites() {
        let mut doc = PageDocument::standard();
        doc.replace_grid(ProjectCategory::Scripting, GridContent::Items(vec!["<div></div>".into()]));
        doc.replace_grid(ProjectCategory::Scripting, GridContent::Placeholder("<p></p>".into()));
        assert_eq!(
            doc.grid(ProjectCategory::Scripting),
            Some(&GridContent::Placeholder("<p></p>".into()))
        );
    }
}
