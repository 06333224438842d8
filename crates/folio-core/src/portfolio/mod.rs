//! Project registry.
//!
//! Holds one ordered list of records per category and answers the
//! visibility queries the renderer is driven by. Visibility is derived on
//! every call; nothing here is cached.

pub mod model;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use model::{
    BotProject, ProjectCategory, ProjectRecord, ProjectStatus, ScriptingProject, WebProject,
};

/// Per-category ordered project lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PortfolioFile", into = "PortfolioFile")]
pub struct Portfolio {
    lists: BTreeMap<ProjectCategory, Vec<ProjectRecord>>,
}

impl Portfolio {
    /// Create an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records of a category, inactive ones included.
    pub fn projects(&self, category: ProjectCategory) -> &[ProjectRecord] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Active records of a category, in stored order.
    pub fn active_projects(&self, category: ProjectCategory) -> Vec<&ProjectRecord> {
        self.projects(category)
            .iter()
            .filter(|p| p.is_active())
            .collect()
    }

    /// A category is visible when it has at least one active record.
    pub fn is_category_visible(&self, category: ProjectCategory) -> bool {
        self.projects(category).iter().any(ProjectRecord::is_active)
    }

    /// Visible categories, always in canonical order.
    pub fn visible_categories(&self) -> Vec<ProjectCategory> {
        ProjectCategory::ALL
            .into_iter()
            .filter(|c| self.is_category_visible(*c))
            .collect()
    }

    /// Total record count across categories.
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a record to the list of its own category.
    pub fn push(&mut self, record: ProjectRecord) {
        self.lists.entry(record.category()).or_default().push(record);
    }

    /// Remove the first record whose display key equals `title`.
    pub fn remove_first(&mut self, category: ProjectCategory, title: &str) -> Option<ProjectRecord> {
        let list = self.lists.get_mut(&category)?;
        let idx = list.iter().position(|p| p.title() == title)?;
        Some(list.remove(idx))
    }

    /// Overwrite the status of the first record whose display key equals
    /// `title`. Returns whether a record matched.
    pub fn set_status(&mut self, category: ProjectCategory, title: &str, status: ProjectStatus) -> bool {
        let found = self
            .lists
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|p| p.title() == title));

        match found {
            Some(record) => {
                record.set_status(status);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Portfolio {
    // A category with an emptied list equals one that was never populated.
    fn eq(&self, other: &Self) -> bool {
        ProjectCategory::ALL
            .into_iter()
            .all(|c| self.projects(c) == other.projects(c))
    }
}

/// On-disk shape: one typed array per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    scripting: Vec<ScriptingProject>,
    #[serde(default)]
    web: Vec<WebProject>,
    #[serde(default)]
    bot: Vec<BotProject>,
}

impl From<PortfolioFile> for Portfolio {
    fn from(file: PortfolioFile) -> Self {
        let mut portfolio = Portfolio::new();
        file.scripting.into_iter().for_each(|p| portfolio.push(p.into()));
        file.web.into_iter().for_each(|p| portfolio.push(p.into()));
        file.bot.into_iter().for_each(|p| portfolio.push(p.into()));
        portfolio
    }
}

impl From<Portfolio> for PortfolioFile {
    fn from(portfolio: Portfolio) -> Self {
        let mut file = PortfolioFile::default();
        for record in portfolio.lists.into_values().flatten() {
            match record {
                ProjectRecord::Scripting(p) => file.scripting.push(p),
                ProjectRecord::Web(p) => file.web.push(p),
                ProjectRecord::Bot(p) => file.bot.push(p),
            }
        }
        file
    }
}
