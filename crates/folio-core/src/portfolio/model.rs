//! Project domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

/// One of the fixed project groupings shown on the site.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Scripting,
    Web,
    Bot,
}

impl ProjectCategory {
    /// All categories in canonical order.
    pub const ALL: [ProjectCategory; 3] = [Self::Scripting, Self::Web, Self::Bot];

    /// Anchor/identifier form used in config files and markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scripting => "scripting",
            Self::Web => "web",
            Self::Bot => "bot",
        }
    }

    /// Heading shown on the page and in terminal output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Scripting => "Game Scripting",
            Self::Web => "Web Development",
            Self::Bot => "Chat Bots",
        }
    }

    /// Parse leniently; unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scripting" => Some(Self::Scripting),
            "web" => Some(Self::Web),
            "bot" => Some(Self::Bot),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FolioError::UnknownCategory(s.to_string()))
    }
}

/// Publication status of a project. Only `Active` projects are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Inactive,
    ComingSoon,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::ComingSoon => "coming-soon",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "coming-soon" => Ok(Self::ComingSoon),
            _ => Err(FolioError::InvalidStatus(s.to_string())),
        }
    }
}

/// A game-scripting project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptingProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text sub-label, unrelated to [`ProjectCategory`].
    #[serde(default)]
    pub category: String,
    pub external_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub lines: String,
    #[serde(default)]
    pub performance: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: ProjectStatus,
}

impl ScriptingProject {
    /// Create an active scripting project with empty stats.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        external_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            external_url: external_url.into(),
            image: None,
            lines: "0".to_string(),
            performance: "0%".to_string(),
            features: Vec::new(),
            status: ProjectStatus::Active,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

/// A web development project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub live_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: ProjectStatus,
}

impl WebProject {
    /// Create an active web project with no technologies or features.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        live_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            live_url: live_url.into(),
            github_url: None,
            image: None,
            technologies: Vec::new(),
            features: Vec::new(),
            status: ProjectStatus::Active,
        }
    }

    pub fn with_github(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

/// A chat bot project. Keyed by `name` rather than `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub invite_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub servers: String,
    pub status: ProjectStatus,
}

impl BotProject {
    /// Create an active bot with no commands and a `0+` server count.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        invite_url: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            icon: None,
            invite_url: invite_url.into(),
            features,
            commands: Vec::new(),
            servers: "0+".to_string(),
            status: ProjectStatus::Active,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

/// A project record of any category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectRecord {
    Scripting(ScriptingProject),
    Web(WebProject),
    Bot(BotProject),
}

impl ProjectRecord {
    /// The category list this record belongs to.
    pub fn category(&self) -> ProjectCategory {
        match self {
            Self::Scripting(_) => ProjectCategory::Scripting,
            Self::Web(_) => ProjectCategory::Web,
            Self::Bot(_) => ProjectCategory::Bot,
        }
    }

    /// Display key: `title`, or `name` for bots.
    pub fn title(&self) -> &str {
        match self {
            Self::Scripting(p) => &p.title,
            Self::Web(p) => &p.title,
            Self::Bot(p) => &p.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Scripting(p) => &p.description,
            Self::Web(p) => &p.description,
            Self::Bot(p) => &p.description,
        }
    }

    /// The free-text sub-label.
    pub fn label(&self) -> &str {
        match self {
            Self::Scripting(p) => &p.category,
            Self::Web(p) => &p.category,
            Self::Bot(p) => &p.category,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        match self {
            Self::Scripting(p) => p.status,
            Self::Web(p) => p.status,
            Self::Bot(p) => p.status,
        }
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        match self {
            Self::Scripting(p) => p.status = status,
            Self::Web(p) => p.status = status,
            Self::Bot(p) => p.status = status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status() == ProjectStatus::Active
    }
}

impl From<ScriptingProject> for ProjectRecord {
    fn from(p: ScriptingProject) -> Self {
        Self::Scripting(p)
    }
}

impl From<WebProject> for ProjectRecord {
    fn from(p: WebProject) -> Self {
        Self::Web(p)
    }
}

impl From<BotProject> for ProjectRecord {
    fn from(p: BotProject) -> Self {
        Self::Bot(p)
    }
}
