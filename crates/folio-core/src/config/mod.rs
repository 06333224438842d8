//! Site configuration.
//!
//! `folio.toml` deserializes into [`SiteConfig`]. Every section is optional
//! in the file. Missing presentation sections fall back to the seed values in
//! [`defaults`]; a missing `team` or `portfolio` is empty.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::{FolioError, FolioResult};
use crate::portfolio::Portfolio;

/// Default config file name inside a project directory.
pub const CONFIG_FILE: &str = "folio.toml";

/// The whole configuration object driving a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    #[serde(default)]
    pub team: TeamConfig,
    pub contact: ContactConfig,
    pub theme: ThemeConfig,
    pub seo: SeoConfig,
    pub content: ContentConfig,
    pub form: FormConfig,
    #[serde(default)]
    pub portfolio: Portfolio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub emoji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
    /// Platform name to profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    pub social: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub dark_mode: bool,
    /// Color name to CSS value, emitted as `--color-<name>` custom properties.
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub twitter_card: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub about_text: String,
    pub hero_subtitle: String,
    pub footer_text: String,
    pub catchphrase: String,
}

/// Partial content update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPatch {
    pub about_text: Option<String>,
    pub hero_subtitle: Option<String>,
    pub footer_text: Option<String>,
    pub catchphrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub enabled: bool,
    /// Where the contact form posts to when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub services: Vec<String>,
}

impl SiteConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> FolioResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> FolioResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> FolioResult<Self> {
        if !path.exists() {
            return Err(FolioError::ConfigNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), projects = config.portfolio.len(), "Loaded site config");
        Ok(config)
    }

    /// Write the config to disk, refusing to clobber an existing file unless
    /// `overwrite` is set.
    pub fn write(&self, path: &Path, overwrite: bool) -> FolioResult<()> {
        if path.exists() && !overwrite {
            return Err(FolioError::ConfigExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn member(&self, name: &str) -> Option<&TeamMember> {
        self.team.members.iter().find(|m| m.name == name)
    }

    /// Replace a member's avatar. Returns whether the member exists.
    pub fn update_avatar(&mut self, member: &str, avatar_url: &str) -> bool {
        match self.team.members.iter_mut().find(|m| m.name == member) {
            Some(m) => {
                m.avatar = Some(avatar_url.to_string());
                true
            }
            None => false,
        }
    }

    /// Replace a member's social links. Returns whether the member exists.
    pub fn update_social(&mut self, member: &str, links: BTreeMap<String, String>) -> bool {
        match self.team.members.iter_mut().find(|m| m.name == member) {
            Some(m) => {
                m.social = links;
                true
            }
            None => false,
        }
    }

    pub fn set_support_server(&mut self, url: &str) {
        self.contact.support_url = Some(url.to_string());
    }

    /// Merge colors into the theme palette.
    pub fn update_theme(&mut self, colors: BTreeMap<String, String>) {
        self.theme.colors.extend(colors);
    }

    pub fn update_content(&mut self, patch: ContentPatch) {
        let content = &mut self.content;
        if let Some(v) = patch.about_text {
            content.about_text = v;
        }
        if let Some(v) = patch.hero_subtitle {
            content.hero_subtitle = v;
        }
        if let Some(v) = patch.footer_text {
            content.footer_text = v;
        }
        if let Some(v) = patch.catchphrase {
            content.catchphrase = v;
        }
    }
}
