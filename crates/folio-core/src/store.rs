//! Configuration store with change notifications.
//!
//! Owns the site settings and the project registry for one session. Every
//! project mutation is followed by exactly one [`StoreChange`] on a broadcast
//! channel; nothing is batched or debounced, so three mutations yield three
//! messages. Lookups that miss resolve to silent no-ops.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::config::{ContentPatch, SiteConfig};
use crate::portfolio::model::{ProjectCategory, ProjectRecord, ProjectStatus};
use crate::portfolio::Portfolio;

/// Change notification emitted after each project mutation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum StoreChange {
    /// A record was appended.
    ProjectAdded { category: ProjectCategory, title: String },
    /// A remove was requested; `removed` is false when nothing matched.
    ProjectRemoved {
        category: ProjectCategory,
        title: String,
        removed: bool,
    },
    /// A status update was requested; `applied` is false when nothing matched.
    StatusChanged {
        category: ProjectCategory,
        title: String,
        status: ProjectStatus,
        applied: bool,
    },
    /// Re-render requested without a data change.
    Refresh,
}

/// Type alias for the change sender.
pub type ChangeSender = broadcast::Sender<StoreChange>;

/// Type alias for the change receiver.
pub type ChangeReceiver = broadcast::Receiver<StoreChange>;

const CHANNEL_CAPACITY: usize = 100;

/// Session-scoped store for the site configuration.
pub struct ConfigStore {
    config: SiteConfig,
    tx: ChangeSender,
}

impl ConfigStore {
    pub fn new(config: SiteConfig) -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { config, tx }
    }

    /// Subscribe to change notifications sent after this call.
    pub fn subscribe(&self) -> ChangeReceiver {
        self.tx.subscribe()
    }

    /// Number of live change receivers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.config.portfolio
    }

    /// Consume the store, returning the current configuration.
    pub fn into_config(self) -> SiteConfig {
        self.config
    }

    // ============================================================
    // QUERIES
    // ============================================================

    pub fn get_active_projects(&self, category: ProjectCategory) -> Vec<&ProjectRecord> {
        self.config.portfolio.active_projects(category)
    }

    /// Like [`Self::get_active_projects`], but takes a category name.
    /// Unknown names yield an empty list.
    pub fn get_active_projects_named(&self, category: &str) -> Vec<&ProjectRecord> {
        match ProjectCategory::parse(category) {
            Some(c) => self.get_active_projects(c),
            None => Vec::new(),
        }
    }

    pub fn is_category_visible(&self, category: ProjectCategory) -> bool {
        self.config.portfolio.is_category_visible(category)
    }

    pub fn get_visible_categories(&self) -> Vec<ProjectCategory> {
        self.config.portfolio.visible_categories()
    }

    pub fn projects(&self, category: ProjectCategory) -> &[ProjectRecord] {
        self.config.portfolio.projects(category)
    }

    // ============================================================
    // PROJECT MUTATIONS
    // ============================================================

    /// Append a record to its category. The status is taken as given.
    pub fn add_project(&mut self, record: ProjectRecord) {
        let category = record.category();
        let title = record.title().to_string();
        self.config.portfolio.push(record);
        info!(%category, title = %title, "Project added");
        self.emit(StoreChange::ProjectAdded { category, title });
    }

    /// Remove the first record titled `title`, if any.
    pub fn remove_project(&mut self, category: ProjectCategory, title: &str) {
        let removed = self.config.portfolio.remove_first(category, title).is_some();
        if removed {
            info!(%category, title = %title, "Project removed");
        } else {
            debug!(%category, title = %title, "Remove matched no project");
        }
        self.emit(StoreChange::ProjectRemoved {
            category,
            title: title.to_string(),
            removed,
        });
    }

    /// Overwrite the status of the first record titled `title`, if any.
    pub fn set_status(&mut self, category: ProjectCategory, title: &str, status: ProjectStatus) {
        let applied = self.config.portfolio.set_status(category, title, status);
        if applied {
            info!(%category, title = %title, %status, "Project status updated");
        } else {
            debug!(%category, title = %title, "Status update matched no project");
        }
        self.emit(StoreChange::StatusChanged {
            category,
            title: title.to_string(),
            status,
            applied,
        });
    }

    /// Request a render pass without changing data.
    pub fn refresh(&mut self) {
        self.emit(StoreChange::Refresh);
    }

    fn emit(&self, change: StoreChange) {
        // No subscribers is fine; the store works standalone.
        let receivers = self.tx.send(change).unwrap_or(0);
        debug!(receivers, "Store change emitted");
    }

    // ============================================================
    // SETTINGS HELPERS
    // ============================================================

    pub fn update_avatar(&mut self, member: &str, avatar_url: &str) -> bool {
        let found = self.config.update_avatar(member, avatar_url);
        if found {
            info!(member = %member, "Avatar updated");
        }
        found
    }

    pub fn update_social(&mut self, member: &str, links: BTreeMap<String, String>) -> bool {
        let found = self.config.update_social(member, links);
        if found {
            info!(member = %member, "Social links updated");
        }
        found
    }

    pub fn set_support_server(&mut self, url: &str) {
        self.config.set_support_server(url);
        info!(url = %url, "Support server updated");
    }

    pub fn update_theme(&mut self, colors: BTreeMap<String, String>) {
        let count = colors.len();
        self.config.update_theme(colors);
        info!(count, "Theme colors updated");
    }

    pub fn update_content(&mut self, patch: ContentPatch) {
        self.config.update_content(patch);
        info!("Content updated");
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
