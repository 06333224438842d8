//! Live site binding.
//!
//! [`Site`] wires a [`ConfigStore`] to a [`SectionRenderer`] and a
//! [`Presenter`]. It is the admin-facing function surface: each mutation goes
//! to the store, and every change notification the store emits is answered
//! with exactly one synchronous render pass.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, warn};

use folio_core::config::ContentPatch;
use folio_core::store::ChangeReceiver;
use folio_core::{ConfigStore, FolioResult, ProjectCategory, ProjectRecord, ProjectStatus, SiteConfig};

use crate::presenter::Presenter;
use crate::renderer::{RenderReport, SectionRenderer};
use crate::templates::Templates;

pub struct Site<P: Presenter> {
    store: ConfigStore,
    renderer: SectionRenderer,
    presenter: P,
    changes: ChangeReceiver,
    last_report: RenderReport,
}

impl<P: Presenter> Site<P> {
    /// Bind a store to a presenter and run the initial (page load) pass.
    pub fn new(store: ConfigStore, presenter: P) -> FolioResult<Self> {
        Self::with_templates(store, presenter, Arc::new(Templates::new()?))
    }

    /// Like [`Site::new`], reusing already compiled templates.
    pub fn with_templates(
        store: ConfigStore,
        mut presenter: P,
        templates: Arc<Templates>,
    ) -> FolioResult<Self> {
        let changes = store.subscribe();
        let mut renderer = SectionRenderer::new(templates);
        let last_report = renderer.render(store.portfolio(), &mut presenter)?;
        Ok(Self {
            store,
            renderer,
            presenter,
            changes,
            last_report,
        })
    }

    /// Convenience constructor from a plain config.
    pub fn from_config(config: SiteConfig, presenter: P) -> FolioResult<Self> {
        Self::new(ConfigStore::new(config), presenter)
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn config(&self) -> &SiteConfig {
        self.store.config()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Templates shared by grid items and the page shell.
    pub fn templates(&self) -> Arc<Templates> {
        Arc::clone(self.renderer.templates())
    }

    /// Report of the most recent render pass.
    pub fn last_report(&self) -> &RenderReport {
        &self.last_report
    }

    /// Total render passes, the initial one included.
    pub fn render_count(&self) -> u64 {
        self.renderer.passes()
    }

    /// Subscribe to the store's change notifications.
    pub fn subscribe(&self) -> ChangeReceiver {
        self.store.subscribe()
    }

    // ============================================================
    // ADMIN SURFACE
    // ============================================================

    pub fn add_project(&mut self, record: impl Into<ProjectRecord>) -> FolioResult<&RenderReport> {
        self.store.add_project(record.into());
        self.sync()
    }

    pub fn remove_project(&mut self, category: ProjectCategory, title: &str) -> FolioResult<&RenderReport> {
        self.store.remove_project(category, title);
        self.sync()
    }

    pub fn set_status(
        &mut self,
        category: ProjectCategory,
        title: &str,
        status: ProjectStatus,
    ) -> FolioResult<&RenderReport> {
        self.store.set_status(category, title, status);
        self.sync()
    }

    /// Shorthand for setting a project inactive.
    pub fn hide_project(&mut self, category: ProjectCategory, title: &str) -> FolioResult<&RenderReport> {
        self.set_status(category, title, ProjectStatus::Inactive)
    }

    /// Shorthand for setting a project active.
    pub fn show_project(&mut self, category: ProjectCategory, title: &str) -> FolioResult<&RenderReport> {
        self.set_status(category, title, ProjectStatus::Active)
    }

    /// Force a render pass without a data change.
    pub fn refresh(&mut self) -> FolioResult<&RenderReport> {
        self.store.refresh();
        self.sync()
    }

    pub fn get_active_projects(&self, category: ProjectCategory) -> Vec<&ProjectRecord> {
        self.store.get_active_projects(category)
    }

    pub fn is_category_visible(&self, category: ProjectCategory) -> bool {
        self.store.is_category_visible(category)
    }

    pub fn get_visible_categories(&self) -> Vec<ProjectCategory> {
        self.store.get_visible_categories()
    }

    // Settings helpers do not emit project changes; the page shell picks
    // them up the next time it is rendered.

    pub fn update_avatar(&mut self, member: &str, avatar_url: &str) -> bool {
        self.store.update_avatar(member, avatar_url)
    }

    pub fn update_social(&mut self, member: &str, links: BTreeMap<String, String>) -> bool {
        self.store.update_social(member, links)
    }

    pub fn set_support_server(&mut self, url: &str) {
        self.store.set_support_server(url)
    }

    pub fn update_theme(&mut self, colors: BTreeMap<String, String>) {
        self.store.update_theme(colors)
    }

    pub fn update_content(&mut self, patch: ContentPatch) {
        self.store.update_content(patch)
    }

    /// Answer every pending change notification with one render pass.
    fn sync(&mut self) -> FolioResult<&RenderReport> {
        loop {
            match self.changes.try_recv() {
                Ok(change) => {
                    debug!(?change, "Store change received");
                    self.last_report = self.renderer.render(self.store.portfolio(), &mut self.presenter)?;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Change notifications dropped, rendering current state");
                    self.last_report = self.renderer.render(self.store.portfolio(), &mut self.presenter)?;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        Ok(&self.last_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageDocument;
    use folio_core::{BotProject, Portfolio, ScriptingProject, WebProject};

    fn empty_site() -> Site<PageDocument> {
        let config = SiteConfig {
            portfolio: Portfolio::new(),
            ..SiteConfig::default()
        };
        Site::from_config(config, PageDocument::standard()).unwrap()
    }

    #[test]
    fn test_initial_render_on_construction() {
        let site = Site::from_config(SiteConfig::default(), PageDocument::standard()).unwrap();
        assert_eq!(site.render_count(), 1);
        assert!(site.get_visible_categories().is_empty());
        for category in ProjectCategory::ALL {
            assert!(site.presenter().grid(category).unwrap().is_placeholder());
            assert!(!site.presenter().nav_link(category.as_str()).unwrap().visible);
        }
    }

    #[test]
    fn test_one_render_per_mutation() {
        let mut site = empty_site();
        site.add_project(WebProject::new("Shop", "d", "c", "https://w.test")).unwrap();
        site.hide_project(ProjectCategory::Web, "Shop").unwrap();
        site.remove_project(ProjectCategory::Web, "Shop").unwrap();
        assert_eq!(site.render_count(), 4);
    }

    #[test]
    fn test_refresh_renders_without_change() {
        let mut site = empty_site();
        let before = site.presenter().clone();
        let report = site.refresh().unwrap().clone();
        assert_eq!(report.pass, 2);
        assert_eq!(site.presenter(), &before);
    }

    #[test]
    fn test_seed_scenario() {
        let config = SiteConfig::default();
        let title = config.portfolio.projects(ProjectCategory::Scripting)[0].title().to_string();
        let mut site = Site::from_config(config, PageDocument::standard()).unwrap();

        let report = site.show_project(ProjectCategory::Scripting, &title).unwrap().clone();
        assert_eq!(report.visible, vec![ProjectCategory::Scripting]);
        assert_eq!(site.presenter().grid(ProjectCategory::Scripting).unwrap().item_count(), 1);
        assert!(site.presenter().section(ProjectCategory::Scripting).unwrap().visible);
        assert!(!site.presenter().section(ProjectCategory::Web).unwrap().visible);
    }

    #[test]
    fn test_add_then_query() {
        let mut site = empty_site();
        site.add_project(ScriptingProject::new("One", "d", "c", "https://s.test")).unwrap();
        site.add_project(ScriptingProject::new("Two", "d", "c", "https://s.test")).unwrap();
        let active = site.get_active_projects(ProjectCategory::Scripting);
        assert_eq!(active.last().unwrap().title(), "Two");
        assert!(site.is_category_visible(ProjectCategory::Scripting));
        assert_eq!(site.presenter().grid(ProjectCategory::Scripting).unwrap().item_count(), 2);
    }

    #[test]
    fn test_unmatched_title_is_noop_but_renders() {
        let mut site = empty_site();
        site.add_project(BotProject::new("Helper", "d", "c", "https://b.test", vec![])).unwrap();
        let grid_before = site.presenter().grid(ProjectCategory::Bot).cloned();

        site.remove_project(ProjectCategory::Bot, "Nobody").unwrap();
        site.set_status(ProjectCategory::Bot, "Nobody", ProjectStatus::Inactive).unwrap();

        assert_eq!(site.render_count(), 4);
        assert_eq!(site.presenter().grid(ProjectCategory::Bot).cloned(), grid_before);
    }

    #[test]
    fn test_external_subscriber_sees_each_change() {
        let mut site = empty_site();
        let mut rx = site.subscribe();
        site.add_project(WebProject::new("Shop", "d", "c", "https://w.test")).unwrap();
        site.refresh().unwrap();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sites_can_share_templates() {
        let first = empty_site();
        let templates = first.templates();
        let second = Site::with_templates(ConfigStore::default(), PageDocument::standard(), templates.clone()).unwrap();
        assert!(Arc::ptr_eq(&second.templates(), &templates));
        assert_eq!(second.render_count(), 1);
    }
}
