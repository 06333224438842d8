//! Full-page rendering.
//!
//! Wraps the rendered [`PageDocument`] in the site shell (head metadata,
//! theme variables, hero, about, team, contact, footer).

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tera::Context;
use tracing::debug;

use folio_core::config::{SiteConfig, TeamMember};
use folio_core::{FolioError, FolioResult};

use crate::document::{NavLink, PageDocument};
use crate::templates::{self, Templates};

/// View model for a category section.
#[derive(Serialize)]
struct SectionView {
    id: &'static str,
    title: &'static str,
    visible: bool,
    grid_class: String,
    /// Pre-escaped grid markup; `None` when the section has no grid.
    grid_html: Option<String>,
}

#[derive(Serialize)]
struct MemberView<'a> {
    name: &'a str,
    role: &'a str,
    avatar: Option<&'a str>,
    initial: String,
    skills: &'a [String],
    bio: &'a str,
    social: &'a BTreeMap<String, String>,
}

impl<'a> MemberView<'a> {
    fn from_member(m: &'a TeamMember) -> Self {
        Self {
            name: &m.name,
            role: &m.role,
            avatar: m.avatar.as_deref().filter(|a| !a.is_empty()),
            initial: m.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default(),
            skills: &m.skills,
            bio: &m.bio,
            social: &m.social,
        }
    }
}

#[derive(Serialize)]
struct PageView<'a> {
    config: &'a SiteConfig,
    keywords: String,
    nav: &'a [NavLink],
    sections: Vec<SectionView>,
    team: Vec<MemberView<'a>>,
}

/// Renders complete HTML pages.
pub struct PageRenderer {
    templates: Arc<Templates>,
}

impl PageRenderer {
    pub fn new(templates: Arc<Templates>) -> Self {
        Self { templates }
    }

    /// Render the whole page from config settings and the current document.
    pub fn render(&self, config: &SiteConfig, document: &PageDocument) -> FolioResult<String> {
        let sections = document
            .sections()
            .iter()
            .map(|s| SectionView {
                id: s.category.as_str(),
                title: s.category.display_name(),
                visible: s.visible,
                grid_class: templates::grid_class(s.category),
                grid_html: s
                    .grid
                    .as_ref()
                    .map(|g| g.content.as_ref().map(|c| c.to_html()).unwrap_or_default()),
            })
            .collect();

        let view = PageView {
            config,
            keywords: config.seo.keywords.join(", "),
            nav: document.nav(),
            sections,
            team: config.team.members.iter().map(MemberView::from_member).collect(),
        };

        let context = Context::from_serialize(&view)
            .map_err(|e| FolioError::template(format!("Failed to build page context: {}", e)))?;
        let html = self.templates.render(templates::PAGE, &context)?;

        debug!(bytes = html.len(), "Page rendered");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;
    use folio_core::{ProjectCategory, ScriptingProject};

    fn render_page(site: &Site<PageDocument>) -> String {
        PageRenderer::new(site.templates())
            .render(site.config(), site.presenter())
            .unwrap()
    }

    #[test]
    fn test_seed_page_hides_project_sections() {
        let site = Site::from_config(SiteConfig::default(), PageDocument::standard()).unwrap();
        let html = render_page(&site);

        assert!(html.contains("<title>Northlight Studio - Creative Development Studio</title>"));
        assert!(html.contains("<section id=\"scripting\" class=\"project-section\" style=\"display: none\">"));
        assert!(html.contains("No scripting projects available at the moment."));
        assert!(html.contains("--color-primary: #ffffff;"));
        assert!(html.contains("Avery"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_active_project_is_shown() {
        let mut site = Site::from_config(SiteConfig::default(), PageDocument::standard()).unwrap();
        site.add_project(ScriptingProject::new("Raid <Boss>", "Encounter", "Combat", "https://game.test"))
            .unwrap();

        let html = render_page(&site);

        assert!(html.contains("<section id=\"scripting\" class=\"project-section\">"));
        assert!(html.contains("<h3>Raid &lt;Boss&gt;</h3>"));
        assert!(!html.contains("Raid <Boss>"));
        assert!(html.contains("<div class=\"scripting-grid\">"));
    }

    #[test]
    fn test_section_without_grid() {
        let site = Site::from_config(
            SiteConfig::default(),
            PageDocument::standard().with_section(ProjectCategory::Bot, false),
        )
        .unwrap();
        let html = render_page(&site);
        assert!(html.contains("<section id=\"bot\""));
        assert!(!html.contains("bot-grid"));
    }

    #[test]
    fn test_contact_form_when_enabled() {
        let mut config = SiteConfig::default();
        config.form.enabled = true;
        config.form.endpoint = Some("https://forms.test/submit".to_string());
        let site = Site::from_config(config, PageDocument::standard()).unwrap();

        let html = render_page(&site);
        assert!(html.contains("<form class=\"contact-form\""));
        assert!(html.contains("<option value=\"Web Development\">"));
    }

    #[test]
    fn test_theme_values_reach_css_verbatim() {
        let mut config = SiteConfig::default();
        let mut theme = BTreeMap::new();
        theme.insert("font".to_string(), "'Inter', sans-serif".to_string());
        theme.insert("accent".to_string(), "rgb(255 0 0 / 50%)".to_string());
        config.update_theme(theme);
        let site = Site::from_config(config, PageDocument::standard()).unwrap();

        let html = render_page(&site);
        assert!(html.contains("--color-font: 'Inter', sans-serif;"));
        assert!(html.contains("--color-accent: rgb(255 0 0 / 50%);"));
        assert!(!html.contains("&#x27;Inter"));
    }
}
