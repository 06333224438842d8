//! Seed configuration written by `folio init` and used for absent sections.

use std::collections::BTreeMap;

use super::{
    BrandConfig, ContactConfig, ContentConfig, FormConfig, SeoConfig, SiteConfig, TeamConfig,
    TeamMember, ThemeConfig,
};
use crate::portfolio::model::{BotProject, ProjectStatus, ScriptingProject, WebProject};
use crate::portfolio::Portfolio;

const STUDIO_NAME: &str = "Northlight Studio";
const TAGLINE: &str = "Creative Development Studio";
const CATCHPHRASE: &str = "Building exceptional digital experiences";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            team: seed_team(),
            contact: seed_contact(),
            theme: ThemeConfig::default(),
            seo: SeoConfig::default(),
            content: ContentConfig::default(),
            form: FormConfig::default(),
            portfolio: seed_portfolio(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: STUDIO_NAME.to_string(),
            tagline: TAGLINE.to_string(),
            logo: None,
            favicon: None,
            emoji: "⚡".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = [
            ("primary", "#ffffff"),
            ("secondary", "#cccccc"),
            ("accent", "#888888"),
            ("background", "#0a0a0a"),
            ("card", "#1e1e1e"),
            ("border", "#333333"),
            ("blue", "#4a9eff"),
            ("purple", "#a855f7"),
            ("green", "#10b981"),
            ("orange", "#f59e0b"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            dark_mode: true,
            colors,
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: format!("{} - {}", STUDIO_NAME, TAGLINE),
            description: "Development studio specializing in game scripting, web applications and chat bots."
                .to_string(),
            keywords: vec![
                "game scripting".to_string(),
                "web development".to_string(),
                "chat bots".to_string(),
                "creative studio".to_string(),
            ],
            author: STUDIO_NAME.to_string(),
            og_image: None,
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            about_text: "We're a development studio specializing in game scripting, web development \
                         and chat bot creation. We combine technical precision with considered design \
                         to deliver dependable digital products."
                .to_string(),
            hero_subtitle: TAGLINE.to_string(),
            footer_text: CATCHPHRASE.to_string(),
            catchphrase: CATCHPHRASE.to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            services: vec![
                "Game Scripting".to_string(),
                "Web Development".to_string(),
                "Chat Bot".to_string(),
                "Other".to_string(),
            ],
        }
    }
}

fn seed_team() -> TeamConfig {
    TeamConfig {
        members: vec![
            TeamMember {
                name: "Avery".to_string(),
                role: "Creative Director & Game Scripter".to_string(),
                avatar: None,
                skills: vec![
                    "Luau".to_string(),
                    "Game Design".to_string(),
                    "Frontend".to_string(),
                ],
                bio: "Specialized in game scripting, gameplay mechanics and player experience design."
                    .to_string(),
                social: BTreeMap::new(),
            },
            TeamMember {
                name: "Rowan".to_string(),
                role: "Technical Lead & Web Developer".to_string(),
                avatar: None,
                skills: vec![
                    "Backend".to_string(),
                    "Web Development".to_string(),
                    "Chat Bots".to_string(),
                ],
                bio: "Full-stack developer focused on web platforms, backend architecture and bots."
                    .to_string(),
                social: BTreeMap::new(),
            },
        ],
    }
}

fn seed_contact() -> ContactConfig {
    ContactConfig {
        email: "hello@example.com".to_string(),
        support_url: None,
        social: BTreeMap::new(),
    }
}

/// One inactive example per category, so a fresh site shows no project
/// sections until real work is marked active.
fn seed_portfolio() -> Portfolio {
    let features = || {
        vec![
            "Example Feature 1".to_string(),
            "Example Feature 2".to_string(),
            "Example Feature 3".to_string(),
        ]
    };

    let mut script = ScriptingProject::new(
        "Example Script",
        "A sample game scripting project",
        "Example",
        "https://example.com/game",
    )
    .with_image("assets/scripts/example.jpg")
    .with_status(ProjectStatus::Inactive);
    script.lines = "1K+".to_string();
    script.performance = "90%".to_string();
    script.features = features();

    let mut web = WebProject::new(
        "Example Web Project",
        "A sample web development project",
        "Example",
        "https://example.com",
    )
    .with_github("https://github.com/example")
    .with_image("assets/web/example.jpg")
    .with_status(ProjectStatus::Inactive);
    web.technologies = vec!["HTML".to_string(), "CSS".to_string(), "JavaScript".to_string()];
    web.features = features();

    let mut bot = BotProject::new(
        "Example Bot",
        "A sample chat bot project",
        "Example",
        "https://example.com/invite",
        features(),
    )
    .with_status(ProjectStatus::Inactive);
    bot.commands = vec!["!example1".to_string(), "!example2".to_string()];
    bot.servers = "0".to_string();

    let mut portfolio = Portfolio::new();
    portfolio.push(script.into());
    portfolio.push(web.into());
    portfolio.push(bot.into());
    portfolio
}
