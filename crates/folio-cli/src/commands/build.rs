//! Static build command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use folio_render::{PageDocument, PageRenderer, Site};

use super::load_config;

#[derive(Args)]
pub struct BuildArgs {
    /// Output directory, relative to the project directory
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,
}

pub fn execute(args: BuildArgs, project_dir: &Path, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let site = Site::from_config(config, PageDocument::standard())?;
    let html = PageRenderer::new(site.templates()).render(site.config(), site.presenter())?;

    let out_dir = project_dir.join(&args.out);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let out_file = out_dir.join("index.html");
    std::fs::write(&out_file, &html)
        .with_context(|| format!("Failed to write {}", out_file.display()))?;

    let report = site.last_report();
    info!(path = %out_file.display(), bytes = html.len(), "Site built");

    println!("{} Built {}", "✓".green().bold(), out_file.display().to_string().cyan());
    if report.visible.is_empty() {
        println!("  {}", "No project sections visible (no active projects)".dimmed());
    } else {
        let names: Vec<&str> = report.visible.iter().map(|c| c.as_str()).collect();
        println!("  Visible sections: {}", names.join(", "));
    }

    Ok(())
}
