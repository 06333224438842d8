//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use folio_core::config::CONFIG_FILE;
use folio_core::SiteConfig;

pub mod build;
pub mod init;
pub mod serve;
pub mod status;

/// Folio - configuration-driven portfolio sites
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Config file, relative to the project directory
    #[arg(short, long, global = true, env = "FOLIO_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter folio.toml
    Init(init::InitArgs),

    /// Render the site to static HTML
    Build(build::BuildArgs),

    /// Show section visibility and projects
    Status(status::StatusArgs),

    /// Start the live preview server
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Resolve the project directory.
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.project {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to read current directory"),
        }
    }

    pub async fn execute(self, project_dir: &Path) -> Result<()> {
        let config_path = project_dir.join(&self.config);

        match self.command {
            Commands::Init(args) => init::execute(args, &config_path),
            Commands::Build(args) => build::execute(args, project_dir, &config_path),
            Commands::Status(args) => status::execute(args, &config_path),
            Commands::Serve(args) => serve::execute(args, &config_path).await,
        }
    }
}

/// Load the site config, pointing at `folio init` when it is missing.
pub fn load_config(config_path: &Path) -> Result<SiteConfig> {
    SiteConfig::load(config_path).with_context(|| {
        format!(
            "Could not load {} (run `folio init` to create one)",
            config_path.display()
        )
    })
}
