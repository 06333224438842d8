//! Config initialization command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use folio_core::SiteConfig;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: InitArgs, config_path: &Path) -> Result<()> {
    SiteConfig::default().write(config_path, args.force)?;

    println!("{} Created {}", "✓".green().bold(), config_path.display().to_string().cyan());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  Edit the brand, team and contact sections");
    println!("  Set a project's status to \"active\" to show its section");
    println!("  folio status      # Check which sections are visible");
    println!("  folio serve       # Preview the site");

    Ok(())
}
