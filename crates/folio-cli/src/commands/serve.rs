//! Preview server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use folio_render::{PageDocument, Site};

use super::load_config;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .folio/serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let site = Site::from_config(config, PageDocument::standard())?;

    println!();
    println!("  {} {}", "Folio".cyan().bold(), "Preview Server".bold());
    println!();
    println!("  {}       http://{}:{}", "Site".green(), args.host, args.port);
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}  ws://{}:{}/ws", "WebSocket".green(), args.host, args.port);
    println!();
    println!("  {}", "Changes made through the API last until the server stops".dimmed());
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    folio_web::run_server(site, &args.host, args.port).await?;

    Ok(())
}
