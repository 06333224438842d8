//! Section status command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use folio_core::{ConfigStore, ProjectCategory};

use super::load_config;
use crate::output;

#[derive(Args)]
pub struct StatusArgs {
    /// Only show one category
    #[arg(long)]
    pub category: Option<ProjectCategory>,
}

pub fn execute(args: StatusArgs, config_path: &Path) -> Result<()> {
    let store = ConfigStore::new(load_config(config_path)?);

    output::print_sections_table(&store);

    let categories: Vec<ProjectCategory> = match args.category {
        Some(c) => vec![c],
        None => ProjectCategory::ALL.to_vec(),
    };
    for category in categories {
        println!();
        output::print_projects_table(category, store.projects(category));
    }

    Ok(())
}
