//! Folio Core Library
//!
//! Site configuration, the project registry and the change-notifying
//! configuration store that drives rendering.

pub mod config;
pub mod error;
pub mod portfolio;
pub mod store;

pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use portfolio::model::{
    BotProject, ProjectCategory, ProjectRecord, ProjectStatus, ScriptingProject, WebProject,
};
pub use portfolio::Portfolio;
pub use store::{ConfigStore, StoreChange};
