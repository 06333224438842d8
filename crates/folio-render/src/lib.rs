//! # Folio Render
//!
//! Turns configuration store state into page markup.
//!
//! The [`SectionRenderer`] decides nav/section visibility and regenerates
//! each category grid through an injected [`Presenter`]; [`PageDocument`] is
//! the in-memory presenter and [`PageRenderer`] wraps it in the full page.
//! Both render through the same compiled [`Templates`].

pub mod document;
pub mod page;
pub mod presenter;
pub mod renderer;
pub mod site;
pub mod templates;

pub use document::{NavLink, PageDocument, ProjectSection};
pub use page::PageRenderer;
pub use presenter::{GridContent, Presenter};
pub use renderer::{RenderReport, SectionRenderer};
pub use site::Site;
pub use templates::Templates;
