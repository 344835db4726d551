//! # hylla-renderer
//!
//! Tera-based README generation for newly created projects.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hylla_renderer::{ReadmeContext, ReadmeWriter};
//! use hylla_core::Project;
//!
//! fn readme_for(project: &Project) {
//!     if let Ok(writer) = ReadmeWriter::new(None) {
//!         if let Ok(outcome) = writer.write(&ReadmeContext::from_project(project), &project.path) {
//!             println!("{outcome:?}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ReadmeContext;
pub use engine::{ReadmeOutcome, ReadmeWriter, TemplateSource, DOCS_URL, README_FILE};
pub use error::RenderError;
