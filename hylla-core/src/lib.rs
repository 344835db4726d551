//! hylla core library: the project registry and its lifecycle operations.
//!
//! - [`types`]: domain types
//! - [`error`]: [`RegistryError`]
//! - [`store`]: SQLite-backed [`Store`]
//! - [`naming`]: canonical names and the collision guard
//! - [`lifecycle`]: create / open / list / edit / remove
//! - [`script`]: launch-script parsing and execution
//! - [`interact`]: the [`Interaction`] capability supplied by the caller
//! - [`listing`]: text forms used by `hylla list`

pub mod context;
pub mod error;
pub mod interact;
pub mod lifecycle;
pub mod listing;
pub mod naming;
pub mod script;
pub mod store;
pub mod types;

pub use context::Context;
pub use error::RegistryError;
pub use interact::Interaction;
pub use store::Store;
pub use types::{EditField, ListOrder, Project, ProjectField, ProjectName};
