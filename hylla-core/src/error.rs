//! Error types for hylla-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry and lifecycle operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No record is stored under the given name.
    #[error("a project named '{name}' does not exist")]
    NotFound { name: String },

    /// The canonical name is already registered or its directory already exists.
    #[error("project name '{name}' is already used (directory {})", path.display())]
    DuplicateProject { name: String, path: PathBuf },

    /// Raw user input does not yield a usable project name.
    #[error("invalid project name '{raw}': {reason}")]
    InvalidName { raw: String, reason: &'static str },

    /// The database file could not be opened, created, or initialised.
    #[error("registry database at {path} is unavailable: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Any other SQLite failure after the store was opened.
    #[error("registry query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Copying an existing directory into a new project failed.
    #[error("failed to migrate {} into {}: {source}", from.display(), to.display())]
    Migration {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The code-hosting API call failed or returned unparsable data.
    #[error("repository lookup for '{user}' failed: {reason}")]
    RemoteLookup { user: String, reason: String },

    /// A single launch-script line could not be run or exited unsuccessfully.
    #[error("command `{command}` failed: {reason}")]
    CommandExecution { command: String, reason: String },

    /// Prompting the user or running the text editor failed.
    #[error("interaction failed: {0}")]
    Interaction(String),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RegistryError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.into(),
        source,
    }
}
