//! Explicit per-invocation state: the projects root and the open store.

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::store::Store;

/// Everything a lifecycle operation needs, built once at startup.
pub struct Context {
    root: PathBuf,
    store: Store,
}

impl Context {
    /// Open the registry database inside `root`.
    pub fn open(root: &Path) -> Result<Self, RegistryError> {
        let store = Store::open_at(root)?;
        Ok(Self::new(root.to_path_buf(), store))
    }

    pub fn new(root: PathBuf, store: Store) -> Self {
        Self { root, store }
    }

    /// Directory under which project directories are created.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
