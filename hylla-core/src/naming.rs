//! Canonical project names and the collision guard used before creation.

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::store::Store;
use crate::types::ProjectName;

/// Canonical name and directory for raw user input.
///
/// The name is trimmed, lower-cased and has spaces replaced with underscores;
/// the directory is `projects_root/<name>`.
pub fn derive(raw_name: &str, projects_root: &Path) -> Result<(ProjectName, PathBuf), RegistryError> {
    let canonical = raw_name.trim().to_lowercase().replace(' ', "_");

    let reason = if canonical.is_empty() {
        Some("name is empty")
    } else if canonical == "." || canonical == ".." {
        Some("name refers to a relative directory")
    } else if canonical.contains(|c: char| c == '/' || c == '\\') {
        Some("name contains a path separator")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(RegistryError::InvalidName {
            raw: raw_name.to_owned(),
            reason,
        });
    }

    let directory = projects_root.join(&canonical);
    Ok((ProjectName::from(canonical), directory))
}

/// True when either the directory is already on disk or the name is already stored.
pub fn exists(name: &ProjectName, directory: &Path, store: &Store) -> Result<bool, RegistryError> {
    if directory.exists() {
        return Ok(true);
    }
    Ok(store.find_by_name(name.as_str())?.is_some())
}
