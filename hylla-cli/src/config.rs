//! Resolve the projects root and open the registry.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use hylla_core::Context;

/// Build the per-invocation [`Context`] from `--location` / `HYLLA_LOCATION`.
///
/// The location must be an existing directory; it is canonicalised so stored
/// project paths are absolute.
pub fn context(location: Option<PathBuf>) -> Result<Context> {
    let Some(location) = location else {
        bail!("no projects location given; pass --location <DIR> or set HYLLA_LOCATION");
    };
    if !location.is_dir() {
        bail!(
            "projects location '{}' is not an existing directory",
            location.display()
        );
    }
    let root = location
        .canonicalize()
        .with_context(|| format!("cannot resolve path '{}'", location.display()))?;

    tracing::debug!(root = %root.display(), "using projects location");
    Context::open(&root)
        .with_context(|| format!("failed to open the project database in '{}'", root.display()))
}
