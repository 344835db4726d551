//! Template context: the serializable rendering payload built from a [`Project`].

use serde::{Deserialize, Serialize};

use hylla_core::Project;

use crate::engine::DOCS_URL;
use crate::error::RenderError;

/// Values available to README templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeContext {
    pub name: String,
    pub tags: Vec<String>,
    pub path: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
    pub docs_url: String,
    pub hylla_version: String,
}

impl ReadmeContext {
    pub fn from_project(project: &Project) -> Self {
        ReadmeContext {
            name: project.name.0.clone(),
            tags: project.tags.clone(),
            path: project.path.display().to_string(),
            created: project.created.to_string(),
            docs_url: DOCS_URL.to_string(),
            hylla_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
