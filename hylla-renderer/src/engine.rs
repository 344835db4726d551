//! README rendering and writing.
//!
//! | template given            | result                                   |
//! |---------------------------|------------------------------------------|
//! | none                      | embedded `readme.md.tera` rendered       |
//! | path ending in `.tera`    | user template rendered with the context  |
//! | any other path            | copied verbatim                          |
//!
//! An existing `README.md` is never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::ReadmeContext;
use crate::error::{io_err, RenderError};

/// File name written into the project directory.
pub const README_FILE: &str = "README.md";

/// Where the documentation lives; shown by `hylla docs` and in the default README.
pub const DOCS_URL: &str = "https://www.github.com/adelhult/hylla";

const EMBEDDED_NAME: &str = "readme.md.tera";
const EMBEDDED: &str = include_str!("templates/readme.md.tera");
const USER_NAME: &str = "user/readme.md.tera";

/// Which template produced a README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    /// A user `.tera` template, rendered.
    Rendered(PathBuf),
    /// A plain user file, copied byte for byte.
    Copied(PathBuf),
}

/// Outcome of [`ReadmeWriter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeOutcome {
    Created { path: PathBuf, source: TemplateSource },
    AlreadyExists { path: PathBuf },
}

/// Renders and writes `README.md` files.
///
/// Create once with [`ReadmeWriter::new`] and reuse.
pub struct ReadmeWriter {
    tera: Tera,
    source: TemplateSource,
}

impl ReadmeWriter {
    /// Load the embedded template plus, if given, the user's template.
    pub fn new(user_template: Option<&Path>) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(EMBEDDED_NAME, EMBEDDED)?;

        let source = match user_template {
            None => TemplateSource::Embedded,
            Some(path) if is_tera(path) => {
                let contents = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
                tera.add_raw_template(USER_NAME, &contents)?;
                TemplateSource::Rendered(path.to_path_buf())
            }
            Some(path) => {
                if !path.is_file() {
                    return Err(io_err(
                        path,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "template file not found"),
                    ));
                }
                TemplateSource::Copied(path.to_path_buf())
            }
        };

        Ok(ReadmeWriter { tera, source })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// README text for `ctx`. A copied template is returned as read from disk.
    pub fn render(&self, ctx: &ReadmeContext) -> Result<String, RenderError> {
        let text = match &self.source {
            TemplateSource::Embedded => self.tera.render(EMBEDDED_NAME, &ctx.to_tera_context()?)?,
            TemplateSource::Rendered(_) => self.tera.render(USER_NAME, &ctx.to_tera_context()?)?,
            TemplateSource::Copied(path) => {
                fs::read_to_string(path).map_err(|e| io_err(path, e))?
            }
        };
        Ok(text.replace("\r\n", "\n"))
    }

    /// Write `<project_dir>/README.md` unless a README file is already there.
    pub fn write(&self, ctx: &ReadmeContext, project_dir: &Path) -> Result<ReadmeOutcome, RenderError> {
        let path = project_dir.join(README_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "README already present; leaving it alone");
            return Ok(ReadmeOutcome::AlreadyExists { path });
        }

        match &self.source {
            TemplateSource::Copied(template) => {
                fs::copy(template, &path).map_err(|e| io_err(&path, e))?;
            }
            _ => {
                let content = self.render(ctx)?;
                atomic_write(&path, &content)?;
            }
        }

        Ok(ReadmeOutcome::Created {
            path,
            source: self.source.clone(),
        })
    }
}

fn is_tera(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("tera")
}

/// Write to a `.hylla.tmp` sibling, then rename over the target.
fn atomic_write(path: &Path, content: &str) -> Result<(), RenderError> {
    let tmp = PathBuf::from(format!("{}.hylla.tmp", path.display()));
    fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
