//! Project lifecycle: create, open, list, edit, remove.
//!
//! Operations that touch both the filesystem and the store do the filesystem
//! step first and commit to the store only after it succeeded. If the store
//! step then fails, the filesystem step is undone.
//!
//! Project directories are never deleted except to roll back a directory
//! this module created moments earlier.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::context::Context;
use crate::error::{io_err, RegistryError};
use crate::interact::Interaction;
use crate::naming;
use crate::script::{run_script, CommandOutcome, ShellRunner};
use crate::types::{EditField, ListOrder, Project, ProjectField};

// ---------------------------------------------------------------------------
// Request / outcome types
// ---------------------------------------------------------------------------

/// Where the files of a new project come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    /// Start with an empty directory.
    #[default]
    Empty,
    /// Copy the contents of an existing directory.
    Migrate(PathBuf),
    /// `git clone` a repository into the new directory.
    Clone(String),
}

/// Input for [`create`].
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Raw name as typed by the user; canonicalised by [`naming::derive`].
    pub name: String,
    pub tags: Vec<String>,
    pub launch_script: String,
    pub source: Source,
}

/// Whether [`open`] runs the launch script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    RunScript,
    Safe,
}

/// Result of [`open`].
#[derive(Debug)]
pub struct Opened {
    pub project: Project,
    /// The directory was missing and has been recreated empty.
    pub recreated_dir: bool,
    /// One entry per executed line; empty in safe mode.
    pub commands: Vec<CommandOutcome>,
}

/// Result of an interactive edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied(Project),
    Cancelled,
}

/// Result of an interactive removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The record is gone; its directory is left on disk.
    Removed(Project),
    Cancelled,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Register a new project and create, migrate or clone its directory.
///
/// Fails with [`RegistryError::DuplicateProject`] before any side effect when
/// the name is stored or the directory already exists. A failed migration or
/// clone removes the new directory and inserts nothing.
pub fn create(ctx: &Context, request: NewProject) -> Result<Project, RegistryError> {
    let (name, directory) = naming::derive(&request.name, ctx.root())?;
    if naming::exists(&name, &directory, ctx.store())? {
        return Err(RegistryError::DuplicateProject {
            name: name.0,
            path: directory,
        });
    }

    match &request.source {
        Source::Empty => {
            fs::create_dir(&directory).map_err(|e| io_err(&directory, e))?;
            tracing::info!(path = %directory.display(), "created project directory");
        }
        Source::Migrate(from) => {
            if let Err(source) = migrate(from, &directory) {
                let _ = fs::remove_dir_all(&directory);
                return Err(RegistryError::Migration {
                    from: from.clone(),
                    to: directory,
                    source,
                });
            }
            tracing::info!(
                from = %from.display(),
                to = %directory.display(),
                "migrated files into project directory"
            );
        }
        Source::Clone(url) => {
            fs::create_dir(&directory).map_err(|e| io_err(&directory, e))?;
            if let Err(err) = git_clone(url, &directory) {
                tracing::warn!(url = %url, error = %err, "clone failed; removing new directory");
                let _ = fs::remove_dir_all(&directory);
                return Err(err);
            }
            tracing::info!(url = %url, path = %directory.display(), "cloned repository");
        }
    }

    match ctx
        .store()
        .insert(&name, &directory, &request.tags, &request.launch_script)
    {
        Ok(project) => Ok(project),
        Err(err) => {
            tracing::warn!(path = %directory.display(), error = %err, "insert failed; removing new directory");
            let _ = fs::remove_dir_all(&directory);
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Open
// ---------------------------------------------------------------------------

/// Look up a project, make sure its directory exists and run its launch script.
pub fn open(
    ctx: &Context,
    name: &str,
    mode: OpenMode,
    runner: &mut dyn ShellRunner,
) -> Result<Opened, RegistryError> {
    let project = fetch(ctx, name)?;

    let recreated_dir = !project.path.exists();
    if recreated_dir {
        tracing::warn!(path = %project.path.display(), "project directory is missing; creating a new one");
        fs::create_dir_all(&project.path).map_err(|e| io_err(&project.path, e))?;
    }

    let commands = match mode {
        OpenMode::Safe => vec![],
        OpenMode::RunScript => run_script(&project.launch_script, &project.path, runner),
    };

    Ok(Opened {
        project,
        recreated_dir,
        commands,
    })
}

// ---------------------------------------------------------------------------
// Fetch / list
// ---------------------------------------------------------------------------

/// The stored project named `name`, or [`RegistryError::NotFound`].
pub fn fetch(ctx: &Context, name: &str) -> Result<Project, RegistryError> {
    ctx.store()
        .find_by_name(name)?
        .ok_or_else(|| RegistryError::NotFound {
            name: name.to_owned(),
        })
}

/// Projects sorted by name, optionally filtered by a tag substring.
pub fn list(ctx: &Context, tag: Option<&str>) -> Result<Vec<Project>, RegistryError> {
    ctx.store().list(tag, ListOrder::Name)
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// Rename a project: its directory on disk first, then the stored record.
pub fn rename(ctx: &Context, name: &str, raw_new_name: &str) -> Result<Project, RegistryError> {
    let project = fetch(ctx, name)?;
    let (new_name, new_dir) = naming::derive(raw_new_name, ctx.root())?;
    if naming::exists(&new_name, &new_dir, ctx.store())? {
        return Err(RegistryError::DuplicateProject {
            name: new_name.0,
            path: new_dir,
        });
    }

    let moved = project.path.exists();
    if moved {
        fs::rename(&project.path, &new_dir).map_err(|e| io_err(&project.path, e))?;
    } else {
        tracing::warn!(path = %project.path.display(), "project directory is missing; renaming record only");
    }

    if let Err(err) = ctx.store().rename(project.name.as_str(), &new_name, &new_dir) {
        if moved {
            if let Err(undo) = fs::rename(&new_dir, &project.path) {
                tracing::error!(
                    from = %new_dir.display(),
                    to = %project.path.display(),
                    error = %undo,
                    "could not move directory back after failed rename"
                );
            }
        }
        return Err(err);
    }

    tracing::info!(old = %project.name, new = %new_name, "renamed project");
    Ok(Project {
        name: new_name,
        path: new_dir,
        ..project
    })
}

/// Replace the stored tag text wholesale. The text is not validated.
pub fn set_tags(ctx: &Context, name: &str, tags_text: &str) -> Result<Project, RegistryError> {
    update(ctx, name, ProjectField::Tags, tags_text)
}

/// Replace the launch script wholesale.
pub fn set_launch_script(ctx: &Context, name: &str, script: &str) -> Result<Project, RegistryError> {
    update(ctx, name, ProjectField::Code, script)
}

fn update(ctx: &Context, name: &str, field: ProjectField, value: &str) -> Result<Project, RegistryError> {
    if ctx.store().update_field(name, field, value)? == 0 {
        return Err(RegistryError::NotFound {
            name: name.to_owned(),
        });
    }
    fetch(ctx, name)
}

/// Interactively change one field of a project.
///
/// A new name is checked for collisions before the user is asked to confirm.
pub fn edit_project(
    ctx: &Context,
    name: &str,
    field: EditField,
    io: &mut dyn Interaction,
) -> Result<EditOutcome, RegistryError> {
    let project = fetch(ctx, name)?;

    match field {
        EditField::Name => {
            let raw = io.prompt("Input a new name")?;
            let (new_name, new_dir) = naming::derive(&raw, ctx.root())?;
            if naming::exists(&new_name, &new_dir, ctx.store())? {
                return Err(RegistryError::DuplicateProject {
                    name: new_name.0,
                    path: new_dir,
                });
            }
            if !io.confirm("Do you really want to confirm this update?")? {
                return Ok(EditOutcome::Cancelled);
            }
            rename(ctx, project.name.as_str(), &raw).map(EditOutcome::Applied)
        }
        EditField::Tags => {
            io.inform(&format!(
                "Current tags for \"{}\": {}",
                project.name,
                project.tags_text()
            ));
            io.inform(
                "Write a list (separated with commas followed by blank spaces) \
                 of all the tags that should be associated with the project.",
            );
            let text = io.prompt("Input tags")?;
            if !io.confirm(&format!(
                "Do you really want to update the tags for \"{}\"?",
                project.name
            ))? {
                return Ok(EditOutcome::Cancelled);
            }
            set_tags(ctx, project.name.as_str(), &text).map(EditOutcome::Applied)
        }
        EditField::Commands => {
            let Some(script) = io.edit_text(&project.launch_script)? else {
                return Ok(EditOutcome::Cancelled);
            };
            if !io.confirm("Do you really want to confirm this update?")? {
                return Ok(EditOutcome::Cancelled);
            }
            set_launch_script(ctx, project.name.as_str(), &script).map(EditOutcome::Applied)
        }
    }
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// Delete a project's record after confirmation. Its files stay on disk.
pub fn remove(ctx: &Context, name: &str, io: &mut dyn Interaction) -> Result<RemoveOutcome, RegistryError> {
    let project = fetch(ctx, name)?;
    if !io.confirm(&format!("Are you sure you want to remove \"{}\"?", project.name))? {
        return Ok(RemoveOutcome::Cancelled);
    }
    ctx.store().delete(project.name.as_str())?;
    tracing::info!(name = %project.name, "removed project from registry");
    Ok(RemoveOutcome::Removed(project))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Run `git clone <url> .` inside the freshly created `dir`.
fn git_clone(url: &str, dir: &Path) -> Result<(), RegistryError> {
    let command = format!("git clone {url} .");
    let status = Command::new("git")
        .args(["clone", url, "."])
        .current_dir(dir)
        .status()
        .map_err(|e| RegistryError::CommandExecution {
            command: command.clone(),
            reason: e.to_string(),
        })?;
    if !status.success() {
        return Err(RegistryError::CommandExecution {
            command,
            reason: status.to_string(),
        });
    }
    Ok(())
}

/// Recursively copy `from` into the not-yet-existing directory `to`.
/// Symbolic links are followed; their targets are copied.
fn migrate(from: &Path, to: &Path) -> std::io::Result<()> {
    use std::io::{Error, ErrorKind};

    let source = from.canonicalize()?;
    if !source.is_dir() {
        return Err(Error::new(ErrorKind::InvalidInput, "source is not a directory"));
    }
    let parent = to.parent().unwrap_or(to).canonicalize()?;
    if parent.starts_with(&source) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "destination lies inside the source directory",
        ));
    }

    fs::create_dir(to)?;
    for entry in walkdir::WalkDir::new(&source).follow_links(true).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&source)
            .map_err(Error::other)?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
