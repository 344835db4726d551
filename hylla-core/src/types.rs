//! Domain types for the hylla registry.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator used between tags in the `tags` column.
pub const TAG_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A canonical project name: lower-case, underscores instead of spaces.
///
/// Values come from [`crate::naming::derive`] or straight from the store;
/// the newtype itself does not re-normalise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(pub String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A single column of the `projects` table that can be updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Path,
    Tags,
    Code,
}

impl ProjectField {
    /// Column name in the `projects` table.
    pub fn column(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Path => "path",
            ProjectField::Tags => "tags",
            ProjectField::Code => "code",
        }
    }
}

/// What the user may change with `hylla edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Tags,
    Commands,
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditField::Name => write!(f, "name"),
            EditField::Tags => write!(f, "tags"),
            EditField::Commands => write!(f, "commands"),
        }
    }
}

/// Result ordering for [`crate::store::Store::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Case-insensitive ascending by name.
    #[default]
    Name,
    /// Insertion order (ascending id).
    Id,
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A project registered in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: ProjectName,
    /// Absolute path to the project directory on disk.
    pub path: PathBuf,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shell lines run on open; `#` lines are comments.
    #[serde(default)]
    pub launch_script: String,
    pub created: NaiveDate,
}

impl Project {
    /// Tags in their stored, comma-space separated form.
    pub fn tags_text(&self) -> String {
        join_tags(&self.tags)
    }
}

/// Join tags into the stored column form.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Split the stored column form back into tags. An empty column has no tags.
pub fn split_tags(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    text.split(TAG_SEPARATOR).map(str::to_owned).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
