//! SQLite-backed project registry.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   hylla_database.db   (one `projects` table, created on every open if absent)
//!   <project_name>/     (one directory per project)
//! ```
//!
//! Name uniqueness is not enforced by the schema. Callers check it with
//! [`crate::naming::exists`] before [`Store::insert`].

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::RegistryError;
use crate::types::{join_tags, split_tags, ListOrder, Project, ProjectField, ProjectName};

/// File name of the registry database inside the projects root.
pub const DATABASE_FILE: &str = "hylla_database.db";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS projects (
    name text,
    path text,
    tags text,
    code text,
    date text,
    id integer primary key
)";

const SELECT_COLUMNS: &str = "SELECT name, path, tags, code, date, id FROM projects";

/// Handle to the registry database.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (or create) `<root>/hylla_database.db` and ensure the schema exists.
    pub fn open_at(root: &Path) -> Result<Self, RegistryError> {
        let path = root.join(DATABASE_FILE);
        let conn = Connection::open(&path).map_err(|source| RegistryError::StoreUnavailable {
            path: path.clone(),
            source,
        })?;
        Self::init(conn, path)
    }

    /// In-memory store, for tests and dry runs.
    pub fn open_in_memory() -> Result<Self, RegistryError> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| {
            RegistryError::StoreUnavailable {
                path: path.clone(),
                source,
            }
        })?;
        Self::init(conn, path)
    }

    fn init(conn: Connection, path: PathBuf) -> Result<Self, RegistryError> {
        conn.execute_batch(SCHEMA)
            .map_err(|source| RegistryError::StoreUnavailable {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "registry opened");
        Ok(Self { conn, path })
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new record dated today and return it with its assigned id.
    pub fn insert(
        &self,
        name: &ProjectName,
        directory: &Path,
        tags: &[String],
        launch_script: &str,
    ) -> Result<Project, RegistryError> {
        let created = Local::now().date_naive();
        self.conn.execute(
            "INSERT INTO projects (name, path, tags, code, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name.as_str(),
                directory.to_string_lossy(),
                join_tags(tags),
                launch_script,
                created,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(%name, id, "inserted project");

        Ok(Project {
            id,
            name: name.clone(),
            path: directory.to_path_buf(),
            tags: tags.to_vec(),
            launch_script: launch_script.to_owned(),
            created,
        })
    }

    /// Exact, case-sensitive lookup on the stored name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Project>, RegistryError> {
        let project = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE name = ?1"),
                params![name],
                project_from_row,
            )
            .optional()?;
        Ok(project)
    }

    /// All records, or those whose tag text contains `tag_filter` as a substring.
    ///
    /// The filter is a literal substring, not a tag match: `go` also matches
    /// `django`. ASCII letters compare case-insensitively.
    pub fn list(
        &self,
        tag_filter: Option<&str>,
        order: ListOrder,
    ) -> Result<Vec<Project>, RegistryError> {
        let order_by = match order {
            ListOrder::Name => "name COLLATE NOCASE ASC",
            ListOrder::Id => "id ASC",
        };

        let projects = match tag_filter {
            Some(tag) => {
                let sql = format!("{SELECT_COLUMNS} WHERE tags LIKE ?1 ESCAPE '\\' ORDER BY {order_by}");
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map(params![like_pattern(tag)], project_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let sql = format!("{SELECT_COLUMNS} ORDER BY {order_by}");
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map([], project_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(projects)
    }

    /// Set one column on the row named `name`. Returns the number of rows changed,
    /// which is 0 when no such row exists.
    pub fn update_field(
        &self,
        name: &str,
        field: ProjectField,
        value: &str,
    ) -> Result<usize, RegistryError> {
        let sql = format!("UPDATE projects SET {} = ?1 WHERE name = ?2", field.column());
        let changed = self.conn.execute(&sql, params![value, name])?;
        tracing::debug!(name, column = field.column(), changed, "updated project field");
        Ok(changed)
    }

    /// Change name and path together in a single statement.
    pub fn rename(
        &self,
        old: &str,
        new_name: &ProjectName,
        new_path: &Path,
    ) -> Result<usize, RegistryError> {
        let changed = self.conn.execute(
            "UPDATE projects SET name = ?1, path = ?2 WHERE name = ?3",
            params![new_name.as_str(), new_path.to_string_lossy(), old],
        )?;
        tracing::debug!(old, new = %new_name, changed, "renamed project");
        Ok(changed)
    }

    /// Remove the row named `name`. The project directory is not touched.
    pub fn delete(&self, name: &str) -> Result<usize, RegistryError> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE name = ?1", params![name])?;
        tracing::debug!(name, changed, "deleted project");
        Ok(changed)
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let name: String = row.get(0)?;
    let path: String = row.get(1)?;
    let tags: Option<String> = row.get(2)?;
    let code: Option<String> = row.get(3)?;
    let created: NaiveDate = row.get(4)?;
    let id: i64 = row.get(5)?;
    Ok(Project {
        id,
        name: ProjectName::from(name),
        path: PathBuf::from(path),
        tags: split_tags(tags.as_deref().unwrap_or_default()),
        launch_script: code.unwrap_or_default(),
        created,
    })
}

/// `%<filter>%` with LIKE wildcards in the filter escaped by `\`.
fn like_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
