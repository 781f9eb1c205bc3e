//! Family storage: connections and per-family schemas.
//!
//! # Responsibility
//! - Hand out connections on which every family's base view can be queried.
//! - Report which family schema is missing or too new when that fails.
//!
//! # Invariants
//! - A connection returned by `open_db*` has the schema of every family in
//!   `FamilyName::ALL`.
//! - Family schemas are versioned by `PRAGMA user_version`.

use crate::families::FamilyName;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use migrations::{latest_version, schema_version};
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a build that knows more families.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A family schema ran but did not create the view its reader queries.
    MissingBaseView {
        family: FamilyName,
        view: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database has family schema version {db_version}, this build reads up to {latest_supported}"
            ),
            Self::MissingBaseView { family, view } => {
                write!(f, "family {family} has no base view {view}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::MissingBaseView { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
