//! SQLite storage bootstrap entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the catalog core.
//! - Run the idempotent schema initializer before a connection is handed
//!   out.
//!
//! # Invariants
//! - Core code must not read or write catalog data before `ensure_schema`
//!   succeeded on the connection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod schema;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Store-layer failure, split by the phase that produced it.
#[derive(Debug)]
pub enum DbError {
    /// The store could not be opened or configured.
    Unavailable(rusqlite::Error),
    /// The store rejected a schema bootstrap statement.
    Schema(rusqlite::Error),
    /// The store rejected a query or mutation statement.
    Statement(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::Schema(err) => write!(f, "schema bootstrap failed: {err}"),
            Self::Statement(err) => write!(f, "statement failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) | Self::Schema(err) | Self::Statement(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(value)
    }
}
