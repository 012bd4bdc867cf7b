//! Idempotent schema initializer for the catalog store.
//!
//! # Responsibility
//! - Ensure the `books` table exists, and under `PublisherPolicy::Reference`
//!   the seeded `publishers` reference table as well.
//!
//! # Invariants
//! - Bootstrap uses only `CREATE TABLE IF NOT EXISTS` / `INSERT OR IGNORE`,
//!   so concurrent first-time initialization cannot fail or duplicate seeds.
//! - Callers must not touch catalog data until `ensure_schema` returned
//!   `Ok`.

use crate::config::{CatalogConfig, PublisherPolicy};
use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Publisher names seeded into the reference catalog on first creation.
///
/// Also served as the suggestion list under `PublisherPolicy::FreeText`.
pub const DEFAULT_PUBLISHERS: &[&str] = &[
    "Penguin Random House",
    "HarperCollins",
    "Simon & Schuster",
    "Macmillan",
    "Hachette Livre",
    "Editorial Planeta",
    "Grupo Santillana",
    "Fondo de Cultura Económica",
];

const CREATE_BOOKS_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    release_date TEXT NOT NULL,
    publisher TEXT NOT NULL,
    price REAL NOT NULL CHECK (price >= 0.0)
);";

const CREATE_PUBLISHERS_SQL: &str = "CREATE TABLE IF NOT EXISTS publishers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);";

/// Ensures all required tables and seed rows exist.
///
/// Safe to call repeatedly and from concurrent callers; once the schema is
/// in place every statement here is a store-side no-op.
pub fn ensure_schema(conn: &Connection, config: &CatalogConfig) -> DbResult<()> {
    conn.execute_batch(CREATE_BOOKS_SQL).map_err(DbError::Schema)?;

    let mut seeded = 0;
    if config.publisher_policy == PublisherPolicy::Reference {
        conn.execute_batch(CREATE_PUBLISHERS_SQL)
            .map_err(DbError::Schema)?;
        seeded = seed_default_publishers(conn)?;
    }

    info!(
        "event=schema_ensure module=db status=ok publisher_policy={} seeded_publishers={seeded}",
        config.publisher_policy.as_str()
    );
    Ok(())
}

/// Inserts the default publisher names, skipping ones already present.
///
/// Returns how many rows were actually inserted.
fn seed_default_publishers(conn: &Connection) -> DbResult<usize> {
    let mut stmt = conn
        .prepare("INSERT OR IGNORE INTO publishers (name) VALUES (?1);")
        .map_err(DbError::Schema)?;

    let mut seeded = 0;
    for name in DEFAULT_PUBLISHERS.iter().copied() {
        seeded += stmt.execute([name]).map_err(DbError::Schema)?;
    }
    Ok(seeded)
}
