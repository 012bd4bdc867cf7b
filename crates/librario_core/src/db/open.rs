//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and trigger schema bootstrap before a
//!   usable connection is returned.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a bounded busy
//!   timeout.
//! - Returned connections have the catalog schema fully ensured.

use super::schema::ensure_schema;
use super::{DbError, DbResult};
use crate::config::CatalogConfig;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the catalog database file and ensures the schema exists.
///
/// # Side effects
/// - Emits a `db_open` event with mode, duration and status.
pub fn open_db(path: impl AsRef<Path>, config: &CatalogConfig) -> DbResult<Connection> {
    open_connection("file", config, || Connection::open(path.as_ref()))
}

/// Opens an in-memory catalog database and ensures the schema exists.
///
/// # Side effects
/// - Emits a `db_open` event with mode, duration and status.
pub fn open_db_in_memory(config: &CatalogConfig) -> DbResult<Connection> {
    open_connection("memory", config, Connection::open_in_memory)
}

fn open_connection(
    mode: &'static str,
    config: &CatalogConfig,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();

    let result = open()
        .map_err(DbError::Unavailable)
        .and_then(|conn| bootstrap_connection(&conn, config).map(|()| conn));

    let duration_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => info!("event=db_open module=db status=ok mode={mode} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={duration_ms} error={err}"
        ),
    }

    result
}

fn bootstrap_connection(conn: &Connection, config: &CatalogConfig) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(DbError::Unavailable)?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(DbError::Unavailable)?;
    ensure_schema(conn, config)
}
