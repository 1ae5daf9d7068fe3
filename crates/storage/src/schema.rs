//! Table bootstrap.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::sqlite::storage_err;
use geoaddr_core::Result;

/// Name of the single table holding address records.
pub const TABLE_NAME: &str = "addresses";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
)";

/// Ensure the `addresses` table exists.
///
/// Create-if-absent only: existing rows and columns are left untouched, so
/// calling this any number of times is safe.
pub fn bootstrap(conn: &Connection) -> Result<()> {
    let existed = table_exists(conn)?;
    conn.execute_batch(CREATE_TABLE).map_err(storage_err)?;
    if existed {
        debug!(table = TABLE_NAME, "schema ready");
    } else {
        info!(table = TABLE_NAME, "table created");
    }
    Ok(())
}

/// True if the `addresses` table exists.
fn table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [TABLE_NAME],
            |row| row.get(0),
        )
        .map_err(storage_err)?;
    Ok(count > 0)
}
