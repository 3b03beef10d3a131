//! Database schema definitions

use rusqlite::Connection;

/// Name of the only table clcnt owns
pub const ENTRIES_TABLE: &str = "entries";

/// SQL to create the entries table
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    "timestamp" INTEGER NOT NULL,
    "food" TEXT NOT NULL,
    "calories" INTEGER NOT NULL
)
"#;

/// Outcome of [`ensure_schema`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    Created,
    Existing,
}

/// Check whether the entries table is present
pub fn entries_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [ENTRIES_TABLE],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create the entries table unless it already exists.
///
/// Idempotent: a second call against the same database reports
/// [`SchemaStatus::Existing`] and leaves stored rows untouched.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<SchemaStatus> {
    if entries_table_exists(conn)? {
        tracing::info!("table {} already exists, skip creation", ENTRIES_TABLE);
        return Ok(SchemaStatus::Existing);
    }

    conn.execute(CREATE_ENTRIES_TABLE, [])?;
    tracing::info!("table {} created successfully", ENTRIES_TABLE);
    Ok(SchemaStatus::Created)
}
