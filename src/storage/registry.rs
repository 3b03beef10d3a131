//! Entry registry - the only path through which entries are written or aggregated

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, params};

use super::schema::{self, SchemaStatus};
use crate::entry::Entry;
use crate::window::{self, DayCount};
use crate::{Error, Result};

/// SQLite-backed registry of food entries.
///
/// Owns the process-wide connection. Construct it once at startup and share
/// it (e.g. behind an `Arc`) with whatever serves requests.
pub struct Registry {
    conn: Mutex<Connection>,
    schema_status: SchemaStatus,
}

impl Registry {
    /// Open a database file (creates it if it doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let existed = path.exists();
        let conn = Connection::open(path)?;
        if existed {
            tracing::info!("database file {} already exists", path.display());
        } else {
            tracing::info!("database file {} created", path.display());
        }

        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let schema_status = schema::ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            schema_status,
        })
    }

    /// Whether opening this registry created the entries table
    pub fn schema_status(&self) -> SchemaStatus {
        self.schema_status
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::Unavailable(e.to_string()))
    }

    /// Insert one entry inside its own transaction.
    ///
    /// The transaction rolls back on drop, so a failed insert leaves no
    /// trace.
    pub fn add_entry(&self, entry: &Entry) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO entries (timestamp, food, calories) VALUES (?1, ?2, ?3)",
            params![entry.timestamp, entry.food, entry.calories],
        )?;
        tx.commit()?;

        tracing::debug!(
            "added entry {} ({} kcal at {})",
            entry.food,
            entry.calories,
            entry.timestamp
        );
        Ok(())
    }

    /// Get all entries.
    ///
    /// Order is whatever SQLite yields; callers must not rely on it being
    /// chronological.
    pub fn get_entries(&self) -> Result<Vec<Entry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT timestamp, food, calories FROM entries")?;

        let entries = stmt
            .query_map([], |row| {
                Ok(Entry {
                    timestamp: row.get(0)?,
                    food: row.get(1)?,
                    calories: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Sum of calories for entries with `timestamp >= since`, `0` if none match
    pub fn get_calories(&self, since: i64) -> Result<i64> {
        let conn = self.conn()?;
        let sum: Option<i64> = conn
            .query_row(
                "SELECT SUM(calories) FROM entries WHERE timestamp >= ?1",
                [since],
                |row| row.get(0),
            )
            .optional()?
            .flatten();

        match sum {
            Some(calories) => Ok(calories),
            None => {
                tracing::debug!("empty result for calories since {}", since);
                Ok(0)
            }
        }
    }

    /// Average daily calories over the last `days` days, today included
    pub fn average_calories(&self, days: DayCount) -> Result<i64> {
        let total = self.get_calories(window::days_ago(days))?;
        Ok(window::average(total, days))
    }

    /// Check that the connection answers and the entries table is in place
    pub fn is_ready(&self) -> bool {
        match self.conn() {
            Ok(conn) => match schema::entries_table_exists(&conn) {
                Ok(exists) => exists,
                Err(e) => {
                    tracing::warn!("readiness check failed: {}", e);
                    false
                }
            },
            Err(e) => {
                tracing::warn!("readiness check failed: {}", e);
                false
            }
        }
    }
}
