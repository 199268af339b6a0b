//! Key/Value Store Backends
//!
//! SQLite-backed durable implementation plus an in-memory one for tests
//! and ephemeral sessions.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

/// SQLite-backed store: one `kv` table, values survive process restarts.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and run migrations.
    pub fn open(path: &Path) -> DomainResult<Self> {
        let conn = Connection::open(path).map_err(|e| DomainError::Storage(e.to_string()))?;
        run_migrations(&conn)?;
        log::info!("opened kv store at {}", path.display());
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DomainError::Storage(e.to_string()))?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::Storage(e.to_string()))?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                [key, value],
            )
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// HashMap-backed store with no durability.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
