//! SQLite key-value store implementation.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use tokio_rusqlite::Connection;
use tracing::debug;

use geoexplorer_protocols::error::StoreError;
use geoexplorer_protocols::KeyValueStore;

use crate::schema::init_schema;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// SQLite-based key-value store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::init(conn).await
    }

    /// Open (or create) a file-backed database. Missing parent directories
    /// are created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?;
        }

        debug!("Opening sqlite store at {}", path.display());
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.call(|conn| Ok(init_schema(conn)?))
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    fn id(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let key = key.to_string();
        let raw = self
            .conn
            .call(move |conn| {
                let value = conn
                    .query_row("SELECT value FROM kv WHERE key = ?1", [&key], |row| {
                        row.get::<_, String>(0)
                    })
                    .optional()?;
                Ok(value)
            })
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let key = key.to_string();
        let value = serde_json::to_string(&value)?;
        let now = Utc::now().to_rfc3339();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                    params![key, value, now],
                )?;
                Ok(())
            })
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.conn
            .call(|conn| {
                conn.execute("DELETE FROM kv", [])?;
                Ok(())
            })
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}
