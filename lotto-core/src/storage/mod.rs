pub mod history_store;
pub mod memory;

pub use history_store::{HistoryPort, HistoryStore, HISTORY_SLOT};
pub use memory::MemorySlots;

use crate::error::{LottoError, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tokio::sync::Mutex;

/// Durable key/value slots. Each `put` replaces the whole value atomically:
/// a reader sees either the previous value or the new one, never a mix.
#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Slots kept in a single SQLite table.
pub struct SqliteSlots {
    conn: Mutex<Connection>,
}

impl SqliteSlots {
    pub async fn new(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LottoError::storage(format!("Failed to create directory: {}", e)))?;
        }

        let conn = Connection::open(db_path)?;
        let slots = Self {
            conn: Mutex::new(conn),
        };

        slots.init_schema().await?;
        tracing::debug!("Opened slot database at {}", db_path.display());
        Ok(slots)
    }

    pub async fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let slots = Self {
            conn: Mutex::new(conn),
        };

        slots.init_schema().await?;
        Ok(slots)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

#[async_trait]
impl SlotStore for SqliteSlots {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;

        let value = conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT OR REPLACE INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }
}
