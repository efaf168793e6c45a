//! Store Connection Management
//!
//! Handles the SQLite connection behind the record store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::{schema::init_schema, StoreError, StoreResult};

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the database file
    pub path: PathBuf,
    /// Enable WAL mode
    pub wal_mode: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            wal_mode: true,
        }
    }
}

impl StoreConfig {
    /// Create config for in-memory store (testing)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            wal_mode: false,
        }
    }

    /// Create config for a specific path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Get default store path (<data_dir>/kintree/kintree.db)
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kintree")
        .join("kintree.db")
}

/// Record store wrapper with connection management
pub struct Store {
    conn: Connection,
    config: StoreConfig,
}

impl Store {
    /// Open or create a store with the given config
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.exists() && config.path.to_str() != Some(":memory:") {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Io(format!("Failed to create directory: {}", e)))?;
            }
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = if config.path.to_str() == Some(":memory:") {
            Connection::open_in_memory()?
        } else {
            Connection::open_with_flags(&config.path, flags)?
        };

        if config.wal_mode && config.path.to_str() != Some(":memory:") {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        }

        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        init_schema(&conn)?;

        Ok(Self { conn, config })
    }

    /// Open in-memory store for testing
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(StoreConfig::in_memory())
    }

    /// Get reference to connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get store path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Execute a function within a transaction
    pub fn transaction<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let tx = self.conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(store.path(), Path::new(":memory:"));
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("kintree.db");
        let store = Store::open(StoreConfig::with_path(&path)).unwrap();
        drop(store);
        assert!(path.exists());
    }

    #[test]
    fn test_transaction_commits() {
        let mut store = Store::open_in_memory().unwrap();

        let result = store.transaction(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, credential_hash) VALUES ('t', 'h')",
                [],
            )?;
            Ok(42)
        });

        assert_eq!(result.unwrap(), 42);

        let count: i32 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM accounts WHERE username = 't'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut store = Store::open_in_memory().unwrap();

        let result: StoreResult<()> = store.transaction(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, credential_hash) VALUES ('t', 'h')",
                [],
            )?;
            // Duplicate primary key forces an error after the first insert
            conn.execute(
                "INSERT INTO accounts (username, credential_hash) VALUES ('t', 'h')",
                [],
            )?;
            Ok(())
        });
        assert!(result.is_err());

        let count: i32 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
