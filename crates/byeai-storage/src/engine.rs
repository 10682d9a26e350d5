//! StorageEngine — owns the ConnectionPool, runs migrations at startup, and
//! routes reads to the read pool or the writer depending on the backing mode.

use std::path::Path;

use rusqlite::Connection;

use byeai_core::config::StorageConfig;
use byeai_core::config::defaults::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_READ_POOL_SIZE};
use byeai_core::errors::ByeaiResult;

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> ByeaiResult<Self> {
        Self::open_with(path, DEFAULT_READ_POOL_SIZE, DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Open the database described by a `[storage]` config section.
    pub fn open_with_config(config: &StorageConfig) -> ByeaiResult<Self> {
        Self::open_with(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )
    }

    fn open_with(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> ByeaiResult<Self> {
        // The writer must create and migrate the file before read-only
        // connections can attach to it.
        let writer = crate::pool::WriteConnection::open(path, busy_timeout_ms)?;
        writer.try_with_conn(|conn| migrations::run_migrations(conn).map(|_| ()))?;
        let readers = crate::pool::ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            pool: ConnectionPool {
                writer,
                readers: Some(readers),
                db_path: Some(path.to_path_buf()),
            },
        })
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> ByeaiResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer
            .try_with_conn(|conn| migrations::run_migrations(conn).map(|_| ()))?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Whether reads go to the dedicated read pool.
    pub fn uses_read_pool(&self) -> bool {
        self.pool.readers.is_some()
    }

    /// Run a mutation on the writer connection.
    pub async fn write<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        self.pool.writer.with_conn(f).await
    }

    /// Run a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer.
    pub async fn read<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f).await,
        }
    }

    /// Blocking variant of [`StorageEngine::read`] for non-async callers.
    pub fn read_sync<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }
}
