//! Single write connection behind `tokio::sync::Mutex`.
//! Every mutation in the system is serialized through it.

use std::path::Path;

use rusqlite::Connection;
use tokio::sync::Mutex;

use byeai_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use byeai_core::errors::ByeaiResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by an async mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ByeaiResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> ByeaiResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub async fn with_conn<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }

    /// Execute a closure only if the lock is free right now. Safe to call from
    /// inside a runtime; used at startup when nothing else can hold the lock.
    pub fn try_with_conn<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        let guard = self
            .conn
            .try_lock()
            .map_err(|_| to_storage_err("write connection busy".to_string()))?;
        f(&guard)
    }

    /// Synchronous access for non-async contexts.
    /// Must not be called from inside an async runtime.
    pub fn with_conn_sync<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        let guard = self.conn.blocking_lock();
        f(&guard)
    }
}
