//! Read-only connections to a file-backed database. Under WAL they run
//! alongside the writer without waiting on it.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, TryLockError};

use rusqlite::{Connection, OpenFlags};

use byeai_core::errors::{ByeaiError, ByeaiResult, StorageError};

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

const MAX_READERS: usize = 8;

pub struct ReadPool {
    slots: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Attach `pool_size` readers (clamped to 1..=8) to an existing database.
    pub fn open(path: &Path, pool_size: usize, busy_timeout_ms: u32) -> ByeaiResult<Self> {
        let slots = (0..pool_size.clamp(1, MAX_READERS))
            .map(|_| open_reader(path, busy_timeout_ms).map(Mutex::new))
            .collect::<ByeaiResult<Vec<_>>>()?;
        Ok(Self {
            slots,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run `f` on an idle reader if there is one, otherwise wait for the
    /// reader next in turn.
    pub fn with_conn<F, T>(&self, f: F) -> ByeaiResult<T>
    where
        F: FnOnce(&Connection) -> ByeaiResult<T>,
    {
        let start = self.cursor.fetch_add(1, Ordering::Relaxed);
        let n = self.slots.len();
        for offset in 0..n {
            let idx = (start + offset) % n;
            match self.slots[idx].try_lock() {
                Ok(guard) => return f(&guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(_)) => return Err(poisoned(idx)),
            }
        }
        let idx = start % n;
        let guard = self.slots[idx].lock().map_err(|_| poisoned(idx))?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }
}

fn open_reader(path: &Path, busy_timeout_ms: u32) -> ByeaiResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    apply_read_pragmas(&conn, busy_timeout_ms)?;
    Ok(conn)
}

fn poisoned(idx: usize) -> ByeaiError {
    ByeaiError::StorageError(StorageError::LockPoisoned {
        details: format!("reader {idx} panicked while held"),
    })
}
