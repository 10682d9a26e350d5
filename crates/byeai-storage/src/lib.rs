//! # byeai-storage
//!
//! SQLite persistence layer: a single async-locked writer plus a read pool,
//! versioned migrations, and raw query modules for voters, items, the vote
//! ledger, and the reputation log. No consensus logic lives here.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod transaction;

pub use engine::StorageEngine;
pub use transaction::with_transaction;

use byeai_core::errors::{ByeaiError, StorageError};

/// Wrap a message as a storage-layer error.
pub fn to_storage_err(message: String) -> ByeaiError {
    ByeaiError::StorageError(StorageError::SqliteError { message })
}
