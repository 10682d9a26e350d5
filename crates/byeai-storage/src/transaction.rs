//! All-or-nothing execution of a unit of work on one connection.

use rusqlite::Connection;

use byeai_core::errors::{ByeaiError, ByeaiResult, StorageError};

/// Run `f` inside a transaction. Commits on `Ok`, rolls back on `Err`.
///
/// `label` only appears in error messages.
pub fn with_transaction<F, T>(conn: &Connection, label: &str, f: F) -> ByeaiResult<T>
where
    F: FnOnce(&Connection) -> ByeaiResult<T>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| aborted(label, "begin", e))?;

    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| aborted(label, "commit", e))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn aborted(label: &str, stage: &str, e: rusqlite::Error) -> ByeaiError {
    ByeaiError::StorageError(StorageError::TransactionAborted {
        reason: format!("{label} {stage}: {e}"),
    })
}
