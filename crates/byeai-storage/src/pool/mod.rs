//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::PathBuf;

use byeai_core::errors::ByeaiResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection, plus read connections when the database
/// lives in a file.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` in memory: a second in-memory connection would be a separate,
    /// empty database, so all reads go through the writer.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open an in-memory pool with no readers (for testing).
    pub fn open_in_memory() -> ByeaiResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }
}
