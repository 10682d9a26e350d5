//! v002: append-only reputation audit log.

use rusqlite::Connection;

use byeai_core::errors::ByeaiResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ByeaiResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reputation_log (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            voter_id        TEXT NOT NULL,
            old_reputation  INTEGER NOT NULL,
            new_reputation  INTEGER NOT NULL,
            reason          TEXT NOT NULL DEFAULT '',
            timestamp       INTEGER NOT NULL,
            FOREIGN KEY (voter_id) REFERENCES voters(voter_id)
        );

        CREATE INDEX IF NOT EXISTS idx_reputation_log_voter ON reputation_log(voter_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
