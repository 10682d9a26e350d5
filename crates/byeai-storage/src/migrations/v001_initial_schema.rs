//! v001: voters, items, votes (the ledger).

use rusqlite::Connection;

use byeai_core::errors::ByeaiResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ByeaiResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS voters (
            voter_id           TEXT PRIMARY KEY,
            reputation_points  INTEGER NOT NULL DEFAULT 1 CHECK (reputation_points >= 1),
            created_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS items (
            item_id            TEXT PRIMARY KEY,
            score              REAL NOT NULL DEFAULT 0.0,
            popularity_metric  INTEGER NOT NULL DEFAULT 0 CHECK (popularity_metric >= 0),
            created_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        -- One vote per (voter, item, category); the UNIQUE constraint is the
        -- ledger's only concurrency guarantee.
        CREATE TABLE IF NOT EXISTS votes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            voter_id    TEXT NOT NULL,
            item_id     TEXT NOT NULL,
            category    TEXT NOT NULL,
            timestamp   INTEGER NOT NULL,
            UNIQUE (voter_id, item_id, category),
            FOREIGN KEY (voter_id) REFERENCES voters(voter_id),
            FOREIGN KEY (item_id) REFERENCES items(item_id)
        );

        CREATE INDEX IF NOT EXISTS idx_votes_item ON votes(item_id);
        CREATE INDEX IF NOT EXISTS idx_votes_voter ON votes(voter_id);
        CREATE INDEX IF NOT EXISTS idx_votes_category ON votes(category);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
