//! Voter rows and the reputation log.

use byeai_storage::queries::{reputation_log_ops, voter_ops};
use byeai_storage::StorageEngine;

fn engine() -> StorageEngine {
    StorageEngine::open_in_memory().unwrap()
}

fn with_writer<F, T>(engine: &StorageEngine, f: F) -> T
where
    F: FnOnce(&rusqlite::Connection) -> byeai_core::ByeaiResult<T>,
{
    engine.pool().writer.with_conn_sync(f).unwrap()
}

#[test]
fn ensure_voter_creates_once_at_minimum_reputation() {
    let e = engine();
    with_writer(&e, |conn| {
        let first = voter_ops::ensure_voter(conn, "hash-1")?;
        assert_eq!(first.reputation_points, 1);

        voter_ops::set_reputation(conn, "hash-1", 4)?;
        let again = voter_ops::ensure_voter(conn, "hash-1")?;
        assert_eq!(again.reputation_points, 4, "existing voter must not be reset");
        assert_eq!(again.created_at, first.created_at);
        assert_eq!(voter_ops::count_voters(conn)?, 1);
        Ok(())
    });
}

#[test]
fn get_voter_nonexistent_returns_none() {
    let e = engine();
    with_writer(&e, |conn| {
        assert!(voter_ops::get_voter(conn, "ghost")?.is_none());
        Ok(())
    });
}

#[test]
fn schema_refuses_reputation_below_one() {
    let e = engine();
    let result = e.pool().writer.with_conn_sync(|conn| {
        voter_ops::ensure_voter(conn, "hash-1")?;
        voter_ops::set_reputation(conn, "hash-1", 0)
    });
    assert!(result.is_err());
}

#[test]
fn reputation_log_is_listed_oldest_first() {
    let e = engine();
    with_writer(&e, |conn| {
        voter_ops::ensure_voter(conn, "hash-1")?;
        voter_ops::ensure_voter(conn, "hash-2")?;
        reputation_log_ops::insert_entry(conn, "hash-1", 1, 2, "first", 100)?;
        reputation_log_ops::insert_entry(conn, "hash-2", 1, 2, "other voter", 101)?;
        reputation_log_ops::insert_entry(conn, "hash-1", 2, 3, "second", 102)?;

        let entries = reputation_log_ops::list_for_voter(conn, "hash-1")?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].reason, "first");
        assert_eq!((entries[0].old_reputation, entries[0].new_reputation), (1, 2));
        assert_eq!((entries[1].old_reputation, entries[1].new_reputation), (2, 3));
        assert_eq!(entries[1].timestamp, 102);
        assert_eq!(reputation_log_ops::count_entries(conn)?, 3);
        Ok(())
    });
}
