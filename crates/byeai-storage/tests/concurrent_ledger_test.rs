//! Racing submissions of the same triple: the ledger admits exactly one.

use std::sync::Arc;

use byeai_core::models::Category;
use byeai_storage::queries::vote_ops::{self, VoteInsert};
use byeai_storage::queries::{item_ops, voter_ops};
use byeai_storage::StorageEngine;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_inserts_admit_one() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("race.db")).unwrap());

    engine
        .write(|conn| {
            voter_ops::ensure_voter(conn, "v1")?;
            item_ops::upsert_item(conn, "vid", 10).map(|_| ())
        })
        .await
        .unwrap();

    let mut handles = Vec::new();
    for ts in 0..16 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            engine
                .write(|conn| vote_ops::insert_vote(conn, "v1", "vid", Category::Deepfake, ts))
                .await
        }));
    }

    let mut recorded = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            VoteInsert::Recorded(_) => recorded += 1,
            VoteInsert::AlreadyVoted => rejected += 1,
        }
    }

    assert_eq!(recorded, 1);
    assert_eq!(rejected, 15);
    let count = engine
        .read(|conn| vote_ops::count_votes_for_item(conn, "vid"))
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_distinct_voters_all_land() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    engine
        .write(|conn| item_ops::upsert_item(conn, "vid", 10).map(|_| ()))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let voter = format!("voter-{i}");
            engine
                .write(|conn| {
                    voter_ops::ensure_voter(conn, &voter)?;
                    vote_ops::insert_vote(conn, &voter, "vid", Category::AiGeneral, i)
                })
                .await
        }));
    }
    for handle in handles {
        assert!(matches!(handle.await.unwrap().unwrap(), VoteInsert::Recorded(_)));
    }

    let count = engine
        .read(|conn| vote_ops::count_votes_for_item(conn, "vid"))
        .await
        .unwrap();
    assert_eq!(count, 20);
}
