use byeai_core::models::Category;
use byeai_core::ByeaiError;
use byeai_storage::queries::{aggregation, item_ops, vote_ops, voter_ops};
use byeai_storage::{with_transaction, StorageEngine};

#[test]
fn failed_unit_of_work_leaves_no_trace() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result: Result<(), ByeaiError> = engine.pool().writer.with_conn_sync(|conn| {
        with_transaction(conn, "test", |tx| {
            voter_ops::ensure_voter(tx, "v1")?;
            item_ops::upsert_item(tx, "vid", 5)?;
            Err(ByeaiError::ItemNotFound {
                item_id: "vid".into(),
            })
        })
    });
    // The closure's own error comes back untouched, not as a storage error.
    assert!(matches!(result, Err(ByeaiError::ItemNotFound { .. })));

    engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            assert!(voter_ops::get_voter(conn, "v1")?.is_none());
            assert!(item_ops::get_item(conn, "vid")?.is_none());
            Ok(())
        })
        .unwrap();
}

#[test]
fn successful_unit_of_work_commits() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let score = engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            with_transaction(conn, "test", |tx| {
                item_ops::upsert_item(tx, "vid", 5)?;
                item_ops::adjust_score(tx, "vid", 2.0)
            })
        })
        .unwrap();
    assert_eq!(score, 2.0);
}

#[test]
fn category_counts_order_by_count_then_name() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let counts = engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            item_ops::upsert_item(conn, "vid", 5)?;
            let ballots = [
                ("v1", Category::Deepfake),
                ("v2", Category::Deepfake),
                ("v3", Category::AiVoice),
                ("v4", Category::AiMusic),
                ("v5", Category::AiVoice),
                ("v6", Category::Other),
            ];
            for (voter, category) in ballots {
                voter_ops::ensure_voter(conn, voter)?;
                vote_ops::insert_vote(conn, voter, "vid", category, 1)?;
            }
            aggregation::category_counts(conn, "vid")
        })
        .unwrap();

    assert_eq!(
        counts,
        vec![
            (Category::AiVoice, 2),
            (Category::Deepfake, 2),
            (Category::AiMusic, 1),
            (Category::Other, 1),
        ]
    );
}

#[test]
fn category_counts_for_unvoted_item_is_empty() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let counts = engine
        .pool()
        .writer
        .with_conn_sync(|conn| aggregation::category_counts(conn, "nothing"))
        .unwrap();
    assert!(counts.is_empty());
}
