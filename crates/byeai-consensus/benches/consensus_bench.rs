//! Criterion benchmarks for byeai-consensus.
//!
//! - weight / threshold: pure arithmetic
//! - submit_vote on an in-memory store (fresh voter each iteration)
//! - revision pass over an item with 100 votes

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use byeai_consensus::{accumulator, revision, scoring};
use byeai_core::models::{Category, VoteSubmission};
use byeai_storage::StorageEngine;

fn bench_scoring(c: &mut Criterion) {
    c.bench_function("weight", |b| b.iter(|| scoring::weight(black_box(37))));
    c.bench_function("threshold", |b| {
        b.iter(|| scoring::threshold(black_box(4_000_000)))
    });
}

fn bench_submit_vote(c: &mut Criterion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    let mut n: u64 = 0;
    c.bench_function("submit_vote", |b| {
        b.iter(|| {
            n += 1;
            let sub = VoteSubmission::new(format!("voter-{n}"), "vid", Category::AiGeneral, 0, 90_000);
            engine
                .pool()
                .writer
                .with_conn_sync(|conn| accumulator::submit_vote(conn, &sub))
                .unwrap()
        })
    });
}

fn bench_revision(c: &mut Criterion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    for i in 0..100 {
        let sub = VoteSubmission::new(format!("voter-{i}"), "vid", Category::Deepfake, 0, 90_000);
        engine
            .pool()
            .writer
            .with_conn_sync(|conn| accumulator::submit_vote(conn, &sub))
            .unwrap();
    }
    c.bench_function("revise_reputations_100_votes", |b| {
        b.iter(|| {
            engine
                .pool()
                .writer
                .with_conn_sync(|conn| revision::revise_reputations(conn, "vid"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_scoring, bench_submit_vote, bench_revision);
criterion_main!(benches);
