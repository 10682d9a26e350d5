//! Tracing setup and events: installing twice is harmless, events and spans
//! can be emitted with or without a subscriber.

use byeai_observability::tracing_setup::{events, spans};
use byeai_observability::{init_tracing_from_config, init_tracing_with_filter};

#[test]
fn second_init_reports_existing_subscriber() {
    // Whichever call wins, the other must report that a subscriber exists.
    let first = init_tracing_with_filter("debug");
    let second = init_tracing_from_config(&Default::default());
    assert!(!(first && second));
}

#[test]
fn events_emit_without_panicking() {
    events::vote_recorded("voter", "item", "deepfake", 2.0, 17.0);
    events::duplicate_vote_rejected("voter", "item", "deepfake");
    events::reputation_revised("item", true, 16, 16);
    events::revision_failed("item", "store unavailable");
    events::popularity_degraded("item", "quota exhausted", 100_000);
    events::lookup_quota_exhausted(9_000, 9_000);
}

#[test]
fn spans_carry_expected_names() {
    for (span, name) in [
        (spans::submit("voter", "item", "deepfake"), spans::SUBMIT),
        (spans::revision("item"), spans::REVISION),
        (spans::lookup("item"), spans::LOOKUP),
    ] {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}
