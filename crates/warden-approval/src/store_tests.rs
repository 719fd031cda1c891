use super::*;
use crate::decision::DecisionAction;
use std::sync::Arc;

#[test]
fn test_store_starts_empty() {
    let store = DecisionStore::new();
    assert_eq!(store.count(), 0);
    assert!(store.get(&RequestId::new("req-1")).is_none());
}

#[test]
fn test_set_and_get() {
    let store = DecisionStore::new();
    let id = RequestId::new("req-1");

    store.set(id.clone(), DecisionRecord::approved());
    assert_eq!(store.count(), 1);

    let record = store.get(&id).unwrap();
    assert!(record.decided);
    assert_eq!(record.action, DecisionAction::Approved);
    assert_eq!(record.display_label, "approved");
}

#[test]
fn test_reads_are_idempotent() {
    let store = DecisionStore::new();
    let id = RequestId::new("req-1");

    // Absent both times.
    assert_eq!(store.get(&id), None);
    assert_eq!(store.get(&id), None);

    store.set(id.clone(), DecisionRecord::denied());

    // Present and identical both times.
    let first = store.get(&id);
    let second = store.get(&id);
    assert_eq!(first, second);
}

#[test]
fn test_redundant_identical_writes_are_harmless() {
    let store = DecisionStore::new();
    let id = RequestId::new("req-1");
    let record = DecisionRecord::denied();

    store.set(id.clone(), record.clone());
    store.set(id.clone(), record.clone());

    assert_eq!(store.count(), 1);
    assert_eq!(store.get(&id), Some(record));
}

#[test]
fn test_last_write_wins() {
    let store = DecisionStore::new();
    let id = RequestId::new("req-1");

    store.set(id.clone(), DecisionRecord::confirmed_historical());
    store.set(id.clone(), DecisionRecord::approved());

    let record = store.get(&id).unwrap();
    assert_eq!(record.action, DecisionAction::Approved);
}

#[test]
fn test_records_are_per_request_id() {
    let store = DecisionStore::new();

    store.set(RequestId::new("req-1"), DecisionRecord::approved());
    store.set(RequestId::new("req-2"), DecisionRecord::denied());

    assert_eq!(store.count(), 2);
    assert_eq!(
        store.get(&RequestId::new("req-1")).unwrap().action,
        DecisionAction::Approved
    );
    assert_eq!(
        store.get(&RequestId::new("req-2")).unwrap().action,
        DecisionAction::Denied
    );
}

#[test]
fn test_shared_across_handles() {
    // Coordinator instances share one store per session via Arc.
    let store = Arc::new(DecisionStore::new());
    let other = Arc::clone(&store);

    store.set(RequestId::new("req-1"), DecisionRecord::approved());
    assert!(other.get(&RequestId::new("req-1")).is_some());
}

#[test]
fn test_debug_prints_count_only() {
    let store = DecisionStore::new();
    store.set(RequestId::new("req-1"), DecisionRecord::approved());
    assert_eq!(format!("{store:?}"), "DecisionStore { count: 1 }");
}
