//! Idempotency invariants: replayed keys give at-most-once externally
//! visible side effects.

use std::sync::Arc;

use databridge::actions::{Connector, CreateRecordRequest, PatchRecordRequest};
use databridge::filter::{Comparison, ComparisonOperator};
use databridge::idempotency::InMemoryIdempotencyCache;
use databridge::store::{InMemoryStore, RecordStore, StoreQuery};
use serde_json::{json, Value};

/// Connector plus a handle on its backing store, so tests can count
/// records underneath the single-record search limit.
fn connector_with_store() -> (Connector, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let connector = Connector::new(store.clone(), Arc::new(InMemoryIdempotencyCache::new()));
    (connector, store)
}

fn create_request(key: Option<&str>, data: Value) -> CreateRecordRequest {
    CreateRecordRequest {
        type_name: "Cliente".to_string(),
        idempotency_key: key.map(String::from),
        record_id: None,
        data,
    }
}

fn stored_total(store: &InMemoryStore) -> usize {
    store
        .fetch(&StoreQuery::table("clientes").limit(100))
        .unwrap()
        .total
}

#[test]
fn same_key_creates_exactly_one_record() {
    let (connector, store) = connector_with_store();
    let data = json!({"Nome": "Ana", "CpfCnpj": "11111111111"});

    let first = connector
        .create_record(create_request(Some("retry-1"), data.clone()), None)
        .unwrap();
    let second = connector
        .create_record(create_request(Some("retry-1"), data), None)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(stored_total(&store), 1);
}

#[test]
fn different_keys_create_two_records() {
    let (connector, store) = connector_with_store();
    let data = json!({"Nome": "Ana", "CpfCnpj": "11111111111"});

    let first = connector
        .create_record(create_request(Some("k-1"), data.clone()), None)
        .unwrap();
    let second = connector
        .create_record(create_request(Some("k-2"), data), None)
        .unwrap();

    assert_ne!(first["recordId"], second["recordId"]);
    assert_eq!(stored_total(&store), 2);
}

#[test]
fn no_key_never_replays() {
    let (connector, store) = connector_with_store();
    let data = json!({"Nome": "Ana", "CpfCnpj": "11111111111"});

    let first = connector
        .create_record(create_request(None, data.clone()), None)
        .unwrap();
    let second = connector
        .create_record(create_request(None, data), None)
        .unwrap();

    assert_ne!(first["recordId"], second["recordId"]);
    assert_eq!(stored_total(&store), 2);
}

#[test]
fn body_key_takes_precedence_over_header() {
    let (connector, store) = connector_with_store();
    let data = json!({"Nome": "Ana", "CpfCnpj": "11111111111"});

    let first = connector
        .create_record(
            create_request(Some("body-key"), data.clone()),
            Some("header-key".to_string()),
        )
        .unwrap();

    // same body key, different header: still a replay
    let second = connector
        .create_record(
            create_request(Some("body-key"), data.clone()),
            Some("other-header".to_string()),
        )
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(stored_total(&store), 1);

    // header key alone is a distinct entry
    let third = connector
        .create_record(create_request(None, data), Some("header-key".to_string()))
        .unwrap();
    assert_ne!(first["recordId"], third["recordId"]);
    assert_eq!(stored_total(&store), 2);
}

#[test]
fn replayed_create_skips_payload_validation() {
    let (connector, store) = connector_with_store();

    let valid = create_request(
        Some("retry-1"),
        json!({"Nome": "Ana", "CpfCnpj": "11111111111"}),
    );
    let first = connector.create_record(valid, None).unwrap();

    // the retry arrives mangled but carries the same key
    let broken = create_request(Some("retry-1"), json!({}));
    let second = connector.create_record(broken, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(stored_total(&store), 1);
}

#[test]
fn patch_replay_applies_no_second_mutation() {
    let (connector, _store) = connector_with_store();
    let created = connector
        .create_record(
            create_request(None, json!({"Nome": "Ana", "CpfCnpj": "11111111111"})),
            None,
        )
        .unwrap();
    let record_id = created["recordId"].as_str().unwrap().to_string();

    let patch = |telefone: &str| PatchRecordRequest {
        type_name: "Cliente".to_string(),
        idempotency_key: Some("patch-key".to_string()),
        record_id: Some(record_id.clone()),
        data: json!({"Telefone": telefone}),
    };

    connector.patch_record(patch("111"), None).unwrap();
    connector.patch_record(patch("222"), None).unwrap();

    let records = connector
        .search_records(databridge::actions::SearchRecordsRequest {
            query: databridge::actions::SearchQuery {
                from: "Cliente".to_string(),
                query_filter: Some(Comparison::new(
                    ComparisonOperator::Equals,
                    "Id",
                    record_id.as_str(),
                )),
                attributes_to_select: None,
            },
            pagination: None,
        })
        .unwrap()
        .records;

    assert_eq!(records[0]["Telefone"], "111");
}
