use super::*;
use crate::model::{Category, ProblemStatus, Urgency, Visibility};

fn user() -> SessionUser {
    SessionUser { id: 1, email: "ada@example.com".to_owned(), name: "John Doe".to_owned(), role: "user".to_owned() }
}

fn submitted(id: u64, title: &str) -> SubmittedProblem {
    SubmittedProblem {
        id,
        title: title.to_owned(),
        description: "desc".to_owned(),
        category: Category::Environment,
        location: String::new(),
        visibility: Visibility::Public,
        tags: vec![],
        urgency: Urgency::Medium,
        author: "Current User".to_owned(),
        date: "2024-02-01T00:00:00.000Z".to_owned(),
        status: ProblemStatus::Submitted,
        views: 0,
        likes: 0,
        comments: 0,
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.remove("k").unwrap();
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_round_trips_through_user_key() {
    let mut store = MemoryStore::new();
    assert_eq!(load_session(&store).unwrap(), None);

    save_session(&mut store, &user()).unwrap();
    let raw = store.get(USER_KEY).unwrap().unwrap();
    assert!(raw.contains("\"name\":\"John Doe\""));
    assert_eq!(load_session(&store).unwrap(), Some(user()));

    clear_session(&mut store).unwrap();
    assert_eq!(load_session(&store).unwrap(), None);
}

#[test]
fn malformed_session_is_decode_error() {
    let mut store = MemoryStore::new();
    store.set(USER_KEY, "not json").unwrap();
    let err = load_session(&store).unwrap_err();
    assert!(matches!(err, StoreError::Decode { ref key, .. } if key == USER_KEY));
}

// =============================================================
// Submitted problems
// =============================================================

#[test]
fn missing_problems_key_reads_empty() {
    let store = MemoryStore::new();
    assert!(load_submitted(&store).unwrap().is_empty());
}

#[test]
fn append_keeps_existing_records_in_order() {
    let mut store = MemoryStore::new();
    assert_eq!(append_submitted(&mut store, submitted(1, "first")).unwrap(), 1);
    assert_eq!(append_submitted(&mut store, submitted(2, "second")).unwrap(), 2);

    let titles: Vec<_> = load_submitted(&store).unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, ["first", "second"]);
}

#[test]
fn append_does_not_overwrite_malformed_blob() {
    let mut store = MemoryStore::new();
    store.set(PROBLEMS_KEY, "{broken").unwrap();

    let err = append_submitted(&mut store, submitted(1, "x")).unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
    assert_eq!(store.get(PROBLEMS_KEY).unwrap().as_deref(), Some("{broken"));
}

#[test]
fn stored_problem_uses_category_id() {
    let mut store = MemoryStore::new();
    append_submitted(&mut store, submitted(7, "x")).unwrap();
    let raw = store.get(PROBLEMS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["category"], "environment");
    assert_eq!(value[0]["status"], "Submitted");
    assert_eq!(value[0]["urgency"], "medium");
}
