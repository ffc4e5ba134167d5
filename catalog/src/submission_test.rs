use super::*;
use crate::store::{MemoryStore, PROBLEMS_KEY, load_submitted};

fn complete_draft() -> ProblemDraft {
    ProblemDraft {
        title: "Plastic in rivers".to_owned(),
        description: "Rivers carry plastic to the sea.".to_owned(),
        category: Some(Category::Environment),
        location: "Jakarta".to_owned(),
        visibility: Visibility::Private,
        tags: vec!["plastic".to_owned()],
        urgency: Urgency::High,
    }
}

const DATE: &str = "2024-02-01T12:00:00.000Z";

// =============================================================
// Tags
// =============================================================

#[test]
fn add_tag_trims_and_rejects_duplicates() {
    let mut draft = ProblemDraft::default();
    assert!(draft.add_tag("  water "));
    assert!(!draft.add_tag("water"));
    assert!(!draft.add_tag("   "));
    assert_eq!(draft.tags, ["water"]);
}

#[test]
fn remove_tag_drops_matching_tag() {
    let mut draft = ProblemDraft::default();
    draft.add_tag("a");
    draft.add_tag("b");
    draft.remove_tag("a");
    assert_eq!(draft.tags, ["b"]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn initial_draft_matches_empty_form() {
    let draft = ProblemDraft::default();
    assert!(draft.title.is_empty());
    assert_eq!(draft.category, None);
    assert_eq!(draft.visibility, Visibility::Public);
    assert_eq!(draft.urgency, Urgency::Medium);
    assert!(draft.tags.is_empty());
}

#[test]
fn each_missing_required_field_fails() {
    let missing_title = ProblemDraft { title: " ".to_owned(), ..complete_draft() };
    let missing_description = ProblemDraft { description: String::new(), ..complete_draft() };
    let missing_category = ProblemDraft { category: None, ..complete_draft() };

    for draft in [missing_title, missing_description, missing_category] {
        assert!(matches!(draft.validate(), Err(SubmissionError::MissingRequired)));
    }
}

#[test]
fn location_and_tags_are_optional() {
    let draft = ProblemDraft { location: String::new(), tags: vec![], ..complete_draft() };
    assert_eq!(draft.validate().unwrap(), Category::Environment);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn incomplete_submit_leaves_store_and_draft_unchanged() {
    let mut store = MemoryStore::new();
    append_submitted_seed(&mut store);
    let before = store.get(PROBLEMS_KEY).unwrap();

    let mut draft = ProblemDraft { category: None, ..complete_draft() };
    let snapshot = draft.clone();
    let err = submit(&mut store, &mut draft, 2, DATE.to_owned()).unwrap_err();

    assert_eq!(err.notice().description, "Please fill in all required fields");
    assert_eq!(store.get(PROBLEMS_KEY).unwrap(), before);
    assert_eq!(draft, snapshot);
}

fn append_submitted_seed(store: &mut MemoryStore) {
    let mut seed = complete_draft();
    submit(store, &mut seed, 1, DATE.to_owned()).unwrap();
}

#[test]
fn complete_submit_appends_one_record_and_resets() {
    let mut store = MemoryStore::new();
    append_submitted_seed(&mut store);

    let mut draft = complete_draft();
    let record = submit(&mut store, &mut draft, 2, DATE.to_owned()).unwrap();

    assert_eq!(draft, ProblemDraft::default());
    let stored = load_submitted(&store).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1], record);
    assert_eq!(record.author, "Current User");
    assert_eq!(record.status, ProblemStatus::Submitted);
    assert_eq!((record.views, record.likes, record.comments), (0, 0, 0));
    assert_eq!(record.visibility, Visibility::Private);
}

#[test]
fn store_failure_keeps_draft() {
    let mut store = MemoryStore::new();
    store.set(PROBLEMS_KEY, "oops").unwrap();

    let mut draft = complete_draft();
    let err = submit(&mut store, &mut draft, 3, DATE.to_owned()).unwrap_err();

    assert!(matches!(err, SubmissionError::Store(StoreError::Decode { .. })));
    assert_eq!(draft, complete_draft());
}

// =============================================================
// Duplicate hint
// =============================================================

#[test]
fn short_titles_leave_hint_alone() {
    assert_eq!(duplicate_hint("climate"), None);
    assert_eq!(duplicate_hint("0123456789"), None);
}

#[test]
fn keyword_titles_show_two_candidates() {
    let hint = duplicate_hint("Urban heat waves").unwrap();
    assert_eq!(hint.len(), 2);
    assert_eq!(hint[0].similarity, 85);

    assert_eq!(duplicate_hint("CLIMATE refugees").unwrap().len(), 2);
}

#[test]
fn other_long_titles_clear_hint() {
    assert_eq!(duplicate_hint("Plastic in rivers"), Some(Vec::new()));
}
