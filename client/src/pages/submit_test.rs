use catalog::store;
use catalog::{Category, MemoryStore};

use super::*;

fn complete_draft() -> ProblemDraft {
    ProblemDraft {
        title: "Microplastics in river deltas".to_string(),
        description: "Sediment samples show rising particle counts.".to_string(),
        category: Some(Category::Environment),
        ..ProblemDraft::default()
    }
}

fn last_notice(toasts: RwSignal<ToastState>) -> Option<catalog::Notice> {
    toasts.with_untracked(|t| t.items.last().map(|toast| toast.notice.clone()))
}

// =============================================================================
// RECORD SUBMISSION
// =============================================================================

#[test]
fn records_the_draft_captured_at_submit_time() {
    Owner::new().with(|| {
        let draft = RwSignal::new(complete_draft());
        let duplicates = RwSignal::new(Vec::<DuplicateCandidate>::new());
        let toasts = RwSignal::new(ToastState::default());
        let mut store = MemoryStore::new();

        let snapshot = draft.get_untracked();
        draft.update(|d| d.title.clear());
        record_submission(&mut store, snapshot, draft, duplicates, toasts);

        let saved = store::load_submitted(&store).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Microplastics in river deltas");
        assert_eq!(draft.get_untracked(), ProblemDraft::default());
        assert_eq!(last_notice(toasts), Some(submission::submitted_notice()));
    });
}

#[test]
fn incomplete_snapshot_writes_nothing() {
    Owner::new().with(|| {
        let draft = RwSignal::new(ProblemDraft::default());
        let duplicates = RwSignal::new(Vec::<DuplicateCandidate>::new());
        let toasts = RwSignal::new(ToastState::default());
        let mut store = MemoryStore::new();

        record_submission(&mut store, ProblemDraft::default(), draft, duplicates, toasts);

        assert!(store::load_submitted(&store).unwrap().is_empty());
        let notice = last_notice(toasts).unwrap();
        assert_eq!(notice.variant, catalog::NoticeVariant::Destructive);
    });
}
