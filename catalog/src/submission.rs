//! Problem submission form flow.
//!
//! DESIGN
//! ======
//! `ProblemDraft` is the whole form state. The client validates on submit,
//! waits out a simulated request delay, then calls [`submit`], which validates
//! again, appends one record to the `problems` key, and resets the draft.
//! The draft is only reset after the write succeeds.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::model::{Category, ProblemStatus, SubmittedProblem, Urgency, Visibility};
use crate::notice::Notice;
use crate::store::{self, KeyValueStore, StoreError};

/// Simulated request latency before the record is written.
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// Author recorded on every locally submitted problem.
pub const SUBMITTED_AUTHOR: &str = "Current User";

/// Titles must be longer than this before the duplicate hint is re-evaluated.
pub const DUPLICATE_HINT_MIN_CHARS: usize = 10;

const DUPLICATE_KEYWORDS: [&str; 2] = ["climate", "urban"];

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Submission form state. `Default` is the empty initial form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub location: String,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub urgency: Urgency,
}

impl ProblemDraft {
    /// Add a trimmed tag. Returns `false` for blank or duplicate tags, which
    /// leave the list unchanged.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Check the required fields. Whitespace-only text counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingRequired`] if title, description, or
    /// category is missing.
    pub fn validate(&self) -> Result<Category, SubmissionError> {
        match self.category {
            Some(category) if !self.title.trim().is_empty() && !self.description.trim().is_empty() => Ok(category),
            _ => Err(SubmissionError::MissingRequired),
        }
    }

    fn to_record(&self, category: Category, id: u64, date: String) -> SubmittedProblem {
        SubmittedProblem {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            location: self.location.clone(),
            visibility: self.visibility,
            tags: self.tags.clone(),
            urgency: self.urgency,
            author: SUBMITTED_AUTHOR.to_owned(),
            date,
            status: ProblemStatus::Submitted,
            views: 0,
            likes: 0,
            comments: 0,
        }
    }
}

/// Validate `draft`, append it to the store, and reset it.
///
/// `id` is the submission time in epoch milliseconds and `date` its RFC 3339
/// rendering; both come from the caller's clock.
///
/// # Errors
///
/// Returns [`SubmissionError::MissingRequired`] with the store untouched, or
/// [`SubmissionError::Store`] if the existing list is unreadable or the write
/// fails. The draft is kept on error.
pub fn submit(
    store: &mut impl KeyValueStore,
    draft: &mut ProblemDraft,
    id: u64,
    date: String,
) -> Result<SubmittedProblem, SubmissionError> {
    let category = draft.validate()?;
    let record = draft.to_record(category, id, date);
    store::append_submitted(store, record.clone())?;
    *draft = ProblemDraft::default();
    Ok(record)
}

#[must_use]
pub fn submitted_notice() -> Notice {
    Notice::success("Your problem has been submitted successfully! Our AI is now analyzing it for potential solutions.")
}

// =============================================================================
// DUPLICATE HINT
// =============================================================================

/// A previously submitted problem that looks similar to the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateCandidate {
    pub id: u32,
    pub title: String,
    /// Similarity percentage.
    pub similarity: u8,
    pub author: String,
}

fn mock_duplicates() -> Vec<DuplicateCandidate> {
    vec![
        DuplicateCandidate {
            id: 1,
            title: "Climate Change in Urban Areas".to_owned(),
            similarity: 85,
            author: "Dr. Sarah Chen".to_owned(),
        },
        DuplicateCandidate {
            id: 2,
            title: "Urban Climate Adaptation Strategies".to_owned(),
            similarity: 72,
            author: "Maria Rodriguez".to_owned(),
        },
    ]
}

/// Re-evaluate the duplicate hint after the title changes.
///
/// `None` means the title is too short and the current hint stays as it is.
/// `Some(empty)` clears the hint.
#[must_use]
pub fn duplicate_hint(title: &str) -> Option<Vec<DuplicateCandidate>> {
    if title.chars().count() <= DUPLICATE_HINT_MIN_CHARS {
        return None;
    }
    let lower = title.to_lowercase();
    if DUPLICATE_KEYWORDS.iter().any(|k| lower.contains(k)) { Some(mock_duplicates()) } else { Some(Vec::new()) }
}
