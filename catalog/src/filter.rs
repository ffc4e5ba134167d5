//! Catalog filters for the explore, solutions, and admin users views.
//!
//! Every filter is a conjunction of independent predicates evaluated in one
//! pass, keeping the input order. Text matching is a case-insensitive
//! substring test, so empty criteria match every record.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::model::{Category, Member, MemberStatus, Problem, Solution, SolutionStatus, SolutionType};

/// Selector value meaning "no restriction".
pub const ALL: &str = "all";

/// Solutions with strictly more votes than this are trending.
pub const TRENDING_MIN_VOTES: u32 = 100;

/// Solutions dated strictly after this day are recent.
pub const RECENT_AFTER: &str = "2024-01-18";

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// SELECTORS
// =============================================================================

/// Category selector: `"all"` or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector id. Anything that is not a category id means `All`.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Category::from_id(id).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(category) => category.id(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Location input: the literal `"all"` or a free-text substring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    Any,
    Contains(String),
}

impl LocationFilter {
    /// Interpret raw input text. Only the exact text `"all"` is the sentinel.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        if raw == ALL { Self::Any } else { Self::Contains(raw.to_owned()) }
    }

    /// Text to show back in the input box.
    #[must_use]
    pub fn as_input(&self) -> &str {
        match self {
            Self::Any => ALL,
            Self::Contains(text) => text,
        }
    }

    #[must_use]
    pub fn matches(&self, location: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Contains(text) => contains_ci(location, &text.to_lowercase()),
        }
    }
}

/// Solution origin selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(SolutionType),
}

impl TypeFilter {
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        SolutionType::from_id(id).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(kind) => kind.id(),
        }
    }

    #[must_use]
    pub fn matches(self, kind: SolutionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

/// Quick-filter pills on the solutions page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolutionView {
    #[default]
    All,
    Trending,
    Approved,
    Recent,
}

impl SolutionView {
    pub const ALL: [Self; 4] = [Self::All, Self::Trending, Self::Approved, Self::Recent];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Trending => "trending",
            Self::Approved => "approved",
            Self::Recent => "recent",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Solutions",
            Self::Trending => "Trending",
            Self::Approved => "Approved",
            Self::Recent => "Recent",
        }
    }

    #[must_use]
    pub fn matches(self, solution: &Solution) -> bool {
        match self {
            Self::All => true,
            Self::Trending => solution.votes > TRENDING_MIN_VOTES,
            Self::Approved => solution.status == SolutionStatus::Approved,
            // `YYYY-MM-DD` orders lexicographically.
            Self::Recent => solution.date.as_str() > RECENT_AFTER,
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Explore-page criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub location: LocationFilter,
}

impl ProblemQuery {
    #[must_use]
    pub fn matches(&self, problem: &Problem) -> bool {
        let needle = self.text.to_lowercase();
        let text_hit = contains_ci(&problem.title, &needle) || contains_ci(&problem.description, &needle);
        text_hit && self.category.matches(problem.category) && self.location.matches(&problem.location)
    }

    /// Matching problems in input order.
    #[must_use]
    pub fn apply(&self, problems: &[Problem]) -> Vec<Problem> {
        problems.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Solutions-page criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionQuery {
    pub text: String,
    pub kind: TypeFilter,
    pub view: SolutionView,
}

impl SolutionQuery {
    #[must_use]
    pub fn matches(&self, solution: &Solution) -> bool {
        let needle = self.text.to_lowercase();
        let text_hit = contains_ci(&solution.title, &needle)
            || contains_ci(&solution.description, &needle)
            || contains_ci(&solution.problem_title, &needle);
        text_hit && self.kind.matches(solution.kind) && self.view.matches(solution)
    }

    #[must_use]
    pub fn apply(&self, solutions: &[Solution]) -> Vec<Solution> {
        solutions.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// Admin users-table criteria. `status: None` means all statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub text: String,
    pub status: Option<MemberStatus>,
}

impl MemberQuery {
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        let needle = self.text.to_lowercase();
        let text_hit = contains_ci(&member.name, &needle) || contains_ci(&member.email, &needle);
        text_hit && self.status.map_or(true, |s| s == member.status)
    }

    #[must_use]
    pub fn apply(&self, members: &[Member]) -> Vec<Member> {
        members.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}
