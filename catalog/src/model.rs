//! Record shapes for problems, solutions, sessions, and page fixtures.
//!
//! DESIGN
//! ======
//! Enumerated labels serialize to the same strings the UI displays
//! (`"Under Review"`, `"AI Generated"`), except `Category`, which serializes
//! to its stable selector id (`"environment"`). Statuses are display-only;
//! nothing in this crate transitions them.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Topic a problem or solution belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Environment,
    Social,
    Technology,
    Healthcare,
    Education,
    Economic,
    Infrastructure,
    Other,
}

impl Category {
    /// Every category in submission-form order.
    pub const ALL: [Self; 8] = [
        Self::Environment,
        Self::Social,
        Self::Technology,
        Self::Healthcare,
        Self::Education,
        Self::Economic,
        Self::Infrastructure,
        Self::Other,
    ];

    /// Stable selector id used in `<select>` values and storage.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Social => "social",
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Economic => "economic",
            Self::Infrastructure => "infrastructure",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Environment => "Environment",
            Self::Social => "Social Issues",
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Economic => "Economic",
            Self::Infrastructure => "Infrastructure",
            Self::Other => "Other",
        }
    }

    /// Parse a selector id. Unknown ids (including `"all"`) yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Review lifecycle label of a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Solution Generated")]
    SolutionGenerated,
    #[serde(rename = "Awaiting Validation")]
    AwaitingValidation,
    Completed,
}

impl ProblemStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::SolutionGenerated => "Solution Generated",
            Self::AwaitingValidation => "Awaiting Validation",
            Self::Completed => "Completed",
        }
    }
}

/// Where a solution came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionType {
    #[serde(rename = "AI Generated")]
    AiGenerated,
    Community,
    Expert,
}

impl SolutionType {
    pub const ALL: [Self; 3] = [Self::AiGenerated, Self::Community, Self::Expert];

    /// Selector id (`ai`, `community`, `expert`).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::AiGenerated => "ai",
            Self::Community => "community",
            Self::Expert => "expert",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AiGenerated => "AI Generated",
            Self::Community => "Community",
            Self::Expert => "Expert",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// Review label of a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionStatus {
    Approved,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Development")]
    InDevelopment,
    #[serde(rename = "Awaiting Validation")]
    AwaitingValidation,
}

impl SolutionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::UnderReview => "Under Review",
            Self::InDevelopment => "In Development",
            Self::AwaitingValidation => "Awaiting Validation",
        }
    }
}

/// Submitter-assigned priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Option label in the submission form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
            Self::Critical => "Critical",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.id() == id)
    }
}

/// Who can see a submitted problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Account state shown in the admin users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Pending,
    Suspended,
}

impl MemberStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Suspended];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

// =============================================================================
// CATALOG RECORDS
// =============================================================================

/// A problem card as listed on the explore page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub author: String,
    /// Submission date, `YYYY-MM-DD`.
    pub date: String,
    pub status: ProblemStatus,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
}

/// A solution card as listed on the solutions page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Title of the problem this addresses. Free text, not a key.
    pub problem_title: String,
    #[serde(rename = "type")]
    pub kind: SolutionType,
    pub author: String,
    pub votes: u32,
    pub status: SolutionStatus,
    pub category: Category,
    pub date: String,
    /// Implementation stage, e.g. `"Pilot Phase"`.
    pub implementation: String,
    pub rating: f32,
    pub tags: Vec<String>,
}

/// Full record backing the problem-details page.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemDetail {
    pub problem: Problem,
    pub author_role: String,
    pub urgency: Urgency,
    pub tags: Vec<String>,
    pub visibility: Visibility,
    /// Markdown body shown in place of the card description.
    pub body: String,
}

/// A solution summary shown under a problem's details.
#[derive(Clone, Debug, PartialEq)]
pub struct ProposedSolution {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: SolutionType,
    pub votes: u32,
    pub status: SolutionStatus,
    pub author: String,
    pub date: String,
}

// =============================================================================
// PERSISTED BLOBS
// =============================================================================

/// Login record persisted under the `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Problem record appended to the `problems` key by the submission flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmittedProblem {
    /// Milliseconds since the Unix epoch at submission time.
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub urgency: Urgency,
    pub author: String,
    /// RFC 3339 timestamp.
    pub date: String,
    pub status: ProblemStatus,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
}

// =============================================================================
// PAGE FIXTURES
// =============================================================================

/// Headline counters on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub my_problems: u32,
    pub my_solutions: u32,
    pub total_problems: u32,
    pub active_solutions: u32,
    pub community_members: u32,
    pub solved_problems: u32,
}

/// What kind of record an activity row refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Problem,
    Solution,
    Collaboration,
}

/// A row in a recent-activity list.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    /// Verb shown on the profile page (`submitted`, `proposed`, `joined`).
    pub action: String,
    pub status: String,
    /// Relative (`"2 hours ago"`) or `YYYY-MM-DD` time.
    pub when: String,
}

/// Progress bar in an impact summary.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactMetric {
    pub label: String,
    pub value: String,
    pub percent: u8,
}

/// Editable profile fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub location: String,
    pub join_date: String,
    pub bio: String,
    pub role: String,
    pub organization: String,
    pub website: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileStats {
    pub problems_submitted: u32,
    pub solutions_proposed: u32,
    pub votes_received: u32,
    pub collaborations: u32,
    pub impact_score: u32,
    pub reputation: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub earned: bool,
}

/// Headline counters on the admin page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_problems: u32,
    pub pending_review: u32,
    pub total_solutions: u32,
    pub approved_solutions: u32,
    pub avg_response_time: String,
    pub satisfaction_rate: String,
}

/// A row in the admin users table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub join_date: String,
    pub status: MemberStatus,
    pub problems: u32,
    pub solutions: u32,
}

/// A problem awaiting moderation in the admin problems tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItem {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub submitted: String,
    pub status: String,
    pub priority: String,
}

/// A row in the admin system-health list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthMetric {
    pub metric: String,
    pub value: String,
    pub healthy: bool,
}
