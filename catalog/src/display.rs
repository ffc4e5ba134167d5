//! Formatting helpers shared by the pages.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::model::{MemberStatus, ProblemStatus, SolutionStatus, SolutionType, Urgency};

/// `"Found 1 problem"`, `"Found 3 solutions"`.
#[must_use]
pub fn results_label(count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} {noun}{plural}")
}

/// Thousands-separated integer, e.g. `15,420`.
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the date part of `YYYY-MM-DD[...]` as `M/D/YYYY`. Text that does
/// not start with a date is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let parts = raw.get(..10).map(|d| {
        let mut it = d.split('-');
        (it.next(), it.next(), it.next())
    });
    let Some((Some(y), Some(m), Some(d))) = parts else {
        return raw.to_owned();
    };
    match (y.parse::<u32>(), m.parse::<u32>(), d.parse::<u32>()) {
        (Ok(y), Ok(m), Ok(d)) if y >= 1000 && (1..=12).contains(&m) && (1..=31).contains(&d) => format!("{m}/{d}/{y}"),
        _ => raw.to_owned(),
    }
}

// =============================================================================
// BADGE CLASSES
// =============================================================================

#[must_use]
pub fn problem_status_class(status: ProblemStatus) -> &'static str {
    match status {
        ProblemStatus::Submitted | ProblemStatus::AwaitingValidation => "status-submitted",
        ProblemStatus::UnderReview => "status-review",
        ProblemStatus::SolutionGenerated => "status-solution",
        ProblemStatus::Completed => "status-completed",
    }
}

#[must_use]
pub fn solution_status_class(status: SolutionStatus) -> &'static str {
    match status {
        SolutionStatus::Approved => "status-completed",
        SolutionStatus::UnderReview => "status-review",
        SolutionStatus::InDevelopment => "status-solution",
        SolutionStatus::AwaitingValidation => "status-submitted",
    }
}

#[must_use]
pub fn solution_type_class(kind: SolutionType) -> &'static str {
    match kind {
        SolutionType::AiGenerated => "text-blue-400",
        SolutionType::Community => "text-green-400",
        SolutionType::Expert => "text-purple-400",
    }
}

#[must_use]
pub fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Low => "text-green-400",
        Urgency::Medium => "text-yellow-400",
        Urgency::High => "text-orange-400",
        Urgency::Critical => "text-red-400",
    }
}

#[must_use]
pub fn member_status_class(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => "text-green-400",
        MemberStatus::Pending => "text-yellow-400",
        MemberStatus::Suspended => "text-red-400",
    }
}

/// Review-queue priority (`High`, `Medium`, `Low`).
#[must_use]
pub fn priority_class(priority: &str) -> &'static str {
    match priority {
        "High" => "text-red-400",
        "Medium" => "text-yellow-400",
        "Low" => "text-green-400",
        _ => "text-white/60",
    }
}
