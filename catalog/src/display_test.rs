use super::*;

#[test]
fn results_label_pluralises_on_count() {
    assert_eq!(results_label(0, "problem"), "Found 0 problems");
    assert_eq!(results_label(1, "problem"), "Found 1 problem");
    assert_eq!(results_label(6, "solution"), "Found 6 solutions");
}

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1247), "1,247");
    assert_eq!(group_thousands(15420), "15,420");
    assert_eq!(group_thousands(1_000_000), "1,000,000");
}

#[test]
fn format_date_renders_month_day_year() {
    assert_eq!(format_date("2024-01-05"), "1/5/2024");
    assert_eq!(format_date("2024-02-01T12:00:00.000Z"), "2/1/2024");
}

#[test]
fn format_date_passes_through_non_dates() {
    assert_eq!(format_date("2 hours ago"), "2 hours ago");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
}

#[test]
fn badge_classes() {
    assert_eq!(problem_status_class(ProblemStatus::Completed), "status-completed");
    assert_eq!(solution_status_class(SolutionStatus::UnderReview), "status-review");
    assert_eq!(urgency_class(Urgency::Critical), "text-red-400");
    assert_eq!(priority_class("Unknown"), "text-white/60");
}
