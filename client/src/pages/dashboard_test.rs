use super::*;

#[test]
fn activity_icon_prefers_status_over_kind() {
    assert_eq!(activity_icon(ActivityKind::Collaboration, "Approved"), ("✅", "text-green-400"));
    assert_eq!(activity_icon(ActivityKind::Problem, "Solution Generated"), ("💡", "text-blue-400"));
}

#[test]
fn activity_icon_falls_back_by_kind() {
    assert_eq!(activity_icon(ActivityKind::Collaboration, "Active"), ("🤝", "text-purple-400"));
    assert_eq!(activity_icon(ActivityKind::Problem, "Under Review"), ("⚠", "text-yellow-400"));
}
