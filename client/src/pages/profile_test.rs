use super::*;

#[test]
fn saved_notice_is_not_destructive() {
    let notice = profile_saved_notice();
    assert_eq!(notice.title, "✅ Profile Updated");
    assert_eq!(notice.variant, catalog::NoticeVariant::Default);
}

#[test]
fn activity_chips() {
    assert_eq!(activity_chip(ActivityKind::Problem).1, "chip--orange");
    assert_eq!(activity_status_chip("Approved"), "chip--green");
    assert_eq!(activity_status_chip("Under Review"), "chip--yellow");
    assert_eq!(activity_status_chip("Active"), "chip--blue");
}

#[test]
fn every_achievement_has_an_icon() {
    for achievement in fixtures::achievements() {
        let (icon, color) = achievement_icon(achievement.id);
        assert!(!icon.is_empty());
        assert!(color.starts_with("text-"));
    }
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn activity_tab_renders_status_text_and_chip() {
    let html = Owner::new().with(|| view! { <ActivityTab/> }.to_html());
    assert!(html.contains("Activity History"));
    assert!(html.contains("chip chip--yellow"));
    assert!(html.contains("chip chip--green"));
    assert!(html.contains("Under Review"));
    assert!(html.contains("Approved"));
}
