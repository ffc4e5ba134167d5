use super::*;

#[test]
fn pending_notice_uses_feature_title() {
    let notice = Notice::pending(PendingFeature::Notifications);
    assert_eq!(notice.title, "🔔 Notifications");
    assert_eq!(notice.description, PENDING_DESCRIPTION);
    assert_eq!(notice.variant, NoticeVariant::Default);
}

#[test]
fn error_notice_is_destructive() {
    let notice = Notice::error("Please fill in all fields");
    assert_eq!(notice.title, "❌ Error");
    assert_eq!(notice.variant, NoticeVariant::Destructive);
}

#[test]
fn like_title_reflects_new_state() {
    assert_eq!(PendingFeature::Like { liked: true }.title(), "❤️ Liked");
    assert_eq!(PendingFeature::Like { liked: false }.title(), "💔 Unliked");
}

#[test]
fn admin_actions_prefix_the_action_name() {
    assert_eq!(PendingFeature::UserAction("Suspend").title(), "👤 Suspend");
    assert_eq!(PendingFeature::ProblemAction("Approve").title(), "📋 Approve");
}
