use super::*;

#[test]
fn priority_label_capitalises_urgency() {
    assert_eq!(priority_label(Urgency::Critical), "Critical Priority");
    assert_eq!(priority_label(Urgency::Low), "Low Priority");
}

#[test]
fn meta_description_truncates_to_limit() {
    let long = "x".repeat(300);
    let meta = meta_description(&long);
    assert_eq!(meta.chars().count(), META_DESCRIPTION_CHARS + 3);
    assert!(meta.ends_with("..."));
}

#[test]
fn meta_description_keeps_short_text() {
    assert_eq!(meta_description("Short"), "Short...");
}

#[test]
fn meta_description_counts_chars_not_bytes() {
    let emoji = "🌊".repeat(200);
    assert_eq!(meta_description(&emoji).chars().count(), META_DESCRIPTION_CHARS + 3);
}
