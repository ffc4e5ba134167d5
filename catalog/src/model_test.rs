use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_ids_parse_back() {
    for category in Category::ALL {
        assert_eq!(Category::from_id(category.id()), Some(category));
    }
}

#[test]
fn category_all_sentinel_is_not_a_category() {
    assert_eq!(Category::from_id("all"), None);
    assert_eq!(Category::from_id(""), None);
}

#[test]
fn category_serializes_as_selector_id() {
    assert_eq!(serde_json::to_value(Category::Social).unwrap(), serde_json::json!("social"));
    assert_eq!(Category::Social.label(), "Social Issues");
}

// =============================================================
// Status labels
// =============================================================

#[test]
fn problem_status_serializes_as_display_label() {
    assert_eq!(
        serde_json::to_value(ProblemStatus::SolutionGenerated).unwrap(),
        serde_json::json!("Solution Generated")
    );
    let parsed: ProblemStatus = serde_json::from_str("\"Under Review\"").unwrap();
    assert_eq!(parsed, ProblemStatus::UnderReview);
}

#[test]
fn solution_type_ids_and_labels() {
    assert_eq!(SolutionType::from_id("ai"), Some(SolutionType::AiGenerated));
    assert_eq!(SolutionType::AiGenerated.label(), "AI Generated");
    assert_eq!(SolutionType::from_id("robot"), None);
}

#[test]
fn urgency_defaults_to_medium() {
    assert_eq!(Urgency::default(), Urgency::Medium);
    assert_eq!(Urgency::from_id("critical"), Some(Urgency::Critical));
    assert_eq!(Urgency::Critical.label(), "Critical");
}

#[test]
fn visibility_defaults_to_public() {
    assert_eq!(Visibility::default(), Visibility::Public);
}

// =============================================================
// Persisted shapes
// =============================================================

#[test]
fn session_user_matches_stored_json_shape() {
    let user = SessionUser {
        id: 1,
        email: "a@b.com".to_owned(),
        name: "John Doe".to_owned(),
        role: "user".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        serde_json::json!({ "id": 1, "email": "a@b.com", "name": "John Doe", "role": "user" })
    );
}

#[test]
fn solution_uses_camel_case_and_type_key() {
    let solution = Solution {
        id: 9,
        title: "t".to_owned(),
        description: "d".to_owned(),
        problem_title: "p".to_owned(),
        kind: SolutionType::Expert,
        author: "a".to_owned(),
        votes: 1,
        status: SolutionStatus::Approved,
        category: Category::Other,
        date: "2024-01-01".to_owned(),
        implementation: "Planning".to_owned(),
        rating: 4.5,
        tags: vec![],
    };
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["problemTitle"], "p");
    assert_eq!(value["type"], "Expert");
    assert_eq!(value["status"], "Approved");
}
