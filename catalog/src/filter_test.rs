use super::*;
use crate::fixtures;

fn ids<T>(items: &[T], id: impl Fn(&T) -> u32) -> Vec<u32> {
    items.iter().map(id).collect()
}

fn problem_query(text: &str, category: &str, location: &str) -> ProblemQuery {
    ProblemQuery {
        text: text.to_owned(),
        category: CategoryFilter::from_id(category),
        location: LocationFilter::from_input(location),
    }
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn category_filter_parses_all_and_ids() {
    assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_id("social"), CategoryFilter::Only(Category::Social));
    assert_eq!(CategoryFilter::from_id("nonsense"), CategoryFilter::All);
    assert_eq!(CategoryFilter::Only(Category::Technology).id(), "technology");
}

#[test]
fn location_filter_only_exact_all_is_sentinel() {
    assert_eq!(LocationFilter::from_input("all"), LocationFilter::Any);
    assert_eq!(LocationFilter::from_input("All"), LocationFilter::Contains("All".to_owned()));
    assert_eq!(LocationFilter::from_input("").as_input(), "");
    assert_eq!(LocationFilter::default().as_input(), "all");
}

#[test]
fn empty_location_text_matches_everything() {
    let filter = LocationFilter::from_input("");
    assert!(filter.matches("Global"));
    assert!(filter.matches(""));
}

#[test]
fn solution_view_ids_and_labels() {
    let ids: Vec<_> = SolutionView::ALL.iter().map(|v| v.id()).collect();
    assert_eq!(ids, ["all", "trending", "approved", "recent"]);
    assert_eq!(SolutionView::All.label(), "All Solutions");
}

// =============================================================
// Problem query
// =============================================================

#[test]
fn default_problem_query_returns_everything_in_order() {
    let problems = fixtures::problems();
    let found = ProblemQuery::default().apply(&problems);
    assert_eq!(found, problems);
}

#[test]
fn problem_text_matches_title_case_insensitively() {
    let found = problem_query("CLIMATE", "all", "all").apply(&fixtures::problems());
    assert_eq!(ids(&found, |p| p.id), [1]);
}

#[test]
fn problem_text_matches_description() {
    let found = problem_query("high-speed internet", "all", "all").apply(&fixtures::problems());
    assert_eq!(ids(&found, |p| p.id), [2]);
}

#[test]
fn problem_text_with_no_hits_is_empty() {
    let found = problem_query("volcano", "all", "all").apply(&fixtures::problems());
    assert!(found.is_empty());
}

#[test]
fn problem_category_restricts_results() {
    let found = problem_query("", "social", "all").apply(&fixtures::problems());
    assert_eq!(ids(&found, |p| p.id), [2, 4]);
}

#[test]
fn problem_location_is_substring_match() {
    let found = problem_query("", "all", "areas").apply(&fixtures::problems());
    assert_eq!(ids(&found, |p| p.id), [2, 4]);
}

#[test]
fn problem_criteria_are_conjunctive() {
    let found = problem_query("food", "social", "urban").apply(&fixtures::problems());
    assert_eq!(ids(&found, |p| p.id), [4]);

    let none = problem_query("food", "technology", "all").apply(&fixtures::problems());
    assert!(none.is_empty());
}

#[test]
fn problem_filter_is_idempotent() {
    let query = problem_query("a", "social", "all");
    let once = query.apply(&fixtures::problems());
    let twice = query.apply(&once);
    assert_eq!(once, twice);
}

// =============================================================
// Solution query
// =============================================================

#[test]
fn default_solution_query_returns_everything() {
    let solutions = fixtures::solutions();
    assert_eq!(SolutionQuery::default().apply(&solutions), solutions);
}

#[test]
fn trending_view_needs_more_than_hundred_votes() {
    let query = SolutionQuery { view: SolutionView::Trending, ..SolutionQuery::default() };
    let found = query.apply(&fixtures::solutions());
    assert_eq!(ids(&found, |s| s.id), [1, 2]);
}

#[test]
fn approved_view_keeps_approved_status() {
    let query = SolutionQuery { view: SolutionView::Approved, ..SolutionQuery::default() };
    let found = query.apply(&fixtures::solutions());
    assert_eq!(ids(&found, |s| s.id), [1, 3, 6]);
}

#[test]
fn recent_view_is_strictly_after_cutoff() {
    let query = SolutionQuery { view: SolutionView::Recent, ..SolutionQuery::default() };
    let found = query.apply(&fixtures::solutions());
    // 2024-01-18 itself is excluded.
    assert_eq!(ids(&found, |s| s.id), [1, 2]);
}

#[test]
fn type_filter_restricts_origin() {
    let query = SolutionQuery { kind: TypeFilter::from_id("expert"), ..SolutionQuery::default() };
    let found = query.apply(&fixtures::solutions());
    assert_eq!(ids(&found, |s| s.id), [3, 6]);
}

#[test]
fn solution_text_matches_problem_title() {
    let query = SolutionQuery { text: "remote".to_owned(), ..SolutionQuery::default() };
    let found = query.apply(&fixtures::solutions());
    assert_eq!(ids(&found, |s| s.id), [5, 6]);
}

#[test]
fn solution_view_combines_with_type() {
    let query = SolutionQuery {
        text: String::new(),
        kind: TypeFilter::Only(SolutionType::AiGenerated),
        view: SolutionView::Approved,
    };
    let found = query.apply(&fixtures::solutions());
    assert_eq!(ids(&found, |s| s.id), [1]);
}

// =============================================================
// Member query
// =============================================================

#[test]
fn member_text_matches_name_or_email() {
    let members = fixtures::members();
    let by_name = MemberQuery { text: "maria".to_owned(), status: None }.apply(&members);
    assert_eq!(ids(&by_name, |m| m.id), [2]);

    let by_email = MemberQuery { text: "J.WILSON".to_owned(), status: None }.apply(&members);
    assert_eq!(ids(&by_email, |m| m.id), [3]);
}

#[test]
fn member_status_restricts_rows() {
    let query = MemberQuery { text: String::new(), status: Some(MemberStatus::Active) };
    let found = query.apply(&fixtures::members());
    assert_eq!(ids(&found, |m| m.id), [1, 2]);

    let suspended = MemberQuery { text: String::new(), status: Some(MemberStatus::Suspended) };
    assert!(suspended.apply(&fixtures::members()).is_empty());
}
