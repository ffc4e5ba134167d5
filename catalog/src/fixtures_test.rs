use super::*;

#[test]
fn problem_ids_are_unique() {
    let mut ids: Vec<_> = problems().iter().map(|p| p.id).collect();
    ids.dedup();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[test]
fn solution_ids_are_unique_and_ordered_by_votes() {
    let solutions = solutions();
    let ids: Vec<_> = solutions.iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    assert!(solutions.windows(2).all(|w| w[0].votes >= w[1].votes));
}

#[test]
fn problem_detail_known_and_unknown_ids() {
    let detail = problem_detail(1).expect("detail for problem 1");
    assert_eq!(detail.problem.title, "Climate Change Impact on Coastal Cities");
    assert_eq!(detail.urgency, Urgency::Critical);
    assert_eq!(detail.problem.status, ProblemStatus::SolutionGenerated);
    assert!(detail.body.contains("**Infrastructure Vulnerability**"));

    assert!(problem_detail(4).is_some());
    assert!(problem_detail(99).is_none());
}

#[test]
fn proposals_exist_only_for_coastal_problem() {
    let titles: Vec<_> = proposals_for(1).into_iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        ["Floating City Infrastructure", "Smart Flood Barrier System", "Coastal Ecosystem Restoration"]
    );
    assert!(proposals_for(2).is_empty());
}

#[test]
fn system_health_reuses_admin_counters() {
    let stats = admin_stats();
    let health = system_health(&stats);
    assert_eq!(health.len(), 4);
    assert_eq!(health[1].value, "2.3 hours");
    assert_eq!(health[2].value, "94%");
}

#[test]
fn only_expert_contributor_is_unearned() {
    let unearned: Vec<_> = achievements().into_iter().filter(|a| !a.earned).map(|a| a.title).collect();
    assert_eq!(unearned, ["Expert Contributor"]);
}
