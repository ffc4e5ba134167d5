//! Static catalog content rendered by each page.
//!
//! All lists are rebuilt on every call; callers own the returned data and the
//! fixtures themselves are never mutated.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::model::{
    Achievement, ActivityItem, ActivityKind, AdminStats, Category, DashboardStats, HealthMetric, ImpactMetric, Member,
    MemberStatus, Problem, ProblemDetail, ProblemStatus, ProfileData, ProfileStats, ProposedSolution, ReviewItem,
    Solution, SolutionStatus, SolutionType, Urgency, Visibility,
};

fn s(text: &str) -> String {
    text.to_owned()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_owned()).collect()
}

// =============================================================================
// PROBLEMS
// =============================================================================

/// Problems listed on the explore page.
#[must_use]
pub fn problems() -> Vec<Problem> {
    vec![
        Problem {
            id: 1,
            title: s("Climate Change Impact on Coastal Cities"),
            description: s(
                "Rising sea levels are threatening major coastal cities worldwide, affecting millions of people and critical infrastructure.",
            ),
            category: Category::Environment,
            location: s("Global"),
            author: s("Dr. Sarah Chen"),
            date: s("2024-01-15"),
            status: ProblemStatus::UnderReview,
            views: 1247,
            likes: 89,
            comments: 23,
        },
        Problem {
            id: 2,
            title: s("Digital Divide in Rural Education"),
            description: s(
                "Students in rural areas lack access to high-speed internet and digital learning resources, creating educational inequality.",
            ),
            category: Category::Social,
            location: s("Rural Areas"),
            author: s("Maria Rodriguez"),
            date: s("2024-01-14"),
            status: ProblemStatus::SolutionGenerated,
            views: 892,
            likes: 67,
            comments: 15,
        },
        Problem {
            id: 3,
            title: s("AI Bias in Healthcare Algorithms"),
            description: s(
                "Machine learning models used in healthcare show systematic bias against certain demographic groups.",
            ),
            category: Category::Technology,
            location: s("United States"),
            author: s("Dr. James Wilson"),
            date: s("2024-01-13"),
            status: ProblemStatus::AwaitingValidation,
            views: 654,
            likes: 45,
            comments: 12,
        },
        Problem {
            id: 4,
            title: s("Urban Food Deserts"),
            description: s("Many urban neighborhoods lack access to fresh, affordable, and nutritious food options."),
            category: Category::Social,
            location: s("Urban Areas"),
            author: s("Lisa Thompson"),
            date: s("2024-01-12"),
            status: ProblemStatus::Completed,
            views: 1156,
            likes: 98,
            comments: 34,
        },
    ]
}

const COASTAL_BODY: &str = "Rising sea levels are threatening major coastal cities worldwide, affecting millions of people and critical infrastructure. This problem encompasses multiple interconnected challenges:

1. **Infrastructure Vulnerability**: Roads, buildings, and utilities in coastal areas are increasingly at risk of flooding and storm damage.

2. **Population Displacement**: Communities are being forced to relocate as their homes become uninhabitable due to regular flooding.

3. **Economic Impact**: Businesses and industries in coastal regions face significant losses due to climate-related disruptions.

4. **Environmental Degradation**: Coastal ecosystems are being destroyed, affecting biodiversity and natural flood protection.

The urgency of this problem cannot be overstated. According to recent studies, over 630 million people live in areas at risk of sea-level rise, and this number is expected to grow significantly in the coming decades.";

/// Details for one explore problem, or `None` for an unknown id.
#[must_use]
pub fn problem_detail(id: u32) -> Option<ProblemDetail> {
    let problem = problems().into_iter().find(|p| p.id == id)?;
    let detail = match id {
        1 => ProblemDetail {
            problem: Problem { status: ProblemStatus::SolutionGenerated, ..problem },
            author_role: s("Climate Scientist"),
            urgency: Urgency::Critical,
            tags: tags(&["climate-change", "coastal-cities", "sea-level-rise", "infrastructure"]),
            visibility: Visibility::Public,
            body: s(COASTAL_BODY),
        },
        2 => ProblemDetail {
            body: problem.description.clone(),
            problem,
            author_role: s("Education Researcher"),
            urgency: Urgency::High,
            tags: tags(&["education", "connectivity", "rural"]),
            visibility: Visibility::Public,
        },
        3 => ProblemDetail {
            body: problem.description.clone(),
            problem,
            author_role: s("Data Ethicist"),
            urgency: Urgency::High,
            tags: tags(&["ai", "healthcare", "bias"]),
            visibility: Visibility::Public,
        },
        _ => ProblemDetail {
            body: problem.description.clone(),
            problem,
            author_role: s("Community Organizer"),
            urgency: Urgency::Medium,
            tags: tags(&["food-security", "urban"]),
            visibility: Visibility::Public,
        },
    };
    Some(detail)
}

/// Solutions proposed for a problem on its details page.
#[must_use]
pub fn proposals_for(problem_id: u32) -> Vec<ProposedSolution> {
    if problem_id != 1 {
        return Vec::new();
    }
    vec![
        ProposedSolution {
            id: 1,
            title: s("Floating City Infrastructure"),
            description: s(
                "Develop modular floating platforms that can adapt to rising sea levels while maintaining urban functionality.",
            ),
            kind: SolutionType::AiGenerated,
            votes: 45,
            status: SolutionStatus::UnderReview,
            author: s("AI Assistant"),
            date: s("2024-01-16"),
        },
        ProposedSolution {
            id: 2,
            title: s("Smart Flood Barrier System"),
            description: s(
                "Implement AI-controlled flood barriers that can predict and respond to tidal changes and storm surges.",
            ),
            kind: SolutionType::Community,
            votes: 32,
            status: SolutionStatus::InDevelopment,
            author: s("Maria Rodriguez"),
            date: s("2024-01-17"),
        },
        ProposedSolution {
            id: 3,
            title: s("Coastal Ecosystem Restoration"),
            description: s(
                "Restore mangroves and coral reefs to provide natural flood protection while supporting biodiversity.",
            ),
            kind: SolutionType::Expert,
            votes: 28,
            status: SolutionStatus::Approved,
            author: s("Dr. James Wilson"),
            date: s("2024-01-18"),
        },
    ]
}

/// Sidebar of similar problems on the details page.
#[must_use]
pub fn related_problems() -> Vec<String> {
    tags(&["Urban Heat Island Effect", "Coastal Erosion Management", "Sustainable City Planning"])
}

// =============================================================================
// SOLUTIONS
// =============================================================================

/// Solutions listed on the solutions page.
#[must_use]
pub fn solutions() -> Vec<Solution> {
    vec![
        Solution {
            id: 1,
            title: s("Smart Urban Flood Management System"),
            description: s(
                "An AI-powered system that predicts and manages urban flooding using IoT sensors, weather data, and machine learning algorithms to optimize drainage and alert systems.",
            ),
            problem_title: s("Urban Flooding in Metropolitan Areas"),
            kind: SolutionType::AiGenerated,
            author: s("AI Assistant"),
            votes: 156,
            status: SolutionStatus::Approved,
            category: Category::Environment,
            date: s("2024-01-20"),
            implementation: s("In Progress"),
            rating: 4.8,
            tags: tags(&["AI", "IoT", "Urban Planning", "Flood Management"]),
        },
        Solution {
            id: 2,
            title: s("Community-Based Mental Health Network"),
            description: s(
                "A peer-to-peer support platform that connects individuals with trained community volunteers for mental health support and crisis intervention.",
            ),
            problem_title: s("Mental Health Crisis in Rural Communities"),
            kind: SolutionType::Community,
            author: s("Dr. Maria Santos"),
            votes: 134,
            status: SolutionStatus::UnderReview,
            category: Category::Healthcare,
            date: s("2024-01-19"),
            implementation: s("Planning"),
            rating: 4.6,
            tags: tags(&["Mental Health", "Community", "Peer Support", "Crisis Intervention"]),
        },
        Solution {
            id: 3,
            title: s("Blockchain-Based Supply Chain Transparency"),
            description: s(
                "A decentralized platform that tracks products from origin to consumer, ensuring ethical sourcing and reducing environmental impact.",
            ),
            problem_title: s("Supply Chain Transparency Issues"),
            kind: SolutionType::Expert,
            author: s("Prof. James Chen"),
            votes: 98,
            status: SolutionStatus::Approved,
            category: Category::Technology,
            date: s("2024-01-18"),
            implementation: s("Completed"),
            rating: 4.9,
            tags: tags(&["Blockchain", "Supply Chain", "Transparency", "Sustainability"]),
        },
        Solution {
            id: 4,
            title: s("Vertical Farming Education Initiative"),
            description: s(
                "Educational programs that teach urban communities how to implement vertical farming systems for local food production and sustainability.",
            ),
            problem_title: s("Food Security in Urban Areas"),
            kind: SolutionType::Community,
            author: s("Green City Collective"),
            votes: 87,
            status: SolutionStatus::InDevelopment,
            category: Category::Environment,
            date: s("2024-01-17"),
            implementation: s("Pilot Phase"),
            rating: 4.4,
            tags: tags(&["Vertical Farming", "Education", "Food Security", "Sustainability"]),
        },
        Solution {
            id: 5,
            title: s("AI-Powered Personalized Learning Platform"),
            description: s(
                "An adaptive learning system that personalizes education content based on individual learning styles, pace, and cultural background.",
            ),
            problem_title: s("Educational Inequality in Remote Areas"),
            kind: SolutionType::AiGenerated,
            author: s("AI Assistant"),
            votes: 76,
            status: SolutionStatus::AwaitingValidation,
            category: Category::Education,
            date: s("2024-01-16"),
            implementation: s("Development"),
            rating: 4.5,
            tags: tags(&["AI", "Personalized Learning", "Education", "Accessibility"]),
        },
        Solution {
            id: 6,
            title: s("Renewable Energy Microgrids for Rural Communities"),
            description: s(
                "Decentralized renewable energy systems that provide reliable power to remote communities while building local technical capacity.",
            ),
            problem_title: s("Energy Access in Remote Communities"),
            kind: SolutionType::Expert,
            author: s("Dr. Sarah Williams"),
            votes: 65,
            status: SolutionStatus::Approved,
            category: Category::Environment,
            date: s("2024-01-15"),
            implementation: s("Scaling"),
            rating: 4.7,
            tags: tags(&["Renewable Energy", "Microgrids", "Rural Development", "Sustainability"]),
        },
    ]
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[must_use]
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        my_problems: 12,
        my_solutions: 8,
        total_problems: 1247,
        active_solutions: 89,
        community_members: 15420,
        solved_problems: 342,
    }
}

#[must_use]
pub fn dashboard_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: 1,
            kind: ActivityKind::Problem,
            title: s("Climate Change in Urban Areas"),
            action: s("submitted"),
            status: s("Under Review"),
            when: s("2 hours ago"),
        },
        ActivityItem {
            id: 2,
            kind: ActivityKind::Solution,
            title: s("AI-Powered Waste Management"),
            action: s("proposed"),
            status: s("Approved"),
            when: s("1 day ago"),
        },
        ActivityItem {
            id: 3,
            kind: ActivityKind::Problem,
            title: s("Digital Divide in Rural Communities"),
            action: s("submitted"),
            status: s("Solution Generated"),
            when: s("3 days ago"),
        },
    ]
}

#[must_use]
pub fn dashboard_impact() -> Vec<ImpactMetric> {
    vec![
        ImpactMetric { label: s("Problems Solved"), value: s("8/10"), percent: 80 },
        ImpactMetric { label: s("Community Engagement"), value: s("6/10"), percent: 60 },
    ]
}

// =============================================================================
// PROFILE
// =============================================================================

#[must_use]
pub fn profile() -> ProfileData {
    ProfileData {
        name: s("Dr. Sarah Chen"),
        email: s("sarah.chen@example.com"),
        location: s("San Francisco, CA"),
        join_date: s("2023-06-15"),
        bio: s(
            "Climate scientist passionate about finding innovative solutions to environmental challenges. Experienced in AI applications for climate modeling and urban planning.",
        ),
        role: s("Climate Scientist"),
        organization: s("Stanford University"),
        website: s("https://sarahchen.research.stanford.edu"),
    }
}

#[must_use]
pub fn profile_stats() -> ProfileStats {
    ProfileStats {
        problems_submitted: 12,
        solutions_proposed: 8,
        votes_received: 234,
        collaborations: 15,
        impact_score: 87,
        reputation: 4.8,
    }
}

#[must_use]
pub fn profile_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: 1,
            kind: ActivityKind::Problem,
            title: s("Climate Change Impact on Coastal Cities"),
            action: s("submitted"),
            status: s("Under Review"),
            when: s("2024-01-20"),
        },
        ActivityItem {
            id: 2,
            kind: ActivityKind::Solution,
            title: s("AI-Powered Flood Prediction System"),
            action: s("proposed"),
            status: s("Approved"),
            when: s("2024-01-18"),
        },
        ActivityItem {
            id: 3,
            kind: ActivityKind::Collaboration,
            title: s("Urban Heat Island Mitigation"),
            action: s("joined"),
            status: s("Active"),
            when: s("2024-01-15"),
        },
    ]
}

#[must_use]
pub fn profile_impact() -> Vec<ImpactMetric> {
    vec![
        ImpactMetric { label: s("Problems Solved"), value: s("9/12"), percent: 75 },
        ImpactMetric { label: s("Community Engagement"), value: s("87%"), percent: 87 },
        ImpactMetric { label: s("Solution Success Rate"), value: s("92%"), percent: 92 },
    ]
}

#[must_use]
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement { id: 1, title: s("Problem Solver"), description: s("Submitted 10+ problems"), earned: true },
        Achievement { id: 2, title: s("Community Leader"), description: s("Helped 50+ people"), earned: true },
        Achievement {
            id: 3,
            title: s("Global Impact"),
            description: s("Solutions implemented worldwide"),
            earned: true,
        },
        Achievement { id: 4, title: s("Expert Contributor"), description: s("Highly rated solutions"), earned: false },
    ]
}

/// Checkbox labels in the profile settings tab.
#[must_use]
pub fn notification_preferences() -> Vec<String> {
    tags(&[
        "Email notifications for new solutions",
        "Weekly activity digest",
        "Community updates and announcements",
        "Solution implementation updates",
    ])
}

// =============================================================================
// ADMIN
// =============================================================================

#[must_use]
pub fn admin_stats() -> AdminStats {
    AdminStats {
        total_users: 15420,
        active_users: 8934,
        total_problems: 1247,
        pending_review: 89,
        total_solutions: 892,
        approved_solutions: 634,
        avg_response_time: s("2.3 hours"),
        satisfaction_rate: s("94%"),
    }
}

#[must_use]
pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: 1,
            name: s("Dr. Sarah Chen"),
            email: s("sarah.chen@example.com"),
            role: s("Expert"),
            join_date: s("2024-01-20"),
            status: MemberStatus::Active,
            problems: 12,
            solutions: 8,
        },
        Member {
            id: 2,
            name: s("Maria Rodriguez"),
            email: s("maria.r@example.com"),
            role: s("Community"),
            join_date: s("2024-01-19"),
            status: MemberStatus::Active,
            problems: 5,
            solutions: 15,
        },
        Member {
            id: 3,
            name: s("James Wilson"),
            email: s("j.wilson@example.com"),
            role: s("Expert"),
            join_date: s("2024-01-18"),
            status: MemberStatus::Pending,
            problems: 3,
            solutions: 2,
        },
    ]
}

#[must_use]
pub fn review_queue() -> Vec<ReviewItem> {
    vec![
        ReviewItem {
            id: 1,
            title: s("Climate Change Impact on Coastal Cities"),
            author: s("Dr. Sarah Chen"),
            category: Category::Environment,
            submitted: s("2024-01-20"),
            status: s("Under Review"),
            priority: s("High"),
        },
        ReviewItem {
            id: 2,
            title: s("Digital Divide in Rural Education"),
            author: s("Maria Rodriguez"),
            category: Category::Education,
            submitted: s("2024-01-19"),
            status: s("Pending Approval"),
            priority: s("Medium"),
        },
        ReviewItem {
            id: 3,
            title: s("AI Bias in Healthcare Algorithms"),
            author: s("Dr. James Wilson"),
            category: Category::Technology,
            submitted: s("2024-01-18"),
            status: s("Needs Revision"),
            priority: s("High"),
        },
    ]
}

#[must_use]
pub fn system_health(stats: &AdminStats) -> Vec<HealthMetric> {
    vec![
        HealthMetric { metric: s("Server Uptime"), value: s("99.9%"), healthy: true },
        HealthMetric { metric: s("Response Time"), value: stats.avg_response_time.clone(), healthy: true },
        HealthMetric { metric: s("User Satisfaction"), value: stats.satisfaction_rate.clone(), healthy: true },
        HealthMetric { metric: s("Error Rate"), value: s("0.1%"), healthy: true },
    ]
}
