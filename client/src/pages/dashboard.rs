//! Dashboard landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static overview of the signed-in member's counters, recent activity, and
//! impact. Every figure comes from `catalog::fixtures`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use catalog::display::group_thousands;
use catalog::fixtures;
use catalog::model::ActivityKind;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::impact_bars::ImpactBars;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;

fn activity_icon(kind: ActivityKind, status: &str) -> (&'static str, &'static str) {
    match (kind, status) {
        (_, "Approved") => ("✅", "text-green-400"),
        (_, "Solution Generated") => ("💡", "text-blue-400"),
        (ActivityKind::Collaboration, _) => ("🤝", "text-purple-400"),
        _ => ("⚠", "text-yellow-400"),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stats = fixtures::dashboard_stats();

    let activity = fixtures::dashboard_activity()
        .into_iter()
        .map(|item| {
            let (icon, color) = activity_icon(item.kind, &item.status);
            view! {
                <div class="activity-row">
                    <span class=format!("activity-row__icon {color}") aria-hidden="true">{icon}</span>
                    <div class="activity-row__body">
                        <h3>{item.title}</h3>
                        <p>{item.status}</p>
                    </div>
                    <span class="activity-row__when">"🕒 " {item.when}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Dashboard - ProbY Platform"/>
        <div class="page dashboard-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="gradient-text">{move || auth.get().greeting()}</h1>
                    <p class="page__lede">"Ready to make a difference today?"</p>
                </div>
                <a href="/submit" class="btn btn--primary">"➕ Submit New Problem"</a>
            </header>

            <div class="stat-grid">
                <StatCard
                    title="My Problems"
                    value=stats.my_problems.to_string()
                    icon="⚠"
                    accent="orange"
                    change="+2 this week"
                />
                <StatCard
                    title="My Solutions"
                    value=stats.my_solutions.to_string()
                    icon="💡"
                    accent="blue"
                    change="+1 this week"
                />
                <StatCard
                    title="Global Problems"
                    value=stats.total_problems.to_string()
                    icon="🌍"
                    accent="green"
                    change="+47 today"
                />
                <StatCard
                    title="Community Members"
                    value=group_thousands(stats.community_members)
                    icon="👥"
                    accent="purple"
                    change="+156 this week"
                />
            </div>

            <div class="dashboard-page__grid">
                <section class="glass panel dashboard-page__activity">
                    <div class="panel__header">
                        <h2>"Recent Activity"</h2>
                        <a href="/explore" class="link">"View All"</a>
                    </div>
                    <div class="activity-list">{activity}</div>
                </section>

                <section class="glass panel">
                    <h2>"Quick Actions"</h2>
                    <div class="quick-actions">
                        <a href="/submit" class="btn btn--primary btn--block">"➕ Submit Problem"</a>
                        <a href="/explore" class="btn btn--secondary btn--block">"🌍 Explore Problems"</a>
                        <a href="/solutions" class="btn btn--secondary btn--block">"💡 View Solutions"</a>
                    </div>
                    <div class="impact-box">
                        <h3>"Your Impact"</h3>
                        <ImpactBars metrics=fixtures::dashboard_impact()/>
                    </div>
                </section>
            </div>
        </div>
    }
}
