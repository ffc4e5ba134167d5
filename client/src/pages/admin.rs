//! Admin route: platform counters and moderation tabs.
//!
//! DESIGN
//! ======
//! Users-tab criteria are held at page scope so switching tabs keeps the
//! search. Every moderation action is a placeholder notice.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use catalog::display::{format_date, group_thousands, member_status_class, priority_class};
use catalog::model::{AdminStats, Member, MemberStatus, ReviewItem};
use catalog::{MemberQuery, PendingFeature, fixtures};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::stat_card::StatCard;
use crate::state::toasts::ToastState;
use crate::state::ui::AdminTab;
use crate::util::notify;

const ALL_STATUSES: &str = "all";

fn status_filter_id(status: Option<MemberStatus>) -> &'static str {
    status.map_or(ALL_STATUSES, MemberStatus::id)
}

fn review_status_chip(status: &str) -> &'static str {
    match status {
        "Under Review" => "chip--blue",
        "Pending Approval" => "chip--yellow",
        _ => "chip--orange",
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let stats = fixtures::admin_stats();

    let tab = RwSignal::new(AdminTab::Overview);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<MemberStatus>);

    let health_stats = StoredValue::new(stats.clone());

    view! {
        <Title text="Admin Panel - ProbY Platform"/>
        <Meta
            name="description"
            content="Administrative dashboard for managing users, problems, solutions, and platform settings on ProbY."
        />
        <div class="page admin-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="gradient-text">"Admin Dashboard"</h1>
                    <p class="page__lede">"Manage platform operations and monitor community activity"</p>
                </div>
                <div class="page__header-actions">
                    <button class="btn btn--secondary" on:click=move |_| notify::pending(toasts, PendingFeature::ExportData)>
                        "⬇ Export Data"
                    </button>
                    <button class="btn btn--primary">"🛡 Security Center"</button>
                </div>
            </header>

            <AdminStatCards stats/>

            <div class="tab-bar glass">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="glass panel">
                {move || match tab.get() {
                    AdminTab::Overview => view! { <OverviewTab stats=health_stats.get_value()/> }.into_any(),
                    AdminTab::Users => view! { <UsersTab search status/> }.into_any(),
                    AdminTab::Problems => view! { <ProblemsTab/> }.into_any(),
                    AdminTab::Solutions => view! {
                        <Placeholder
                            heading="Solution Management"
                            icon="✔"
                            line="Solution management interface"
                            detail="Review, approve, and track solution implementations"
                        />
                    }
                    .into_any(),
                    AdminTab::Settings => view! {
                        <Placeholder
                            heading="Platform Settings"
                            icon="⚙"
                            line="Platform configuration settings"
                            detail="Manage system preferences, integrations, and policies"
                        />
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn AdminStatCards(stats: AdminStats) -> impl IntoView {
    view! {
        <div class="stat-grid">
            <StatCard
                title="Total Users"
                value=group_thousands(stats.total_users)
                icon="👥"
                accent="blue"
                change="+12%"
            />
            <StatCard
                title="Active Users"
                value=group_thousands(stats.active_users)
                icon="📈"
                accent="green"
                change="+8%"
            />
            <StatCard
                title="Total Problems"
                value=group_thousands(stats.total_problems)
                icon="⚠"
                accent="red"
                change="+15%"
            />
            <StatCard
                title="Pending Review"
                value=stats.pending_review.to_string()
                icon="🕒"
                accent="orange"
                change="-5%"
            />
        </div>
    }
}

#[component]
fn OverviewTab(stats: AdminStats) -> impl IntoView {
    let health = fixtures::system_health(&stats)
        .into_iter()
        .map(|metric| {
            view! {
                <div class="health-row">
                    <span class="health-row__metric">{metric.metric}</span>
                    <span class="health-row__value">{metric.value}</span>
                    <span class="health-dot" class:health-dot--bad=!metric.healthy></span>
                </div>
            }
        })
        .collect_view();

    view! {
        <h2>"Platform Overview"</h2>
        <div class="two-column">
            <div>
                <h3>"Activity Trends"</h3>
                <div class="chart-placeholder">
                    <span aria-hidden="true">"📊"</span>
                    <p>"Interactive charts would be displayed here"</p>
                </div>
            </div>
            <div>
                <h3>"System Health"</h3>
                {health}
            </div>
        </div>
    }
}

#[component]
fn UsersTab(search: RwSignal<String>, status: RwSignal<Option<MemberStatus>>) -> impl IntoView {
    let members = StoredValue::new(fixtures::members());
    let visible = Memo::new(move |_| {
        let query = MemberQuery { text: search.get(), status: status.get() };
        members.with_value(|list| query.apply(list))
    });

    view! {
        <div class="section-head">
            <h2>"User Management"</h2>
            <div class="filter-bar filter-bar--compact">
                <input
                    class="input-field"
                    type="text"
                    placeholder="Search users..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="input-field"
                    prop:value=move || status_filter_id(status.get())
                    on:change=move |ev| status.set(MemberStatus::from_id(&event_target_value(&ev)))
                >
                    <option value=ALL_STATUSES>"All Users"</option>
                    {MemberStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.id()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>

        <table class="data-table">
            <thead>
                <tr>
                    <th>"User"</th>
                    <th>"Role"</th>
                    <th>"Join Date"</th>
                    <th>"Status"</th>
                    <th>"Activity"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For each=move || visible.get() key=|member| member.id let:member>
                    <MemberRow member/>
                </For>
            </tbody>
        </table>
        <Show when=move || visible.with(Vec::is_empty)>
            <p class="empty-state">"No users match these filters."</p>
        </Show>
    }
}

#[component]
fn MemberRow(member: Member) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let action = move |name: &'static str| move |_: leptos::ev::MouseEvent| notify::pending(toasts, PendingFeature::UserAction(name));

    view! {
        <tr>
            <td>
                <div class="data-table__primary">{member.name}</div>
                <div class="data-table__secondary">{member.email}</div>
            </td>
            <td><span class="chip chip--purple">{member.role}</span></td>
            <td>{format_date(&member.join_date)}</td>
            <td>
                <span class=member_status_class(member.status)>{member.status.label()}</span>
            </td>
            <td>{member.problems} "P / " {member.solutions} "S"</td>
            <td class="data-table__actions">
                <button class="btn btn--ghost" title="View" on:click=action("View")>"👁"</button>
                <button class="btn btn--ghost" title="Edit" on:click=action("Edit")>"✎"</button>
                <button class="btn btn--ghost" title="Suspend" on:click=action("Suspend")>"🗑"</button>
            </td>
        </tr>
    }
}

#[component]
fn ProblemsTab() -> impl IntoView {
    view! {
        <div class="section-head">
            <h2>"Problem Management"</h2>
            <div class="page__header-actions">
                <button class="btn btn--secondary">"Filter"</button>
                <button class="btn btn--secondary">"Bulk Actions"</button>
            </div>
        </div>
        {fixtures::review_queue().into_iter().map(|item| view! { <ReviewRow item/> }).collect_view()}
    }
}

#[component]
fn ReviewRow(item: ReviewItem) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let action = move |name: &'static str| move |_: leptos::ev::MouseEvent| notify::pending(toasts, PendingFeature::ProblemAction(name));

    view! {
        <div class="review-row">
            <div class="review-row__body">
                <div class="review-row__head">
                    <h3>{item.title}</h3>
                    <span class=format!("review-row__priority {}", priority_class(&item.priority))>
                        {item.priority.clone()} " Priority"
                    </span>
                </div>
                <div class="review-row__meta">
                    <span>"by " {item.author}</span>
                    <span>{item.category.label()}</span>
                    <span>{format_date(&item.submitted)}</span>
                </div>
                <span class=format!("chip {}", review_status_chip(&item.status))>{item.status.clone()}</span>
            </div>
            <div class="review-row__actions">
                <button class="btn btn--success" on:click=action("Approve")>"Approve"</button>
                <button class="btn btn--danger" on:click=action("Reject")>"Reject"</button>
                <button class="btn btn--ghost" title="View" on:click=action("View")>"👁"</button>
            </div>
        </div>
    }
}

#[component]
fn Placeholder(heading: &'static str, icon: &'static str, line: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <h2>{heading}</h2>
        <div class="chart-placeholder">
            <span aria-hidden="true">{icon}</span>
            <p>{line}</p>
            <p class="field__hint">{detail}</p>
        </div>
    }
}
