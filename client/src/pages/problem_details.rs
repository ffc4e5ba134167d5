//! Problem details route (`/problem/:id`).
//!
//! The id segment selects a fixture record; an unparseable or unknown id
//! renders a not-found panel instead of falling back to the first problem.

#[cfg(test)]
#[path = "problem_details_test.rs"]
mod problem_details_test;

use catalog::display::{format_date, problem_status_class, solution_status_class, solution_type_class, urgency_class};
use catalog::model::{ProblemDetail, ProposedSolution, Urgency};
use catalog::{PendingFeature, fixtures};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::state::toasts::ToastState;
use crate::util::markdown::render_markdown_html;
use crate::util::notify;

const META_DESCRIPTION_CHARS: usize = 160;

/// People-helping counter shown in the stats panel.
const PEOPLE_HELPING: u32 = 12;

fn priority_label(urgency: Urgency) -> String {
    let id = urgency.id();
    let mut chars = id.chars();
    let capitalised: String = chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default();
    format!("{capitalised} Priority")
}

fn meta_description(text: &str) -> String {
    let head: String = text.chars().take(META_DESCRIPTION_CHARS).collect();
    format!("{head}...")
}

#[component]
pub fn ProblemDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let detail = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<u32>().ok())
            .and_then(fixtures::problem_detail)
    });

    move || match detail.get() {
        Some(detail) => view! { <ProblemDetailsView detail/> }.into_any(),
        None => view! {
            <Title text="Problem Not Found - ProbY Platform"/>
            <div class="page">
                <div class="glass panel not-found">
                    <h1>"Problem not found"</h1>
                    <p>"This problem doesn't exist or has been removed."</p>
                    <a href="/explore" class="btn btn--secondary">"← Back to Explore"</a>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProblemDetailsView(detail: ProblemDetail) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let liked = RwSignal::new(false);
    let show_solutions = RwSignal::new(true);

    let proposals = fixtures::proposals_for(detail.problem.id);
    let proposal_count = proposals.len();
    let ProblemDetail { problem, author_role, urgency, tags, body, .. } = detail;
    let base_likes = problem.likes;

    let on_like = move |_| {
        let now_liked = !liked.get_untracked();
        liked.set(now_liked);
        notify::pending(toasts, PendingFeature::Like { liked: now_liked });
    };

    let tag_chips = tags.into_iter().map(|tag| view! { <span class="tag-chip">"#" {tag}</span> }).collect_view();

    let related = fixtures::related_problems()
        .into_iter()
        .map(|title| {
            view! {
                <div class="related-row">
                    <h4>{title}</h4>
                    <p>"Similar environmental challenge"</p>
                </div>
            }
        })
        .collect_view();

    let title = format!("{} - ProbY Platform", problem.title);
    let description = meta_description(&problem.description);

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <div class="page details-page">
            <a href="/explore" class="btn btn--ghost details-page__back">"← Back to Explore"</a>

            <div class="details-layout">
                <div class="details-layout__main">
                    <section class="glass panel">
                        <div class="details-header__badges">
                            <span class=format!("status-badge {}", problem_status_class(problem.status))>
                                {problem.status.label()}
                            </span>
                            <span class=format!("details-header__urgency {}", urgency_class(urgency))>
                                {priority_label(urgency)}
                            </span>
                        </div>
                        <h1 class="details-header__title">{problem.title.clone()}</h1>
                        <div class="details-header__meta">
                            <span>"👤 " {problem.author.clone()} " • " {author_role}</span>
                            <span>"📅 " {format_date(&problem.date)}</span>
                            <span>"📍 " {problem.location.clone()}</span>
                        </div>

                        <div class="markdown-body" inner_html=render_markdown_html(&body)></div>

                        <div class="tag-list">{tag_chips}</div>

                        <div class="details-engagement">
                            <div class="details-engagement__counts">
                                <span title="Views">"👁 " {problem.views}</span>
                                <button
                                    class="details-engagement__like"
                                    class:details-engagement__like--active=move || liked.get()
                                    on:click=on_like
                                >
                                    {move || if liked.get() { "♥ " } else { "♡ " }}
                                    {move || base_likes + u32::from(liked.get())}
                                </button>
                                <span title="Comments">"💬 " {problem.comments}</span>
                            </div>
                            <div class="details-engagement__actions">
                                <button
                                    class="btn btn--ghost"
                                    title="Share"
                                    on:click=move |_| notify::pending(toasts, PendingFeature::Share)
                                >
                                    "🔗"
                                </button>
                                <button
                                    class="btn btn--ghost"
                                    title="Report"
                                    on:click=move |_| notify::pending(toasts, PendingFeature::Report)
                                >
                                    "🚩"
                                </button>
                            </div>
                        </div>
                    </section>

                    <section class="glass panel">
                        <div class="section-head">
                            <h2>"💡 Proposed Solutions (" {proposal_count} ")"</h2>
                            <button class="btn btn--primary" on:click=move |_| show_solutions.update(|s| *s = !*s)>
                                {move || if show_solutions.get() { "Hide Solutions" } else { "Show Solutions" }}
                            </button>
                        </div>
                        <Show when=move || show_solutions.get()>
                            <div class="proposal-list">
                                {proposals
                                    .iter()
                                    .cloned()
                                    .map(|proposal| view! { <ProposalRow proposal/> })
                                    .collect_view()}
                            </div>
                        </Show>
                    </section>
                </div>

                <aside class="details-layout__side">
                    <section class="glass panel">
                        <h3>"Take Action"</h3>
                        <div class="action-stack">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| notify::pending(toasts, PendingFeature::WantToHelp)
                            >
                                "👥 I Want to Help"
                            </button>
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| notify::pending(toasts, PendingFeature::ProposeSolution)
                            >
                                "💡 Propose Solution"
                            </button>
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| notify::pending(toasts, PendingFeature::ReportDuplicate)
                            >
                                "⚠ Report Duplicate"
                            </button>
                        </div>
                    </section>

                    <section class="glass panel">
                        <h3>"Problem Statistics"</h3>
                        <dl class="stat-list">
                            <div><dt>"Total Views"</dt><dd>{problem.views}</dd></div>
                            <div><dt>"Community Likes"</dt><dd>{problem.likes}</dd></div>
                            <div><dt>"Solutions Proposed"</dt><dd>{proposal_count}</dd></div>
                            <div><dt>"People Helping"</dt><dd>{PEOPLE_HELPING}</dd></div>
                        </dl>
                    </section>

                    <section class="glass panel">
                        <h3>"Related Problems"</h3>
                        {related}
                    </section>
                </aside>
            </div>
        </div>
    }
}

#[component]
fn ProposalRow(proposal: ProposedSolution) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="proposal-row">
            <div class="proposal-row__body">
                <div class="proposal-row__head">
                    <h3>{proposal.title}</h3>
                    <span class=format!("status-badge {}", solution_status_class(proposal.status))>
                        {proposal.status.label()}
                    </span>
                </div>
                <p>{proposal.description}</p>
                <div class="proposal-row__meta">
                    <span>"👤 " {proposal.author}</span>
                    <span>"🕒 " {format_date(&proposal.date)}</span>
                    <span class=format!("type-chip {}", solution_type_class(proposal.kind))>
                        {proposal.kind.label()}
                    </span>
                </div>
            </div>
            <div class="proposal-row__actions">
                <button class="proposal-row__vote" on:click=move |_| notify::pending(toasts, PendingFeature::Vote)>
                    "✔ " {proposal.votes}
                </button>
                <button
                    class="btn btn--ghost"
                    on:click=move |_| notify::pending(toasts, PendingFeature::SolutionDetails)
                >
                    "View Details"
                </button>
            </div>
        </div>
    }
}
