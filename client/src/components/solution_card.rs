//! Solutions-page card for one solution.

use catalog::PendingFeature;
use catalog::display::{format_date, solution_status_class, solution_type_class};
use catalog::model::Solution;
use leptos::prelude::*;

use crate::state::toasts::ToastState;
use crate::util::notify;

/// Tags shown before the "+N more" chip.
const VISIBLE_TAGS: usize = 3;

#[component]
pub fn SolutionCard(solution: Solution) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let pending_stop = move |feature: PendingFeature| {
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            notify::pending(toasts, feature);
        }
    };

    let hidden_tags = solution.tags.len().saturating_sub(VISIBLE_TAGS);
    let tags = solution
        .tags
        .into_iter()
        .take(VISIBLE_TAGS)
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect_view();

    view! {
        <article
            class="solution-card glass card-hover"
            on:click=move |_| notify::pending(toasts, PendingFeature::SolutionDetails)
        >
            <div class="solution-card__meta">
                <span class=format!("status-badge {}", solution_status_class(solution.status))>
                    {solution.status.label()}
                </span>
                <span class=format!("solution-card__type {}", solution_type_class(solution.kind))>
                    {solution.kind.label()}
                </span>
                <span class="solution-card__rating">"★ " {solution.rating}</span>
            </div>
            <h3 class="solution-card__title">{solution.title}</h3>
            <p class="solution-card__problem">"Solving: " {solution.problem_title}</p>
            <p class="solution-card__description">{solution.description}</p>
            <div class="solution-card__tags">
                {tags}
                {(hidden_tags > 0).then(|| view! { <span class="tag tag--more">{format!("+{hidden_tags} more")}</span> })}
            </div>
            <div class="solution-card__origin">
                <span>"by " {solution.author}</span>
                <span>{format_date(&solution.date)}</span>
                <span class="solution-card__stage">{solution.implementation}</span>
            </div>
            <div class="solution-card__footer">
                <button class="solution-card__vote" on:click=pending_stop(PendingFeature::Vote) title="Vote">
                    "✔ " {solution.votes}
                </button>
                <span class="solution-card__implementing">"👥 12 implementing"</span>
                <div class="solution-card__actions">
                    <button class="btn btn--secondary" on:click=pending_stop(PendingFeature::ImplementSolution)>
                        "Implement"
                    </button>
                    <button class="btn btn--primary">"View Details"</button>
                </div>
            </div>
        </article>
    }
}
