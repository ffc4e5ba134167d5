//! Explore-page card for one problem.
//!
//! DESIGN
//! ======
//! The whole card opens the details route. Like and comment buttons stop
//! propagation so they only raise their placeholder notices.

use catalog::PendingFeature;
use catalog::display::{format_date, problem_status_class};
use catalog::model::Problem;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::toasts::ToastState;
use crate::util::notify;

#[component]
pub fn ProblemCard(problem: Problem) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let href = format!("/problem/{}", problem.id);

    let on_open = move |_| navigate(&href, NavigateOptions::default());
    let on_like = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        notify::pending(toasts, PendingFeature::Like { liked: true });
    };
    let on_comment = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        notify::pending(toasts, PendingFeature::Comments);
    };

    view! {
        <article class="problem-card glass card-hover" on:click=on_open>
            <div class="problem-card__meta">
                <span class=format!("status-badge {}", problem_status_class(problem.status))>
                    {problem.status.label()}
                </span>
                <span class="problem-card__date">"📅 " {format_date(&problem.date)}</span>
            </div>
            <h3 class="problem-card__title">{problem.title}</h3>
            <p class="problem-card__description">{problem.description}</p>
            <div class="problem-card__origin">
                <span>"📍 " {problem.location}</span>
                <span>"by " {problem.author}</span>
            </div>
            <div class="problem-card__footer">
                <div class="problem-card__engagement">
                    <span title="Views">"👁 " {problem.views}</span>
                    <button class="problem-card__like" on:click=on_like title="Like">
                        "♥ " {problem.likes}
                    </button>
                    <button class="problem-card__comment" on:click=on_comment title="Comments">
                        "💬 " {problem.comments}
                    </button>
                </div>
                <button class="btn btn--secondary">"View Details"</button>
            </div>
        </article>
    }
}
