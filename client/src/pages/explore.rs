//! Explore route: searchable, filterable problem catalog.
//!
//! DESIGN
//! ======
//! Criteria live in page-scoped signals and are discarded on navigation. The
//! visible list is a memo over `ProblemQuery::apply`, so it recomputes only
//! when a criterion changes.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use catalog::display::results_label;
use catalog::model::Category;
use catalog::{CategoryFilter, LocationFilter, PendingFeature, ProblemQuery, fixtures};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::problem_card::ProblemCard;
use crate::state::toasts::ToastState;
use crate::util::notify;

/// Category choices offered on this page, in display order.
const CATEGORY_CHOICES: [(CategoryFilter, &str); 4] = [
    (CategoryFilter::All, "🌐"),
    (CategoryFilter::Only(Category::Environment), "🍃"),
    (CategoryFilter::Only(Category::Social), "👥"),
    (CategoryFilter::Only(Category::Technology), "⚡"),
];

fn choice_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All Categories",
        CategoryFilter::Only(category) => category.label(),
    }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let text = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);
    let location = RwSignal::new(LocationFilter::Any);

    let problems = StoredValue::new(fixtures::problems());
    let filtered = Memo::new(move |_| {
        let query = ProblemQuery { text: text.get(), category: category.get(), location: location.get() };
        problems.with_value(|list| query.apply(list))
    });

    view! {
        <Title text="Explore Problems - ProbY Platform"/>
        <div class="page explore-page">
            <header class="page__header page__header--center">
                <h1 class="gradient-text">"Explore Global Problems"</h1>
                <p class="page__lede">
                    "Discover challenges from around the world and contribute your expertise to create meaningful solutions."
                </p>
            </header>

            <div class="glass panel filter-bar">
                <input
                    class="input-field filter-bar__search"
                    type="text"
                    placeholder="Search problems..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <select
                    class="input-field filter-bar__select"
                    prop:value=move || category.get().id()
                    on:change=move |ev| category.set(CategoryFilter::from_id(&event_target_value(&ev)))
                >
                    {CATEGORY_CHOICES
                        .into_iter()
                        .map(|(choice, _)| view! { <option value=choice.id()>{choice_label(choice)}</option> })
                        .collect_view()}
                </select>
                <input
                    class="input-field filter-bar__select"
                    type="text"
                    placeholder="Filter by location..."
                    prop:value=move || location.get().as_input().to_owned()
                    on:input=move |ev| location.set(LocationFilter::from_input(&event_target_value(&ev)))
                />
            </div>

            <div class="pill-row">
                {CATEGORY_CHOICES
                    .into_iter()
                    .map(|(choice, icon)| {
                        view! {
                            <button
                                class="pill"
                                class:pill--active=move || category.get() == choice
                                on:click=move |_| category.set(choice)
                            >
                                <span aria-hidden="true">{icon}</span>
                                <span>{choice_label(choice)}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="results-label">{move || results_label(filtered.get().len(), "problem")}</p>

            <div class="card-grid">
                <For each=move || filtered.get() key=|problem| problem.id let:problem>
                    <ProblemCard problem/>
                </For>
            </div>

            <Show when=move || !filtered.get().is_empty()>
                <div class="load-more">
                    <button class="btn btn--secondary" on:click=move |_| notify::pending(toasts, PendingFeature::LoadMore)>
                        "Load More Problems"
                    </button>
                </div>
            </Show>
        </div>
    }
}
