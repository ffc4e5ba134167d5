//! Solutions route: searchable solution hub with type and view filters.

use catalog::display::results_label;
use catalog::model::SolutionType;
use catalog::{PendingFeature, SolutionQuery, SolutionView, TypeFilter, fixtures};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::solution_card::SolutionCard;
use crate::state::toasts::ToastState;
use crate::util::notify;

fn view_icon(view: SolutionView) -> &'static str {
    match view {
        SolutionView::All => "💡",
        SolutionView::Trending => "📈",
        SolutionView::Approved => "✅",
        SolutionView::Recent => "🕒",
    }
}

#[component]
pub fn SolutionsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let text = RwSignal::new(String::new());
    let kind = RwSignal::new(TypeFilter::All);
    let view_filter = RwSignal::new(SolutionView::All);

    let solutions = StoredValue::new(fixtures::solutions());
    let filtered = Memo::new(move |_| {
        let query = SolutionQuery { text: text.get(), kind: kind.get(), view: view_filter.get() };
        solutions.with_value(|list| query.apply(list))
    });

    let type_options = std::iter::once(TypeFilter::All)
        .chain(SolutionType::ALL.into_iter().map(TypeFilter::Only))
        .map(|choice| {
            let label = match choice {
                TypeFilter::All => "All Types",
                TypeFilter::Only(t) => t.label(),
            };
            view! { <option value=choice.id()>{label}</option> }
        })
        .collect_view();

    view! {
        <Title text="Solutions - ProbY Platform"/>
        <div class="page solutions-page">
            <header class="page__header page__header--center">
                <h1 class="gradient-text">"Solution Hub"</h1>
                <p class="page__lede">
                    "Discover innovative solutions to global challenges, powered by AI, community wisdom, and expert knowledge."
                </p>
            </header>

            <div class="glass panel filter-bar">
                <input
                    class="input-field filter-bar__search"
                    type="text"
                    placeholder="Search solutions..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <select
                    class="input-field filter-bar__select"
                    prop:value=move || kind.get().id()
                    on:change=move |ev| kind.set(TypeFilter::from_id(&event_target_value(&ev)))
                >
                    {type_options}
                </select>
            </div>

            <div class="pill-row">
                {SolutionView::ALL
                    .into_iter()
                    .map(|choice| {
                        view! {
                            <button
                                class="pill"
                                class:pill--active=move || view_filter.get() == choice
                                on:click=move |_| view_filter.set(choice)
                            >
                                <span aria-hidden="true">{view_icon(choice)}</span>
                                <span>{choice.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="results-label">{move || results_label(filtered.get().len(), "solution")}</p>

            <div class="card-grid">
                <For each=move || filtered.get() key=|solution| solution.id let:solution>
                    <SolutionCard solution/>
                </For>
            </div>

            <Show when=move || !filtered.get().is_empty()>
                <div class="load-more">
                    <button class="btn btn--secondary" on:click=move |_| notify::pending(toasts, PendingFeature::LoadMore)>
                        "Load More Solutions"
                    </button>
                </div>
            </Show>
        </div>
    }
}
