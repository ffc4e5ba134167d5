//! Headline counter tile used on the dashboard, profile, and admin pages.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    icon: &'static str,
    /// Gradient modifier, e.g. `"orange"` gives `stat-card__icon--orange`.
    accent: &'static str,
    #[prop(optional, into)] change: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card glass card-hover">
            <div class="stat-card__top">
                <span class=format!("stat-card__icon stat-card__icon--{accent}") aria-hidden="true">{icon}</span>
                <span class="stat-card__trend" aria-hidden="true">"📈"</span>
            </div>
            <h3 class="stat-card__value">{value}</h3>
            <p class="stat-card__title">{title}</p>
            {change.map(|c| view! { <p class="stat-card__change">{c}</p> })}
        </div>
    }
}
