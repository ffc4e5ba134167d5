//! Primary navigation menu with active-route highlight.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// `(icon, label, path)` for each menu entry.
const MENU: [(&str, &str, &str); 6] = [
    ("🏠", "Dashboard", "/"),
    ("🧭", "Explore Problems", "/explore"),
    ("➕", "Submit Problem", "/submit"),
    ("💡", "Solutions", "/solutions"),
    ("👤", "Profile", "/profile"),
    ("📊", "Admin Panel", "/admin"),
];

/// Sidebar menu. `drawer` adds the mobile header with a close button.
#[component]
pub fn Sidebar(#[prop(optional)] drawer: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let close = move |_| ui.update(UiState::close_sidebar);

    view! {
        <aside class="sidebar">
            <Show when=move || drawer>
                <div class="sidebar__header">
                    <span class="sidebar__title gradient-text">"Menu"</span>
                    <button class="btn btn--ghost sidebar__close" on:click=close title="Close menu">
                        "✕"
                    </button>
                </div>
            </Show>
            <nav class="sidebar__nav">
                {MENU
                    .into_iter()
                    .map(|(icon, label, path)| {
                        view! {
                            <a
                                class="sidebar__item"
                                class:sidebar__item--active=move || pathname.get() == path
                                href=path
                                on:click=close
                            >
                                <span class="sidebar__icon" aria-hidden="true">{icon}</span>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__promo glass">
                <span class="sidebar__promo-icon" aria-hidden="true">"👥"</span>
                <p>"Join our community"</p>
                <button class="btn btn--primary">"Upgrade to PRO"</button>
            </div>
        </aside>
    }
}
