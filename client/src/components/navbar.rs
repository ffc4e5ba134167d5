//! Top navigation bar.

use catalog::PendingFeature;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;
use crate::util::notify;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        crate::util::storage::sign_out();
        auth.set(AuthState::signed_out());
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar glass">
            <div class="navbar__left">
                <button
                    class="btn btn--ghost navbar__menu"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                    title="Menu"
                >
                    "☰"
                </button>
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">"P"</span>
                    <span class="gradient-text">"ProbY"</span>
                </a>
            </div>
            <div class="navbar__right">
                <button
                    class="btn btn--ghost"
                    on:click=move |_| notify::pending(toasts, PendingFeature::Search)
                    title="Search"
                >
                    "🔍"
                </button>
                <button
                    class="btn btn--ghost navbar__bell"
                    on:click=move |_| notify::pending(toasts, PendingFeature::Notifications)
                    title="Notifications"
                >
                    "🔔"
                    <span class="navbar__badge"></span>
                </button>
                <a href="/profile" class="btn btn--ghost" title="Profile">
                    "👤"
                </a>
                <Show when=move || auth.get().user.is_some()>
                    <button class="btn btn--ghost navbar__sign-out" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
