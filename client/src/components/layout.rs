//! Page chrome wrapping every route except `/login`.
//!
//! DESIGN
//! ======
//! The desktop sidebar is always rendered; below the `lg` breakpoint it is
//! hidden by CSS and the same menu opens as a drawer over a scrim.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn Layout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="layout">
            <Navbar/>
            <div class="layout__body">
                <Show when=move || ui.get().sidebar_open>
                    <div class="layout__drawer">
                        <Sidebar drawer=true/>
                    </div>
                    <div class="layout__scrim" on:click=move |_| ui.update(UiState::close_sidebar)></div>
                </Show>
                <div class="layout__rail">
                    <Sidebar/>
                </div>
                <main class="layout__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
