//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, explore::ExplorePage, login::LoginPage,
    problem_details::ProblemDetailsPage, profile::ProfilePage, solutions::SolutionsPage, submit::SubmitPage,
};
use crate::state::{auth::AuthState, toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    // Effects only run in the browser, so the stored session is read after
    // hydration and SSR always renders the signed-out view.
    Effect::new(move || {
        let user = crate::util::storage::restore_session();
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/proby.css"/>
        <Title text="ProbY - Global Problems Smart Platform"/>
        <Meta
            name="description"
            content="An intelligent crowdsourcing platform for collecting, organizing, and solving global problems through AI and community collaboration."
        />

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route path=StaticSegment("submit") view=SubmitPage/>
                    <Route path=(StaticSegment("problem"), ParamSegment("id")) view=ProblemDetailsPage/>
                    <Route path=StaticSegment("solutions") view=SolutionsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </ParentRoute>
            </Routes>
            <Toaster/>
        </Router>
    }
}
