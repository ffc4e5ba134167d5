//! Login page writing the demo session to local storage.

use catalog::PendingFeature;
use catalog::login::{self, LoginError, LoginForm};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::notify;
use crate::util::storage::BrowserStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let result = if form.is_complete() {
            BrowserStore::open().map_err(LoginError::from).and_then(|mut store| login::sign_in(&mut store, &form))
        } else {
            Err(LoginError::MissingFields)
        };
        match result {
            Ok(user) => {
                auth.set(AuthState::signed_in(user));
                notify::notify(toasts, login::welcome_notice());
                navigate("/", NavigateOptions::default());
            }
            Err(e) => {
                if let LoginError::Store(inner) = &e {
                    leptos::logging::warn!("login store error: {inner}");
                }
                notify::notify(toasts, e.notice());
            }
        }
    };

    view! {
        <Title text="Login - ProbY Platform"/>
        <div class="login-page">
            <div class="login-card glass">
                <div class="login-card__header">
                    <span class="login-card__logo">"P"</span>
                    <h1 class="gradient-text">"Welcome Back"</h1>
                    <p class="login-card__subtitle">"Sign in to continue solving global problems"</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label for="email" class="field-label">"Email Address"</label>
                    <input
                        id="email"
                        class="input-field"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password" class="field-label">"Password"</label>
                    <div class="login-form__password">
                        <input
                            id="password"
                            class="input-field"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-form__reveal"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                            title="Show password"
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    <div class="login-form__row">
                        <label class="checkbox">
                            <input type="checkbox"/>
                            <span>"Remember me"</span>
                        </label>
                        <button
                            type="button"
                            class="link"
                            on:click=move |_| notify::pending(toasts, PendingFeature::ForgotPassword)
                        >
                            "Forgot Password?"
                        </button>
                    </div>
                    <button class="btn btn--primary btn--block" type="submit">
                        "Log In"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="link"
                        on:click=move |_| notify::pending(toasts, PendingFeature::SignUp)
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
