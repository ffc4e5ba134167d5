//! Toast viewport rendering the queued notices.

use catalog::NoticeVariant;
use leptos::prelude::*;

use crate::state::toasts::ToastState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let destructive = toast.notice.variant == NoticeVariant::Destructive;
                    view! {
                        <li class="toast" class:toast--destructive=destructive>
                            <div class="toast__body">
                                <p class="toast__title">{toast.notice.title}</p>
                                <p class="toast__description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
