//! Toast helpers used by pages and components.

use catalog::{Notice, PendingFeature};
use leptos::prelude::*;

use crate::state::toasts::{TOAST_DISMISS_MS, ToastState};

/// Show `notice` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_DISMISS_MS);
}

/// Show the placeholder notice for an unimplemented action.
pub fn pending(toasts: RwSignal<ToastState>, feature: PendingFeature) {
    notify(toasts, Notice::pending(feature));
}
