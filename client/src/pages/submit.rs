//! Submit route: the problem submission form.
//!
//! DESIGN
//! ======
//! The whole form is one `ProblemDraft` signal. Validation runs before the
//! simulated request delay so an incomplete form is rejected immediately;
//! `catalog::submission::submit` validates again when the delay ends and
//! only then writes to `localStorage` and resets the draft. The record is
//! built from the draft as it stood when the form was submitted.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use catalog::model::{Category, Urgency, Visibility};
use catalog::submission::{self, DuplicateCandidate, ProblemDraft, SubmissionError, duplicate_hint};
use catalog::{KeyValueStore, PendingFeature};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::toasts::ToastState;
use crate::util::storage::BrowserStore;
use crate::util::{clock, notify};

const DESCRIPTION_LIMIT: usize = 2000;

/// Write the draft captured at submit time once the request delay has elapsed.
fn finish_submission(
    snapshot: ProblemDraft,
    draft: RwSignal<ProblemDraft>,
    duplicates: RwSignal<Vec<DuplicateCandidate>>,
    submitting: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    match BrowserStore::open() {
        Ok(mut store) => record_submission(&mut store, snapshot, draft, duplicates, toasts),
        Err(e) => notify::notify(toasts, SubmissionError::from(e).notice()),
    }
    submitting.set(false);
}

fn record_submission(
    store: &mut impl KeyValueStore,
    mut snapshot: ProblemDraft,
    draft: RwSignal<ProblemDraft>,
    duplicates: RwSignal<Vec<DuplicateCandidate>>,
    toasts: RwSignal<ToastState>,
) {
    let (id, date) = clock::now();
    match submission::submit(store, &mut snapshot, id, date) {
        Ok(_) => {
            draft.set(snapshot);
            duplicates.set(Vec::new());
            notify::notify(toasts, submission::submitted_notice());
        }
        Err(e) => notify::notify(toasts, e.notice()),
    }
}

#[component]
pub fn SubmitPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new(ProblemDraft::default());
    let current_tag = RwSignal::new(String::new());
    let duplicates = RwSignal::new(Vec::<DuplicateCandidate>::new());
    let submitting = RwSignal::new(false);

    let on_title = move |ev: leptos::ev::Event| {
        let title = event_target_value(&ev);
        if let Some(hint) = duplicate_hint(&title) {
            duplicates.set(hint);
        }
        draft.update(|d| d.title = title);
    };

    let add_tag = move || {
        let raw = current_tag.get_untracked();
        let mut added = false;
        draft.update(|d| added = d.add_tag(&raw));
        if added {
            current_tag.set(String::new());
        }
    };

    let on_tag_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_tag();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let snapshot = draft.get_untracked();
        if let Err(e) = snapshot.validate() {
            notify::notify(toasts, e.notice());
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(submission::SUBMIT_DELAY_MS).await;
            finish_submission(snapshot, draft, duplicates, submitting, toasts);
        });
        #[cfg(not(feature = "hydrate"))]
        finish_submission(snapshot, draft, duplicates, submitting, toasts);
    };

    view! {
        <Title text="Submit Problem - ProbY Platform"/>
        <div class="page submit-page">
            <header class="page__header page__header--center">
                <h1 class="gradient-text">"Submit a Problem"</h1>
                <p class="page__lede">
                    "Share a challenge you've identified and let our community help find solutions"
                </p>
            </header>

            <form class="submit-form" on:submit=on_submit>
                <div class="glass panel form-panel">
                    <div class="field">
                        <label for="title">"Problem Title *"</label>
                        <input
                            id="title"
                            class="input-field"
                            type="text"
                            placeholder="Enter a clear, descriptive title for the problem"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=on_title
                        />
                        <p class="field__hint">
                            "Be specific and descriptive. Good titles help others understand the problem quickly."
                        </p>
                    </div>

                    <Show when=move || duplicates.with(|d| !d.is_empty())>
                        <div class="duplicate-hint">
                            <p class="duplicate-hint__title">"⚠ Similar Problems Found"</p>
                            <p class="duplicate-hint__lede">
                                "We found some similar problems. Please review them to avoid duplicates:"
                            </p>
                            <For each=move || duplicates.get() key=|d| d.id let:candidate>
                                <div class="duplicate-hint__row">
                                    <div>
                                        <h4>{candidate.title}</h4>
                                        <p>"by " {candidate.author}</p>
                                    </div>
                                    <span class="duplicate-hint__score">{candidate.similarity} "% similar"</span>
                                </div>
                            </For>
                            <button type="button" class="btn btn--ghost" on:click=move |_| duplicates.set(Vec::new())>
                                "Continue with My Problem"
                            </button>
                        </div>
                    </Show>

                    <div class="field">
                        <label for="description">"Problem Description *"</label>
                        <textarea
                            id="description"
                            class="input-field"
                            rows="6"
                            placeholder="Provide a detailed description of the problem, including its impact, affected populations, and any relevant context..."
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                        <div class="field__footer">
                            <p class="field__hint">
                                "Include as much detail as possible to help others understand the problem."
                            </p>
                            <span class="field__count">
                                {move || draft.with(|d| d.description.chars().count())} "/" {DESCRIPTION_LIMIT}
                            </span>
                        </div>
                    </div>

                    <div class="field-row">
                        <div class="field">
                            <label for="category">"Category *"</label>
                            <select
                                id="category"
                                class="input-field"
                                prop:value=move || draft.with(|d| d.category.map_or("", Category::id))
                                on:change=move |ev| {
                                    let category = Category::from_id(&event_target_value(&ev));
                                    draft.update(|d| d.category = category);
                                }
                            >
                                <option value="">"Select a category"</option>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id()>{c.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="field">
                            <label for="urgency">"Urgency Level"</label>
                            <select
                                id="urgency"
                                class="input-field"
                                prop:value=move || draft.with(|d| d.urgency.id())
                                on:change=move |ev| {
                                    if let Some(urgency) = Urgency::from_id(&event_target_value(&ev)) {
                                        draft.update(|d| d.urgency = urgency);
                                    }
                                }
                            >
                                {Urgency::ALL
                                    .into_iter()
                                    .map(|u| view! { <option value=u.id()>{u.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="field">
                        <label for="location">"Location"</label>
                        <div class="field__inline">
                            <input
                                id="location"
                                class="input-field"
                                type="text"
                                placeholder="Enter location (city, country, or 'Global')"
                                prop:value=move || draft.with(|d| d.location.clone())
                                on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn--secondary"
                                on:click=move |_| notify::pending(toasts, PendingFeature::LocationSearch)
                            >
                                "📍 Search"
                            </button>
                        </div>
                    </div>

                    <div class="field">
                        <label>"Tags"</label>
                        <div class="tag-list">
                            <For each=move || draft.with(|d| d.tags.clone()) key=|tag: &String| tag.clone() let:tag>
                                {
                                    let removed = tag.clone();
                                    view! {
                                        <span class="tag-chip">
                                            <span>{tag}</span>
                                            <button
                                                type="button"
                                                class="tag-chip__remove"
                                                aria-label="Remove tag"
                                                on:click=move |_| draft.update(|d| d.remove_tag(&removed))
                                            >
                                                "✕"
                                            </button>
                                        </span>
                                    }
                                }
                            </For>
                        </div>
                        <div class="field__inline">
                            <input
                                class="input-field"
                                type="text"
                                placeholder="Add a tag..."
                                prop:value=move || current_tag.get()
                                on:input=move |ev| current_tag.set(event_target_value(&ev))
                                on:keydown=on_tag_key
                            />
                            <button type="button" class="btn btn--secondary" on:click=move |_| add_tag()>
                                "Add Tag"
                            </button>
                        </div>
                    </div>

                    <div class="field">
                        <label>"Visibility"</label>
                        <div class="visibility-options">
                            <label class="visibility-option">
                                <input
                                    type="radio"
                                    name="visibility"
                                    value="public"
                                    prop:checked=move || draft.with(|d| d.visibility == Visibility::Public)
                                    on:change=move |_| draft.update(|d| d.visibility = Visibility::Public)
                                />
                                <span class="visibility-option__name">"🌐 Public"</span>
                                <span class="field__hint">
                                    "Visible to everyone and can receive community solutions"
                                </span>
                            </label>
                            <label class="visibility-option">
                                <input
                                    type="radio"
                                    name="visibility"
                                    value="private"
                                    prop:checked=move || draft.with(|d| d.visibility == Visibility::Private)
                                    on:change=move |_| draft.update(|d| d.visibility = Visibility::Private)
                                />
                                <span class="visibility-option__name">"🔒 Private"</span>
                                <span class="field__hint">"Only visible to you and invited collaborators"</span>
                            </label>
                        </div>
                    </div>

                    <div class="field">
                        <label>"Supporting Documents (Optional)"</label>
                        <div class="upload-area" on:click=move |_| notify::pending(toasts, PendingFeature::FileUpload)>
                            <span class="upload-area__icon" aria-hidden="true">"⬆"</span>
                            <p>"Click to upload images, documents, or research papers"</p>
                            <p class="field__hint">"Supported formats: PDF, DOC, JPG, PNG (Max 10MB)"</p>
                        </div>
                    </div>
                </div>

                <div class="submit-form__actions">
                    <button type="submit" class="btn btn--primary btn--wide" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting Problem..." } else { "✔ Submit Problem" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
