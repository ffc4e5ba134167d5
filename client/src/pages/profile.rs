//! Profile route: editable member card, counters, and tabbed detail panels.
//!
//! Edits live only in a page-scoped signal. Saving shows a confirmation and
//! persists nothing.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use catalog::display::format_date;
use catalog::model::{Achievement, ActivityItem, ActivityKind, ProfileData};
use catalog::{Notice, PendingFeature, fixtures};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::impact_bars::ImpactBars;
use crate::state::toasts::ToastState;
use crate::state::ui::ProfileTab;
use crate::util::notify;

fn profile_saved_notice() -> Notice {
    Notice::titled("✅ Profile Updated", "Your profile has been successfully updated!")
}

fn activity_chip(kind: ActivityKind) -> (&'static str, &'static str) {
    match kind {
        ActivityKind::Problem => ("💡", "chip--orange"),
        ActivityKind::Solution => ("✔", "chip--green"),
        ActivityKind::Collaboration => ("👥", "chip--blue"),
    }
}

fn activity_status_chip(status: &str) -> &'static str {
    match status {
        "Approved" => "chip--green",
        "Under Review" => "chip--yellow",
        _ => "chip--blue",
    }
}

fn achievement_icon(id: u32) -> (&'static str, &'static str) {
    match id {
        1 => ("💡", "text-yellow-400"),
        2 => ("👥", "text-blue-400"),
        3 => ("🌐", "text-green-400"),
        _ => ("⭐", "text-purple-400"),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let profile = RwSignal::new(fixtures::profile());
    let editing = RwSignal::new(false);
    let tab = RwSignal::new(ProfileTab::Overview);
    let stats = fixtures::profile_stats();

    let on_edit = move |_| {
        if editing.get_untracked() {
            editing.set(false);
            notify::notify(toasts, profile_saved_notice());
        } else {
            editing.set(true);
        }
    };

    let name_value = move || profile.with(|p| p.name.clone());
    let role_value = move || profile.with(|p| p.role.clone());
    let bio_value = move || profile.with(|p| p.bio.clone());

    let stat_tiles = [
        ("Problems", stats.problems_submitted.to_string(), "💡", "orange"),
        ("Solutions", stats.solutions_proposed.to_string(), "✔", "green"),
        ("Votes", stats.votes_received.to_string(), "📈", "blue"),
        ("Collaborations", stats.collaborations.to_string(), "👥", "purple"),
        ("Impact Score", stats.impact_score.to_string(), "🌐", "teal"),
        ("Reputation", format!("{:.1}", stats.reputation), "⭐", "red"),
    ]
    .into_iter()
    .map(|(label, value, icon, accent)| {
        view! {
            <div class="mini-stat glass card-hover">
                <span class=format!("stat-card__icon stat-card__icon--{accent}") aria-hidden="true">{icon}</span>
                <div class="mini-stat__value">{value}</div>
                <div class="mini-stat__label">{label}</div>
            </div>
        }
    })
    .collect_view();

    view! {
        <Title text="Profile - ProbY Platform"/>
        <Meta
            name="description"
            content="Manage your ProbY profile, view your contributions, achievements, and track your impact on global problem-solving."
        />
        <div class="page profile-page">
            <section class="glass panel profile-header">
                <div class="profile-header__avatar">
                    <span class="avatar avatar--large" aria-hidden="true">
                        {move || profile.with(|p| p.name.chars().next().map(String::from).unwrap_or_default())}
                    </span>
                    <button
                        class="profile-header__avatar-edit"
                        title="Change avatar"
                        on:click=move |_| notify::pending(toasts, PendingFeature::ChangeAvatar)
                    >
                        "✎"
                    </button>
                </div>
                <div class="profile-header__info">
                    <div class="profile-header__top">
                        <div>
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <h1 class="profile-header__name">{name_value}</h1>
                                    <p class="profile-header__role">{role_value}</p>
                                }
                            >
                                <input class="input-field" type="text" prop:value=name_value
                                    on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))/>
                                <input class="input-field" type="text" prop:value=role_value
                                    on:input=move |ev| profile.update(|p| p.role = event_target_value(&ev))/>
                            </Show>
                        </div>
                        <button class="btn btn--primary" on:click=on_edit>
                            {move || if editing.get() { "✎ Save Changes" } else { "✎ Edit Profile" }}
                        </button>
                    </div>
                    <div class="profile-header__meta">
                        <span>"✉ " {move || profile.with(|p| p.email.clone())}</span>
                        <span>"📍 " {move || profile.with(|p| p.location.clone())}</span>
                        <span>"📅 Joined " {move || profile.with(|p| format_date(&p.join_date))}</span>
                    </div>
                    <Show
                        when=move || editing.get()
                        fallback=move || view! { <p class="profile-header__bio">{bio_value}</p> }
                    >
                        <textarea
                            class="input-field"
                            rows="3"
                            placeholder="Tell us about yourself..."
                            prop:value=bio_value
                            on:input=move |ev| profile.update(|p| p.bio = event_target_value(&ev))
                        ></textarea>
                    </Show>
                </div>
            </section>

            <div class="mini-stat-grid">{stat_tiles}</div>

            <div class="tab-bar glass">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="glass panel">
                {move || match tab.get() {
                    ProfileTab::Overview => view! { <OverviewTab/> }.into_any(),
                    ProfileTab::Activity => view! { <ActivityTab/> }.into_any(),
                    ProfileTab::Achievements => view! { <AchievementsTab/> }.into_any(),
                    ProfileTab::Settings => view! { <SettingsTab profile/> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let rows = fixtures::profile_activity()
        .into_iter()
        .map(|item| {
            view! {
                <div class="activity-row">
                    <div class="activity-row__body">
                        <h4>{item.title}</h4>
                        <p>{item.action} " • " {item.status}</p>
                    </div>
                    <span class="activity-row__when">{format_date(&item.when)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <h2>"Profile Overview"</h2>
        <div class="two-column">
            <div>
                <h3>"Recent Activity"</h3>
                {rows}
            </div>
            <div>
                <h3>"Impact Summary"</h3>
                <ImpactBars metrics=fixtures::profile_impact()/>
            </div>
        </div>
    }
}

#[component]
fn ActivityTab() -> impl IntoView {
    let row = |item: ActivityItem| {
        let (icon, chip) = activity_chip(item.kind);
        let status_chip = activity_status_chip(&item.status);
        view! {
            <div class="activity-row activity-row--card">
                <span class=format!("chip {chip}") aria-hidden="true">{icon}</span>
                <div class="activity-row__body">
                    <h3>{item.title}</h3>
                    <p>{item.action} " on " {format_date(&item.when)}</p>
                </div>
                <span class=format!("chip {status_chip}")>{item.status}</span>
            </div>
        }
    };

    view! {
        <h2>"Activity History"</h2>
        {fixtures::profile_activity().into_iter().map(row).collect_view()}
    }
}

#[component]
fn AchievementsTab() -> impl IntoView {
    let card = |achievement: Achievement| {
        let (icon, color) = achievement_icon(achievement.id);
        view! {
            <div class="achievement" class:achievement--locked=!achievement.earned>
                <span class=format!("achievement__icon {color}") aria-hidden="true">{icon}</span>
                <div>
                    <h3>{achievement.title}</h3>
                    <p>{achievement.description}</p>
                    {achievement.earned.then(|| view! { <span class="achievement__earned">"✔ Earned"</span> })}
                </div>
            </div>
        }
    };

    view! {
        <h2>"Achievements"</h2>
        <div class="achievement-grid">{fixtures::achievements().into_iter().map(card).collect_view()}</div>
    }
}

#[component]
fn SettingsTab(profile: RwSignal<ProfileData>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let preferences = fixtures::notification_preferences()
        .into_iter()
        .map(|setting| {
            view! {
                <label class="checkbox-row">
                    <input type="checkbox" checked=true/>
                    <span>{setting}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <h2>"Account Settings"</h2>
        <div class="field-row">
            <div class="field">
                <label>"Email Address"</label>
                <input
                    class="input-field"
                    type="email"
                    prop:value=move || profile.with(|p| p.email.clone())
                    on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Location"</label>
                <input
                    class="input-field"
                    type="text"
                    prop:value=move || profile.with(|p| p.location.clone())
                    on:input=move |ev| profile.update(|p| p.location = event_target_value(&ev))
                />
            </div>
        </div>
        <div class="field">
            <label>"Organization"</label>
            <input
                class="input-field"
                type="text"
                prop:value=move || profile.with(|p| p.organization.clone())
                on:input=move |ev| profile.update(|p| p.organization = event_target_value(&ev))
            />
        </div>
        <div class="field">
            <label>"Website"</label>
            <input
                class="input-field"
                type="url"
                prop:value=move || profile.with(|p| p.website.clone())
                on:input=move |ev| profile.update(|p| p.website = event_target_value(&ev))
            />
        </div>

        <h3>"Notification Preferences"</h3>
        <div class="checkbox-list">{preferences}</div>

        <div class="settings-actions">
            <button class="btn btn--primary">"Save Settings"</button>
            <button class="btn btn--secondary" on:click=move |_| notify::pending(toasts, PendingFeature::ChangePassword)>
                "Change Password"
            </button>
        </div>
    }
}
