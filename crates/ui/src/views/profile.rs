use dioxus::prelude::*;
use sprint_core::format::percent;
use sprint_core::model::{Profile, ProfileError, ProfileSettingsDraft, ProfileTheme};
use services::ProfileServiceError;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

fn save_error(err: &ProfileServiceError) -> ViewError {
    match err {
        ProfileServiceError::Profile(ProfileError::EmptyName) => {
            ViewError::Invalid("Name must not be empty.")
        }
        ProfileServiceError::Profile(ProfileError::InvalidTargetScore) => {
            ViewError::Invalid("Target score must be between 400 and 800.")
        }
        ProfileServiceError::Profile(ProfileError::InvalidDailyGoal) => {
            ViewError::Invalid("Daily goal must be between 5 and 180 minutes.")
        }
        _ => ViewError::Save,
    }
}

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let profile_service = ctx.profile();
    let mut draft = use_signal(|| None::<ProfileSettingsDraft>);
    let mut confirm_reset = use_signal(|| false);
    let mut action_error = use_signal(|| None::<ViewError>);

    let service_for_resource = profile_service.clone();
    let resource = use_resource(move || {
        let service = service_for_resource.clone();
        async move {
            service.load().await.map_err(|err| {
                warn!(error = %err, "profile could not be loaded");
                ViewError::Load
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let service_for_save = profile_service.clone();
    let on_save = move |_: MouseEvent| {
        let Some(current) = draft() else { return };
        let service = service_for_save.clone();
        let mut resource = resource;
        spawn(async move {
            match service.save_settings(current).await {
                Ok(_) => {
                    draft.set(None);
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(save_error(&err))),
            }
        });
    };

    let service_for_reset = profile_service.clone();
    let on_reset = move |_: MouseEvent| {
        let service = service_for_reset.clone();
        let mut resource = resource;
        spawn(async move {
            match service.reset_progress().await {
                Ok(_) => {
                    confirm_reset.set(false);
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => {
                    warn!(error = %err, "progress reset failed");
                    action_error.set(Some(ViewError::Save));
                }
            }
        });
    };

    rsx! {
        div { class: "page profile",
            h2 { "Profile" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(profile) => {
                    let initial_draft = profile.settings.to_draft();
                    rsx! {
                        ProfileHeader { profile: profile.clone() }
                        ProgressCard { profile: profile.clone() }
                        if let Some(current) = draft() {
                            SettingsForm { draft, current }
                            div { class: "row",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| draft.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: on_save,
                                    "Save"
                                }
                            }
                        } else {
                            SettingsSummary { profile: profile.clone() }
                            button {
                                class: "btn btn-secondary btn-block",
                                r#type: "button",
                                onclick: move |_| draft.set(Some(initial_draft.clone())),
                                "Edit profile"
                            }
                        }
                        if confirm_reset() {
                            div { class: "card confirm",
                                p { "Reset all progress? Your settings are kept." }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| confirm_reset.set(false),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-danger",
                                    r#type: "button",
                                    onclick: on_reset,
                                    "Reset"
                                }
                            }
                        } else {
                            button {
                                class: "btn btn-danger-outline btn-block",
                                r#type: "button",
                                onclick: move |_| confirm_reset.set(true),
                                "Reset progress"
                            }
                        }
                    }
                }
            }
            if let Some(err) = action_error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn ProfileHeader(profile: Profile) -> Element {
    let settings = &profile.settings;
    rsx! {
        header { class: "profile-header",
            span { class: "avatar", "{settings.monogram()}" }
            div {
                h3 { "{settings.name()}" }
                p { class: "muted", "{profile.level_title()} • Target {settings.target_score()}" }
            }
        }
    }
}

#[component]
fn ProgressCard(profile: Profile) -> Element {
    let weekly_width = percent(profile.weekly_progress());
    let daily_width = percent(profile.daily_progress());
    rsx! {
        section { class: "card progress-card",
            div { class: "tiles",
                div { class: "tile",
                    span { class: "tile-value", "{profile.progress.total_solved}" }
                    span { class: "tile-label", "Solved" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{profile.accuracy_text()}" }
                    span { class: "tile-label", "Accuracy" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{profile.total_time_text()}" }
                    span { class: "tile-label", "Time" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{profile.progress.streak_days}" }
                    span { class: "tile-label", "Day streak" }
                }
            }
            div { class: "section-header",
                span { "Today" }
                span { class: "muted", "{profile.daily_progress_text()}" }
            }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {daily_width}%" }
            }
            div { class: "section-header",
                span { "This week" }
                span { class: "muted", "{profile.progress.weekly_minutes}/{profile.progress.weekly_goal_minutes}m" }
            }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {weekly_width}%" }
            }
            p { class: "hint", "{profile.weekly_hint()}" }
        }
    }
}

#[component]
fn SettingsSummary(profile: Profile) -> Element {
    let settings = &profile.settings;
    let on_off = |value: bool| if value { "On" } else { "Off" };
    rsx! {
        section { class: "card settings",
            p { "Daily goal: {settings.daily_goal_minutes()} min" }
            p { "Notifications: {on_off(settings.notifications_enabled())}" }
            p { "Haptics: {on_off(settings.haptics_enabled())}" }
            p { "Theme: {settings.theme().title()}" }
        }
    }
}

#[component]
fn SettingsForm(draft: Signal<Option<ProfileSettingsDraft>>, current: ProfileSettingsDraft) -> Element {
    let mut draft = draft;
    let mut edit = move |apply: fn(&mut ProfileSettingsDraft)| {
        if let Some(value) = draft.write().as_mut() {
            apply(value);
        }
    };

    rsx! {
        section { class: "card settings-form",
            label { "Name"
                input {
                    value: "{current.name}",
                    oninput: move |evt: FormEvent| {
                        if let Some(value) = draft.write().as_mut() {
                            value.name = evt.value();
                        }
                    },
                }
            }
            div { class: "stepper",
                span { class: "stepper-label", "Target score" }
                button { class: "btn btn-round", r#type: "button",
                    onclick: move |_| edit(|d| d.step_target_score(false)), "−" }
                span { class: "stepper-value", "{current.target_score}" }
                button { class: "btn btn-round", r#type: "button",
                    onclick: move |_| edit(|d| d.step_target_score(true)), "+" }
            }
            div { class: "stepper",
                span { class: "stepper-label", "Daily goal" }
                button { class: "btn btn-round", r#type: "button",
                    onclick: move |_| edit(|d| d.step_daily_goal(false)), "−" }
                span { class: "stepper-value", "{current.daily_goal_minutes} min" }
                button { class: "btn btn-round", r#type: "button",
                    onclick: move |_| edit(|d| d.step_daily_goal(true)), "+" }
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: current.notifications_enabled,
                    onchange: move |_| edit(|d| d.notifications_enabled = !d.notifications_enabled),
                }
                "Notifications"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: current.haptics_enabled,
                    onchange: move |_| edit(|d| d.haptics_enabled = !d.haptics_enabled),
                }
                "Haptics"
            }
            div { class: "segmented",
                for theme in ProfileTheme::ALL {
                    button {
                        class: if current.theme == theme { "segment active" } else { "segment" },
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(value) = draft.write().as_mut() {
                                value.theme = theme;
                            }
                        },
                        "{theme.title()}"
                    }
                }
            }
        }
    }
}
