use dioxus::prelude::*;
use dioxus_router::use_navigator;
use sprint_core::format::percent;
use sprint_core::model::PracticeSessionConfig;
use sprint_core::session::SessionResult;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::PracticeSessionPanel;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let home = ctx.home();
    let feed = use_hook(|| home.feed());
    let mut active = use_signal(|| None::<PracticeSessionConfig>);

    if let Some(config) = active() {
        return rsx! {
            PracticeSessionPanel {
                config,
                on_done: move |_result: SessionResult| active.set(None),
                on_close: move |()| active.set(None),
            }
        };
    }

    let focus_config = home.focus_session(&feed.focus);
    let continue_cards = feed.continue_sessions.iter().map(|session| {
        let config = home.continue_session(session);
        let width = percent(session.progress());
        let mut active = active;
        rsx! {
            button {
                class: "card continue-card",
                r#type: "button",
                onclick: move |_| active.set(Some(config.clone())),
                h4 { "{session.title}" }
                p { class: "muted", "{session.detail()}" }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {width}%" }
                }
            }
        }
    });
    let recommendations = feed.recommendations.iter().map(|rec| {
        rsx! {
            div { class: "card recommendation", "data-symbol": "{rec.symbol}",
                div {
                    h4 { "{rec.title}" }
                    p { class: "muted", "{rec.subtitle}" }
                }
                span { class: "badge", "{rec.level}" }
            }
        }
    });
    let weekly_width = percent(feed.weekly_progress());

    rsx! {
        div { class: "page home",
            header {
                h2 { "{feed.greeting_title}" }
                p { class: "muted", "{feed.greeting_subtitle}" }
                p { class: "hint", "{feed.today_hint}" }
            }
            section { class: "card focus-card",
                h3 { "{feed.focus.title}" }
                p { "{feed.focus.minutes_text()} • {feed.focus.questions_text()}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| active.set(Some(focus_config.clone())),
                    "Start Practice"
                }
            }
            if !feed.continue_sessions.is_empty() {
                section {
                    h3 { "Continue" }
                    div { class: "continue-row", {continue_cards} }
                }
            }
            section {
                h3 { "Recommended" }
                {recommendations}
            }
            section { class: "card weekly",
                div { class: "section-header",
                    h3 { "This week" }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Stats {});
                        },
                        "View stats"
                    }
                }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {weekly_width}%" }
                }
                p { class: "muted", "{feed.weekly_text()}" }
            }
        }
    }
}
