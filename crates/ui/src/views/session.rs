use std::time::Duration;

use dioxus::prelude::*;
use sprint_core::model::PracticeSessionConfig;
use sprint_core::session::{SessionResult, TickOutcome};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::vm::{map_choices, map_session_result};

/// Runs one practice session: question navigation, the countdown when the
/// config has a time limit, and the result card.
///
/// `on_done` fires after the result has been recorded into the profile.
/// `on_close` fires when the session is abandoned before it finishes.
#[component]
pub fn PracticeSessionPanel(
    config: PracticeSessionConfig,
    on_done: EventHandler<SessionResult>,
    on_close: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();
    let profile = ctx.profile();
    let mut session = use_signal(move || practice.start(config));
    let mut recording = use_signal(|| false);

    // Dropped with the component, which stops the countdown on exit.
    use_future(move || async move {
        if !session.write().start_if_needed() {
            return;
        }
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            match session.write().tick() {
                TickOutcome::Running { .. } => {}
                TickOutcome::Expired => {
                    debug!("practice countdown expired");
                    break;
                }
                TickOutcome::Idle => break,
            }
        }
    });

    let current = session.read().clone();

    if current.is_finished() {
        let result = current.result();
        let vm = map_session_result(&result);
        return rsx! {
            div { class: "session session-result",
                h2 { "{current.title()}" }
                p { class: "muted", "{current.subtitle()}" }
                div { class: "result-card",
                    p { class: "result-score", "{vm.score_text}" }
                    p { "Accuracy: {vm.accuracy_text}" }
                    p { "{vm.answered_text}" }
                    if let Some(time) = vm.time_text.as_ref() {
                        p { "Time: {time}" }
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: recording(),
                    onclick: move |_| {
                        let profile = profile.clone();
                        spawn(async move {
                            recording.set(true);
                            if let Err(err) = profile.record_session(&result).await {
                                warn!(error = %err, "session result was not recorded");
                            }
                            recording.set(false);
                            on_done.call(result);
                        });
                    },
                    "Done"
                }
            }
        };
    }

    let question = current.question();
    let choices = map_choices(&current).into_iter().map(|choice| {
        let index = choice.index;
        let mut session = session;
        rsx! {
            button {
                class: "{choice.state.class()}",
                r#type: "button",
                onclick: move |_| session.write().select(index),
                span { class: "choice-label", "{choice.label}" }
                span { class: "choice-text", "{choice.text}" }
            }
        }
    });
    let timer_class = if current.is_time_low() { "timer low" } else { "timer" };

    rsx! {
        div { class: "session",
            header { class: "session-header",
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        session.write().stop_timer();
                        on_close.call(());
                    },
                    "Close"
                }
                div { class: "session-titles",
                    h2 { "{current.title()}" }
                    p { class: "muted", "{current.subtitle()}" }
                }
                span { class: "position", "{current.position_text()}" }
                if let Some(time) = current.time_remaining_text() {
                    span { class: "{timer_class}", "{time}" }
                }
            }
            div { class: "question",
                h3 { "{question.prompt}" }
                p { class: "muted", "{question.detail}" }
            }
            div { class: "choices", {choices} }
            if current.show_explanation() {
                div { class: "explanation",
                    h4 { "Explanation" }
                    p { "{current.explanation_text()}" }
                }
            }
            footer { class: "session-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !current.can_go_back(),
                    onclick: move |_| session.write().prev(),
                    "Back"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !current.can_go_next(),
                    onclick: move |_| session.write().next_or_finish(),
                    "{current.next_button_title()}"
                }
            }
        }
    }
}
