use dioxus::prelude::*;
use sprint_core::model::{
    PracticeDifficulty, PracticeMode, PracticeSessionConfig, PracticeSetup, PracticeTopic,
};
use sprint_core::session::SessionResult;
use tracing::warn;

use crate::context::AppContext;
use crate::views::PracticeSessionPanel;

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut setup = use_signal(PracticeSetup::new);
    let mut active = use_signal(|| None::<PracticeSessionConfig>);

    if let Some(config) = active() {
        let is_diagnostic = config == PracticeSessionConfig::diagnostic();
        let flow = ctx.flow();
        return rsx! {
            PracticeSessionPanel {
                config,
                on_done: move |_result: SessionResult| {
                    active.set(None);
                    if is_diagnostic {
                        let flow = flow.clone();
                        spawn(async move {
                            if let Err(err) = flow.finish_diagnostic().await {
                                warn!(error = %err, "finish_diagnostic failed");
                            }
                        });
                    }
                },
                on_close: move |()| active.set(None),
            }
        };
    }

    let current = setup();
    let mode_tabs = PracticeMode::ALL.into_iter().map(|mode| {
        let mut setup = setup;
        rsx! {
            button {
                class: if current.mode == mode { "segment active" } else { "segment" },
                r#type: "button",
                onclick: move |_| setup.write().mode = mode,
                span { class: "segment-title", "{mode.title()}" }
                span { class: "segment-subtitle", "{mode.subtitle()}" }
            }
        }
    });

    let mode_controls = match current.mode {
        PracticeMode::Topic => rsx! {
            section { class: "card",
                h4 { "Topic" }
                div { class: "pill-row",
                    for topic in PracticeTopic::ALL {
                        button {
                            class: if current.topic == topic { "pill active" } else { "pill" },
                            r#type: "button",
                            onclick: move |_| setup.write().topic = topic,
                            "{topic.title()}"
                        }
                    }
                }
                Stepper {
                    label: "Questions",
                    value: "{current.question_count()}",
                    on_decrement: move |()| setup.write().decrement_questions(),
                    on_increment: move |()| setup.write().increment_questions(),
                }
            }
        },
        PracticeMode::Timed => rsx! {
            section { class: "card",
                h4 { "Difficulty" }
                div { class: "pill-row",
                    for difficulty in PracticeDifficulty::ALL {
                        button {
                            class: if current.difficulty == difficulty { "pill active" } else { "pill" },
                            r#type: "button",
                            onclick: move |_| setup.write().difficulty = difficulty,
                            "{difficulty.title()}"
                        }
                    }
                }
                Stepper {
                    label: "Questions",
                    value: "{current.question_count()}",
                    on_decrement: move |()| setup.write().decrement_questions(),
                    on_increment: move |()| setup.write().increment_questions(),
                }
                Stepper {
                    label: "Time limit",
                    value: "{current.time_limit_minutes()} min",
                    on_decrement: move |()| setup.write().decrement_time(),
                    on_increment: move |()| setup.write().increment_time(),
                }
            }
        },
        PracticeMode::Full => {
            let preset = current.section_preset();
            rsx! {
                section { class: "card",
                    h4 { "Section length" }
                    Stepper {
                        label: "{preset.title()}",
                        value: "{preset.detail()}",
                        on_decrement: move |()| setup.write().previous_preset(),
                        on_increment: move |()| setup.write().next_preset(),
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page practice",
            h2 { "Practice" }
            div { class: "segmented", {mode_tabs} }
            div { class: "section-header",
                span { "{current.header_left()}" }
                span { class: "muted", "{current.header_right()}" }
            }
            {mode_controls}
            section { class: "card toggles",
                label {
                    input {
                        r#type: "checkbox",
                        checked: current.show_explanations,
                        onchange: move |evt: FormEvent| setup.write().show_explanations = evt.checked(),
                    }
                    "Show explanations"
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: current.shuffle,
                        onchange: move |evt: FormEvent| setup.write().shuffle = evt.checked(),
                    }
                    "Shuffle questions"
                }
            }
            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| active.set(Some(setup.read().session_config())),
                "Start"
            }
            button {
                class: "btn btn-secondary btn-block",
                r#type: "button",
                onclick: move |_| active.set(Some(PracticeSessionConfig::diagnostic())),
                "Run diagnostic"
            }
        }
    }
}

#[component]
fn Stepper(
    label: String,
    value: String,
    on_decrement: EventHandler<()>,
    on_increment: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "stepper",
            span { class: "stepper-label", "{label}" }
            button {
                class: "btn btn-round",
                r#type: "button",
                onclick: move |_| on_decrement.call(()),
                "−"
            }
            span { class: "stepper-value", "{value}" }
            button {
                class: "btn btn-round",
                r#type: "button",
                onclick: move |_| on_increment.call(()),
                "+"
            }
        }
    }
}
