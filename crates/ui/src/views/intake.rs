use dioxus::prelude::*;
use sprint_core::model::{IntakeAnswers, SatHistory, TargetBand, UserLevel};
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;

#[component]
pub fn IntakeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut answers = use_signal(IntakeAnswers::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let intake = ctx.intake();
    let intake_for_load = intake.clone();
    use_future(move || {
        let intake = intake_for_load.clone();
        async move {
            match intake.load().await {
                Ok(saved) => answers.set(saved),
                Err(err) => warn!(error = %err, "intake answers could not be loaded"),
            }
        }
    });

    let flow = ctx.flow();
    let on_continue = move |_: MouseEvent| {
        let intake = intake.clone();
        let flow = flow.clone();
        let current = answers();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = match intake.save(current).await {
                Ok(()) => flow.finish_intake().await.map(|_| ()).map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            if let Err(err) = result {
                warn!(error = %err, "intake could not be completed");
                error.set(Some(ViewError::Save));
            }
            saving.set(false);
        });
    };

    let current = answers();
    let history_pills = SatHistory::ALL.into_iter().map(|value| {
        let mut answers = answers;
        rsx! {
            button {
                class: if current.sat_history == value { "pill active" } else { "pill" },
                r#type: "button",
                onclick: move |_| answers.write().sat_history = value,
                "{value.title()}"
            }
        }
    });
    let level_pills = UserLevel::ALL.into_iter().map(|value| {
        let mut answers = answers;
        rsx! {
            button {
                class: if current.level == value { "pill active" } else { "pill" },
                r#type: "button",
                onclick: move |_| answers.write().level = value,
                "{value.title()}"
            }
        }
    });
    let band_pills = TargetBand::ALL.into_iter().map(|value| {
        let mut answers = answers;
        rsx! {
            button {
                class: if current.target_band == value { "pill active" } else { "pill" },
                r#type: "button",
                onclick: move |_| answers.write().target_band = value,
                "{value.title()}"
            }
        }
    });

    rsx! {
        div { class: "page intake",
            header {
                h2 { "Let's personalize your practice" }
                p { class: "muted", "Answer a few quick questions to set your starting point." }
            }
            section { class: "question-block",
                h3 { "Have you taken the SAT before?" }
                div { class: "pill-row", {history_pills} }
            }
            section { class: "question-block",
                h3 { "Your current SAT Math level" }
                div { class: "pill-row", {level_pills} }
                p { class: "muted", "This helps us choose the right difficulty." }
            }
            section { class: "question-block",
                h3 { "Your target SAT Math score" }
                div { class: "pill-row", {band_pills} }
                p { class: "muted", "You can change this anytime later." }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                disabled: saving(),
                onclick: on_continue,
                "Continue"
            }
        }
    }
}
