use dioxus::prelude::*;
use sprint_core::model::PracticeSessionConfig;
use sprint_core::session::SessionResult;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{PracticeSessionPanel, ViewError};

const BULLETS: [&str; 4] = [
    "Takes about 6–8 minutes",
    "Optional and not graded",
    "Does not affect any score",
    "Helps set starting difficulty and daily plan",
];

#[component]
pub fn DiagnosticView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut running = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let flow_for_done = ctx.flow();
    let on_done = move |_result: SessionResult| {
        let flow = flow_for_done.clone();
        spawn(async move {
            if let Err(err) = flow.finish_diagnostic().await {
                warn!(error = %err, "finish_diagnostic failed");
                error.set(Some(ViewError::Save));
            }
        });
    };

    if running() {
        return rsx! {
            PracticeSessionPanel {
                config: PracticeSessionConfig::diagnostic(),
                on_done,
                on_close: move |()| running.set(false),
            }
        };
    }

    let flow = ctx.flow();
    let on_not_now = move |_: MouseEvent| {
        let flow = flow.clone();
        spawn(async move {
            if let Err(err) = flow.skip_diagnostic().await {
                warn!(error = %err, "skip_diagnostic failed");
                error.set(Some(ViewError::Save));
            }
        });
    };

    rsx! {
        div { class: "page diagnostic",
            h2 { "Quick diagnostic?" }
            p { class: "muted", "A short 6–8 minute check helps us personalize your practice plan." }
            ul { class: "card bullets",
                for bullet in BULLETS {
                    li { "{bullet}" }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| running.set(true),
                "Start"
            }
            button {
                class: "btn btn-secondary btn-block",
                r#type: "button",
                onclick: on_not_now,
                "Not now"
            }
            p { class: "muted small", "You can run the diagnostic anytime later from Practice." }
        }
    }
}
