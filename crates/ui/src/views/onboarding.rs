use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{OnboardingPager, PagerStep};

#[component]
pub fn OnboardingView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut pager = use_signal(OnboardingPager::default);
    let error = use_signal(|| None::<ViewError>);

    let finish = {
        let flow = ctx.flow();
        use_callback(move |()| {
            let flow = flow.clone();
            let mut error = error;
            spawn(async move {
                if let Err(err) = flow.finish_onboarding().await {
                    warn!(error = %err, "finish_onboarding failed");
                    error.set(Some(ViewError::Save));
                }
            });
        })
    };

    let current = pager();
    let page = current.page();
    let dots = current.dots().into_iter().map(|active| {
        let class = if active { "dot active" } else { "dot" };
        rsx! { span { class: "{class}" } }
    });

    rsx! {
        div { class: "page onboarding",
            header { class: "onboarding-top",
                span { class: "brand", "SAT Sprint" }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| finish.call(()),
                    "Skip"
                }
            }
            div { class: "onboarding-page", "data-image": page.image,
                h2 { "{page.title}" }
                p { class: "muted", "{page.subtitle}" }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            footer { class: "onboarding-bottom",
                div { class: "dots", {dots} }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: current.is_first(),
                    onclick: move |_| pager.write().back(),
                    "Back"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let step = pager.write().advance();
                        if step == PagerStep::Finished {
                            finish.call(());
                        }
                    },
                    "{current.primary_title()}"
                }
            }
        }
    }
}
