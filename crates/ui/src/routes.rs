use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use sprint_core::Stage;

use crate::context::AppContext;
use crate::views::{
    DiagnosticView, HomeView, IntakeView, OnboardingView, PracticeView, ProfileView, StatsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(FlowGate)]
        #[layout(TabsLayout)]
            #[route("/", HomeView)] Home {},
            #[route("/stats", StatsView)] Stats {},
            #[route("/practice", PracticeView)] Practice {},
            #[route("/profile", ProfileView)] Profile {},
}

/// Shows the first-run screen for the current stage, or the tabs once the
/// funnel is complete.
#[component]
fn FlowGate() -> Element {
    let stage = use_flow_stage();

    match stage() {
        Stage::Onboarding => rsx! { OnboardingView {} },
        Stage::Intake => rsx! { IntakeView {} },
        Stage::Diagnostic => rsx! { DiagnosticView {} },
        Stage::Main => rsx! { Outlet::<Route> {} },
    }
}

/// Current stage, kept in sync with the flow service's watch channel.
pub fn use_flow_stage() -> Signal<Stage> {
    let ctx = use_context::<AppContext>();
    let flow = ctx.flow();
    let mut stage = use_signal(|| flow.stage());

    use_future(move || {
        let mut rx = flow.subscribe();
        async move {
            stage.set(*rx.borrow_and_update());
            while rx.changed().await.is_ok() {
                let next = *rx.borrow_and_update();
                stage.set(next);
            }
        }
    });

    stage
}

#[component]
fn TabsLayout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            TabBar {}
        }
    }
}

#[component]
fn TabBar() -> Element {
    rsx! {
        nav { class: "tabbar",
            Link { class: "tab", active_class: "active", to: Route::Home {}, "Home" }
            Link { class: "tab", active_class: "active", to: Route::Stats {}, "Stats" }
            Link { class: "tab", active_class: "active", to: Route::Practice {}, "Practice" }
            Link { class: "tab", active_class: "active", to: Route::Profile {}, "Profile" }
        }
    }
}
