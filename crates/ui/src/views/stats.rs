use dioxus::prelude::*;
use dioxus_router::use_navigator;
use sprint_core::model::StatsPeriod;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{map_activity_bars, map_topic_rows};

#[component]
pub fn StatsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let stats = ctx.stats();
    let mut period = use_signal(StatsPeriod::default);

    let snapshot = stats.snapshot(period());
    let bars = map_activity_bars(&snapshot);
    let topics = map_topic_rows(&snapshot);

    let period_tabs = StatsPeriod::ALL.into_iter().map(|value| {
        let mut period = period;
        rsx! {
            button {
                class: if period() == value { "segment active" } else { "segment" },
                r#type: "button",
                onclick: move |_| period.set(value),
                "{value.title()}"
            }
        }
    });

    rsx! {
        div { class: "page stats",
            h2 { "Statistics" }
            div { class: "segmented", {period_tabs} }

            section { class: "tiles",
                div { class: "tile",
                    span { class: "tile-value", "{snapshot.overview.solved}" }
                    span { class: "tile-label", "Solved" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{snapshot.overview.accuracy_text()}" }
                    span { class: "tile-label", "Accuracy" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{snapshot.overview.time_text()}" }
                    span { class: "tile-label", "Time" }
                }
                div { class: "tile",
                    span { class: "tile-value", "{snapshot.overview.avg_per_question_text()}" }
                    span { class: "tile-label", "Avg / question" }
                }
            }

            section { class: "card activity",
                div { class: "section-header",
                    h3 { "Activity" }
                    span { class: "muted", "{snapshot.activity_header_text()}" }
                }
                div { class: "bars",
                    for bar in bars {
                        div { class: "bar", title: "{bar.minutes_text}",
                            div { class: "bar-fill", style: "height: {bar.height_percent}%" }
                            span { class: "bar-label", "{bar.label}" }
                        }
                    }
                }
                p { class: "hint", "{snapshot.activity_hint()}" }
            }

            section { class: "card topics",
                div { class: "section-header",
                    h3 { "Topic accuracy" }
                    span { class: "muted", "{snapshot.topic_header_text()}" }
                }
                for row in topics {
                    div { class: if row.is_best { "topic-row best" } else { "topic-row" },
                        span { class: "topic-title", "{row.title}" }
                        div { class: "progress",
                            div { class: "progress-fill", style: "width: {row.width_percent}%" }
                        }
                        span { "{row.accuracy_text}" }
                        span { class: "muted", "{row.solved_text}" }
                    }
                }
            }

            section { class: "card pace",
                h3 { "Pace" }
                p { "Avg time: {snapshot.pace.avg_time_text()}" }
                p { "{snapshot.pace.timed_split_text()}" }
                p { "Consistency: {snapshot.pace.consistency_score_text()}" }
                p { class: "hint", "{snapshot.pace.consistency_hint()}" }
            }

            section { class: "card streak",
                h3 { "{snapshot.streak.message_title()}" }
                p { class: "muted", "{snapshot.streak.message_subtitle()}" }
                p { "{snapshot.streak.days} day streak • best {snapshot.streak.best}" }
                p { "{snapshot.streak.this_week_sessions} sessions this week" }
            }

            section { class: "insights",
                h3 { "Insights" }
                for insight in snapshot.insights.iter() {
                    div { class: "insight {insight.kind.as_str()}",
                        h4 { "{insight.title}" }
                        p { class: "muted", "{insight.subtitle}" }
                    }
                }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Practice {});
                },
                "Practice now"
            }
        }
    }
}
