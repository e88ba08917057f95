use sprint_core::format::percent;
use sprint_core::model::StatsSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityBarVm {
    pub label: String,
    pub minutes_text: String,
    /// Bar height in percent of the busiest point.
    pub height_percent: i64,
}

#[must_use]
pub fn map_activity_bars(snapshot: &StatsSnapshot) -> Vec<ActivityBarVm> {
    snapshot
        .activity
        .iter()
        .map(|point| ActivityBarVm {
            label: point.label.clone(),
            minutes_text: format!("{}m", point.minutes),
            height_percent: percent(snapshot.activity_ratio(point)),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub title: String,
    pub accuracy_text: String,
    pub solved_text: String,
    pub width_percent: i64,
    pub is_best: bool,
}

#[must_use]
pub fn map_topic_rows(snapshot: &StatsSnapshot) -> Vec<TopicRowVm> {
    let best = snapshot.best_topic().map(|topic| topic.title.as_str());
    snapshot
        .topic_accuracy
        .iter()
        .map(|topic| TopicRowVm {
            title: topic.title.clone(),
            accuracy_text: topic.accuracy_text(),
            solved_text: format!("{} solved", topic.solved),
            width_percent: percent(topic.accuracy.clamp(0.0, 1.0)),
            is_best: best == Some(topic.title.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprint_core::model::{
        ActivityPoint, PaceStats, StatsOverview, StatsPeriod, StreakStats, TopicAccuracy,
    };

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            period: StatsPeriod::Week,
            overview: StatsOverview::default(),
            activity: vec![ActivityPoint::new("Mon", 15), ActivityPoint::new("Tue", 60)],
            topic_accuracy: vec![
                TopicAccuracy::new("Algebra", 0.86, 42),
                TopicAccuracy::new("Functions", 0.88, 27),
            ],
            pace: PaceStats {
                avg_seconds_per_question: 54,
                timed_share: 0.62,
                consistency_score: 0.72,
            },
            streak: StreakStats {
                days: 6,
                best: 12,
                this_week_sessions: 5,
            },
            insights: Vec::new(),
        }
    }

    #[test]
    fn bars_scale_to_busiest_day() {
        let bars = map_activity_bars(&snapshot());
        assert_eq!(bars[0].height_percent, 25);
        assert_eq!(bars[1].height_percent, 100);
        assert_eq!(bars[1].minutes_text, "60m");
    }

    #[test]
    fn best_topic_is_flagged_once() {
        let rows = map_topic_rows(&snapshot());
        assert!(!rows[0].is_best);
        assert!(rows[1].is_best);
        assert_eq!(rows[1].accuracy_text, "88%");
        assert_eq!(rows[0].solved_text, "42 solved");
    }
}
