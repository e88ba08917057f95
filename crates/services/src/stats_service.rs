use sprint_core::model::{
    ActivityPoint, Insight, InsightKind, PaceStats, StatsOverview, StatsPeriod, StatsSnapshot,
    StreakStats, TopicAccuracy,
};

/// Serves the statistics tab.
///
/// Snapshots are fixed sample figures per period until practice history is
/// stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsService;

impl StatsService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn snapshot(&self, period: StatsPeriod) -> StatsSnapshot {
        match period {
            StatsPeriod::Week => week(),
            StatsPeriod::Month => month(),
            StatsPeriod::All => all_time(),
        }
    }
}

fn topics(rows: [(f64, u32); 5]) -> Vec<TopicAccuracy> {
    ["Algebra", "Geometry", "Word Problems", "Functions", "Stats"]
        .into_iter()
        .zip(rows)
        .map(|(title, (accuracy, solved))| TopicAccuracy::new(title, accuracy, solved))
        .collect()
}

fn activity(points: &[(&str, u32)]) -> Vec<ActivityPoint> {
    points
        .iter()
        .map(|(label, minutes)| ActivityPoint::new(*label, *minutes))
        .collect()
}

fn week() -> StatsSnapshot {
    StatsSnapshot {
        period: StatsPeriod::Week,
        overview: StatsOverview {
            solved: 124,
            accuracy: 0.84,
            time_minutes: 210,
            avg_seconds_per_question: 54,
        },
        activity: activity(&[
            ("Mon", 15),
            ("Tue", 30),
            ("Wed", 20),
            ("Thu", 25),
            ("Fri", 10),
            ("Sat", 50),
            ("Sun", 60),
        ]),
        topic_accuracy: topics([(0.86, 42), (0.78, 18), (0.74, 21), (0.88, 27), (0.82, 16)]),
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
        insights: vec![
            Insight::new(
                InsightKind::Win,
                "Functions is your strength",
                "Accuracy 88%, keep speed up.",
            ),
            Insight::new(
                InsightKind::Focus,
                "Improve Word Problems",
                "74% accuracy, do 1 drill daily.",
            ),
            Insight::new(
                InsightKind::Tip,
                "Pace is stable",
                "Consistency score 72%. Aim for 80%+.",
            ),
        ],
    }
}

fn month() -> StatsSnapshot {
    StatsSnapshot {
        period: StatsPeriod::Month,
        overview: StatsOverview {
            solved: 512,
            accuracy: 0.81,
            time_minutes: 920,
            avg_seconds_per_question: 58,
        },
        activity: activity(&[("W1", 180), ("W2", 220), ("W3", 160), ("W4", 210)]),
        topic_accuracy: topics([(0.82, 190), (0.77, 86), (0.72, 110), (0.85, 78), (0.83, 48)]),
        pace: PaceStats {
            avg_seconds_per_question: 58,
            timed_share: 0.55,
            consistency_score: 0.64,
        },
        streak: StreakStats {
            days: 4,
            best: 12,
            this_week_sessions: 4,
        },
        insights: vec![
            Insight::new(
                InsightKind::Focus,
                "Word Problems still lagging",
                "Main source of mistakes.",
            ),
            Insight::new(
                InsightKind::Tip,
                "Add 2 timed sets / week",
                "Raise timed share to ~65%.",
            ),
            Insight::new(InsightKind::Win, "Good volume", "500+ solved in 30 days."),
        ],
    }
}

fn all_time() -> StatsSnapshot {
    StatsSnapshot {
        period: StatsPeriod::All,
        overview: StatsOverview {
            solved: 2140,
            accuracy: 0.80,
            time_minutes: 4620,
            avg_seconds_per_question: 60,
        },
        activity: activity(&[("2025", 1800), ("2026", 2820)]),
        topic_accuracy: topics([(0.79, 900), (0.76, 420), (0.73, 520), (0.84, 210), (0.81, 90)]),
        pace: PaceStats {
            avg_seconds_per_question: 60,
            timed_share: 0.50,
            consistency_score: 0.58,
        },
        streak: StreakStats {
            days: 2,
            best: 12,
            this_week_sessions: 2,
        },
        insights: vec![
            Insight::new(
                InsightKind::Tip,
                "Consistency is the lever",
                "Small daily sessions beat occasional marathons.",
            ),
            Insight::new(
                InsightKind::Focus,
                "Geometry needs reps",
                "Focus on formulas + diagrams.",
            ),
            Insight::new(
                InsightKind::Win,
                "Solid base",
                "2k+ problems solved, you're building mastery.",
            ),
        ],
    }
}
