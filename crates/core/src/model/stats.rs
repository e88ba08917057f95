use crate::format::{minutes_text, percent_text, seconds_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatsPeriod {
    #[default]
    Week,
    Month,
    All,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 3] = [StatsPeriod::Week, StatsPeriod::Month, StatsPeriod::All];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::All => "All",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatsOverview {
    pub solved: u32,
    pub accuracy: f64,
    pub time_minutes: u32,
    pub avg_seconds_per_question: u32,
}

impl StatsOverview {
    #[must_use]
    pub fn accuracy_text(&self) -> String {
        percent_text(self.accuracy)
    }

    #[must_use]
    pub fn time_text(&self) -> String {
        minutes_text(self.time_minutes)
    }

    #[must_use]
    pub fn avg_per_question_text(&self) -> String {
        seconds_text(self.avg_seconds_per_question)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityPoint {
    pub label: String,
    pub minutes: u32,
}

impl ActivityPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, minutes: u32) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopicAccuracy {
    pub title: String,
    pub accuracy: f64,
    pub solved: u32,
}

impl TopicAccuracy {
    #[must_use]
    pub fn new(title: impl Into<String>, accuracy: f64, solved: u32) -> Self {
        Self {
            title: title.into(),
            accuracy,
            solved,
        }
    }

    #[must_use]
    pub fn accuracy_text(&self) -> String {
        percent_text(self.accuracy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaceStats {
    pub avg_seconds_per_question: u32,
    /// Share of questions answered under a timer, `0.0..=1.0`.
    pub timed_share: f64,
    pub consistency_score: f64,
}

impl PaceStats {
    #[must_use]
    pub fn avg_time_text(&self) -> String {
        seconds_text(self.avg_seconds_per_question)
    }

    #[must_use]
    pub fn timed_split_text(&self) -> String {
        format!("{} timed", percent_text(self.timed_share))
    }

    #[must_use]
    pub fn consistency_score_text(&self) -> String {
        percent_text(self.consistency_score)
    }

    #[must_use]
    pub fn consistency_hint(&self) -> &'static str {
        if self.consistency_score >= 0.8 {
            "Very stable. Great exam readiness."
        } else if self.consistency_score >= 0.65 {
            "Decent. Reduce spikes by drilling weak types."
        } else {
            "Unstable. Do more timed micro-sets."
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakStats {
    pub days: u32,
    pub best: u32,
    pub this_week_sessions: u32,
}

impl StreakStats {
    #[must_use]
    pub fn message_title(&self) -> &'static str {
        if self.days >= 7 {
            "Strong streak"
        } else if self.days >= 3 {
            "Keep it alive"
        } else {
            "Restart momentum"
        }
    }

    #[must_use]
    pub fn message_subtitle(&self) -> &'static str {
        if self.days >= 7 {
            "You’re building a habit that pays off."
        } else if self.days >= 3 {
            "One short session today keeps progress moving."
        } else {
            "Start with 10 minutes, the hardest part is starting."
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsightKind {
    Win,
    Focus,
    Tip,
}

impl InsightKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Focus => "focus",
            Self::Tip => "tip",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub subtitle: String,
}

impl Insight {
    #[must_use]
    pub fn new(kind: InsightKind, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Everything the stats tab shows for one period.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub period: StatsPeriod,
    pub overview: StatsOverview,
    pub activity: Vec<ActivityPoint>,
    pub topic_accuracy: Vec<TopicAccuracy>,
    pub pace: PaceStats,
    pub streak: StreakStats,
    pub insights: Vec<Insight>,
}

impl StatsSnapshot {
    #[must_use]
    pub fn total_activity_minutes(&self) -> u32 {
        self.activity.iter().map(|point| point.minutes).sum()
    }

    #[must_use]
    pub fn activity_header_text(&self) -> String {
        match self.period {
            StatsPeriod::Week => format!("{} min", self.total_activity_minutes()),
            StatsPeriod::Month => "Last 30 days".to_string(),
            StatsPeriod::All => "All time".to_string(),
        }
    }

    #[must_use]
    pub fn activity_hint(&self) -> &'static str {
        let total = self.total_activity_minutes();
        if total >= 140 {
            "Strong consistency. Keep the rhythm."
        } else if total >= 70 {
            "Good. Add 1 short session to level up."
        } else {
            "Try 10–15 min daily to build momentum."
        }
    }

    #[must_use]
    pub fn best_topic(&self) -> Option<&TopicAccuracy> {
        self.topic_accuracy
            .iter()
            .max_by(|left, right| left.accuracy.total_cmp(&right.accuracy))
    }

    #[must_use]
    pub fn topic_header_text(&self) -> String {
        self.best_topic()
            .map_or_else(|| "—".to_string(), |best| format!("Best: {}", best.title))
    }

    /// Bar height for an activity point relative to the busiest one.
    #[must_use]
    pub fn activity_ratio(&self, point: &ActivityPoint) -> f64 {
        let max = self
            .activity
            .iter()
            .map(|point| point.minutes)
            .max()
            .unwrap_or(0);
        crate::format::progress_ratio(point.minutes, max)
    }
}
