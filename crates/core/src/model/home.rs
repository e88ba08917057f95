use crate::format::progress_ratio;

/// An unfinished session shown in the "Continue" row.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeSession {
    pub title: String,
    pub answered: u32,
    pub total: u32,
}

impl HomeSession {
    #[must_use]
    pub fn new(title: impl Into<String>, answered: u32, total: u32) -> Self {
        Self {
            title: title.into(),
            answered,
            total,
        }
    }

    #[must_use]
    pub fn detail(&self) -> String {
        format!("{}/{} questions", self.answered, self.total)
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        progress_ratio(self.answered, self.total)
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.answered)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub subtitle: String,
    pub symbol: String,
    pub level: String,
}

impl Recommendation {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        symbol: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            symbol: symbol.into(),
            level: level.into(),
        }
    }
}

/// The recommended session on the big focus card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusSet {
    pub title: String,
    pub minutes: u32,
    pub questions: u32,
}

impl FocusSet {
    #[must_use]
    pub fn minutes_text(&self) -> String {
        format!("{} min", self.minutes)
    }

    #[must_use]
    pub fn questions_text(&self) -> String {
        format!("{} questions", self.questions)
    }
}

/// Everything the home tab shows.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeFeed {
    pub greeting_title: String,
    pub greeting_subtitle: String,
    pub today_hint: String,
    pub focus: FocusSet,
    pub continue_sessions: Vec<HomeSession>,
    pub recommendations: Vec<Recommendation>,
    pub weekly_questions: u32,
    pub weekly_goal_questions: u32,
}

impl HomeFeed {
    #[must_use]
    pub fn weekly_progress(&self) -> f64 {
        progress_ratio(self.weekly_questions, self.weekly_goal_questions)
    }

    #[must_use]
    pub fn weekly_text(&self) -> String {
        format!("{} questions this week", self.weekly_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_detail_and_progress() {
        let session = HomeSession::new("Linear Equations", 8, 15);
        assert_eq!(session.detail(), "8/15 questions");
        assert!((session.progress() - 8.0 / 15.0).abs() < f64::EPSILON);
        assert_eq!(session.remaining(), 7);
    }

    #[test]
    fn focus_texts() {
        let focus = FocusSet {
            title: "Mini Set".to_string(),
            minutes: 12,
            questions: 10,
        };
        assert_eq!(focus.minutes_text(), "12 min");
        assert_eq!(focus.questions_text(), "10 questions");
    }
}
