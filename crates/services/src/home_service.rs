use sprint_core::model::{
    FocusSet, HomeFeed, HomeSession, PracticeMode, PracticeSessionConfig, Recommendation,
};

/// Serves the home tab's feed and the session its focus card launches.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeService;

impl HomeService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn feed(&self) -> HomeFeed {
        HomeFeed {
            greeting_title: "Today's Focus".to_string(),
            greeting_subtitle: "Let's make progress in SAT Math".to_string(),
            today_hint: "Short sessions beat long marathons".to_string(),
            focus: FocusSet {
                title: "Mini Set · Mixed Topics".to_string(),
                minutes: 12,
                questions: 10,
            },
            continue_sessions: vec![
                HomeSession::new("Linear Equations", 8, 15),
                HomeSession::new("Mini Set · Mixed", 3, 10),
            ],
            recommendations: vec![
                Recommendation::new(
                    "Systems of Equations",
                    "Algebra • 10 questions",
                    "function",
                    "MED",
                ),
                Recommendation::new("Geometry Drills", "Triangles & circles", "triangle", "EASY"),
                Recommendation::new(
                    "Word Problems",
                    "Translate text into equations",
                    "text.book.closed",
                    "HARD",
                ),
            ],
            weekly_questions: 45,
            weekly_goal_questions: 100,
        }
    }

    /// Session config behind the "Start" button on the focus card.
    #[must_use]
    pub fn focus_session(&self, focus: &FocusSet) -> PracticeSessionConfig {
        PracticeSessionConfig::mini_set(focus.title.clone(), focus.questions, focus.minutes)
    }

    /// Untimed session picking up where a "Continue" card left off.
    #[must_use]
    pub fn continue_session(&self, session: &HomeSession) -> PracticeSessionConfig {
        PracticeSessionConfig {
            mode: PracticeMode::Topic,
            title: session.title.clone(),
            subtitle: session.detail(),
            question_count: session.remaining().max(1),
            time_limit_secs: None,
            show_explanations: true,
            shuffle: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_matches_home_cards() {
        let feed = HomeService::new().feed();
        assert_eq!(feed.focus.minutes_text(), "12 min");
        assert_eq!(feed.focus.questions_text(), "10 questions");
        assert_eq!(feed.continue_sessions[0].detail(), "8/15 questions");
        assert_eq!(feed.recommendations.len(), 3);
        assert_eq!(feed.weekly_text(), "45 questions this week");
        assert!((feed.weekly_progress() - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn focus_session_is_timed() {
        let service = HomeService::new();
        let feed = service.feed();
        let config = service.focus_session(&feed.focus);
        assert_eq!(config.question_count, 10);
        assert_eq!(config.time_limit_secs, Some(720));
        assert_eq!(config.title, "Mini Set · Mixed Topics");
    }

    #[test]
    fn continue_session_covers_remaining_questions() {
        let service = HomeService::new();
        let feed = service.feed();
        let config = service.continue_session(&feed.continue_sessions[0]);
        assert_eq!(config.question_count, 7);
        assert_eq!(config.time_limit_secs, None);
        assert_eq!(config.subtitle, "8/15 questions");
    }
}
