use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{minutes_text, percent_text, progress_ratio};
use crate::session::SessionResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTheme {
    #[default]
    System,
    Light,
    Dark,
}

impl ProfileTheme {
    pub const ALL: [ProfileTheme; 3] = [ProfileTheme::System, ProfileTheme::Light, ProfileTheme::Dark];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("target score must be 400..=800 in steps of 10")]
    InvalidTargetScore,
    #[error("daily goal must be 5..=180 minutes in steps of 5")]
    InvalidDailyGoal,
}

/// User-editable profile settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    name: String,
    target_score: u32,
    daily_goal_minutes: u32,
    notifications_enabled: bool,
    haptics_enabled: bool,
    theme: ProfileTheme,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Izbassar".to_string(),
            target_score: 780,
            daily_goal_minutes: 20,
            notifications_enabled: true,
            haptics_enabled: true,
            theme: ProfileTheme::System,
        }
    }
}

/// Unvalidated edit of [`ProfileSettings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSettingsDraft {
    pub name: String,
    pub target_score: u32,
    pub daily_goal_minutes: u32,
    pub notifications_enabled: bool,
    pub haptics_enabled: bool,
    pub theme: ProfileTheme,
}

impl ProfileSettingsDraft {
    pub const TARGET_SCORE: RangeInclusive<u32> = 400..=800;
    pub const TARGET_SCORE_STEP: u32 = 10;
    pub const DAILY_GOAL: RangeInclusive<u32> = 5..=180;
    pub const DAILY_GOAL_STEP: u32 = 5;

    /// Validate and normalize the draft into settings.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the name is blank or a numeric field is out
    /// of range or off-step.
    pub fn validate(self) -> Result<ProfileSettings, ProfileError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !Self::TARGET_SCORE.contains(&self.target_score)
            || self.target_score % Self::TARGET_SCORE_STEP != 0
        {
            return Err(ProfileError::InvalidTargetScore);
        }
        if !Self::DAILY_GOAL.contains(&self.daily_goal_minutes)
            || self.daily_goal_minutes % Self::DAILY_GOAL_STEP != 0
        {
            return Err(ProfileError::InvalidDailyGoal);
        }

        Ok(ProfileSettings {
            name,
            target_score: self.target_score,
            daily_goal_minutes: self.daily_goal_minutes,
            notifications_enabled: self.notifications_enabled,
            haptics_enabled: self.haptics_enabled,
            theme: self.theme,
        })
    }

    pub fn step_target_score(&mut self, up: bool) {
        self.target_score = step_within(
            self.target_score,
            Self::TARGET_SCORE_STEP,
            &Self::TARGET_SCORE,
            up,
        );
    }

    pub fn step_daily_goal(&mut self, up: bool) {
        self.daily_goal_minutes = step_within(
            self.daily_goal_minutes,
            Self::DAILY_GOAL_STEP,
            &Self::DAILY_GOAL,
            up,
        );
    }
}

fn step_within(value: u32, step: u32, range: &RangeInclusive<u32>, up: bool) -> u32 {
    let next = if up {
        value.saturating_add(step)
    } else {
        value.saturating_sub(step)
    };
    next.clamp(*range.start(), *range.end())
}

impl ProfileSettings {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn daily_goal_minutes(&self) -> u32 {
        self.daily_goal_minutes
    }

    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    #[must_use]
    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    #[must_use]
    pub fn theme(&self) -> ProfileTheme {
        self.theme
    }

    #[must_use]
    pub fn to_draft(&self) -> ProfileSettingsDraft {
        ProfileSettingsDraft {
            name: self.name.clone(),
            target_score: self.target_score,
            daily_goal_minutes: self.daily_goal_minutes,
            notifications_enabled: self.notifications_enabled,
            haptics_enabled: self.haptics_enabled,
            theme: self.theme,
        }
    }

    /// Up to two initials, uppercased.
    #[must_use]
    pub fn monogram(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words
            .next()
            .and_then(|word| word.chars().next())
            .map_or_else(|| "I".to_string(), |ch| ch.to_string());
        let second = words
            .next()
            .and_then(|word| word.chars().next())
            .map(|ch| ch.to_string())
            .unwrap_or_default();
        format!("{first}{second}").to_uppercase()
    }
}

/// Practice totals shown on the profile tab.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_solved: u32,
    pub accuracy: f64,
    pub total_minutes: u32,
    pub weekly_minutes: u32,
    pub weekly_goal_minutes: u32,
    pub today_minutes: u32,
    pub streak_days: u32,
}

impl Default for ProgressStats {
    fn default() -> Self {
        Self {
            total_solved: 324,
            accuracy: 0.84,
            total_minutes: 620,
            weekly_minutes: 85,
            weekly_goal_minutes: 120,
            today_minutes: 10,
            streak_days: 6,
        }
    }
}

impl ProgressStats {
    /// Zero everything except the weekly goal.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            total_solved: 0,
            accuracy: 0.0,
            total_minutes: 0,
            weekly_minutes: 0,
            today_minutes: 0,
            streak_days: 0,
            weekly_goal_minutes: self.weekly_goal_minutes,
        }
    }

    /// Fold a finished session into the totals. Accuracy is weighted by the
    /// number of answered questions; untimed sessions add no minutes.
    #[must_use]
    pub fn record_session(self, result: &SessionResult) -> Self {
        if result.answered == 0 {
            return self;
        }
        let solved = self.total_solved.saturating_add(result.answered);
        let previous_correct = self.accuracy * f64::from(self.total_solved);
        let accuracy = (previous_correct + f64::from(result.correct)) / f64::from(solved);
        let minutes = result.elapsed_secs.map_or(0, |secs| secs.div_ceil(60));

        Self {
            total_solved: solved,
            accuracy,
            total_minutes: self.total_minutes.saturating_add(minutes),
            weekly_minutes: self.weekly_minutes.saturating_add(minutes),
            today_minutes: self.today_minutes.saturating_add(minutes),
            ..self
        }
    }
}

/// Settings plus progress, with the derived texts the profile tab shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub settings: ProfileSettings,
    pub progress: ProgressStats,
}

impl Profile {
    #[must_use]
    pub fn accuracy_text(&self) -> String {
        percent_text(self.progress.accuracy)
    }

    #[must_use]
    pub fn total_time_text(&self) -> String {
        minutes_text(self.progress.total_minutes)
    }

    #[must_use]
    pub fn weekly_progress(&self) -> f64 {
        progress_ratio(
            self.progress.weekly_minutes,
            self.progress.weekly_goal_minutes,
        )
    }

    #[must_use]
    pub fn daily_progress(&self) -> f64 {
        progress_ratio(
            self.progress.today_minutes,
            self.settings.daily_goal_minutes,
        )
    }

    #[must_use]
    pub fn daily_progress_text(&self) -> String {
        format!(
            "{}/{}m",
            self.progress.today_minutes, self.settings.daily_goal_minutes
        )
    }

    #[must_use]
    pub fn weekly_hint(&self) -> &'static str {
        let progress = self.weekly_progress();
        if progress >= 1.0 {
            "Goal reached. Keep going for mastery."
        } else if progress >= 0.65 {
            "Nice pace. A bit more to hit your goal."
        } else {
            "Small sessions daily beat long rare sessions."
        }
    }

    #[must_use]
    pub fn level_title(&self) -> &'static str {
        match self.progress.total_solved {
            0..50 => "Beginner",
            50..200 => "Builder",
            200..500 => "Confident",
            _ => "Advanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProfileSettingsDraft {
        ProfileSettings::default().to_draft()
    }

    #[test]
    fn validate_trims_name() {
        let settings = ProfileSettingsDraft {
            name: "  Ada Lovelace ".to_string(),
            ..draft()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.name(), "Ada Lovelace");
        assert_eq!(settings.monogram(), "AL");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = ProfileSettingsDraft {
            name: "   ".to_string(),
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ProfileError::EmptyName);
    }

    #[test]
    fn validate_rejects_off_step_values() {
        let err = ProfileSettingsDraft {
            target_score: 785,
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ProfileError::InvalidTargetScore);

        let err = ProfileSettingsDraft {
            daily_goal_minutes: 200,
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ProfileError::InvalidDailyGoal);
    }

    #[test]
    fn steppers_stay_in_range() {
        let mut d = draft();
        for _ in 0..10 {
            d.step_target_score(true);
        }
        assert_eq!(d.target_score, 800);
        d.daily_goal_minutes = 5;
        d.step_daily_goal(false);
        assert_eq!(d.daily_goal_minutes, 5);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn monogram_falls_back_for_empty_name() {
        let settings = ProfileSettings {
            name: String::new(),
            ..ProfileSettings::default()
        };
        assert_eq!(settings.monogram(), "I");
        assert_eq!(ProfileSettings::default().monogram(), "I");
    }

    #[test]
    fn derived_texts() {
        let profile = Profile {
            settings: ProfileSettings::default(),
            progress: ProgressStats::default(),
        };
        assert_eq!(profile.accuracy_text(), "84%");
        assert_eq!(profile.total_time_text(), "10h 20m");
        assert_eq!(profile.daily_progress_text(), "10/20m");
        assert!((profile.daily_progress() - 0.5).abs() < f64::EPSILON);
        assert_eq!(profile.weekly_hint(), "Nice pace. A bit more to hit your goal.");
        assert_eq!(profile.level_title(), "Confident");
    }

    #[test]
    fn reset_keeps_weekly_goal() {
        let progress = ProgressStats::default().reset();
        assert_eq!(progress.total_solved, 0);
        assert_eq!(progress.streak_days, 0);
        assert_eq!(progress.weekly_goal_minutes, 120);

        let profile = Profile {
            settings: ProfileSettings::default(),
            progress,
        };
        assert_eq!(profile.level_title(), "Beginner");
        assert_eq!(
            profile.weekly_hint(),
            "Small sessions daily beat long rare sessions."
        );
    }

    #[test]
    fn record_session_weights_accuracy() {
        let progress = ProgressStats::default().reset().record_session(&SessionResult {
            total: 8,
            answered: 4,
            correct: 3,
            elapsed_secs: Some(61),
        });
        assert_eq!(progress.total_solved, 4);
        assert!((progress.accuracy - 0.75).abs() < 1e-9);
        assert_eq!(progress.today_minutes, 2);
        assert_eq!(progress.weekly_minutes, 2);

        let progress = progress.record_session(&SessionResult {
            total: 4,
            answered: 4,
            correct: 4,
            elapsed_secs: None,
        });
        assert_eq!(progress.total_solved, 8);
        assert!((progress.accuracy - 0.875).abs() < 1e-9);
        assert_eq!(progress.total_minutes, 2);
    }

    #[test]
    fn record_session_ignores_empty_result() {
        let before = ProgressStats::default();
        let after = before.record_session(&SessionResult {
            total: 10,
            answered: 0,
            correct: 0,
            elapsed_secs: Some(30),
        });
        assert_eq!(before, after);
    }
}
