mod home;
mod intake;
mod practice;
mod profile;
mod stats;

pub use home::{FocusSet, HomeFeed, HomeSession, Recommendation};
pub use intake::{IntakeAnswers, IntakeError, SatHistory, TargetBand, UserLevel};
pub use practice::{
    FullSectionPreset, PracticeDifficulty, PracticeMode, PracticeSessionConfig, PracticeSetup,
    PracticeTopic,
};
pub use profile::{
    Profile, ProfileError, ProfileSettings, ProfileSettingsDraft, ProfileTheme, ProgressStats,
};
pub use stats::{
    ActivityPoint, Insight, InsightKind, PaceStats, StatsOverview, StatsPeriod, StatsSnapshot,
    StreakStats, TopicAccuracy,
};
