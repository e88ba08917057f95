use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PracticeMode {
    #[default]
    Topic,
    Timed,
    Full,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [PracticeMode::Topic, PracticeMode::Timed, PracticeMode::Full];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Timed => "Timed",
            Self::Full => "Full",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Topic => "Focus one skill",
            Self::Timed => "Short exam pressure",
            Self::Full => "Full SAT-style",
        }
    }

    #[must_use]
    pub fn header_left(self) -> &'static str {
        match self {
            Self::Topic => "Build fundamentals",
            Self::Timed => "Train pacing",
            Self::Full => "Simulate test",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PracticeTopic {
    #[default]
    Algebra,
    Geometry,
    WordProblems,
    Functions,
    Stats,
}

impl PracticeTopic {
    pub const ALL: [PracticeTopic; 5] = [
        PracticeTopic::Algebra,
        PracticeTopic::Geometry,
        PracticeTopic::WordProblems,
        PracticeTopic::Functions,
        PracticeTopic::Stats,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Algebra => "Algebra",
            Self::Geometry => "Geometry",
            Self::WordProblems => "Word Problems",
            Self::Functions => "Functions",
            Self::Stats => "Statistics",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PracticeDifficulty {
    Easy,
    #[default]
    Mixed,
    Hard,
}

impl PracticeDifficulty {
    pub const ALL: [PracticeDifficulty; 3] = [
        PracticeDifficulty::Easy,
        PracticeDifficulty::Mixed,
        PracticeDifficulty::Hard,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Mixed => "Mixed",
            Self::Hard => "Hard",
        }
    }
}

/// Length presets for a simulated full section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FullSectionPreset {
    #[default]
    Mini,
    Standard,
}

impl FullSectionPreset {
    pub const ALL: [FullSectionPreset; 2] = [FullSectionPreset::Mini, FullSectionPreset::Standard];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Mini => "Mini",
            Self::Standard => "Standard",
        }
    }

    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            Self::Mini => "20 questions • 25 minutes",
            Self::Standard => "44 questions • 70 minutes",
        }
    }

    #[must_use]
    pub fn question_count(self) -> u32 {
        match self {
            Self::Mini => 20,
            Self::Standard => 44,
        }
    }

    #[must_use]
    pub fn time_minutes(self) -> u32 {
        match self {
            Self::Mini => 25,
            Self::Standard => 70,
        }
    }
}

/// Everything a practice session needs to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeSessionConfig {
    pub mode: PracticeMode,
    pub title: String,
    pub subtitle: String,
    pub question_count: u32,
    pub time_limit_secs: Option<u32>,
    pub show_explanations: bool,
    pub shuffle: bool,
}

impl PracticeSessionConfig {
    pub const DIAGNOSTIC_QUESTIONS: u32 = 8;
    pub const DIAGNOSTIC_MINUTES: u32 = 8;

    /// The optional placement check offered after intake.
    #[must_use]
    pub fn diagnostic() -> Self {
        Self {
            mode: PracticeMode::Timed,
            title: "Quick Diagnostic".to_string(),
            subtitle: format!("Mixed skills • {} questions", Self::DIAGNOSTIC_QUESTIONS),
            question_count: Self::DIAGNOSTIC_QUESTIONS,
            time_limit_secs: Some(Self::DIAGNOSTIC_MINUTES * 60),
            show_explanations: false,
            shuffle: true,
        }
    }

    /// A timed mixed set, as launched from the home focus card.
    #[must_use]
    pub fn mini_set(title: impl Into<String>, questions: u32, minutes: u32) -> Self {
        Self {
            mode: PracticeMode::Timed,
            title: title.into(),
            subtitle: format!("Mixed • {questions} questions"),
            question_count: questions,
            time_limit_secs: Some(minutes * 60),
            show_explanations: true,
            shuffle: true,
        }
    }

    /// An untimed topic drill.
    #[must_use]
    pub fn topic_drill(topic: PracticeTopic, questions: u32) -> Self {
        Self {
            mode: PracticeMode::Topic,
            title: "Topic Drill".to_string(),
            subtitle: topic.title().to_string(),
            question_count: questions,
            time_limit_secs: None,
            show_explanations: true,
            shuffle: true,
        }
    }
}

/// Practice tab configuration. Steppers clamp into their ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeSetup {
    pub mode: PracticeMode,
    pub show_explanations: bool,
    pub shuffle: bool,
    pub topic: PracticeTopic,
    pub difficulty: PracticeDifficulty,
    question_count: u32,
    time_limit_minutes: u32,
    preset_index: usize,
}

impl Default for PracticeSetup {
    fn default() -> Self {
        Self {
            mode: PracticeMode::Topic,
            show_explanations: true,
            shuffle: true,
            topic: PracticeTopic::Algebra,
            difficulty: PracticeDifficulty::Mixed,
            question_count: 10,
            time_limit_minutes: 12,
            preset_index: 0,
        }
    }
}

impl PracticeSetup {
    pub const TOPIC_QUESTIONS: RangeInclusive<u32> = 5..=30;
    pub const TIMED_QUESTIONS: RangeInclusive<u32> = 5..=25;
    pub const TIME_LIMIT_MINUTES: RangeInclusive<u32> = 5..=30;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn question_range(&self) -> RangeInclusive<u32> {
        match self.mode {
            PracticeMode::Timed => Self::TIMED_QUESTIONS,
            PracticeMode::Topic | PracticeMode::Full => Self::TOPIC_QUESTIONS,
        }
    }

    /// Question count as used by the current mode.
    #[must_use]
    pub fn question_count(&self) -> u32 {
        let range = self.question_range();
        self.question_count.clamp(*range.start(), *range.end())
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    #[must_use]
    pub fn section_preset(&self) -> FullSectionPreset {
        FullSectionPreset::ALL[self.preset_index.min(FullSectionPreset::ALL.len() - 1)]
    }

    pub fn set_question_count(&mut self, count: u32) {
        let range = self.question_range();
        self.question_count = count.clamp(*range.start(), *range.end());
    }

    pub fn increment_questions(&mut self) {
        self.set_question_count(self.question_count().saturating_add(1));
    }

    pub fn decrement_questions(&mut self) {
        self.set_question_count(self.question_count().saturating_sub(1));
    }

    pub fn set_time_limit_minutes(&mut self, minutes: u32) {
        let range = Self::TIME_LIMIT_MINUTES;
        self.time_limit_minutes = minutes.clamp(*range.start(), *range.end());
    }

    pub fn increment_time(&mut self) {
        self.set_time_limit_minutes(self.time_limit_minutes.saturating_add(1));
    }

    pub fn decrement_time(&mut self) {
        self.set_time_limit_minutes(self.time_limit_minutes.saturating_sub(1));
    }

    pub fn next_preset(&mut self) {
        self.preset_index = (self.preset_index + 1).min(FullSectionPreset::ALL.len() - 1);
    }

    pub fn previous_preset(&mut self) {
        self.preset_index = self.preset_index.saturating_sub(1);
    }

    #[must_use]
    pub fn mode_subtitle(&self) -> &'static str {
        self.mode.subtitle()
    }

    #[must_use]
    pub fn header_left(&self) -> &'static str {
        self.mode.header_left()
    }

    #[must_use]
    pub fn header_right(&self) -> String {
        match self.mode {
            PracticeMode::Topic => format!("{} questions", self.question_count()),
            PracticeMode::Timed => {
                format!("{} Q • {}m", self.question_count(), self.time_limit_minutes)
            }
            PracticeMode::Full => {
                let preset = self.section_preset();
                format!("{} Q • {}m", preset.question_count(), preset.time_minutes())
            }
        }
    }

    #[must_use]
    pub fn session_config(&self) -> PracticeSessionConfig {
        match self.mode {
            PracticeMode::Topic => PracticeSessionConfig {
                mode: self.mode,
                title: "Topic Drill".to_string(),
                subtitle: self.topic.title().to_string(),
                question_count: self.question_count(),
                time_limit_secs: None,
                show_explanations: self.show_explanations,
                shuffle: self.shuffle,
            },
            PracticeMode::Timed => PracticeSessionConfig {
                mode: self.mode,
                title: "Timed Set".to_string(),
                subtitle: format!(
                    "{} • {} questions",
                    self.difficulty.title(),
                    self.question_count()
                ),
                question_count: self.question_count(),
                time_limit_secs: Some(self.time_limit_minutes * 60),
                show_explanations: self.show_explanations,
                shuffle: self.shuffle,
            },
            PracticeMode::Full => {
                let preset = self.section_preset();
                PracticeSessionConfig {
                    mode: self.mode,
                    title: "Full Section".to_string(),
                    subtitle: preset.detail().to_string(),
                    question_count: preset.question_count(),
                    time_limit_secs: Some(preset.time_minutes() * 60),
                    show_explanations: self.show_explanations,
                    shuffle: self.shuffle,
                }
            }
        }
    }
}
