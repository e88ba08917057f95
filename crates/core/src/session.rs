//! Practice-session engine: question navigation, answer selection and the
//! optional countdown.
//!
//! The engine owns no timer. Whoever drives it calls [`PracticeSession::tick`]
//! once per second while [`PracticeSession::timer_running`] is true.

use crate::format::{countdown_text, percent_text};
use crate::model::PracticeSessionConfig;

/// Seconds at or below which the countdown is shown as low.
pub const LOW_TIME_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub detail: &'static str,
    pub choices: [Choice; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

const fn choices(texts: [&'static str; 4]) -> [Choice; 4] {
    [
        Choice { label: "A", text: texts[0] },
        Choice { label: "B", text: texts[1] },
        Choice { label: "C", text: texts[2] },
        Choice { label: "D", text: texts[3] },
    ]
}

/// Placeholder questions until a real bank exists.
pub const DEMO_BANK: [Question; 3] = [
    Question {
        prompt: "Solve: 3x + 5 = 20",
        detail: "Choose the best answer.",
        choices: choices(["x = 3", "x = 4", "x = 5", "x = 6"]),
        correct: 2,
        explanation: "Subtract 5 from both sides to get 3x = 15, then divide by 3: x = 5.",
    },
    Question {
        prompt: "If f(x)=2x+1, find f(4)",
        detail: "Choose the best answer.",
        choices: choices(["7", "8", "9", "10"]),
        correct: 2,
        explanation: "Substitute x = 4: f(4) = 2·4 + 1 = 9.",
    },
    Question {
        prompt: "A rectangle has area 48. If width is 6, what is length?",
        detail: "Choose the best answer.",
        choices: choices(["6", "7", "8", "9"]),
        correct: 2,
        explanation: "Area = width × length, so length = 48 ÷ 6 = 8.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown is running.
    Idle,
    Running { remaining: u32 },
    /// Time ran out; the session is now finished.
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub total: u32,
    pub answered: u32,
    pub correct: u32,
    /// Seconds spent, for timed sessions.
    pub elapsed_secs: Option<u32>,
}

impl SessionResult {
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.answered)
    }

    #[must_use]
    pub fn accuracy_text(&self) -> String {
        percent_text(self.accuracy())
    }

    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{}/{} correct", self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PracticeSession {
    config: PracticeSessionConfig,
    order: Vec<usize>,
    current_index: u32,
    selected: Option<usize>,
    answers: Vec<Option<usize>>,
    finished: bool,
    time_remaining: Option<u32>,
    timer_running: bool,
    elapsed_secs: u32,
}

impl PracticeSession {
    #[must_use]
    pub fn new(config: PracticeSessionConfig) -> Self {
        Self::with_bank_order(config, (0..DEMO_BANK.len()).collect())
    }

    /// Start with a specific ordering of the question bank.
    ///
    /// Out-of-range entries are dropped; an empty order falls back to the
    /// bank's natural order.
    #[must_use]
    pub fn with_bank_order(config: PracticeSessionConfig, order: Vec<usize>) -> Self {
        let mut order: Vec<usize> = order.into_iter().filter(|i| *i < DEMO_BANK.len()).collect();
        if order.is_empty() {
            order = (0..DEMO_BANK.len()).collect();
        }
        let total = config.question_count as usize;
        Self {
            time_remaining: config.time_limit_secs,
            config,
            order,
            current_index: 0,
            selected: None,
            answers: vec![None; total],
            finished: false,
            timer_running: false,
            elapsed_secs: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PracticeSessionConfig {
        &self.config
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.config.subtitle
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.config.question_count
    }

    #[must_use]
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// `"Q 3/10"`.
    #[must_use]
    pub fn position_text(&self) -> String {
        format!("Q {}/{}", self.current_index + 1, self.total())
    }

    #[must_use]
    pub fn question(&self) -> &'static Question {
        let slot = self.current_index as usize % self.order.len();
        &DEMO_BANK[self.order[slot]]
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    #[must_use]
    pub fn time_remaining_text(&self) -> Option<String> {
        self.time_remaining.map(countdown_text)
    }

    #[must_use]
    pub fn is_time_low(&self) -> bool {
        self.time_remaining.is_some_and(|t| t <= LOW_TIME_SECS)
    }

    #[must_use]
    pub fn show_explanation(&self) -> bool {
        self.config.show_explanations && self.selected.is_some()
    }

    #[must_use]
    pub fn explanation_text(&self) -> &'static str {
        self.question().explanation
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.selected.is_some() || !self.config.show_explanations
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total()
    }

    #[must_use]
    pub fn next_button_title(&self) -> &'static str {
        if self.is_last() { "Finish" } else { "Next" }
    }

    /// Returns `true` when the caller should start a one-second ticker.
    pub fn start_if_needed(&mut self) -> bool {
        if self.timer_running || self.finished || self.time_remaining.is_none() {
            return false;
        }
        self.timer_running = true;
        true
    }

    pub fn stop_timer(&mut self) {
        self.timer_running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer_running || self.finished {
            return TickOutcome::Idle;
        }
        let Some(remaining) = self.time_remaining else {
            return TickOutcome::Idle;
        };
        if remaining == 0 {
            self.finish();
            return TickOutcome::Expired;
        }
        let remaining = remaining - 1;
        self.time_remaining = Some(remaining);
        self.elapsed_secs += 1;
        TickOutcome::Running { remaining }
    }

    pub fn select(&mut self, choice: usize) {
        if self.finished || choice >= self.question().choices.len() {
            return;
        }
        self.selected = Some(choice);
    }

    pub fn prev(&mut self) {
        if self.finished || !self.can_go_back() {
            return;
        }
        self.current_index -= 1;
        self.selected = None;
    }

    pub fn next_or_finish(&mut self) {
        if self.finished {
            return;
        }
        if let Some(slot) = self.answers.get_mut(self.current_index as usize) {
            if self.selected.is_some() {
                *slot = self.selected;
            }
        }
        if self.is_last() {
            self.finish();
            return;
        }
        self.current_index += 1;
        self.selected = None;
    }

    pub fn finish(&mut self) {
        self.finished = true;
        self.stop_timer();
    }

    #[must_use]
    pub fn result(&self) -> SessionResult {
        let mut answered = 0;
        let mut correct = 0;
        for (idx, answer) in self.answers.iter().enumerate() {
            let Some(choice) = answer else { continue };
            answered += 1;
            let bank_index = self.order[idx % self.order.len()];
            if DEMO_BANK[bank_index].correct == *choice {
                correct += 1;
            }
        }
        SessionResult {
            total: self.total(),
            answered,
            correct,
            elapsed_secs: self.config.time_limit_secs.map(|_| self.elapsed_secs),
        }
    }
}
