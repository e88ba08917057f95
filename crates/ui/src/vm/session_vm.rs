use sprint_core::format::seconds_text;
use sprint_core::session::{PracticeSession, SessionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl ChoiceState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "choice",
            Self::Selected => "choice selected",
            Self::Correct => "choice correct",
            Self::Incorrect => "choice incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: &'static str,
    pub text: &'static str,
    pub state: ChoiceState,
}

/// Choices for the current question. Once the explanation is visible the
/// correct answer is revealed and a wrong pick is marked.
#[must_use]
pub fn map_choices(session: &PracticeSession) -> Vec<ChoiceVm> {
    let question = session.question();
    let selected = session.selected();
    let reveal = session.show_explanation();

    question
        .choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let is_selected = selected == Some(index);
            let state = if reveal && index == question.correct {
                ChoiceState::Correct
            } else if reveal && is_selected {
                ChoiceState::Incorrect
            } else if is_selected {
                ChoiceState::Selected
            } else {
                ChoiceState::Idle
            };
            ChoiceVm {
                index,
                label: choice.label,
                text: choice.text,
                state,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionResultVm {
    pub score_text: String,
    pub accuracy_text: String,
    pub answered_text: String,
    pub time_text: Option<String>,
}

#[must_use]
pub fn map_session_result(result: &SessionResult) -> SessionResultVm {
    SessionResultVm {
        score_text: result.score_text(),
        accuracy_text: result.accuracy_text(),
        answered_text: format!("{} of {} answered", result.answered, result.total),
        time_text: result.elapsed_secs.map(seconds_text),
    }
}
