use super::*;
use crate::view_models::{
    AdvanceAction, Feedback, OptionState, OptionView, ProgressView, ResultsView,
};

impl<C: Celebration> QuizSession<C> {
    /// Estado de pintado de cada opción de la pregunta actual.
    ///
    /// Antes de enviar sólo se marca la elegida. Después se revela la
    /// correcta y, si la elegida era otra, se marca como incorrecta.
    pub fn option_states(&self) -> Vec<OptionView> {
        let q = self.current_question();
        let selected = self.selected_answer.as_deref();

        q.options
            .iter()
            .map(|option| {
                let is_selected = selected == Some(option.as_str());
                let state = if self.answer_submitted {
                    if *option == q.answer {
                        OptionState::CorrectRevealed
                    } else if is_selected {
                        OptionState::IncorrectRevealed
                    } else {
                        OptionState::Unselected
                    }
                } else if is_selected {
                    OptionState::SelectedPending
                } else {
                    OptionState::Unselected
                };
                OptionView {
                    label: option.clone(),
                    state,
                    selected: is_selected,
                }
            })
            .collect()
    }

    pub fn progress(&self) -> ProgressView {
        ProgressView {
            question_number: self.current_index + 1,
            total: self.questions.len(),
            score: self.score,
            answered: self.answered(),
        }
    }

    /// Datos de la pantalla final; `None` mientras el quiz sigue.
    pub fn results(&self) -> Option<ResultsView> {
        self.completed.then(|| ResultsView {
            score: self.score,
            total: self.questions.len(),
        })
    }

    pub fn feedback(&self) -> Option<Feedback> {
        if !self.answer_submitted {
            return None;
        }
        Some(if self.is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        })
    }

    pub fn advance_action(&self) -> AdvanceAction {
        if self.is_last_question() {
            AdvanceAction::Finish
        } else {
            AdvanceAction::Next
        }
    }
}
