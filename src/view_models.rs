// src/view_models.rs

/// Cómo se pinta cada opción de la pregunta actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Unselected,
    SelectedPending,
    CorrectRevealed,
    IncorrectRevealed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub state: OptionState,
    pub selected: bool, // el radio aparece marcado
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressView {
    pub question_number: usize, // número "humano" (1,2,3…)
    pub total: usize,
    pub score: usize,
    pub answered: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Acción del botón que aparece tras enviar la respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceAction {
    Next,
    Finish,
}

impl ProgressView {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.question_number, self.total)
    }

    pub fn stats(&self) -> String {
        format!(
            "Correct: {} | Answered: {} | Total: {}",
            self.score, self.answered, self.total
        )
    }
}

impl ResultsView {
    /// "1 out of 2"
    pub fn summary(&self) -> String {
        format!("{} out of {}", self.score, self.total)
    }

    pub fn label(&self) -> String {
        format!("Your score: {}", self.summary())
    }
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect. The correct answer is shown above.",
        }
    }
}

impl AdvanceAction {
    pub fn label(self) -> &'static str {
        match self {
            AdvanceAction::Next => "Next Question",
            AdvanceAction::Finish => "Finish Quiz",
        }
    }
}
