use serde::{Deserialize, Serialize};

/// Una pregunta del banco: enunciado, opciones en orden y respuesta correcta.
///
/// La comparación es literal: no se normalizan espacios ni mayúsculas, el
/// banco de preguntas es responsable de que `answer` coincida con una opción.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String, // Enunciado
    pub options: Vec<String>,
    pub answer: String, // Debe ser igual a una de las opciones
}

impl QuestionRecord {
    pub fn new<I, S>(question: impl Into<String>, options: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.answer
    }
}

/// Fase de la pregunta actual dentro de la sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    AnswerChosen,
    Submitted,
    Completed,
}
