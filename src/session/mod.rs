//! Controlador del quiz.
//!
//! `QuizSession` es el único dueño del progreso de un intento: el orden
//! barajado de las preguntas, la pregunta actual, la respuesta elegida y la
//! puntuación. La interfaz sólo lee proyecciones (`view_models`) y le manda
//! intenciones (`select_option`, `submit_answer`, `advance`, `reset`).
//!
//! Por pregunta:
//! `Unanswered → (select_option)* → AnswerChosen → (submit_answer) → Submitted
//! → (advance) → Unanswered(siguiente) | Completed`.
//! `Completed` es terminal salvo por `reset`.

use crate::celebration::Celebration;
use crate::data::QuestionBank;
use crate::model::{QuestionRecord, QuizPhase};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use resets::shuffle_questions;

/// Motivo por el que una intención se ignoró.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Completed,
    AlreadySubmitted,
    NotSubmitted,
    NoSelection,
    UnknownOption,
}

/// Resultado de una intención. Las intenciones inválidas nunca alteran el estado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Rejected(Rejection),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

pub struct QuizSession<C = ()> {
    bank: QuestionBank,
    questions: Vec<QuestionRecord>, // copia barajada, fija durante la sesión
    current_index: usize,
    selected_answer: Option<String>,
    score: usize,
    answer_submitted: bool,
    is_correct: bool,
    completed: bool,
    epoch: u64, // cambia con cada pregunta nueva y con cada reset
    rng: StdRng,
    celebration: C,
}

impl<C: Celebration> QuizSession<C> {
    /// Crea la sesión con una copia barajada del banco.
    /// Con `seed` el orden es reproducible (también el de los `reset` posteriores).
    pub fn new(bank: QuestionBank, celebration: C, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let questions = resets::shuffled_copy(&bank, &mut rng);
        log::info!("sesión iniciada con {} preguntas", questions.len());

        Self {
            bank,
            questions,
            current_index: 0,
            selected_answer: None,
            score: 0,
            answer_submitted: false,
            is_correct: false,
            completed: false,
            epoch: 0,
            rng,
            celebration,
        }
    }

    fn reject(&self, intent: &str, reason: Rejection) -> Transition {
        log::debug!(
            "{intent} ignorado en la pregunta {}: {reason:?}",
            self.current_index + 1
        );
        Transition::Rejected(reason)
    }
}
