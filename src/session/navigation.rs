use super::*;

impl<C: Celebration> QuizSession<C> {
    /// Pasa a la siguiente pregunta o, si era la última, completa el quiz
    /// dejando `current_index` en ella. Llamarlo dos veces no hace nada.
    pub fn advance(&mut self) -> Transition {
        if self.completed {
            return self.reject("advance", Rejection::Completed);
        }
        if !self.answer_submitted {
            return self.reject("advance", Rejection::NotSubmitted);
        }

        self.epoch += 1;
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.answer_submitted = false;
            self.is_correct = false;
            log::debug!(
                "pregunta {} de {}",
                self.current_index + 1,
                self.questions.len()
            );
        } else {
            self.completed = true;
            log::info!(
                "quiz completado: {} de {}",
                self.score,
                self.questions.len()
            );
        }
        Transition::Applied
    }
}
