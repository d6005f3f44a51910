use super::*;

impl<C: Celebration> QuizSession<C> {
    /// Elige una opción de la pregunta actual. No puntúa.
    pub fn select_option(&mut self, option: &str) -> Transition {
        if self.completed {
            return self.reject("select_option", Rejection::Completed);
        }
        if self.answer_submitted {
            return self.reject("select_option", Rejection::AlreadySubmitted);
        }
        if !self.current_question().has_option(option) {
            return self.reject("select_option", Rejection::UnknownOption);
        }

        self.selected_answer = Some(option.to_owned());
        log::debug!(
            "pregunta {}: opción elegida {option:?}",
            self.current_index + 1
        );
        Transition::Applied
    }

    /// Fija la respuesta elegida y la puntúa. No avanza de pregunta.
    pub fn submit_answer(&mut self) -> Transition {
        if self.completed {
            return self.reject("submit_answer", Rejection::Completed);
        }
        if self.answer_submitted {
            return self.reject("submit_answer", Rejection::AlreadySubmitted);
        }
        let correct = match self.selected_answer.as_deref() {
            Some(answer) if !answer.is_empty() => self.current_question().is_correct(answer),
            _ => return self.reject("submit_answer", Rejection::NoSelection),
        };

        self.is_correct = correct;
        self.answer_submitted = true;
        if correct {
            self.score += 1;
            self.celebration.celebrate();
        }
        log::debug!(
            "pregunta {} enviada: {} (puntuación {})",
            self.current_index + 1,
            if correct { "correcta" } else { "incorrecta" },
            self.score
        );
        Transition::Applied
    }
}
