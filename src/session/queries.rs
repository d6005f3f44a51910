use super::*;

impl<C: Celebration> QuizSession<C> {
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// La pregunta actual; tras completar, la última.
    pub fn current_question(&self) -> &QuestionRecord {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Preguntas ya enviadas, incluida la actual si está enviada.
    pub fn answered(&self) -> usize {
        self.current_index + usize::from(self.answer_submitted)
    }

    pub fn is_answer_submitted(&self) -> bool {
        self.answer_submitted
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else if self.answer_submitted {
            QuizPhase::Submitted
        } else if self.selected_answer.is_some() {
            QuizPhase::AnswerChosen
        } else {
            QuizPhase::Unanswered
        }
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    pub fn celebration_mut(&mut self) -> &mut C {
        &mut self.celebration
    }
}
