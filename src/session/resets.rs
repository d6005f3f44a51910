use super::*;
use rand::Rng;
use rand::seq::SliceRandom;

impl<C: Celebration> QuizSession<C> {
    /// Descarta el intento actual y empieza otro con un orden nuevo.
    /// Vale desde cualquier estado, también a mitad de quiz.
    pub fn reset(&mut self) {
        self.questions = shuffled_copy(&self.bank, &mut self.rng);
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.answer_submitted = false;
        self.is_correct = false;
        self.completed = false;
        self.epoch += 1;
        log::info!("sesión reiniciada con {} preguntas", self.questions.len());
    }

    /// Igual que `reset`, pero fijando antes la semilla del barajado.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.reset();
    }
}

/// Barajado uniforme (Fisher-Yates): cualquier permutación es alcanzable.
pub fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [QuestionRecord], rng: &mut R) {
    questions.shuffle(rng);
}

pub(crate) fn shuffled_copy<R: Rng + ?Sized>(
    bank: &QuestionBank,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let mut questions = bank.records().to_vec();
    shuffle_questions(&mut questions, rng);
    questions
}

#[cfg(test)]
mod tests {
    use super::super::test_support::session;
    use super::*;
    use crate::celebration::CelebrationCount;
    use std::collections::HashSet;

    fn texts<C: Celebration>(s: &QuizSession<C>) -> Vec<String> {
        s.questions().iter().map(|q| q.question.clone()).collect()
    }

    #[test]
    fn reset_mid_quiz_restores_initial_state() {
        let mut s = session(20);
        let answer = s.current_question().answer.clone();
        s.select_option(&answer);
        s.submit_answer();
        let epoch = s.epoch();

        s.reset();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.selected_answer(), None);
        assert!(!s.is_answer_submitted());
        assert!(!s.is_correct());
        assert!(!s.is_completed());
        assert_eq!(s.phase(), QuizPhase::Unanswered);
        assert!(s.epoch() > epoch);
    }

    #[test]
    fn reset_keeps_every_question() {
        let mut s = session(21);
        s.reset();
        let mut got = texts(&s);
        got.sort();
        assert_eq!(got, vec!["Capital?".to_string(), "Color?".to_string()]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = session(22);
        let b = session(22);
        assert_eq!(texts(&a), texts(&b));
    }

    #[test]
    fn reset_with_seed_replays_the_seeded_order() {
        let fresh = session(23);
        let mut s = session(99);
        s.reset_with_seed(23);
        assert_eq!(texts(&s), texts(&fresh));
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        let bank = QuestionBank::new(vec![
            QuestionRecord::new("one", ["a", "b"], "a"),
            QuestionRecord::new("two", ["a", "b"], "a"),
            QuestionRecord::new("three", ["a", "b"], "a"),
        ])
        .expect("valid bank");

        let seen: HashSet<Vec<String>> = (0..300)
            .map(|seed| {
                let celebration = CelebrationCount::default();
                texts(&QuizSession::new(bank.clone(), celebration, Some(seed)))
            })
            .collect();
        assert_eq!(seen.len(), 6);
    }
}
