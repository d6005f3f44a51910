use crate::config::QuizConfig;
use crate::data::{QuestionBank, read_questions_embedded};
use crate::error::QuizError;
use crate::schedule::AutoAdvanceTimer;
use crate::session::QuizSession;
use crate::ui::confetti::Confetti;

/// Aplicación: la sesión del quiz más lo que la rodea en pantalla
/// (configuración, confeti y el avance automático opcional).
pub struct QuizApp {
    pub session: QuizSession<Confetti>,
    pub config: QuizConfig,
    auto_advance: Option<AutoAdvanceTimer>,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        let bank = read_questions_embedded()?;
        Ok(Self::with_bank(bank, config))
    }

    pub fn with_bank(bank: QuestionBank, config: QuizConfig) -> Self {
        let session = QuizSession::new(bank, Confetti::new(config.celebrate), config.seed);
        let auto_advance = config.auto_advance_secs.map(AutoAdvanceTimer::new);
        Self {
            session,
            config,
            auto_advance,
        }
    }

    pub fn choose_option(&mut self, option: &str) {
        self.session.select_option(option);
    }

    /// Envía la respuesta; si es correcta y hay avance automático, lo programa.
    pub fn submit(&mut self, now: f64) {
        if !self.session.submit_answer().is_applied() || !self.session.is_correct() {
            return;
        }
        let epoch = self.session.epoch();
        if let Some(timer) = &mut self.auto_advance {
            timer.schedule(epoch, now);
        }
    }

    pub fn next_question(&mut self) {
        self.cancel_auto_advance();
        self.session.advance();
    }

    pub fn restart(&mut self) {
        self.cancel_auto_advance();
        self.session.reset();
    }

    /// Se llama en cada frame. Devuelve `true` si el avance automático se disparó.
    pub fn tick(&mut self, now: f64) -> bool {
        let epoch = self.session.epoch();
        let due = self
            .auto_advance
            .as_mut()
            .is_some_and(|timer| timer.poll(epoch, now));
        if due {
            log::debug!("avance automático");
            self.session.advance();
        }
        due
    }

    pub fn auto_advance_remaining(&self, now: f64) -> Option<f64> {
        self.auto_advance.as_ref()?.remaining(now)
    }

    fn cancel_auto_advance(&mut self) {
        if let Some(timer) = &mut self.auto_advance {
            timer.cancel();
        }
    }
}
