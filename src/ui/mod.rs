pub mod confetti;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::QuizPhase;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.tick(now);

        bottom_panel(ctx, &self.config.heading);

        // Dispatch por fase a las vistas
        match self.session.phase() {
            QuizPhase::Completed => views::results::ui_results(self, ctx),
            QuizPhase::Unanswered | QuizPhase::AnswerChosen | QuizPhase::Submitted => {
                views::quiz::ui_quiz(self, ctx)
            }
        }

        self.session.celebration_mut().show(ctx);

        // Sin eventos de usuario egui no repinta: despierta cuando venza el avance
        if let Some(wait) = self
            .auto_advance_remaining(now)
            .and_then(|remaining| Duration::try_from_secs_f64(remaining).ok())
        {
            ctx.request_repaint_after(wait);
        }
    }
}
