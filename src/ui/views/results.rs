use crate::QuizApp;
use crate::ui::helpers::wide_button;
use crate::ui::layout::quiz_card;
use egui::{Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    // Sólo se llega aquí con el quiz completado
    let Some(results) = app.session.results() else {
        return;
    };
    let title = app.config.heading.clone();

    quiz_card(ctx, &title, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Completed!");
            ui.add_space(10.0);
            ui.label(RichText::new(results.label()).size(18.0));
            ui.add_space(16.0);

            let width = (ui.available_width() / 2.0).max(160.0);
            if wide_button(ui, "Restart Quiz", width, true) {
                app.restart();
            }
        });
    });
}
