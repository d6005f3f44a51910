use crate::QuizApp;
use crate::ui::helpers::{feedback_text, option_text, wide_button};
use crate::ui::layout::quiz_card;
use egui::{Context, RadioButton, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let title = app.config.heading.clone();

    quiz_card(ctx, &title, |ui| {
        let progress = app.session.progress();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(progress.heading()).strong().size(18.0));
            ui.label(RichText::new(progress.stats()).small().weak());
        });
        ui.add_space(12.0);

        ui.label(
            RichText::new(&app.session.current_question().question)
                .size(20.0)
                .strong(),
        );
        ui.add_space(8.0);

        // Opciones: deshabilitadas una vez enviada la respuesta
        let locked = app.session.is_answer_submitted();
        let mut chosen = None;
        for option in app.session.option_states() {
            let radio = RadioButton::new(option.selected, option_text(&option));
            if ui.add_enabled(!locked, radio).clicked() {
                chosen = Some(option.label);
            }
        }
        if let Some(option) = chosen {
            app.choose_option(&option);
        }

        ui.add_space(16.0);
        let width = ui.available_width();

        if !locked {
            let ready = app.session.selected_answer().is_some();
            if wide_button(ui, "Submit Answer", width, ready) {
                app.submit(now);
            }
            return;
        }

        if let Some(feedback) = app.session.feedback() {
            ui.label(feedback_text(feedback));
        }
        if let Some(remaining) = app.auto_advance_remaining(now) {
            ui.label(
                RichText::new(format!("Moving on in {:.0}s…", remaining.ceil()))
                    .small()
                    .weak(),
            );
        }
        ui.add_space(8.0);
        if wide_button(ui, app.session.advance_action().label(), width, true) {
            app.next_question();
        }
    });
}
