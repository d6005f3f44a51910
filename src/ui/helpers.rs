// src/ui/helpers.rs
use crate::view_models::{Feedback, OptionState, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const ACCENT: Color32 = Color32::from_rgb(220, 38, 38);
pub const CORRECT: Color32 = Color32::from_rgb(22, 163, 74);
pub const INCORRECT: Color32 = Color32::from_rgb(220, 38, 38);

/// Botón a todo el ancho con el color de la cabecera.
pub fn wide_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    let button = Button::new(RichText::new(label).color(Color32::WHITE).strong())
        .fill(ACCENT)
        .min_size(Vec2::new(width, 36.0));
    ui.add_enabled(enabled, button).clicked()
}

/// Texto de una opción: verde la correcta, tachada en rojo la fallada.
pub fn option_text(option: &OptionView) -> RichText {
    let text = RichText::new(&option.label);
    match option.state {
        OptionState::CorrectRevealed => text.color(CORRECT).strong(),
        OptionState::IncorrectRevealed => text.color(INCORRECT).strikethrough(),
        OptionState::SelectedPending | OptionState::Unselected => text,
    }
}

pub fn feedback_text(feedback: Feedback) -> RichText {
    let color = match feedback {
        Feedback::Correct => CORRECT,
        Feedback::Incorrect => INCORRECT,
    };
    RichText::new(feedback.message()).color(color).strong().size(18.0)
}
