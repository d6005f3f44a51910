use crate::ui::helpers::ACCENT;
use egui::{Align, CentralPanel, Color32, Context, Frame, Layout, RichText, Ui, Visuals};

/// Texto del botón y tema al que cambia, según el tema activo.
fn theme_toggle(dark_mode: bool) -> (&'static str, Visuals) {
    if dark_mode {
        ("☀ Light mode", Visuals::light())
    } else {
        ("🌙 Dark mode", Visuals::dark())
    }
}

/// Barra inferior: nombre del quiz a la izquierda y un único botón de tema.
pub fn bottom_panel(ctx: &Context, caption: &str) {
    egui::TopBottomPanel::bottom("quiz_footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(caption).small().weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (label, next) = theme_toggle(ctx.style().visuals.dark_mode);
                if ui.button(label).clicked() {
                    log::debug!("tema cambiado: {label}");
                    ctx.set_visuals(next);
                }
            });
        });
    });
}

/// Tarjeta centrada con cabecera de color y un bloque interior `inner`.
pub fn quiz_card(ctx: &Context, title: &str, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let est_height = 420.0;
        let width = (ui.available_width() * 0.97).min(max_width);
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);

        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .stroke(ui.visuals().window_stroke())
                .show(ui, |ui| {
                    ui.set_width(width);

                    Frame::default()
                        .fill(ACCENT)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(title)
                                        .heading()
                                        .strong()
                                        .color(Color32::WHITE),
                                );
                            });
                        });

                    Frame::default()
                        .inner_margin(egui::Margin::symmetric(24, 20))
                        .show(ui, |ui| {
                            ui.with_layout(Layout::top_down(Align::Min), inner);
                        });
                });
        });

        ui.add_space(extra);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_offers_the_opposite_theme() {
        let (label, next) = theme_toggle(true);
        assert_eq!(label, "☀ Light mode");
        assert!(!next.dark_mode);

        let (label, next) = theme_toggle(false);
        assert_eq!(label, "🌙 Dark mode");
        assert!(next.dark_mode);
    }
}
