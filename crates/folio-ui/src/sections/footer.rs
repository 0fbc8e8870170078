use egui::{RichText, Stroke, Ui};

use crate::theme;

pub fn show(ui: &mut Ui, text: &str) {
    let top = ui.cursor().top();
    ui.painter().hline(
        ui.max_rect().x_range(),
        top,
        Stroke::new(1.0, theme::SURFACE),
    );
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).color(theme::TEXT_MUTED));
    });
    ui.add_space(32.0);
}
