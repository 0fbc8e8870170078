//! Fixed navigation bar

use egui::{Align, Layout, RichText, Ui};
use folio::PortfolioPage;

use super::PageAction;
use crate::theme;

pub fn show(ui: &mut Ui, page: &PortfolioPage, initials: &str) -> PageAction {
    let mut action = PageAction::default();

    ui.horizontal(|ui| {
        ui.set_height(theme::NAV_HEIGHT);
        ui.add_space(24.0);
        ui.label(
            RichText::new(initials)
                .size(24.0)
                .strong()
                .color(theme::PURPLE_LIGHT),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(24.0);
            // right-to-left, so walk the entries backwards
            for entry in page.nav_entries().into_iter().rev() {
                let color = if entry.highlighted {
                    theme::BLUE
                } else {
                    theme::TEXT_BODY
                };
                let link = ui.add(
                    egui::Label::new(RichText::new(entry.label).color(color))
                        .sense(egui::Sense::click()),
                );
                if link.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if link.clicked() {
                    action.scroll_to = Some(entry.section);
                }
                ui.add_space(16.0);
            }
        });
    });

    action
}
