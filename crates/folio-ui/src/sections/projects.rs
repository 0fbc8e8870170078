//! Project showcase

use egui::{RichText, Ui};
use folio::card::asset_or_placeholder;

use super::{content_column, section_heading, tinted_band, PageAction, SectionCx};
use crate::theme;
use crate::widgets::project_card;

const SUBTITLE: &str =
    "Explore my latest work showcasing modern web development techniques and innovative solutions";

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let mut action = PageAction::default();

    tinted_band(ui, theme::faded(theme::SURFACE, 0.5), |ui| {
        section_heading(ui, "Featured", "Projects");
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(SUBTITLE).color(theme::TEXT_MUTED));
        });
        ui.add_space(48.0);

        content_column(ui, |ui| {
            let per_row = if ui.available_width() >= 960.0 { 3 } else { 1 };
            // cards are cloned out so the page can be borrowed mutably for hover
            let cards = cx.page.cards().to_vec();

            for (row, chunk) in cards.chunks(per_row).enumerate() {
                ui.columns(per_row, |columns| {
                    for (col, (column, view)) in columns.iter_mut().zip(chunk).enumerate() {
                        let index = row * per_row + col;
                        let preview_url = view
                            .preview
                            .as_ref()
                            .map(|p| cx.asset_url(asset_or_placeholder(Some(p.image.as_str()))));
                        column.spacing_mut().item_spacing.y = 4.0;
                        let card = project_card(
                            column,
                            cx.page,
                            cx.animator,
                            index,
                            view,
                            preview_url.as_deref(),
                        );
                        if card.open_url.is_some() {
                            action.open_url = card.open_url;
                        }
                    }
                });
                ui.add_space(32.0);
            }
        });
        ui.add_space(48.0);
    });

    action
}
