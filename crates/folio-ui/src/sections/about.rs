//! About panel: bio, stats and the animated photo

use egui::{vec2, Align, Layout, RichText, Rounding, Ui};
use folio::card::asset_or_placeholder;
use folio::{RegionId, PHOTO_REGION};
use folio_types::Stat;

use super::{content_column, tinted_band, two_tone, PageAction, SectionCx};
use crate::theme;
use crate::widgets::animated_photo;

/// Below this width the photo stacks under the text
const TWO_COLUMN_MIN_WIDTH: f32 = 820.0;

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let portfolio = cx.portfolio;
    let profile = &portfolio.profile;
    let photo_url = cx.asset_url(asset_or_placeholder(profile.photo.as_deref()));

    tinted_band(ui, theme::faded(theme::SURFACE, 0.5), |ui| {
        ui.add_space(80.0);
        content_column(ui, |ui| {
            let two_columns = ui.available_width() >= TWO_COLUMN_MIN_WIDTH;
            let layout = if two_columns {
                Layout::left_to_right(Align::Center)
            } else {
                Layout::top_down(Align::Center)
            };
            ui.with_layout(layout, |ui| {
                ui.spacing_mut().item_spacing = vec2(48.0, 24.0);
                let text_width = if two_columns {
                    (ui.available_width() - 48.0) / 2.0
                } else {
                    ui.available_width()
                };

                ui.allocate_ui_with_layout(vec2(text_width, 0.0), Layout::top_down(Align::Min), |ui| {
                    ui.spacing_mut().item_spacing = vec2(8.0, 8.0);
                    ui.label(two_tone("About", "Me"));
                    ui.add_space(16.0);
                    for paragraph in &profile.about {
                        ui.label(RichText::new(paragraph).size(18.0).color(theme::TEXT_BODY));
                        ui.add_space(8.0);
                    }
                    ui.add_space(16.0);
                    stats(ui, &profile.stats);
                });

                ui.vertical_centered(|ui| {
                    let photo = animated_photo(
                        ui,
                        cx.page,
                        cx.animator,
                        &photo_url,
                        (&profile.name, &profile.role),
                    );
                    cx.regions.push((RegionId::from(PHOTO_REGION), photo.rect));
                });
            });
        });
        ui.add_space(80.0);
    });

    PageAction::default()
}

fn stats(ui: &mut Ui, stats: &[Stat]) {
    if stats.is_empty() {
        return;
    }
    ui.columns(stats.len(), |columns| {
        for (i, (column, stat)) in columns.iter_mut().zip(stats).enumerate() {
            // alternate blue / purple like the rest of the accents
            let accent = if i % 2 == 0 {
                theme::BLUE
            } else {
                theme::PURPLE_LIGHT
            };
            egui::Frame::none()
                .fill(theme::faded(theme::SURFACE_RAISED, 0.5))
                .rounding(Rounding::same(8.0))
                .inner_margin(16.0)
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&stat.value).size(30.0).strong().color(accent));
                        ui.label(RichText::new(&stat.label).color(theme::TEXT_MUTED));
                    });
                });
        }
    });
}
