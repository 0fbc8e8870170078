//! Full-height hero with a parallax background

use std::time::Duration;

use egui::{vec2, Align, Align2, FontId, Layout, RichText, Sense, Ui, UiBuilder};
use folio::Button;

use super::{PageAction, SectionCx};
use crate::widgets::{cta_button, ButtonKind};
use crate::{paint, theme};

const MIN_HEIGHT: f32 = 560.0;
const BUTTON_WIDTH: f32 = 200.0;

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let mut action = PageAction::default();
    let portfolio = cx.portfolio;
    let profile = &portfolio.profile;

    let height = (ui.ctx().screen_rect().height() - theme::NAV_HEIGHT).max(MIN_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());

    // Background drifts down at a fraction of the scroll speed
    let background = cx.page.hero_background_style();
    let painter = ui.painter_at(rect);
    paint::vertical_gradient(
        &painter,
        rect.translate(vec2(0.0, background.translate_y)),
        theme::faded(theme::BLUE_STRONG, 0.15),
        theme::faded(theme::PURPLE, 0.15),
    );
    paint::orb(
        &painter,
        rect.center(),
        rect.width().min(rect.height()) * 0.45,
        theme::faded(theme::BLUE, 0.12),
    );

    let content = cx.animator.style(
        ui.id().with("hero_content"),
        cx.page.hero_content_style(),
        cx.page.config().reveal(),
    );
    let content_rect = rect.shrink2(vec2(24.0, 0.0)).translate(vec2(0.0, content.translate_y));

    ui.allocate_new_ui(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::top_down(Align::Center)),
        |ui| {
            ui.multiply_opacity(content.opacity);
            ui.add_space((content_rect.height() - 400.0).max(0.0) / 2.0);

            ui.label(
                RichText::new(profile.name.to_uppercase())
                    .size(72.0)
                    .strong()
                    .color(theme::BLUE),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(&profile.headline).size(32.0).color(theme::TEXT_BODY));
            ui.add_space(16.0);
            ui.allocate_ui(vec2(640.0_f32.min(ui.available_width()), 80.0), |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&profile.tagline).size(20.0).color(theme::TEXT_MUTED));
                });
            });
            ui.add_space(40.0);

            ui.allocate_ui_with_layout(
                vec2(2.0 * BUTTON_WIDTH + 16.0, 56.0),
                Layout::left_to_right(Align::Center),
                |ui| {
                    ui.spacing_mut().item_spacing.x = 16.0;
                    for (button, kind) in [
                        (Button::ViewWork, ButtonKind::Primary),
                        (Button::GetInTouch, ButtonKind::Secondary),
                    ] {
                        if cta_button(ui, cx.page, cx.animator, button, kind, Some(BUTTON_WIDTH)) {
                            action.scroll_to = button.target();
                        }
                    }
                },
            );
        },
    );

    // Bouncing scroll hint
    if ui.is_rect_visible(rect) {
        let t = ui.input(|i| i.time);
        let bounce = (t * std::f64::consts::PI).sin().abs() as f32 * 12.0;
        painter.text(
            rect.center_bottom() - vec2(0.0, 40.0 + bounce),
            Align2::CENTER_CENTER,
            "⌄",
            FontId::proportional(32.0),
            theme::TEXT_MUTED,
        );
        ui.ctx().request_repaint_after(Duration::from_millis(33));
    }

    action
}
