use egui::{Align2, Color32, FontId, Rounding, Sense, Stroke, Ui};
use folio::{Button, PortfolioPage};

use crate::animation::Animator;
use crate::{paint, theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Gradient fill
    Primary,
    /// Outline that turns blue on hover
    Secondary,
    /// Gradient fill with square-ish corners, for forms
    Block,
}

/// Call-to-action button with hover feedback. Returns true when clicked.
pub fn cta_button(
    ui: &mut Ui,
    page: &mut PortfolioPage,
    animator: &mut Animator,
    button: Button,
    kind: ButtonKind,
    width: Option<f32>,
) -> bool {
    let font = FontId::proportional(17.0);
    let text_width = ui
        .painter()
        .layout_no_wrap(button.label().to_string(), font.clone(), Color32::WHITE)
        .size()
        .x;
    let size = egui::vec2(width.unwrap_or(text_width + 64.0), 52.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    page.hover_button(button, response.hovered());
    let hovered = response.hovered();
    if hovered {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let style = animator.style(
        response.id,
        page.button_style(button),
        page.button_transition(),
    );

    let rect = paint::transformed_rect(rect, &style, folio::TransformOrigin::Center);
    let rounding = match kind {
        ButtonKind::Block => Rounding::same(8.0),
        ButtonKind::Primary | ButtonKind::Secondary => Rounding::same(rect.height() / 2.0),
    };
    let painter = ui.painter();
    match kind {
        ButtonKind::Primary | ButtonKind::Block => {
            if style.elevation > 0.0 {
                painter.rect_filled(
                    rect.expand(6.0 * style.elevation),
                    rounding,
                    theme::faded(theme::BLUE_STRONG, 0.25 * style.elevation),
                );
            }
            painter.rect_filled(rect, rounding, theme::BLUE_STRONG);
            painter.rect_filled(
                rect.with_min_x(rect.center().x),
                rounding,
                theme::faded(theme::PURPLE, 0.6),
            );
            painter.text(rect.center(), Align2::CENTER_CENTER, button.label(), font, theme::TEXT);
        }
        ButtonKind::Secondary => {
            let accent = if hovered { theme::BLUE } else { theme::BORDER };
            painter.rect_stroke(rect, rounding, Stroke::new(2.0, accent));
            let text = if hovered { theme::BLUE } else { theme::TEXT };
            painter.text(rect.center(), Align2::CENTER_CENTER, button.label(), font, text);
        }
    }

    response.clicked()
}
