//! About-panel photo with reveal and hover layers

use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Response, Rounding, Sense, Shape, Stroke, Ui};
use folio::{PhotoLayer, PortfolioPage, Style};

use crate::animation::Animator;
use crate::{paint, theme};

/// 3:4 portrait at the size the layout was designed for
pub const PHOTO_SIZE: egui::Vec2 = egui::Vec2::new(280.0, 373.0);

const BORDER_WIDTH: f32 = 4.0;

/// Paint the photo stack. The returned response covers the photo's
/// untransformed rect, which is the region the page observes.
pub fn animated_photo(
    ui: &mut Ui,
    page: &mut PortfolioPage,
    animator: &mut Animator,
    image_url: &str,
    caption: (&str, &str),
) -> Response {
    let (rect, response) = ui.allocate_exact_size(PHOTO_SIZE, Sense::hover());
    page.hover_photo(response.hovered());

    let mut style = |layer: PhotoLayer| -> Style {
        let id = response.id.with(layer);
        animator.style(id, page.photo_style(layer), page.photo_transition(layer))
    };
    let styles: Vec<(PhotoLayer, Style)> = PhotoLayer::ALL.iter().map(|l| (*l, style(*l))).collect();

    let frame_style = styles
        .iter()
        .find(|(l, _)| *l == PhotoLayer::Frame)
        .map(|(_, s)| *s)
        .unwrap_or(Style::IDENTITY);
    let frame = paint::transformed_rect(rect, &frame_style, PhotoLayer::Frame.origin());

    for (layer, style) in styles {
        let painter = ui.painter();
        match layer {
            PhotoLayer::AccentPrimary => {
                let center = rect.max - vec2(24.0, 24.0);
                let color = theme::faded(theme::PINK, style.opacity);
                paint::orb(painter, center, 40.0 * style.scale, color);
            }
            PhotoLayer::AccentSecondary => {
                let center = rect.min + vec2(8.0, 8.0);
                let color = theme::faded(theme::BLUE, style.opacity);
                paint::orb(painter, center, 32.0 * style.scale, color);
            }
            PhotoLayer::Backdrop => {
                let scaled = paint::transformed_rect(rect, &style, layer.origin());
                let pivot = paint::pivot(scaled, layer.origin());
                let quad = paint::rotated_quad(scaled, style.rotation_deg, pivot);
                paint::shadow(painter, scaled, Rounding::same(16.0), style.elevation, style.opacity);
                painter.add(Shape::convex_polygon(
                    quad.to_vec(),
                    theme::faded(theme::PURPLE, style.opacity),
                    Stroke::new(
                        2.0,
                        theme::faded(theme::BLUE_STRONG, style.opacity),
                    ),
                ));
            }
            PhotoLayer::Frame => {
                paint::shadow(painter, frame, Rounding::same(12.0), 0.0, style.opacity);
                painter.rect_filled(frame, Rounding::same(12.0), theme::faded(theme::SURFACE, style.opacity));
                painter.rect_stroke(
                    frame,
                    Rounding::same(12.0),
                    Stroke::new(BORDER_WIDTH, Color32::from_white_alpha((25.0 * style.opacity) as u8)),
                );
            }
            PhotoLayer::Image => {
                let inner = frame.shrink(BORDER_WIDTH);
                let scaled = paint::transformed_rect(inner, &style, layer.origin());
                let mut clipped = ui.new_child(egui::UiBuilder::new().max_rect(inner));
                clipped.set_clip_rect(inner.intersect(ui.clip_rect()));
                egui::Image::new(image_url)
                    .rounding(8.0)
                    .tint(theme::faded(Color32::WHITE, frame_style.opacity))
                    .paint_at(&clipped, scaled);
            }
            PhotoLayer::Overlay => {
                let inner = frame.shrink(BORDER_WIDTH);
                let opacity = style.opacity * frame_style.opacity;
                let lower = Rect::from_min_max(pos2(inner.min.x, inner.center().y), inner.max);
                paint::vertical_gradient(
                    painter,
                    lower,
                    Color32::TRANSPARENT,
                    theme::faded(theme::BACKGROUND, 0.8 * opacity),
                );
            }
            PhotoLayer::Caption => {
                let inner = frame.shrink(BORDER_WIDTH);
                let opacity = style.opacity * frame_style.opacity;
                let base = pos2(inner.center().x, inner.max.y - 44.0 + style.translate_y);
                let clip = painter.with_clip_rect(inner);
                clip.text(
                    base,
                    Align2::CENTER_CENTER,
                    caption.0,
                    FontId::proportional(16.0),
                    theme::faded(theme::TEXT, opacity),
                );
                clip.text(
                    base + vec2(0.0, 20.0),
                    Align2::CENTER_CENTER,
                    caption.1,
                    FontId::proportional(13.0),
                    theme::faded(theme::BLUE, opacity),
                );
            }
        }
    }

    response
}
