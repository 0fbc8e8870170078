//! Project card
//!
//! Content is laid out with regular egui widgets; the card background,
//! shadow and glow are painted underneath afterwards through a reserved
//! shape slot, so they can follow the hover tween.

use egui::{vec2, Align2, Color32, FontId, Rect, Response, RichText, Rounding, Sense, Shape, Stroke, Ui};
use folio::card::{Link, ProjectCardView, PLACEHOLDER_HREF};
use folio::{CardLayer, PortfolioPage, StatusBadge, Style, TransformOrigin};

use crate::animation::Animator;
use crate::{paint, theme};

const PREVIEW_HEIGHT: f32 = 192.0;
const PADDING: f32 = 24.0;
const ROUNDING: f32 = 12.0;

pub struct CardResponse {
    pub response: Response,
    /// Link the user clicked, to open in a new tab
    pub open_url: Option<String>,
}

pub fn project_card(
    ui: &mut Ui,
    page: &mut PortfolioPage,
    animator: &mut Animator,
    index: usize,
    view: &ProjectCardView,
    // absolutized `view.preview` image, if the card has one
    preview_url: Option<&str>,
) -> CardResponse {
    let id = ui.id().with(("project_card", index));
    let hovered = page.card_hovered(index);
    let transition = |layer: CardLayer| layer.transition(page.config());
    let mut style = |layer: CardLayer| {
        animator.style(id.with(layer), layer.style(hovered), transition(layer))
    };
    let card = style(CardLayer::Card);
    let image = style(CardLayer::PreviewImage);
    let overlay = style(CardLayer::PreviewOverlay);
    let icon = style(CardLayer::OverlayIcon);
    let glow = style(CardLayer::Glow);

    let background = ui.painter().add(Shape::Noop);
    let width = ui.available_width();
    let mut open_url = None;

    let inner = ui.vertical(|ui| {
        ui.set_width(width);
        if let Some(url) = preview_url {
            let (rect, _) = ui.allocate_exact_size(vec2(width, PREVIEW_HEIGHT), Sense::hover());
            paint_preview(ui, rect, url, image, overlay, icon);
            paint_badge(ui.painter(), rect.right_top() + vec2(-12.0, 12.0), Align2::RIGHT_TOP, &view.badge);
        }

        egui::Frame::none()
            .inner_margin(PADDING)
            .show(ui, |ui| {
                ui.set_width(width - 2.0 * PADDING);
                ui.label(RichText::new(&view.title).size(20.0).strong().color(theme::TEXT));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&view.period).small().color(theme::BLUE));
                    if let Some(badge) = view.inline_badge() {
                        let (rect, _) = ui.allocate_exact_size(vec2(110.0, 22.0), Sense::hover());
                        paint_badge(ui.painter(), rect.left_center(), Align2::LEFT_CENTER, badge);
                    }
                });
                ui.add_space(8.0);
                ui.label(RichText::new(&view.description).color(theme::TEXT_BODY));

                if !view.highlights.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Key Features:").strong().color(theme::TEXT));
                    for highlight in &view.highlights {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("•").color(theme::PURPLE_LIGHT));
                            ui.label(RichText::new(highlight).small().color(theme::TEXT_MUTED));
                        });
                    }
                }

                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &view.tags {
                        tag_chip(ui, tag);
                    }
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if let Some(url) = link_button(ui, &view.live_link, true) {
                        open_url = Some(url);
                    }
                    if let Some(source) = &view.source_link {
                        if let Some(url) = link_button(ui, source, false) {
                            open_url = Some(url);
                        }
                    }
                });
            });
    });

    let response = inner.response;
    let rect = response.rect;
    page.hover_card(index, ui.rect_contains_pointer(rect));

    let scaled = paint::transformed_rect(rect, &card, TransformOrigin::Center);
    ui.painter().set(background, card_background(scaled, &card, &glow));

    CardResponse { response, open_url }
}

fn card_background(rect: Rect, card: &Style, glow: &Style) -> Shape {
    let rounding = Rounding::same(ROUNDING);
    let mut shapes = Vec::new();
    let shadow_alpha = (50.0 + 60.0 * card.elevation) as u8;
    shapes.push(Shape::rect_filled(
        rect.expand(4.0 + 8.0 * card.elevation).translate(vec2(0.0, 6.0 * card.elevation)),
        rounding,
        Color32::from_black_alpha(shadow_alpha),
    ));
    if glow.opacity > 0.0 {
        shapes.push(Shape::rect_filled(
            rect.expand(2.0),
            rounding,
            theme::faded(theme::PURPLE, 0.5 * glow.opacity),
        ));
    }
    shapes.push(Shape::rect_filled(rect, rounding, theme::SURFACE));
    shapes.push(Shape::rect_stroke(rect, rounding, Stroke::new(1.0, theme::BORDER)));
    Shape::Vec(shapes)
}

fn paint_preview(
    ui: &mut Ui,
    rect: Rect,
    url: &str,
    image: Style,
    overlay: Style,
    icon: Style,
) {
    let mut clipped = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    clipped.set_clip_rect(rect.intersect(ui.clip_rect()));
    let scaled = paint::transformed_rect(rect, &image, TransformOrigin::Center);
    egui::Image::new(url)
        .rounding(Rounding {
            nw: ROUNDING,
            ne: ROUNDING,
            sw: 0.0,
            se: 0.0,
        })
        .paint_at(&clipped, scaled);

    if overlay.opacity > 0.0 {
        let painter = clipped.painter();
        paint::horizontal_gradient(
            painter,
            rect,
            theme::faded(theme::BLUE_STRONG, 0.35 * overlay.opacity),
            theme::faded(theme::PURPLE, 0.35 * overlay.opacity),
        );
        let center = rect.center() + vec2(0.0, icon.translate_y);
        painter.circle_filled(center, 22.0, theme::faded(Color32::WHITE, 0.2 * overlay.opacity));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "↗",
            FontId::proportional(20.0),
            theme::faded(theme::TEXT, overlay.opacity),
        );
    }
}

fn paint_badge(painter: &egui::Painter, anchor: egui::Pos2, align: Align2, badge: &StatusBadge) {
    let font = FontId::proportional(12.0);
    let galley = painter.layout_no_wrap(badge.label.to_string(), font, theme::rgba(badge.palette.text));
    let size = galley.size() + vec2(20.0, 8.0);
    let rect = align.anchor_size(anchor, size);
    let rounding = Rounding::same(size.y / 2.0);
    painter.rect_filled(rect, rounding, theme::rgba(badge.palette.background));
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, theme::rgba(badge.palette.border)));
    painter.galley(rect.center() - galley.size() / 2.0, galley, theme::rgba(badge.palette.text));
}

fn tag_chip(ui: &mut Ui, tag: &str) {
    egui::Frame::none()
        .fill(theme::SURFACE_RAISED)
        .rounding(Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).small().color(theme::TEXT_BODY));
        });
}

/// Returns the href to open when clicked; the placeholder href opens nothing
fn link_button(ui: &mut Ui, link: &Link, primary: bool) -> Option<String> {
    let fill = if primary {
        theme::BLUE_STRONG
    } else {
        theme::SURFACE_RAISED
    };
    let clicked = ui
        .add(egui::Button::new(RichText::new(link.label).color(theme::TEXT)).fill(fill))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked();
    (clicked && link.href != PLACEHOLDER_HREF).then(|| link.href.clone())
}
