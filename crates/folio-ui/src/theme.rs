//! Palette and text styles

use egui::{Color32, FontFamily, FontId, TextStyle};
use folio::card::Rgba;

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const SURFACE: Color32 = Color32::from_rgb(31, 41, 55);
pub const SURFACE_RAISED: Color32 = Color32::from_rgb(55, 65, 81);
pub const BORDER: Color32 = Color32::from_rgb(75, 85, 99);
pub const NAV_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(15, 21, 34, 204);

pub const TEXT: Color32 = Color32::WHITE;
pub const TEXT_BODY: Color32 = Color32::from_rgb(209, 213, 219);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);

pub const BLUE: Color32 = Color32::from_rgb(96, 165, 250);
pub const BLUE_STRONG: Color32 = Color32::from_rgb(37, 99, 235);
pub const PURPLE: Color32 = Color32::from_rgb(147, 51, 234);
pub const PURPLE_LIGHT: Color32 = Color32::from_rgb(192, 132, 252);
pub const PINK: Color32 = Color32::from_rgb(236, 72, 153);
pub const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);

/// Content column width on wide screens
pub const MAX_CONTENT_WIDTH: f32 = 1100.0;
pub const NAV_HEIGHT: f32 = 64.0;

pub fn rgba(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// `color` with its alpha scaled by `opacity` in [0, 1]
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub fn heading_font() -> FontId {
    FontId::new(36.0, FontFamily::Proportional)
}

pub fn install(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.style_mut(|style| {
        style.text_styles = [
            (TextStyle::Heading, heading_font()),
            (TextStyle::Body, FontId::new(16.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(16.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        ]
        .into();
        style.visuals.panel_fill = BACKGROUND;
        style.visuals.override_text_color = Some(TEXT_BODY);
        style.visuals.hyperlink_color = BLUE;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_keeps_channels() {
        let c = rgba(Rgba::new(34, 197, 94, 255));
        assert_eq!(c, Color32::from_rgb(34, 197, 94));
    }

    #[test]
    fn test_faded_clamps() {
        assert_eq!(faded(BLUE, 2.0), BLUE);
        assert_eq!(faded(BLUE, -1.0).a(), 0);
    }
}
