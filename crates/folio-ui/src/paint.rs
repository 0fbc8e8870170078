//! Painter helpers that apply a [`Style`] to egui geometry

use egui::{epaint::Mesh, Color32, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};
use folio::{Style, TransformOrigin};

/// Convert to the engine's rect type
pub fn to_engine(rect: Rect) -> folio::Rect {
    folio::Rect::from_min_max(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

pub fn pivot(rect: Rect, origin: TransformOrigin) -> Pos2 {
    match origin {
        TransformOrigin::Center => rect.center(),
        TransformOrigin::CenterBottom => rect.center_bottom(),
    }
}

/// `rect` scaled about its origin point, then shifted by `translate_y`
pub fn transformed_rect(rect: Rect, style: &Style, origin: TransformOrigin) -> Rect {
    let p = pivot(rect, origin);
    let scale = style.scale.max(0.0);
    let min = p + (rect.min - p) * scale;
    let max = p + (rect.max - p) * scale;
    Rect::from_min_max(min, max).translate(Vec2::new(0.0, style.translate_y))
}

/// Corners of `rect` rotated clockwise by `degrees` about `center`
pub fn rotated_quad(rect: Rect, degrees: f32, center: Pos2) -> [Pos2; 4] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let rotate = |p: Pos2| {
        let d = p - center;
        center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    };
    [
        rotate(rect.left_top()),
        rotate(rect.right_top()),
        rotate(rect.right_bottom()),
        rotate(rect.left_bottom()),
    ]
}

/// Left-to-right two-stop gradient
pub fn horizontal_gradient(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Top-to-bottom two-stop gradient
pub fn vertical_gradient(painter: &Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Soft drop shadow; `elevation` 0 rests, 1 lifts
pub fn shadow(painter: &Painter, rect: Rect, rounding: Rounding, elevation: f32, opacity: f32) {
    let spread = 6.0 + 14.0 * elevation;
    for step in 1..=3 {
        let grow = spread * step as f32 / 3.0;
        let alpha = (40.0 * opacity / step as f32) as u8;
        painter.rect_filled(
            rect.expand(grow).translate(Vec2::new(0.0, grow * 0.5)),
            rounding,
            Color32::from_black_alpha(alpha),
        );
    }
}

/// Blurred accent orb approximated by concentric circles
pub fn orb(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    for step in (1..=6).rev() {
        let r = radius * step as f32 / 6.0;
        painter.circle_filled(center, r, color.gamma_multiply(0.18));
    }
}

pub fn outline(painter: &Painter, rect: Rect, rounding: Rounding, color: Color32) {
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn square() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let r = transformed_rect(square(), &Style::IDENTITY, TransformOrigin::Center);
        assert_eq!(r, square());
    }

    #[test]
    fn test_scale_about_center_bottom_keeps_bottom_edge() {
        let style = Style {
            scale: 1.1,
            ..Style::IDENTITY
        };
        let r = transformed_rect(square(), &style, TransformOrigin::CenterBottom);
        assert!((r.max.y - 100.0).abs() < 1e-4);
        assert!((r.width() - 110.0).abs() < 1e-4);
    }

    #[test]
    fn test_translate_applies_after_scale() {
        let style = Style {
            translate_y: 40.0,
            ..Style::IDENTITY
        };
        let r = transformed_rect(square(), &style, TransformOrigin::Center);
        assert_eq!(r.min.y, 40.0);
    }

    #[test]
    fn test_zero_rotation_keeps_corners() {
        let quad = rotated_quad(square(), 0.0, square().center());
        assert_eq!(quad[0], pos2(0.0, 0.0));
        assert_eq!(quad[2], pos2(100.0, 100.0));
    }

    #[test]
    fn test_quarter_turn_is_clockwise() {
        let quad = rotated_quad(square(), 90.0, square().center());
        // top-left swings to top-right
        assert!((quad[0].x - 100.0).abs() < 1e-3);
        assert!(quad[0].y.abs() < 1e-3);
    }
}
