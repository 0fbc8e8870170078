//! Axis-aligned rectangles in layout (logical pixel) space
//!
//! The engine does not depend on egui, so it carries its own minimal rect.
//! Hosts convert at the boundary.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle; edges count as inside
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_min_max(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        (self.max_x - self.min_x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max_y - self.min_y).max(0.0)
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Overlap of two rects; empty (zero-area) when they do not overlap
    pub fn intersect(&self, other: &Rect) -> Rect {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        Rect {
            min_x,
            min_y,
            max_x: self.max_x.min(other.max_x).max(min_x),
            max_y: self.max_y.min(other.max_y).max(min_y),
        }
    }
}

/// Fraction of `target`'s area that lies inside `viewport`, in [0, 1]
///
/// A degenerate (zero-area) target is either fully in view or not at all,
/// depending on whether its origin lies inside the viewport.
pub fn intersection_ratio(target: &Rect, viewport: &Rect) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        return if viewport.contains_point(target.min_x, target.min_y) {
            1.0
        } else {
            0.0
        };
    }
    (target.intersect(viewport).area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_origin_size(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_ratio_fully_inside() {
        let target = Rect::from_origin_size(100.0, 100.0, 200.0, 200.0);
        assert!((intersection_ratio(&target, &viewport()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_partially_below_fold() {
        // 100 of 400 rows visible
        let target = Rect::from_origin_size(0.0, 700.0, 1000.0, 400.0);
        assert!((intersection_ratio(&target, &viewport()) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_disjoint_is_zero() {
        let target = Rect::from_origin_size(0.0, 900.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&target, &viewport()), 0.0);
    }

    #[test]
    fn test_zero_area_target() {
        let inside = Rect::from_origin_size(10.0, 10.0, 0.0, 0.0);
        let outside = Rect::from_origin_size(10.0, 900.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&inside, &viewport()), 1.0);
        assert_eq!(intersection_ratio(&outside, &viewport()), 0.0);
    }

    #[test]
    fn test_intersect_never_inverts() {
        let a = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_origin_size(50.0, 50.0, 10.0, 10.0);
        let overlap = a.intersect(&b);
        assert_eq!(overlap.area(), 0.0);
        assert!(overlap.max_x >= overlap.min_x);
    }
}
