//! Scroll offset tracking and the hero parallax layer

/// Latest vertical scroll offset of the page, in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    offset: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event. Elastic overscroll (negative offsets) and
    /// non-finite values are clamped to the top of the page.
    pub fn on_scroll(&mut self, offset: f32) {
        self.offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// A background layer that moves at a fixed fraction of the scroll speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    factor: f32,
}

impl Default for Parallax {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

impl Parallax {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Vertical translation of the layer for a given scroll offset
    pub fn translation(&self, scroll_offset: f32) -> f32 {
        scroll_offset * self.factor
    }
}
