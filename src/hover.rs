//! Pointer hover state

/// Edge produced when the hover state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Entered,
    Left,
}

/// Whether the pointer is over a region
///
/// Event-driven hosts call `pointer_enter` / `pointer_leave`; immediate-mode
/// hosts that poll containment every frame call `update`. Touch input never
/// produces hover, so on touch devices the state simply stays `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Feed the polled containment; returns the edge if the state changed
    pub fn update(&mut self, pointer_inside: bool) -> Option<HoverTransition> {
        if pointer_inside == self.hovered {
            return None;
        }
        self.hovered = pointer_inside;
        Some(if pointer_inside {
            HoverTransition::Entered
        } else {
            HoverTransition::Left
        })
    }
}
