//! Per-element tweens
//!
//! Every animated element gets a [`Tween`] keyed by its egui `Id`. Each
//! frame the renderer asks for the element's style with the current target;
//! the animator retargets, advances and returns the in-between value.

use std::collections::HashMap;

use egui::Id;
use folio::{Style, Transition, Tween};

#[derive(Default)]
pub struct Animator {
    tweens: HashMap<Id, Tween>,
    dt: f32,
    animating: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame that advances tweens by `dt` seconds
    pub fn begin_frame(&mut self, dt: f32) {
        self.dt = dt.max(0.0);
        self.animating = false;
    }

    /// Current style for `id` easing toward `target`. A new element starts
    /// settled at its first target.
    pub fn style(&mut self, id: Id, target: Style, transition: Transition) -> Style {
        let dt = self.dt;
        let tween = self
            .tweens
            .entry(id)
            .or_insert_with(|| Tween::new(target, transition));
        tween.set_transition(transition);
        tween.retarget(target);
        if tween.tick(dt) {
            self.animating = true;
        }
        tween.current()
    }

    /// Any tween still moving this frame
    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_target_is_settled() {
        let mut animator = Animator::new();
        animator.begin_frame(0.016);
        let style = animator.style(Id::new("a"), Style::HIDDEN, Transition::ease(0.5));
        assert_eq!(style, Style::HIDDEN);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_retarget_animates_then_settles() {
        let mut animator = Animator::new();
        let id = Id::new("a");
        animator.begin_frame(0.0);
        animator.style(id, Style::HIDDEN, Transition::ease(0.5));

        animator.begin_frame(0.1);
        let mid = animator.style(id, Style::IDENTITY, Transition::ease(0.5));
        assert!(animator.is_animating());
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        animator.begin_frame(1.0);
        let end = animator.style(id, Style::IDENTITY, Transition::ease(0.5));
        assert_eq!(end, Style::IDENTITY);
        assert!(!animator.is_animating());
    }
}
