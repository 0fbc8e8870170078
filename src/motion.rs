//! Easing and style tweening
//!
//! Derived styles jump between discrete targets; hosts that draw every frame
//! ease toward the current target with a [`Tween`]. Tweening changes how a
//! value moves, never where it ends up.
//!
//! ```ignore
//! let mut tween = Tween::new(PhotoLayer::Frame.style(state), config.reveal());
//! // Each frame:
//! tween.retarget(PhotoLayer::Frame.style(state));
//! tween.tick(dt);
//! paint_with(tween.current());
//! ```

use crate::presentation::Style;

// =============================================================================
// EASING FUNCTIONS
// =============================================================================

/// Cubic ease-out: fast start, slow finish
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Cubic ease-in-out: slow start, fast middle, slow finish
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// General-purpose easing for hover feedback
    #[default]
    Ease,
    /// Decelerating easing for enter/exit reveals
    EaseOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::Ease => ease_in_out_cubic(t),
            Easing::EaseOut => ease_out_cubic(t),
        }
    }
}

// =============================================================================
// TRANSITION
// =============================================================================

/// Timing of a style change, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn ease(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::Ease,
        }
    }

    pub fn ease_out(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Eased progress after `elapsed` seconds
    pub fn progress(&self, elapsed: f32) -> f32 {
        let active = elapsed - self.delay;
        if active < 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply(active / self.duration)
    }

    pub fn total(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }
}

// =============================================================================
// TWEEN
// =============================================================================

/// Eases a [`Style`] toward its latest target
#[derive(Debug, Clone)]
pub struct Tween {
    from: Style,
    to: Style,
    elapsed: f32,
    transition: Transition,
}

impl Tween {
    /// Start settled at `initial`
    pub fn new(initial: Style, transition: Transition) -> Self {
        Self {
            from: initial,
            to: initial,
            elapsed: transition.total(),
            transition,
        }
    }

    /// Aim at a new target, starting from wherever the tween is now.
    /// Re-targeting to the current target is a no-op.
    pub fn retarget(&mut self, target: Style) {
        if target == self.to {
            return;
        }
        self.from = self.current();
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Advance by `dt` seconds. Returns true while still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }
        // Large frame gaps (background tab) just finish the tween
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.transition.total());
        !self.is_settled()
    }

    pub fn current(&self) -> Style {
        Style::lerp(
            &self.from,
            &self.to,
            self.transition.progress(self.elapsed),
        )
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.transition.total()
    }

    /// Jump straight to the target
    pub fn finish(&mut self) {
        self.elapsed = self.transition.total();
        self.from = self.to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown() -> Style {
        Style::IDENTITY
    }

    fn hidden() -> Style {
        Style {
            opacity: 0.0,
            translate_y: 40.0,
            ..Style::IDENTITY
        }
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseOut] {
            assert!(easing.apply(0.0).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_transition_delay_holds_start() {
        let transition = Transition::ease_out(0.7).with_delay(0.2);
        assert_eq!(transition.progress(0.1), 0.0);
        assert!(transition.progress(0.5) > 0.0);
        assert!((transition.progress(0.9) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_instant_transition() {
        let transition = Transition::instant();
        assert_eq!(transition.progress(0.0), 1.0);
    }

    #[test]
    fn test_tween_starts_settled() {
        let tween = Tween::new(hidden(), Transition::ease_out(0.7));
        assert!(tween.is_settled());
        assert_eq!(tween.current(), hidden());
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(hidden(), Transition::ease_out(0.7));
        tween.retarget(shown());
        assert!(tween.tick(0.35));
        let mid = tween.current();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        assert!(!tween.tick(0.35));
        assert_eq!(tween.current(), shown());
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current() {
        let mut tween = Tween::new(hidden(), Transition::ease(1.0));
        tween.retarget(shown());
        tween.tick(0.5);
        let mid = tween.current();

        tween.retarget(hidden());
        assert_eq!(tween.current(), mid);
        tween.tick(1.0);
        assert_eq!(tween.current(), hidden());
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut tween = Tween::new(hidden(), Transition::ease(1.0));
        tween.retarget(shown());
        tween.tick(0.6);
        let before = tween.current();
        tween.retarget(shown());
        assert_eq!(tween.current(), before);
    }

    #[test]
    fn test_finish_jumps() {
        let mut tween = Tween::new(hidden(), Transition::ease(1.0));
        tween.retarget(shown());
        tween.finish();
        assert!(tween.is_settled());
        assert_eq!(tween.current(), shown());
    }
}
