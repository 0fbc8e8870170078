//! Presentation derivation
//!
//! Every visual element's style is a pure function of its visibility flag,
//! its hover flag and static configuration. There is no hidden state: each
//! function below is a direct conditional mapping.

use crate::config::MotionConfig;
use crate::motion::{lerp_f32, Transition};
use crate::parallax::Parallax;

// =============================================================================
// STYLE
// =============================================================================

/// Inputs to every derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub visible: bool,
    pub hovered: bool,
}

impl Interaction {
    pub fn new(visible: bool, hovered: bool) -> Self {
        Self { visible, hovered }
    }
}

/// Resolved visual state of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f32,
    /// Downward offset in logical pixels
    pub translate_y: f32,
    pub scale: f32,
    /// Clockwise rotation
    pub rotation_deg: f32,
    /// Shadow lift, 0 = resting shadow, 1 = lifted shadow
    pub elevation: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Style {
    pub const IDENTITY: Style = Style {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
        elevation: 0.0,
    };

    pub const HIDDEN: Style = Style {
        opacity: 0.0,
        ..Style::IDENTITY
    };

    pub fn lerp(a: &Style, b: &Style, t: f32) -> Style {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }
        Style {
            opacity: lerp_f32(a.opacity, b.opacity, t),
            translate_y: lerp_f32(a.translate_y, b.translate_y, t),
            scale: lerp_f32(a.scale, b.scale, t),
            rotation_deg: lerp_f32(a.rotation_deg, b.rotation_deg, t),
            elevation: lerp_f32(a.elevation, b.elevation, t),
        }
    }
}

/// Pivot for scale and rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOrigin {
    Center,
    CenterBottom,
}

// =============================================================================
// ANIMATED PHOTO
// =============================================================================

/// Stacked layers of the about-panel photo, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoLayer {
    /// Gradient card behind the photo that tilts on hover
    Backdrop,
    /// Bordered frame holding the image
    Frame,
    Image,
    /// Dark gradient over the image
    Overlay,
    /// Name and role text
    Caption,
    /// Blurred orb at the bottom-right corner
    AccentPrimary,
    /// Blurred orb at the top-left corner
    AccentSecondary,
}

impl PhotoLayer {
    pub const ALL: [PhotoLayer; 7] = [
        Self::AccentPrimary,
        Self::AccentSecondary,
        Self::Backdrop,
        Self::Frame,
        Self::Image,
        Self::Overlay,
        Self::Caption,
    ];

    pub fn style(self, state: Interaction) -> Style {
        let Interaction { visible, hovered } = state;
        match self {
            Self::Backdrop => Style {
                opacity: if visible { 1.0 } else { 0.0 },
                scale: match (hovered, visible) {
                    (true, _) => 1.05,
                    (false, true) => 1.03,
                    (false, false) => 0.97,
                },
                rotation_deg: if hovered { 6.0 } else { 0.0 },
                elevation: if hovered { 1.0 } else { 0.0 },
                ..Style::IDENTITY
            },
            Self::Frame => Style {
                opacity: if visible { 1.0 } else { 0.0 },
                translate_y: if visible { 0.0 } else { 40.0 },
                scale: if hovered { 1.02 } else { 1.0 },
                ..Style::IDENTITY
            },
            Self::Image => Style {
                scale: if hovered { 1.05 } else { 1.0 },
                ..Style::IDENTITY
            },
            Self::Overlay => Style {
                opacity: if hovered { 0.7 } else { 0.0 },
                ..Style::IDENTITY
            },
            Self::Caption => Style {
                opacity: if hovered { 1.0 } else { 0.0 },
                translate_y: if hovered { 0.0 } else { 40.0 },
                ..Style::IDENTITY
            },
            Self::AccentPrimary => Style {
                opacity: if visible { 0.8 } else { 0.0 },
                scale: match (hovered, visible) {
                    (true, _) => 1.1,
                    (false, true) => 1.0,
                    (false, false) => 0.0,
                },
                ..Style::IDENTITY
            },
            Self::AccentSecondary => Style {
                opacity: if visible { 0.7 } else { 0.0 },
                scale: match (hovered, visible) {
                    (true, _) => 1.25,
                    (false, true) => 1.0,
                    (false, false) => 0.0,
                },
                ..Style::IDENTITY
            },
        }
    }

    pub fn transition(self, config: &MotionConfig) -> Transition {
        match self {
            Self::Backdrop | Self::Frame | Self::Image => config.reveal(),
            Self::Overlay | Self::Caption => config.hover(),
            Self::AccentPrimary => config.reveal().with_delay(0.1),
            Self::AccentSecondary => config.reveal().with_delay(0.2),
        }
    }

    pub fn origin(self) -> TransformOrigin {
        match self {
            Self::Backdrop | Self::Frame => TransformOrigin::CenterBottom,
            _ => TransformOrigin::Center,
        }
    }
}

// =============================================================================
// PROJECT CARD
// =============================================================================

/// Hover-driven layers of a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLayer {
    /// The whole card
    Card,
    PreviewImage,
    /// Tinted overlay on the preview block
    PreviewOverlay,
    /// External-link icon centered on the overlay
    OverlayIcon,
    /// Gradient outline around the card
    Glow,
}

impl CardLayer {
    pub const ALL: [CardLayer; 5] = [
        Self::Card,
        Self::PreviewImage,
        Self::PreviewOverlay,
        Self::OverlayIcon,
        Self::Glow,
    ];

    pub fn style(self, hovered: bool) -> Style {
        match self {
            Self::Card => Style {
                scale: if hovered { 1.02 } else { 1.0 },
                elevation: if hovered { 1.0 } else { 0.0 },
                ..Style::IDENTITY
            },
            Self::PreviewImage => Style {
                scale: if hovered { 1.1 } else { 1.0 },
                ..Style::IDENTITY
            },
            Self::PreviewOverlay | Self::Glow => Style {
                opacity: if hovered { 1.0 } else { 0.0 },
                ..Style::IDENTITY
            },
            Self::OverlayIcon => Style {
                translate_y: if hovered { 0.0 } else { 16.0 },
                ..Style::IDENTITY
            },
        }
    }

    pub fn transition(self, config: &MotionConfig) -> Transition {
        match self {
            Self::Card | Self::PreviewImage | Self::Glow => config.card(),
            Self::PreviewOverlay | Self::OverlayIcon => config.card_overlay(),
        }
    }
}

// =============================================================================
// SMALL ELEMENTS
// =============================================================================

/// Skill tile: grows on hover
pub fn skill_tile(hovered: bool) -> Style {
    Style {
        scale: if hovered { 1.05 } else { 1.0 },
        ..Style::IDENTITY
    }
}

/// Filled call-to-action buttons in the hero and the contact form
pub fn button(hovered: bool) -> Style {
    Style {
        scale: if hovered { 1.05 } else { 1.0 },
        elevation: if hovered { 1.0 } else { 0.0 },
        ..Style::IDENTITY
    }
}

/// Hero text block: fades up once the page is mounted
pub fn hero_content(mounted: bool) -> Style {
    Style {
        opacity: if mounted { 1.0 } else { 0.0 },
        translate_y: if mounted { 0.0 } else { 30.0 },
        ..Style::IDENTITY
    }
}

/// Hero background layer, shifted down by the parallax translation
pub fn hero_background(scroll_offset: f32, parallax: &Parallax) -> Style {
    Style {
        translate_y: parallax.translation(scroll_offset),
        ..Style::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::HoverState;

    const STATES: [Interaction; 4] = [
        Interaction { visible: false, hovered: false },
        Interaction { visible: false, hovered: true },
        Interaction { visible: true, hovered: false },
        Interaction { visible: true, hovered: true },
    ];

    #[test]
    fn test_hidden_photo_is_transparent_until_visible() {
        let hidden = Interaction::default();
        for layer in [
            PhotoLayer::Backdrop,
            PhotoLayer::Frame,
            PhotoLayer::AccentPrimary,
            PhotoLayer::AccentSecondary,
        ] {
            assert_eq!(layer.style(hidden).opacity, 0.0, "{layer:?}");
        }
        assert_eq!(PhotoLayer::Frame.style(hidden).translate_y, 40.0);
        assert_eq!(PhotoLayer::Backdrop.style(hidden).scale, 0.97);
    }

    #[test]
    fn test_visible_photo_values() {
        let shown = Interaction::new(true, false);
        let backdrop = PhotoLayer::Backdrop.style(shown);
        assert_eq!(backdrop.opacity, 1.0);
        assert_eq!(backdrop.scale, 1.03);
        assert_eq!(backdrop.rotation_deg, 0.0);
        assert_eq!(PhotoLayer::Frame.style(shown).translate_y, 0.0);
        assert_eq!(PhotoLayer::AccentPrimary.style(shown).opacity, 0.8);
        assert_eq!(PhotoLayer::AccentSecondary.style(shown).opacity, 0.7);
    }

    #[test]
    fn test_hover_tilts_backdrop_and_reveals_caption() {
        let hovered = Interaction::new(true, true);
        let backdrop = PhotoLayer::Backdrop.style(hovered);
        assert_eq!(backdrop.rotation_deg, 6.0);
        assert_eq!(backdrop.scale, 1.05);
        assert_eq!(backdrop.elevation, 1.0);
        assert_eq!(PhotoLayer::Overlay.style(hovered).opacity, 0.7);
        assert_eq!(PhotoLayer::Caption.style(hovered).opacity, 1.0);
        assert_eq!(PhotoLayer::Caption.style(hovered).translate_y, 0.0);
        assert_eq!(PhotoLayer::Image.style(hovered).scale, 1.05);
    }

    #[test]
    fn test_hover_round_trip_restores_every_layer() {
        for visible in [false, true] {
            let mut hover = HoverState::new();
            let resting: Vec<Style> = PhotoLayer::ALL
                .iter()
                .map(|layer| layer.style(Interaction::new(visible, hover.is_hovered())))
                .collect();
            let resting_card: Vec<Style> = CardLayer::ALL
                .iter()
                .map(|layer| layer.style(hover.is_hovered()))
                .collect();

            hover.pointer_enter();
            let hovered: Vec<Style> = PhotoLayer::ALL
                .iter()
                .map(|layer| layer.style(Interaction::new(visible, hover.is_hovered())))
                .collect();
            assert_ne!(hovered, resting);
            hover.pointer_leave();

            let after: Vec<Style> = PhotoLayer::ALL
                .iter()
                .map(|layer| layer.style(Interaction::new(visible, hover.is_hovered())))
                .collect();
            let after_card: Vec<Style> = CardLayer::ALL
                .iter()
                .map(|layer| layer.style(hover.is_hovered()))
                .collect();
            assert_eq!(after, resting);
            assert_eq!(after_card, resting_card);
        }
    }

    #[test]
    fn test_hover_changes_only_hover_layers_when_hidden() {
        // Hover while hidden must not make the reveal layers visible
        let hidden_hovered = Interaction::new(false, true);
        assert_eq!(PhotoLayer::Backdrop.style(hidden_hovered).opacity, 0.0);
        assert_eq!(PhotoLayer::Frame.style(hidden_hovered).opacity, 0.0);
    }

    #[test]
    fn test_every_state_is_finite() {
        for state in STATES {
            for layer in PhotoLayer::ALL {
                let s = layer.style(state);
                assert!(s.opacity.is_finite() && (0.0..=1.0).contains(&s.opacity));
                assert!(s.scale.is_finite() && s.scale >= 0.0);
            }
        }
    }

    #[test]
    fn test_accent_delays() {
        let config = MotionConfig::default();
        assert!((PhotoLayer::AccentPrimary.transition(&config).delay - 0.1).abs() < 1e-6);
        assert!((PhotoLayer::AccentSecondary.transition(&config).delay - 0.2).abs() < 1e-6);
        assert_eq!(PhotoLayer::Frame.transition(&config).delay, 0.0);
    }

    #[test]
    fn test_card_layers() {
        assert_eq!(CardLayer::Card.style(true).scale, 1.02);
        assert_eq!(CardLayer::PreviewImage.style(true).scale, 1.1);
        assert_eq!(CardLayer::PreviewOverlay.style(false).opacity, 0.0);
        assert_eq!(CardLayer::OverlayIcon.style(false).translate_y, 16.0);
        assert_eq!(CardLayer::OverlayIcon.style(true).translate_y, 0.0);
    }

    #[test]
    fn test_hero_background_parallax() {
        let parallax = Parallax::default();
        assert_eq!(hero_background(0.0, &parallax).translate_y, 0.0);
        assert_eq!(hero_background(200.0, &parallax).translate_y, 100.0);
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = PhotoLayer::Frame.style(Interaction::default());
        let b = PhotoLayer::Frame.style(Interaction::new(true, true));
        assert_eq!(Style::lerp(&a, &b, 0.0), a);
        assert_eq!(Style::lerp(&a, &b, 1.0), b);
    }
}
