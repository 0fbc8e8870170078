//! Motion configuration
//!
//! Loaded from `config/motion.yaml`, which is embedded at compile time so the
//! WASM build needs no filesystem. `Default` mirrors the shipped file; if the
//! embedded YAML ever fails to parse we log and fall back to it.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::motion::Transition;
use crate::visibility::Threshold;

/// Embedded copy of `config/motion.yaml`
pub const DEFAULT_MOTION_CONFIG: &str = include_str!("../config/motion.yaml");

static GLOBAL_CONFIG: OnceLock<MotionConfig> = OnceLock::new();

/// Process-wide motion config, parsed once from the embedded YAML
pub fn global_config() -> &'static MotionConfig {
    GLOBAL_CONFIG.get_or_init(|| match MotionConfig::from_yaml_str(DEFAULT_MOTION_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Embedded motion config is invalid, using defaults: {}", e);
            MotionConfig::default()
        }
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub reveal_threshold: f32,
    pub section_threshold: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.3,
            section_threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub factor: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

/// Transition durations in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationsConfig {
    pub reveal: f32,
    pub hover: f32,
    pub card: f32,
    pub card_overlay: f32,
    pub tile: f32,
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            reveal: 0.7,
            hover: 0.5,
            card: 0.5,
            card_overlay: 0.3,
            tile: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub description_chars: usize,
    pub max_highlights: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            description_chars: 180,
            max_highlights: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub visibility: VisibilityConfig,
    pub parallax: ParallaxConfig,
    pub durations: DurationsConfig,
    pub stagger_step: f32,
    pub card: CardConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityConfig::default(),
            parallax: ParallaxConfig::default(),
            durations: DurationsConfig::default(),
            stagger_step: 0.1,
            card: CardConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Parse and validate a motion config document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: MotionConfig =
            serde_yaml::from_str(yaml).map_err(|e| FolioError::config("motion.yaml", e))?;
        // Surface bad thresholds at load time rather than at first observe()
        config.reveal_threshold()?;
        config.section_threshold()?;
        Ok(config)
    }

    pub fn reveal_threshold(&self) -> Result<Threshold> {
        Threshold::new(self.visibility.reveal_threshold)
    }

    pub fn section_threshold(&self) -> Result<Threshold> {
        Threshold::new(self.visibility.section_threshold)
    }

    /// Enter/exit transition for revealed layers
    pub fn reveal(&self) -> Transition {
        Transition::ease_out(self.durations.reveal)
    }

    /// Hover-only overlays (photo overlay and caption)
    pub fn hover(&self) -> Transition {
        Transition::ease(self.durations.hover)
    }

    pub fn card(&self) -> Transition {
        Transition::ease(self.durations.card)
    }

    pub fn card_overlay(&self) -> Transition {
        Transition::ease(self.durations.card_overlay)
    }

    /// Skill tile entrance, staggered by the tile's position in the grid.
    /// `tile(0)` is the undelayed variant used for hover.
    pub fn tile(&self, index: usize) -> Transition {
        Transition::ease(self.durations.tile).with_delay(self.stagger_step * index as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let parsed = MotionConfig::from_yaml_str(DEFAULT_MOTION_CONFIG).unwrap();
        assert_eq!(parsed, MotionConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed = MotionConfig::from_yaml_str("parallax:\n  factor: 0.25\n").unwrap();
        assert!((parsed.parallax.factor - 0.25).abs() < f32::EPSILON);
        assert_eq!(parsed.visibility, VisibilityConfig::default());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = MotionConfig::from_yaml_str("visibility:\n  reveal_threshold: 1.5\n")
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidThreshold(t) if (t - 1.5).abs() < 1e-6));
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = MotionConfig::from_yaml_str("visibility: [").unwrap_err();
        assert!(matches!(err, FolioError::Config { source_name: "motion.yaml", .. }));
    }

    #[test]
    fn test_tile_delay_staggers_by_index() {
        let config = MotionConfig::default();
        assert!((config.tile(0).delay - 0.0).abs() < 1e-6);
        assert!((config.tile(3).delay - 0.3).abs() < 1e-6);
    }
}
