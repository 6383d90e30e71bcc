//! Tunable engine parameters.
//!
//! The matching weights and sample counts are empirical, so they live here instead of
//! being baked into the tweening code. Defaults reproduce the stock behaviour.

use std::path::Path;

use crate::{
    foundation::error::{InkbetweenError, InkbetweenResult},
    model::stroke::{DEFAULT_OPACITY, DEFAULT_THICKNESS},
};

/// Playback duration used when none (or a non-positive one) is supplied.
pub const DEFAULT_DURATION_MS: f64 = 10_000.0;
/// Easing used when none is configured or a name is unknown.
pub const DEFAULT_EASING: &str = "EaseInOutCubic";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters of the matcher and the stroke tweener.
pub struct TweenConfig {
    /// Resample count for matched stroke pairs.
    pub matched_samples: usize,
    /// Resample count for unmatched strokes fading against a ghost.
    pub ghost_samples: usize,
    /// Point count of a standalone ghost stroke.
    pub full_ghost_samples: usize,
    /// Weight of the polyline-length difference in the match cost.
    pub length_weight: f64,
    /// Floor applied to each polyline length before comparing.
    pub min_length: f64,
    /// Thickness of ghost strokes.
    pub ghost_thickness: f64,
    /// Substituted for missing thickness while tweening.
    pub default_thickness: f64,
    /// Substituted for missing opacity while tweening.
    pub default_opacity: f64,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            matched_samples: 60,
            ghost_samples: 40,
            full_ghost_samples: 20,
            length_weight: 0.1,
            min_length: 1.0,
            ghost_thickness: 0.001,
            default_thickness: DEFAULT_THICKNESS,
            default_opacity: DEFAULT_OPACITY,
        }
    }
}

impl TweenConfig {
    /// Check ranges.
    pub fn validate(&self) -> InkbetweenResult<()> {
        for (name, n) in [
            ("matched_samples", self.matched_samples),
            ("ghost_samples", self.ghost_samples),
            ("full_ghost_samples", self.full_ghost_samples),
        ] {
            if n < 2 {
                return Err(InkbetweenError::validation(format!(
                    "tween.{name} must be >= 2"
                )));
            }
        }
        for (name, v) in [
            ("length_weight", self.length_weight),
            ("min_length", self.min_length),
            ("ghost_thickness", self.ghost_thickness),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(InkbetweenError::validation(format!(
                    "tween.{name} must be finite and >= 0"
                )));
            }
        }
        if !self.default_thickness.is_finite() || self.default_thickness <= 0.0 {
            return Err(InkbetweenError::validation(
                "tween.default_thickness must be finite and > 0",
            ));
        }
        if !(0.0..=100.0).contains(&self.default_opacity) {
            return Err(InkbetweenError::validation(
                "tween.default_opacity must be in [0, 100]",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters of keyframe playback.
pub struct PlaybackConfig {
    /// Total playback duration across all segments, in milliseconds.
    pub duration_ms: f64,
    /// Easing name looked up in the registry.
    pub easing: String,
    /// Soft limit on stored keyframes.
    pub capacity: usize,
    /// Frame rate used for offline frame stepping.
    pub fps: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: DEFAULT_EASING.to_string(),
            capacity: 10,
            fps: 60,
        }
    }
}

impl PlaybackConfig {
    /// Check ranges.
    pub fn validate(&self) -> InkbetweenResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(InkbetweenError::validation(
                "playback.duration_ms must be finite and > 0",
            ));
        }
        if self.fps == 0 {
            return Err(InkbetweenError::validation("playback.fps must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete engine configuration, as stored in a JSON file.
pub struct Config {
    /// Matching and tweening parameters.
    pub tween: TweenConfig,
    /// Playback parameters.
    pub playback: PlaybackConfig,
}

impl Config {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> InkbetweenResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> InkbetweenResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            InkbetweenError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    /// Validate both sections.
    pub fn validate(&self) -> InkbetweenResult<()> {
        self.tween.validate()?;
        self.playback.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
