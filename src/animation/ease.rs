use std::collections::BTreeMap;

use crate::config::DEFAULT_EASING;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Built-in easing curves.
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Symmetric quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Symmetric cubic ease-in-out.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Every built-in curve.
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    /// Map progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Registry name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::InQuad => "EaseInQuad",
            Self::OutQuad => "EaseOutQuad",
            Self::InOutQuad => "EaseInOutQuad",
            Self::InCubic => "EaseInCubic",
            Self::OutCubic => "EaseOutCubic",
            Self::InOutCubic => "EaseInOutCubic",
        }
    }

    /// Curve registered under `name`, if it is a built-in.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    fn as_fn(self) -> EaseFn {
        match self {
            Self::Linear => |t| Ease::Linear.apply(t),
            Self::InQuad => |t| Ease::InQuad.apply(t),
            Self::OutQuad => |t| Ease::OutQuad.apply(t),
            Self::InOutQuad => |t| Ease::InOutQuad.apply(t),
            Self::InCubic => |t| Ease::InCubic.apply(t),
            Self::OutCubic => |t| Ease::OutCubic.apply(t),
            Self::InOutCubic => |t| Ease::InOutCubic.apply(t),
        }
    }
}

/// A pure progress remapping, nominally `[0, 1] -> [0, 1]`.
pub type EaseFn = fn(f64) -> f64;

#[derive(Clone, Debug)]
/// Easing curves keyed by name.
///
/// Unknown names resolve to `EaseInOutCubic`.
pub struct EasingRegistry {
    curves: BTreeMap<String, EaseFn>,
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EasingRegistry {
    /// Registry holding every [`Ease`] under its [`Ease::name`].
    pub fn builtin() -> Self {
        let curves = Ease::ALL
            .into_iter()
            .map(|e| (e.name().to_string(), e.as_fn()))
            .collect();
        Self { curves }
    }

    /// Add or replace a named curve.
    pub fn register(&mut self, name: impl Into<String>, curve: EaseFn) {
        self.curves.insert(name.into(), curve);
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    /// Curve for `name`, falling back to the default curve.
    pub fn resolve(&self, name: &str) -> EaseFn {
        if let Some(curve) = self.curves.get(name) {
            return *curve;
        }
        tracing::warn!(easing = name, fallback = DEFAULT_EASING, "unknown easing");
        self.curves
            .get(DEFAULT_EASING)
            .copied()
            .unwrap_or(Ease::InOutCubic.as_fn())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
