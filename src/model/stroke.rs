use crate::foundation::{
    core::{Hsva, Point},
    error::{InkbetweenError, InkbetweenResult},
};

/// Thickness used when a captured stroke carries none.
pub const DEFAULT_THICKNESS: f64 = 4.0;
/// Opacity used when neither the stroke nor its colour carries one.
pub const DEFAULT_OPACITY: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawStroke")]
/// A freehand polyline stroke with fully resolved appearance.
///
/// `opacity` is the authoritative alpha; `color.a` mirrors it after ingestion.
/// Strokes with fewer than two points are kept as data but never rendered.
pub struct Stroke {
    /// Stroke colour.
    pub color: Hsva,
    /// Line width, > 0.
    pub thickness: f64,
    /// Opacity percentage in `[0, 100]`.
    pub opacity: f64,
    /// Eraser strokes only affect the live canvas and are never tweened.
    pub eraser: bool,
    /// Ordered polyline vertices.
    pub points: Vec<Point>,
}

impl Stroke {
    /// Opaque non-eraser stroke with default thickness.
    pub fn new(color: Hsva, points: Vec<Point>) -> Self {
        Self {
            color: color.with_alpha(DEFAULT_OPACITY),
            thickness: DEFAULT_THICKNESS,
            opacity: DEFAULT_OPACITY,
            eraser: false,
            points,
        }
    }

    /// Set the thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the opacity, keeping the colour alpha in sync.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self.color.a = opacity;
        self
    }

    /// Mark the stroke as an eraser stroke.
    pub fn as_eraser(mut self) -> Self {
        self.eraser = true;
        self
    }

    /// Whether the stroke has enough points to be drawn.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Resolve a captured stroke, filling absent fields from the given defaults.
    ///
    /// Alpha resolution order: explicit finite `opacity`, then the colour's alpha,
    /// then `default_opacity`. Missing or non-positive thickness becomes
    /// `default_thickness`. Non-finite coordinates or colour channels are rejected.
    pub fn from_raw(
        raw: RawStroke,
        default_thickness: f64,
        default_opacity: f64,
    ) -> InkbetweenResult<Self> {
        let RawStroke {
            color,
            thickness,
            opacity,
            eraser,
            points,
        } = raw;

        for (name, value) in [("h", color.h), ("s", color.s), ("v", color.v)] {
            if !value.is_finite() {
                return Err(InkbetweenError::validation(format!(
                    "stroke color.{name} must be finite"
                )));
            }
        }
        if let Some((i, _)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InkbetweenError::validation(format!(
                "stroke point {i} has a non-finite coordinate"
            )));
        }

        let opacity = resolve_alpha(opacity, color.alpha, default_opacity);
        let thickness = match thickness {
            Some(t) if t.is_finite() && t > 0.0 => t,
            _ => default_thickness,
        };

        Ok(Self {
            color: Hsva::new(color.h, color.s, color.v, opacity),
            thickness,
            opacity,
            eraser,
            points,
        })
    }
}

/// Pick the effective alpha of a stroke.
pub fn resolve_alpha(opacity: Option<f64>, color_alpha: Option<f64>, default: f64) -> f64 {
    match (opacity, color_alpha) {
        (Some(o), _) if o.is_finite() => o,
        (_, Some(a)) if a.is_finite() => a,
        _ => default,
    }
}

impl TryFrom<RawStroke> for Stroke {
    type Error = InkbetweenError;

    fn try_from(raw: RawStroke) -> Result<Self, Self::Error> {
        Self::from_raw(raw, DEFAULT_THICKNESS, DEFAULT_OPACITY)
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// Stroke as delivered by a capture source, with optional appearance fields.
pub struct RawStroke {
    /// Captured colour.
    #[serde(default)]
    pub color: RawColor,
    /// Line width, if recorded.
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Explicit opacity, if recorded. Wins over the colour alpha.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// Eraser flag.
    #[serde(default)]
    pub eraser: bool,
    /// Ordered polyline vertices.
    #[serde(default)]
    pub points: Vec<Point>,
}

#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
/// Captured HSB colour with optional embedded alpha.
pub struct RawColor {
    /// Hue in degrees.
    #[serde(default)]
    pub h: f64,
    /// Saturation percentage.
    #[serde(default)]
    pub s: f64,
    /// Brightness percentage.
    #[serde(default)]
    pub v: f64,
    /// Embedded alpha percentage.
    #[serde(default, alias = "a")]
    pub alpha: Option<f64>,
}

#[cfg(test)]
#[path = "../../tests/unit/model/stroke.rs"]
mod tests;
