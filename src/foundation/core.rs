pub use kurbo::{BezPath, Point, Vec2};

/// Linear interpolation between two values of the same type.
///
/// `t` is used as supplied: no clamping happens here, so callers that need `[0, 1]`
/// must clamp upstream.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Colour in hue/saturation/brightness space with an alpha channel.
///
/// Ranges: `h` in `[0, 360]`, `s`, `v` and `a` in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsva {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Brightness (value) percentage.
    pub v: f64,
    /// Alpha percentage.
    pub a: f64,
}

impl Default for Hsva {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Hsva {
    /// Opaque black.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
        a: 100.0,
    };

    /// Build a colour from its four channels.
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Straight (non-premultiplied) 8-bit RGB, ignoring alpha.
    pub fn to_rgb8(self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        fn to_u8(c: f64) -> u8 {
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }
        [to_u8(r + m), to_u8(g + m), to_u8(b + m)]
    }
}

impl Lerp for Hsva {
    // Hue is interpolated on the raw number line, not around the wheel.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            h: f64::lerp(&a.h, &b.h, t),
            s: f64::lerp(&a.s, &b.s, t),
            v: f64::lerp(&a.v, &b.v, t),
            a: f64::lerp(&a.a, &b.a, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
