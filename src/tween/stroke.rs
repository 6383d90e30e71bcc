use crate::{
    config::TweenConfig,
    foundation::{
        core::{Hsva, Lerp, Point},
        geometry::resample,
    },
    model::stroke::{Stroke, resolve_alpha},
};

/// Interpolate two strokes at `t` after resampling both to `samples` points.
///
/// Positions are lerped point-for-point; hue, saturation, brightness, alpha, thickness and
/// opacity are lerped per stroke. `t` is not clamped. Missing thickness/opacity on either
/// side is replaced by the configured defaults. The result is never an eraser.
///
/// A side with fewer than two points cannot be resampled; it is stretched against the
/// other side (a single point acts like a ghost) and an empty side contributes nothing.
pub fn tween_strokes(a: &Stroke, b: &Stroke, t: f64, samples: usize, cfg: &TweenConfig) -> Stroke {
    let pa = resample(&a.points, samples);
    let pb = resample(&b.points, samples);

    let alpha_a = resolve_alpha(Some(a.opacity), Some(a.color.a), cfg.default_opacity);
    let alpha_b = resolve_alpha(Some(b.opacity), Some(b.color.a), cfg.default_opacity);
    let alpha = f64::lerp(&alpha_a, &alpha_b, t);

    let color = Hsva::lerp(&a.color, &b.color, t).with_alpha(alpha);
    let thickness = f64::lerp(
        &thickness_or(a.thickness, cfg.default_thickness),
        &thickness_or(b.thickness, cfg.default_thickness),
        t,
    );

    Stroke {
        color,
        thickness,
        opacity: alpha,
        eraser: false,
        points: lerp_points(&pa, &pb, t),
    }
}

fn thickness_or(thickness: f64, default: f64) -> f64 {
    if thickness.is_finite() && thickness > 0.0 {
        thickness
    } else {
        default
    }
}

fn lerp_points(pa: &[Point], pb: &[Point], t: f64) -> Vec<Point> {
    match (pa.is_empty(), pb.is_empty()) {
        (true, true) => Vec::new(),
        (true, false) => pb.to_vec(),
        (false, true) => pa.to_vec(),
        (false, false) => {
            let n = pa.len().max(pb.len());
            (0..n)
                .map(|j| {
                    let p = pa[j.min(pa.len() - 1)];
                    let q = pb[j.min(pb.len() - 1)];
                    <Point as Lerp>::lerp(&p, &q, t)
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tween/stroke.rs"]
mod tests;
