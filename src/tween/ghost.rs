use crate::{config::TweenConfig, foundation::geometry::centroid, model::stroke::Stroke};

/// Invisible stand-in for `stroke`, collapsed onto its centroid.
///
/// Uses `cfg.full_ghost_samples` points. Tweening a real stroke against its ghost shrinks
/// it to a point while fading it out (or the reverse), instead of popping.
pub fn ghost_from(stroke: &Stroke, cfg: &TweenConfig) -> Stroke {
    ghost_with_points(stroke, cfg.full_ghost_samples, cfg)
}

/// Ghost of `stroke` with an explicit point count (at least one).
pub(crate) fn ghost_with_points(stroke: &Stroke, count: usize, cfg: &TweenConfig) -> Stroke {
    let c = centroid(&stroke.points);
    Stroke {
        color: stroke.color.with_alpha(0.0),
        thickness: cfg.ghost_thickness,
        opacity: 0.0,
        eraser: false,
        points: vec![c; count.max(1)],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tween/ghost.rs"]
mod tests;
