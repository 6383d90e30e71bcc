use crate::{
    config::TweenConfig,
    model::{drawing::Drawing, stroke::Stroke},
    tween::{ghost::ghost_from, matcher::match_strokes, stroke::tween_strokes},
};

/// In-between drawing of `a` and `b` at `t`.
///
/// Eraser strokes and strokes with fewer than two points are dropped from both sides
/// before matching. The rest are matched, matched pairs are
/// tweened with `cfg.matched_samples` points and unmatched strokes fade against their
/// ghosts with `cfg.ghost_samples` points: strokes only in `a` fade out, strokes only in
/// `b` fade in.
///
/// Output order (back to front): matched pairs in `a` order, then `a`-only strokes, then
/// `b`-only strokes. Nothing is cached between calls.
#[tracing::instrument(skip(a, b, cfg), fields(a_len = a.len(), b_len = b.len()))]
pub fn tween_drawings(a: &Drawing, b: &Drawing, t: f64, cfg: &TweenConfig) -> Vec<Stroke> {
    let aa: Vec<&Stroke> = a.renderable().collect();
    let bb: Vec<&Stroke> = b.renderable().collect();

    let m = match_strokes(&aa, &bb, cfg);
    tracing::debug!(
        pairs = m.pairs.len(),
        unmatched_a = m.unmatched_a.len(),
        unmatched_b = m.unmatched_b.len(),
        "matched keyframe strokes"
    );

    let mut out = Vec::with_capacity(m.pairs.len() + m.unmatched_a.len() + m.unmatched_b.len());
    for &(ia, ib) in &m.pairs {
        out.push(tween_strokes(aa[ia], bb[ib], t, cfg.matched_samples, cfg));
    }
    for &ia in &m.unmatched_a {
        let ghost = ghost_from(aa[ia], cfg);
        out.push(tween_strokes(aa[ia], &ghost, t, cfg.ghost_samples, cfg));
    }
    for &ib in &m.unmatched_b {
        let ghost = ghost_from(bb[ib], cfg);
        out.push(tween_strokes(&ghost, bb[ib], t, cfg.ghost_samples, cfg));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tween/drawing.rs"]
mod tests;
