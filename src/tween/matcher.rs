use std::borrow::Borrow;

use crate::{
    config::TweenConfig,
    foundation::{
        core::Point,
        geometry::{centroid, polyline_length},
    },
    model::stroke::Stroke,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Stroke correspondence between two stroke sets.
///
/// Every index of `a` appears exactly once, either as the first element of a pair or in
/// `unmatched_a`; likewise for `b`.
pub struct MatchResult {
    /// `(index_in_a, index_in_b)` in `a` order.
    pub pairs: Vec<(usize, usize)>,
    /// Indices of `a` left without a partner, ascending.
    pub unmatched_a: Vec<usize>,
    /// Indices of `b` never selected, ascending.
    pub unmatched_b: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Shape {
    centroid: Point,
    length: f64,
}

impl Shape {
    fn of(stroke: &Stroke, min_length: f64) -> Self {
        Self {
            centroid: centroid(&stroke.points),
            length: polyline_length(&stroke.points).max(min_length),
        }
    }

    fn cost(self, other: Self, length_weight: f64) -> f64 {
        self.centroid.distance(other.centroid) + length_weight * (self.length - other.length).abs()
    }
}

/// Dissimilarity of two strokes: centroid distance plus weighted length difference.
///
/// Lengths are floored at `cfg.min_length` so near-empty strokes do not dominate.
pub fn match_cost(a: &Stroke, b: &Stroke, cfg: &TweenConfig) -> f64 {
    Shape::of(a, cfg.min_length).cost(Shape::of(b, cfg.min_length), cfg.length_weight)
}

/// Greedy nearest-cost matching of `a` against `b`.
///
/// Each stroke of `a`, in order, takes the cheapest unused stroke of `b`; ties go to the
/// lowest `b` index. There is no backtracking, so the result is deterministic but not a
/// global optimum.
pub fn match_strokes<A, B>(a: &[A], b: &[B], cfg: &TweenConfig) -> MatchResult
where
    A: Borrow<Stroke>,
    B: Borrow<Stroke>,
{
    let shapes_a: Vec<Shape> = a
        .iter()
        .map(|s| Shape::of(s.borrow(), cfg.min_length))
        .collect();
    let shapes_b: Vec<Shape> = b
        .iter()
        .map(|s| Shape::of(s.borrow(), cfg.min_length))
        .collect();

    let mut used = vec![false; b.len()];
    let mut out = MatchResult::default();

    for (ia, sa) in shapes_a.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (ib, sb) in shapes_b.iter().enumerate() {
            if used[ib] {
                continue;
            }
            let cost = sa.cost(*sb, cfg.length_weight);
            let cost = if cost.is_nan() { f64::INFINITY } else { cost };
            // Strict comparison keeps the first-encountered minimum.
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((ib, cost));
            }
        }

        match best {
            Some((ib, _)) => {
                used[ib] = true;
                out.pairs.push((ia, ib));
            }
            None => out.unmatched_a.push(ia),
        }
    }

    out.unmatched_b = used
        .iter()
        .enumerate()
        .filter_map(|(ib, &u)| (!u).then_some(ib))
        .collect();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tween/matcher.rs"]
mod tests;
