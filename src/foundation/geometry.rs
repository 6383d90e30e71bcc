//! Polyline helpers shared by the matcher and the tweener.

use crate::foundation::core::{Lerp, Point};

/// Arithmetic mean of `points`.
///
/// Returns the origin for an empty slice; that value is a convention, not a centroid.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Point::new(sx / n, sy / n)
}

/// Sum of the Euclidean lengths of consecutive segments. Zero below two points.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Resample a polyline to `n` points evenly spaced by arc length.
///
/// `n` is clamped to at least 2. Inputs with fewer than two points are returned unchanged,
/// and a zero-length polyline yields `n` copies of its first point. The first and last
/// output points are the original endpoints.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let n = n.max(2);

    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    for w in points.windows(2) {
        let prev = cumulative[cumulative.len() - 1];
        cumulative.push(prev + w[0].distance(w[1]));
    }
    let total = cumulative[cumulative.len() - 1];
    if total <= 0.0 {
        return vec![points[0]; n];
    }

    let last_segment = points.len() - 2;
    let mut seg = 0usize;
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let target = if k == n - 1 {
            total
        } else {
            total * (k as f64) / ((n - 1) as f64)
        };

        // Targets are non-decreasing, so the segment cursor only moves forward.
        while seg < last_segment && cumulative[seg + 1] < target {
            seg += 1;
        }

        let start = cumulative[seg];
        let len = cumulative[seg + 1] - start;
        if len <= 0.0 {
            out.push(points[seg]);
            continue;
        }
        let f = ((target - start) / len).clamp(0.0, 1.0);
        out.push(<Point as Lerp>::lerp(&points[seg], &points[seg + 1], f));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
