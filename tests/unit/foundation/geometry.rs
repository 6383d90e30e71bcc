use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn centroid_of_empty_is_origin() {
    assert_eq!(centroid(&[]), Point::ORIGIN);
}

#[test]
fn centroid_is_mean() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    assert_eq!(centroid(&p), Point::new(2.0, 1.0));
}

#[test]
fn polyline_length_sums_segments() {
    assert_eq!(polyline_length(&[]), 0.0);
    assert_eq!(polyline_length(&pts(&[(1.0, 1.0)])), 0.0);
    let p = pts(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]);
    assert_eq!(polyline_length(&p), 11.0);
}

#[test]
fn resample_hits_requested_count() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 5.0), (-2.0, 7.0)]);
    for n in [2usize, 3, 7, 40, 60, 257] {
        assert_eq!(resample(&p, n).len(), n);
    }
}

#[test]
fn resample_clamps_count_to_two() {
    let p = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(resample(&p, 0).len(), 2);
    assert_eq!(resample(&p, 1).len(), 2);
}

#[test]
fn resample_preserves_endpoints() {
    let p = pts(&[(0.0, 0.0), (2.0, 1.0), (5.0, -3.0), (9.0, 4.0)]);
    let r = resample(&p, 33);
    assert!(approx(r[0], p[0]));
    assert!(approx(r[32], p[3]));
}

#[test]
fn resample_spaces_evenly_by_arc_length() {
    // Uneven input spacing: one long segment followed by many short ones.
    let p = pts(&[(0.0, 0.0), (8.0, 0.0), (9.0, 0.0), (9.5, 0.0), (10.0, 0.0)]);
    let r = resample(&p, 11);
    for (k, q) in r.iter().enumerate() {
        assert!(approx(*q, Point::new(k as f64, 0.0)), "sample {k} = {q:?}");
    }
}

#[test]
fn resample_walks_around_corners() {
    let p = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let r = resample(&p, 5);
    assert!(approx(r[1], Point::new(5.0, 0.0)));
    assert!(approx(r[2], Point::new(10.0, 0.0)));
    assert!(approx(r[3], Point::new(10.0, 5.0)));
}

#[test]
fn resample_degenerate_replicates_first_point() {
    let p = pts(&[(3.0, 4.0), (3.0, 4.0), (3.0, 4.0)]);
    let r = resample(&p, 6);
    assert_eq!(r, vec![Point::new(3.0, 4.0); 6]);
}

#[test]
fn resample_short_input_is_returned_unchanged() {
    assert!(resample(&[], 10).is_empty());
    let single = pts(&[(1.0, 2.0)]);
    assert_eq!(resample(&single, 10), single);
}

#[test]
fn resample_tolerates_zero_length_segments_mid_path() {
    let p = pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let r = resample(&p, 3);
    assert!(approx(r[0], Point::new(0.0, 0.0)));
    assert!(approx(r[1], Point::new(5.0, 0.0)));
    assert!(approx(r[2], Point::new(10.0, 0.0)));
}
