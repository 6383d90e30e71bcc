use super::*;
use crate::foundation::core::Point;

fn red_line() -> Stroke {
    Stroke::new(
        Hsva::new(0.0, 100.0, 100.0, 100.0),
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 2.0)],
    )
    .with_thickness(3.0)
    .with_opacity(50.0)
}

#[test]
fn path_follows_points() {
    let path = stroke_path(&red_line()).unwrap();
    assert_eq!(path.elements().len(), 3);
}

#[test]
fn short_and_eraser_strokes_have_no_path() {
    let dot = Stroke::new(Hsva::BLACK, vec![Point::new(0.0, 0.0)]);
    assert!(stroke_path(&dot).is_none());
    assert!(stroke_path(&red_line().as_eraser()).is_none());
}

#[test]
fn document_contains_one_path_per_drawable_stroke() {
    let renderer = SvgRenderer {
        width: 64,
        height: 32,
        background: None,
    };
    let dot = Stroke::new(Hsva::BLACK, vec![Point::new(0.0, 0.0)]);
    let svg = renderer.render(&[red_line(), dot, red_line()]);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 64 32""#));
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains("stroke=\"rgb(255,0,0)\""));
    assert!(svg.contains("stroke-opacity=\"0.5000\""));
    assert!(svg.contains("stroke-width=\"3\""));
    assert!(!svg.contains("<rect"));
}

#[test]
fn background_is_drawn_first() {
    let svg = SvgRenderer::default().render(&[red_line()]);
    let rect = svg.find("<rect").unwrap();
    let path = svg.find("<path").unwrap();
    assert!(rect < path);
    assert!(svg.contains("fill=\"rgb(255,255,255)\""));
}
