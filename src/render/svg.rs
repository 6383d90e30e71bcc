use std::fmt::Write as _;

use crate::{
    foundation::core::{BezPath, Hsva},
    model::stroke::Stroke,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Minimal SVG writer for stroke lists.
///
/// Stands in for a canvas: strokes are drawn in order as round-capped polylines, and
/// strokes with fewer than two points are skipped.
pub struct SvgRenderer {
    /// Document width in user units.
    pub width: u32,
    /// Document height in user units.
    pub height: u32,
    /// Optional solid background.
    pub background: Option<Hsva>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Some(Hsva::new(0.0, 0.0, 100.0, 100.0)),
        }
    }
}

impl SvgRenderer {
    /// Serialize `strokes` as a standalone SVG document.
    pub fn render(&self, strokes: &[Stroke]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if let Some(bg) = self.background {
            let [r, g, b] = bg.to_rgb8();
            let _ = writeln!(
                out,
                r#"  <rect width="100%" height="100%" fill="rgb({r},{g},{b})" fill-opacity="{}"/>"#,
                fmt_unit(bg.a / 100.0)
            );
        }
        for stroke in strokes {
            let Some(path) = stroke_path(stroke) else {
                continue;
            };
            let [r, g, b] = stroke.color.to_rgb8();
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="rgb({r},{g},{b})" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                path.to_svg(),
                fmt_unit(stroke.opacity / 100.0),
                stroke.thickness
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Polyline path of a drawable stroke; `None` for erasers and strokes under two points.
pub fn stroke_path(stroke: &Stroke) -> Option<BezPath> {
    if stroke.eraser || !stroke.is_renderable() {
        return None;
    }
    let mut path = BezPath::new();
    let mut points = stroke.points.iter();
    path.move_to(*points.next()?);
    for p in points {
        path.line_to(*p);
    }
    Some(path)
}

fn fmt_unit(v: f64) -> String {
    format!("{:.4}", v.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
