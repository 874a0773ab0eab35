//! Centroid measurement, the reference point relocatable records hang off.

use glam::DVec2;
use shape::{Coord, Shape};

/// The point a shape's stored geometry is measured from.
///
/// - Point: its own position. Text: its anchor.
/// - Line, Rectangle, Oval: midpoint of the two defining points.
/// - Circle: its center.
/// - Polygon: midpoint of the bounding box, not the area centroid. An
///   empty polygon measures from the origin.
///
/// Total over every kind, including the kinds no codec is registered for,
/// so anything drawable can be measured.
pub fn centroid(shape: &Shape) -> Coord {
    match shape {
        Shape::Point(p) => p.pos,
        Shape::Line(l) => l.p1.midpoint(l.p2),
        Shape::Rect(r) => r.p1.midpoint(r.p2),
        Shape::Oval(o) => o.p1.midpoint(o.p2),
        Shape::Circle(c) => c.center,
        Shape::Polygon(p) => bbox_midpoint(&p.vertices),
        Shape::Text(t) => t.anchor,
    }
}

fn bbox_midpoint(vertices: &[Coord]) -> Coord {
    let (first, rest) = match vertices.split_first() {
        Some(split) => split,
        None => return Coord(DVec2::ZERO),
    };
    let mut min = first.0;
    let mut max = first.0;
    for v in rest {
        min = min.min(v.0);
        max = max.max(v.0);
    }
    Coord((min + max) * 0.5)
}
