//! Per-kind encode and decode between shapes and records.
//!
//! Encode measures a shape against its own centroid and writes geometry as
//! offsets; decode applies those offsets to a caller-supplied anchor.
//! Encode never mutates its input, and decode either returns a complete
//! shape or an error, never a partial one.

use serde_json::Value;
use shape::{Coord, Line, Point, Polygon, Rect, Shape, Text};

use crate::geometry::centroid;
use crate::record::{MirrorRecord, PointRecord, PolygonRecord, ShapeRecord, TextRecord};
use crate::registry::{self, ShapeTag};
use crate::CodecError;

/// Encode a shape into its relocatable record.
///
/// Dispatch is an exhaustive match: every kind either has a codec here or
/// is reported as unsupported.
pub fn encode(shape: &Shape) -> Result<ShapeRecord, CodecError> {
    let anchor = centroid(shape);
    match shape {
        Shape::Point(p) => Ok(ShapeRecord::Point(PointRecord {
            x: p.pos.x(),
            y: p.pos.y(),
            config: p.config.clone(),
        })),
        Shape::Line(l) => Ok(ShapeRecord::Line(MirrorRecord {
            offset: Box::new(ShapeRecord::offset_point(l.p1 - anchor)),
            config: l.config.clone(),
        })),
        Shape::Rect(r) => Ok(ShapeRecord::Rectangle(MirrorRecord {
            offset: Box::new(ShapeRecord::offset_point(r.p1 - anchor)),
            config: r.config.clone(),
        })),
        Shape::Polygon(p) => Ok(ShapeRecord::Polygon(PolygonRecord {
            points: p
                .vertices
                .iter()
                .map(|v| ShapeRecord::offset_point(*v - anchor))
                .collect(),
            config: p.config.clone(),
        })),
        Shape::Text(t) => Ok(ShapeRecord::Text(TextRecord {
            config: t.config.clone(),
        })),
        Shape::Circle(_) | Shape::Oval(_) => {
            Err(CodecError::UnsupportedType(shape.kind_name().to_string()))
        }
    }
}

/// Decode one record tree, anchoring it at `anchor`.
///
/// The `type` tag is resolved through the registry before any other field
/// is read, then the registered codec rebuilds the shape.
pub fn decode(value: &Value, anchor: Coord) -> Result<Shape, CodecError> {
    let codec = registry::resolve(value)?;
    let record = ShapeRecord::from_value(value)?;
    (codec.decode)(record, anchor)
}

/// A Point record stores its own absolute coordinates, so the anchor is
/// not consulted: the point comes back exactly where it was saved.
pub(crate) fn decode_point(record: ShapeRecord, _anchor: Coord) -> Result<Shape, CodecError> {
    match record {
        ShapeRecord::Point(rec) => {
            let mut point = Point::new(rec.x, rec.y);
            point.config = rec.config;
            Ok(Shape::Point(point))
        }
        other => Err(mismatch(ShapeTag::Point, &other)),
    }
}

/// One endpoint is `anchor + offset`, the other is the anchor mirrored
/// the opposite way. Exact because a line's centroid is the midpoint of
/// its endpoints.
pub(crate) fn decode_line(record: ShapeRecord, anchor: Coord) -> Result<Shape, CodecError> {
    match record {
        ShapeRecord::Line(rec) => {
            let offset = rec.offset.expect_offset("line offset")?;
            let mut line = Line::new(anchor + offset, anchor + (-offset));
            line.config = rec.config;
            Ok(Shape::Line(line))
        }
        other => Err(mismatch(ShapeTag::Line, &other)),
    }
}

/// Corners rebuild by the same mirror trick as lines; a rectangle's
/// centroid is the midpoint of its two defining corners.
pub(crate) fn decode_rect(record: ShapeRecord, anchor: Coord) -> Result<Shape, CodecError> {
    match record {
        ShapeRecord::Rectangle(rec) => {
            let offset = rec.offset.expect_offset("rectangle offset")?;
            let mut rect = Rect::new(anchor + offset, anchor + (-offset));
            rect.config = rec.config;
            Ok(Shape::Rect(rect))
        }
        other => Err(mismatch(ShapeTag::Rectangle, &other)),
    }
}

pub(crate) fn decode_polygon(record: ShapeRecord, anchor: Coord) -> Result<Shape, CodecError> {
    match record {
        ShapeRecord::Polygon(rec) => {
            let mut vertices = Vec::with_capacity(rec.points.len());
            for (i, point) in rec.points.iter().enumerate() {
                let offset = point.expect_offset(&format!("polygon point {}", i))?;
                vertices.push(anchor + offset);
            }
            let mut poly = Polygon::new(vertices);
            poly.config = rec.config;
            Ok(Shape::Polygon(poly))
        }
        other => Err(mismatch(ShapeTag::Polygon, &other)),
    }
}

/// Text stores no geometry: the label lands on the anchor with empty
/// content for the caller to fill in.
pub(crate) fn decode_text(record: ShapeRecord, anchor: Coord) -> Result<Shape, CodecError> {
    match record {
        ShapeRecord::Text(rec) => {
            let mut text = Text::new(anchor, "");
            text.config = rec.config;
            Ok(Shape::Text(text))
        }
        other => Err(mismatch(ShapeTag::Text, &other)),
    }
}

fn mismatch(expected: ShapeTag, found: &ShapeRecord) -> CodecError {
    CodecError::MalformedRecord(format!(
        "expected a {} record, found {}",
        expected,
        found.tag()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shape::{Circle, ConfigValue, Offset};

    fn assert_close(a: Coord, b: Coord) {
        assert!(a.0.abs_diff_eq(b.0, 1e-9), "{:?} != {:?}", a, b);
    }

    #[test]
    fn polygon_offsets_are_measured_from_the_centroid() {
        let poly = Shape::Polygon(Polygon::new(vec![
            Coord::new(1.0, 1.0),
            Coord::new(5.0, 3.0),
            Coord::new(2.0, 7.0),
        ]));
        let record = encode(&poly).unwrap();
        let ShapeRecord::Polygon(rec) = record else {
            panic!("wrong record kind");
        };
        let offsets: Vec<Offset> = rec
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| p.expect_offset(&format!("point {}", i)).unwrap())
            .collect();
        assert_eq!(
            offsets,
            vec![
                Offset::new(-2.0, -3.0),
                Offset::new(2.0, -1.0),
                Offset::new(-1.0, 3.0),
            ]
        );
    }

    #[test]
    fn polygon_relocates_to_a_new_anchor() {
        let poly = Shape::Polygon(Polygon::new(vec![
            Coord::new(1.0, 1.0),
            Coord::new(5.0, 3.0),
            Coord::new(2.0, 7.0),
        ]));
        let value = encode(&poly).unwrap().to_value();
        let decoded = decode(&value, Coord::new(10.0, 10.0)).unwrap();
        let Shape::Polygon(back) = decoded else {
            panic!("wrong shape kind");
        };
        assert_close(back.vertices[0], Coord::new(8.0, 7.0));
        assert_close(back.vertices[1], Coord::new(12.0, 9.0));
        assert_close(back.vertices[2], Coord::new(9.0, 13.0));
    }

    #[test]
    fn rectangle_rebuilds_by_mirroring_one_offset() {
        let rect = Shape::Rect(Rect::new(Coord::new(0.0, 0.0), Coord::new(4.0, 2.0)));
        let value = encode(&rect).unwrap().to_value();
        assert_eq!(value["offset"]["x"], -2.0);
        assert_eq!(value["offset"]["y"], -1.0);
        let decoded = decode(&value, Coord::new(5.0, 5.0)).unwrap();
        let Shape::Rect(back) = decoded else {
            panic!("wrong shape kind");
        };
        assert_close(back.p1, Coord::new(3.0, 4.0));
        assert_close(back.p2, Coord::new(7.0, 6.0));
    }

    #[test]
    fn line_round_trips_and_relocates() {
        let line = Shape::Line(Line::new(Coord::new(-3.0, 2.0), Coord::new(5.0, -6.0)));
        let value = encode(&line).unwrap().to_value();

        // decoding at the original centroid reproduces the line exactly
        let decoded = decode(&value, centroid(&line)).unwrap();
        let Shape::Line(back) = decoded else {
            panic!("wrong shape kind");
        };
        assert_close(back.p1, Coord::new(-3.0, 2.0));
        assert_close(back.p2, Coord::new(5.0, -6.0));

        // any other anchor translates both endpoints together
        let moved = decode(&value, Coord::new(10.0, 0.0)).unwrap();
        let Shape::Line(back) = moved else {
            panic!("wrong shape kind");
        };
        assert_close(back.p1, Coord::new(6.0, 4.0));
        assert_close(back.p2, Coord::new(14.0, -4.0));
    }

    #[test]
    fn point_keeps_its_absolute_position() {
        let point = Shape::Point(Point::new(1.5, -2.5));
        let value = encode(&point).unwrap().to_value();
        // the anchor is not consulted for points
        let decoded = decode(&value, Coord::new(100.0, 100.0)).unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn text_drops_content_and_lands_on_the_anchor() {
        let text = Shape::Text(
            Text::new(Coord::new(2.0, 3.0), "hello").with_config("size", 20i64),
        );
        let value = encode(&text).unwrap().to_value();
        assert!(value.get("anchor").is_none());
        assert!(value.get("content").is_none());
        let decoded = decode(&value, Coord::new(7.0, 7.0)).unwrap();
        let Shape::Text(back) = decoded else {
            panic!("wrong shape kind");
        };
        assert_eq!(back.anchor, Coord::new(7.0, 7.0));
        assert_eq!(back.content, "");
        assert_eq!(back.config["size"], ConfigValue::Int(20));
    }

    #[test]
    fn config_passes_through_untouched() {
        let line = Line::new(Coord::new(0.0, 0.0), Coord::new(2.0, 2.0))
            .with_config("fill", "red")
            .with_config("glow", true)
            .with_config("someday", ConfigValue::Null);
        let value = encode(&Shape::Line(line.clone())).unwrap().to_value();
        let decoded = decode(&value, Coord::new(1.0, 1.0)).unwrap();
        assert_eq!(decoded.config(), &line.config);
    }

    #[test]
    fn unregistered_kinds_refuse_to_encode() {
        let circle = Shape::Circle(Circle::new(Coord::new(0.0, 0.0), 5.0));
        let err = encode(&circle).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedType("Circle".to_string()));
        assert_eq!(format!("{}", err), "Unsupported shape type: Circle");
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let err = decode(&json!({"type": "Blob"}), Coord::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord(_)));
    }

    #[test]
    fn nested_offset_with_wrong_tag_is_malformed() {
        let value = json!({
            "type": "Line",
            "offset": {"type": "Text", "config": {}},
            "config": {}
        });
        let err = decode(&value, Coord::new(0.0, 0.0)).unwrap_err();
        let CodecError::MalformedRecord(msg) = err else {
            panic!("wrong error kind");
        };
        assert!(msg.contains("line offset"));
    }

    #[test]
    fn polygon_vertex_order_survives() {
        let vertices = vec![
            Coord::new(0.0, 0.0),
            Coord::new(4.0, 0.0),
            Coord::new(4.0, 4.0),
            Coord::new(0.0, 4.0),
        ];
        let poly = Shape::Polygon(Polygon::new(vertices.clone()));
        let value = encode(&poly).unwrap().to_value();
        let decoded = decode(&value, centroid(&poly)).unwrap();
        let Shape::Polygon(back) = decoded else {
            panic!("wrong shape kind");
        };
        assert_eq!(back.vertices.len(), vertices.len());
        for (got, want) in back.vertices.iter().zip(&vertices) {
            assert_close(*got, *want);
        }
    }
}
