//! The tagged record tree shapes serialize into.
//!
//! Records are plain data with a `type` tag on every node, nested ones
//! included. Offsets travel as full Point records so a reader can check
//! the tag of anything it is about to interpret.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shape::{ConfigMap, Offset};

use crate::registry::ShapeTag;
use crate::CodecError;

/// One serialized shape.
///
/// The `type` tag names the codec that can rebuild the shape; the rest is
/// geometry relative to the shape's centroid plus the config map. Only the
/// Point record carries absolute coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeRecord {
    Point(PointRecord),
    Line(MirrorRecord),
    Rectangle(MirrorRecord),
    Polygon(PolygonRecord),
    Text(TextRecord),
}

/// Absolute position, doubling as the sub-record every offset travels in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub config: ConfigMap,
}

/// Geometry stored as one offset mirrored around the anchor.
///
/// Lines and rectangles are defined by two points whose midpoint is the
/// centroid, so a single offset reconstructs both: `anchor + offset` and
/// `anchor - offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MirrorRecord {
    pub offset: Box<ShapeRecord>,
    pub config: ConfigMap,
}

/// Vertices stored as ordered offsets from the polygon's centroid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub points: Vec<ShapeRecord>,
    pub config: ConfigMap,
}

/// A text label stores no geometry at all, only config.
///
/// Its position is the decode anchor, and the displayed content is
/// supplied by the caller after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    pub config: ConfigMap,
}

impl ShapeRecord {
    /// The tag this record carries, mirroring its variant.
    pub fn tag(&self) -> ShapeTag {
        match self {
            ShapeRecord::Point(_) => ShapeTag::Point,
            ShapeRecord::Line(_) => ShapeTag::Line,
            ShapeRecord::Rectangle(_) => ShapeTag::Rectangle,
            ShapeRecord::Polygon(_) => ShapeTag::Polygon,
            ShapeRecord::Text(_) => ShapeTag::Text,
        }
    }

    /// Bare offset carrier: a Point record with empty config.
    pub(crate) fn offset_point(offset: Offset) -> ShapeRecord {
        ShapeRecord::Point(PointRecord {
            x: offset.dx(),
            y: offset.dy(),
            config: ConfigMap::new(),
        })
    }

    /// Read an offset back out of a nested record, insisting it is a
    /// Point. `what` names the field for the error message.
    pub(crate) fn expect_offset(&self, what: &str) -> Result<Offset, CodecError> {
        match self {
            ShapeRecord::Point(p) => Ok(Offset::new(p.x, p.y)),
            other => Err(CodecError::MalformedRecord(format!(
                "{} must be a Point record, found {}",
                what,
                other.tag()
            ))),
        }
    }

    /// Parse a record out of a JSON tree.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        serde_json::from_value(value.clone())
            .map_err(|e| CodecError::MalformedRecord(format!("{}", e)))
    }

    /// JSON tree for this record.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_travels_on_every_node() {
        let record = ShapeRecord::Line(MirrorRecord {
            offset: Box::new(ShapeRecord::offset_point(Offset::new(-2.0, -1.0))),
            config: ConfigMap::new(),
        });
        let value = record.to_value();
        assert_eq!(value["type"], "Line");
        assert_eq!(value["offset"]["type"], "Point");
        assert_eq!(value["offset"]["x"], -2.0);
    }

    #[test]
    fn from_value_round_trips() {
        let record = ShapeRecord::Polygon(PolygonRecord {
            points: vec![
                ShapeRecord::offset_point(Offset::new(-2.0, -3.0)),
                ShapeRecord::offset_point(Offset::new(2.0, -1.0)),
            ],
            config: ConfigMap::new(),
        });
        let back = ShapeRecord::from_value(&record.to_value()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn integer_coordinates_parse_as_floats() {
        let value = json!({"type": "Point", "x": 1, "y": 2, "config": {}});
        let record = ShapeRecord::from_value(&value).unwrap();
        assert_eq!(record, ShapeRecord::offset_point(Offset::new(1.0, 2.0)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let value = json!({"type": "Line", "config": {}});
        let err = ShapeRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord(_)));
    }

    #[test]
    fn expect_offset_rejects_non_point() {
        let record = ShapeRecord::Text(TextRecord {
            config: ConfigMap::new(),
        });
        let err = record.expect_offset("line offset").unwrap_err();
        let CodecError::MalformedRecord(msg) = err else {
            panic!("wrong error kind");
        };
        assert!(msg.contains("line offset"));
        assert!(msg.contains("Text"));
    }
}
