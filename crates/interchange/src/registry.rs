//! The codec registry: tag names and decode dispatch.
//!
//! This is the single place a record's `type` tag is interpreted.
//! Decoding always reads the tag before any other field, so a missing or
//! unknown tag fails the same way no matter what else the record holds.

use serde_json::Value;
use shape::{Coord, Shape};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use crate::object;
use crate::record::ShapeRecord;
use crate::CodecError;

/// Tags with a registered codec.
///
/// A closed set; each tag is the exact string written to a record's
/// `type` field. Shape kinds outside this set (Circle, Oval) can be drawn
/// but not encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ShapeTag {
    Point,
    Line,
    Rectangle,
    Polygon,
    Text,
}

impl ShapeTag {
    /// The tag for a shape kind, `None` when no codec is registered.
    pub fn of(shape: &Shape) -> Option<ShapeTag> {
        match shape {
            Shape::Point(_) => Some(ShapeTag::Point),
            Shape::Line(_) => Some(ShapeTag::Line),
            Shape::Rect(_) => Some(ShapeTag::Rectangle),
            Shape::Polygon(_) => Some(ShapeTag::Polygon),
            Shape::Text(_) => Some(ShapeTag::Text),
            Shape::Circle(_) | Shape::Oval(_) => None,
        }
    }
}

/// Decode half of a registered codec.
type DecodeFn = fn(ShapeRecord, Coord) -> Result<Shape, CodecError>;

/// One registration: the tag a codec owns and how it rebuilds a shape.
#[derive(Debug)]
pub(crate) struct Codec {
    pub(crate) tag: ShapeTag,
    pub(crate) decode: DecodeFn,
}

/// The registration table. Encode dispatch is an exhaustive match in
/// [`crate::object`]; this table drives decode dispatch by tag.
static CODECS: &[Codec] = &[
    Codec {
        tag: ShapeTag::Point,
        decode: object::decode_point,
    },
    Codec {
        tag: ShapeTag::Line,
        decode: object::decode_line,
    },
    Codec {
        tag: ShapeTag::Rectangle,
        decode: object::decode_rect,
    },
    Codec {
        tag: ShapeTag::Polygon,
        decode: object::decode_polygon,
    },
    Codec {
        tag: ShapeTag::Text,
        decode: object::decode_text,
    },
];

pub(crate) fn lookup(tag: ShapeTag) -> Option<&'static Codec> {
    CODECS.iter().find(|codec| codec.tag == tag)
}

/// Resolve the codec for a raw record tree.
///
/// Reads the `type` tag first; whatever else the record contains, a
/// missing or unknown tag is the error reported.
pub(crate) fn resolve(value: &Value) -> Result<&'static Codec, CodecError> {
    let obj = value
        .as_object()
        .ok_or_else(|| CodecError::MalformedRecord("record must be a JSON object".to_string()))?;
    let tag = obj.get("type").and_then(Value::as_str).ok_or_else(|| {
        CodecError::MalformedRecord("record is missing a string \"type\" tag".to_string())
    })?;
    let tag = ShapeTag::from_str(tag)
        .map_err(|_| CodecError::MalformedRecord(format!("unknown shape type: {}", tag)))?;
    lookup(tag)
        .ok_or_else(|| CodecError::MalformedRecord(format!("no codec registered for {}", tag)))
}

/// Every tag that can be decoded, in registration order.
pub fn supported_tags() -> impl Iterator<Item = ShapeTag> {
    CODECS.iter().map(|codec| codec.tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn every_tag_has_a_codec() {
        for tag in ShapeTag::iter() {
            assert!(lookup(tag).is_some(), "{} has no codec", tag);
        }
    }

    #[test]
    fn supported_tags_cover_the_enum() {
        let listed: Vec<ShapeTag> = supported_tags().collect();
        assert_eq!(listed.len(), ShapeTag::iter().count());
    }

    #[test]
    fn tag_strings_match_wire_names() {
        assert_eq!(ShapeTag::Rectangle.to_string(), "Rectangle");
        assert_eq!(ShapeTag::from_str("Polygon").unwrap(), ShapeTag::Polygon);
        assert!(ShapeTag::from_str("polygon").is_err());
    }

    #[test]
    fn resolve_reads_the_tag_before_anything_else() {
        // geometry fields are garbage, but the tag is known, so resolve
        // succeeds; the payload parse is a later step's problem
        let value = json!({"type": "Line", "offset": 42});
        assert!(resolve(&value).is_ok());
    }

    #[test]
    fn resolve_rejects_unknown_and_missing_tags() {
        let err = resolve(&json!({"type": "Blob", "x": 1.0})).unwrap_err();
        let CodecError::MalformedRecord(msg) = err else {
            panic!("wrong error kind");
        };
        assert!(msg.contains("Blob"));

        assert!(resolve(&json!({"x": 1.0})).is_err());
        assert!(resolve(&json!({"type": 7})).is_err());
        assert!(resolve(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn unregistered_kinds_have_no_tag() {
        use shape::{Circle, Coord, Oval};
        let circle = Shape::Circle(Circle::new(Coord::new(0.0, 0.0), 1.0));
        assert_eq!(ShapeTag::of(&circle), None);
        let oval = Shape::Oval(Oval::new(Coord::new(0.0, 0.0), Coord::new(2.0, 1.0)));
        assert_eq!(ShapeTag::of(&oval), None);
    }
}
