//! The pack codec: many shapes bundled under one shared anchor.
//!
//! A pack stores, for every member, the offset from the pack anchor to
//! that member's centroid alongside the member's own record. Decode at a
//! new anchor and the whole arrangement comes back translated as a unit.

use serde_json::{json, Value};
use shape::{Coord, Offset, Shape};

use crate::geometry::centroid;
use crate::object;
use crate::record::ShapeRecord;
use crate::CodecError;

/// Tag on every pack entry.
pub const PACK_ENTRY_TAG: &str = "graphicobj";

/// One packed shape: its record plus where its centroid sits relative to
/// the pack anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct PackEntry {
    pub offset: Offset,
    pub record: ShapeRecord,
}

/// An ordered bundle of shape records sharing one anchor.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Pack {
    pub entries: Vec<PackEntry>,
}

impl Pack {
    /// Encode a collection of shapes against a shared anchor.
    ///
    /// Each entry's offset is measured from that entry's own shape, in
    /// iteration order. The first unsupported shape aborts the pack.
    pub fn encode<'a, I>(shapes: I, anchor: Coord) -> Result<Pack, CodecError>
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let mut entries = Vec::new();
        for shape in shapes {
            entries.push(PackEntry {
                offset: centroid(shape) - anchor,
                record: object::encode(shape)?,
            });
        }
        Ok(Pack { entries })
    }

    /// Decode a pack tree, placing the bundle's anchor at `target`.
    ///
    /// Entries decode in stored order. The first malformed entry fails the
    /// whole pack; no partial list is returned.
    pub fn decode(value: &Value, target: Coord) -> Result<Vec<Shape>, CodecError> {
        let entries = value
            .as_array()
            .ok_or_else(|| CodecError::MalformedRecord("pack must be a JSON array".to_string()))?;
        let mut shapes = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            shapes.push(decode_entry(entry, target, i)?);
        }
        Ok(shapes)
    }

    /// JSON tree for this pack.
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|entry| {
                    json!({
                        "type": PACK_ENTRY_TAG,
                        "centeroffset": ShapeRecord::offset_point(entry.offset).to_value(),
                        "object": entry.record.to_value(),
                    })
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_entry(entry: &Value, target: Coord, index: usize) -> Result<Shape, CodecError> {
    let obj = entry.as_object().ok_or_else(|| {
        CodecError::MalformedRecord(format!("pack entry {} must be a JSON object", index))
    })?;
    match obj.get("type").and_then(Value::as_str) {
        Some(PACK_ENTRY_TAG) => {}
        Some(other) => {
            return Err(CodecError::MalformedRecord(format!(
                "pack entry {} has tag {:?}, expected {:?}",
                index, other, PACK_ENTRY_TAG
            )))
        }
        None => {
            return Err(CodecError::MalformedRecord(format!(
                "pack entry {} is missing a string \"type\" tag",
                index
            )))
        }
    }
    let offset_value = obj.get("centeroffset").ok_or_else(|| {
        CodecError::MalformedRecord(format!("pack entry {} is missing \"centeroffset\"", index))
    })?;
    let offset = ShapeRecord::from_value(offset_value)?
        .expect_offset(&format!("pack entry {} centeroffset", index))?;
    let object_value = obj.get("object").ok_or_else(|| {
        CodecError::MalformedRecord(format!("pack entry {} is missing \"object\"", index))
    })?;
    object::decode(object_value, target + offset)
}
