//! Relocatable shape interchange format.
//!
//! JSON-based records for drawable shapes. Pure data, no expressions -
//! what you see is what's there. The one trick is that stored geometry is
//! never absolute: every record expresses its shape relative to the
//! shape's own centroid, and the absolute anchor is supplied by the caller
//! at decode time. Save a drawing, hand it a different anchor on load, and
//! the whole thing comes back translated.
//!
//! # Record Format
//!
//! A file holds either a single shape record (a JSON object) or a pack (a
//! JSON array). Every record starts with a `type` tag naming its codec:
//!
//! ```json
//! {
//!   "type": "Polygon",
//!   "points": [
//!     {"type": "Point", "x": -2.0, "y": -3.0, "config": {}},
//!     {"type": "Point", "x": 2.0, "y": -1.0, "config": {}},
//!     {"type": "Point", "x": -1.0, "y": 3.0, "config": {}}
//!   ],
//!   "config": {"fill": "red"}
//! }
//! ```
//!
//! A pack entry pairs a record with its centroid's offset from the pack
//! anchor, so the bundle relocates as one unit:
//!
//! ```json
//! [
//!   {
//!     "type": "graphicobj",
//!     "centeroffset": {"type": "Point", "x": 1.0, "y": 2.0, "config": {}},
//!     "object": {"type": "Text", "config": {"size": 20}}
//!   }
//! ]
//! ```

mod geometry;
mod object;
mod pack;
mod record;
mod registry;

pub use geometry::centroid;
pub use object::{decode, encode};
pub use pack::{Pack, PackEntry, PACK_ENTRY_TAG};
pub use record::{MirrorRecord, PointRecord, PolygonRecord, ShapeRecord, TextRecord};
pub use registry::{supported_tags, ShapeTag};

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A shape kind no codec is registered for was handed to encode.
    UnsupportedType(String),
    /// A record's tags or structure do not match what its type requires.
    MalformedRecord(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType(kind) => write!(f, "Unsupported shape type: {}", kind),
            Self::MalformedRecord(msg) => write!(f, "Malformed record: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}
