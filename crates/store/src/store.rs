//! Saving and loading shapes as relocatable records.
//!
//! The export half encodes shapes through the interchange codec and writes
//! the bytes through a gzip-aware [`FileStore`]; the import half reads,
//! parses, and decodes at a caller-supplied anchor. Settings arrive as an
//! explicit argument on every call; nothing here keeps global state.

pub mod settings;

mod resource;

pub use resource::{FileStore, StoreWriter};
pub use settings::{Settings, WindowSize};

use interchange::{CodecError, Pack};
use serde_json::Value;
use shape::{Coord, Shape};
use std::io;
use std::path::{Path, PathBuf};

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The named resource does not exist.
    ResourceNotFound(PathBuf),
    /// Exclusive creation was requested but the resource already exists.
    ResourceAlreadyExists(PathBuf),
    /// Any other byte-level failure.
    Io(io::Error),
    /// The codec rejected a shape or a record.
    Codec(CodecError),
    /// A settings key nobody defines.
    ConfigKey(String),
}

impl StoreError {
    pub(crate) fn from_io(e: io::Error, path: &Path) -> StoreError {
        match e.kind() {
            io::ErrorKind::NotFound => StoreError::ResourceNotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => StoreError::ResourceAlreadyExists(path.to_path_buf()),
            _ => StoreError::Io(e),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound(path) => write!(f, "Resource not found: {}", path.display()),
            Self::ResourceAlreadyExists(path) => {
                write!(f, "Resource already exists: {}", path.display())
            }
            Self::Io(e) => write!(f, "IO failure: {}", e),
            Self::Codec(e) => write!(f, "{}", e),
            Self::ConfigKey(key) => write!(f, "Unknown settings key: {}", key),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for StoreError {
    fn from(e: CodecError) -> Self {
        StoreError::Codec(e)
    }
}

/// What an import produced: a single shape or a whole pack.
#[derive(Clone, Debug, PartialEq)]
pub enum Imported {
    Shape(Shape),
    Pack(Vec<Shape>),
}

impl Imported {
    /// The single shape, if that is what the file held.
    pub fn into_shape(self) -> Option<Shape> {
        match self {
            Imported::Shape(shape) => Some(shape),
            Imported::Pack(_) => None,
        }
    }

    /// Every imported shape; a singleton list for a single-shape file.
    pub fn into_shapes(self) -> Vec<Shape> {
        match self {
            Imported::Shape(shape) => vec![shape],
            Imported::Pack(shapes) => shapes,
        }
    }
}

/// Encode one shape and write it out, overwriting any previous file.
pub fn export_shape(
    shape: &Shape,
    path: impl AsRef<Path>,
    settings: &Settings,
) -> Result<(), StoreError> {
    let record = interchange::encode(shape)?;
    let value = record.to_value();
    if settings.debug {
        log::debug!("exporting {} record: {:#}", shape.kind_name(), value);
    }
    write_value(&value, path, settings)
}

/// Encode a collection of shapes as one pack anchored at `anchor`,
/// overwriting any previous file.
pub fn export_pack(
    shapes: &[Shape],
    anchor: Coord,
    path: impl AsRef<Path>,
    settings: &Settings,
) -> Result<(), StoreError> {
    let pack = Pack::encode(shapes, anchor)?;
    let value = pack.to_value();
    if settings.debug {
        log::debug!("exporting pack of {}: {:#}", pack.len(), value);
    }
    write_value(&value, path, settings)
}

/// Read a file back into shapes, anchored at `anchor`.
///
/// A JSON object is a single shape record; a JSON array is a pack. Either
/// way the first problem wins: nothing comes back on error.
pub fn import(
    path: impl AsRef<Path>,
    anchor: Coord,
    settings: &Settings,
) -> Result<Imported, StoreError> {
    let store = FileStore::new(settings);
    let text = store.read_to_string(&path)?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| CodecError::MalformedRecord(format!("{}", e)))?;
    if settings.debug {
        log::debug!(
            "importing {} at ({}, {}): {:#}",
            path.as_ref().display(),
            anchor.x(),
            anchor.y(),
            value
        );
    }
    match &value {
        Value::Array(_) => Ok(Imported::Pack(Pack::decode(&value, anchor)?)),
        _ => Ok(Imported::Shape(interchange::decode(&value, anchor)?)),
    }
}

fn write_value(
    value: &Value,
    path: impl AsRef<Path>,
    settings: &Settings,
) -> Result<(), StoreError> {
    let store = FileStore::new(settings);
    store.write_all(path, value.to_string().as_bytes(), false)
}
