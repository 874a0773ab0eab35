//! Data model for drawable shapes.
//!
//! This crate is data-only: typed coordinates, the atomic config value set,
//! and the closed family of shape primitives. Rendering and serialization
//! live in sibling crates that consume these types.

pub mod config;
pub mod coords;
mod shape;

pub use config::{ConfigMap, ConfigValue};
pub use coords::{Coord, Offset};
pub use shape::{Circle, Line, Oval, Point, Polygon, Rect, Shape, Text};
