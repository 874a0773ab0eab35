//! Type-safe coordinates for relocatable geometry.
//!
//! Provides distinct types for absolute positions and relative offsets so
//! the two can never be mixed up at compile time.
//!
//! # Coordinate Types
//!
//! - **`Coord`**: an absolute position in world space
//! - **`Offset`**: a displacement between two positions (not a position)
//!
//! The arithmetic between them is the whole relocation story: subtracting
//! two coordinates yields the offset between them, adding an offset to a
//! coordinate lands on a new coordinate, and negating an offset points it
//! the other way.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Absolute position in world space.
///
/// Coordinates are `f64` so geometry survives repeated save/relocate/load
/// cycles well below the 1e-9 tolerance the format promises.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord(pub DVec2);

/// Displacement in world space (not a position).
///
/// Represents where something is relative to an anchor, or how far to move
/// it. Stored geometry is expressed entirely in offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset(pub DVec2);

// === Coord ===

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: Coord) -> Coord {
        Coord((self.0 + other.0) * 0.5)
    }
}

impl From<DVec2> for Coord {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Coord> for DVec2 {
    fn from(c: Coord) -> Self {
        c.0
    }
}

impl Add<Offset> for Coord {
    type Output = Coord;

    /// Applying an offset to a position gives a new position.
    fn add(self, offset: Offset) -> Self::Output {
        Coord(self.0 + offset.0)
    }
}

impl Sub for Coord {
    type Output = Offset;

    /// Subtracting two positions gives the offset from `other` to `self`.
    fn sub(self, other: Coord) -> Self::Output {
        Offset(self.0 - other.0)
    }
}

// === Offset ===

impl Offset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self(DVec2::new(dx, dy))
    }

    pub fn dx(&self) -> f64 {
        self.0.x
    }

    pub fn dy(&self) -> f64 {
        self.0.y
    }
}

impl From<DVec2> for Offset {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Offset> for DVec2 {
    fn from(o: Offset) -> Self {
        o.0
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, other: Offset) -> Self::Output {
        Offset(self.0 + other.0)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, other: Offset) -> Self::Output {
        Offset(self.0 - other.0)
    }
}

impl Neg for Offset {
    type Output = Offset;

    /// The same displacement pointing the other way.
    fn neg(self) -> Self::Output {
        Offset(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_add_offset() {
        let coord = Coord::new(10.0, 20.0);
        let offset = Offset::new(5.0, -3.0);
        let result = coord + offset;
        assert_eq!(result.x(), 15.0);
        assert_eq!(result.y(), 17.0);
    }

    #[test]
    fn coord_sub_gives_offset() {
        let a = Coord::new(10.0, 20.0);
        let b = Coord::new(3.0, 5.0);
        let offset = a - b;
        assert_eq!(offset.dx(), 7.0);
        assert_eq!(offset.dy(), 15.0);
    }

    #[test]
    fn neg_reverses_offset() {
        let offset = Offset::new(4.0, -2.5);
        let back = -offset;
        assert_eq!(back.dx(), -4.0);
        assert_eq!(back.dy(), 2.5);
        // a + (p - a) followed by the inverse lands back on a
        let a = Coord::new(1.0, 1.0);
        assert_eq!(a + offset + -offset, a);
    }

    #[test]
    fn midpoint_is_halfway() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(4.0, 2.0);
        assert_eq!(a.midpoint(b), Coord::new(2.0, 1.0));
        assert_eq!(b.midpoint(a), Coord::new(2.0, 1.0));
    }

    #[test]
    fn from_dvec2_conversions() {
        let v = DVec2::new(5.0, 10.0);
        let c: Coord = v.into();
        let back: DVec2 = c.into();
        assert_eq!(v, back);
    }
}
