//! Coordinate - integer grid cell, y grows downward
//!
//! Occupancy lookups never hash text: a cell is packed into a single u64
//! (x in the high word, y in the low word, both as raw two's-complement bits),
//! so (-1, 0) and (0, -1) stay distinct keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest magnitude accepted for wall vertices, the spawn point and the
/// abyss row. Segment spans, grain drift and scene offsets stay inside `i32`
/// while every input cell is within it.
pub const COORD_LIMIT: i32 = 1 << 28;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Lossless packed key
    #[inline]
    pub const fn pack(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    #[inline]
    pub const fn unpack(key: u64) -> Self {
        Self {
            x: (key >> 32) as u32 as i32,
            y: key as u32 as i32,
        }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub fn is_within_limit(self) -> bool {
        let range = -COORD_LIMIT..=COORD_LIMIT;
        range.contains(&self.x) && range.contains(&self.y)
    }

    #[inline]
    pub fn is_axis_aligned_with(self, other: Coordinate) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Ordered polyline read from one input line (always >= 2 vertices once parsed)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallPath {
    vertices: Vec<Coordinate>,
}

impl WallPath {
    /// Build a path; returns None when fewer than two vertices are given.
    pub fn new(vertices: Vec<Coordinate>) -> Option<Self> {
        if vertices.len() < 2 {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Consecutive (A, B) vertex pairs
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}
