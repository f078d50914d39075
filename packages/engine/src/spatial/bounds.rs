//! Bounds - field extent from the raw wall vertices
//!
//! Only named vertices are scanned, never the rasterized fill: on axis-aligned
//! input the fill cannot extend past its endpoints.

use serde::Serialize;

use crate::core::error::GeometryError;
use crate::domain::coord::{Coordinate, WallPath, COORD_LIMIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    /// Spawn row axis origin, always 0
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn from_paths(paths: &[WallPath]) -> Option<Self> {
        Self::from_vertices(paths.iter().flat_map(|p| p.vertices().iter().copied()))
    }

    pub fn from_vertices(vertices: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut iter = vertices.into_iter();
        let first = iter.next()?;

        let mut bounds = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: 0,
            max_y: first.y,
        };
        for v in iter {
            bounds.min_x = bounds.min_x.min(v.x);
            bounds.max_x = bounds.max_x.max(v.x);
            bounds.max_y = bounds.max_y.max(v.y);
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Deepest row a falling grain may occupy before it counts as lost
    #[inline]
    pub fn abyss_row(&self, floor_margin: i32) -> i32 {
        self.max_y + floor_margin
    }

    /// `abyss_row`, refused when it would leave the supported range
    pub fn checked_abyss_row(&self, floor_margin: i32) -> Result<i32, GeometryError> {
        self.max_y
            .checked_add(floor_margin)
            .filter(|row| *row <= COORD_LIMIT)
            .ok_or(GeometryError::AbyssOutOfRange { max_y: self.max_y, floor_margin })
    }
}
