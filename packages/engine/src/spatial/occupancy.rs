//! OccupancyGrid - sparse, insert-only set of solid cells
//!
//! Keys are packed coordinates (see `Coordinate::pack`). Walls are seeded once;
//! settled sand is appended one cell at a time. Nothing is ever removed during
//! a run, so a falling grain always tests against a growing obstacle set.

use std::collections::{HashMap, HashSet};

use crate::domain::coord::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Sand,
}

#[derive(Clone, Debug, Default)]
pub struct OccupancyGrid {
    cells: HashMap<u64, CellKind>,
    wall_count: usize,
    sand_count: usize,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_walls(walls: impl IntoIterator<Item = Coordinate>) -> Self {
        let mut grid = Self::new();
        for cell in walls {
            grid.insert_wall(cell);
        }
        grid
    }

    #[inline]
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains_key(&cell.pack())
    }

    #[inline]
    pub fn kind(&self, cell: Coordinate) -> Option<CellKind> {
        self.cells.get(&cell.pack()).copied()
    }

    /// Returns false when the cell was already solid.
    pub fn insert_wall(&mut self, cell: Coordinate) -> bool {
        self.insert(cell, CellKind::Wall)
    }

    /// Returns false when the cell was already solid.
    pub fn insert_sand(&mut self, cell: Coordinate) -> bool {
        self.insert(cell, CellKind::Sand)
    }

    fn insert(&mut self, cell: Coordinate, kind: CellKind) -> bool {
        let key = cell.pack();
        if self.cells.contains_key(&key) {
            return false;
        }
        self.cells.insert(key, kind);
        match kind {
            CellKind::Wall => self.wall_count += 1,
            CellKind::Sand => self.sand_count += 1,
        }
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn wall_count(&self) -> usize {
        self.wall_count
    }

    #[inline]
    pub fn sand_count(&self) -> usize {
        self.sand_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellKind)> + '_ {
        self.cells.iter().map(|(&key, &kind)| (Coordinate::unpack(key), kind))
    }

    /// Cells of one kind, sorted row-major for stable output.
    pub fn cells_of(&self, kind: CellKind) -> Vec<Coordinate> {
        let mut out: Vec<Coordinate> = self
            .iter()
            .filter(|&(_, k)| k == kind)
            .map(|(c, _)| c)
            .collect();
        out.sort_by_key(|c| (c.y, c.x));
        out
    }

    pub fn snapshot(&self) -> HashSet<Coordinate> {
        self.cells.keys().map(|&key| Coordinate::unpack(key)).collect()
    }

    /// Drop every settled grain, keeping the wall cells.
    pub fn reset_to_walls(&mut self) {
        self.cells.retain(|_, kind| *kind == CellKind::Wall);
        self.sand_count = 0;
    }
}
