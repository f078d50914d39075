//! Presentation-side extraction
//!
//! Scene space: x runs right from the left wall edge, y runs up, and each
//! cell is drawn at its center, so cell (x, y) sits at
//! (x - min_x + 0.5, -y - 0.5). `from_scene` is the exact inverse through
//! `floor`, so any interpolated position maps back onto one grid cell.

use serde::Serialize;

use crate::domain::coord::Coordinate;
use crate::spatial::{Bounds, CellKind};

use super::SandSimulation;

const CELL_CENTER: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SceneFrame {
    pub bounds: Bounds,
    pub width: i32,
    pub height: i32,
    /// Side of the square that frames the whole structure
    pub extent: i32,
    pub center_x: f32,
    pub center_y: f32,
}

pub fn to_scene(bounds: &Bounds, cell: Coordinate) -> (f32, f32) {
    (
        (cell.x - bounds.min_x) as f32 + CELL_CENTER,
        -(cell.y as f32) - CELL_CENTER,
    )
}

pub fn from_scene(bounds: &Bounds, sx: f32, sy: f32) -> Coordinate {
    Coordinate::new(sx.floor() as i32 + bounds.min_x, (-sy).floor() as i32)
}

pub(super) fn scene_frame(sim: &SandSimulation) -> SceneFrame {
    let bounds = sim.bounds;
    let width = bounds.width();
    let height = bounds.height();
    SceneFrame {
        bounds,
        width,
        height,
        extent: width.max(height),
        center_x: width as f32 / 2.0,
        center_y: -(height as f32) / 2.0,
    }
}

fn flatten(cells: Vec<Coordinate>) -> Vec<i32> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    for c in cells {
        out.push(c.x);
        out.push(c.y);
    }
    out
}

pub(super) fn wall_cells_flat(sim: &SandSimulation) -> Vec<i32> {
    flatten(sim.grid.cells_of(CellKind::Wall))
}

pub(super) fn sand_cells_flat(sim: &SandSimulation) -> Vec<i32> {
    flatten(sim.grid.cells_of(CellKind::Sand))
}
