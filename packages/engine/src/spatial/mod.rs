pub mod bounds;
pub mod occupancy;

pub use bounds::Bounds;
pub use occupancy::{CellKind, OccupancyGrid};
