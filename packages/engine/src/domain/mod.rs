pub mod config;
pub mod coord;
pub mod input;

pub use config::{DiagonalPolicy, SimulationConfig};
pub use coord::{Coordinate, WallPath, COORD_LIMIT};
pub use input::{parse_wall_paths, SAMPLE_INPUT};
