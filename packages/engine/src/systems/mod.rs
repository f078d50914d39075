pub mod grain;
pub mod rasterize;

pub use grain::{Grain, GrainState, Transition, FALL_CANDIDATES};
pub use rasterize::{rasterize_path, rasterize_segment, rasterize_walls};
