//! Grainfall Engine - one-grain-at-a-time sand settling in WASM
//!
//! Architecture:
//! - core/          - Errors, logging
//! - domain/        - Coordinates, wall input, configuration
//! - spatial/       - Occupancy set, bounds
//! - systems/       - Wall rasterization, grain movement rules
//! - simulation/    - Context object, stepping, driver, JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use crate::core::error::{ConfigError, EngineError, EngineResult, GeometryError, ParseError};
pub use domain::{parse_wall_paths, Coordinate, DiagonalPolicy, SimulationConfig, WallPath, SAMPLE_INPUT};
pub use simulation::{SandSimulation, SimStats, Simulation, StepDriver, StepEvent};
pub use spatial::{Bounds, CellKind, OccupancyGrid};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    crate::core::utils::logging::install_console_logger();

    log::info!("grainfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Event codes returned by `Simulation.step()`
#[wasm_bindgen]
pub fn ev_moved() -> u8 { simulation::EV_MOVED }
#[wasm_bindgen]
pub fn ev_settled() -> u8 { simulation::EV_SETTLED }
#[wasm_bindgen]
pub fn ev_lost() -> u8 { simulation::EV_LOST }
#[wasm_bindgen]
pub fn ev_full() -> u8 { simulation::EV_FULL }
