//! SandSimulation - one grain at a time settling over rasterized walls
//!
//! The simulation context exclusively owns the occupancy set, the bounds,
//! the configuration and the single live grain. Nothing is global.
//!
//! SandSimulation only orchestrates:
//! - wall geometry is in systems/rasterize.rs
//! - grain movement rules are in systems/grain.rs
//! - occupancy storage is in spatial/occupancy.rs
//! - wall-clock gating is in driver/driver.rs

use std::collections::HashSet;

use crate::core::error::EngineResult;
use crate::domain::config::SimulationConfig;
use crate::domain::coord::{Coordinate, WallPath};
use crate::spatial::{Bounds, OccupancyGrid};
use crate::systems::grain::Grain;

#[path = "driver/clock.rs"]
mod clock;
#[path = "perf/sim_stats.rs"]
mod sim_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/run.rs"]
mod run;
#[path = "driver/driver.rs"]
mod driver;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use driver::StepDriver;
pub use facade::Simulation;
pub use render_extract::{from_scene, to_scene, SceneFrame};
pub use run::Events;
pub use sim_stats::SimStats;
pub use step::{StepEvent, EV_FULL, EV_LOST, EV_MOVED, EV_SETTLED};

use clock::StepClock;

/// The simulation context
pub struct SandSimulation {
    config: SimulationConfig,
    wall_paths: Vec<WallPath>,
    bounds: Bounds,
    grid: OccupancyGrid,
    // None only once the spawn cell is full and `stop_when_full` is set
    grain: Option<Grain>,
    stats: SimStats,
}

impl SandSimulation {
    /// Rasterize `paths`, seed the occupancy set and spawn the first grain.
    pub fn new(config: SimulationConfig, paths: Vec<WallPath>) -> EngineResult<Self> {
        init::create_simulation(config, paths)
    }

    /// Parse the line-based wall format and build a seeded simulation.
    pub fn from_input(text: &str, config: SimulationConfig) -> EngineResult<Self> {
        init::create_simulation_from_input(text, config)
    }

    /// Replace the wall geometry and restart from an empty field.
    /// On error the current state is left untouched.
    pub fn seed(&mut self, paths: Vec<WallPath>) -> EngineResult<()> {
        init::seed(self, paths)
    }

    /// Discard settled sand and the live grain, keeping the walls.
    pub fn reset(&mut self) {
        init::reset(self)
    }

    /// Advance the live grain by exactly one movement decision.
    pub fn step(&mut self) -> StepEvent {
        step::step(self)
    }

    /// Lazy, restartable stream of step events; ends once the field is full.
    pub fn events(&mut self) -> Events<'_> {
        run::events(self)
    }

    /// Step until the live grain settles, is lost, or the field reports full.
    pub fn run_until_grain_resolves(&mut self) -> StepEvent {
        run::run_until_grain_resolves(self)
    }

    /// Number of grains settled before the first abyss loss, resolving at
    /// most `max_grains` grains. None when no loss happened within the limit.
    pub fn run_until_first_lost(&mut self, max_grains: usize) -> Option<u32> {
        run::run_until_first_lost(self, max_grains)
    }

    pub fn current_grain_position(&self) -> Option<Coordinate> {
        self.grain.map(|g| g.position())
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn occupancy_snapshot(&self) -> HashSet<Coordinate> {
        self.grid.snapshot()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn wall_paths(&self) -> &[WallPath] {
        &self.wall_paths
    }

    /// Deepest row a grain may sit on and still be evaluated for movement
    pub fn abyss_row(&self) -> i32 {
        self.bounds.abyss_row(self.config.floor_margin)
    }

    pub fn is_full(&self) -> bool {
        self.grid.contains(self.config.spawn_point)
    }

    pub fn stats(&self) -> SimStats {
        self.stats.clone()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn set_floor_margin(&mut self, floor_margin: i32) -> EngineResult<()> {
        settings::set_floor_margin(self, floor_margin)
    }

    pub fn set_step_interval_seconds(&mut self, seconds: f64) -> EngineResult<()> {
        settings::set_step_interval_seconds(self, seconds)
    }

    pub fn set_stop_when_full(&mut self, enabled: bool) {
        settings::set_stop_when_full(self, enabled)
    }

    /// Moves the source cell for every grain spawned after this call.
    pub fn set_spawn_point(&mut self, spawn_point: Coordinate) -> EngineResult<()> {
        settings::set_spawn_point(self, spawn_point)
    }

    /// Scene-space framing for a presentation layer
    pub fn scene_frame(&self) -> SceneFrame {
        render_extract::scene_frame(self)
    }

    /// Wall cells as a flat `[x0, y0, x1, y1, ..]` buffer, row-major
    pub fn wall_cells_flat(&self) -> Vec<i32> {
        render_extract::wall_cells_flat(self)
    }

    /// Settled sand cells as a flat `[x0, y0, x1, y1, ..]` buffer, row-major
    pub fn sand_cells_flat(&self) -> Vec<i32> {
        render_extract::sand_cells_flat(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
