use crate::core::error::EngineResult;
use crate::domain::coord::Coordinate;

use super::SandSimulation;

pub(super) fn set_floor_margin(sim: &mut SandSimulation, floor_margin: i32) -> EngineResult<()> {
    let mut config = sim.config.clone();
    config.floor_margin = floor_margin;
    config.validate()?;
    sim.bounds.checked_abyss_row(floor_margin)?;
    sim.config = config;
    Ok(())
}

pub(super) fn set_step_interval_seconds(sim: &mut SandSimulation, seconds: f64) -> EngineResult<()> {
    let mut config = sim.config.clone();
    config.step_interval_seconds = seconds;
    config.validate()?;
    sim.config = config;
    Ok(())
}

pub(super) fn set_stop_when_full(sim: &mut SandSimulation, enabled: bool) {
    sim.config.stop_when_full = enabled;
}

pub(super) fn set_spawn_point(sim: &mut SandSimulation, spawn_point: Coordinate) -> EngineResult<()> {
    let mut config = sim.config.clone();
    config.spawn_point = spawn_point;
    config.validate()?;
    sim.config = config;
    Ok(())
}
