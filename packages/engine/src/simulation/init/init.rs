use crate::core::error::{EngineResult, ParseError};
use crate::domain::config::SimulationConfig;
use crate::domain::coord::WallPath;
use crate::domain::input::parse_wall_paths;
use crate::spatial::{Bounds, OccupancyGrid};
use crate::systems::grain::Grain;
use crate::systems::rasterize::rasterize_walls;

use super::sim_stats::SimStats;
use super::SandSimulation;

struct Seeded {
    bounds: Bounds,
    grid: OccupancyGrid,
}

fn build(config: &SimulationConfig, paths: &[WallPath]) -> EngineResult<Seeded> {
    let bounds = Bounds::from_paths(paths).ok_or(ParseError::Empty)?;
    let walls = rasterize_walls(paths, config.diagonal_policy)?;
    bounds.checked_abyss_row(config.floor_margin)?;
    let grid = OccupancyGrid::from_walls(walls);

    log::info!(
        "seeded {} wall cells from {} paths, x {}..={}, floor row {}",
        grid.wall_count(),
        paths.len(),
        bounds.min_x,
        bounds.max_x,
        bounds.max_y,
    );

    Ok(Seeded { bounds, grid })
}

pub(super) fn create_simulation(config: SimulationConfig, paths: Vec<WallPath>) -> EngineResult<SandSimulation> {
    config.validate()?;
    let Seeded { bounds, grid } = build(&config, &paths)?;

    Ok(SandSimulation {
        grain: Some(Grain::spawn(config.spawn_point)),
        config,
        wall_paths: paths,
        bounds,
        grid,
        stats: SimStats::default(),
    })
}

pub(super) fn create_simulation_from_input(text: &str, config: SimulationConfig) -> EngineResult<SandSimulation> {
    let paths = parse_wall_paths(text)?;
    create_simulation(config, paths)
}

pub(super) fn seed(sim: &mut SandSimulation, paths: Vec<WallPath>) -> EngineResult<()> {
    let Seeded { bounds, grid } = build(&sim.config, &paths)?;

    sim.wall_paths = paths;
    sim.bounds = bounds;
    sim.grid = grid;
    sim.grain = Some(Grain::spawn(sim.config.spawn_point));
    sim.stats = SimStats::default();
    Ok(())
}

pub(super) fn reset(sim: &mut SandSimulation) {
    sim.grid.reset_to_walls();
    sim.grain = Some(Grain::spawn(sim.config.spawn_point));
    sim.stats = SimStats::default();

    log::info!("reset to {} wall cells", sim.grid.wall_count());
}
