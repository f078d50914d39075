use crate::domain::coord::Coordinate;
use crate::systems::grain::{Grain, Transition};

use super::SandSimulation;

pub const EV_MOVED: u8 = 0;
pub const EV_SETTLED: u8 = 1;
pub const EV_LOST: u8 = 2;
pub const EV_FULL: u8 = 3;

/// Outcome of one logical step, for a presentation layer to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The live grain moved to this cell and keeps falling.
    Moved(Coordinate),
    /// The live grain came to rest here; a new grain is already at the spawn point.
    Settled(Coordinate),
    /// The live grain fell past the abyss row; a new grain is already at the spawn point.
    Lost,
    /// The spawn cell is occupied and `stop_when_full` is set. Nothing changed.
    Full,
}

impl StepEvent {
    /// Numeric tag used across the JS boundary.
    pub fn code(&self) -> u8 {
        match self {
            StepEvent::Moved(_) => EV_MOVED,
            StepEvent::Settled(_) => EV_SETTLED,
            StepEvent::Lost => EV_LOST,
            StepEvent::Full => EV_FULL,
        }
    }

    /// True when the grain that was live before this step is gone.
    pub fn resolves_grain(&self) -> bool {
        !matches!(self, StepEvent::Moved(_))
    }

    pub fn position(&self) -> Option<Coordinate> {
        match *self {
            StepEvent::Moved(c) | StepEvent::Settled(c) => Some(c),
            StepEvent::Lost | StepEvent::Full => None,
        }
    }
}

fn holds_full(sim: &SandSimulation) -> bool {
    sim.config.stop_when_full && sim.is_full()
}

/// Put a fresh grain at the spawn point unless the field reports full.
fn respawn(sim: &mut SandSimulation) {
    if holds_full(sim) {
        log::warn!("spawn cell {} is occupied, no further grains", sim.config.spawn_point);
        sim.grain = None;
    } else {
        sim.grain = Some(Grain::spawn(sim.config.spawn_point));
    }
}

pub(super) fn step(sim: &mut SandSimulation) -> StepEvent {
    if holds_full(sim) {
        sim.grain = None;
        return StepEvent::Full;
    }

    let abyss_row = sim.abyss_row();
    let spawn = sim.config.spawn_point;
    let grain = sim.grain.get_or_insert_with(|| Grain::spawn(spawn));
    let transition = grain.advance(&sim.grid, abyss_row);
    sim.stats.steps += 1;

    match transition {
        Transition::Moved(cell) => StepEvent::Moved(cell),
        Transition::Settled(cell) => {
            // Must land in the grid before the next grain exists.
            sim.grid.insert_sand(cell);
            sim.stats.grains_settled += 1;
            log::debug!("grain settled at {}", cell);
            respawn(sim);
            StepEvent::Settled(cell)
        }
        Transition::Lost(last) => {
            sim.stats.grains_lost += 1;
            if sim.stats.first_loss_after.is_none() {
                sim.stats.first_loss_after = Some(sim.stats.grains_settled);
            }
            log::debug!("grain lost below row {} from {}", abyss_row, last);
            respawn(sim);
            StepEvent::Lost
        }
    }
}
