use super::step::StepEvent;
use super::SandSimulation;

/// Pull-based event stream over a simulation. Dropping it and calling
/// `events()` again resumes from the current state.
pub struct Events<'a> {
    sim: &'a mut SandSimulation,
}

impl Iterator for Events<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        match self.sim.step() {
            StepEvent::Full => None,
            event => Some(event),
        }
    }
}

pub(super) fn events(sim: &mut SandSimulation) -> Events<'_> {
    Events { sim }
}

// Terminates: each Moved increases y by one and the abyss check fires once
// y passes the abyss row.
pub(super) fn run_until_grain_resolves(sim: &mut SandSimulation) -> StepEvent {
    loop {
        let event = sim.step();
        if event.resolves_grain() {
            return event;
        }
    }
}

pub(super) fn run_until_first_lost(sim: &mut SandSimulation, max_grains: usize) -> Option<u32> {
    if let Some(settled) = sim.stats.first_loss_after {
        return Some(settled);
    }
    for _ in 0..max_grains {
        match run_until_grain_resolves(sim) {
            StepEvent::Lost => return sim.stats.first_loss_after,
            StepEvent::Full => return None,
            _ => {}
        }
    }
    None
}
