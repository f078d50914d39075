//! StepDriver - minimum-interval gate between simulation steps
//!
//! The simulation has no notion of time. A render loop (or any other host)
//! calls `tick` as often as it likes; a step only happens once more than
//! `interval_secs` has passed since the previous one.

use crate::domain::config::SimulationConfig;

use super::step::StepEvent;
use super::{SandSimulation, StepClock};

pub struct StepDriver {
    interval_secs: f64,
    last_tick_secs: f64,
    clock: StepClock,
}

impl StepDriver {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs: interval_secs.max(0.0),
            last_tick_secs: 0.0,
            clock: StepClock::started_now(),
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.step_interval_seconds)
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }

    pub fn set_interval_secs(&mut self, interval_secs: f64) {
        self.interval_secs = interval_secs.max(0.0);
    }

    /// Step `sim` once if `now_secs` is strictly past the last tick plus the
    /// interval. `now_secs` is measured from the driver's own origin.
    pub fn tick(&mut self, sim: &mut SandSimulation, now_secs: f64) -> Option<StepEvent> {
        if now_secs <= self.last_tick_secs + self.interval_secs {
            return None;
        }
        self.last_tick_secs = now_secs;
        Some(sim.step())
    }

    /// `tick` against the driver's built-in clock.
    pub fn tick_now(&mut self, sim: &mut SandSimulation) -> Option<StepEvent> {
        let now = self.clock.now_secs();
        self.tick(sim, now)
    }

    /// Restart the time base at zero.
    pub fn restart(&mut self) {
        self.last_tick_secs = 0.0;
        self.clock = StepClock::started_now();
    }
}
