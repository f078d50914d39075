//! SimulationConfig - the recognized options, loadable from JSON
//!
//! Missing fields fall back to the defaults below; unknown fields are rejected.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::domain::coord::{Coordinate, COORD_LIMIT};

pub const DEFAULT_SPAWN_POINT: Coordinate = Coordinate::new(500, 0);
pub const DEFAULT_FLOOR_MARGIN: i32 = 4;
pub const DEFAULT_STEP_INTERVAL_SECONDS: f64 = 0.0001;

/// What to do with a wall segment whose endpoints differ along both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalPolicy {
    /// Fail the load with `GeometryError::DiagonalSegment`.
    #[default]
    Reject,
    /// Fill A's row and A's column independently (legacy L-shaped fill).
    LShape,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub spawn_point: Coordinate,
    /// Rows below the deepest wall vertex a grain may reach before it is lost
    pub floor_margin: i32,
    pub step_interval_seconds: f64,
    pub diagonal_policy: DiagonalPolicy,
    /// Report `StepEvent::Full` once the spawn cell is occupied
    pub stop_when_full: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spawn_point: DEFAULT_SPAWN_POINT,
            floor_margin: DEFAULT_FLOOR_MARGIN,
            step_interval_seconds: DEFAULT_STEP_INTERVAL_SECONDS,
            diagonal_policy: DiagonalPolicy::Reject,
            stop_when_full: false,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_interval_seconds.is_finite() || self.step_interval_seconds < 0.0 {
            return Err(ConfigError::StepInterval(self.step_interval_seconds));
        }
        if !(0..=COORD_LIMIT).contains(&self.floor_margin) {
            return Err(ConfigError::FloorMargin(self.floor_margin));
        }
        if !self.spawn_point.is_within_limit() {
            return Err(ConfigError::SpawnPoint(self.spawn_point));
        }
        Ok(())
    }

    pub fn with_spawn_point(mut self, spawn_point: Coordinate) -> Self {
        self.spawn_point = spawn_point;
        self
    }

    pub fn with_floor_margin(mut self, floor_margin: i32) -> Self {
        self.floor_margin = floor_margin;
        self
    }

    pub fn with_diagonal_policy(mut self, policy: DiagonalPolicy) -> Self {
        self.diagonal_policy = policy;
        self
    }

    pub fn with_stop_when_full(mut self, enabled: bool) -> Self {
        self.stop_when_full = enabled;
        self
    }
}
