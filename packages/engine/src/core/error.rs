//! Load-time error taxonomy
//!
//! Everything here is raised before a simulation exists. Stepping itself has
//! no failure mode: a grain lost to the abyss is an event, not an error.

use thiserror::Error;

use crate::domain::coord::{Coordinate, COORD_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: `{token}` is not an `x,y` integer pair")]
    MalformedCoordinate { line: usize, token: String },

    #[error("line {line}: a wall path needs at least 2 vertices, found {found}")]
    TooFewVertices { line: usize, found: usize },

    #[error("input contains no wall paths")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("wall segment {from} -> {to} is neither horizontal nor vertical")]
    DiagonalSegment { from: Coordinate, to: Coordinate },

    #[error("wall vertex {cell} lies outside +/-{}", COORD_LIMIT)]
    OutOfRange { cell: Coordinate },

    #[error("abyss row {max_y} + {floor_margin} lies past {}", COORD_LIMIT)]
    AbyssOutOfRange { max_y: i32, floor_margin: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("step_interval_seconds must be a finite non-negative number, got {0}")]
    StepInterval(f64),

    #[error("floor_margin must be within 0..={}, got {0}", COORD_LIMIT)]
    FloorMargin(i32),

    #[error("spawn_point {0} lies outside +/-{}", COORD_LIMIT)]
    SpawnPoint(Coordinate),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ParseError::MalformedCoordinate { line: 3, token: "4x,2".into() };
        assert_eq!(err.to_string(), "line 3: `4x,2` is not an `x,y` integer pair");

        let err = GeometryError::DiagonalSegment {
            from: Coordinate::new(0, 0),
            to: Coordinate::new(2, 2),
        };
        assert!(err.to_string().contains("0,0 -> 2,2"));

        let err = GeometryError::AbyssOutOfRange { max_y: COORD_LIMIT, floor_margin: 4 };
        assert_eq!(err.to_string(), "abyss row 268435456 + 4 lies past 268435456");
    }

    #[test]
    fn engine_error_wraps_sources() {
        let err: EngineError = ParseError::Empty.into();
        assert!(matches!(err, EngineError::Parse(ParseError::Empty)));
        assert_eq!(err.to_string(), "input contains no wall paths");
    }
}
