pub mod error;
pub mod utils;

pub use error::{ConfigError, EngineError, EngineResult, GeometryError, ParseError};
