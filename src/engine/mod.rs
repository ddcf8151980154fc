//! Match engine: owns a match and applies the rules to it.
//!
//! - `MatchEngine`: resolve, advance, reset
//! - `EngineCheckpoint`: capture and restore a complete engine
//! - `MatchError`: the engine's error type

pub mod checkpoint;
pub mod error;
pub mod match_engine;

pub use checkpoint::EngineCheckpoint;
pub use error::MatchError;
pub use match_engine::MatchEngine;
