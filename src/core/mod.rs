//! Core match types: moves, configuration, state snapshots, RNG.
//!
//! These are plain data types. The rules that connect them live in
//! `rules`, and the engine that owns them lives in `engine`.

pub mod moves;
pub mod config;
pub mod rng;
pub mod state;

pub use moves::Move;
pub use config::{MatchConfig, MatchLength};
pub use rng::{MatchRng, MatchRngState};
pub use state::{MatchResult, MatchState, RoundRecord, RoundResult};
