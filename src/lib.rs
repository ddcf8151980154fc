//! # rps-engine
//!
//! Rule engine for a best-of-N Rock-Paper-Scissors match against a
//! computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared state**: every engine operation returns an
//!    immutable `MatchState`. The presentation layer keeps the latest
//!    snapshot and re-renders when it changes.
//!
//! 2. **Pure rules**: round outcomes are a function of the move difference,
//!    the rule set and (for `RuleSet::Favored`) the hidden coin. Nothing
//!    else in the match history matters.
//!
//! 3. **Deterministic**: the system's moves come from a seeded ChaCha8 RNG,
//!    so a seed plus a list of player moves replays a match exactly.
//!
//! ## Modules
//!
//! - `core`: moves, configuration, state snapshots, RNG
//! - `rules`: round resolution and match completion
//! - `engine`: `MatchEngine`, checkpoints, errors
//! - `session`: generation-tagged delayed round transitions
//!
//! ```
//! use rps_engine::{MatchConfig, MatchEngine, MatchLength, Move, RoundResult};
//!
//! let mut engine = MatchEngine::new(MatchConfig::new(MatchLength::BestOf3), 42);
//! let system = engine.state().system_move;
//!
//! let state = engine.resolve_round(system).unwrap();
//! assert_eq!(state.round_result, RoundResult::Draw);
//! assert_eq!(state.score(), (0, 0));
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Move,
    MatchConfig, MatchLength,
    MatchRng, MatchRngState,
    MatchResult, MatchState, RoundRecord, RoundResult,
};

pub use crate::rules::{match_result, RuleSet};

pub use crate::engine::{EngineCheckpoint, MatchEngine, MatchError};

pub use crate::session::{MatchSession, PendingAdvance, SessionConfig, TickOutcome};
