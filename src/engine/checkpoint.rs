//! Engine checkpoints.
//!
//! A checkpoint captures everything needed to resume a match exactly:
//! configuration, state, RNG position and the hidden coin. Checkpoints are
//! in-memory values; `encode`/`decode` give a compact bincode form for
//! handing an engine across a binding boundary.

use serde::{Deserialize, Serialize};

use crate::core::config::MatchConfig;
use crate::core::rng::MatchRngState;
use crate::core::state::MatchState;
use crate::rules;

use super::error::MatchError;

/// Complete engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCheckpoint {
    pub config: MatchConfig,
    pub state: MatchState,
    pub rng: MatchRngState,
    pub favor_player: bool,
}

impl EngineCheckpoint {
    /// Encode as bincode bytes.
    pub fn encode(&self) -> Result<Vec<u8>, MatchError> {
        Ok(bincode::serialize(self)?)
    }

    /// Check that the state agrees with its configuration and scores.
    pub fn validate(&self) -> Result<(), MatchError> {
        let state = &self.state;
        let threshold = self.config.win_threshold();

        if state.rounds_to_win != self.config.rounds_to_win() {
            return Err(MatchError::InvalidCheckpoint("rounds_to_win does not match the config"));
        }
        if state.win_threshold != threshold {
            return Err(MatchError::InvalidCheckpoint("win_threshold does not match the config"));
        }
        if state.player_score > threshold || state.system_score > threshold {
            return Err(MatchError::InvalidCheckpoint("score above the win threshold"));
        }
        if state.player_score == threshold && state.system_score == threshold {
            return Err(MatchError::InvalidCheckpoint("both sides at the win threshold"));
        }
        if state.match_result != rules::match_result(state.player_score, state.system_score, threshold) {
            return Err(MatchError::InvalidCheckpoint("match result does not match the scores"));
        }
        Ok(())
    }

    /// Decode from bincode bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, MatchError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
