//! The match engine.
//!
//! Owns the configuration, the current `MatchState`, the RNG and the hidden
//! coin. Every operation returns a fresh snapshot; callers never hold a
//! reference into the engine's state across operations.

use log::{debug, info, warn};

use crate::core::config::MatchConfig;
use crate::core::moves::Move;
use crate::core::rng::MatchRng;
use crate::core::state::{MatchState, RoundRecord, RoundResult};
use crate::rules;

use super::checkpoint::EngineCheckpoint;
use super::error::MatchError;

/// Best-of-N match against a computer opponent.
///
/// ## Lifecycle
///
/// - `resolve_round`: score the player's move against the system move
/// - `advance`: draw the next system move once the result has been shown
/// - `reset`: start over, always legal
///
/// `resolve_round` and `advance` fail with `MatchError::InvalidState` once
/// the match is decided, and never touch the scores in that case.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    state: MatchState,
    rng: MatchRng,
    /// Hidden per-round coin for `RuleSet::Favored`.
    favor_player: bool,
}

impl MatchEngine {
    /// Create an engine with a fresh match.
    #[must_use]
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self::with_rng(config, MatchRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: MatchConfig) -> Self {
        Self::with_rng(config, MatchRng::from_entropy())
    }

    /// Create an engine and return it along with its initial state.
    #[must_use]
    pub fn initialize(config: MatchConfig, seed: u64) -> (Self, MatchState) {
        let engine = Self::new(config, seed);
        let state = engine.state().clone();
        (engine, state)
    }

    fn with_rng(config: MatchConfig, mut rng: MatchRng) -> Self {
        let system_move = rng.gen_move();
        let favor_player = config.rules.uses_coin() && rng.gen_coin();
        let state = MatchState::new(&config, system_move, 0);

        debug!(
            "new match: {} ({} rules), seed {}",
            config.length,
            config.rules,
            rng.seed()
        );

        Self {
            config,
            state,
            rng,
            favor_player,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Generation of the current match.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    /// Is the current match over?
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.state.is_decided()
    }

    fn ensure_in_progress(&self, operation: &str) -> Result<(), MatchError> {
        if self.state.is_decided() {
            warn!(
                "{} rejected: match {} (generation {})",
                operation, self.state.match_result, self.state.generation
            );
            return Err(MatchError::InvalidState {
                status: self.state.match_result,
            });
        }
        Ok(())
    }

    /// Score `player_move` against the current system move.
    ///
    /// Calling this twice in the same round re-resolves against the same
    /// system move.
    pub fn resolve_round(&mut self, player_move: Move) -> Result<MatchState, MatchError> {
        self.ensure_in_progress("resolve_round")?;

        let system_move = self.state.system_move;
        let result = self
            .config
            .rules
            .resolve_moves(player_move, system_move, self.favor_player);

        match result {
            RoundResult::PlayerWin => self.state.player_score += 1,
            RoundResult::SystemWin => self.state.system_score += 1,
            RoundResult::Draw | RoundResult::None => {}
        }

        self.state.round_result = result;
        self.state.last_player_move = Some(player_move);
        self.state.history.push_back(RoundRecord {
            round: self.state.round,
            player_move,
            system_move,
            result,
        });
        self.state.match_result = rules::match_result(
            self.state.player_score,
            self.state.system_score,
            self.state.win_threshold,
        );

        debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            self.state.round,
            player_move,
            system_move,
            result,
            self.state.player_score,
            self.state.system_score
        );
        if self.state.is_decided() {
            info!(
                "match {} {}-{} after {} rounds",
                self.state.match_result,
                self.state.player_score,
                self.state.system_score,
                self.state.round
            );
        }

        Ok(self.state.clone())
    }

    /// Start the next round with a new system move.
    pub fn advance(&mut self) -> Result<MatchState, MatchError> {
        self.ensure_in_progress("advance")?;

        self.state.system_move = self.rng.gen_move();
        if self.config.rules.uses_coin() {
            self.favor_player = self.rng.gen_coin();
        }
        self.state.round_result = RoundResult::None;
        self.state.last_player_move = None;
        self.state.round += 1;

        debug!("advanced to round {}", self.state.round);

        Ok(self.state.clone())
    }

    /// Discard the current match and start a new one.
    ///
    /// The RNG stream continues; it is not reseeded.
    pub fn reset(&mut self, config: MatchConfig) -> MatchState {
        let generation = self.state.generation + 1;

        self.config = config;
        let system_move = self.rng.gen_move();
        self.favor_player = config.rules.uses_coin() && self.rng.gen_coin();
        self.state = MatchState::new(&self.config, system_move, generation);

        info!(
            "reset: {} ({} rules), generation {}",
            config.length, config.rules, generation
        );

        self.state.clone()
    }

    /// Capture the complete engine for later `restore`.
    #[must_use]
    pub fn checkpoint(&self) -> EngineCheckpoint {
        EngineCheckpoint {
            config: self.config,
            state: self.state.clone(),
            rng: self.rng.state(),
            favor_player: self.favor_player,
        }
    }

    /// Rebuild an engine from a checkpoint.
    ///
    /// Fails with `MatchError::InvalidCheckpoint` when the state does not
    /// match its configuration or its scores.
    pub fn restore(checkpoint: &EngineCheckpoint) -> Result<Self, MatchError> {
        checkpoint.validate()?;
        Ok(Self {
            config: checkpoint.config,
            state: checkpoint.state.clone(),
            rng: MatchRng::from_state(&checkpoint.rng),
            favor_player: checkpoint.favor_player,
        })
    }
}
