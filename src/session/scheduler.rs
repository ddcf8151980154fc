//! Delayed round transitions.
//!
//! After a round is resolved the result stays on screen for a fixed delay
//! before the next system move is drawn. `MatchSession` models that delay as
//! a single `PendingAdvance` tagged with the match generation:
//! 1. `play` resolves the round and schedules an advance
//! 2. `tick` fires the advance once it is due
//! 3. `reset` cancels it
//!
//! A presentation layer that runs its own timers can hold on to the returned
//! `PendingAdvance` and hand it back through `fire`; an advance from an
//! earlier generation, or one superseded by a later `play`, is discarded.

use log::debug;
use std::time::{Duration, Instant};

use crate::core::config::MatchConfig;
use crate::core::moves::Move;
use crate::core::state::MatchState;
use crate::engine::{MatchEngine, MatchError};

/// Session timing configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long a round result stays up before the next round starts.
    pub advance_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(1500),
        }
    }
}

impl SessionConfig {
    /// Set the advance delay.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}

/// A scheduled transition to the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    /// Match generation the advance belongs to.
    pub generation: u64,
    /// Round that was resolved.
    pub round: u32,
    /// When the advance may fire.
    pub due_at: Instant,
}

/// Result of `tick` or `fire`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing scheduled.
    Idle,

    /// An advance is scheduled but not yet due.
    Waiting { remaining: Duration },

    /// The next round has started.
    Advanced(MatchState),

    /// The advance belonged to an earlier generation or was superseded.
    Discarded(PendingAdvance),
}

/// A match engine plus its pending round transition.
#[derive(Clone, Debug)]
pub struct MatchSession {
    engine: MatchEngine,
    config: SessionConfig,
    pending: Option<PendingAdvance>,
}

impl MatchSession {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: MatchEngine, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            pending: None,
        }
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        self.engine.state()
    }

    /// Session timing.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The scheduled advance, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// Resolve a round and schedule the transition to the next one.
    ///
    /// Nothing is scheduled once the match is decided. A new `play` in the
    /// same round replaces the previous schedule.
    pub fn play(&mut self, player_move: Move, now: Instant) -> Result<MatchState, MatchError> {
        let state = self.engine.resolve_round(player_move)?;

        self.pending = if state.is_decided() {
            None
        } else {
            Some(PendingAdvance {
                generation: state.generation,
                round: state.round,
                due_at: now + self.config.advance_delay,
            })
        };

        Ok(state)
    }

    /// Fire the scheduled advance if it is due.
    pub fn tick(&mut self, now: Instant) -> Result<TickOutcome, MatchError> {
        match self.pending {
            None => Ok(TickOutcome::Idle),
            Some(pending) if now < pending.due_at => Ok(TickOutcome::Waiting {
                remaining: pending.due_at - now,
            }),
            Some(pending) => self.fire(pending),
        }
    }

    /// Fire a specific advance, regardless of its due time.
    ///
    /// Only the currently scheduled advance of the current generation
    /// starts a new round.
    pub fn fire(&mut self, advance: PendingAdvance) -> Result<TickOutcome, MatchError> {
        if advance.generation != self.engine.generation() || self.pending != Some(advance) {
            debug!(
                "discarding advance for generation {} round {} (now generation {})",
                advance.generation,
                advance.round,
                self.engine.generation()
            );
            return Ok(TickOutcome::Discarded(advance));
        }

        self.pending = None;
        let state = self.engine.advance()?;
        Ok(TickOutcome::Advanced(state))
    }

    /// Start a new match, cancelling any scheduled advance.
    pub fn reset(&mut self, config: MatchConfig) -> MatchState {
        if let Some(pending) = self.pending.take() {
            debug!(
                "reset cancels advance for generation {} round {}",
                pending.generation, pending.round
            );
        }
        self.engine.reset(config)
    }
}
