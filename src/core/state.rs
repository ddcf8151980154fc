//! Match state snapshots.
//!
//! ## MatchState
//!
//! Everything the presentation layer needs to render a match:
//! - Current system move
//! - Scores and the most recent round result
//! - Match result, round number and generation
//! - Round history
//!
//! Snapshots are immutable values. The engine hands out a fresh clone after
//! every operation; the history uses `im::Vector` so that clone is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::moves::Move;

/// Outcome of the most recently resolved round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// No round resolved yet in the current round.
    #[default]
    None,
    Draw,
    PlayerWin,
    SystemWin,
}

impl RoundResult {
    /// Was a round resolved?
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != RoundResult::None
    }
}

/// Overall match status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[default]
    InProgress,
    PlayerWonMatch,
    SystemWonMatch,
}

impl MatchResult {
    /// Has either side reached the threshold?
    #[must_use]
    pub fn is_decided(self) -> bool {
        self != MatchResult::InProgress
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MatchResult::InProgress => "in progress",
            MatchResult::PlayerWonMatch => "won by the player",
            MatchResult::SystemWonMatch => "won by the system",
        };
        f.write_str(text)
    }
}

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub player_move: Move,
    pub system_move: Move,
    pub result: RoundResult,
}

/// Snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// The system's move for the current round.
    pub system_move: Move,

    pub player_score: u8,
    pub system_score: u8,

    /// Outcome of the most recent resolution in this round.
    pub round_result: RoundResult,

    pub match_result: MatchResult,

    /// The N in "best of N".
    pub rounds_to_win: u8,

    /// Round wins needed to take the match.
    pub win_threshold: u8,

    /// Current round number (starts at 1).
    pub round: u32,

    /// Match generation; bumped on every reset.
    pub generation: u64,

    /// Player move of the most recent resolution in this round.
    pub last_player_move: Option<Move>,

    /// Every resolution of this match, oldest first.
    pub history: Vector<RoundRecord>,
}

impl MatchState {
    /// Fresh state for a new match.
    #[must_use]
    pub fn new(config: &MatchConfig, system_move: Move, generation: u64) -> Self {
        Self {
            system_move,
            player_score: 0,
            system_score: 0,
            round_result: RoundResult::None,
            match_result: MatchResult::InProgress,
            rounds_to_win: config.rounds_to_win(),
            win_threshold: config.win_threshold(),
            round: 1,
            generation,
            last_player_move: None,
            history: Vector::new(),
        }
    }

    /// Is the match over?
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.match_result.is_decided()
    }

    /// Scores as `(player, system)`.
    #[must_use]
    pub fn score(&self) -> (u8, u8) {
        (self.player_score, self.system_score)
    }
}
