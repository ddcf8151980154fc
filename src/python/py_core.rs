//! Core type bindings for Python.
//!
//! Moves and results cross the boundary as lowercase strings.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{MatchResult, MatchState, Move, RoundResult};
use crate::engine::MatchError;

impl From<MatchError> for PyErr {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidState { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

pub(crate) fn move_name(m: Move) -> &'static str {
    match m {
        Move::Rock => "rock",
        Move::Paper => "paper",
        Move::Scissors => "scissors",
    }
}

pub(crate) fn round_result_name(result: RoundResult) -> &'static str {
    match result {
        RoundResult::None => "none",
        RoundResult::Draw => "draw",
        RoundResult::PlayerWin => "player_win",
        RoundResult::SystemWin => "system_win",
    }
}

pub(crate) fn match_result_name(result: MatchResult) -> &'static str {
    match result {
        MatchResult::InProgress => "in_progress",
        MatchResult::PlayerWonMatch => "player_won_match",
        MatchResult::SystemWonMatch => "system_won_match",
    }
}

/// Python wrapper for a MatchState snapshot.
#[pyclass(name = "MatchState", frozen)]
#[derive(Clone, Debug)]
pub struct PyMatchState(pub MatchState);

#[pymethods]
impl PyMatchState {
    #[getter]
    fn system_move(&self) -> &'static str {
        move_name(self.0.system_move)
    }

    #[getter]
    fn player_score(&self) -> u8 {
        self.0.player_score
    }

    #[getter]
    fn system_score(&self) -> u8 {
        self.0.system_score
    }

    #[getter]
    fn round_result(&self) -> &'static str {
        round_result_name(self.0.round_result)
    }

    #[getter]
    fn match_result(&self) -> &'static str {
        match_result_name(self.0.match_result)
    }

    #[getter]
    fn rounds_to_win(&self) -> u8 {
        self.0.rounds_to_win
    }

    #[getter]
    fn win_threshold(&self) -> u8 {
        self.0.win_threshold
    }

    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.0.generation
    }

    #[getter]
    fn last_player_move(&self) -> Option<&'static str> {
        self.0.last_player_move.map(move_name)
    }

    /// Resolved rounds as `(round, player_move, system_move, result)` tuples.
    #[getter]
    fn history(&self) -> Vec<(u32, &'static str, &'static str, &'static str)> {
        self.0
            .history
            .iter()
            .map(|r| {
                (
                    r.round,
                    move_name(r.player_move),
                    move_name(r.system_move),
                    round_result_name(r.result),
                )
            })
            .collect()
    }

    fn is_decided(&self) -> bool {
        self.0.is_decided()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchState(round={}, score={}-{}, result={}, match={})",
            self.0.round,
            self.0.player_score,
            self.0.system_score,
            round_result_name(self.0.round_result),
            match_result_name(self.0.match_result)
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
