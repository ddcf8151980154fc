//! Engine bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{MatchConfig, MatchLength, Move};
use crate::engine::{EngineCheckpoint, MatchEngine};
use crate::rules::RuleSet;

use super::py_core::PyMatchState;

fn build_config(rounds_to_win: u8, rules: &str) -> PyResult<MatchConfig> {
    let length = MatchLength::try_from(rounds_to_win)?;
    let rules: RuleSet = rules.parse()?;
    Ok(MatchConfig::new(length).with_rules(rules))
}

/// Python wrapper for MatchEngine.
///
/// Moves are passed as strings ("rock", "paper", "scissors", or r/p/s).
#[pyclass(name = "MatchEngine")]
pub struct PyMatchEngine {
    engine: MatchEngine,
}

#[pymethods]
impl PyMatchEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - rounds_to_win: 3, 5 or 7
    /// - rules: "classic" or "favored"
    /// - seed: RNG seed; drawn from OS entropy when omitted
    #[new]
    #[pyo3(signature = (rounds_to_win = 3, rules = "classic", seed = None))]
    fn new(rounds_to_win: u8, rules: &str, seed: Option<u64>) -> PyResult<Self> {
        let config = build_config(rounds_to_win, rules)?;
        let engine = match seed {
            Some(seed) => MatchEngine::new(config, seed),
            None => MatchEngine::from_entropy(config),
        };
        Ok(Self { engine })
    }

    /// Resolve a round. Raises RuntimeError once the match is decided.
    fn resolve_round(&mut self, player_move: &str) -> PyResult<PyMatchState> {
        let player_move: Move = player_move.parse()?;
        Ok(PyMatchState(self.engine.resolve_round(player_move)?))
    }

    /// Start the next round. Raises RuntimeError once the match is decided.
    fn advance(&mut self) -> PyResult<PyMatchState> {
        Ok(PyMatchState(self.engine.advance()?))
    }

    /// Start a new match.
    #[pyo3(signature = (rounds_to_win = 3, rules = "classic"))]
    fn reset(&mut self, rounds_to_win: u8, rules: &str) -> PyResult<PyMatchState> {
        let config = build_config(rounds_to_win, rules)?;
        Ok(PyMatchState(self.engine.reset(config)))
    }

    /// Current state snapshot.
    #[getter]
    fn state(&self) -> PyMatchState {
        PyMatchState(self.engine.state().clone())
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.engine.generation()
    }

    fn is_decided(&self) -> bool {
        self.engine.is_decided()
    }

    /// Encode the complete engine as bytes.
    fn checkpoint<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.engine.checkpoint().encode()?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Rebuild an engine from `checkpoint()` bytes.
    #[staticmethod]
    fn restore(data: &[u8]) -> PyResult<Self> {
        let checkpoint = EngineCheckpoint::decode(data)?;
        Ok(Self {
            engine: MatchEngine::restore(&checkpoint)?,
        })
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "MatchEngine({}, rules={}, draws={}, score={}-{}, generation={})",
            self.engine.config().length,
            self.engine.config().rules,
            self.engine.config().rules.allows_draws(),
            state.player_score,
            state.system_score,
            state.generation
        )
    }
}
