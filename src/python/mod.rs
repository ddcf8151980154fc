//! Python bindings for the rps-engine match engine.
//!
//! # Quick Start
//!
//! ```python
//! import rps_engine as rps
//!
//! engine = rps.MatchEngine(rounds_to_win=5, seed=42)
//!
//! state = engine.resolve_round("rock")
//! print(state.round_result, state.player_score, state.system_score)
//!
//! if not state.is_decided():
//!     engine.advance()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rps_engine: best-of-N Rock-Paper-Scissors against the computer.
#[pymodule]
fn rps_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchState>()?;
    m.add_class::<PyMatchEngine>()?;

    Ok(())
}
