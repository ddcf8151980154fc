//! Presentation-side timing around the engine.
//!
//! The engine itself is synchronous. The only temporal behaviour in a match
//! is the pause between showing a round result and starting the next round,
//! which lives here as a generation-tagged scheduled advance.

mod scheduler;

pub use scheduler::{MatchSession, PendingAdvance, SessionConfig, TickOutcome};
