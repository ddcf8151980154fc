//! Rules for resolving rounds and deciding matches.
//!
//! - `RuleSet`: how a pair of moves becomes a round result
//! - `match_result`: when a match is over
//!
//! The engine calls into these but never interprets outcomes directly.

pub mod engine;

pub use engine::{match_result, RuleSet};
