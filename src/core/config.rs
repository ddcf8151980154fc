//! Match configuration types.
//!
//! A match is configured once, at construction or reset, by providing:
//! - `MatchLength`: best of 3, 5 or 7 rounds
//! - `RuleSet`: how a round is resolved
//!
//! The configuration never changes while a match is in progress.

use serde::{Deserialize, Serialize};

use crate::engine::MatchError;
use crate::rules::RuleSet;

/// Configured match length ("best of N").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLength {
    #[default]
    BestOf3,
    BestOf5,
    BestOf7,
}

impl MatchLength {
    /// All supported lengths, shortest first.
    pub const ALL: [MatchLength; 3] = [MatchLength::BestOf3, MatchLength::BestOf5, MatchLength::BestOf7];

    /// The N in "best of N".
    #[must_use]
    pub const fn rounds_to_win(self) -> u8 {
        match self {
            MatchLength::BestOf3 => 3,
            MatchLength::BestOf5 => 5,
            MatchLength::BestOf7 => 7,
        }
    }

    /// Round wins needed to take the match: `floor(N / 2) + 1`.
    #[must_use]
    pub const fn win_threshold(self) -> u8 {
        self.rounds_to_win() / 2 + 1
    }
}

impl TryFrom<u8> for MatchLength {
    type Error = MatchError;

    fn try_from(rounds_to_win: u8) -> Result<Self, Self::Error> {
        match rounds_to_win {
            3 => Ok(MatchLength::BestOf3),
            5 => Ok(MatchLength::BestOf5),
            7 => Ok(MatchLength::BestOf7),
            other => Err(MatchError::UnsupportedLength(other)),
        }
    }
}

impl std::fmt::Display for MatchLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Best of {}", self.rounds_to_win())
    }
}

/// Complete match configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Match length.
    pub length: MatchLength,

    /// Round-resolution rules.
    pub rules: RuleSet,
}

impl MatchConfig {
    /// Create a configuration with the default (classic) rules.
    #[must_use]
    pub fn new(length: MatchLength) -> Self {
        Self {
            length,
            rules: RuleSet::default(),
        }
    }

    /// Create a configuration from a raw "best of" count.
    pub fn best_of(rounds_to_win: u8) -> Result<Self, MatchError> {
        Ok(Self::new(MatchLength::try_from(rounds_to_win)?))
    }

    /// Set the round-resolution rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// The N in "best of N".
    #[must_use]
    pub fn rounds_to_win(&self) -> u8 {
        self.length.rounds_to_win()
    }

    /// Round wins needed to take the match.
    #[must_use]
    pub fn win_threshold(&self) -> u8 {
        self.length.win_threshold()
    }
}
