//! The three moves and their fixed total order.
//!
//! Moves are ordered Rock=0, Paper=1, Scissors=2. Round resolution works on
//! the difference of two indices modulo 3, so the order is load-bearing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::engine::MatchError;

/// A single hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in index order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in the fixed order (Rock=0, Paper=1, Scissors=2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Inverse of [`Move::index`], reduced modulo 3.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 3 {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }

    /// `(self - other + 3) mod 3`.
    ///
    /// 0 means the moves are equal, 1 means `self` beats `other`,
    /// 2 means `other` beats `self`.
    #[must_use]
    pub const fn delta(self, other: Move) -> u8 {
        (self.index() + 3 - other.index()) % 3
    }

    /// Does this move beat `other` under the usual comparison?
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        self.delta(other) == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

impl FromStr for Move {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(MatchError::UnknownMove(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        assert_eq!(Move::Rock.index(), 0);
        assert_eq!(Move::Paper.index(), 1);
        assert_eq!(Move::Scissors.index(), 2);

        for m in Move::ALL {
            assert_eq!(Move::from_index(m.index()), m);
        }
        assert_eq!(Move::from_index(4), Move::Paper);
    }

    #[test]
    fn test_delta() {
        // Rock vs Scissors: (0 - 2 + 3) % 3 = 1
        assert_eq!(Move::Rock.delta(Move::Scissors), 1);
        assert_eq!(Move::Scissors.delta(Move::Rock), 2);
        for m in Move::ALL {
            assert_eq!(m.delta(m), 0);
        }
    }

    #[test]
    fn test_beats() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(Move::Scissors.beats(Move::Paper));

        assert!(!Move::Rock.beats(Move::Paper));
        assert!(!Move::Rock.beats(Move::Rock));
    }

    #[test]
    fn test_parse() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!(" P ".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("Scissors".parse::<Move>().unwrap(), Move::Scissors);

        let err = "lizard".parse::<Move>().unwrap_err();
        assert!(matches!(err, MatchError::UnknownMove(ref s) if s == "lizard"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::Scissors), "Scissors");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Move::Paper).unwrap();
        assert_eq!(json, "\"paper\"");
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::Paper);
    }
}
