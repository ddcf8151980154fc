//! Round resolution and match completion.
//!
//! Both are pure functions:
//! - `RuleSet::resolve` maps `(delta, favor_player)` to a round result
//! - `match_result` maps the scores and threshold to a match result
//!
//! The engine calls into these but never decides outcomes itself.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::moves::Move;
use crate::core::state::{MatchResult, RoundResult};
use crate::engine::MatchError;

/// How a round is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Usual comparison. Equal moves draw and leave the score unchanged.
    #[default]
    Classic,

    /// No draws. A hidden coin, re-rolled every round, decides which
    /// direction of the comparison counts as a player win:
    /// - coin set: the player wins when their move beats the system's
    /// - coin clear: the player wins when the system's move beats theirs
    ///
    /// Every other case, equal moves included, goes to the system.
    Favored,
}

impl RuleSet {
    /// Resolve a round from the move difference.
    ///
    /// `delta` is `(player - system + 3) mod 3`. `favor_player` is only
    /// consulted by `Favored`.
    #[must_use]
    pub fn resolve(self, delta: u8, favor_player: bool) -> RoundResult {
        match self {
            RuleSet::Classic => match delta % 3 {
                0 => RoundResult::Draw,
                1 => RoundResult::PlayerWin,
                _ => RoundResult::SystemWin,
            },
            RuleSet::Favored => {
                let delta = delta % 3;
                if (delta == 1 && favor_player) || (delta == 2 && !favor_player) {
                    RoundResult::PlayerWin
                } else {
                    RoundResult::SystemWin
                }
            }
        }
    }

    /// Resolve a round from the two moves.
    #[must_use]
    pub fn resolve_moves(self, player: Move, system: Move, favor_player: bool) -> RoundResult {
        self.resolve(player.delta(system), favor_player)
    }

    /// Can a round end in a draw?
    #[must_use]
    pub fn allows_draws(self) -> bool {
        matches!(self, RuleSet::Classic)
    }

    /// Does this rule set use the hidden coin?
    #[must_use]
    pub fn uses_coin(self) -> bool {
        matches!(self, RuleSet::Favored)
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSet::Classic => f.write_str("classic"),
            RuleSet::Favored => f.write_str("favored"),
        }
    }
}

impl FromStr for RuleSet {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(RuleSet::Classic),
            "favored" | "favoured" => Ok(RuleSet::Favored),
            _ => Err(MatchError::UnknownRules(s.to_string())),
        }
    }
}

/// Match-completion rule.
///
/// The first side to reach exactly `win_threshold` takes the match. The
/// player is checked first; both sides can never reach it on the same round.
#[must_use]
pub fn match_result(player_score: u8, system_score: u8, win_threshold: u8) -> MatchResult {
    if player_score == win_threshold {
        MatchResult::PlayerWonMatch
    } else if system_score == win_threshold {
        MatchResult::SystemWonMatch
    } else {
        MatchResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table() {
        let rules = RuleSet::Classic;
        for favor in [true, false] {
            assert_eq!(rules.resolve(0, favor), RoundResult::Draw);
            assert_eq!(rules.resolve(1, favor), RoundResult::PlayerWin);
            assert_eq!(rules.resolve(2, favor), RoundResult::SystemWin);
        }
    }

    #[test]
    fn test_classic_moves() {
        let rules = RuleSet::Classic;
        assert_eq!(rules.resolve_moves(Move::Rock, Move::Scissors, false), RoundResult::PlayerWin);
        assert_eq!(rules.resolve_moves(Move::Rock, Move::Paper, false), RoundResult::SystemWin);
        assert_eq!(rules.resolve_moves(Move::Paper, Move::Paper, false), RoundResult::Draw);
    }

    #[test]
    fn test_favored_table() {
        let rules = RuleSet::Favored;

        assert_eq!(rules.resolve(1, true), RoundResult::PlayerWin);
        assert_eq!(rules.resolve(2, true), RoundResult::SystemWin);
        assert_eq!(rules.resolve(1, false), RoundResult::SystemWin);
        assert_eq!(rules.resolve(2, false), RoundResult::PlayerWin);

        // No draws: equal moves always go to the system
        assert_eq!(rules.resolve(0, true), RoundResult::SystemWin);
        assert_eq!(rules.resolve(0, false), RoundResult::SystemWin);
    }

    #[test]
    fn test_favored_never_draws() {
        for player in Move::ALL {
            for system in Move::ALL {
                for favor in [true, false] {
                    let result = RuleSet::Favored.resolve_moves(player, system, favor);
                    assert_ne!(result, RoundResult::Draw);
                    assert_ne!(result, RoundResult::None);
                }
            }
        }
    }

    #[test]
    fn test_rule_flags() {
        assert!(RuleSet::Classic.allows_draws());
        assert!(!RuleSet::Classic.uses_coin());
        assert!(!RuleSet::Favored.allows_draws());
        assert!(RuleSet::Favored.uses_coin());
    }

    #[test]
    fn test_parse_rules() {
        assert_eq!("classic".parse::<RuleSet>().unwrap(), RuleSet::Classic);
        assert_eq!("Favoured".parse::<RuleSet>().unwrap(), RuleSet::Favored);
        assert!(matches!(
            "random".parse::<RuleSet>(),
            Err(MatchError::UnknownRules(_))
        ));
        assert_eq!(RuleSet::Favored.to_string(), "favored");
    }

    #[test]
    fn test_match_result() {
        assert_eq!(match_result(0, 0, 2), MatchResult::InProgress);
        assert_eq!(match_result(1, 1, 2), MatchResult::InProgress);
        assert_eq!(match_result(2, 1, 2), MatchResult::PlayerWonMatch);
        assert_eq!(match_result(1, 2, 2), MatchResult::SystemWonMatch);
        assert_eq!(match_result(3, 0, 4), MatchResult::InProgress);
        assert_eq!(match_result(0, 4, 4), MatchResult::SystemWonMatch);
    }
}
