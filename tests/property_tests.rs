//! Property tests for the rules and the engine.

use proptest::prelude::*;
use rps_engine::{MatchConfig, MatchEngine, MatchLength, MatchResult, Move, RoundResult, RuleSet};

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
}

fn any_length() -> impl Strategy<Value = MatchLength> {
    prop_oneof![
        Just(MatchLength::BestOf3),
        Just(MatchLength::BestOf5),
        Just(MatchLength::BestOf7),
    ]
}

fn any_rules() -> impl Strategy<Value = RuleSet> {
    prop_oneof![Just(RuleSet::Classic), Just(RuleSet::Favored)]
}

proptest! {
    /// The outcome depends only on the move difference, never on the moves themselves.
    #[test]
    fn outcome_depends_only_on_delta(
        a in any_move(),
        b in any_move(),
        shift in 0u8..3,
        rules in any_rules(),
        favor in any::<bool>(),
    ) {
        let a2 = Move::from_index(a.index() + shift);
        let b2 = Move::from_index(b.index() + shift);
        prop_assert_eq!(a.delta(b), a2.delta(b2));
        prop_assert_eq!(
            rules.resolve_moves(a, b, favor),
            rules.resolve_moves(a2, b2, favor)
        );
    }

    /// Classic rules agree with `beats`.
    #[test]
    fn classic_matches_beats(player in any_move(), system in any_move(), favor in any::<bool>()) {
        let expected = if player == system {
            RoundResult::Draw
        } else if player.beats(system) {
            RoundResult::PlayerWin
        } else {
            RoundResult::SystemWin
        };
        prop_assert_eq!(RuleSet::Classic.resolve_moves(player, system, favor), expected);
    }

    /// Scores never pass the threshold and a decided match is frozen.
    #[test]
    fn scores_bounded_and_frozen(
        seed in any::<u64>(),
        length in any_length(),
        rules in any_rules(),
        moves in prop::collection::vec(any_move(), 1..40),
    ) {
        let mut engine = MatchEngine::new(MatchConfig::new(length).with_rules(rules), seed);
        let threshold = length.win_threshold();

        for m in moves {
            let before = engine.state().clone();
            match engine.resolve_round(m) {
                Ok(state) => {
                    prop_assert!(!before.is_decided());
                    prop_assert!(state.player_score <= threshold);
                    prop_assert!(state.system_score <= threshold);
                    if state.is_decided() {
                        prop_assert!(state.player_score == threshold || state.system_score == threshold);
                    } else {
                        engine.advance().unwrap();
                    }
                }
                Err(err) => {
                    prop_assert!(err.is_invalid_state());
                    prop_assert!(before.is_decided());
                    prop_assert_eq!(engine.state(), &before);
                    prop_assert!(engine.advance().is_err());
                    prop_assert_eq!(engine.state(), &before);
                }
            }
        }
    }

    /// Reset always yields a fresh, undecided match.
    #[test]
    fn reset_is_fresh(
        seed in any::<u64>(),
        moves in prop::collection::vec(any_move(), 0..10),
        length in any_length(),
    ) {
        let mut engine = MatchEngine::new(MatchConfig::default(), seed);
        for m in moves {
            if engine.resolve_round(m).is_err() {
                break;
            }
            let _ = engine.advance();
        }
        let generation = engine.generation();

        let state = engine.reset(MatchConfig::new(length));
        prop_assert_eq!(state.score(), (0, 0));
        prop_assert_eq!(state.match_result, MatchResult::InProgress);
        prop_assert_eq!(state.round_result, RoundResult::None);
        prop_assert_eq!(state.win_threshold, length.win_threshold());
        prop_assert_eq!(state.generation, generation + 1);
        prop_assert!(state.history.is_empty());
    }
}
