//! Engine errors.

use thiserror::Error;

use crate::core::state::MatchResult;

#[derive(Debug, Error)]
pub enum MatchError {
    /// A round was resolved or advanced after the match was decided.
    #[error("Invalid state: match already {status}")]
    InvalidState { status: MatchResult },

    #[error("Unsupported match length: best of {0} (expected 3, 5 or 7)")]
    UnsupportedLength(u8),

    #[error("Unknown move: {0:?}")]
    UnknownMove(String),

    #[error("Unknown rule set: {0:?}")]
    UnknownRules(String),

    #[error("Invalid checkpoint: {0}")]
    InvalidCheckpoint(&'static str),

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] bincode::Error),
}

impl MatchError {
    /// Was this a contract violation by the caller (input after the match ended)?
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, MatchError::InvalidState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MatchError::InvalidState {
            status: MatchResult::SystemWonMatch,
        };
        assert_eq!(err.to_string(), "Invalid state: match already won by the system");
        assert!(err.is_invalid_state());

        let err = MatchError::UnsupportedLength(4);
        assert_eq!(
            err.to_string(),
            "Unsupported match length: best of 4 (expected 3, 5 or 7)"
        );
        assert!(!err.is_invalid_state());
    }
}
