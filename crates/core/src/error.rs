//! Solve error taxonomy.
//!
//! The `Display` text of each variant is exactly what the user sees.

use thiserror::Error;

/// Why a solve did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Solve was requested with an empty move log. No request is sent.
    #[error("Please add some moves first.")]
    EmptyScramble,
    /// The solver answered with an error text of its own.
    #[error("{0}")]
    Service(String),
    /// The request failed or the answer was unreadable; `detail` is for logs only.
    #[error("Something went wrong")]
    Transport { detail: String },
}

impl SolveError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY_SCRAMBLE_MESSAGE, GENERIC_ERROR_MESSAGE};

    #[test]
    fn display_text_matches_shared_constants() {
        assert_eq!(SolveError::EmptyScramble.to_string(), EMPTY_SCRAMBLE_MESSAGE);
        assert_eq!(
            SolveError::transport("connection refused").to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            SolveError::Service("Invalid scramble sequence".into()).to_string(),
            "Invalid scramble sequence"
        );
    }
}
