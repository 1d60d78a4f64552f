//! Error types for the checked game API.

use crate::frame::Pins;

/// Alias for `Result<T, BowlError>`.
pub type BowlResult<T> = Result<T, BowlError>;

/// Errors raised by the checked constructors and mutators.
///
/// The permissive API (`Frame::new`, `Game::append_frame`,
/// `Game::attach_bonus_rolls`) never produces these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BowlError {
    /// A roll value is out of range or knocks down more pins than were standing.
    #[error("invalid roll {roll}: {reason}")]
    InvalidRoll {
        /// The offending pin count.
        roll: Pins,
        /// Why the roll was rejected.
        reason: String,
    },

    /// A mutator was called in a state that does not allow it.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Score-sheet notation could not be parsed.
    #[error("frame {frame}: {message}")]
    Notation {
        /// One-based frame number where parsing failed.
        frame: usize,
        /// A human-readable description of the problem.
        message: String,
    },
}

impl BowlError {
    pub(crate) fn invalid_roll(roll: Pins, reason: impl Into<String>) -> Self {
        Self::InvalidRoll {
            roll,
            reason: reason.into(),
        }
    }

    pub(crate) fn notation(frame: usize, message: impl Into<String>) -> Self {
        Self::Notation {
            frame,
            message: message.into(),
        }
    }
}
