//! Ten-pin bowling score computation.
//!
//! A [`Game`] collects up to ten [`Frame`]s, accepts the tenth frame's
//! bonus deliveries, and computes the total with the standard strike and
//! spare bonus rules. Games can also be read from and written as
//! score-sheet notation (`X 7/ 9- ...`).
//!
//! Two API layers are provided. The permissive one (`Frame::new`,
//! [`Game::append_frame`], [`Game::attach_bonus_rolls`]) never fails and
//! silently ignores calls that do not apply. The checked one
//! (`Frame::try_new`, [`Game::try_append_frame`],
//! [`Game::try_attach_bonus_rolls`]) reports a [`BowlError`] instead.

/// Error types for the checked API.
pub mod error;
/// A single frame and its strike/spare classification.
pub mod frame;
/// The game model and its mutators.
pub mod game;
/// Score-sheet notation parsing and rendering.
pub mod notation;
/// The scoring rules.
pub mod scoring;

/// Re-export error types.
pub use error::{BowlError, BowlResult};
/// Re-export frame types.
pub use frame::{Frame, PINS_PER_FRAME, Pins};
/// Re-export game types.
pub use game::{BonusRolls, Game, MAX_FRAMES};
/// Re-export the notation parser.
pub use notation::parse_game;
/// Re-export score-sheet rows.
pub use scoring::FrameScore;
