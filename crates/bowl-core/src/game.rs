//! The game: up to ten frames plus the tenth frame's bonus deliveries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BowlError, BowlResult};
use crate::frame::{self, Frame, Pins};
use crate::scoring::{self, FrameScore};

/// Number of frames in a game.
pub const MAX_FRAMES: usize = 10;

/// How many bonus deliveries the tenth frame has earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusRolls {
    /// Open tenth frame, or the tenth frame has not been bowled.
    None,
    /// Spare in the tenth frame.
    One,
    /// Strike in the tenth frame.
    Two,
}

impl BonusRolls {
    /// Number of deliveries this represents.
    pub fn count(self) -> usize {
        match self {
            Self::None => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// An ordered sequence of at most [`MAX_FRAMES`] frames.
///
/// Bonus deliveries are never stored as frames of their own. They are
/// merged into the tenth frame's `second_roll`/`third_roll` slots by
/// [`Game::attach_bonus_rolls`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    frames: Vec<Frame>,
    bonus_attached: bool,
}

/// Unchecked wire shape of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    frames: Vec<Frame>,
    #[serde(default)]
    bonus_attached: bool,
}

impl TryFrom<GameRecord> for Game {
    type Error = BowlError;

    fn try_from(record: GameRecord) -> BowlResult<Self> {
        if record.frames.len() > MAX_FRAMES {
            return Err(BowlError::Protocol(format!(
                "a game holds at most {MAX_FRAMES} frames, got {}",
                record.frames.len()
            )));
        }
        Ok(Self {
            frames: record.frames,
            bonus_attached: record.bonus_attached,
        })
    }
}

impl Game {
    /// Create an empty game.
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(MAX_FRAMES),
            bonus_attached: false,
        }
    }

    /// Frames appended so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames appended so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame has been appended.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True when all ten frames are present.
    pub fn is_full(&self) -> bool {
        self.frames.len() == MAX_FRAMES
    }

    /// True once bonus rolls have been merged into the tenth frame.
    pub fn bonus_attached(&self) -> bool {
        self.bonus_attached
    }

    /// Bonus deliveries earned by the tenth frame.
    pub fn bonus_rolls_needed(&self) -> BonusRolls {
        match self.frames.get(MAX_FRAMES - 1) {
            Some(f) if f.is_strike() => BonusRolls::Two,
            Some(f) if f.is_spare() => BonusRolls::One,
            _ => BonusRolls::None,
        }
    }

    /// True when ten frames are present and any earned bonus is attached.
    pub fn is_complete(&self) -> bool {
        self.is_full() && (self.bonus_attached || self.bonus_rolls_needed() == BonusRolls::None)
    }

    /// Append a frame. Calls beyond the tenth frame are ignored.
    pub fn append_frame(&mut self, frame: Frame) {
        if self.frames.len() < MAX_FRAMES {
            self.frames.push(frame);
            debug!(index = self.frames.len(), %frame, "frame appended");
        } else {
            debug!(%frame, "game full, frame ignored");
        }
    }

    /// Append a frame after checking its pin counts.
    ///
    /// Fails with [`BowlError::Protocol`] if ten frames are already held.
    pub fn try_append_frame(&mut self, frame: Frame) -> BowlResult<()> {
        if self.is_full() {
            return Err(BowlError::Protocol(format!(
                "game already has {MAX_FRAMES} frames"
            )));
        }
        if self.frames.len() == MAX_FRAMES - 1 {
            frame.validate_tenth()?;
        } else {
            frame.validate_regular()?;
        }
        self.append_frame(frame);
        Ok(())
    }

    /// Merge bonus deliveries into the tenth frame.
    ///
    /// Two values overwrite `second_roll` and `third_roll`; one value
    /// overwrites `third_roll`. Any other count, or fewer than ten frames,
    /// leaves the game untouched. Values are stored even when the tenth
    /// frame earned no bonus; scoring never reads them in that case.
    pub fn attach_bonus_rolls(&mut self, bonuses: &[Pins]) {
        if !self.is_full() {
            debug!(frames = self.frames.len(), "bonus rolls ignored, game not full");
            return;
        }
        let Some(last) = self.frames.last_mut() else {
            return;
        };
        match *bonuses {
            [first, second] => {
                last.second_roll = first;
                last.third_roll = second;
            }
            [only] => last.third_roll = only,
            _ => {
                debug!(count = bonuses.len(), "bonus rolls ignored, unsupported count");
                return;
            }
        }
        self.bonus_attached = true;
        debug!(count = bonuses.len(), frame = %last, "bonus rolls attached");
    }

    /// Merge bonus deliveries after checking them against what the tenth
    /// frame earned.
    pub fn try_attach_bonus_rolls(&mut self, bonuses: &[Pins]) -> BowlResult<()> {
        if bonuses.len() > 2 {
            return Err(BowlError::Protocol(format!(
                "at most 2 bonus rolls, got {}",
                bonuses.len()
            )));
        }
        if !self.is_full() {
            return Err(BowlError::Protocol(format!(
                "bonus rolls need {MAX_FRAMES} frames, game has {}",
                self.frames.len()
            )));
        }
        if self.bonus_attached {
            return Err(BowlError::Protocol("bonus rolls already attached".to_string()));
        }
        let needed = self.bonus_rolls_needed();
        if bonuses.len() != needed.count() {
            return Err(BowlError::Protocol(format!(
                "tenth frame earned {} bonus roll(s), got {}",
                needed.count(),
                bonuses.len()
            )));
        }
        match *bonuses {
            [first, second] => frame::check_bonus_pair(first, second)?,
            [only] => frame::check_range(only)?,
            _ => {}
        }
        self.attach_bonus_rolls(bonuses);
        Ok(())
    }

    /// Total score of the frames held so far.
    ///
    /// Pure: repeated calls on an unchanged game return the same value.
    pub fn compute_score(&self) -> u32 {
        scoring::total_score(&self.frames)
    }

    /// Score-sheet rows for the frames held so far.
    pub fn frame_scores(&self) -> Vec<FrameScore> {
        scoring::running_totals(&self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_of(frame: Frame, n: usize) -> Game {
        let mut game = Game::new();
        for _ in 0..n {
            game.append_frame(frame);
        }
        game
    }

    fn nine_open_then(last: Frame) -> Game {
        let mut game = game_of(Frame::new(4, 5), 9);
        game.append_frame(last);
        game
    }

    #[test]
    fn perfect_game_scores_300() {
        let mut game = game_of(Frame::strike(), MAX_FRAMES);
        game.attach_bonus_rolls(&[10, 10]);
        assert_eq!(game.compute_score(), 300);
        assert!(game.is_complete());
    }

    #[test]
    fn gutter_game_scores_zero() {
        let game = game_of(Frame::new(0, 0), MAX_FRAMES);
        assert_eq!(game.compute_score(), 0);
    }

    #[test]
    fn no_marks_sums_pins() {
        let game = game_of(Frame::new(3, 4), MAX_FRAMES);
        assert_eq!(game.compute_score(), 70);
    }

    #[test]
    fn all_ones_with_extra_appends_scores_20() {
        let game = game_of(Frame::new(1, 1), 12);
        assert_eq!(game.len(), MAX_FRAMES);
        assert_eq!(game.compute_score(), 20);
    }

    #[test]
    fn spare_followed_by_three() {
        let mut game = Game::new();
        game.append_frame(Frame::new(5, 5));
        game.append_frame(Frame::new(3, 0));
        for _ in 0..8 {
            game.append_frame(Frame::new(0, 0));
        }
        assert_eq!(game.compute_score(), 16);
    }

    #[test]
    fn strike_followed_by_three_and_four() {
        let mut game = Game::new();
        game.append_frame(Frame::strike());
        game.append_frame(Frame::new(3, 4));
        for _ in 0..8 {
            game.append_frame(Frame::new(0, 0));
        }
        assert_eq!(game.compute_score(), 24);
    }

    #[test]
    fn all_spares_with_bonus_five() {
        let mut game = game_of(Frame::new(5, 5), MAX_FRAMES);
        game.attach_bonus_rolls(&[5]);
        assert_eq!(game.compute_score(), 150);
    }

    #[test]
    fn strike_in_last_frame_with_bonuses() {
        let mut game = nine_open_then(Frame::strike());
        game.attach_bonus_rolls(&[10, 10]);
        assert_eq!(game.compute_score(), 111);
    }

    #[test]
    fn spare_in_last_frame_with_bonus() {
        let mut game = nine_open_then(Frame::new(7, 3));
        game.attach_bonus_rolls(&[5]);
        assert_eq!(game.compute_score(), 96);
    }

    #[test]
    fn mixed_game_scores_167() {
        let mut game = Game::new();
        for frame in [
            Frame::strike(),
            Frame::new(7, 3),
            Frame::new(9, 0),
            Frame::strike(),
            Frame::new(0, 8),
            Frame::new(8, 2),
            Frame::new(0, 6),
            Frame::strike(),
            Frame::strike(),
            Frame::strike(),
        ] {
            game.append_frame(frame);
        }
        game.attach_bonus_rolls(&[8, 1]);
        assert_eq!(game.compute_score(), 167);
    }

    #[test]
    fn strikes_and_spares_score_196() {
        let mut game = Game::new();
        for frame in [
            Frame::strike(),
            Frame::strike(),
            Frame::new(9, 1),
            Frame::new(5, 5),
            Frame::new(7, 2),
            Frame::strike(),
            Frame::strike(),
            Frame::strike(),
            Frame::new(9, 0),
            Frame::new(8, 2),
        ] {
            game.append_frame(frame);
        }
        game.attach_bonus_rolls(&[9]);
        assert_eq!(game.compute_score(), 196);
    }

    #[test]
    fn compute_score_is_idempotent() {
        let mut game = nine_open_then(Frame::strike());
        game.attach_bonus_rolls(&[10, 3]);
        let before = game.clone();
        assert_eq!(game.compute_score(), game.compute_score());
        assert_eq!(game, before);
    }

    #[test]
    fn partial_game_scores_known_frames() {
        let mut game = Game::new();
        game.append_frame(Frame::new(6, 4));
        game.append_frame(Frame::new(3, 2));
        assert_eq!(game.compute_score(), 13 + 5);
        assert!(!game.is_full());
        assert!(!game.is_complete());
    }

    #[test]
    fn bonus_ignored_before_tenth_frame() {
        let mut game = game_of(Frame::strike(), 9);
        game.attach_bonus_rolls(&[10, 10]);
        assert!(!game.bonus_attached());
        assert!(game.frames().iter().all(|f| f.second_roll == 0));
    }

    #[test]
    fn bonus_ignored_for_unsupported_counts() {
        let mut game = game_of(Frame::strike(), MAX_FRAMES);
        game.attach_bonus_rolls(&[]);
        game.attach_bonus_rolls(&[1, 2, 3]);
        assert!(!game.bonus_attached());
        assert_eq!(game.frames()[9], Frame::strike());
    }

    #[test]
    fn bonus_on_open_tenth_is_stored_but_unscored() {
        let mut game = nine_open_then(Frame::new(4, 5));
        game.attach_bonus_rolls(&[7]);
        assert_eq!(game.frames()[9].third_roll, 7);
        assert_eq!(game.compute_score(), 90);
    }

    #[test]
    fn mismatched_bonus_count_still_scores() {
        let mut game = nine_open_then(Frame::new(7, 3));
        game.attach_bonus_rolls(&[10, 10]);
        // The tenth frame is now (7, 10), neither strike nor spare.
        let _ = game.compute_score();
    }

    #[test]
    fn bonus_rolls_needed_follows_tenth_frame() {
        assert_eq!(Game::new().bonus_rolls_needed(), BonusRolls::None);
        assert_eq!(nine_open_then(Frame::strike()).bonus_rolls_needed(), BonusRolls::Two);
        assert_eq!(nine_open_then(Frame::new(2, 8)).bonus_rolls_needed(), BonusRolls::One);
        assert_eq!(nine_open_then(Frame::new(2, 7)).bonus_rolls_needed(), BonusRolls::None);
        assert!(nine_open_then(Frame::new(2, 7)).is_complete());
    }

    #[test]
    fn try_append_rejects_eleventh_frame() {
        let mut game = game_of(Frame::new(1, 1), MAX_FRAMES);
        let err = game.try_append_frame(Frame::new(1, 1)).unwrap_err();
        assert!(matches!(err, BowlError::Protocol(_)));
        assert_eq!(game.len(), MAX_FRAMES);
    }

    #[test]
    fn try_append_rejects_invalid_frame() {
        let mut game = Game::new();
        assert!(game.try_append_frame(Frame::new(8, 5)).is_err());
        assert!(game.try_append_frame(Frame::new(10, 4)).is_err());
        assert!(game.is_empty());
        assert!(game.try_append_frame(Frame::new(8, 2)).is_ok());
    }

    #[test]
    fn try_append_validates_tenth_with_bonus_slots() {
        let mut game = game_of(Frame::new(0, 0), 9);
        assert!(game.try_append_frame(Frame::tenth(10, 10, 10)).is_ok());
        assert_eq!(game.compute_score(), 30);
    }

    #[test]
    fn try_attach_checks_count_against_tenth_frame() {
        let mut game = nine_open_then(Frame::new(7, 3));
        let err = game.try_attach_bonus_rolls(&[10, 10]).unwrap_err();
        assert!(err.to_string().contains("earned 1 bonus roll(s), got 2"));
        assert!(game.try_attach_bonus_rolls(&[5]).is_ok());
        assert_eq!(game.compute_score(), 96);
    }

    #[test]
    fn try_attach_only_once() {
        let mut game = nine_open_then(Frame::strike());
        game.try_attach_bonus_rolls(&[10, 10]).unwrap();
        let err = game.try_attach_bonus_rolls(&[10, 10]).unwrap_err();
        assert_eq!(err, BowlError::Protocol("bonus rolls already attached".to_string()));
    }

    #[test]
    fn try_attach_rejects_bad_counts_and_values() {
        let mut game = nine_open_then(Frame::strike());
        assert!(matches!(
            game.try_attach_bonus_rolls(&[1, 2, 3]),
            Err(BowlError::Protocol(_))
        ));
        assert!(matches!(
            game.try_attach_bonus_rolls(&[11, 0]),
            Err(BowlError::InvalidRoll { roll: 11, .. })
        ));
        assert!(matches!(
            game.try_attach_bonus_rolls(&[6, 5]),
            Err(BowlError::InvalidRoll { roll: 5, .. })
        ));
        assert!(!game.bonus_attached());
        assert!(game.try_attach_bonus_rolls(&[6, 4]).is_ok());
    }

    #[test]
    fn try_attach_requires_full_game() {
        let mut game = game_of(Frame::strike(), 3);
        assert!(matches!(
            game.try_attach_bonus_rolls(&[10, 10]),
            Err(BowlError::Protocol(_))
        ));
    }

    #[test]
    fn open_tenth_accepts_empty_bonus_in_checked_mode() {
        let mut game = nine_open_then(Frame::new(1, 2));
        assert!(game.try_attach_bonus_rolls(&[]).is_ok());
        assert!(!game.bonus_attached());
    }

    #[test]
    fn deserialize_rejects_too_many_frames() {
        let frames = vec![Frame::new(1, 1); 11];
        let json = serde_json::json!({ "frames": frames }).to_string();
        let err = serde_json::from_str::<Game>(&json).unwrap_err();
        assert!(err.to_string().contains("at most 10 frames"));
    }

    #[test]
    fn serde_round_trip_keeps_bonus_flag() {
        let mut game = nine_open_then(Frame::new(7, 3));
        game.attach_bonus_rolls(&[4]);
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
        assert!(back.bonus_attached());
    }
}
