//! Score computation over a sequence of frames.
//!
//! Each frame contributes its base pins plus a bonus looked up from the
//! frames that follow it:
//! - a strike adds the next two deliveries;
//! - a spare adds the next delivery;
//! - an open frame adds nothing.
//!
//! The tenth frame carries its own bonus deliveries in `second_roll` /
//! `third_roll`. Lookahead into a frame that has not been appended yet
//! reads as zero, so partial games score what is known so far.
//!
//! Roll values are not range-checked here; sums wrap instead of panicking.

use serde::{Deserialize, Serialize};

use crate::frame::{Frame, PINS_PER_FRAME};
use crate::game::MAX_FRAMES;

const LAST_FRAME: usize = MAX_FRAMES - 1;

/// One row of a score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// One-based frame number.
    pub frame: usize,
    /// This frame's contribution: base pins plus bonus.
    pub score: u32,
    /// Total of this frame and every frame before it.
    pub running_total: u32,
}

/// Total score of all frames held.
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..frames.len())
        .map(|i| frame_score(frames, i))
        .fold(0, u32::wrapping_add)
}

/// Per-frame contributions with running totals.
pub fn running_totals(frames: &[Frame]) -> Vec<FrameScore> {
    let mut total = 0;
    (0..frames.len())
        .map(|i| {
            let score = frame_score(frames, i);
            total = u32::wrapping_add(total, score);
            FrameScore {
                frame: i + 1,
                score,
                running_total: total,
            }
        })
        .collect()
}

/// Contribution of the frame at index `i`, or 0 if there is no such frame.
pub fn frame_score(frames: &[Frame], i: usize) -> u32 {
    let Some(frame) = frames.get(i) else {
        return 0;
    };
    if frame.is_strike() {
        PINS_PER_FRAME.wrapping_add(strike_bonus(frames, i))
    } else if frame.is_spare() {
        PINS_PER_FRAME.wrapping_add(spare_bonus(frames, i))
    } else {
        frame.pins()
    }
}

/// Bonus for a strike at index `i`: the next two deliveries.
pub fn strike_bonus(frames: &[Frame], i: usize) -> u32 {
    if i == LAST_FRAME {
        let last = at(frames, i);
        return last.second_roll.wrapping_add(last.third_roll);
    }
    let next = at(frames, i + 1);
    if next.is_strike() && i < MAX_FRAMES - 2 {
        // Back-to-back strikes: the second delivery is the next-next frame's first ball.
        PINS_PER_FRAME.wrapping_add(at(frames, i + 2).first_roll)
    } else {
        next.first_roll.wrapping_add(next.second_roll)
    }
}

/// Bonus for a spare at index `i`: the next delivery.
pub fn spare_bonus(frames: &[Frame], i: usize) -> u32 {
    if i == LAST_FRAME {
        at(frames, i).third_roll
    } else {
        at(frames, i + 1).first_roll
    }
}

/// The frame at `i`, or an all-zero frame when it has not been appended.
fn at(frames: &[Frame], i: usize) -> Frame {
    frames.get(i).copied().unwrap_or_default()
}
