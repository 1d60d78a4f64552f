//! A single bowling frame and its strike/spare classification.

use serde::{Deserialize, Serialize};

use crate::error::{BowlError, BowlResult};

/// A pin count for one delivery.
pub type Pins = u32;

/// Number of pins in a full rack.
pub const PINS_PER_FRAME: Pins = 10;

/// The roll results of one frame.
///
/// `third_roll` is only meaningful for the tenth frame, where it holds a
/// bonus delivery. Range validity is the producer's concern unless one of
/// the checked constructors is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Pins knocked down by the first delivery.
    pub first_roll: Pins,
    /// Pins knocked down by the second delivery (0 after a strike).
    pub second_roll: Pins,
    /// Tenth-frame bonus delivery.
    #[serde(default)]
    pub third_roll: Pins,
}

impl Frame {
    /// Create a frame from its two regular deliveries.
    pub fn new(first_roll: Pins, second_roll: Pins) -> Self {
        Self {
            first_roll,
            second_roll,
            third_roll: 0,
        }
    }

    /// A strike frame.
    pub fn strike() -> Self {
        Self::new(PINS_PER_FRAME, 0)
    }

    /// Create a tenth frame with all three slots filled.
    pub fn tenth(first_roll: Pins, second_roll: Pins, third_roll: Pins) -> Self {
        Self {
            first_roll,
            second_roll,
            third_roll,
        }
    }

    /// Create a frame for positions 1-9, rejecting impossible pin counts.
    pub fn try_new(first_roll: Pins, second_roll: Pins) -> BowlResult<Self> {
        let frame = Self::new(first_roll, second_roll);
        frame.validate_regular()?;
        Ok(frame)
    }

    /// Create a tenth frame, rejecting impossible pin counts.
    ///
    /// After a strike the second and third slots hold bonus deliveries and
    /// are only range-checked.
    pub fn try_tenth(first_roll: Pins, second_roll: Pins, third_roll: Pins) -> BowlResult<Self> {
        let frame = Self::tenth(first_roll, second_roll, third_roll);
        frame.validate_tenth()?;
        Ok(frame)
    }

    /// True when all ten pins fell on the first delivery.
    pub fn is_strike(&self) -> bool {
        self.first_roll == PINS_PER_FRAME
    }

    /// True when all ten pins fell across the two deliveries, without a strike.
    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.first_roll.wrapping_add(self.second_roll) == PINS_PER_FRAME
    }

    /// Pins knocked down by the two regular deliveries.
    pub fn pins(&self) -> Pins {
        self.first_roll.wrapping_add(self.second_roll)
    }

    pub(crate) fn validate_regular(&self) -> BowlResult<()> {
        check_range(self.first_roll)?;
        if self.is_strike() {
            if self.second_roll != 0 {
                return Err(BowlError::invalid_roll(
                    self.second_roll,
                    "a strike frame has no second delivery",
                ));
            }
        } else {
            check_standing(self.first_roll, self.second_roll)?;
        }
        if self.third_roll != 0 {
            return Err(BowlError::invalid_roll(
                self.third_roll,
                "only the tenth frame has a third delivery",
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_tenth(&self) -> BowlResult<()> {
        check_range(self.first_roll)?;
        if self.is_strike() {
            check_bonus_pair(self.second_roll, self.third_roll)
        } else {
            check_standing(self.first_roll, self.second_roll)?;
            if self.is_spare() {
                check_range(self.third_roll)
            } else if self.third_roll != 0 {
                Err(BowlError::invalid_roll(
                    self.third_roll,
                    "an open tenth frame earns no bonus delivery",
                ))
            } else {
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Frame {
    /// Score-sheet marks. A tenth frame whose bonus slots hold deliveries
    /// prints them too (`XXX`, `X81`, `7/5`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_marks(f, self.has_stored_bonus())
    }
}

impl Frame {
    /// True when the bonus slots earned by a strike or spare are non-zero.
    pub(crate) fn has_stored_bonus(&self) -> bool {
        if self.is_strike() {
            self.second_roll != 0 || self.third_roll != 0
        } else {
            self.is_spare() && self.third_roll != 0
        }
    }

    /// Write the regular marks, then the bonus marks when `with_bonus` is set.
    pub(crate) fn write_marks(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        with_bonus: bool,
    ) -> std::fmt::Result {
        if self.is_strike() {
            write!(f, "X")?;
            if with_bonus {
                let third = if self.second_roll != PINS_PER_FRAME
                    && self.second_roll.wrapping_add(self.third_roll) == PINS_PER_FRAME
                {
                    '/'
                } else {
                    mark(self.third_roll)
                };
                write!(f, "{}{third}", mark(self.second_roll))?;
            }
            return Ok(());
        }
        if self.is_spare() {
            write!(f, "{}/", mark(self.first_roll))?;
            if with_bonus {
                write!(f, "{}", mark(self.third_roll))?;
            }
            return Ok(());
        }
        write!(f, "{}{}", mark(self.first_roll), mark(self.second_roll))
    }
}

/// Score-sheet mark for a single delivery on a fresh rack or a second ball
/// that did not clear it.
pub(crate) fn mark(pins: Pins) -> char {
    match pins {
        0 => '-',
        PINS_PER_FRAME => 'X',
        n => char::from_digit(n, 10).unwrap_or('?'),
    }
}

pub(crate) fn check_range(roll: Pins) -> BowlResult<()> {
    if roll > PINS_PER_FRAME {
        return Err(BowlError::invalid_roll(
            roll,
            format!("at most {PINS_PER_FRAME} pins can fall"),
        ));
    }
    Ok(())
}

/// Check a second delivery against the pins left by the first.
pub(crate) fn check_standing(first: Pins, second: Pins) -> BowlResult<()> {
    check_range(first)?;
    check_range(second)?;
    let standing = PINS_PER_FRAME - first;
    if second > standing {
        return Err(BowlError::invalid_roll(
            second,
            format!("only {standing} pins left standing after {first}"),
        ));
    }
    Ok(())
}

/// Check the two bonus deliveries that follow a tenth-frame strike. They
/// share a rack unless the first of them is itself a strike.
pub(crate) fn check_bonus_pair(first: Pins, second: Pins) -> BowlResult<()> {
    if first == PINS_PER_FRAME {
        check_range(second)
    } else {
        check_standing(first, second)
    }
}
