//! Standard score-sheet notation.
//!
//! Frames are separated by whitespace or `|`. Within a frame `X` marks a
//! strike, `/` a spare, `-` a miss, and digits the pins knocked down. The
//! tenth frame lists its bonus deliveries inline: `XXX`, `X81`, `7/5`.

use std::str::FromStr;

use crate::error::{BowlError, BowlResult};
use crate::frame::{Frame, PINS_PER_FRAME, Pins};
use crate::game::{Game, MAX_FRAMES};

/// Parse a game from score-sheet notation through the checked API.
///
/// Fewer than ten frames is accepted and yields a partial game.
pub fn parse_game(text: &str) -> BowlResult<Game> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '|')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() > MAX_FRAMES {
        return Err(BowlError::notation(
            MAX_FRAMES + 1,
            format!("a game has at most {MAX_FRAMES} frames"),
        ));
    }

    let mut game = Game::new();
    for (i, token) in tokens.iter().enumerate() {
        let number = i + 1;
        let deliveries =
            parse_deliveries(token).map_err(|message| BowlError::notation(number, message))?;
        let incomplete =
            || BowlError::notation(number, format!("'{token}' is not a complete frame"));

        if number < MAX_FRAMES {
            let frame = match deliveries.as_slice() {
                &[PINS_PER_FRAME] => Frame::strike(),
                &[first, second] if first != PINS_PER_FRAME => Frame::new(first, second),
                _ => return Err(incomplete()),
            };
            game.try_append_frame(frame)?;
        } else {
            let (frame, bonus) = match deliveries.as_slice() {
                [PINS_PER_FRAME, rest @ ..] => (Frame::strike(), rest),
                &[first, second, ref rest @ ..] => (Frame::new(first, second), rest),
                _ => return Err(incomplete()),
            };
            game.try_append_frame(frame)?;
            if !bonus.is_empty() {
                game.try_attach_bonus_rolls(bonus)?;
            }
        }
    }
    Ok(game)
}

/// Split one frame's marks into pin counts, tracking the standing rack.
fn parse_deliveries(token: &str) -> Result<Vec<Pins>, String> {
    let mut deliveries = Vec::with_capacity(3);
    let mut first_ball: Option<Pins> = None;

    for c in token.chars() {
        match (c, first_ball) {
            ('X' | 'x', None) => deliveries.push(PINS_PER_FRAME),
            ('X' | 'x', Some(_)) => {
                return Err("strike mark on a second ball, use '/'".to_string());
            }
            ('/', Some(first)) => {
                deliveries.push(PINS_PER_FRAME - first);
                first_ball = None;
            }
            ('/', None) => return Err("spare mark on a first ball".to_string()),
            _ => {
                let pins = match c {
                    '-' => 0,
                    d => d.to_digit(10).ok_or_else(|| format!("unexpected '{c}'"))?,
                };
                match first_ball {
                    None => first_ball = Some(pins),
                    Some(first) if first + pins >= PINS_PER_FRAME => {
                        return Err(format!(
                            "{first} then {pins} clears the rack, use '/' for a spare"
                        ));
                    }
                    Some(_) => first_ball = None,
                }
                deliveries.push(pins);
            }
        }
    }
    Ok(deliveries)
}

impl FromStr for Game {
    type Err = BowlError;

    fn from_str(s: &str) -> BowlResult<Self> {
        parse_game(s)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, frame) in self.frames().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let with_bonus =
                i == MAX_FRAMES - 1 && (self.bonus_attached() || frame.has_stored_bonus());
            frame.write_marks(f, with_bonus)?;
        }
        Ok(())
    }
}
