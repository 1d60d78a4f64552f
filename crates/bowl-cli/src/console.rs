//! Interactive roll entry.
//!
//! Prompts for each delivery, validates it against the pins still
//! standing, and feeds complete frames to a [`Game`]. Input and output are
//! injected so the loop runs the same against a terminal or a buffer.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use bowl_core::{BonusRolls, BowlError, Frame, Game, MAX_FRAMES, PINS_PER_FRAME, Pins};

use crate::config::PlayConfig;

/// Errors that end an interactive game.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing a prompt failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the game was complete.
    #[error("input ended before the game was complete")]
    Aborted,

    /// Too many invalid entries for a single delivery.
    #[error("too many invalid entries ({0}) for one roll")]
    TooManyAttempts(u32),

    /// The core rejected a frame or bonus roll.
    #[error(transparent)]
    Core(#[from] BowlError),
}

/// A console game loop over an injected reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console reading rolls from `input` and prompting on `output`.
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
            line: String::new(),
        }
    }

    /// Consume the console and return its output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Collect ten frames and any earned bonus rolls, then report the score.
    pub fn play_game(&mut self) -> Result<Game, ConsoleError> {
        let mut game = Game::new();

        for number in 1..=MAX_FRAMES {
            let frame = self.read_frame(number)?;
            if self.config.strict {
                game.try_append_frame(frame)?;
            } else {
                game.append_frame(frame);
            }
            if self.config.show_running_total {
                writeln!(
                    self.output,
                    "  Frame {number}: {frame}  total: {}",
                    game.compute_score()
                )?;
            }
        }

        let bonus = self.read_bonus(game.bonus_rolls_needed())?;
        if self.config.strict {
            game.try_attach_bonus_rolls(&bonus)?;
        } else {
            game.attach_bonus_rolls(&bonus);
        }

        let score = game.compute_score();
        debug!(score, "game complete");
        writeln!(self.output, "Final score: {score}")?;
        Ok(game)
    }

    fn read_frame(&mut self, number: usize) -> Result<Frame, ConsoleError> {
        let first = self.read_delivery(&format!("Frame {number}, roll 1"), None)?;
        if first == PINS_PER_FRAME {
            return Ok(Frame::strike());
        }
        let second = self.read_delivery(&format!("Frame {number}, roll 2"), Some(first))?;
        Ok(Frame::new(first, second))
    }

    fn read_bonus(&mut self, needed: BonusRolls) -> Result<Vec<Pins>, ConsoleError> {
        match needed {
            BonusRolls::None => Ok(Vec::new()),
            BonusRolls::One => Ok(vec![self.read_delivery("Bonus roll 1", None)?]),
            BonusRolls::Two => {
                let first = self.read_delivery("Bonus roll 1", None)?;
                // A non-strike first bonus leaves the rest of the rack standing.
                let rack = (first != PINS_PER_FRAME).then_some(first);
                let second = self.read_delivery("Bonus roll 2", rack)?;
                Ok(vec![first, second])
            }
        }
    }

    /// Prompt until a valid delivery is entered or attempts run out.
    fn read_delivery(
        &mut self,
        prompt: &str,
        first_ball: Option<Pins>,
    ) -> Result<Pins, ConsoleError> {
        let mut attempts = 0;
        loop {
            write!(self.output, "{prompt}: ")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(ConsoleError::Aborted);
            }

            match parse_delivery(self.line.trim(), first_ball) {
                Ok(pins) => return Ok(pins),
                Err(message) => {
                    attempts += 1;
                    warn!(attempts, %message, "invalid roll entered");
                    writeln!(self.output, "  {message}")?;
                    if attempts >= self.config.max_attempts {
                        return Err(ConsoleError::TooManyAttempts(attempts));
                    }
                }
            }
        }
    }
}

/// Parse one typed delivery.
///
/// Accepts a pin count, `x` for a strike, `/` for a spare, or `-` for a
/// miss. `first_ball` is the earlier delivery on the same rack, if any.
pub fn parse_delivery(input: &str, first_ball: Option<Pins>) -> Result<Pins, String> {
    let standing = PINS_PER_FRAME - first_ball.unwrap_or(0).min(PINS_PER_FRAME);
    let pins = match input {
        "" => return Err("enter a pin count".to_string()),
        "x" | "X" => {
            if first_ball.is_some() {
                return Err("a strike needs a full rack, use '/' for a spare".to_string());
            }
            PINS_PER_FRAME
        }
        "/" => match first_ball {
            Some(_) => standing,
            None => return Err("a spare needs a first ball".to_string()),
        },
        "-" => 0,
        n => n
            .parse::<Pins>()
            .map_err(|_| format!("'{n}' is not a pin count"))?,
    };
    if pins > standing {
        return Err(format!("only {standing} pins standing"));
    }
    Ok(pins)
}
