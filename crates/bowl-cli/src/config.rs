//! Configuration for an interactive game.

/// Configuration for the console game loop.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Invalid entries allowed per delivery before the game is abandoned (1-10).
    pub max_attempts: u32,
    /// Print the running score after each frame.
    pub show_running_total: bool,
    /// Append frames and bonus rolls through the checked core API.
    pub strict: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            show_running_total: true,
            strict: true,
        }
    }
}

impl PlayConfig {
    /// Set the number of attempts per delivery (clamped to 1-10).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.clamp(1, 10);
        self
    }

    /// Toggle the running score after each frame.
    pub fn with_running_total(mut self, show: bool) -> Self {
        self.show_running_total = show;
        self
    }

    /// Toggle the checked core API.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
