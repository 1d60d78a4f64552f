use std::io;

use colored::Colorize;

use crate::config::PlayConfig;
use crate::console::Console;

pub fn run(config: PlayConfig) -> Result<(), String> {
    println!("  {} Ten-Pin Bowling", "Starting".bold());
    println!("  Enter each roll: 0-10, 'x' for a strike, '/' for a spare, '-' for a miss.\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    let game = console.play_game().map_err(|e| e.to_string())?;
    drop(console);

    println!();
    println!("{}", super::render_scorecard(&game));
    Ok(())
}
