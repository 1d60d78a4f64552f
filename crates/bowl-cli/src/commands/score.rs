use std::fs;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use bowl_core::{FrameScore, parse_game};

/// JSON shape printed by `bowl score --json`.
#[derive(Serialize)]
struct ScoreReport {
    notation: String,
    complete: bool,
    frames: Vec<FrameScore>,
    score: u32,
}

/// Frame words following the `score` subcommand, with its flags removed.
///
/// Every bare `--` is kept as a gutter frame.
pub fn notation_words<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().skip_while(|a| a != "score").skip(1);
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" | "-v" | "--verbose" => {}
            "-f" | "--file" => {
                args.next();
            }
            a if a.starts_with("--file=") || (a.starts_with("-f") && a.len() > 2) => {}
            _ => words.push(arg),
        }
    }
    words
}

pub fn run(notation: &[String], file: Option<&Path>, json: bool) -> Result<(), String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        None => notation.join(" "),
    };
    if text.trim().is_empty() {
        return Err("no frames given".into());
    }

    let game = parse_game(&text).map_err(|e| e.to_string())?;
    let score = game.compute_score();

    if json {
        let report = ScoreReport {
            notation: game.to_string(),
            complete: game.is_complete(),
            frames: game.frame_scores(),
            score,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", super::render_scorecard(&game));
    println!();
    println!("  {} {score}", "Score:".bold());
    if !game.is_complete() {
        println!("  {}", "(game incomplete)".dimmed());
    }

    Ok(())
}
