//! Console scorer for ten-pin bowling.

mod commands;
mod config;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::PlayConfig;

#[derive(Parser)]
#[command(
    name = "bowl",
    about = "Ten-pin bowling scorer",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print debug logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bowl a game interactively, entering one roll at a time
    Play {
        /// Invalid entries allowed per roll before giving up
        #[arg(long, default_value = "3")]
        max_attempts: u32,

        /// Do not print the running score after each frame
        #[arg(long)]
        no_running_total: bool,

        /// Skip the core's own validation of frames and bonus rolls
        #[arg(long)]
        permissive: bool,
    },

    /// Score a game written in score-sheet notation (e.g. "X 7/ 9- X -8")
    Score {
        /// Frames separated by spaces or '|'. A bare '--' is a gutter frame,
        /// not the end of options
        #[arg(allow_hyphen_values = true)]
        notation: Vec<String>,

        /// Read the notation from a file instead
        #[arg(short, long, conflicts_with = "notation")]
        file: Option<PathBuf>,

        /// Print the score sheet as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            max_attempts,
            no_running_total,
            permissive,
        } => {
            let config = PlayConfig::default()
                .with_max_attempts(max_attempts)
                .with_running_total(!no_running_total)
                .with_strict(!permissive);
            commands::play::run(config)
        }
        Commands::Score {
            notation: _,
            file,
            json,
        } => {
            // clap swallows the first bare `--`; take the frames from argv instead.
            let args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
            let words = commands::score::notation_words(args);
            commands::score::run(&words, file.as_deref(), json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
