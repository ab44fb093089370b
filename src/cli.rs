//! Command-line interface for mancala-ai.

use clap::{Parser, Subcommand};
use mancala_ai::player::StrategyKind;
use std::path::PathBuf;

/// Kalah player with minimax and alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "mancala-ai")]
#[command(about = "Mancala (Kalah) game and search agents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game in the terminal
    Play {
        /// Strategy for player 1 (human, random, minimax, alphabeta, custom)
        #[arg(long, default_value = "human")]
        p1: StrategyKind,

        /// Strategy for player 2
        #[arg(long, default_value = "alphabeta")]
        p2: StrategyKind,

        /// Search depth, defaults to `default_ply` from ai_config.json
        #[arg(long)]
        ply: Option<usize>,
    },

    /// Run computer-vs-computer games in parallel and report the results
    Selfplay {
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        #[arg(long, default_value = "alphabeta")]
        p1: StrategyKind,

        #[arg(long, default_value = "random")]
        p2: StrategyKind,

        #[arg(long)]
        ply: Option<usize>,

        /// Write every game to selfplay_records/
        #[arg(long)]
        save: bool,

        /// Write the summary as JSON to this file
        #[arg(long)]
        stats: Option<PathBuf>,
    },
}
