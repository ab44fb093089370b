mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use mancala_ai::core::{MancalaBoard, PlayerId};
use mancala_ai::display::{render_board, DisplayState};
use mancala_ai::game::Game;
use mancala_ai::player::ai::AIConfig;
use mancala_ai::player::{PlayerAgent, PlayerController, StrategyKind};
use mancala_ai::selfplay::{run_selfplay, save_stats, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AIConfig::get();
    match cli.command {
        Command::Play { p1, p2, ply } => run_play(p1, p2, ply.unwrap_or(config.search.default_ply)),
        Command::Selfplay {
            games,
            p1,
            p2,
            ply,
            save,
            stats,
        } => {
            let selfplay = SelfPlayConfig {
                num_games: games,
                p1_strategy: p1,
                p2_strategy: p2,
                ply: ply.unwrap_or(config.search.default_ply),
                max_moves: config.selfplay.max_moves,
                record_dir: save.then(|| "selfplay_records".into()),
            };
            info!(games, %p1, %p2, ply = selfplay.ply, "starting self-play");
            let result = run_selfplay(&selfplay)?;

            println!("=== Self-play: {} vs {} ===", result.p1_strategy, result.p2_strategy);
            println!("games:     {}", result.total_games);
            println!(
                "P1 wins:   {} ({:.1}%)",
                result.p1_wins,
                result.win_rate(PlayerId::Player1) * 100.0
            );
            println!(
                "P2 wins:   {} ({:.1}%)",
                result.p2_wins,
                result.win_rate(PlayerId::Player2) * 100.0
            );
            println!("draws:     {}", result.draws);
            println!("avg moves: {:.1}", result.avg_moves);
            println!("avg time:  {:.1} ms", result.avg_time_ms);

            if let Some(path) = stats {
                save_stats(&result, &path)?;
                info!(path = %path.display(), "stats saved");
            }
            Ok(())
        }
    }
}

fn run_play(p1: StrategyKind, p2: StrategyKind, ply: usize) -> Result<()> {
    let agent1 = PlayerAgent::<MancalaBoard>::new(PlayerId::Player1, p1, ply);
    let agent2 = PlayerAgent::<MancalaBoard>::new(PlayerId::Player2, p2, ply);
    info!(p1 = agent1.name(), p2 = agent2.name(), ply, "starting game");

    let mut game = Game::new(MancalaBoard::new());
    let mut render_error = None;
    let result = game.play_with(&agent1, &agent2, |board, player| {
        let state = DisplayState {
            status_msg: Some(format!("{} to move", player)),
            ..DisplayState::new()
        };
        if let Err(e) = render_board(board, &state) {
            if render_error.is_none() {
                render_error = Some(e);
            }
        }
    });
    if let Some(e) = render_error {
        return Err(e.into());
    }

    let status = match result.winner {
        Some(winner) => format!("{} wins {}-{}", winner, result.stores[0], result.stores[1]),
        None => format!("Draw {}-{}", result.stores[0], result.stores[1]),
    };
    let state = DisplayState {
        status_msg: Some(status),
        last_move: game.history.last().copied(),
        clear: false,
    };
    render_board(&game.board, &state)?;
    Ok(())
}
