use crate::core::{MancalaBoard, PlayerId};
use crate::game::{Game, GameRecord, GameResult};
use crate::player::{PlayerAgent, PlayerController, StrategyKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub p1_strategy: StrategyKind,
    pub p2_strategy: StrategyKind,
    pub ply: usize,
    pub max_moves: usize,
    /// Directory for per-game JSON records, `None` to keep nothing
    pub record_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub p1_strategy: String,
    pub p2_strategy: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(p1_strategy: StrategyKind, p2_strategy: StrategyKind) -> Self {
        Self {
            total_games: 0,
            p1_wins: 0,
            p2_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            p1_strategy: p1_strategy.to_string(),
            p2_strategy: p2_strategy.to_string(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::Player1) => self.p1_wins += 1,
            Some(PlayerId::Player2) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let wins = match player {
            PlayerId::Player1 => self.p1_wins,
            PlayerId::Player2 => self.p2_wins,
        };
        wins as f64 / self.total_games as f64
    }
}

/// Plays `num_games` independent games in parallel. Human seats are rejected.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    if config.p1_strategy == StrategyKind::Human || config.p2_strategy == StrategyKind::Human {
        anyhow::bail!("self-play needs two computer players");
    }
    if let Some(dir) = &config.record_dir {
        std::fs::create_dir_all(dir)?;
    }

    let results = (1..=config.num_games)
        .into_par_iter()
        .map(|game_num| play_one(config, game_num))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new(config.p1_strategy, config.p2_strategy);
    for result in results {
        stats.add_result(result);
    }
    tracing::info!(
        games = stats.total_games,
        p1_wins = stats.p1_wins,
        p2_wins = stats.p2_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let p1 = PlayerAgent::<MancalaBoard>::new(PlayerId::Player1, config.p1_strategy, config.ply);
    let p2 = PlayerAgent::<MancalaBoard>::new(PlayerId::Player2, config.p2_strategy, config.ply);

    let initial = MancalaBoard::new();
    let mut game = Game::new(initial.clone()).with_max_moves(config.max_moves);
    let result = game.play(&p1, &p2);
    tracing::debug!(game_num, winner = ?result.winner, moves = result.moves, "game finished");

    if let Some(dir) = &config.record_dir {
        let record = GameRecord::new(
            [p1.name().to_string(), p2.name().to_string()],
            initial,
            game.history,
            result.clone(),
        );
        save_record(&record, dir, game_num)?;
    }
    Ok(result)
}

fn save_record(record: &GameRecord, dir: &Path, game_num: usize) -> anyhow::Result<()> {
    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    record.save(filename)
}

pub fn save_stats(stats: &SelfPlayStats, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(())
}
