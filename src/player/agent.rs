//! Player identity plus strategy, and the dispatch to one controller per
//! strategy.

use crate::core::{Board, Move, PlayerId};
use crate::error::AgentError;
use crate::player::ai::{AIConfig, AlphaBetaAI, MinimaxAI, RandomAI};
use crate::player::{HumanController, PlayerController};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Human,
    Random,
    Minimax,
    AlphaBeta,
    /// Alpha-beta with the heuristic evaluator at the custom depth
    Custom,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Human,
        StrategyKind::Random,
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::Custom,
    ];

    pub fn code(self) -> u8 {
        match self {
            StrategyKind::Human => 0,
            StrategyKind::Random => 1,
            StrategyKind::Minimax => 2,
            StrategyKind::AlphaBeta => 3,
            StrategyKind::Custom => 4,
        }
    }
}

impl TryFrom<u8> for StrategyKind {
    type Error = AgentError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        StrategyKind::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(AgentError::UnknownStrategy { code })
    }
}

impl FromStr for StrategyKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(StrategyKind::Human),
            "random" => Ok(StrategyKind::Random),
            "minimax" => Ok(StrategyKind::Minimax),
            "alphabeta" | "alpha-beta" | "abprune" => Ok(StrategyKind::AlphaBeta),
            "custom" => Ok(StrategyKind::Custom),
            _ => Err(AgentError::UnknownStrategyName {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            StrategyKind::Human => "human",
            StrategyKind::Random => "random",
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alphabeta",
            StrategyKind::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

/// Stand-in for a strategy code nobody recognises. Never moves.
pub struct InvalidStrategy {
    player_id: PlayerId,
    code: u8,
    name: String,
}

impl<B: Board> PlayerController<B> for InvalidStrategy {
    fn choose_move(&self, _board: &B) -> Option<Move> {
        tracing::error!(
            player = %self.player_id,
            code = self.code,
            "unknown player type, no move chosen"
        );
        None
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A seat at the board: who plays, how, and how deep.
pub struct PlayerAgent<B: Board> {
    player: PlayerId,
    strategy: Option<StrategyKind>,
    ply: usize,
    controller: Box<dyn PlayerController<B>>,
}

impl<B: Board + fmt::Display + 'static> PlayerAgent<B> {
    /// `ply` is ignored by the custom strategy, which searches at the
    /// configured custom depth.
    pub fn new(player: PlayerId, strategy: StrategyKind, ply: usize) -> Self {
        let name = format!("{} {}", player, strategy);
        let ply = match strategy {
            StrategyKind::Custom => AIConfig::get().search.custom_ply,
            _ => ply,
        };
        let controller: Box<dyn PlayerController<B>> = match strategy {
            StrategyKind::Human => Box::new(HumanController::new(player, &name)),
            StrategyKind::Random => Box::new(RandomAI::new(player, &name)),
            StrategyKind::Minimax => Box::new(MinimaxAI::new(player, &name, ply)),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaAI::new(player, &name, ply)),
            StrategyKind::Custom => Box::new(AlphaBetaAI::custom(player, &name)),
        };
        Self {
            player,
            strategy: Some(strategy),
            ply,
            controller,
        }
    }

    /// Builds from a numeric strategy code. Unknown codes produce an agent
    /// that logs the misconfiguration and never returns a move.
    pub fn from_code(player: PlayerId, code: u8, ply: usize) -> Self {
        match StrategyKind::try_from(code) {
            Ok(strategy) => Self::new(player, strategy, ply),
            Err(err) => {
                tracing::error!(player = %player, %err, "invalid player configuration");
                Self {
                    player,
                    strategy: None,
                    ply,
                    controller: Box::new(InvalidStrategy {
                        player_id: player,
                        code,
                        name: format!("{} invalid", player),
                    }),
                }
            }
        }
    }

    /// Default depth from the config file.
    pub fn with_default_ply(player: PlayerId, strategy: StrategyKind) -> Self {
        Self::new(player, strategy, AIConfig::get().search.default_ply)
    }
}

impl<B: Board> PlayerAgent<B> {
    /// Seat driven by a caller-supplied controller.
    pub fn with_controller(
        player: PlayerId,
        strategy: StrategyKind,
        ply: usize,
        controller: Box<dyn PlayerController<B>>,
    ) -> Self {
        Self {
            player,
            strategy: Some(strategy),
            ply,
            controller,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn opponent(&self) -> PlayerId {
        self.player.opponent()
    }

    /// `None` for an unrecognised strategy code.
    pub fn strategy(&self) -> Option<StrategyKind> {
        self.strategy
    }

    pub fn ply(&self) -> usize {
        self.ply
    }
}

impl<B: Board> PlayerController<B> for PlayerAgent<B> {
    fn choose_move(&self, board: &B) -> Option<Move> {
        self.controller.choose_move(board)
    }

    fn name(&self) -> &str {
        self.controller.name()
    }
}
