use super::types::{Move, PlayerId};
use crate::logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pits per side
pub const PITS: usize = 6;
/// Stones in every pit at the start of a game
pub const STONES_PER_PIT: u32 = 4;

/// What the search needs from a board.
///
/// Implementations are treated as values: the search clones before every
/// hypothetical move, so `make_move` is free to mutate in place.
pub trait Board: Clone {
    /// Legal moves for `player`. The order is the search order and decides ties.
    fn legal_moves(&self, player: PlayerId) -> Vec<Move>;

    fn is_legal_move(&self, player: PlayerId, mv: Move) -> bool {
        self.legal_moves(player).contains(&mv)
    }

    /// Applies `mv` for `player`. Returns `true` when the mover plays again.
    fn make_move(&mut self, player: PlayerId, mv: Move) -> bool;

    fn game_over(&self) -> bool;

    fn has_won(&self, player: PlayerId) -> bool;

    /// `player`'s pits in their sowing order (the last one is next to the store).
    fn pits(&self, player: PlayerId) -> &[u32];

    fn store(&self, player: PlayerId) -> u32;
}

/// Kalah board: six pits a side, one store each.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MancalaBoard {
    /// `pits[p][i]` is pit `i + 1` of player `p`
    pub pits: [[u32; PITS]; 2],
    pub stores: [u32; 2],
}

impl Default for MancalaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MancalaBoard {
    pub fn new() -> Self {
        MancalaBoard {
            pits: [[STONES_PER_PIT; PITS]; 2],
            stores: [0; 2],
        }
    }

    pub fn from_parts(p1: [u32; PITS], p2: [u32; PITS], stores: [u32; 2]) -> Self {
        MancalaBoard {
            pits: [p1, p2],
            stores,
        }
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().flatten().sum::<u32>() + self.stores.iter().sum::<u32>()
    }

    /// Leading player once the game is over, `None` on a tie or while playing.
    pub fn winner(&self) -> Option<PlayerId> {
        [PlayerId::Player1, PlayerId::Player2]
            .into_iter()
            .find(|&p| self.has_won(p))
    }
}

impl Board for MancalaBoard {
    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        logic::legal_moves(self, player)
    }

    fn make_move(&mut self, player: PlayerId, mv: Move) -> bool {
        logic::sow(self, player, mv)
    }

    fn game_over(&self) -> bool {
        logic::is_game_over(self)
    }

    fn has_won(&self, player: PlayerId) -> bool {
        self.game_over()
            && self.stores[player.index()] > self.stores[player.opponent().index()]
    }

    fn pits(&self, player: PlayerId) -> &[u32] {
        &self.pits[player.index()]
    }

    fn store(&self, player: PlayerId) -> u32 {
        self.stores[player.index()]
    }
}

impl fmt::Display for MancalaBoard {
    /// Player 2 on top, right to left, so that sowing runs counterclockwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P2    ")?;
        for pit in (1..=PITS).rev() {
            write!(f, "{:>3}", pit)?;
        }
        writeln!(f)?;
        write!(f, "      ")?;
        for stones in self.pits[1].iter().rev() {
            write!(f, "{:>3}", stones)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  {:>3}{}{:>3}",
            self.stores[1],
            " ".repeat(PITS * 3 + 2),
            self.stores[0]
        )?;
        write!(f, "      ")?;
        for stones in self.pits[0].iter() {
            write!(f, "{:>3}", stones)?;
        }
        writeln!(f)?;
        write!(f, "P1    ")?;
        for pit in 1..=PITS {
            write!(f, "{:>3}", pit)?;
        }
        Ok(())
    }
}
