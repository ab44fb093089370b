//! Opening book
//!
//! Known-good replies for the first few plies, keyed on the exact position.
//! Player 1 opens 3 and takes the extra turn with 6. Against replies that
//! empty Player 2's first pit it defends with 5, and when Player 2's first pit
//! is left holding 5 stones it raids it with pit 1. As Player 2, the answer to
//! 3-6 is 2 followed by 1 on the extra turn.

use crate::core::{Board, Move, PlayerId, PITS};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Exact position: side to move, both rows of pits, both stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub player: PlayerId,
    pub pits: [[u32; PITS]; 2],
    pub stores: [u32; 2],
}

impl Fingerprint {
    /// `None` when the board does not have six pits a side.
    pub fn of<B: Board>(board: &B, player: PlayerId) -> Option<Self> {
        let p1: [u32; PITS] = board.pits(PlayerId::Player1).try_into().ok()?;
        let p2: [u32; PITS] = board.pits(PlayerId::Player2).try_into().ok()?;
        Some(Fingerprint {
            player,
            pits: [p1, p2],
            stores: [
                board.store(PlayerId::Player1),
                board.store(PlayerId::Player2),
            ],
        })
    }
}

type Entry = (PlayerId, [u32; PITS], [u32; PITS], [u32; 2], Move);

const STANDARD_LINES: &[Entry] = &[
    (PlayerId::Player1, [4, 4, 4, 4, 4, 4], [4, 4, 4, 4, 4, 4], [0, 0], 3),
    (PlayerId::Player1, [4, 4, 0, 5, 5, 5], [4, 4, 4, 4, 4, 4], [1, 0], 6),
    // P2 replied 1, or 2 then 1
    (PlayerId::Player1, [4, 4, 0, 5, 5, 0], [0, 6, 6, 6, 5, 5], [2, 0], 5),
    (PlayerId::Player1, [4, 4, 0, 5, 5, 0], [0, 1, 7, 7, 6, 6], [2, 1], 5),
    // P2 replied 2 then 3, 4, 5 or 6
    (PlayerId::Player1, [5, 5, 0, 5, 5, 0], [5, 0, 0, 7, 6, 6], [2, 2], 1),
    (PlayerId::Player1, [5, 5, 1, 5, 5, 0], [5, 0, 6, 0, 6, 6], [2, 2], 1),
    (PlayerId::Player1, [5, 5, 1, 5, 5, 0], [5, 0, 6, 6, 0, 6], [2, 2], 1),
    (PlayerId::Player1, [5, 5, 1, 6, 5, 0], [5, 0, 6, 6, 5, 0], [2, 2], 1),
    (PlayerId::Player2, [4, 4, 0, 5, 5, 0], [5, 5, 5, 5, 4, 4], [2, 0], 2),
    (PlayerId::Player2, [4, 4, 0, 5, 5, 0], [5, 0, 6, 6, 5, 5], [2, 1], 1),
];

static STANDARD: Lazy<OpeningBook> = Lazy::new(|| OpeningBook::from_entries(STANDARD_LINES));

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<Fingerprint, Move>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in lines listed in the module docs.
    pub fn standard() -> &'static OpeningBook {
        &STANDARD
    }

    fn from_entries(lines: &[Entry]) -> Self {
        let mut book = Self::new();
        for &(player, p1, p2, stores, mv) in lines {
            book.insert(
                Fingerprint {
                    player,
                    pits: [p1, p2],
                    stores,
                },
                mv,
            );
        }
        book
    }

    pub fn insert(&mut self, position: Fingerprint, mv: Move) {
        self.entries.insert(position, mv);
    }

    /// Forced move for `player` on exactly this board, if any.
    pub fn lookup<B: Board>(&self, board: &B, player: PlayerId) -> Option<Move> {
        let key = Fingerprint::of(board, player)?;
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
