//! Types shared by the minimax and alpha-beta searches.

use crate::core::{Move, Score};
use serde::Serialize;
use std::time::Duration;

/// A move together with the value the search computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored {
    pub score: Score,
    pub mv: Move,
}

/// Outcome of a root decision.
///
/// Book moves are kept apart from computed scores so that the two are never
/// compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Decision {
    /// Forced by the opening book, no search performed
    Book(Move),
    Searched(Scored),
}

impl Decision {
    pub fn mv(&self) -> Move {
        match self {
            Decision::Book(mv) => *mv,
            Decision::Searched(s) => s.mv,
        }
    }

    /// Book moves report an unbounded score.
    pub fn score(&self) -> Score {
        match self {
            Decision::Book(_) => Score::INFINITY,
            Decision::Searched(s) => s.score,
        }
    }

    pub fn is_book(&self) -> bool {
        matches!(self, Decision::Book(_))
    }
}

/// Counters gathered during one root search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited, root excluded
    pub nodes: usize,
    /// Evaluator calls
    pub leaves: usize,
    /// Root moves fully evaluated
    pub root_moves: usize,
    pub elapsed: Duration,
    /// Root loop stopped early because the time budget ran out
    pub timed_out: bool,
}
