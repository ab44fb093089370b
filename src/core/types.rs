use crate::error::AgentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Player1
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 1 or 2, as printed to players
    pub fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    /// Row index into per-player arrays
    pub fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = AgentError;

    fn try_from(num: u8) -> Result<Self, Self::Error> {
        match num {
            1 => Ok(PlayerId::Player1),
            2 => Ok(PlayerId::Player2),
            num => Err(AgentError::InvalidPlayer { num }),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// A 1-based pit number on the mover's side.
pub type Move = usize;

/// Desirability of a board for the perspective player. The scale belongs to
/// whichever evaluator produced it.
pub type Score = f64;
