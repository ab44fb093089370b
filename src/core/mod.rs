pub mod board;
pub mod types;

pub use board::{Board, MancalaBoard, PITS, STONES_PER_PIT};
pub use types::{Move, PlayerId, Score};
