pub mod alpha_beta;
pub mod book;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod random;
pub mod search;

pub use alpha_beta::{AlphaBetaAI, AlphaBetaSearch};
pub use book::OpeningBook;
pub use config::AIConfig;
pub use eval::{HeuristicEvaluator, OutcomeEvaluator};
pub use evaluator::Evaluator;
pub use minimax::{MinimaxAI, MinimaxSearch};
pub use random::RandomAI;
pub use search::{Decision, Scored, SearchStats};
