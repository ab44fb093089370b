//! Library error types.

use derive_more::{Display, Error};

/// Invalid agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// Strategy code outside 0..=4.
    #[display("unknown strategy code {code}")]
    UnknownStrategy { code: u8 },
    /// Strategy name that matches no known strategy.
    #[display("unknown strategy name '{name}'")]
    UnknownStrategyName { name: String },
    /// Player number other than 1 or 2.
    #[display("invalid player number {num} (expected 1 or 2)")]
    InvalidPlayer { num: u8 },
}
