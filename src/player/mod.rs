pub mod agent;
pub mod ai;
pub mod controller;
pub mod human;

pub use agent::{PlayerAgent, StrategyKind};
pub use controller::PlayerController;
pub use human::HumanController;
