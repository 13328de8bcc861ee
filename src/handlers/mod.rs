pub mod health;
pub mod tiles;

pub use health::{health_check, readiness_check};
pub use tiles::{method_not_allowed, suggest_tiles};
