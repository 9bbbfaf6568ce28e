//! Shared value types and character configuration for the stride workspace.

pub mod config;
pub mod types;

pub use config::{Capsule, CharacterConfig, ConfigError, TurnRates};
pub use types::{InputMode, MoveAxis, Rotator};

pub fn crate_info() -> &'static str {
    "stride-common v0.1.0"
}
