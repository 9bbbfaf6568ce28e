//! Reference host for the locomotion controller: a kinematic character that
//! records every command it receives, plus a frame driver for scripted input.
//!
//! # Invariants
//! - Per frame: clock, input events, controller tick, movement integration.
//! - Every controller command lands in the character's command log.

pub mod character;
pub mod session;

pub use character::{HostCommand, SimCharacter};
pub use session::{AnalogInput, Script, ScriptError, ScriptFrame, Session, SessionReport};

pub fn crate_info() -> &'static str {
    "stride-host v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("host"));
    }
}
