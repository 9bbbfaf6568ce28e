//! Input-to-locomotion controller for a first-person character.
//!
//! # Invariants
//! - Controller state changes only through its event handlers.
//! - The walk speed saved on a sprint press is restored exactly once, on the
//!   matching release.
//! - Combined pointer movement is re-evaluated every tick, not on edges.

pub mod controller;
pub mod host;
pub mod state;

pub use controller::{InputLocomotionController, SPRINT_SPEED};
pub use host::{CharacterHost, FrameClock, InputModeSink, Locomotion};
pub use state::{ButtonChord, ControllerState, PointerButton, Sprint};

pub fn crate_info() -> &'static str {
    "stride-controller v0.1.0"
}
