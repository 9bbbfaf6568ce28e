//! Input binding layer: raw keys mapped to named actions and axes.
//!
//! # Invariants
//! - Controllers consume [`InputEvent`]s, never raw [`Key`]s.
//! - One press edge per physical press; auto-repeat produces nothing.
//! - Every bound axis is reported once per frame, zero included.

pub mod action;
pub mod bindings;
pub mod mapper;

pub use action::{ActionName, AxisName, InputEvent};
pub use bindings::{ActionMapping, AxisMapping, InputBindings, Key};
pub use mapper::InputMapper;

pub fn crate_info() -> &'static str {
    "stride-input v0.1.0"
}
