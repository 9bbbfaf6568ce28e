//! Seams to the character that owns the controller.
//!
//! The controller never looks anything up globally; each handler is handed the
//! owning character as a [`CharacterHost`].

use glam::Vec3;
use stride_common::{InputMode, Rotator};

/// Movement and camera input sink.
pub trait Locomotion {
    /// Queue movement along `direction` scaled by `scale` for this frame.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
    /// Add to control yaw, in degrees.
    fn add_yaw_input(&mut self, delta: f32);
    /// Add to control pitch, in degrees.
    fn add_pitch_input(&mut self, delta: f32);
    fn max_walk_speed(&self) -> f32;
    fn set_max_walk_speed(&mut self, speed: f32);
    fn actor_forward(&self) -> Vec3;
    fn actor_right(&self) -> Vec3;
    fn control_rotation(&self) -> Rotator;
    fn jump(&mut self);
    fn stop_jumping(&mut self);
}

/// Input routing and cursor sink.
pub trait InputModeSink {
    fn set_input_mode(&mut self, mode: InputMode);
    fn set_cursor_visible(&mut self, visible: bool);
    /// Turn on click and hover events for pointer-driven UI.
    fn enable_pointer_events(&mut self);
}

/// Per-frame clock.
pub trait FrameClock {
    /// Seconds elapsed in the current frame.
    fn delta_seconds(&self) -> f32;
}

/// Everything a controller needs from the character it drives.
pub trait CharacterHost: Locomotion + InputModeSink + FrameClock {}

impl<T: Locomotion + InputModeSink + FrameClock + ?Sized> CharacterHost for T {}
