use glam::Vec3;
use serde::{Deserialize, Serialize};
use stride_common::{Capsule, CharacterConfig, InputMode, Rotator};
use stride_controller::{FrameClock, InputModeSink, Locomotion};

/// A command the controller issued to the character.
///
/// The log is append-only within a frame and can be drained by the caller,
/// which makes every controller decision observable in tests and traces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostCommand {
    Move { direction: Vec3, scale: f32 },
    Yaw(f32),
    Pitch(f32),
    SetMaxWalkSpeed(f32),
    SetInputMode(InputMode),
    SetCursorVisible(bool),
    EnablePointerEvents,
    Jump,
    StopJumping,
}

/// Kinematic stand-in for an engine character.
///
/// Movement input queued during a frame is clamped to unit length and
/// applied at max walk speed by [`SimCharacter::integrate`]. The body yaws
/// with the control rotation; pitch only affects the camera.
#[derive(Debug, Clone)]
pub struct SimCharacter {
    position: Vec3,
    control_rotation: Rotator,
    max_walk_speed: f32,
    pending_input: Vec3,
    input_mode: InputMode,
    cursor_visible: bool,
    pointer_events: bool,
    jumping: bool,
    delta_seconds: f32,
    pitch_limit: f32,
    capsule: Capsule,
    camera_offset: Vec3,
    commands: Vec<HostCommand>,
}

impl Default for SimCharacter {
    fn default() -> Self {
        Self::new(&CharacterConfig::default())
    }
}

impl SimCharacter {
    pub fn new(config: &CharacterConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            control_rotation: Rotator::ZERO,
            max_walk_speed: config.walk_speed,
            pending_input: Vec3::ZERO,
            input_mode: InputMode::GameOnly,
            cursor_visible: false,
            pointer_events: false,
            jumping: false,
            delta_seconds: 0.0,
            pitch_limit: config.pitch_limit,
            capsule: config.capsule,
            camera_offset: config.camera_offset,
            commands: Vec::new(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn pointer_events_enabled(&self) -> bool {
        self.pointer_events
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn capsule(&self) -> Capsule {
        self.capsule
    }

    /// Movement input queued since the last integrate.
    pub fn pending_input(&self) -> Vec3 {
        self.pending_input
    }

    /// First-person camera position: the configured offset taken along the
    /// body's forward, right and up axes.
    pub fn camera_position(&self) -> Vec3 {
        let body = self.body_rotation();
        self.position
            + body.forward() * self.camera_offset.x
            + body.right() * self.camera_offset.y
            + Vec3::Y * self.camera_offset.z
    }

    /// Read-only access to the command log.
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Drain and return the command log.
    pub fn drain_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Start a frame of `dt` seconds.
    pub fn begin_frame(&mut self, dt: f32) {
        self.delta_seconds = dt;
    }

    /// Apply this frame's queued movement and clear it.
    pub fn integrate(&mut self) {
        let input = self.pending_input.clamp_length_max(1.0);
        self.position += input * self.max_walk_speed * self.delta_seconds;
        self.pending_input = Vec3::ZERO;
    }

    fn body_rotation(&self) -> Rotator {
        self.control_rotation.flattened()
    }
}

impl Locomotion for SimCharacter {
    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
        self.commands.push(HostCommand::Move { direction, scale });
    }

    fn add_yaw_input(&mut self, delta: f32) {
        self.control_rotation.yaw = (self.control_rotation.yaw + delta).rem_euclid(360.0);
        self.commands.push(HostCommand::Yaw(delta));
    }

    fn add_pitch_input(&mut self, delta: f32) {
        self.control_rotation.pitch =
            (self.control_rotation.pitch + delta).clamp(-self.pitch_limit, self.pitch_limit);
        self.commands.push(HostCommand::Pitch(delta));
    }

    fn max_walk_speed(&self) -> f32 {
        self.max_walk_speed
    }

    fn set_max_walk_speed(&mut self, speed: f32) {
        self.max_walk_speed = speed;
        self.commands.push(HostCommand::SetMaxWalkSpeed(speed));
    }

    fn actor_forward(&self) -> Vec3 {
        self.body_rotation().forward()
    }

    fn actor_right(&self) -> Vec3 {
        self.body_rotation().right()
    }

    fn control_rotation(&self) -> Rotator {
        self.control_rotation
    }

    fn jump(&mut self) {
        self.jumping = true;
        self.commands.push(HostCommand::Jump);
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
        self.commands.push(HostCommand::StopJumping);
    }
}

impl InputModeSink for SimCharacter {
    fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.commands.push(HostCommand::SetInputMode(mode));
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.commands.push(HostCommand::SetCursorVisible(visible));
    }

    fn enable_pointer_events(&mut self) {
        self.pointer_events = true;
        self.commands.push(HostCommand::EnablePointerEvents);
    }
}

impl FrameClock for SimCharacter {
    fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }
}
