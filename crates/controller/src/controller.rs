use stride_common::{CharacterConfig, InputMode, MoveAxis, TurnRates};
use stride_input::{ActionName, AxisName, InputEvent};

use crate::host::CharacterHost;
use crate::state::{ControllerState, PointerButton, Sprint};

/// Default max walk speed while the sprint modifier is held.
pub const SPRINT_SPEED: f32 = 1500.0;

/// Maps input events onto locomotion, look, and input-mode commands for one
/// first-person character.
///
/// Handlers are fire-and-forget: they cannot fail and return nothing. The
/// owning character is passed in on every call.
#[derive(Debug, Clone)]
pub struct InputLocomotionController {
    state: ControllerState,
    turn_rates: TurnRates,
    sprint_speed: f32,
}

impl Default for InputLocomotionController {
    fn default() -> Self {
        Self::new(TurnRates::default(), SPRINT_SPEED)
    }
}

impl InputLocomotionController {
    pub fn new(turn_rates: TurnRates, sprint_speed: f32) -> Self {
        Self {
            state: ControllerState::new(),
            turn_rates,
            sprint_speed,
        }
    }

    pub fn from_config(config: &CharacterConfig) -> Self {
        Self::new(config.turn_rates, config.sprint_speed)
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn turn_rates(&self) -> TurnRates {
        self.turn_rates
    }

    pub fn sprint_speed(&self) -> f32 {
        self.sprint_speed
    }

    /// Called once when the character enters play.
    pub fn begin_play<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        host.enable_pointer_events();
        tracing::debug!("pointer events enabled");
    }

    /// Route one event from the binding layer to its handler.
    pub fn dispatch<H: CharacterHost + ?Sized>(&mut self, host: &mut H, event: InputEvent) {
        match event {
            InputEvent::Pressed(ActionName::Jump) => self.on_jump_pressed(host),
            InputEvent::Released(ActionName::Jump) => self.on_jump_released(host),
            InputEvent::Pressed(ActionName::Primary) => self.on_primary_down(),
            InputEvent::Released(ActionName::Primary) => self.on_primary_up(),
            InputEvent::Pressed(ActionName::Secondary) => self.on_secondary_down(),
            InputEvent::Released(ActionName::Secondary) => self.on_secondary_up(),
            InputEvent::Pressed(ActionName::Sprint) => self.on_modifier_down(host),
            InputEvent::Released(ActionName::Sprint) => self.on_modifier_up(host),
            InputEvent::Pressed(ActionName::ToggleUi) => self.on_toggle_ui_mode(host),
            InputEvent::Released(ActionName::ToggleUi) => {}
            InputEvent::Axis(AxisName::MoveForward, v) => {
                self.on_move_axis(host, MoveAxis::Forward, v)
            }
            InputEvent::Axis(AxisName::MoveRight, v) => {
                self.on_move_axis(host, MoveAxis::Right, v)
            }
            InputEvent::Axis(AxisName::Turn, v) => self.on_turn(host, v),
            InputEvent::Axis(AxisName::TurnRate, v) => self.on_turn_rate(host, v),
            InputEvent::Axis(AxisName::LookUp, v) => self.on_look_up(host, v),
            InputEvent::Axis(AxisName::LookUpRate, v) => self.on_look_rate(host, v),
        }
    }

    /// Walk or strafe along the actor's own axes. Zero is a no-op so an idle
    /// axis does not reassert game-only input every frame.
    pub fn on_move_axis<H: CharacterHost + ?Sized>(
        &mut self,
        host: &mut H,
        axis: MoveAxis,
        value: f32,
    ) {
        if value == 0.0 {
            return;
        }
        let direction = match axis {
            MoveAxis::Forward => host.actor_forward(),
            MoveAxis::Right => host.actor_right(),
        };
        host.add_movement_input(direction, value);
        self.force_game_only(host);
    }

    /// Yaw at a normalized rate, scaled by the base turn rate and frame time.
    pub fn on_turn_rate<H: CharacterHost + ?Sized>(&mut self, host: &mut H, rate: f32) {
        let delta = rate * self.turn_rates.base_turn_rate * host.delta_seconds();
        host.add_yaw_input(delta);
    }

    /// Pitch at a normalized rate, scaled by the base look rate and frame time.
    pub fn on_look_rate<H: CharacterHost + ?Sized>(&mut self, host: &mut H, rate: f32) {
        let delta = rate * self.turn_rates.base_look_rate * host.delta_seconds();
        host.add_pitch_input(delta);
    }

    /// Absolute yaw delta, e.g. mouse motion.
    pub fn on_turn<H: CharacterHost + ?Sized>(&mut self, host: &mut H, delta: f32) {
        host.add_yaw_input(delta);
    }

    /// Absolute pitch delta, e.g. mouse motion.
    pub fn on_look_up<H: CharacterHost + ?Sized>(&mut self, host: &mut H, delta: f32) {
        host.add_pitch_input(delta);
    }

    pub fn on_primary_down(&mut self) {
        self.state.chord = self.state.chord.press(PointerButton::Primary);
    }

    pub fn on_primary_up(&mut self) {
        self.state.chord = self.state.chord.release(PointerButton::Primary);
    }

    pub fn on_secondary_down(&mut self) {
        self.state.chord = self.state.chord.press(PointerButton::Secondary);
        tracing::debug!(chord = ?self.state.chord, "secondary down");
    }

    pub fn on_secondary_up(&mut self) {
        self.state.chord = self.state.chord.release(PointerButton::Secondary);
        tracing::debug!(chord = ?self.state.chord, "secondary up");
    }

    /// Save the current walk speed and switch to sprint speed. Ignored while
    /// already sprinting so the saved speed is never overwritten.
    pub fn on_modifier_down<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        if self.state.modifier_down() {
            return;
        }
        let walk_speed = host.max_walk_speed();
        self.state.sprint = Sprint::Sprinting { walk_speed };
        host.set_max_walk_speed(self.sprint_speed);
        tracing::debug!(walk_speed, sprint_speed = self.sprint_speed, "sprint start");
    }

    /// Restore the walk speed saved on the matching down edge.
    pub fn on_modifier_up<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        if let Sprint::Sprinting { walk_speed } = self.state.sprint {
            self.state.sprint = Sprint::Walking;
            host.set_max_walk_speed(walk_speed);
            tracing::debug!(walk_speed, "sprint end");
        }
    }

    /// Flip between game-only input with a hidden cursor and game+UI input
    /// with a visible cursor.
    pub fn on_toggle_ui_mode<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        self.state.ui_only = !self.state.ui_only;
        if self.state.ui_only {
            host.set_input_mode(InputMode::GameAndUi);
            host.set_cursor_visible(true);
        } else {
            host.set_input_mode(InputMode::GameOnly);
            host.set_cursor_visible(false);
        }
        tracing::debug!(ui_only = self.state.ui_only, "input mode toggled");
    }

    pub fn on_jump_pressed<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        host.jump();
    }

    pub fn on_jump_released<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        host.stop_jumping();
    }

    /// Per-frame update. While both pointer buttons are held, walk toward
    /// where the camera faces on the horizontal plane.
    pub fn on_tick<H: CharacterHost + ?Sized>(&mut self, host: &mut H, delta_seconds: f32) {
        if !self.state.chord.primary_down() || !self.state.chord.secondary_down() {
            return;
        }
        let forward = host.control_rotation().flattened().forward();
        host.add_movement_input(forward, 1.0);
        self.force_game_only(host);
        tracing::trace!(delta_seconds, ?forward, "chord move");
    }

    fn force_game_only<H: CharacterHost + ?Sized>(&mut self, host: &mut H) {
        self.state.ui_only = false;
        host.set_input_mode(InputMode::GameOnly);
    }
}
