//! Frame driver and scripted input playback.
//!
//! A script is a YAML list of frames. Each frame presses, moves, and releases
//! raw keys, then advances time by `dt`:
//! ```yaml
//! frames:
//!   - dt: 0.016
//!     down: [LeftMouseButton, RightMouseButton]
//!   - dt: 0.016
//!     repeat: 59
//!   - dt: 0.016
//!     up: [LeftMouseButton]
//!     analog:
//!       - { key: MouseX, value: 4.0 }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stride_common::{Capsule, CharacterConfig, InputMode};
use stride_controller::{ControllerState, InputLocomotionController, Locomotion};
use stride_input::{InputBindings, InputMapper, Key};

use crate::character::SimCharacter;

/// Errors from loading or running a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frame {frame}: dt must be positive and finite, got {dt}")]
    InvalidDt { frame: usize, dt: f32 },
    #[error("frame {frame}: repeat must be at least 1")]
    InvalidRepeat { frame: usize },
    #[error("frame {frame}: analog value for {key:?} must be finite")]
    InvalidAnalog { frame: usize, key: Key },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalogInput {
    pub key: Key,
    pub value: f32,
}

/// One scripted frame. Inputs apply in the order down, analog, up, and only
/// on the first of `repeat` frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    pub dt: f32,
    #[serde(default)]
    pub down: Vec<Key>,
    #[serde(default)]
    pub analog: Vec<AnalogInput>,
    #[serde(default)]
    pub up: Vec<Key>,
    #[serde(default = "one")]
    pub repeat: u32,
}

fn one() -> u32 {
    1
}

impl ScriptFrame {
    /// An input-free frame of `dt` seconds.
    pub fn idle(dt: f32) -> Self {
        Self {
            dt,
            down: Vec::new(),
            analog: Vec::new(),
            up: Vec::new(),
            repeat: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub frames: Vec<ScriptFrame>,
}

impl Script {
    pub fn from_yaml_str(s: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_yaml::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&data)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        for (frame, f) in self.frames.iter().enumerate() {
            if !(f.dt.is_finite() && f.dt > 0.0) {
                return Err(ScriptError::InvalidDt { frame, dt: f.dt });
            }
            if f.repeat == 0 {
                return Err(ScriptError::InvalidRepeat { frame });
            }
            if let Some(a) = f.analog.iter().find(|a| !a.value.is_finite()) {
                return Err(ScriptError::InvalidAnalog { frame, key: a.key });
            }
        }
        Ok(())
    }

    /// Total simulated frames after expanding repeats.
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }
}

/// Summary of a session's state, suitable for printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub frames: u64,
    pub elapsed_seconds: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub max_walk_speed: f32,
    pub input_mode: InputMode,
    pub cursor_visible: bool,
    pub jumping: bool,
    pub capsule: Capsule,
    pub controller: ControllerState,
    /// Commands the controller issued over the whole session.
    pub commands: u64,
}

/// One controller driving one character, fed by an input mapper.
///
/// Each [`Session::step`] runs: start frame, deliver input events, tick the
/// controller, integrate movement. The character's command log holds only
/// the latest frame; earlier frames are folded into a running count.
#[derive(Debug, Clone)]
pub struct Session {
    controller: InputLocomotionController,
    character: SimCharacter,
    mapper: InputMapper,
    frames: u64,
    elapsed: f32,
    commands_issued: u64,
}

impl Session {
    pub fn new(config: &CharacterConfig, bindings: InputBindings) -> Self {
        let mut controller = InputLocomotionController::from_config(config);
        let mut character = SimCharacter::new(config);
        controller.begin_play(&mut character);
        Self {
            controller,
            character,
            mapper: InputMapper::new(bindings),
            frames: 0,
            elapsed: 0.0,
            commands_issued: 0,
        }
    }

    pub fn controller(&self) -> &InputLocomotionController {
        &self.controller
    }

    pub fn character(&self) -> &SimCharacter {
        &self.character
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame of `dt` seconds using whatever input the mapper holds.
    pub fn step(&mut self, dt: f32) {
        self.commands_issued += self.character.drain_commands().len() as u64;
        self.character.begin_frame(dt);
        for event in self.mapper.frame_events() {
            self.controller.dispatch(&mut self.character, event);
        }
        self.controller.on_tick(&mut self.character, dt);
        self.character.integrate();
        self.frames += 1;
        self.elapsed += dt;
    }

    /// Feed one scripted frame (with repeats) through the mapper.
    pub fn play_frame(&mut self, frame: &ScriptFrame) {
        for key in &frame.down {
            self.mapper.key_down(*key);
        }
        for a in &frame.analog {
            self.mapper.analog(a.key, a.value);
        }
        for key in &frame.up {
            self.mapper.key_up(*key);
        }
        for _ in 0..frame.repeat {
            self.step(frame.dt);
        }
    }

    pub fn run_script(&mut self, script: &Script) -> Result<SessionReport, ScriptError> {
        script.validate()?;
        let _span = tracing::info_span!("run_script", frames = script.frame_count()).entered();
        for frame in &script.frames {
            self.play_frame(frame);
        }
        let report = self.report();
        tracing::info!(
            frames = report.frames,
            commands = report.commands,
            "script complete"
        );
        Ok(report)
    }

    pub fn report(&self) -> SessionReport {
        let rotation = self.character.control_rotation();
        SessionReport {
            frames: self.frames,
            elapsed_seconds: self.elapsed,
            position: self.character.position(),
            yaw: rotation.yaw,
            pitch: rotation.pitch,
            max_walk_speed: self.character.max_walk_speed(),
            input_mode: self.character.input_mode(),
            cursor_visible: self.character.cursor_visible(),
            jumping: self.character.is_jumping(),
            capsule: self.character.capsule(),
            controller: *self.controller.state(),
            commands: self.commands_issued + self.character.commands().len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::HostCommand;

    fn session() -> Session {
        Session::new(&CharacterConfig::default(), InputBindings::first_person())
    }

    fn frame(down: &[Key], up: &[Key]) -> ScriptFrame {
        ScriptFrame {
            down: down.to_vec(),
            up: up.to_vec(),
            ..ScriptFrame::idle(0.016)
        }
    }

    #[test]
    fn new_session_enables_pointer_events() {
        let s = session();
        assert!(s.character().pointer_events_enabled());
        assert_eq!(s.character().commands(), &[HostCommand::EnablePointerEvents]);
    }

    #[test]
    fn idle_frames_issue_no_movement_or_mode_commands() {
        let mut s = session();
        for _ in 0..10 {
            s.step(0.016);
        }
        // only the per-frame rate axes (zero yaw/pitch) reach the character
        assert!(s.character().commands().iter().all(|c| matches!(
            c,
            HostCommand::Yaw(d) | HostCommand::Pitch(d) if *d == 0.0
        )));
        assert_eq!(s.character().position(), Vec3::ZERO);
    }

    #[test]
    fn holding_w_walks_forward() {
        let mut s = session();
        s.play_frame(&frame(&[Key::W], &[]));
        let p = s.character().position();
        assert!((p.x - 600.0 * 0.016).abs() < 1e-3);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn both_mouse_buttons_walk_forward_each_frame() {
        let mut s = session();
        s.play_frame(&frame(&[Key::RightMouseButton], &[]));
        assert_eq!(s.character().position(), Vec3::ZERO);
        s.play_frame(&ScriptFrame {
            repeat: 10,
            ..frame(&[Key::LeftMouseButton], &[])
        });
        let p = s.character().position();
        assert!((p.x - 600.0 * 0.016 * 10.0).abs() < 1e-2);
        s.play_frame(&frame(&[], &[Key::LeftMouseButton]));
        assert!((s.character().position().x - p.x).abs() < 1e-6);
    }

    #[test]
    fn sprint_scenario_restores_walk_speed() {
        let mut s = session();
        s.play_frame(&frame(&[Key::LeftShift], &[]));
        assert_eq!(s.character().max_walk_speed(), 1500.0);
        s.play_frame(&frame(&[], &[Key::LeftShift]));
        assert_eq!(s.character().max_walk_speed(), 600.0);
    }

    #[test]
    fn alt_toggles_cursor_and_walking_restores_game_only() {
        let mut s = session();
        s.play_frame(&frame(&[Key::LeftAlt], &[Key::LeftAlt]));
        assert!(s.character().cursor_visible());
        assert_eq!(s.character().input_mode(), InputMode::GameAndUi);
        assert!(s.controller().state().ui_only_mode());
        s.play_frame(&frame(&[Key::D], &[]));
        assert_eq!(s.character().input_mode(), InputMode::GameOnly);
        assert!(!s.controller().state().ui_only_mode());
    }

    #[test]
    fn stick_turns_at_base_rate() {
        let mut s = session();
        s.play_frame(&ScriptFrame {
            analog: vec![AnalogInput {
                key: Key::GamepadRightX,
                value: 1.0,
            }],
            repeat: 2,
            ..ScriptFrame::idle(0.5)
        });
        assert!((s.character().control_rotation().yaw - 45.0).abs() < 1e-4);
    }

    #[test]
    fn script_from_yaml_runs() {
        let yaml = "frames:\n  - dt: 0.1\n    down: [W, LeftShift]\n    repeat: 5\n  \
                    - dt: 0.1\n    up: [W, LeftShift]\n";
        let script = Script::from_yaml_str(yaml).unwrap();
        assert_eq!(script.frame_count(), 6);
        let mut s = session();
        let report = s.run_script(&script).unwrap();
        assert_eq!(report.frames, 6);
        assert!((report.position.x - 1500.0 * 0.1 * 5.0).abs() < 1e-2);
        assert_eq!(report.max_walk_speed, 600.0);
        assert!(!report.controller.modifier_down());
    }

    #[test]
    fn long_idle_run_keeps_command_log_bounded() {
        let script = Script::from_yaml_str("frames:\n  - dt: 0.016\n    repeat: 100000\n").unwrap();
        let mut s = session();
        let report = s.run_script(&script).unwrap();
        assert_eq!(report.frames, 100_000);
        // one frame's worth: yaw and pitch from the absolute and rate axes
        assert_eq!(s.character().commands().len(), 4);
        // pointer events at begin play, then four look commands per frame
        assert_eq!(report.commands, 1 + 4 * 100_000);
    }

    #[test]
    fn report_counts_commands_across_frames() {
        let mut s = session();
        s.play_frame(&frame(&[Key::LeftShift], &[]));
        s.play_frame(&frame(&[], &[Key::LeftShift]));
        // begin play, then per frame four look commands plus one speed change
        assert_eq!(s.report().commands, 1 + 5 + 5);
    }

    #[test]
    fn report_carries_capsule() {
        let config = CharacterConfig {
            capsule: Capsule {
                radius: 40.0,
                half_height: 88.0,
            },
            ..CharacterConfig::default()
        };
        let s = Session::new(&config, InputBindings::first_person());
        assert_eq!(s.report().capsule, config.capsule);
    }

    #[test]
    fn non_finite_analog_rejected() {
        let yaml = "frames:\n  - dt: 0.016\n    analog:\n      \
                    - { key: GamepadLeftY, value: .nan }\n";
        let err = Script::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::InvalidAnalog {
                frame: 0,
                key: Key::GamepadLeftY
            }
        ));
        let inf = "frames:\n  - dt: 0.016\n  - dt: 0.016\n    analog:\n      \
                   - { key: MouseX, value: .inf }\n";
        assert!(matches!(
            Script::from_yaml_str(inf).unwrap_err(),
            ScriptError::InvalidAnalog { frame: 1, .. }
        ));
    }

    #[test]
    fn nan_stick_does_not_poison_position() {
        let mut s = session();
        s.play_frame(&ScriptFrame {
            analog: vec![AnalogInput {
                key: Key::GamepadLeftY,
                value: f32::NAN,
            }],
            ..ScriptFrame::idle(0.016)
        });
        s.play_frame(&ScriptFrame {
            analog: vec![AnalogInput {
                key: Key::GamepadLeftY,
                value: 0.0,
            }],
            repeat: 10,
            ..ScriptFrame::idle(0.016)
        });
        assert!(s.character().position().is_finite());
        assert_eq!(s.character().position(), Vec3::ZERO);
    }

    #[test]
    fn zero_dt_rejected() {
        let err = Script::from_yaml_str("frames:\n  - dt: 0.0\n").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidDt { frame: 0, .. }));
    }

    #[test]
    fn zero_repeat_rejected() {
        let err = Script::from_yaml_str("frames:\n  - dt: 0.1\n    repeat: 0\n").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidRepeat { frame: 0 }));
    }

    #[test]
    fn unknown_key_is_yaml_error() {
        let err = Script::from_yaml_str("frames:\n  - dt: 0.1\n    down: [Q]\n").unwrap_err();
        assert!(matches!(err, ScriptError::Yaml(_)));
    }

    #[test]
    fn load_script_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("walk.yaml");
        std::fs::write(&path, "frames:\n  - dt: 0.016\n    down: [W]\n").unwrap();
        let script = Script::load(&path).unwrap();
        assert_eq!(script.frames[0].down, vec![Key::W]);
    }
}
