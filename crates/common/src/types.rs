use glam::Vec3;
use serde::{Deserialize, Serialize};

/// View orientation in degrees. Y is up; yaw 0 looks down +X.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Unit vector this rotation looks along. Roll does not affect it.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Horizontal unit vector to the right of `forward`.
    pub fn right(&self) -> Vec3 {
        self.flattened().forward().cross(Vec3::Y).normalize()
    }

    /// Same yaw with pitch and roll zeroed.
    pub fn flattened(&self) -> Self {
        Self {
            pitch: 0.0,
            yaw: self.yaw,
            roll: 0.0,
        }
    }
}

/// Routing policy for input events: gameplay only, or gameplay plus UI widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    GameOnly,
    GameAndUi,
}

/// Actor-relative movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAxis {
    Forward,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn zero_rotator_looks_down_x() {
        assert!(approx(Rotator::ZERO.forward(), Vec3::X));
        assert!(approx(Rotator::ZERO.right(), Vec3::Z));
    }

    #[test]
    fn flattened_drops_pitch_and_roll() {
        let r = Rotator::new(35.0, 90.0, 12.0).flattened();
        assert_eq!(r, Rotator::new(0.0, 90.0, 0.0));
        let fwd = r.forward();
        assert!(fwd.y.abs() < 1e-6);
        assert!(approx(fwd, Vec3::Z));
    }

    #[test]
    fn right_stays_horizontal_when_pitched() {
        let r = Rotator::new(-60.0, 45.0, 0.0);
        assert!(r.right().y.abs() < 1e-6);
        assert!((r.right().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn default_input_mode_is_game_only() {
        assert_eq!(InputMode::default(), InputMode::GameOnly);
    }
}
