use serde::{Deserialize, Serialize};

/// A named button action. Controllers consume these, never raw keys, so
/// rebinding a key never touches locomotion logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionName {
    Jump,
    /// Primary pointer button (left mouse by default).
    Primary,
    /// Secondary pointer button (right mouse by default).
    Secondary,
    /// Sprint modifier (left shift by default).
    Sprint,
    /// Toggle between gameplay-only and gameplay+UI input routing.
    ToggleUi,
}

/// A named analog axis, reported once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisName {
    MoveForward,
    MoveRight,
    /// Absolute yaw delta (mouse).
    Turn,
    /// Normalized yaw rate (stick).
    TurnRate,
    /// Absolute pitch delta (mouse).
    LookUp,
    /// Normalized pitch rate (stick).
    LookUpRate,
}

impl AxisName {
    /// Order in which axis values are delivered within a frame.
    pub const ALL: [AxisName; 6] = [
        AxisName::MoveForward,
        AxisName::MoveRight,
        AxisName::Turn,
        AxisName::TurnRate,
        AxisName::LookUp,
        AxisName::LookUpRate,
    ];
}

/// One event delivered by the binding layer to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button went down this frame.
    Pressed(ActionName),
    /// Button went up this frame.
    Released(ActionName),
    /// Per-frame value of an axis; zero when nothing drives it.
    Axis(AxisName, f32),
}

impl InputEvent {
    pub fn is_edge(&self) -> bool {
        !matches!(self, InputEvent::Axis(..))
    }
}
