use serde::{Deserialize, Serialize};

use crate::action::{ActionName, AxisName};

/// Raw physical inputs the binding table can map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    SpaceBar,
    LeftShift,
    LeftAlt,
    LeftMouseButton,
    RightMouseButton,
    /// Horizontal mouse motion since the last report.
    MouseX,
    /// Vertical mouse motion since the last report.
    MouseY,
    GamepadLeftX,
    GamepadLeftY,
    GamepadRightX,
    GamepadRightY,
}

impl Key {
    /// Analog sources report a value instead of going down and up.
    pub fn is_analog(self) -> bool {
        matches!(
            self,
            Key::MouseX
                | Key::MouseY
                | Key::GamepadLeftX
                | Key::GamepadLeftY
                | Key::GamepadRightX
                | Key::GamepadRightY
        )
    }

    /// Relative sources report deltas that accumulate within a frame and
    /// reset after it. Sticks report a position that holds until changed.
    pub fn is_relative(self) -> bool {
        matches!(self, Key::MouseX | Key::MouseY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionMapping {
    pub action: ActionName,
    pub key: Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMapping {
    pub axis: AxisName,
    pub key: Key,
    /// Multiplier applied to the key's value (1.0 for a held digital key).
    pub scale: f32,
}

/// Key-to-name binding table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputBindings {
    pub actions: Vec<ActionMapping>,
    pub axes: Vec<AxisMapping>,
}

impl InputBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard first-person layout: WASD + mouse look, left stick + right
    /// stick rates, both mouse buttons, shift sprint, alt UI toggle.
    pub fn first_person() -> Self {
        Self::new()
            .bind_action(ActionName::Jump, Key::SpaceBar)
            .bind_action(ActionName::Primary, Key::LeftMouseButton)
            .bind_action(ActionName::Secondary, Key::RightMouseButton)
            .bind_action(ActionName::Sprint, Key::LeftShift)
            .bind_action(ActionName::ToggleUi, Key::LeftAlt)
            .bind_axis(AxisName::MoveForward, Key::W, 1.0)
            .bind_axis(AxisName::MoveForward, Key::S, -1.0)
            .bind_axis(AxisName::MoveForward, Key::GamepadLeftY, 1.0)
            .bind_axis(AxisName::MoveRight, Key::D, 1.0)
            .bind_axis(AxisName::MoveRight, Key::A, -1.0)
            .bind_axis(AxisName::MoveRight, Key::GamepadLeftX, 1.0)
            .bind_axis(AxisName::Turn, Key::MouseX, 1.0)
            .bind_axis(AxisName::TurnRate, Key::GamepadRightX, 1.0)
            .bind_axis(AxisName::LookUp, Key::MouseY, -1.0)
            .bind_axis(AxisName::LookUpRate, Key::GamepadRightY, 1.0)
    }

    pub fn bind_action(mut self, action: ActionName, key: Key) -> Self {
        self.actions.push(ActionMapping { action, key });
        self
    }

    pub fn bind_axis(mut self, axis: AxisName, key: Key, scale: f32) -> Self {
        self.axes.push(AxisMapping { axis, key, scale });
        self
    }

    /// Actions bound to `key`, in table order.
    pub fn actions_for(&self, key: Key) -> impl Iterator<Item = ActionName> + '_ {
        self.actions
            .iter()
            .filter(move |m| m.key == key)
            .map(|m| m.action)
    }

    /// Mappings feeding `axis`, in table order.
    pub fn mappings_for(&self, axis: AxisName) -> impl Iterator<Item = &AxisMapping> + '_ {
        self.axes.iter().filter(move |m| m.axis == axis)
    }

    /// True if `key` appears anywhere in the table.
    pub fn is_bound(&self, key: Key) -> bool {
        self.actions.iter().any(|m| m.key == key) || self.axes.iter().any(|m| m.key == key)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_person_binds_mouse_buttons() {
        let b = InputBindings::first_person();
        let lmb: Vec<_> = b.actions_for(Key::LeftMouseButton).collect();
        let rmb: Vec<_> = b.actions_for(Key::RightMouseButton).collect();
        assert_eq!(lmb, vec![ActionName::Primary]);
        assert_eq!(rmb, vec![ActionName::Secondary]);
    }

    #[test]
    fn first_person_backward_key_has_negative_scale() {
        let b = InputBindings::first_person();
        let s = b
            .mappings_for(AxisName::MoveForward)
            .find(|m| m.key == Key::S)
            .unwrap();
        assert_eq!(s.scale, -1.0);
    }

    #[test]
    fn unbound_key_has_no_actions() {
        let b = InputBindings::new().bind_action(ActionName::Jump, Key::SpaceBar);
        assert_eq!(b.actions_for(Key::W).count(), 0);
        assert!(!b.is_bound(Key::W));
        assert!(b.is_bound(Key::SpaceBar));
    }

    #[test]
    fn analog_classification() {
        assert!(Key::MouseX.is_analog());
        assert!(Key::MouseX.is_relative());
        assert!(Key::GamepadRightX.is_analog());
        assert!(!Key::GamepadRightX.is_relative());
        assert!(!Key::W.is_analog());
    }

    #[test]
    fn yaml_table_parses() {
        let yaml = "actions:\n  - action: Sprint\n    key: LeftAlt\n\
                    axes:\n  - axis: MoveRight\n    key: D\n    scale: 0.5\n";
        let b = InputBindings::from_yaml_str(yaml).unwrap();
        assert_eq!(b.actions_for(Key::LeftAlt).next(), Some(ActionName::Sprint));
        assert_eq!(b.mappings_for(AxisName::MoveRight).count(), 1);
    }
}
