use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Which of the two pointer buttons are held.
///
/// Each button flips independently. Combined movement runs every frame the
/// chord is [`ButtonChord::Both`], however it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonChord {
    #[default]
    Released,
    PrimaryOnly,
    SecondaryOnly,
    Both,
}

impl ButtonChord {
    pub fn from_flags(primary: bool, secondary: bool) -> Self {
        match (primary, secondary) {
            (false, false) => ButtonChord::Released,
            (true, false) => ButtonChord::PrimaryOnly,
            (false, true) => ButtonChord::SecondaryOnly,
            (true, true) => ButtonChord::Both,
        }
    }

    pub fn primary_down(self) -> bool {
        matches!(self, ButtonChord::PrimaryOnly | ButtonChord::Both)
    }

    pub fn secondary_down(self) -> bool {
        matches!(self, ButtonChord::SecondaryOnly | ButtonChord::Both)
    }

    pub fn is_down(self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_down(),
            PointerButton::Secondary => self.secondary_down(),
        }
    }

    pub fn press(self, button: PointerButton) -> Self {
        self.with(button, true)
    }

    pub fn release(self, button: PointerButton) -> Self {
        self.with(button, false)
    }

    fn with(self, button: PointerButton, down: bool) -> Self {
        match button {
            PointerButton::Primary => Self::from_flags(down, self.secondary_down()),
            PointerButton::Secondary => Self::from_flags(self.primary_down(), down),
        }
    }
}

/// Sprint modifier state. The walk speed to restore exists only while
/// sprinting, so it cannot be saved twice or restored without a save.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Sprint {
    #[default]
    Walking,
    Sprinting { walk_speed: f32 },
}

/// Controller flags. Created all-clear; only the controller's handlers
/// mutate it, everyone else gets `&ControllerState`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerState {
    pub(crate) chord: ButtonChord,
    pub(crate) sprint: Sprint,
    pub(crate) ui_only: bool,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chord(&self) -> ButtonChord {
        self.chord
    }

    pub fn sprint(&self) -> Sprint {
        self.sprint
    }

    pub fn primary_down(&self) -> bool {
        self.chord.primary_down()
    }

    pub fn secondary_down(&self) -> bool {
        self.chord.secondary_down()
    }

    pub fn modifier_down(&self) -> bool {
        matches!(self.sprint, Sprint::Sprinting { .. })
    }

    pub fn ui_only_mode(&self) -> bool {
        self.ui_only
    }

    /// Walk speed saved on the modifier-down edge; `None` while walking.
    pub fn cached_walk_speed(&self) -> Option<f32> {
        match self.sprint {
            Sprint::Sprinting { walk_speed } => Some(walk_speed),
            Sprint::Walking => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_all_clear() {
        let s = ControllerState::new();
        assert!(!s.primary_down());
        assert!(!s.secondary_down());
        assert!(!s.modifier_down());
        assert!(!s.ui_only_mode());
        assert_eq!(s.cached_walk_speed(), None);
    }

    #[test]
    fn chord_reaches_both_in_either_order() {
        let a = ButtonChord::Released
            .press(PointerButton::Primary)
            .press(PointerButton::Secondary);
        let b = ButtonChord::Released
            .press(PointerButton::Secondary)
            .press(PointerButton::Primary);
        assert_eq!(a, ButtonChord::Both);
        assert_eq!(b, ButtonChord::Both);
    }

    #[test]
    fn chord_release_leaves_other_button() {
        let c = ButtonChord::Both.release(PointerButton::Primary);
        assert_eq!(c, ButtonChord::SecondaryOnly);
        assert!(c.is_down(PointerButton::Secondary));
        assert!(!c.is_down(PointerButton::Primary));
    }

    #[test]
    fn chord_transitions_are_idempotent() {
        for p in [false, true] {
            for s in [false, true] {
                let c = ButtonChord::from_flags(p, s);
                let pressed = c.press(PointerButton::Primary);
                assert_eq!(pressed.press(PointerButton::Primary), pressed);
                let released = c.release(PointerButton::Secondary);
                assert_eq!(released.release(PointerButton::Secondary), released);
                assert_eq!(c.primary_down(), p);
                assert_eq!(c.secondary_down(), s);
            }
        }
    }
}
