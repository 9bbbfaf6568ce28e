use std::collections::{BTreeMap, BTreeSet};

use crate::action::{AxisName, InputEvent};
use crate::bindings::{InputBindings, Key};

/// Turns raw key and analog reports into per-frame [`InputEvent`]s.
///
/// Button edges are queued as they arrive. At the end of a frame
/// [`InputMapper::frame_events`] drains those edges and appends one value for
/// every bound axis, zero included, so consumers see a continuous axis.
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: InputBindings,
    held: BTreeSet<Key>,
    analog: BTreeMap<Key, f32>,
    pending: Vec<InputEvent>,
}

impl InputMapper {
    pub fn new(bindings: InputBindings) -> Self {
        Self {
            bindings,
            held: BTreeSet::new(),
            analog: BTreeMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Digital key went down. Auto-repeat of an already held key is ignored.
    pub fn key_down(&mut self, key: Key) {
        if key.is_analog() {
            tracing::warn!(?key, "key_down on analog source ignored");
            return;
        }
        if !self.held.insert(key) {
            return;
        }
        for action in self.bindings.actions_for(key) {
            self.pending.push(InputEvent::Pressed(action));
        }
    }

    /// Digital key went up. Releasing a key that is not held is ignored.
    pub fn key_up(&mut self, key: Key) {
        if !self.held.remove(&key) {
            return;
        }
        for action in self.bindings.actions_for(key) {
            self.pending.push(InputEvent::Released(action));
        }
    }

    /// Analog report. Relative sources accumulate until the frame ends;
    /// absolute sources replace their previous position. Non-finite values
    /// are dropped.
    pub fn analog(&mut self, key: Key, value: f32) {
        if !key.is_analog() {
            tracing::warn!(?key, "analog report on digital key ignored");
            return;
        }
        if !value.is_finite() {
            tracing::warn!(?key, value, "non-finite analog report ignored");
            return;
        }
        if key.is_relative() {
            *self.analog.entry(key).or_insert(0.0) += value;
        } else {
            self.analog.insert(key, value);
        }
    }

    /// Current value of one axis from held keys and analog state.
    pub fn axis_value(&self, axis: AxisName) -> f32 {
        self.bindings
            .mappings_for(axis)
            .map(|m| {
                if m.key.is_analog() {
                    self.analog.get(&m.key).copied().unwrap_or(0.0) * m.scale
                } else if self.held.contains(&m.key) {
                    m.scale
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Drain this frame's events: queued edges first, then bound axes in
    /// [`AxisName::ALL`] order. Relative analog deltas reset afterwards.
    pub fn frame_events(&mut self) -> Vec<InputEvent> {
        let mut events = std::mem::take(&mut self.pending);
        for axis in AxisName::ALL {
            if self.bindings.mappings_for(axis).next().is_some() {
                events.push(InputEvent::Axis(axis, self.axis_value(axis)));
            }
        }
        self.analog.retain(|key, _| !key.is_relative());
        events
    }

    /// Release everything, queuing release edges for held keys. Used when the
    /// window loses focus.
    pub fn release_all(&mut self) {
        let held: Vec<Key> = self.held.iter().copied().collect();
        for key in held {
            self.key_up(key);
        }
        self.analog.clear();
    }
}
