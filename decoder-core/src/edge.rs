//! Debouncing edge detector for the key input

use crate::clock::expired;
use crate::types::{Edge, Tick, DEBOUNCE_TICKS};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyState {
    Released,
    Pressed,
    Debouncing { deadline: Tick },
}

/// Edge detector state machine.
///
/// Samples the raw key level once per poll and reports debounced press and
/// release transitions. A press is reported immediately; a release is only
/// reported once the line has stayed up for the whole debounce interval, so
/// contact bounce never surfaces as a spurious edge pair.
pub struct EdgeDetector {
    state: KeyState,
    debounce: Tick,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self::with_debounce(DEBOUNCE_TICKS)
    }

    pub const fn with_debounce(debounce: Tick) -> Self {
        Self {
            state: KeyState::Released,
            debounce,
        }
    }

    /// Feed one raw key sample, returning the detected edge, if any.
    pub fn sample(&mut self, key_down: bool, now: Tick) -> Option<Edge> {
        match self.state {
            KeyState::Released => {
                if key_down {
                    self.state = KeyState::Pressed;
                    return Some(Edge::Fall);
                }
            }
            KeyState::Pressed => {
                if !key_down {
                    self.state = KeyState::Debouncing {
                        deadline: now.wrapping_add(self.debounce),
                    };
                }
            }
            KeyState::Debouncing { deadline } => {
                if key_down {
                    // Bounce: the contact closed again before the deadline.
                    self.state = KeyState::Pressed;
                } else if expired(now, deadline) {
                    self.state = KeyState::Released;
                    return Some(Edge::Rise);
                }
            }
        }
        None
    }

    /// True while the key is logically down (including the debounce window).
    ///
    /// The caller mirrors this on the signal indicator.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, KeyState::Released)
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}
