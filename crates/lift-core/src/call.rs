//! The inbound call-request message.

use crate::{Direction, Floor};

/// A user request for service at a floor in a given direction.
///
/// This is the explicit message type consumed by the dispatcher — the input
/// seam where a presentation layer (or a test) injects button presses.
///
/// Lifecycle: created on user action; either immediately dispatched, appended
/// to exactly one lift's queue, or dropped (duplicate / saturated floor);
/// destroyed once consumed by a dispatch attempt.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRequest {
    /// The floor the button was pressed on.
    pub floor: Floor,
    /// Which button was pressed.
    pub direction: Direction,
}

impl CallRequest {
    pub fn new(floor: Floor, direction: Direction) -> Self {
        Self { floor, direction }
    }
}

impl std::fmt::Display for CallRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.floor, self.direction)
    }
}
