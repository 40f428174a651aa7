//! Call-button disable state.

use lift_core::{Direction, Floor};

/// Tracks which floor buttons are currently disabled.
///
/// A button is disabled when its call is dispatched and re-enabled when the
/// dispatched lift arrives; a press on a disabled button is the duplicate
/// the dispatcher suppresses.  The panel holds only the suppression state —
/// rendering, and which buttons physically exist on the end floors, are
/// presentation concerns.
#[derive(Debug, Clone)]
pub struct ButtonPanel {
    /// `[up, down]` disabled flags per floor, indexed by `Direction::index`.
    disabled: Vec<[bool; 2]>,
}

impl ButtonPanel {
    /// All buttons enabled, for a building with `floor_count` floors.
    pub fn new(floor_count: usize) -> Self {
        Self { disabled: vec![[false; 2]; floor_count] }
    }

    /// `true` if a call for (`floor`, `direction`) is already in flight.
    #[inline]
    pub fn is_disabled(&self, floor: Floor, direction: Direction) -> bool {
        self.disabled[floor.index()][direction.index()]
    }

    pub fn disable(&mut self, floor: Floor, direction: Direction) {
        self.disabled[floor.index()][direction.index()] = true;
    }

    pub fn enable(&mut self, floor: Floor, direction: Direction) {
        self.disabled[floor.index()][direction.index()] = false;
    }
}
