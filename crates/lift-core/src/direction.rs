//! Travel direction shared by call buttons and dispatch tie-breaking.

use crate::Floor;

/// The direction of a call — which button the user pressed.
///
/// A call's direction comes from the button, not from any floor arithmetic;
/// [`Direction::of_travel`] is the separate, derived notion used only when
/// tie-breaking nearest-lift selection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The direction a lift at `from` would travel to reach `to`.
    ///
    /// A zero-distance move counts as `Down`.
    #[inline]
    pub fn of_travel(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// Stable index for two-slot per-floor arrays (up button, down button).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
        }
    }

    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
