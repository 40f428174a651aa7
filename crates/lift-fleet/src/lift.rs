//! Per-lift cycle state.

use lift_core::{Direction, Floor, LiftId, Tick};

/// Where a lift is in its move/door cycle.
///
/// The full cycle is `Idle → Moving → DoorsOpening → DoorsClosing → Idle`;
/// every transition is driven by a named timer event in `lift-sim`, never by
/// ad-hoc flag flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiftPhase {
    /// Parked with doors shut; the only phase in which the lift is available
    /// for dispatch.
    Idle,

    /// Travelling toward `target`.
    Moving {
        target: Floor,
        /// Tick at which the move began.
        departed: Tick,
        /// Tick at which the lift will arrive (authoritative, pre-computed).
        arrival: Tick,
        /// The originating call button, re-enabled on arrival.  `None` for
        /// dispatches drained from the queue — those carried no live button.
        button: Option<Direction>,
    },

    /// Doors opening, then dwelling open.
    DoorsOpening,

    /// Doors closing.  Ends the cycle; the occupancy claim is released and
    /// the queue drained when this phase completes.
    DoorsClosing,
}

/// One elevator car: identity, position, and cycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lift {
    /// Stable 0-based index, immutable after creation.
    pub id: LiftId,

    /// The floor the lift is at (or departed from, while `Moving`).  Updated
    /// atomically at move completion only.
    pub current_floor: Floor,

    /// Current position in the move/door cycle.
    pub phase: LiftPhase,
}

impl Lift {
    /// A new idle lift parked at `floor`.
    pub fn parked(id: LiftId, floor: Floor) -> Self {
        Self { id, current_floor: floor, phase: LiftPhase::Idle }
    }

    /// `true` from dispatch until arrival.
    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, LiftPhase::Moving { .. })
    }

    /// `true` from door-open start until door-close completion.
    #[inline]
    pub fn is_door_operating(&self) -> bool {
        matches!(self.phase, LiftPhase::DoorsOpening | LiftPhase::DoorsClosing)
    }

    /// A lift is available iff it is neither moving nor operating its doors.
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self.phase, LiftPhase::Idle)
    }

    /// The floor this lift is bound to: its move target while in a cycle,
    /// otherwise where it is parked.  This is the quantity floor-saturation
    /// counts.
    #[inline]
    pub fn committed_floor(&self) -> Floor {
        match self.phase {
            LiftPhase::Moving { target, .. } => target,
            _ => self.current_floor,
        }
    }

    /// Fraction of the current move completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` unless the lift is `Moving`.  Presentation-only: the
    /// model itself never interpolates position.
    pub fn progress(&self, now: Tick) -> f32 {
        match self.phase {
            LiftPhase::Moving { departed, arrival, .. } if arrival > departed => {
                let elapsed = now.0.saturating_sub(departed.0) as f32;
                let total = (arrival.0 - departed.0) as f32;
                (elapsed / total).min(1.0)
            }
            _ => 1.0,
        }
    }
}
