//! Timer events — the named transitions of the per-lift state machine.

use lift_core::LiftId;

/// A scheduled state-machine transition, consumed by the event loop.
///
/// Each variant is one of the formerly-anonymous timeout callbacks, named
/// after what it does.  All three refer to a lift mid-cycle; the scheduler
/// asserts the lift is in the expected phase when the event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Move completion: the lift reaches its target floor and its doors
    /// begin opening.
    Arrived { lift: LiftId },

    /// The open dwell elapsed: doors reverse and begin closing.
    CloseDoors { lift: LiftId },

    /// Door closing finished: the lift returns to idle, the floor claim is
    /// released, and the lift's queue is drained.
    DoorsClosed { lift: LiftId },
}

impl TimerEvent {
    /// The lift this event belongs to.
    pub fn lift(self) -> LiftId {
        match self {
            TimerEvent::Arrived { lift }
            | TimerEvent::CloseDoors { lift }
            | TimerEvent::DoorsClosed { lift } => lift,
        }
    }
}
