//! Nearest-lift selection and the dispatch outcome type.

use lift_core::{Direction, Floor, LiftId, Tick};
use lift_fleet::FleetStore;

/// What became of a call handed to [`BankSim::handle_call`][crate::BankSim].
///
/// Only the first variant starts a lift moving; the rest are non-fatal.
/// None of them leave the simulation in a bad state — it stays interactive
/// after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A lift was selected and is on its way; `arrival` is the scheduled
    /// move-completion tick.
    Dispatched { lift: LiftId, arrival: Tick },

    /// Every lift was busy; the call was appended to `lift`'s queue and will
    /// be dispatched automatically when that lift goes idle.
    Queued { lift: LiftId },

    /// The button for this floor/direction is already disabled — a call is
    /// in flight.  Silently ignored, no state change.
    DuplicateSuppressed,

    /// The target floor already has `max_lifts_per_floor` lifts bound to it.
    /// Dropped outright, not queued.
    FloorSaturated,
}

/// Pick the nearest available lift for a call to `target` going `direction`.
///
/// Rule: minimize `|target − current_floor|`; on a distance tie prefer a
/// lift whose implied travel direction (up iff `target > current`) matches
/// the requested direction; on a further tie take the lowest `LiftId`.
///
/// Returns `None` only when no lift is available.
pub fn select_nearest(fleet: &FleetStore, target: Floor, direction: Direction) -> Option<LiftId> {
    let mut best: Option<(LiftId, u16, bool)> = None;

    // Ascending id order; replace only on a strict improvement, so the
    // lowest id wins full ties.
    for lift in fleet.available() {
        let distance = target.distance_to(lift.current_floor);
        let matches_dir = Direction::of_travel(lift.current_floor, target) == direction;

        let better = match best {
            None => true,
            Some((_, best_dist, best_match)) => {
                distance < best_dist || (distance == best_dist && matches_dir && !best_match)
            }
        };
        if better {
            best = Some((lift.id, distance, matches_dir));
        }
    }

    best.map(|(id, _, _)| id)
}
