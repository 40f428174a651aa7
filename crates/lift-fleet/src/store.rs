//! The `FleetStore` — every lift in the bank, indexed by `LiftId`.

use lift_core::{Floor, LiftId};

use crate::{FleetError, FleetResult, Lift, LiftPhase};

/// Owns the lift collection.  The `lifts` vector is always length
/// `lift_count` and `LiftId` is the index into it.
///
/// Internal callers (the scheduler) index directly after validating IDs once
/// at the boundary; the fallible [`lift`][Self::lift] accessor is for
/// external callers holding IDs of unknown provenance.
#[derive(Debug, Clone)]
pub struct FleetStore {
    /// Per-lift state, indexed by `LiftId`.
    pub lifts: Vec<Lift>,
}

impl FleetStore {
    /// A fleet of `count` idle lifts, all parked at ground.
    pub fn new(count: usize) -> Self {
        let lifts = (0..count)
            .map(|i| Lift::parked(LiftId(i as u16), Floor::GROUND))
            .collect();
        Self { lifts }
    }

    /// Number of lifts in the bank.
    #[inline]
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// Fallible lookup for externally supplied IDs.
    pub fn lift(&self, id: LiftId) -> FleetResult<&Lift> {
        self.lifts.get(id.index()).ok_or(FleetError::UnknownLift(id))
    }

    /// Iterate all lifts in `LiftId` order.
    pub fn iter(&self) -> impl Iterator<Item = &Lift> {
        self.lifts.iter()
    }

    /// Iterate the lifts currently available for dispatch, in `LiftId` order.
    /// Ascending order is what makes "first found" the lowest-id tie-break.
    pub fn available(&self) -> impl Iterator<Item = &Lift> {
        self.lifts.iter().filter(|l| l.is_available())
    }

    /// `true` if no lift can take a new call right now.
    pub fn none_available(&self) -> bool {
        self.available().next().is_none()
    }

    /// Number of idle lifts parked at `floor`.  Lifts mid-cycle are counted
    /// by `FloorOccupancy` instead; together the two give the saturation
    /// total for a floor.
    pub fn idle_at(&self, floor: Floor) -> usize {
        self.lifts
            .iter()
            .filter(|l| l.is_available() && l.current_floor == floor)
            .count()
    }

    /// Park `lift` at `floor` (initial placement or move completion).
    /// The caller owns the phase transition.
    pub fn place(&mut self, lift: LiftId, floor: Floor) {
        let l = &mut self.lifts[lift.index()];
        l.current_floor = floor;
        l.phase = LiftPhase::Idle;
    }
}
