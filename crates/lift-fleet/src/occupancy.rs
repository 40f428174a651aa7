//! Per-floor occupancy claims.

use lift_core::Floor;

/// Counts lifts currently in an active move/door cycle bound for each floor.
///
/// A claim is taken when a lift is dispatched toward a floor and released
/// when its door cycle completes there.  Idle lifts parked at a floor are
/// *not* claims — `FleetStore::idle_at` counts those — so a floor's
/// saturation total is `claims + idle parked`, checked by the dispatcher
/// before any claim is taken.  Consequently `claim` itself never refuses:
/// the cap lives at the dispatch decision, keeping counter mutation
/// confined to the scheduler.
#[derive(Debug, Clone)]
pub struct FloorOccupancy {
    /// Active-cycle claim count, indexed by floor.
    counts: Vec<u16>,
}

impl FloorOccupancy {
    /// All-zero counters for a building with `floor_count` floors.
    pub fn new(floor_count: usize) -> Self {
        Self { counts: vec![0; floor_count] }
    }

    /// Record a dispatch toward `floor`.
    pub fn claim(&mut self, floor: Floor) {
        self.counts[floor.index()] += 1;
    }

    /// Release the claim on `floor` after a door cycle completes there.
    ///
    /// # Panics
    /// Panics in debug mode if no claim is held — a release without a prior
    /// claim means the scheduler's pairing invariant broke.
    pub fn release(&mut self, floor: Floor) {
        debug_assert!(self.counts[floor.index()] > 0, "release without claim on {floor}");
        self.counts[floor.index()] -= 1;
    }

    /// Active-cycle claims currently held on `floor`.
    #[inline]
    pub fn claims(&self, floor: Floor) -> u16 {
        self.counts[floor.index()]
    }

    /// Total claims across all floors (equals the number of lifts mid-cycle).
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }
}
