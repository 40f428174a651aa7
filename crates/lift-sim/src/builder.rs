//! Fluent builder for constructing a [`BankSim`].

use lift_core::{BankConfig, CoreError, Floor, LiftId, SimClock};
use lift_fleet::{CallQueues, FleetStore, FloorOccupancy};

use crate::{BankSim, SimError, SimResult, TimerWheel};
use crate::buttons::ButtonPanel;

/// Fluent builder for [`BankSim`].
///
/// # Required input
///
/// - [`BankConfig`] — floor/lift counts, timings, floor cap.  Validated in
///   [`build`][Self::build]; an invalid config never produces a simulation.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.initial_floors(v)` | Every lift parked at ground      |
///
/// Building is also the reset mechanism: constructing a new `BankSim` with
/// new counts discards all lift, queue, and counter state from a previous
/// run — no residual state survives.
///
/// # Example
///
/// ```rust,ignore
/// let mut bank = BankBuilder::new(BankConfig::new(8, 3))
///     .initial_floors(vec![Floor(0), Floor(3), Floor(7)])
///     .build()?;
/// ```
pub struct BankBuilder {
    config: BankConfig,
    initial_floors: Option<Vec<Floor>>,
}

impl BankBuilder {
    pub fn new(config: BankConfig) -> Self {
        Self { config, initial_floors: None }
    }

    /// Park each lift at the given floor instead of ground (must be length
    /// `num_lifts`, every floor within range).  Mid-run scenarios in tests
    /// start here.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate inputs and return a ready, idle [`BankSim`] at tick 0.
    pub fn build(self) -> SimResult<BankSim> {
        self.config.validate()?;
        let lift_count = self.config.num_lifts as usize;
        let top = self.config.top_floor();

        let mut fleet = FleetStore::new(lift_count);
        if let Some(floors) = self.initial_floors {
            if floors.len() != lift_count {
                return Err(SimError::LiftCountMismatch {
                    expected: lift_count,
                    got:      floors.len(),
                    what:     "initial floors",
                });
            }
            for (i, &floor) in floors.iter().enumerate() {
                if floor > top {
                    return Err(CoreError::FloorOutOfRange { floor, top }.into());
                }
                fleet.place(LiftId(i as u16), floor);
            }
        }

        Ok(BankSim {
            clock:     SimClock::new(),
            fleet,
            occupancy: FloorOccupancy::new(self.config.floor_count()),
            queues:    CallQueues::new(lift_count),
            wheel:     TimerWheel::new(),
            buttons:   ButtonPanel::new(self.config.floor_count()),
            config:    self.config,
        })
    }
}
