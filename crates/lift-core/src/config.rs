//! Bank-wide configuration.

use crate::{CoreError, CoreResult, Floor};

/// Top-level simulation configuration.
///
/// Typically constructed in code or loaded from a JSON/TOML file by the
/// application crate (with the `serde` feature) and handed to the builder.
/// Re-building a simulation with a new `BankConfig` discards all prior lift,
/// queue, and counter state — there is no partial re-configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankConfig {
    /// Floors above ground.  The building has floors `0..=num_floors`, so
    /// the top floor index equals this value.
    pub num_floors: u16,

    /// Number of lifts in the bank.
    pub num_lifts: u16,

    /// Travel time per floor of distance, in whole seconds.  Default: 2.
    pub seconds_per_floor: u32,

    /// Duration of each door phase (opening dwell and closing), in
    /// milliseconds.  A full door cycle takes twice this.  Default: 1600.
    pub door_operation_ms: u64,

    /// Hard cap on lifts en route to or stopped at any single floor.
    /// Default: 2.
    pub max_lifts_per_floor: u16,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            num_floors:          5,
            num_lifts:           2,
            seconds_per_floor:   2,
            door_operation_ms:   1_600,
            max_lifts_per_floor: 2,
        }
    }
}

impl BankConfig {
    /// A config with the default timings and the given building shape.
    pub fn new(num_floors: u16, num_lifts: u16) -> Self {
        Self { num_floors, num_lifts, ..Self::default() }
    }

    /// Check every parameter is positive before the simulation starts.
    ///
    /// The whole struct is checked, not just the user-facing counts, so a
    /// config loaded from a file gets the same treatment as one built in
    /// code.
    pub fn validate(&self) -> CoreResult<()> {
        fn positive(value: u64, what: &str) -> CoreResult<()> {
            if value == 0 {
                return Err(CoreError::Config(format!("{what} must be positive")));
            }
            Ok(())
        }
        positive(self.num_floors as u64, "num_floors")?;
        positive(self.num_lifts as u64, "num_lifts")?;
        positive(self.seconds_per_floor as u64, "seconds_per_floor")?;
        positive(self.door_operation_ms, "door_operation_ms")?;
        positive(self.max_lifts_per_floor as u64, "max_lifts_per_floor")?;
        Ok(())
    }

    /// The highest serviceable floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// Total number of floors including ground.
    #[inline]
    pub fn floor_count(&self) -> usize {
        self.num_floors as usize + 1
    }

    /// Travel duration in ticks for a move spanning `distance` floors.
    ///
    /// Zero distance yields zero ticks — such a dispatch still happens and
    /// still runs its door cycle; only the travel is instantaneous.
    #[inline]
    pub fn travel_ticks(&self, distance: u16) -> u64 {
        distance as u64 * self.seconds_per_floor as u64 * 1_000
    }

    /// Duration in ticks of one door phase (open dwell, or closing).
    #[inline]
    pub fn door_ticks(&self) -> u64 {
        self.door_operation_ms
    }
}
