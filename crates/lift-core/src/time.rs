//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where **1 tick = 1
//! simulated millisecond**.  Door timings are configured in milliseconds
//! and travel in whole seconds per floor, so millisecond ticks keep every
//! duration exact with no floating point anywhere.
//!
//! The clock is *event-driven*: it jumps straight to the tick of the next
//! scheduled timer event rather than advancing uniformly.  Nothing happens
//! between events, so stepping millisecond-by-millisecond would be pure
//! wasted work.  Scheduled durations are authoritative — there is no
//! wall-clock correction.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (1 tick = 1 ms of simulated time).
///
/// Stored as `u64`: at millisecond resolution that is ~585 million years of
/// simulated time before overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's current position in time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.  It only
/// ever moves forward; the event loop calls [`advance_to`][Self::advance_to]
/// with the tick of the event it is about to process.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump forward to `tick`.  A jump to the current tick is a no-op
    /// (several events may share one tick).
    ///
    /// # Panics
    /// Panics in debug mode on an attempt to move backwards — the event
    /// wheel hands out ticks in ascending order, so a backwards jump means
    /// the caller broke that invariant.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        debug_assert!(tick >= self.current_tick, "clock moved backwards");
        self.current_tick = tick;
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0
    }

    /// Elapsed simulated time as whole seconds plus leftover milliseconds.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_s_ms(&self) -> (u64, u32) {
        (self.current_tick.0 / 1_000, (self.current_tick.0 % 1_000) as u32)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, ms) = self.elapsed_s_ms();
        write!(f, "{} ({}.{:03}s)", self.current_tick, s, ms)
    }
}
