//! Simulation observer trait — the outbound seam a presentation layer
//! subscribes to.

use lift_core::{Direction, Floor, LiftId, Tick};

/// Callbacks invoked by [`BankSim`][crate::BankSim] at every externally
/// visible transition.
///
/// Each hook corresponds to one visual effect (start a translate animation,
/// swap a door class, toggle a button).  All methods have default no-op
/// implementations so implementors only override what they care about, and
/// every hook carries the current tick so renderers and loggers need no
/// side-channel clock.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl BankObserver for ProgressPrinter {
///     fn on_lift_arrived(&mut self, now: Tick, lift: LiftId, floor: Floor) {
///         println!("{now}: {lift} arrived at {floor}");
///     }
/// }
/// ```
pub trait BankObserver {
    /// A lift was assigned a call and began moving.  `travel_ticks` is the
    /// full move duration (zero for a call to the lift's own floor) so the
    /// renderer can set its animation length.
    fn on_lift_dispatched(&mut self, _now: Tick, _lift: LiftId, _target: Floor, _travel_ticks: u64) {}

    /// The lift reached `floor`; its model position just updated.
    fn on_lift_arrived(&mut self, _now: Tick, _lift: LiftId, _floor: Floor) {}

    /// Doors began opening (fires immediately after arrival).
    fn on_doors_opening(&mut self, _now: Tick, _lift: LiftId) {}

    /// Doors finished closing; the lift is idle again.
    fn on_doors_closed(&mut self, _now: Tick, _lift: LiftId) {}

    /// The originating call button should be rendered disabled.
    fn on_button_disabled(&mut self, _now: Tick, _floor: Floor, _direction: Direction) {}

    /// The call button should be re-enabled (its lift arrived).
    fn on_button_enabled(&mut self, _now: Tick, _floor: Floor, _direction: Direction) {}
}

/// A [`BankObserver`] that does nothing.  Use when driving the simulation
/// without a presentation layer attached.
pub struct NoopObserver;

impl BankObserver for NoopObserver {}
