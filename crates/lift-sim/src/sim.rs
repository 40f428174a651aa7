//! The `BankSim` struct and its event loop.

use lift_core::{BankConfig, CallRequest, CoreError, Direction, Floor, LiftId, SimClock, Tick};
use lift_fleet::{CallQueues, FleetStore, FloorOccupancy, LiftPhase};

use crate::{BankObserver, DispatchOutcome, SimResult, TimerEvent, TimerWheel, select_nearest};
use crate::buttons::ButtonPanel;

/// The main simulation runner.
///
/// `BankSim` owns every piece of mutable state — fleet, occupancy claims,
/// per-lift queues, button panel, timer wheel, clock — as one aggregate, so
/// nothing lives in file-scope statics and two banks can coexist (and a
/// rebuild with a new config is just constructing a new value).
///
/// Inbound: [`handle_call`][Self::handle_call].  Outbound: every transition
/// is reported through a [`BankObserver`].  Time: the caller drives it via
/// [`step`][Self::step] / [`advance_to`][Self::advance_to] /
/// [`run_until_idle`][Self::run_until_idle].
///
/// Create via [`BankBuilder`][crate::BankBuilder].
pub struct BankSim {
    /// Global configuration (floor/lift counts, timings, floor cap).
    pub config: BankConfig,

    /// Current simulation time; jumps to event ticks, never backwards.
    pub clock: SimClock,

    /// All lift state, indexed by `LiftId`.
    pub fleet: FleetStore,

    /// Active-cycle claims per floor (dispatch start → door-close release).
    pub occupancy: FloorOccupancy,

    /// Pending overflow calls, one FIFO per lift.
    pub queues: CallQueues,

    /// Scheduled state-machine transitions.
    pub wheel: TimerWheel,

    /// Which call buttons are disabled (duplicate suppression).
    pub buttons: ButtonPanel,
}

impl BankSim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Handle a call request — the inbound message a floor button press
    /// becomes.
    ///
    /// Outcomes, checked in order: duplicate suppressed, queued (all lifts
    /// busy), floor saturated (dropped), or dispatched to the nearest
    /// available lift.
    ///
    /// # Errors
    ///
    /// `CoreError::FloorOutOfRange` if `call.floor` exceeds the configured
    /// top floor.
    pub fn handle_call<O: BankObserver>(
        &mut self,
        call: CallRequest,
        observer: &mut O,
    ) -> SimResult<DispatchOutcome> {
        let top = self.config.top_floor();
        if call.floor > top {
            return Err(CoreError::FloorOutOfRange { floor: call.floor, top }.into());
        }

        // ① A disabled button means a call for this floor/direction is
        //   already in flight.
        if self.buttons.is_disabled(call.floor, call.direction) {
            return Ok(DispatchOutcome::DuplicateSuppressed);
        }

        // ② All lifts busy → overflow queue.  Checked before saturation, so
        //   a busy bank queues even calls to a crowded floor.
        if self.fleet.none_available() {
            let lift = self.queues.enqueue(call);
            return Ok(DispatchOutcome::Queued { lift });
        }

        // ③ Floor cap: lifts mid-cycle bound for the floor plus idle lifts
        //   parked there.
        if self.committed_to(call.floor) >= self.config.max_lifts_per_floor as usize {
            return Ok(DispatchOutcome::FloorSaturated);
        }

        // ④ Nearest available lift.  Availability was established in ②; an
        //   empty selection is unreachable, but queueing is the safe answer.
        let Some(lift) = select_nearest(&self.fleet, call.floor, call.direction) else {
            let lift = self.queues.enqueue(call);
            return Ok(DispatchOutcome::Queued { lift });
        };

        self.buttons.disable(call.floor, call.direction);
        observer.on_button_disabled(self.clock.current_tick, call.floor, call.direction);

        let arrival = self.dispatch_lift(lift, call.floor, Some(call.direction), observer);
        Ok(DispatchOutcome::Dispatched { lift, arrival })
    }

    /// Advance the clock to the next scheduled event and process everything
    /// due at that tick — including events scheduled *for* that tick during
    /// processing (zero-distance moves, drain re-dispatches).
    ///
    /// Returns the tick processed, or `None` when nothing is pending.
    pub fn step<O: BankObserver>(&mut self, observer: &mut O) -> Option<Tick> {
        let next = self.wheel.next_tick()?;
        self.clock.advance_to(next);
        while let Some((_, event)) = self.wheel.pop_due(next) {
            self.process_event(next, event, observer);
        }
        Some(next)
    }

    /// Process every event scheduled at or before `deadline`, then leave the
    /// clock at `deadline`.  Useful for inspecting mid-cycle state.
    pub fn advance_to<O: BankObserver>(&mut self, deadline: Tick, observer: &mut O) {
        while let Some(next) = self.wheel.next_tick() {
            if next > deadline {
                break;
            }
            self.step(observer);
        }
        if deadline > self.clock.current_tick {
            self.clock.advance_to(deadline);
        }
    }

    /// Drain the wheel completely — every in-flight cycle and every queued
    /// call runs to completion.  Returns the final tick.
    ///
    /// Terminates because every event schedules at most one successor and
    /// queues only shrink while the wheel drains.
    pub fn run_until_idle<O: BankObserver>(&mut self, observer: &mut O) -> Tick {
        while self.step(observer).is_some() {}
        self.clock.current_tick
    }

    /// `true` when no cycle is in flight and no call is queued.
    pub fn is_idle(&self) -> bool {
        self.wheel.is_empty() && self.queues.is_empty()
    }

    /// Current simulation tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Lifts bound to `floor`: active-cycle claims plus idle lifts parked
    /// there.  This is the quantity capped by `max_lifts_per_floor`.
    fn committed_to(&self, floor: Floor) -> usize {
        self.occupancy.claims(floor) as usize + self.fleet.idle_at(floor)
    }

    /// Start `lift` toward `target`: claim the floor, enter `Moving`, and
    /// schedule `Arrived`.  Zero distance schedules arrival for the current
    /// tick — the door cycle still runs in full.
    ///
    /// `button` is `Some` for calls dispatched off a live button press and
    /// `None` for queue drains; only the former re-enables a button later.
    fn dispatch_lift<O: BankObserver>(
        &mut self,
        lift: LiftId,
        target: Floor,
        button: Option<Direction>,
        observer: &mut O,
    ) -> Tick {
        let now = self.clock.current_tick;

        let l = &mut self.fleet.lifts[lift.index()];
        debug_assert!(l.is_available(), "dispatched busy lift {lift}");

        let distance = l.current_floor.distance_to(target);
        let travel = self.config.travel_ticks(distance);
        let arrival = now + travel;
        l.phase = LiftPhase::Moving { target, departed: now, arrival, button };

        self.occupancy.claim(target);
        self.wheel.push(arrival, TimerEvent::Arrived { lift });
        observer.on_lift_dispatched(now, lift, target, travel);
        arrival
    }

    /// Apply one timer event.  Each arm is one named transition of the
    /// `Idle → Moving → DoorsOpening → DoorsClosing → Idle` machine.
    fn process_event<O: BankObserver>(&mut self, now: Tick, event: TimerEvent, observer: &mut O) {
        match event {
            // ── Moving → DoorsOpening ─────────────────────────────────────
            TimerEvent::Arrived { lift } => {
                let (target, button) = match self.fleet.lifts[lift.index()].phase {
                    LiftPhase::Moving { target, button, .. } => (target, button),
                    ref phase => {
                        debug_assert!(false, "Arrived for {lift} in phase {phase:?}");
                        return;
                    }
                };

                {
                    let l = &mut self.fleet.lifts[lift.index()];
                    l.current_floor = target;
                    l.phase = LiftPhase::DoorsOpening;
                }
                observer.on_lift_arrived(now, lift, target);

                if let Some(direction) = button {
                    self.buttons.enable(target, direction);
                    observer.on_button_enabled(now, target, direction);
                }

                observer.on_doors_opening(now, lift);
                self.wheel
                    .push(now + self.config.door_ticks(), TimerEvent::CloseDoors { lift });
            }

            // ── DoorsOpening → DoorsClosing ───────────────────────────────
            TimerEvent::CloseDoors { lift } => {
                let l = &mut self.fleet.lifts[lift.index()];
                debug_assert_eq!(l.phase, LiftPhase::DoorsOpening);
                l.phase = LiftPhase::DoorsClosing;
                self.wheel
                    .push(now + self.config.door_ticks(), TimerEvent::DoorsClosed { lift });
            }

            // ── DoorsClosing → Idle, then drain ───────────────────────────
            TimerEvent::DoorsClosed { lift } => {
                let floor = {
                    let l = &mut self.fleet.lifts[lift.index()];
                    debug_assert_eq!(l.phase, LiftPhase::DoorsClosing);
                    l.phase = LiftPhase::Idle;
                    l.current_floor
                };
                observer.on_doors_closed(now, lift);
                self.occupancy.release(floor);

                // Deferred re-dispatch: the queue is lift-specific, so this
                // bypasses nearest-lift selection and the saturation check.
                if let Some(call) = self.queues.pop_front(lift) {
                    self.dispatch_lift(lift, call.floor, None, observer);
                }
            }
        }
    }
}
