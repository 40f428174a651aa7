//! Integration tests for lift-sim.

use lift_core::{BankConfig, CallRequest, Direction, Floor, LiftId, Tick};

use crate::{BankBuilder, BankObserver, BankSim, DispatchOutcome, NoopObserver, select_nearest};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Default timings: 2 s per floor (2 000 ticks), 1 600 ticks per door phase,
/// floor cap 2.
fn config(num_floors: u16, num_lifts: u16) -> BankConfig {
    BankConfig::new(num_floors, num_lifts)
}

fn bank(num_floors: u16, num_lifts: u16) -> BankSim {
    BankBuilder::new(config(num_floors, num_lifts)).build().unwrap()
}

/// A bank with one lift parked at each given floor.
fn bank_at(num_floors: u16, floors: &[u16]) -> BankSim {
    BankBuilder::new(config(num_floors, floors.len() as u16))
        .initial_floors(floors.iter().map(|&f| Floor(f)).collect())
        .build()
        .unwrap()
}

fn up(floor: u16) -> CallRequest {
    CallRequest::new(Floor(floor), Direction::Up)
}

fn down(floor: u16) -> CallRequest {
    CallRequest::new(Floor(floor), Direction::Down)
}

/// Observer that records every hook invocation in order.
#[derive(Debug, Clone, PartialEq)]
enum Ev {
    Dispatched(LiftId, Floor, u64),
    Arrived(LiftId, Floor),
    DoorsOpening(LiftId),
    DoorsClosed(LiftId),
    ButtonDisabled(Floor, Direction),
    ButtonEnabled(Floor, Direction),
}

#[derive(Default)]
struct Recorder {
    events: Vec<(Tick, Ev)>,
}

impl Recorder {
    /// Positions of all events matching `pred`, in firing order.
    fn find<F: Fn(&Ev) -> bool>(&self, pred: F) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, (_, e))| pred(e))
            .map(|(i, _)| i)
            .collect()
    }
}

impl BankObserver for Recorder {
    fn on_lift_dispatched(&mut self, now: Tick, lift: LiftId, target: Floor, travel: u64) {
        self.events.push((now, Ev::Dispatched(lift, target, travel)));
    }
    fn on_lift_arrived(&mut self, now: Tick, lift: LiftId, floor: Floor) {
        self.events.push((now, Ev::Arrived(lift, floor)));
    }
    fn on_doors_opening(&mut self, now: Tick, lift: LiftId) {
        self.events.push((now, Ev::DoorsOpening(lift)));
    }
    fn on_doors_closed(&mut self, now: Tick, lift: LiftId) {
        self.events.push((now, Ev::DoorsClosed(lift)));
    }
    fn on_button_disabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.events.push((now, Ev::ButtonDisabled(floor, direction)));
    }
    fn on_button_enabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.events.push((now, Ev::ButtonEnabled(floor, direction)));
    }
}

// ── Builder & initialization ──────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn fresh_bank_parks_everything_at_ground() {
        let bank = bank(8, 3);
        for lift in bank.fleet.iter() {
            assert_eq!(lift.current_floor, Floor::GROUND);
            assert!(lift.is_available());
        }
        assert!(bank.is_idle());
        assert_eq!(bank.now(), Tick::ZERO);
    }

    #[test]
    fn invalid_config_never_builds() {
        assert!(BankBuilder::new(config(0, 3)).build().is_err());
        assert!(BankBuilder::new(config(8, 0)).build().is_err());
        let cfg = BankConfig { seconds_per_floor: 0, ..config(8, 3) };
        assert!(BankBuilder::new(cfg).build().is_err());
    }

    #[test]
    fn initial_floor_count_mismatch_errors() {
        let result = BankBuilder::new(config(8, 3))
            .initial_floors(vec![Floor(1), Floor(2)]) // wrong length
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn initial_floor_out_of_range_errors() {
        let result = BankBuilder::new(config(5, 1))
            .initial_floors(vec![Floor(6)])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rebuild_discards_all_prior_state() {
        let mut first = bank(8, 2);
        first.handle_call(up(5), &mut NoopObserver).unwrap();
        first.handle_call(up(3), &mut NoopObserver).unwrap();
        first.run_until_idle(&mut NoopObserver);
        assert_ne!(first.fleet.lifts[0].current_floor, Floor::GROUND);

        // Re-running setup with new counts is a fresh build: nothing from
        // the first run is observable in the second.
        let second = bank(4, 3);
        assert_eq!(second.fleet.len(), 3);
        for lift in second.fleet.iter() {
            assert_eq!(lift.current_floor, Floor::GROUND);
            assert!(lift.is_available());
        }
        assert_eq!(second.queues.total_pending(), 0);
        assert_eq!(second.occupancy.total(), 0);
        assert_eq!(second.now(), Tick::ZERO);
    }
}

// ── Nearest-lift selection ────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn nearest_by_distance() {
        // Lifts at 3 and 7, call to 5: distance 2 beats distance 4.
        let bank = bank_at(10, &[3, 7]);
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Up), Some(LiftId(0)));
    }

    #[test]
    fn distance_tie_prefers_matching_direction() {
        // Lifts at 2 and 8, call to 5 going up: both distance 3; the lift at
        // 2 would travel up, the lift at 8 down.
        let bank = bank_at(10, &[2, 8]);
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Up), Some(LiftId(0)));
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Down), Some(LiftId(1)));
    }

    #[test]
    fn direction_tie_break_is_order_independent() {
        // Same tie with the matching lift listed second.
        let bank = bank_at(10, &[8, 2]);
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Up), Some(LiftId(1)));
    }

    #[test]
    fn full_tie_takes_lowest_id() {
        // Both lifts at 3: equal distance, equal implied direction.
        let bank = bank_at(10, &[3, 3]);
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Up), Some(LiftId(0)));
    }

    #[test]
    fn busy_lifts_are_not_candidates() {
        let mut bank = bank_at(10, &[4, 9]);
        bank.handle_call(up(5), &mut NoopObserver).unwrap(); // takes lift 0
        assert_eq!(select_nearest(&bank.fleet, Floor(5), Direction::Up), Some(LiftId(1)));
    }

    #[test]
    fn no_available_lift_selects_nothing() {
        let mut bank = bank_at(10, &[0]);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        assert_eq!(select_nearest(&bank.fleet, Floor(2), Direction::Up), None);
    }
}

// ── Dispatch outcomes ─────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn dispatch_schedules_arrival_by_distance() {
        let mut bank = bank(8, 1);
        let outcome = bank.handle_call(up(3), &mut NoopObserver).unwrap();
        // 3 floors × 2 s/floor = 6 000 ticks.
        assert_eq!(
            outcome,
            DispatchOutcome::Dispatched { lift: LiftId(0), arrival: Tick(6_000) }
        );
        assert!(bank.fleet.lifts[0].is_moving());
    }

    #[test]
    fn out_of_range_floor_is_an_error() {
        let mut bank = bank(5, 1);
        assert!(bank.handle_call(up(6), &mut NoopObserver).is_err());
        // The bank is untouched.
        assert!(bank.is_idle());
    }

    #[test]
    fn duplicate_call_is_suppressed_until_arrival() {
        let mut bank = bank(8, 2);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        assert_eq!(
            bank.handle_call(up(5), &mut NoopObserver).unwrap(),
            DispatchOutcome::DuplicateSuppressed
        );
        // A different direction on the same floor is a different button.
        assert!(matches!(
            bank.handle_call(down(5), &mut NoopObserver).unwrap(),
            DispatchOutcome::Dispatched { .. }
        ));
    }

    #[test]
    fn button_reenabled_on_arrival_allows_new_call() {
        let mut bank = bank(8, 2);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        // Arrival is at 10 000; just after it the button works again even
        // though the doors are still cycling.
        bank.advance_to(Tick(10_001), &mut NoopObserver);
        assert!(!bank.buttons.is_disabled(Floor(5), Direction::Up));
        // One claim still held on 5 (lift 0 mid-door), so the repeat press
        // goes to the second lift rather than being suppressed.
        assert!(matches!(
            bank.handle_call(up(5), &mut NoopObserver).unwrap(),
            DispatchOutcome::Dispatched { lift: LiftId(1), .. }
        ));
    }

    #[test]
    fn third_call_to_claimed_floor_is_dropped_not_queued() {
        let mut bank = bank_at(10, &[0, 1, 2]);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        bank.handle_call(down(5), &mut NoopObserver).unwrap();
        assert_eq!(bank.occupancy.claims(Floor(5)), 2);

        // Third concurrent call targeting the claimed floor: lift 2 is still
        // available, so this is saturation, not queueing.
        let outcome = bank.handle_call(up(5), &mut NoopObserver).unwrap();
        assert_eq!(outcome, DispatchOutcome::FloorSaturated);
        assert_eq!(bank.queues.total_pending(), 0);
        assert!(bank.fleet.lifts[0].is_available());
    }

    #[test]
    fn parked_lifts_count_toward_saturation() {
        // Two idle lifts already on floor 5; a third lift sits at ground.
        let mut bank = bank_at(10, &[5, 5, 0]);
        let outcome = bank.handle_call(up(5), &mut NoopObserver).unwrap();
        assert_eq!(outcome, DispatchOutcome::FloorSaturated);
    }

    #[test]
    fn saturation_lifts_after_cycle_completes() {
        let mut bank = bank_at(10, &[0, 1, 2]);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        bank.handle_call(down(5), &mut NoopObserver).unwrap();
        bank.run_until_idle(&mut NoopObserver);
        // Claims released, but two idle lifts are now parked on 5 — the
        // floor stays saturated by occupancy.
        assert_eq!(bank.occupancy.claims(Floor(5)), 0);
        assert_eq!(bank.fleet.idle_at(Floor(5)), 2);
        assert_eq!(
            bank.handle_call(up(5), &mut NoopObserver).unwrap(),
            DispatchOutcome::FloorSaturated
        );
    }
}

// ── Move/door cycle timing ────────────────────────────────────────────────────

#[cfg(test)]
mod cycle_tests {
    use super::*;
    use lift_fleet::LiftPhase;

    #[test]
    fn full_cycle_timeline() {
        let mut bank = bank(8, 1);
        let mut rec = Recorder::default();
        bank.handle_call(up(3), &mut rec).unwrap();

        // Mid-flight: model floor unchanged, interpolation at 50%.
        bank.advance_to(Tick(3_000), &mut rec);
        assert!(bank.fleet.lifts[0].is_moving());
        assert_eq!(bank.fleet.lifts[0].current_floor, Floor(0));
        assert_eq!(bank.fleet.lifts[0].progress(Tick(3_000)), 0.5);

        // Arrival at 6 000, doors reverse at 7 600, shut at 9 200.
        bank.advance_to(Tick(6_500), &mut rec);
        assert_eq!(bank.fleet.lifts[0].current_floor, Floor(3));
        assert_eq!(bank.fleet.lifts[0].phase, LiftPhase::DoorsOpening);

        bank.advance_to(Tick(8_000), &mut rec);
        assert_eq!(bank.fleet.lifts[0].phase, LiftPhase::DoorsClosing);

        let end = bank.run_until_idle(&mut rec);
        assert_eq!(end, Tick(9_200));
        assert!(bank.fleet.lifts[0].is_available());

        let expected = vec![
            (Tick(0),     Ev::ButtonDisabled(Floor(3), Direction::Up)),
            (Tick(0),     Ev::Dispatched(LiftId(0), Floor(3), 6_000)),
            (Tick(6_000), Ev::Arrived(LiftId(0), Floor(3))),
            (Tick(6_000), Ev::ButtonEnabled(Floor(3), Direction::Up)),
            (Tick(6_000), Ev::DoorsOpening(LiftId(0))),
            (Tick(9_200), Ev::DoorsClosed(LiftId(0))),
        ];
        assert_eq!(rec.events, expected);
    }

    #[test]
    fn zero_distance_call_still_runs_full_door_cycle() {
        let mut bank = bank(8, 1);
        let mut rec = Recorder::default();
        let outcome = bank.handle_call(down(0), &mut rec).unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Dispatched { lift: LiftId(0), arrival: Tick(0) }
        );

        let end = bank.run_until_idle(&mut rec);
        assert_eq!(end, Tick(3_200)); // two door phases, no travel
        assert_eq!(rec.find(|e| matches!(e, Ev::DoorsOpening(_))).len(), 1);
        assert_eq!(rec.find(|e| matches!(e, Ev::DoorsClosed(_))).len(), 1);
        // Occupancy claim released at door close.
        assert_eq!(bank.occupancy.claims(Floor(0)), 0);
        assert!(bank.is_idle());
    }

    #[test]
    fn per_lift_event_order_is_total() {
        let mut bank = bank(8, 2);
        let mut rec = Recorder::default();
        bank.handle_call(up(5), &mut rec).unwrap();
        bank.handle_call(up(2), &mut rec).unwrap();
        bank.run_until_idle(&mut rec);

        for lift in [LiftId(0), LiftId(1)] {
            let dispatched = rec.find(|e| matches!(e, Ev::Dispatched(l, ..) if *l == lift));
            let arrived = rec.find(|e| matches!(e, Ev::Arrived(l, _) if *l == lift));
            let opened = rec.find(|e| matches!(e, Ev::DoorsOpening(l) if *l == lift));
            let closed = rec.find(|e| matches!(e, Ev::DoorsClosed(l) if *l == lift));
            assert!(dispatched[0] < arrived[0]);
            assert!(arrived[0] < opened[0]);
            assert!(opened[0] < closed[0]);
        }
    }
}

// ── Busy queueing & drain ─────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn busy_bank_queues_and_drains_automatically() {
        let mut bank = bank(8, 1);
        let mut rec = Recorder::default();
        bank.handle_call(up(5), &mut rec).unwrap();

        let outcome = bank.handle_call(down(2), &mut rec).unwrap();
        assert_eq!(outcome, DispatchOutcome::Queued { lift: LiftId(0) });
        assert_eq!(bank.queues.len(LiftId(0)), 1);

        // No further user action: the drain at door close dispatches it.
        bank.run_until_idle(&mut rec);
        assert_eq!(bank.queues.total_pending(), 0);
        assert_eq!(bank.fleet.lifts[0].current_floor, Floor(2));

        // The first cycle fully completes before the queued dispatch fires.
        let closed = rec.find(|e| matches!(e, Ev::DoorsClosed(_)));
        let dispatched = rec.find(|e| matches!(e, Ev::Dispatched(..)));
        assert_eq!(dispatched.len(), 2);
        assert!(closed[0] < dispatched[1]);
    }

    #[test]
    fn overflow_spreads_to_shortest_queue() {
        let mut bank = bank(8, 2);
        bank.handle_call(up(5), &mut NoopObserver).unwrap();
        bank.handle_call(up(6), &mut NoopObserver).unwrap();
        assert!(bank.fleet.none_available());

        assert_eq!(
            bank.handle_call(up(1), &mut NoopObserver).unwrap(),
            DispatchOutcome::Queued { lift: LiftId(0) }
        );
        assert_eq!(
            bank.handle_call(up(2), &mut NoopObserver).unwrap(),
            DispatchOutcome::Queued { lift: LiftId(1) }
        );
        assert_eq!(
            bank.handle_call(up(3), &mut NoopObserver).unwrap(),
            DispatchOutcome::Queued { lift: LiftId(0) }
        );
        assert_eq!(bank.queues.len(LiftId(0)), 2);
        assert_eq!(bank.queues.len(LiftId(1)), 1);
    }

    #[test]
    fn queued_call_is_served_by_its_own_lift() {
        let mut bank = bank(8, 2);
        let mut rec = Recorder::default();
        bank.handle_call(up(5), &mut rec).unwrap(); // lift 0
        bank.handle_call(up(6), &mut rec).unwrap(); // lift 1

        let DispatchOutcome::Queued { lift: owner } =
            bank.handle_call(down(1), &mut rec).unwrap()
        else {
            panic!("expected Queued");
        };

        bank.run_until_idle(&mut rec);
        // The third Dispatched event is the drain; it names the queue owner.
        let dispatched: Vec<_> = rec
            .events
            .iter()
            .filter_map(|(_, e)| match e {
                Ev::Dispatched(l, f, _) => Some((*l, *f)),
                _ => None,
            })
            .collect();
        assert_eq!(dispatched.len(), 3);
        assert_eq!(dispatched[2], (owner, Floor(1)));
    }

    #[test]
    fn drained_dispatch_fires_no_button_events() {
        let mut bank = bank(8, 1);
        let mut rec = Recorder::default();
        bank.handle_call(up(5), &mut rec).unwrap();
        bank.handle_call(down(2), &mut rec).unwrap(); // queued, button untouched
        bank.run_until_idle(&mut rec);

        // One disable/enable pair for the dispatched call only.
        assert_eq!(rec.find(|e| matches!(e, Ev::ButtonDisabled(..))).len(), 1);
        assert_eq!(rec.find(|e| matches!(e, Ev::ButtonEnabled(..))).len(), 1);
    }

    #[test]
    fn drained_zero_distance_call_still_cycles_doors() {
        let mut bank = bank(8, 1);
        let mut rec = Recorder::default();
        bank.handle_call(up(3), &mut rec).unwrap();
        // Same floor, other direction: queued because the lift is busy.
        assert_eq!(
            bank.handle_call(down(3), &mut rec).unwrap(),
            DispatchOutcome::Queued { lift: LiftId(0) }
        );

        let end = bank.run_until_idle(&mut rec);
        // First cycle ends at 9 200; the drained call has zero travel but
        // still pays for both door phases.
        assert_eq!(end, Tick(12_400));
        assert_eq!(rec.find(|e| matches!(e, Ev::DoorsOpening(_))).len(), 2);
        assert_eq!(rec.find(|e| matches!(e, Ev::DoorsClosed(_))).len(), 2);
        assert_eq!(bank.fleet.lifts[0].current_floor, Floor(3));
    }

    #[test]
    fn accounting_invariant_holds() {
        // queued + in-flight = accepted − rejected, across a burst of calls.
        let mut bank = bank_at(10, &[0, 5]);
        let calls = [up(2), up(2), down(7), up(4), down(9), up(1)];
        let mut accepted = 0usize;
        for call in calls {
            match bank.handle_call(call, &mut NoopObserver).unwrap() {
                DispatchOutcome::Dispatched { .. } | DispatchOutcome::Queued { .. } => {
                    accepted += 1;
                }
                DispatchOutcome::DuplicateSuppressed | DispatchOutcome::FloorSaturated => {}
            }
            assert_eq!(
                bank.queues.total_pending() + bank.occupancy.total(),
                accepted,
                "after {call}"
            );
        }
    }
}
