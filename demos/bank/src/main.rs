//! bank — scripted demo of the lift bank simulation.
//!
//! Drives a 3-lift, 7-floor bank through a short burst of calls chosen to
//! exercise every dispatch outcome: nearest-lift selection, duplicate
//! suppression, floor saturation, and overflow queueing with automatic
//! drain.  Every transition is printed and appended to a CSV event log.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::{BankConfig, CallRequest, Direction, Floor, LiftId, Tick};
use lift_output::{CsvWriter, EventLogObserver, OutputWriter};
use lift_sim::{BankBuilder, BankObserver, BankSim, DispatchOutcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/bank";

// Bank shape and timings; the application layer owns the config format.
const CONFIG_JSON: &str = r#"{
    "num_floors":          7,
    "num_lifts":           3,
    "seconds_per_floor":   2,
    "door_operation_ms":   1600,
    "max_lifts_per_floor": 2
}"#;

// ── Observer wrapper: console echo + event log ────────────────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:       EventLogObserver<W>,
    transitions: usize,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: EventLogObserver<W>) -> Self {
        Self { inner, transitions: 0 }
    }

    fn echo(&mut self, now: Tick, line: String) {
        self.transitions += 1;
        println!("  [{:>6} ms] {line}", now.0);
    }
}

impl<W: OutputWriter> BankObserver for ConsoleObserver<W> {
    fn on_lift_dispatched(&mut self, now: Tick, lift: LiftId, target: Floor, travel: u64) {
        self.echo(now, format!("{lift} dispatched to {target} ({travel} ms travel)"));
        self.inner.on_lift_dispatched(now, lift, target, travel);
    }

    fn on_lift_arrived(&mut self, now: Tick, lift: LiftId, floor: Floor) {
        self.echo(now, format!("{lift} arrived at {floor}"));
        self.inner.on_lift_arrived(now, lift, floor);
    }

    fn on_doors_opening(&mut self, now: Tick, lift: LiftId) {
        self.echo(now, format!("{lift} doors opening"));
        self.inner.on_doors_opening(now, lift);
    }

    fn on_doors_closed(&mut self, now: Tick, lift: LiftId) {
        self.echo(now, format!("{lift} doors closed, idle"));
        self.inner.on_doors_closed(now, lift);
    }

    fn on_button_disabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.echo(now, format!("{floor} {direction} button disabled"));
        self.inner.on_button_disabled(now, floor, direction);
    }

    fn on_button_enabled(&mut self, now: Tick, floor: Floor, direction: Direction) {
        self.echo(now, format!("{floor} {direction} button re-enabled"));
        self.inner.on_button_enabled(now, floor, direction);
    }
}

// ── Call script ───────────────────────────────────────────────────────────────

fn press<W: OutputWriter>(
    bank: &mut BankSim,
    call: CallRequest,
    obs: &mut ConsoleObserver<W>,
) -> Result<()> {
    let outcome = bank.handle_call(call, obs)?;
    let verdict = match outcome {
        DispatchOutcome::Dispatched { lift, arrival } => {
            format!("dispatched {lift}, arriving at {arrival}")
        }
        DispatchOutcome::Queued { lift } => format!("all lifts busy, queued for {lift}"),
        DispatchOutcome::DuplicateSuppressed => "duplicate press, ignored".to_string(),
        DispatchOutcome::FloorSaturated => "floor full, call dropped".to_string(),
    };
    println!("call {call}: {verdict}");
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== bank — lift dispatch simulation ===");
    println!();

    // 1. Load and validate the config.
    let config: BankConfig = serde_json::from_str(CONFIG_JSON)?;
    println!(
        "Bank: {} lifts, floors 0..={}, {} s/floor, {} ms per door phase, cap {}/floor",
        config.num_lifts,
        config.num_floors,
        config.seconds_per_floor,
        config.door_operation_ms,
        config.max_lifts_per_floor
    );

    // 2. Build the simulation; every lift starts idle at ground.
    let mut bank = BankBuilder::new(config).build()?;

    // 3. Set up the event log.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ConsoleObserver::new(EventLogObserver::new(writer));

    // 4. Scripted call burst at t=0.
    let t0 = Instant::now();
    press(&mut bank, CallRequest::new(Floor(5), Direction::Up), &mut obs)?;
    press(&mut bank, CallRequest::new(Floor(5), Direction::Up), &mut obs)?; // double press
    press(&mut bank, CallRequest::new(Floor(5), Direction::Down), &mut obs)?;
    press(&mut bank, CallRequest::new(Floor(3), Direction::Up), &mut obs)?;

    // 5. Mid-flight presses: every lift is now busy, so this call queues.
    bank.advance_to(Tick(2_000), &mut obs);
    press(&mut bank, CallRequest::new(Floor(7), Direction::Down), &mut obs)?;

    // 6. After the floor-5 arrivals the buttons work again, but the floor
    //    still holds two lifts mid-cycle: saturation drops the call.
    bank.advance_to(Tick(10_500), &mut obs);
    press(&mut bank, CallRequest::new(Floor(5), Direction::Up), &mut obs)?;

    // 7. Run everything (including the queued call) to completion.
    let end = bank.run_until_idle(&mut obs);
    let elapsed = t0.elapsed();

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 8. Summary.
    println!();
    println!(
        "Simulated {} ms of bank time in {:.3} s wall clock ({} transitions logged)",
        end.0,
        elapsed.as_secs_f64(),
        obs.transitions
    );
    println!("Event log: {OUTPUT_DIR}/lift_events.csv");
    println!();

    // 9. Final lift positions table.
    println!("{:<6} {:<8} {:<10}", "Lift", "Floor", "State");
    println!("{}", "-".repeat(26));
    for lift in bank.fleet.iter() {
        println!(
            "{:<6} {:<8} {:<10}",
            lift.id.to_string(),
            lift.current_floor.to_string(),
            if lift.is_available() { "idle" } else { "busy" },
        );
    }

    Ok(())
}
