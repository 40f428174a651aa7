//! `lift-sim` — event loop orchestrator for the lift-bank simulation.
//!
//! # Event-driven cycle
//!
//! ```text
//! handle_call(floor, dir):
//!   ① duplicate?   — button already disabled → suppressed, no state change
//!   ② all busy?    — append to shortest per-lift queue
//!   ③ saturated?   — floor already claimed by max_lifts_per_floor → dropped
//!   ④ dispatch     — nearest available lift; claim floor; disable button;
//!                    schedule Arrived at now + distance × seconds_per_floor
//!
//! step() drains the timer wheel in (tick, FIFO) order:
//!   Arrived      → land at target; re-enable button; doors open;
//!                  schedule CloseDoors at +door_operation_ms
//!   CloseDoors   → doors reverse; schedule DoorsClosed at +door_operation_ms
//!   DoorsClosed  → lift idle; release floor claim; drain queue — pop the
//!                  front call (if any) and dispatch it to this same lift
//! ```
//!
//! Everything is single-threaded and cooperative: state changes only while
//! an event is being processed, so per-lift ordering (arrive < doors open <
//! doors closed < drain) is structural, not locked.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BankConfig, CallRequest, Direction, Floor};
//! use lift_sim::{BankBuilder, NoopObserver};
//!
//! let mut bank = BankBuilder::new(BankConfig::new(8, 3)).build()?;
//! bank.handle_call(CallRequest::new(Floor(5), Direction::Up), &mut NoopObserver)?;
//! bank.run_until_idle(&mut NoopObserver);
//! ```

pub mod builder;
pub mod buttons;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;
pub mod wheel;

#[cfg(test)]
mod tests;

pub use builder::BankBuilder;
pub use buttons::ButtonPanel;
pub use dispatch::{DispatchOutcome, select_nearest};
pub use error::{SimError, SimResult};
pub use event::TimerEvent;
pub use observer::{BankObserver, NoopObserver};
pub use sim::BankSim;
pub use wheel::TimerWheel;
