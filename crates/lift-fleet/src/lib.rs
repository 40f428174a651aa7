//! `lift-fleet` — per-lift state, fleet storage, occupancy counters, and
//! call queues.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`lift`]      | `Lift`, `LiftPhase` — the four-phase cycle state            |
//! | [`store`]     | `FleetStore` — `Vec<Lift>` indexed by `LiftId`              |
//! | [`occupancy`] | `FloorOccupancy` — active-cycle claims per floor            |
//! | [`queue`]     | `CallQueues` — one FIFO of pending calls per lift           |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                              |
//!
//! # Movement model (teleport-at-arrival)
//!
//! A lift's `current_floor` only changes at the instant a move completes:
//! while `Moving`, the lift logically stays where it departed and the stored
//! departure/arrival ticks let a presentation layer interpolate a smooth
//! position.  The scheduler in `lift-sim` drives the phase transitions; this
//! crate only holds the data and the invariant-preserving mutators.

pub mod error;
pub mod lift;
pub mod occupancy;
pub mod queue;
pub mod store;


pub use error::{FleetError, FleetResult};
pub use lift::{Lift, LiftPhase};
pub use occupancy::FloorOccupancy;
pub use queue::CallQueues;
pub use store::FleetStore;
