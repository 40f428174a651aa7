//! `lift-core` — foundational types for the lift-bank simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `LiftId`, `Floor`                                 |
//! | [`direction`] | `Direction` enum                                  |
//! | [`call`]      | `CallRequest` — the inbound message type          |
//! | [`time`]      | `Tick`, `SimClock`                                |
//! | [`config`]    | `BankConfig` and its validation                   |
//! | [`error`]     | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod call;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::CallRequest;
pub use config::BankConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{Floor, LiftId};
pub use time::{SimClock, Tick};
