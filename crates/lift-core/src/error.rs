//! Foundational error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration parameter failed validation; the simulation is not
    /// started.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A floor outside `0..=top` reached the core.  A well-formed button
    /// panel can never produce one, so this is API misuse rather than a
    /// simulation outcome.
    #[error("floor {floor} out of range (top floor is {top})")]
    FloorOutOfRange { floor: Floor, top: Floor },
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
