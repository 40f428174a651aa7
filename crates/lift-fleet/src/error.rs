use lift_core::LiftId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("no lift with id {0}")]
    UnknownLift(LiftId),
}

pub type FleetResult<T> = Result<T, FleetError>;
