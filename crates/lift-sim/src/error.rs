use lift_core::{Direction, ElevatorId, Floor, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("policy sent elevator {elevator} {direction} from {floor} — outside the building")]
    InvalidDirection {
        elevator:  ElevatorId,
        floor:     Floor,
        direction: Direction,
    },
}

pub type SimResult<T> = Result<T, SimError>;
