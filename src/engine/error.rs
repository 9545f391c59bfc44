use ulid::Ulid;

use crate::model::{Day, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    NotFound(ResourceId),
    AlreadyExists(ResourceId),
    Conflict { resource_id: ResourceId, day: Day },
    InvalidRange { check_in: Day, check_out: Day },
    UnknownReservation(Ulid),
    HasCommittedDays(ResourceId),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "resource not found: {id}"),
            EngineError::AlreadyExists(id) => write!(f, "resource already exists: {id}"),
            EngineError::Conflict { resource_id, day } => {
                write!(f, "resource {resource_id} is already booked on {day}")
            }
            EngineError::InvalidRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "invalid stay: check-out {check_out} must be after check-in {check_in}"
                )
            }
            EngineError::UnknownReservation(id) => write!(f, "unknown reservation: {id}"),
            EngineError::HasCommittedDays(id) => {
                write!(f, "cannot delete resource {id}: it still has committed days")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
