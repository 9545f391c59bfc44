use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::ids::short;
use crate::model::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pending,
    Completed,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Pending => write!(f, "pending"),
            ServiceStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A housekeeping or maintenance ticket for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    id: Ulid,
    room: ResourceId,
    description: String,
    status: ServiceStatus,
}

impl ServiceRequest {
    pub fn new(id: Ulid, room: impl Into<ResourceId>, description: impl Into<String>) -> Self {
        Self {
            id,
            room: room.into(),
            description: description.into(),
            status: ServiceStatus::Pending,
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    /// Completing an already completed request leaves it completed.
    pub fn complete(&mut self) {
        self.status = ServiceStatus::Completed;
    }
}

impl fmt::Display for ServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service request {} for room {}: {} [{}]",
            short(&self.id),
            self.room,
            self.description,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_and_completes_idempotently() {
        let mut req = ServiceRequest::new(Ulid::from(7u128), "101", "extra towels");
        assert_eq!(req.status(), ServiceStatus::Pending);
        req.complete();
        req.complete();
        assert_eq!(req.status(), ServiceStatus::Completed);
        assert_eq!(
            req.to_string(),
            "Service request 00000007 for room 101: extra towels [completed]"
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
