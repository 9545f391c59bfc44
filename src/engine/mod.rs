mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;

pub use availability::{committed_ranges, free_ranges_in, merge_adjacent};
pub use error::EngineError;

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use ulid::Ulid;

use crate::ids::{IdGenerator, UlidGenerator};
use crate::model::*;

pub type SharedResourceState = Arc<RwLock<ResourceState>>;

/// Availability tracker: one committed-day set per resource.
///
/// Every write to a resource's set happens under that resource's write lock,
/// so the check-then-insert in `commit` is indivisible with respect to any
/// other commit or release on the same resource. Different resources never
/// contend.
pub struct Engine {
    pub(super) state: DashMap<ResourceId, SharedResourceState>,
    /// Live reservations: token id → token.
    pub(super) reservations: DashMap<Ulid, ReservationToken>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Arc::new(UlidGenerator))
    }
}

impl Engine {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: DashMap::new(),
            reservations: DashMap::new(),
            ids,
        }
    }

    pub fn get_resource(&self, id: &str) -> Option<SharedResourceState> {
        self.state.get(id).map(|e| e.value().clone())
    }

    pub fn resource_count(&self) -> usize {
        self.state.len()
    }

    pub(super) fn require_resource(&self, id: &str) -> Result<SharedResourceState, EngineError> {
        self.get_resource(id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))
    }
}
