use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::limits::*;
use crate::model::*;
use crate::observability::{
    commit_label, COMMITS_TOTAL, COMMITTED_NIGHTS, RELEASES_TOTAL, RESOURCES_ACTIVE,
};

use super::conflict::{check_live, check_no_conflict, validate_stay};
use super::{Engine, EngineError};

impl Engine {
    pub fn create_resource(
        &self,
        id: &str,
        name: Option<String>,
        nightly_rate: Money,
    ) -> Result<(), EngineError> {
        if id.is_empty() {
            return Err(EngineError::LimitExceeded("resource id must not be empty"));
        }
        if id.len() > MAX_NAME_LEN {
            return Err(EngineError::LimitExceeded("resource id too long"));
        }
        if let Some(ref n) = name
            && n.len() > MAX_NAME_LEN {
                return Err(EngineError::LimitExceeded("resource name too long"));
            }
        if self.state.len() >= MAX_RESOURCES {
            return Err(EngineError::LimitExceeded("too many resources"));
        }

        match self.state.entry(id.to_string()) {
            Entry::Occupied(_) => return Err(EngineError::AlreadyExists(id.to_string())),
            Entry::Vacant(slot) => {
                let rs = ResourceState::new(id.to_string(), name, nightly_rate);
                slot.insert(Arc::new(RwLock::new(rs)));
            }
        }
        metrics::gauge!(RESOURCES_ACTIVE).increment(1.0);
        info!(resource = id, rate = %nightly_rate, "resource created");
        Ok(())
    }

    pub fn update_resource(
        &self,
        id: &str,
        name: Option<String>,
        nightly_rate: Money,
    ) -> Result<(), EngineError> {
        if let Some(ref n) = name
            && n.len() > MAX_NAME_LEN {
                return Err(EngineError::LimitExceeded("resource name too long"));
            }
        let rs = self.require_resource(id)?;
        let mut guard = rs.write();
        check_live(&guard)?;
        guard.name = name;
        guard.nightly_rate = nightly_rate;
        Ok(())
    }

    /// Only resources with no committed day can be removed. The state is
    /// retired under its write lock before it leaves the map, so a writer
    /// holding a stale handle gets `NotFound` instead of landing on it.
    pub fn delete_resource(&self, id: &str) -> Result<(), EngineError> {
        let rs = self.require_resource(id)?;
        {
            let mut guard = rs.write();
            check_live(&guard)?;
            if !guard.committed_days().is_empty() {
                return Err(EngineError::HasCommittedDays(id.to_string()));
            }
            guard.retired = true;
        }
        self.state.remove_if(id, |_, current| Arc::ptr_eq(current, &rs));

        metrics::gauge!(RESOURCES_ACTIVE).decrement(1.0);
        info!(resource = id, "resource deleted");
        Ok(())
    }

    /// Check-then-insert under the resource's write lock. On conflict the
    /// committed-day set is left untouched.
    pub fn commit(
        &self,
        resource_id: &str,
        range: StayRange,
    ) -> Result<ReservationToken, EngineError> {
        let result = self.try_commit(resource_id, range);
        metrics::counter!(COMMITS_TOTAL, "status" => commit_label(&result)).increment(1);
        result
    }

    fn try_commit(
        &self,
        resource_id: &str,
        range: StayRange,
    ) -> Result<ReservationToken, EngineError> {
        validate_stay(&range)?;
        let rs = self.require_resource(resource_id)?;
        let mut guard = rs.write();
        check_live(&guard)?;

        if let Err(e) = check_no_conflict(&guard, &range) {
            warn!(resource = resource_id, stay = %range, "commit rejected: {e}");
            return Err(e);
        }
        guard.insert_range(&range);

        let token = ReservationToken::new(self.ids.next_id(), resource_id.to_string(), range);
        self.reservations.insert(token.id(), token.clone());
        drop(guard);

        metrics::histogram!(COMMITTED_NIGHTS).record(f64::from(range.nights()));
        debug!(resource = resource_id, stay = %range, reservation = %token.id(), "committed");
        Ok(token)
    }

    /// Free every day of `range`. Days that were not committed are ignored,
    /// so releasing twice is the same as releasing once. Live reservations on
    /// this resource that overlap `range` are forgotten; their days can no
    /// longer be released through `cancel`.
    pub fn release(&self, resource_id: &str, range: StayRange) -> Result<(), EngineError> {
        let rs = self.require_resource(resource_id)?;
        let mut guard = rs.write();
        check_live(&guard)?;
        let freed = guard.remove_range(&range);
        self.reservations.retain(|_, token| {
            !(token.resource_id() == resource_id && token.range().overlaps(&range))
        });
        drop(guard);

        metrics::counter!(RELEASES_TOTAL).increment(1);
        debug!(resource = resource_id, stay = %range, freed, "released");
        Ok(())
    }

    /// Consume a token and release exactly the days it committed.
    ///
    /// The token is only removed from the index while the resource's write
    /// lock is held, so a `release` + `commit` from another thread cannot slip
    /// in between and have its fresh days freed by this stale token.
    pub fn cancel(&self, token: ReservationToken) -> Result<(), EngineError> {
        let id = token.id();
        let resource_id = self
            .reservations
            .get(&id)
            .map(|e| e.value().resource_id().to_string())
            .ok_or(EngineError::UnknownReservation(id))?;
        let rs = self.require_resource(&resource_id)?;
        let mut guard = rs.write();
        check_live(&guard)?;
        let (_, live) = self
            .reservations
            .remove(&id)
            .ok_or(EngineError::UnknownReservation(id))?;
        let freed = guard.remove_range(&live.range());
        drop(guard);

        metrics::counter!(RELEASES_TOTAL).increment(1);
        debug!(
            resource = live.resource_id(),
            stay = %live.range(),
            reservation = %live.id(),
            freed,
            "cancelled"
        );
        Ok(())
    }
}
