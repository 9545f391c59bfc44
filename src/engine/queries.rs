use ulid::Ulid;

use crate::model::*;

use super::availability::{committed_ranges, free_ranges_in};
use super::conflict::validate_window;
use super::{Engine, EngineError};

impl Engine {
    /// True when no day of `range` is committed on the resource. No side effects.
    pub fn is_available(&self, resource_id: &str, range: &StayRange) -> Result<bool, EngineError> {
        let rs = self.require_resource(resource_id)?;
        let guard = rs.read();
        Ok(guard.is_free(range))
    }

    /// Ids of every resource on which `range` is entirely free, sorted.
    pub fn available_resources(&self, range: &StayRange) -> Vec<ResourceId> {
        let mut ids: Vec<ResourceId> = self
            .state
            .iter()
            .filter(|entry| entry.value().read().is_free(range))
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn committed_days(&self, resource_id: &str) -> Result<Vec<Day>, EngineError> {
        let rs = self.require_resource(resource_id)?;
        let guard = rs.read();
        Ok(guard.committed_days().iter().copied().collect())
    }

    /// Committed days grouped into contiguous stays.
    pub fn committed_ranges(&self, resource_id: &str) -> Result<Vec<StayRange>, EngineError> {
        let rs = self.require_resource(resource_id)?;
        let guard = rs.read();
        Ok(committed_ranges(&guard))
    }

    pub fn free_ranges(
        &self,
        resource_id: &str,
        window: &StayRange,
    ) -> Result<Vec<StayRange>, EngineError> {
        validate_window(window)?;
        let rs = self.require_resource(resource_id)?;
        let guard = rs.read();
        Ok(free_ranges_in(&guard, window))
    }

    pub fn nightly_rate(&self, resource_id: &str) -> Result<Money, EngineError> {
        let rs = self.require_resource(resource_id)?;
        let rate = rs.read().nightly_rate;
        Ok(rate)
    }

    pub fn resource_info(&self, resource_id: &str) -> Option<ResourceInfo> {
        let rs = self.get_resource(resource_id)?;
        let guard = rs.read();
        Some(ResourceInfo {
            id: guard.id.clone(),
            name: guard.name.clone(),
            nightly_rate: guard.nightly_rate,
            committed_days: guard.committed_days().len(),
        })
    }

    /// All resources, sorted by id.
    pub fn list_resources(&self) -> Vec<ResourceInfo> {
        let mut infos: Vec<ResourceInfo> = self
            .state
            .iter()
            .map(|entry| {
                let guard = entry.value().read();
                ResourceInfo {
                    id: guard.id.clone(),
                    name: guard.name.clone(),
                    nightly_rate: guard.nightly_rate,
                    committed_days: guard.committed_days().len(),
                }
            })
            .collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    pub fn reservation(&self, id: &Ulid) -> Option<ReservationToken> {
        self.reservations.get(id).map(|e| e.value().clone())
    }

    /// Live reservations on a resource, ordered by check-in.
    pub fn reservations_for(&self, resource_id: &str) -> Vec<ReservationToken> {
        let mut tokens: Vec<ReservationToken> = self
            .reservations
            .iter()
            .filter(|e| e.value().resource_id() == resource_id)
            .map(|e| e.value().clone())
            .collect();
        tokens.sort_by_key(|t| t.range().check_in());
        tokens
    }

    /// Every live reservation, grouped by resource id and then by check-in.
    pub fn all_reservations(&self) -> Vec<ReservationToken> {
        let mut tokens: Vec<ReservationToken> =
            self.reservations.iter().map(|e| e.value().clone()).collect();
        tokens.sort_by(|a, b| {
            a.resource_id()
                .cmp(b.resource_id())
                .then(a.range().check_in().cmp(&b.range().check_in()))
        });
        tokens
    }
}
