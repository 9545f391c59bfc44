use std::sync::atomic::{AtomicU64, Ordering};

use ulid::Ulid;

/// Source of identifiers for reservations, bookings, invoices, payments and
/// service requests. Passed into the engine and the front desk so tests can
/// swap in a deterministic sequence.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Ulid;
}

/// Random, time-ordered ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn next_id(&self) -> Ulid {
        Ulid::new()
    }
}

/// Counter-backed ids: `1, 2, 3, ...` encoded as ULIDs.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Ulid {
        Ulid::from(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
    }
}

/// Short display form of an id, the last eight characters of its ULID text.
pub fn short(id: &Ulid) -> String {
    let s = id.to_string();
    s[s.len() - 8..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_deterministic() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), Ulid::from(1u128));
        assert_eq!(ids.next_id(), Ulid::from(2u128));

        let again = SequentialIds::new();
        assert_eq!(again.next_id(), Ulid::from(1u128));
    }

    #[test]
    fn starting_at_offsets_sequence() {
        let ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), Ulid::from(100u128));
    }

    #[test]
    fn ulid_generator_produces_distinct_ids() {
        let ids = UlidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn short_takes_ulid_tail() {
        let id = Ulid::from(1u128);
        assert_eq!(short(&id), "00000001");
        assert_eq!(short(&id).len(), 8);
    }
}
