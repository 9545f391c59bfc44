use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::engine::EngineError;

/// A calendar day, the only time type.
pub type Day = NaiveDate;

/// Stable identifier of a bookable resource (a room number such as `"101"`).
pub type ResourceId = String;

/// Half-open stay `[check_in, check_out)`.
///
/// The check-out day is never occupied by the stay itself, so a stay ending
/// on day D and another starting on D share no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayRange {
    check_in: Day,
    check_out: Day,
}

impl StayRange {
    /// Zero-length and inverted ranges are rejected rather than treated as
    /// "nothing to book".
    pub fn new(check_in: Day, check_out: Day) -> Result<Self, EngineError> {
        if check_out <= check_in {
            return Err(EngineError::InvalidRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// The one-night stay occupying `day`. `None` only at the end of the calendar.
    pub(crate) fn single_night(day: Day) -> Option<Self> {
        day.succ_opt().map(|check_out| Self {
            check_in: day,
            check_out,
        })
    }

    pub(crate) fn with_check_out(self, check_out: Day) -> Self {
        debug_assert!(self.check_in < check_out, "stay must end after it starts");
        Self { check_out, ..self }
    }

    pub fn check_in(&self) -> Day {
        self.check_in
    }

    pub fn check_out(&self) -> Day {
        self.check_out
    }

    /// Number of nights, always >= 1.
    pub fn nights(&self) -> u32 {
        self.check_out
            .signed_duration_since(self.check_in)
            .num_days() as u32
    }

    /// Every occupied day, in order. Excludes `check_out`.
    pub fn days(&self) -> impl Iterator<Item = Day> + use<> {
        self.check_in.iter_days().take(self.nights() as usize)
    }

    pub fn contains_day(&self, day: Day) -> bool {
        self.check_in <= day && day < self.check_out
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl fmt::Display for StayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

/// An amount in minor units (cents).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole dollars. Takes `u32` so the conversion to cents cannot overflow.
    pub fn from_dollars(dollars: u32) -> Self {
        Self(u64::from(dollars) * 100)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn checked_mul(self, factor: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(factor)).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Per-resource state: descriptive fields plus the committed-day set.
///
/// The set is only reachable mutably from inside the crate; the engine is
/// the sole writer.
#[derive(Debug, Clone)]
pub struct ResourceState {
    pub id: ResourceId,
    pub name: Option<String>,
    pub nightly_rate: Money,
    committed: BTreeSet<Day>,
    /// Set by `delete_resource` under the write lock. Writers that cloned the
    /// handle before removal see it and back off.
    pub(crate) retired: bool,
}

impl ResourceState {
    pub fn new(id: ResourceId, name: Option<String>, nightly_rate: Money) -> Self {
        Self {
            id,
            name,
            nightly_rate,
            committed: BTreeSet::new(),
            retired: false,
        }
    }

    pub fn committed_days(&self) -> &BTreeSet<Day> {
        &self.committed
    }

    /// First day of `range` that is already committed, if any.
    pub fn first_clash(&self, range: &StayRange) -> Option<Day> {
        self.committed
            .range(range.check_in()..range.check_out())
            .next()
            .copied()
    }

    pub fn is_free(&self, range: &StayRange) -> bool {
        self.first_clash(range).is_none()
    }

    pub(crate) fn insert_range(&mut self, range: &StayRange) {
        self.committed.extend(range.days());
    }

    /// Returns how many days were actually freed. Only committed days inside
    /// `range` are visited, however wide the range is.
    pub(crate) fn remove_range(&mut self, range: &StayRange) -> usize {
        let hits: Vec<Day> = self
            .committed
            .range(range.check_in()..range.check_out())
            .copied()
            .collect();
        for d in &hits {
            self.committed.remove(d);
        }
        hits.len()
    }
}

/// Proof of a successful commit. Only the engine mints these; cancelling
/// one releases exactly the days it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationToken {
    id: Ulid,
    resource_id: ResourceId,
    range: StayRange,
}

impl ReservationToken {
    pub(crate) fn new(id: Ulid, resource_id: ResourceId, range: StayRange) -> Self {
        Self {
            id,
            resource_id,
            range,
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn range(&self) -> StayRange {
        self.range
    }
}

// ── Query result types ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceInfo {
    pub id: ResourceId,
    pub name: Option<String>,
    pub nightly_rate: Money,
    pub committed_days: usize,
}
