use std::fmt;

use serde::Serialize;
use ulid::Ulid;

use crate::ids::short;
use crate::model::{Day, ReservationToken, StayRange};

/// A guest's stay in a room, backed by the reservation that holds its days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    id: Ulid,
    guest_id: Ulid,
    guest_name: String,
    reservation: ReservationToken,
}

impl Booking {
    pub fn new(
        id: Ulid,
        guest_id: Ulid,
        guest_name: impl Into<String>,
        reservation: ReservationToken,
    ) -> Self {
        Self {
            id,
            guest_id,
            guest_name: guest_name.into(),
            reservation,
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn guest_id(&self) -> Ulid {
        self.guest_id
    }

    pub fn room(&self) -> &str {
        self.reservation.resource_id()
    }

    pub fn range(&self) -> StayRange {
        self.reservation.range()
    }

    pub fn check_in(&self) -> Day {
        self.range().check_in()
    }

    pub fn check_out(&self) -> Day {
        self.range().check_out()
    }

    pub fn nights(&self) -> u32 {
        self.range().nights()
    }

    pub fn reservation(&self) -> &ReservationToken {
        &self.reservation
    }

    pub(crate) fn into_reservation(self) -> ReservationToken {
        self.reservation
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking {} for {} in room {}: {} ({} nights)",
            short(&self.id),
            self.guest_name,
            self.room(),
            self.range(),
            self.nights()
        )
    }
}
