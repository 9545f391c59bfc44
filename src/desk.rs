use std::sync::Arc;

use tracing::info;

use crate::billing::{Invoice, Payment};
use crate::booking::Booking;
use crate::engine::{Engine, EngineError};
use crate::guest::Guest;
use crate::ids::IdGenerator;
use crate::limits::MAX_DESCRIPTION_LEN;
use crate::model::{Money, StayRange};
use crate::service::ServiceRequest;

/// Front desk: the workflow that turns tracker results into records.
///
/// The engine and every record share one identifier source.
pub struct FrontDesk {
    engine: Engine,
    ids: Arc<dyn IdGenerator>,
}

impl FrontDesk {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            engine: Engine::new(ids.clone()),
            ids,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn add_room(
        &self,
        number: &str,
        name: Option<String>,
        nightly_rate: Money,
    ) -> Result<(), EngineError> {
        self.engine.create_resource(number, name, nightly_rate)
    }

    pub fn register_guest(&self, name: &str, email: &str, phone: &str) -> Guest {
        let guest = Guest::new(self.ids.next_id(), name, email, phone);
        info!(guest = %guest.id(), "guest registered");
        guest
    }

    /// Conflicts come back as `Err`; nothing is recorded for a failed booking.
    pub fn book(
        &self,
        guest: &Guest,
        room: &str,
        range: StayRange,
    ) -> Result<Booking, EngineError> {
        let token = self.engine.commit(room, range)?;
        let booking = Booking::new(self.ids.next_id(), guest.id(), guest.name(), token);
        info!(booking = %booking.id(), room, stay = %range, "booking confirmed");
        Ok(booking)
    }

    pub fn cancel(&self, booking: Booking) -> Result<(), EngineError> {
        let id = booking.id();
        self.engine.cancel(booking.into_reservation())?;
        info!(booking = %id, "booking cancelled");
        Ok(())
    }

    /// Rate comes from the room's accessor, nights from the booking's.
    pub fn invoice(&self, booking: &Booking) -> Result<Invoice, EngineError> {
        let rate = self.engine.nightly_rate(booking.room())?;
        Invoice::issue(self.ids.next_id(), booking, rate)
    }

    pub fn take_payment(&self, invoice: &Invoice) -> Payment {
        Payment::new(self.ids.next_id(), invoice)
    }

    pub fn request_service(
        &self,
        room: &str,
        description: &str,
    ) -> Result<ServiceRequest, EngineError> {
        if self.engine.get_resource(room).is_none() {
            return Err(EngineError::NotFound(room.to_string()));
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(EngineError::LimitExceeded("service description too long"));
        }
        Ok(ServiceRequest::new(self.ids.next_id(), room, description))
    }
}
