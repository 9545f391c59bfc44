use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::booking::Booking;
use crate::engine::EngineError;
use crate::ids::short;
use crate::model::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: Ulid,
    booking_id: Ulid,
    nights: u32,
    nightly_rate: Money,
    total: Money,
}

impl Invoice {
    /// Bill `booking` at `nightly_rate`. The total is nights × rate and
    /// nothing else.
    pub fn issue(id: Ulid, booking: &Booking, nightly_rate: Money) -> Result<Self, EngineError> {
        let nights = booking.nights();
        let total = nightly_rate
            .checked_mul(nights)
            .ok_or(EngineError::LimitExceeded("invoice total overflows"))?;
        Ok(Self {
            id,
            booking_id: booking.id(),
            nights,
            nightly_rate,
            total,
        })
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn booking_id(&self) -> Ulid {
        self.booking_id
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invoice {}: {} nights at {} = total {}",
            short(&self.id),
            self.nights,
            self.nightly_rate,
            self.total
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Settlement of an invoice. Status changes are plain overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    id: Ulid,
    invoice_id: Ulid,
    amount: Money,
    status: PaymentStatus,
}

impl Payment {
    pub fn new(id: Ulid, invoice: &Invoice) -> Self {
        Self {
            id,
            invoice_id: invoice.id(),
            amount: invoice.total(),
            status: PaymentStatus::Pending,
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn invoice_id(&self) -> Ulid {
        self.invoice_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn complete(&mut self) {
        self.status = PaymentStatus::Completed;
    }

    pub fn fail(&mut self) {
        self.status = PaymentStatus::Failed;
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment {} of {}: {}",
            short(&self.id),
            self.amount,
            self.status
        )
    }
}
