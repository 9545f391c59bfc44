use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    id: Ulid,
    name: String,
    email: String,
    phone: String,
}

impl Guest {
    pub fn new(
        id: Ulid,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Overwrites both contact fields. No validation.
    pub fn update_contact(&mut self, email: impl Into<String>, phone: impl Into<String>) {
        self.email = email.into();
        self.phone = phone.into();
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guest {} ({}, {})", self.name, self.email, self.phone)
    }
}
