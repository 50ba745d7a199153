//! Contact record aggregate.
//!
//! # Responsibility
//! - Hold one contact's validated fields under the name identity key.
//! - Provide in-place mutation helpers that only accept validated fields.
//!
//! # Invariants
//! - A record always carries at least a name and one phone number.
//! - Mutation never bypasses field construction; there is no raw handle to
//!   a stored value.

use crate::model::field::{Address, Birthday, Email, Name, Phone};
use crate::model::Keyed;
use serde::{Deserialize, Serialize};

const NOT_SET: &str = "not set";

/// One contact: mandatory name and phone list, optional extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phone: Phone,
    birthday: Option<Birthday>,
    address: Option<Address>,
    email: Option<Email>,
}

impl Record {
    /// Creates a record from the two mandatory fields.
    pub fn new(name: Name, phone: Phone) -> Self {
        Self::with_details(name, phone, None, None, None)
    }

    /// Creates a record with any combination of optional fields.
    pub fn with_details(
        name: Name,
        phone: Phone,
        birthday: Option<Birthday>,
        address: Option<Address>,
        email: Option<Email>,
    ) -> Self {
        Self {
            name,
            phone,
            birthday,
            address,
            email,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Clones this record under a different, already-validated name.
    ///
    /// Directory coordination (removing the old key, inserting the new one)
    /// belongs to the book layer.
    pub fn renamed(&self, name: Name) -> Self {
        Self {
            name,
            phone: self.phone.clone(),
            birthday: self.birthday.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
        }
    }

    /// Swaps one stored number for a validated replacement.
    ///
    /// Returns `false` when `old` is not in the list.
    pub fn replace_number(&mut self, old: &str, replacement: &Phone) -> bool {
        self.phone.swap(old, replacement)
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// Renders every field, one line each. Absent optional fields render as
    /// an explicit placeholder instead of being skipped or faulting.
    pub fn describe(&self) -> String {
        let mut lines = vec![self.name.render(), self.phone.render()];
        lines.push(match &self.birthday {
            Some(birthday) => birthday.render(),
            None => format!("Birthday:\t{NOT_SET}"),
        });
        lines.push(match &self.address {
            Some(address) => address.render(),
            None => format!("Address:\t{NOT_SET}"),
        });
        lines.push(match &self.email {
            Some(email) => email.render(),
            None => format!("Email:\t{NOT_SET}"),
        });
        lines.join("\n")
    }
}

impl Keyed for Record {
    fn key(&self) -> String {
        self.name.as_str().to_string()
    }
}
