//! Contact book use-case service.
//!
//! # Responsibility
//! - Provide the record-level API surface: add, lookup, remove, the field
//!   mutation operations, bulk description and persistence.
//! - Enforce validate-before-mutate ordering for every operation.
//!
//! # Invariants
//! - `rename` validates the new name against the live key set before any
//!   directory mutation; a failed rename leaves the book untouched.
//! - Mutation confirmations are display-ready strings; the dispatcher
//!   prints them verbatim.

use crate::model::field::{Address, Birthday, Email, FieldValidationError, Name, Phone};
use crate::model::record::Record;
use crate::store::codec::PersistenceError;
use crate::store::directory::{Directory, DirectoryError};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Service error for contact book operations.
#[derive(Debug)]
pub enum ContactBookError {
    /// A field value failed validation.
    Field(FieldValidationError),
    /// No record is stored under the requested name.
    ContactNotFound(String),
    /// The record exists but does not hold the requested number.
    PhoneNotFound { contact: String, number: String },
    /// A record with that name key is already stored.
    DuplicateContact(String),
    /// The year/month/day components do not form a calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Archive read/write failure.
    Persistence(PersistenceError),
}

impl Display for ContactBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::ContactNotFound(name) => write!(f, "no contact named `{name}`"),
            Self::PhoneNotFound { contact, number } => {
                write!(f, "contact `{contact}` has no phone number {number}")
            }
            Self::DuplicateContact(name) => write!(f, "a contact named `{name}` already exists"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year}-{month:02}-{day:02}")
            }
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactBookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldValidationError> for ContactBookError {
    fn from(value: FieldValidationError) -> Self {
        Self::Field(value)
    }
}

impl From<PersistenceError> for ContactBookError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

impl From<DirectoryError> for ContactBookError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::NotFound(key) => Self::ContactNotFound(key),
            DirectoryError::DuplicateKey(key) => Self::DuplicateContact(key),
        }
    }
}

/// Name-keyed directory of contact records.
#[derive(Debug, Default)]
pub struct ContactBook {
    directory: Directory<Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
        }
    }

    /// Returns the live name key set, the collaborator handed to
    /// `Name::new` when the dispatcher builds a record.
    pub fn names(&self) -> BTreeSet<String> {
        self.directory.keys()
    }

    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Inserts a fully built record under its name key.
    pub fn add_record(&mut self, record: Record) -> ContactBookResult<()> {
        self.directory.add(record)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> ContactBookResult<&Record> {
        Ok(self.directory.get(name)?)
    }

    /// Removes and returns the record under `name`.
    pub fn remove(&mut self, name: &str) -> ContactBookResult<Record> {
        Ok(self.directory.remove(name)?)
    }

    /// Moves a record under a new name key.
    ///
    /// The new name is validated against the live key set first, so a
    /// taken, empty or numeric name fails before anything is removed.
    pub fn rename(&mut self, current: &str, new_name: &str) -> ContactBookResult<String> {
        let fresh = Name::new(new_name, &self.directory.keys())?;
        let existing = self.directory.remove(current)?;
        self.directory.add(existing.renamed(fresh))?;
        Ok(format!("contact `{current}` renamed to `{new_name}`"))
    }

    /// Replaces one of a contact's numbers with a freshly validated one.
    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> ContactBookResult<String> {
        let replacement = Phone::new(new)?;
        let record = self.directory.get_mut(name)?;
        if !record.replace_number(old, &replacement) {
            return Err(ContactBookError::PhoneNotFound {
                contact: name.to_string(),
                number: old.to_string(),
            });
        }
        Ok(format!("phone {old} replaced with {new}"))
    }

    /// Sets a contact's birthday from year/month/day components.
    ///
    /// Components that do not form a calendar date fail as `InvalidDate`;
    /// a well-formed future date fails birthday validation.
    pub fn change_birthday(
        &mut self,
        name: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> ContactBookResult<String> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ContactBookError::InvalidDate { year, month, day })?;
        let birthday = Birthday::new(date)?;
        let record = self.directory.get_mut(name)?;
        record.set_birthday(birthday);
        Ok(format!("birthday set to {date}"))
    }

    pub fn change_address(&mut self, name: &str, text: &str) -> ContactBookResult<String> {
        let record = self.directory.get_mut(name)?;
        record.set_address(Address::new(text));
        Ok(format!("address updated for `{name}`"))
    }

    pub fn change_email(&mut self, name: &str, text: &str) -> ContactBookResult<String> {
        let email = Email::new(text)?;
        let record = self.directory.get_mut(name)?;
        record.set_email(email);
        Ok(format!("email updated for `{name}`"))
    }

    /// Renders every record, blank-line separated.
    pub fn describe_all(&self) -> String {
        self.directory
            .iter()
            .map(|(_, record)| record.describe())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ContactBookResult<()> {
        Ok(self.directory.save(path)?)
    }

    /// Restores a book from file; a missing file yields an empty book.
    pub fn load(path: impl AsRef<Path>) -> ContactBookResult<Self> {
        Ok(Self {
            directory: Directory::load(path)?,
        })
    }
}
