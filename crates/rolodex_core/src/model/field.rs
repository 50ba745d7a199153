//! Validated field types.
//!
//! # Responsibility
//! - Wrap one raw input value per field kind and enforce its format rule.
//! - Render each field as a `Label:\t<value>` display line.
//!
//! # Invariants
//! - A constructed field always holds a value that passed its predicate;
//!   rejected input never reaches storage, and stored values are never
//!   normalized past the rule after the fact.
//! - `Phone` always holds a list, even for a single number.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 13;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][\w.]+@[A-Za-z]{2,}\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Validation failure for any field constructor.
///
/// Messages are written for direct display to the person typing the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    /// Name input was empty.
    EmptyName,
    /// Name input consisted only of digits.
    NumericName,
    /// Name input collides with an existing directory key.
    DuplicateName(String),
    /// Phone input did not reduce to 7-13 digits.
    BadPhoneFormat(String),
    /// Birthday lies after today.
    FutureBirthday(NaiveDate),
    /// Email input did not match `local@domain.tld`.
    BadEmailFormat(String),
    /// Tag input used spaces instead of commas as separators.
    MalformedTagList(String),
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "the name field cannot be empty"),
            Self::NumericName => write!(f, "the name cannot consist only of digits"),
            Self::DuplicateName(name) => write!(f, "a contact named `{name}` already exists"),
            Self::BadPhoneFormat(raw) => write!(
                f,
                "invalid phone number `{raw}`: expected {PHONE_MIN_DIGITS} to \
                 {PHONE_MAX_DIGITS} digits after stripping `+`, `(`, `)`"
            ),
            Self::FutureBirthday(date) => write!(f, "birthday {date} lies in the future"),
            Self::BadEmailFormat(raw) => write!(f, "invalid email address `{raw}`"),
            Self::MalformedTagList(raw) => {
                write!(f, "tags must be separated by commas, got `{raw}`")
            }
        }
    }
}

impl Error for FieldValidationError {}

/// Contact name and directory identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Validates a raw name against the live key set of the target
    /// directory.
    ///
    /// The key set is an explicit collaborator so the duplicate rule stays
    /// testable without constructing a whole book.
    pub fn new(raw: &str, taken: &BTreeSet<String>) -> Result<Self, FieldValidationError> {
        if raw.is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        if raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldValidationError::NumericName);
        }
        if taken.contains(raw) {
            return Err(FieldValidationError::DuplicateName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the stored name exactly as validated.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the name line. Capitalization applies to the display copy
    /// only; the stored value is untouched.
    pub fn render(&self) -> String {
        format!("Name:\t{}", capitalized(&self.0))
    }
}

/// One or more phone numbers, stored as stripped digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(Vec<String>);

impl Phone {
    /// Validates one raw number and stores it as a singleton list.
    ///
    /// `+`, `(` and `)` are stripped before the digit check; anything else
    /// non-numeric rejects the input.
    pub fn new(raw: &str) -> Result<Self, FieldValidationError> {
        let stripped: String = raw
            .chars()
            .filter(|c| !matches!(c, '+' | '(' | ')'))
            .collect();
        let digits_only = !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit());
        if !digits_only || !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&stripped.len()) {
            return Err(FieldValidationError::BadPhoneFormat(raw.to_string()));
        }
        Ok(Self(vec![stripped]))
    }

    /// Returns all stored numbers.
    pub fn numbers(&self) -> &[String] {
        &self.0
    }

    /// Swaps `old` for the numbers held by `replacement`.
    ///
    /// Returns `false` and leaves the list untouched when `old` is absent.
    /// Replacement is remove-then-append; list position is not preserved.
    pub(crate) fn swap(&mut self, old: &str, replacement: &Phone) -> bool {
        match self.0.iter().position(|number| number == old) {
            Some(index) => {
                self.0.remove(index);
                self.0.extend(replacement.0.iter().cloned());
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        format!("Phone:\t{}", self.0.join(", "))
    }
}

/// Date of birth; never later than today at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Result<Self, FieldValidationError> {
        let today = Local::now().date_naive();
        if date > today {
            return Err(FieldValidationError::FutureBirthday(date));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn render(&self) -> String {
        format!("Birthday:\t{}", self.0)
    }
}

/// Free-text postal address. No format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self) -> String {
        format!("Address:\t{}", self.0)
    }
}

/// Email address matching `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, FieldValidationError> {
        if !EMAIL_RE.is_match(raw) {
            return Err(FieldValidationError::BadEmailFormat(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self) -> String {
        format!("Email:\t{}", self.0)
    }
}

/// Sorted tag list derived from comma-separated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Parses comma-separated tags: split, trim, sort lexicographically.
    ///
    /// Empty input mints a placeholder tag stamped with the current wall
    /// clock; two placeholders minted within the same minute render
    /// identically. Space-separated input without a comma is rejected.
    pub fn new(raw: &str) -> Result<Self, FieldValidationError> {
        if raw.is_empty() {
            return Ok(Self::placeholder());
        }
        if raw.contains(' ') && !raw.contains(',') {
            return Err(FieldValidationError::MalformedTagList(raw.to_string()));
        }
        let mut tags: Vec<String> = raw.split(',').map(|tag| tag.trim().to_string()).collect();
        tags.sort();
        Ok(Self(tags))
    }

    /// Mints a single time-stamped placeholder tag.
    pub fn placeholder() -> Self {
        let stamp = Local::now().format("%m/%d/%Y, %H:%M");
        Self(vec![format!("NoneTag-{stamp}")])
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined sorted tags; the identity key of a tagged note.
    pub fn signature(&self) -> String {
        self.0.join(",")
    }

    pub fn render(&self) -> String {
        format!("Tags:\t{}", self.signature())
    }
}

/// Free-text note body. No format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteText(String);

impl NoteText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self) -> String {
        format!("Note:\t{}", self.0)
    }
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalized;

    #[test]
    fn capitalized_uppercases_first_and_lowercases_rest() {
        assert_eq!(capitalized("aLICE"), "Alice");
        assert_eq!(capitalized("bob"), "Bob");
        assert_eq!(capitalized(""), "");
    }
}
