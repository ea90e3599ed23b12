//! Contact model
//!
//! A contact is keyed by the concatenation of its first and last name
//! (`"John_Doe"`). The key is not a unique identifier: two contacts with the
//! same name collide and the later write wins. Name matching for search is
//! case-insensitive; the key itself is case-sensitive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record
///
/// All fields are free text. No format constraints are enforced on phone
/// numbers or email addresses; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number (free text)
    pub phone_number: String,

    /// Email address (free text)
    pub email_address: String,

    /// When the contact was created
    pub created_at: DateTime<Utc>,

    /// When the contact was last modified
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Derive the store key for a first/last name pair
    pub fn derive_key(first_name: &str, last_name: &str) -> String {
        format!("{}_{}", first_name, last_name)
    }

    /// The store key this contact is filed under when added
    ///
    /// Updating a name field afterwards does not move the record; the key
    /// is fixed at add time.
    pub fn key(&self) -> String {
        Self::derive_key(&self.first_name, &self.last_name)
    }

    /// Check whether this contact matches a first/last name pair
    /// (case-insensitive on both fields)
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
            && self.last_name.to_lowercase() == last_name.to_lowercase()
    }

    /// Read a single field by name
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::EmailAddress => &self.email_address,
        }
    }

    /// Overwrite a single field and bump the modification timestamp
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::PhoneNumber => self.phone_number = value,
            ContactField::EmailAddress => self.email_address = value,
        }
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {}",
            self.first_name, self.last_name, self.phone_number, self.email_address
        )
    }
}

/// The four updatable contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
    EmailAddress,
}

impl ContactField {
    /// Map a menu choice ("1".."4") to a field
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::FirstName),
            "2" => Some(Self::LastName),
            "3" => Some(Self::PhoneNumber),
            "4" => Some(Self::EmailAddress),
            _ => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "first name"),
            Self::LastName => write!(f, "last name"),
            Self::PhoneNumber => write!(f, "phone number"),
            Self::EmailAddress => write!(f, "email address"),
        }
    }
}
