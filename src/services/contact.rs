//! Contact service
//!
//! Implements the store operations: add, search, update, delete. Every
//! mutation rewrites the whole mapping to disk and leaves an audit entry.
//!
//! Fields are accepted as-is: no uniqueness check on the derived key and no
//! format validation of phone numbers or email addresses. Adding a contact
//! whose name collides with an existing key overwrites that record.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactField};
use crate::storage::Storage;

/// Outcome of an add: either a fresh record or a silent overwrite of a
/// same-key record
#[derive(Debug, Clone)]
pub struct AddOutcome {
    /// The key the contact was filed under
    pub key: String,
    /// The contact as stored
    pub contact: Contact,
    /// The record that was displaced, if the key was already taken
    pub replaced: Option<Contact>,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a contact, overwriting any existing record under the same
    /// derived key (last write wins)
    pub fn add(
        &self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        email_address: &str,
    ) -> AddressBookResult<AddOutcome> {
        let contact = Contact::new(first_name, last_name, phone_number, email_address);

        let (key, replaced) = self.storage.contacts.upsert(contact.clone())?;
        self.storage.contacts.save()?;

        match &replaced {
            Some(old) => self.storage.log_update(&key, old, &contact)?,
            None => self.storage.log_create(&key, &contact)?,
        }

        Ok(AddOutcome {
            key,
            contact,
            replaced,
        })
    }

    /// Find the first contact matching a first/last name pair
    /// (case-insensitive, deterministic key-order scan)
    pub fn search(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AddressBookResult<Option<(String, Contact)>> {
        self.storage.contacts.find_by_name(first_name, last_name)
    }

    /// Overwrite a single field of the contact stored under `key`
    ///
    /// The key is not recomputed when a name field changes; the record stays
    /// filed where it was added.
    pub fn update_field(
        &self,
        key: &str,
        field: ContactField,
        new_value: &str,
    ) -> AddressBookResult<Contact> {
        let mut contact = self
            .storage
            .contacts
            .get(key)?
            .ok_or_else(|| AddressBookError::contact_not_found(key))?;

        let before = contact.clone();
        contact.set_field(field, new_value);

        self.storage.contacts.replace(key, contact.clone())?;
        self.storage.contacts.save()?;
        self.storage.log_update(key, &before, &contact)?;

        Ok(contact)
    }

    /// Delete the contact stored under `key`
    ///
    /// Confirmation is the caller's concern; this removes unconditionally
    /// and errors on a missing key.
    pub fn delete(&self, key: &str) -> AddressBookResult<Contact> {
        let removed = self
            .storage
            .contacts
            .delete(key)?
            .ok_or_else(|| AddressBookError::contact_not_found(key))?;

        self.storage.contacts.save()?;
        self.storage.log_delete(key, &removed)?;

        Ok(removed)
    }

    /// Get the contact stored under `key`
    pub fn get(&self, key: &str) -> AddressBookResult<Option<Contact>> {
        self.storage.contacts.get(key)
    }

    /// List all contacts with their keys, in key order
    pub fn list(&self) -> AddressBookResult<Vec<(String, Contact)>> {
        self.storage.contacts.get_all()
    }

    /// Count contacts
    pub fn count(&self) -> AddressBookResult<usize> {
        self.storage.contacts.count()
    }
}
