//! Contact repository for JSON storage
//!
//! Manages loading and saving the contact mapping to contacts.json.
//! The whole mapping is held in memory and rewritten to disk after every
//! mutation; there is no incremental persistence.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::AddressBookError;
use crate::models::Contact;

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout: a single serialized mapping from key to contact
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

/// Repository for contact persistence
///
/// Keys are derived from names at add time and are not unique identifiers:
/// inserting a contact whose name collides with an existing key overwrites
/// the existing record. The ordered map makes search scan order (and
/// therefore "first match" semantics) deterministic.
pub struct ContactRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Contact>>,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load contacts from disk
    ///
    /// A missing file leaves the store empty; a corrupt file is an error.
    pub fn load(&self) -> Result<(), AddressBookError> {
        let book: ContactBook = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = book.contacts;

        Ok(())
    }

    /// Save the whole contact mapping to disk
    pub fn save(&self) -> Result<(), AddressBookError> {
        let data = self
            .data
            .read()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let book = ContactBook {
            contacts: data.clone(),
        };
        write_json_atomic(&self.path, &book)
    }

    /// Get a contact by key
    pub fn get(&self, key: &str) -> Result<Option<Contact>, AddressBookError> {
        let data = self
            .data
            .read()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(key).cloned())
    }

    /// Get all contacts with their keys, in key order
    pub fn get_all(&self) -> Result<Vec<(String, Contact)>, AddressBookError> {
        let data = self
            .data
            .read()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().map(|(k, c)| (k.clone(), c.clone())).collect())
    }

    /// Find the first contact matching a first/last name pair
    /// (case-insensitive linear scan in key order)
    pub fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<(String, Contact)>, AddressBookError> {
        let data = self
            .data
            .read()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|(_, contact)| contact.matches_name(first_name, last_name))
            .map(|(key, contact)| (key.clone(), contact.clone())))
    }

    /// Insert a contact under its derived key, overwriting any existing
    /// record under that key (last write wins)
    ///
    /// Returns the key and the record that was displaced, if any.
    pub fn upsert(&self, contact: Contact) -> Result<(String, Option<Contact>), AddressBookError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key = contact.key();
        let previous = data.insert(key.clone(), contact);
        Ok((key, previous))
    }

    /// Replace the contact stored under an existing key
    ///
    /// Used by update: the key is never recomputed, even when a name field
    /// changed.
    pub fn replace(&self, key: &str, contact: Contact) -> Result<(), AddressBookError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(key.to_string(), contact);
        Ok(())
    }

    /// Delete a contact by key, returning the removed record if it existed
    pub fn delete(&self, key: &str) -> Result<Option<Contact>, AddressBookError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(key))
    }

    /// Count contacts
    pub fn count(&self) -> Result<usize, AddressBookError> {
        let data = self
            .data
            .read()
            .map_err(|e| AddressBookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
