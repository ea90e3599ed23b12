//! Storage layer for the address book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::AddressBookPaths;
use crate::error::AddressBookError;
use crate::models::Contact;

/// Main storage coordinator
///
/// Owns the contact repository and the audit log. Created with constructor
/// injection so tests can point it at a temporary directory.
pub struct Storage {
    pub contacts: ContactRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: &AddressBookPaths) -> Result<Self, AddressBookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Load all data from disk
    ///
    /// Fatal on a corrupt contacts file; the process cannot proceed with
    /// unreadable storage.
    pub fn load_all(&mut self) -> Result<(), AddressBookError> {
        self.contacts.load()?;
        Ok(())
    }

    /// Record a contact creation in the audit log
    pub fn log_create(&self, key: &str, after: &Contact) -> Result<(), AddressBookError> {
        self.audit.log(&AuditEntry::create(key, after)?)
    }

    /// Record a contact update in the audit log
    pub fn log_update(
        &self,
        key: &str,
        before: &Contact,
        after: &Contact,
    ) -> Result<(), AddressBookError> {
        self.audit.log(&AuditEntry::update(key, before, after)?)
    }

    /// Record a contact deletion in the audit log
    pub fn log_delete(&self, key: &str, before: &Contact) -> Result<(), AddressBookError> {
        self.audit.log(&AuditEntry::delete(key, before)?)
    }
}
