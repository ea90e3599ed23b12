//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AddressBookResult;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created
    Create,
    /// Contact was updated
    Update,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on a contact, keyed by the contact's store key,
/// with optional before/after snapshots for tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Store key of the affected contact
    pub key: String,

    /// JSON snapshot of the contact before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON snapshot of the contact after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build a create entry
    pub fn create<T: Serialize>(key: impl Into<String>, after: &T) -> AddressBookResult<Self> {
        Ok(Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            key: key.into(),
            before: None,
            after: Some(serde_json::to_value(after)?),
        })
    }

    /// Build an update entry with before/after snapshots
    pub fn update<T: Serialize>(
        key: impl Into<String>,
        before: &T,
        after: &T,
    ) -> AddressBookResult<Self> {
        Ok(Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            key: key.into(),
            before: Some(serde_json::to_value(before)?),
            after: Some(serde_json::to_value(after)?),
        })
    }

    /// Build a delete entry
    pub fn delete<T: Serialize>(key: impl Into<String>, before: &T) -> AddressBookResult<Self> {
        Ok(Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            key: key.into(),
            before: Some(serde_json::to_value(before)?),
            after: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    #[test]
    fn test_create_entry() {
        let contact = Contact::new("John", "Doe", "555", "j@x.com");
        let entry = AuditEntry::create("John_Doe", &contact).unwrap();

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.key, "John_Doe");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_has_both_snapshots() {
        let before = Contact::new("John", "Doe", "1", "a@x.com");
        let mut after = before.clone();
        after.phone_number = "2".to_string();

        let entry = AuditEntry::update("John_Doe", &before, &after).unwrap();
        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entry_serializes_as_json_line() {
        let contact = Contact::new("John", "Doe", "555", "j@x.com");
        let entry = AuditEntry::delete("John_Doe", &contact).unwrap();

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"delete\""));
        // Absent snapshot is omitted entirely
        assert!(!json.contains("\"after\""));
    }
}
