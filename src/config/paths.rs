//! Path management for the address book
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `ADDRBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/addrbook` or `~/.config/addrbook`
//! 3. Windows: `%APPDATA%\addrbook`

use std::path::PathBuf;

use crate::error::AddressBookError;

/// Manages all paths used by the address book
#[derive(Debug, Clone)]
pub struct AddressBookPaths {
    /// Base directory for all address book data
    base_dir: PathBuf,
}

impl AddressBookPaths {
    /// Create a new AddressBookPaths instance
    ///
    /// Path resolution:
    /// 1. `ADDRBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/addrbook` or `~/.config/addrbook`
    /// 3. Windows: `%APPDATA%\addrbook`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AddressBookError> {
        let base_dir = if let Ok(custom) = std::env::var("ADDRBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AddressBookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/addrbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/addrbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/addrbook/)
    /// - Data directory (~/.config/addrbook/data/)
    pub fn ensure_directories(&self) -> Result<(), AddressBookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AddressBookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AddressBookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    AddressBookError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("addrbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AddressBookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("addrbook"))
}
