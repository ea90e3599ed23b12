//! Configuration module for the address book
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AddressBookPaths;
pub use settings::Settings;
