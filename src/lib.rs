//! addressbook - menu-driven terminal address book
//!
//! This library implements a small contact store: records are keyed by a
//! name-derived identifier, held fully in memory, and rewritten to a single
//! JSON file after every mutation. The interactive menu drives
//! add/search/update/delete through sequential terminal prompts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The contact record and its field selector
//! - `storage`: JSON file storage layer with atomic writes
//! - `services`: Business logic layer
//! - `audit`: Append-only audit log of mutations
//! - `display`: Terminal table/detail formatting
//! - `menu`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use addressbook::config::{paths::AddressBookPaths, settings::Settings};
//!
//! let paths = AddressBookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::AddressBookError;
