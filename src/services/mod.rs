//! Business logic layer
//!
//! Services sit between the interactive surfaces and the storage layer,
//! persisting the whole store after every mutation.

pub mod contact;

pub use contact::ContactService;
