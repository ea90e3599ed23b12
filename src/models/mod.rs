//! Core data models for the address book

pub mod contact;

pub use contact::{Contact, ContactField};
