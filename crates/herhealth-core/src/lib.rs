//! herhealth-core
//!
//! Pure domain types and storage key conventions.
//! No backend dependency. This is the shared vocabulary of the HerHealth
//! assessment crates.

pub mod error;
pub mod keys;
pub mod models;
