//! herhealth-storage
//!
//! Persistence sinks for completed assessments. The managed backend sits
//! behind [`sink::AssessmentSink`]; this crate ships an in-memory sink and a
//! JSON-file sink laid out with the `herhealth_core::keys` conventions.

pub mod error;
pub mod files;
pub mod memory;
pub mod sink;
