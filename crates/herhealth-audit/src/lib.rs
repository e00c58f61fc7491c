//! herhealth-audit
//!
//! Structured audit events for assessment submissions, emitted through
//! `tracing` so they land wherever the process subscriber sends logs.

pub mod events;
