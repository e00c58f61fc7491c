//! herhealth-flow
//!
//! Drives one assessment run from the education screen through to the
//! doctor directory, and hands the finished result to the persistence sink
//! without waiting on it.

pub mod error;
pub mod run;
pub mod session;
pub mod step;
pub mod submit;
