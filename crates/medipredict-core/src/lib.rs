//! medipredict-core
//!
//! Pure domain types: disease identifiers, typed patient records, and the
//! prediction request/result contract. No network or filesystem dependency.
//! This is the shared vocabulary of the MediPredict system.

pub mod error;
pub mod models;
