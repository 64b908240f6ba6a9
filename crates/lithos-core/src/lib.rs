//! lithos-core
//!
//! Pure domain types for kidney-stone decision support: patient, urine and
//! serum records, stone classification, finding keys and triage inputs.
//! No rules live here; this is the shared vocabulary of the Lithos system.

pub mod error;
pub mod models;
