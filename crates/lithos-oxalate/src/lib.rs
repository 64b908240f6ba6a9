//! lithos-oxalate
//!
//! Oxalate content of common foods, for patients on an oxalate-restricted
//! diet. Loads the food table from JSON and answers search queries.

pub mod error;
pub mod food;
pub mod table;
