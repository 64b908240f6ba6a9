pub mod health;
pub mod interpret;
pub mod oxalate;
pub mod plans;
pub mod stone_types;
pub mod triage;
