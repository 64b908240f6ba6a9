pub mod calcium_oxalate;
pub mod calcium_phosphate;
pub mod cystine;
pub mod drug_induced;
pub mod struvite;
pub mod uric_acid;
