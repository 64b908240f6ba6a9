//! lithos-rules
//!
//! The decision-support engine. Pure functions, no I/O: urine
//! interpretation, chronic management plans per stone type, and acute
//! triage.

pub mod error;
pub mod findings;
pub mod interpret;
pub mod plan;
pub mod protocols;
pub mod triage;

use lithos_core::models::stone::StoneType;

use plan::PlanContext;

/// Trait implemented by each stone-type management protocol.
pub trait StoneProtocol: Send + Sync {
    /// The stone classification this protocol manages.
    fn stone_type(&self) -> StoneType;

    /// Unique identifier (e.g., "calcium_oxalate").
    fn id(&self) -> &str {
        self.stone_type().id()
    }

    /// Human-readable name (e.g., "Calcium Oxalate").
    fn name(&self) -> &str {
        self.stone_type().label()
    }

    /// Short description of the stone type and its pathogenesis.
    fn description(&self) -> &str;

    /// Type-specific recommendations, in priority order. The universal
    /// volume recommendation is not included.
    fn recommendations(&self, context: &PlanContext<'_>) -> Vec<String>;
}

/// Return all registered protocols. `StoneType::Unknown` has none.
pub fn all_protocols() -> Vec<Box<dyn StoneProtocol>> {
    vec![
        Box::new(protocols::calcium_oxalate::CalciumOxalate),
        Box::new(protocols::calcium_phosphate::CalciumPhosphate),
        Box::new(protocols::uric_acid::UricAcid),
        Box::new(protocols::struvite::Struvite),
        Box::new(protocols::cystine::Cystine),
        Box::new(protocols::drug_induced::DrugInduced),
    ]
}

/// Look up a protocol by stone type.
pub fn protocol_for(stone_type: StoneType) -> Option<Box<dyn StoneProtocol>> {
    all_protocols()
        .into_iter()
        .find(|p| p.stone_type() == stone_type)
}

/// Look up a protocol by ID.
pub fn get_protocol(id: &str) -> Option<Box<dyn StoneProtocol>> {
    all_protocols().into_iter().find(|p| p.id() == id)
}
