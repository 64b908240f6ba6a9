use lithos_core::models::stone::StoneType;

use crate::plan::PlanContext;
use crate::StoneProtocol;

pub struct DrugInduced;

impl StoneProtocol for DrugInduced {
    fn stone_type(&self) -> StoneType {
        StoneType::DrugInduced
    }

    fn description(&self) -> &str {
        "Stones composed of a medication or its metabolites, or formed because a medication \
         alters urine chemistry."
    }

    fn recommendations(&self, _context: &PlanContext<'_>) -> Vec<String> {
        vec![
            "Withdraw the offending medication.".to_string(),
            "Increase urine volume.".to_string(),
        ]
    }
}
