use lithos_core::models::stone::StoneType;

use crate::plan::PlanContext;
use crate::StoneProtocol;

/// Struvite (magnesium ammonium phosphate): infection stones.
pub struct Struvite;

impl StoneProtocol for Struvite {
    fn stone_type(&self) -> StoneType {
        StoneType::Struvite
    }

    fn description(&self) -> &str {
        "Struvite stones comprise about 1% of all stones and result from chronic urinary tract \
         infection by urease-producing organisms such as Proteus. These can rapidly grow to fill \
         the renal pelvis (staghorn calculi)."
    }

    fn recommendations(&self, _context: &PlanContext<'_>) -> Vec<String> {
        vec![
            "Eradication of infection with antibiotics and early surgical removal of \
             bacteria-laden stones are the cornerstones of treatment."
                .to_string(),
            "Increase urine volume.".to_string(),
            "Urease inhibitors (e.g., acetohydroxamic acid) may be considered but have side \
             effects."
                .to_string(),
        ]
    }
}
