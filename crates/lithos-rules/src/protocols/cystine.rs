use lithos_core::models::stone::StoneType;

use crate::plan::PlanContext;
use crate::StoneProtocol;

/// Cystine: stones of inherited cystinuria.
pub struct Cystine;

impl StoneProtocol for Cystine {
    fn stone_type(&self) -> StoneType {
        StoneType::Cystine
    }

    fn description(&self) -> &str {
        "Cystinuria is a rare genetic disorder causing kidney stones, accounting for about 1% to \
         2% of kidney stones in adults and 6% to 8% in children. Cystine is poorly soluble in \
         urine at typical pH."
    }

    fn recommendations(&self, _context: &PlanContext<'_>) -> Vec<String> {
        vec![
            "Increase urine volume to achieve urine cystine <250 mg/L.".to_string(),
            "Restrict dietary sodium.".to_string(),
            "Reduce methionine and cystine intake through dietary restriction of animal protein."
                .to_string(),
            "Apply alkali therapy (potassium citrate or sodium bicarbonate) to maintain urine pH \
             between 7.0 and 7.5 to enhance cystine solubility."
                .to_string(),
            "If stones persist despite initial measures, consider thiol drugs (tiopronin, \
             penicillamine, captopril), acknowledging their cost and side effects."
                .to_string(),
        ]
    }
}
