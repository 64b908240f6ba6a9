use lithos_core::models::finding::FindingKey;
use lithos_core::models::patient::{MedicalCondition, Medication};
use lithos_core::models::stone::StoneType;

use crate::findings::Finding;
use crate::plan::PlanContext;
use crate::StoneProtocol;

/// mEq/L
pub const HYPOKALEMIA_BELOW_MEQ_L: f64 = 3.5;
/// mEq/L
pub const METABOLIC_ACIDOSIS_BICARBONATE_BELOW_MEQ_L: f64 = 22.0;

/// Drugs that raise urine pH.
const ALKALINIZING_MEDICATIONS: [Medication; 2] =
    [Medication::Topiramate, Medication::Acetazolamide];

/// Calcium phosphate: favoured by a high urine pH, often with hypocitraturia.
pub struct CalciumPhosphate;

impl StoneProtocol for CalciumPhosphate {
    fn stone_type(&self) -> StoneType {
        StoneType::CalciumPhosphate
    }

    fn description(&self) -> &str {
        "Calcium phosphate stones are less soluble at a higher pH. A major pathophysiologic \
         factor leading to calcium phosphate stone formation is higher urine pH (typically \
         >=6.2), often with hypocitraturia."
    }

    fn recommendations(&self, context: &PlanContext<'_>) -> Vec<String> {
        let patient = context.patient;
        let mut plan = vec![
            "Focus on addressing reversible factors for calcium phosphate stones.".to_string(),
        ];

        let alkaline_with_rta = matches!(
            context.findings.get(FindingKey::UrinePh),
            Some(Finding::AlkalinePhWithRta { .. })
        );
        if alkaline_with_rta && patient.takes_any(&ALKALINIZING_MEDICATIONS) {
            plan.push(
                "Discontinuation of offending medications that increase urine pH (e.g., \
                 topiramate, acetazolamide) is critical."
                    .to_string(),
            );
        }

        plan.push("Restrict sodium intake.".to_string());
        plan.push("Administer thiazide if hypercalciuric.".to_string());

        if context
            .serum
            .is_some_and(|s| s.potassium_meq_l < HYPOKALEMIA_BELOW_MEQ_L)
        {
            plan.push("Treat hypokalemia if hypocitraturic.".to_string());
            plan.push(
                "Consider adding potassium chloride if there is concomitant potassium deficiency \
                 to help lower urine pH and increase citrate."
                    .to_string(),
            );
        }

        let acidotic = context
            .serum
            .is_some_and(|s| s.bicarbonate_meq_l < METABOLIC_ACIDOSIS_BICARBONATE_BELOW_MEQ_L);
        if patient.has_condition(&MedicalCondition::RenalTubularAcidosis) || acidotic {
            plan.push(
                "Treat metabolic acidosis with potassium citrate while avoiding excessive urinary \
                 alkalinization."
                    .to_string(),
            );
        }

        plan
    }
}
