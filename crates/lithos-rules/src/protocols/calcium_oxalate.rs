use lithos_core::models::finding::FindingKey;
use lithos_core::models::patient::MedicalCondition;
use lithos_core::models::stone::StoneType;

use crate::findings::Finding;
use crate::plan::PlanContext;
use crate::StoneProtocol;

/// mg/dL. Together with a non-suppressed PTH, suggests primary hyperparathyroidism.
pub const HYPERCALCEMIA_MG_DL: f64 = 10.8;
/// pg/mL
pub const NON_SUPPRESSED_PTH_PG_ML: f64 = 70.0;

/// Calcium oxalate: the most common stone type.
pub struct CalciumOxalate;

impl StoneProtocol for CalciumOxalate {
    fn stone_type(&self) -> StoneType {
        StoneType::CalciumOxalate
    }

    fn description(&self) -> &str {
        "The majority of kidney stones are composed of calcium oxalate. Predisposing factors \
         include low urine volume, hypercalciuria, hypocitraturia, and hyperoxaluria."
    }

    fn recommendations(&self, context: &PlanContext<'_>) -> Vec<String> {
        let findings = context.findings;
        let mut plan = vec![
            "Focus on addressing reversible factors for calcium oxalate stones.".to_string(),
        ];

        if findings.contains(FindingKey::UrineCalcium) {
            plan.push("Restrict sodium intake (<2,300 mg/d).".to_string());
            plan.push("Administer thiazide if hypercalciuric.".to_string());
        }

        plan.push(
            "Optimize calcium intake (1,000-1,200 mg/d). Avoid strict calcium restriction as it \
             can worsen hyperoxaluria and bone loss."
                .to_string(),
        );

        if matches!(
            findings.get(FindingKey::UrineCitrate),
            Some(Finding::Hypocitraturia { .. })
        ) {
            plan.push(
                "Administer potassium citrate and/or treat potassium deficiency if hypocitraturic."
                    .to_string(),
            );
        }

        if matches!(
            findings.get(FindingKey::UrineOxalate),
            Some(Finding::ElevatedOxalate { .. })
        ) {
            plan.push("Consider oxalate restriction for significant hyperoxaluria.".to_string());
            plan.push("Consider sucrose/fructose restriction.".to_string());
            plan.push(
                "Consider calcium citrate with meals to bind intestinal oxalate.".to_string(),
            );
        }

        plan.push("Restrict animal protein.".to_string());

        if context.patient.has_condition(&MedicalCondition::Malabsorption) {
            plan.push(
                "Given history of malabsorption, consider enteric hyperoxaluria. Calcium citrate \
                 with meals is particularly relevant."
                    .to_string(),
            );
        }

        if let Some(serum) = context.serum
            && serum.calcium_mg_dl >= HYPERCALCEMIA_MG_DL
            && serum.intact_pth_pg_ml >= NON_SUPPRESSED_PTH_PG_ML
        {
            plan.push(
                "Given hypercalcemia and non-suppressed PTH, primary hyperparathyroidism is \
                 likely. Parathyroidectomy is the most appropriate therapy."
                    .to_string(),
            );
        }

        plan
    }
}
