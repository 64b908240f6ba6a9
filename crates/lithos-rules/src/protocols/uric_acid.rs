use lithos_core::models::finding::FindingKey;
use lithos_core::models::patient::MedicalCondition;
use lithos_core::models::stone::StoneType;

use crate::findings::Finding;
use crate::plan::PlanContext;
use crate::StoneProtocol;

/// Uric acid: the most common radiolucent stone.
pub struct UricAcid;

impl StoneProtocol for UricAcid {
    fn stone_type(&self) -> StoneType {
        StoneType::UricAcid
    }

    fn description(&self) -> &str {
        "Uric acid stones are the most common radiolucent stone. Low urine pH (<5.5), low urine \
         volume, and hyperuricosuria are key factors in their pathogenesis."
    }

    fn recommendations(&self, context: &PlanContext<'_>) -> Vec<String> {
        let mut plan = vec![
            "Focus on raising urine pH to 6.5-7.0 using alkali therapy (potassium citrate or \
             sodium bicarbonate)."
                .to_string(),
        ];

        if context.patient.has_condition(&MedicalCondition::ChronicDiarrhea) {
            plan.push("Treat chronic diarrhea if present.".to_string());
        }

        plan.push("Advise lower animal protein intake.".to_string());

        if matches!(
            context.findings.get(FindingKey::UrineUricAcid),
            Some(Finding::Hyperuricosuria { .. })
        ) {
            plan.push(
                "Consider allopurinol if hyperuricosuric and stones persist despite pH \
                 normalization."
                    .to_string(),
            );
        }

        plan
    }
}
