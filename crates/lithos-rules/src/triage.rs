//! Acute stone episode triage.
//!
//! Admission is decided by symptoms alone; urgency is only graded for
//! admitted patients. The size note is appended in every case.

use lithos_core::models::triage::{AcuteGuidance, StoneSize, Symptoms, UrgencyLevel};

pub fn triage(symptoms: &Symptoms, stone_size: StoneSize) -> AcuteGuidance {
    let mut recommendations = Vec::new();

    let severe = symptoms.uncontrolled_pain
        || symptoms.vomiting
        || symptoms.fevers
        || symptoms.hydronephrosis;

    let urgency_level = if severe {
        recommendations.push("Consider Admission.".to_string());

        if symptoms.fevers || symptoms.aki || symptoms.anuria {
            recommendations.push("Urgent urology evaluation is required!".to_string());
            UrgencyLevel::Urgent
        } else {
            UrgencyLevel::Moderate
        }
    } else {
        recommendations.push("Can likely manage as outpatient.".to_string());
        UrgencyLevel::Routine
    };

    recommendations.push(size_guidance(stone_size).to_string());

    tracing::debug!(
        admission_needed = severe,
        urgency = ?urgency_level,
        stone_size = %stone_size,
        "triaged acute episode"
    );

    AcuteGuidance {
        admission_needed: severe,
        urgency_level,
        recommendations,
    }
}

/// Passage likelihood and management for a stone size.
pub fn size_guidance(stone_size: StoneSize) -> &'static str {
    match stone_size {
        StoneSize::Under5mm => {
            "Acute Management: >60% chance of passing. \
             Supportive treatment, Hydration, Strain urine."
        }
        StoneSize::From5To10mm => {
            "Acute Management: ~50% chance of passing. Supportive care, Hydration, Medical \
             expulsive therapy (e.g., alpha-blockers for distal stones), Strain urine."
        }
        StoneSize::Over10mm => {
            "Acute Management: <25% chance of passing. Urology evaluation, Strain urine."
        }
        StoneSize::Unknown => {
            "Acute Management: Supportive care, Hydration, Strain urine. Consider imaging for size \
             if not done."
        }
    }
}
