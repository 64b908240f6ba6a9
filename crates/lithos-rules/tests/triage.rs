use lithos_core::models::triage::{StoneSize, Symptoms, UrgencyLevel};
use lithos_rules::triage::{size_guidance, triage};

#[test]
fn fever_with_large_stone_is_urgent() {
    let symptoms = Symptoms {
        fevers: true,
        ..Default::default()
    };
    let guidance = triage(&symptoms, StoneSize::Over10mm);

    assert!(guidance.admission_needed);
    assert_eq!(guidance.urgency_level, UrgencyLevel::Urgent);
    assert_eq!(
        guidance.recommendations,
        vec![
            "Consider Admission.".to_string(),
            "Urgent urology evaluation is required!".to_string(),
            "Acute Management: <25% chance of passing. Urology evaluation, Strain urine."
                .to_string(),
        ]
    );
}

#[test]
fn severe_without_urgent_markers_is_moderate() {
    let symptoms = Symptoms {
        vomiting: true,
        ..Default::default()
    };
    let guidance = triage(&symptoms, StoneSize::From5To10mm);

    assert!(guidance.admission_needed);
    assert_eq!(guidance.urgency_level, UrgencyLevel::Moderate);
    assert_eq!(guidance.recommendations.len(), 2);
    assert!(guidance.recommendations[1].contains("~50% chance of passing"));
}

#[test]
fn aki_alone_does_not_admit() {
    let symptoms = Symptoms {
        aki: true,
        anuria: true,
        ..Default::default()
    };
    let guidance = triage(&symptoms, StoneSize::Under5mm);

    assert!(!guidance.admission_needed);
    assert_eq!(guidance.urgency_level, UrgencyLevel::Routine);
    assert_eq!(guidance.recommendations[0], "Can likely manage as outpatient.");
    assert!(guidance.recommendations[1].contains(">60% chance of passing"));
}

#[test]
fn unknown_size_suggests_imaging() {
    let guidance = triage(&Symptoms::default(), StoneSize::from("7mm"));
    assert_eq!(guidance.recommendations.len(), 2);
    assert!(guidance.recommendations[1].ends_with("Consider imaging for size if not done."));
}

#[test]
fn size_note_is_appended_once() {
    let symptoms = Symptoms {
        uncontrolled_pain: true,
        hydronephrosis: true,
        anuria: true,
        ..Default::default()
    };
    for size in [
        StoneSize::Under5mm,
        StoneSize::From5To10mm,
        StoneSize::Over10mm,
        StoneSize::Unknown,
    ] {
        let guidance = triage(&symptoms, size);
        let size_notes = guidance
            .recommendations
            .iter()
            .filter(|r| r.starts_with("Acute Management:"))
            .count();
        assert_eq!(size_notes, 1);
        assert_eq!(guidance.recommendations.last().unwrap(), size_guidance(size));
    }
}
