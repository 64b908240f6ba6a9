use lithos_core::models::finding::FindingKey;
use lithos_core::models::patient::{Gender, MedicalCondition, PatientProfile};
use lithos_core::models::urine::UrineProfile;
use lithos_rules::error::RulesError;
use lithos_rules::findings::{Finding, Severity};
use lithos_rules::interpret::{interpret, interpret_record};
use serde_json::json;

fn normal_urine() -> UrineProfile {
    UrineProfile {
        volume_l: 2.6,
        ph: 6.2,
        calcium_mg: 120.0,
        oxalate_mg: 30.0,
        phosphorus_mg: 800.0,
        uric_acid_mg: 500.0,
        sodium_meq: 90.0,
        potassium_meq: 60.0,
        magnesium_mg: 90.0,
        sulfate_mmol: 20.0,
        ammonium_mmol: 30.0,
        citrate_mg: 600.0,
        cystine_mg: 0.0,
    }
}

fn patient(conditions: &[MedicalCondition]) -> PatientProfile {
    PatientProfile {
        age: 52,
        gender: Gender::Male,
        num_prior_stones: 1,
        first_stone_age: Some(48),
        family_history: false,
        bmi: 29.1,
        medical_conditions: conditions.to_vec(),
        medications: Vec::new(),
        fluid_intake_l: 1.5,
    }
}

fn ph_findings(urine: &UrineProfile, patient: Option<&PatientProfile>) -> usize {
    interpret(urine, patient)
        .iter()
        .filter(|f| {
            matches!(
                f,
                Finding::AcidicPh { .. }
                    | Finding::AlkalinePhWithRta { .. }
                    | Finding::VeryAlkalinePh { .. }
            )
        })
        .count()
}

#[test]
fn normal_profile_only_carries_supersaturation_note() {
    let findings = interpret(&normal_urine(), None);
    assert_eq!(findings.keys().collect::<Vec<_>>(), vec![FindingKey::SupersaturationTargets]);
    assert_eq!(
        findings.get(FindingKey::SupersaturationTargets).map(Finding::severity),
        Some(Severity::Info)
    );
}

#[test]
fn volume_finding_tracks_goal() {
    for (volume, expected) in [(2.4, true), (2.5, false), (3.1, false), (0.9, true)] {
        let urine = UrineProfile {
            volume_l: volume,
            ..normal_urine()
        };
        assert_eq!(
            interpret(&urine, None).contains(FindingKey::UrineVolume),
            expected,
            "volume {volume}"
        );
    }
}

#[test]
fn reference_scenario() {
    let urine = UrineProfile {
        volume_l: 1.8,
        ph: 6.5,
        calcium_mg: 200.0,
        oxalate_mg: 90.0,
        citrate_mg: 300.0,
        uric_acid_mg: 500.0,
        sodium_meq: 150.0,
        sulfate_mmol: 20.0,
        ammonium_mmol: 30.0,
        cystine_mg: 0.0,
        ..normal_urine()
    };
    let findings = interpret(&urine, Some(&patient(&[])));

    for key in [
        FindingKey::UrineVolume,
        FindingKey::UrineCalcium,
        FindingKey::UrineOxalate,
        FindingKey::UrineCitrate,
        FindingKey::UrineSodium,
        FindingKey::SupersaturationTargets,
    ] {
        assert!(findings.contains(key), "missing {key}");
    }
    assert!(!findings.contains(FindingKey::UrinePh));
    assert!(!findings.contains(FindingKey::UrineUricAcid));

    let oxalate = findings.get(FindingKey::UrineOxalate).unwrap();
    assert!(oxalate.message().contains("primary hyperoxaluria"));
    assert_eq!(oxalate.severity(), Severity::Marked);

    assert_eq!(
        findings.get(FindingKey::UrineVolume).unwrap().message(),
        "Low urine volume (1.8 L/d). Goal is ~2.5 L/d for reducing recurrence risk."
    );
}

#[test]
fn acidic_ph_wins_even_with_rta() {
    let urine = UrineProfile {
        ph: 5.5,
        ..normal_urine()
    };
    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);
    let findings = interpret(&urine, Some(&rta));
    assert!(matches!(
        findings.get(FindingKey::UrinePh),
        Some(Finding::AcidicPh { .. })
    ));
}

#[test]
fn rta_takes_priority_over_very_alkaline() {
    let urine = UrineProfile {
        ph: 7.4,
        ..normal_urine()
    };
    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);

    let with_rta = interpret(&urine, Some(&rta));
    let finding = with_rta.get(FindingKey::UrinePh).unwrap();
    assert!(matches!(finding, Finding::AlkalinePhWithRta { .. }));
    assert!(finding.message().starts_with("Alkaline urine pH (7.4)"));

    let without = interpret(&urine, Some(&patient(&[])));
    assert!(matches!(
        without.get(FindingKey::UrinePh),
        Some(Finding::VeryAlkalinePh { .. })
    ));
}

#[test]
fn rta_flags_ph_at_six() {
    let urine = UrineProfile {
        ph: 6.0,
        ..normal_urine()
    };
    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);
    assert!(interpret(&urine, Some(&rta)).contains(FindingKey::UrinePh));
    assert!(!interpret(&urine, None).contains(FindingKey::UrinePh));
}

#[test]
fn decimal_readings_keep_fractional_digit() {
    let urine = UrineProfile {
        volume_l: 2.0,
        ph: 5.0,
        ..normal_urine()
    };
    let findings = interpret(&urine, None);
    assert!(
        findings
            .get(FindingKey::UrineVolume)
            .unwrap()
            .message()
            .starts_with("Low urine volume (2.0 L/d).")
    );
    assert_eq!(
        findings.get(FindingKey::UrinePh).unwrap().message(),
        "Acidic urine pH (5.0). May increase risk of uric acid stones."
    );

    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);
    let neutral = UrineProfile {
        ph: 6.0,
        ..normal_urine()
    };
    let message = interpret(&neutral, Some(&rta))
        .get(FindingKey::UrinePh)
        .unwrap()
        .message();
    assert!(message.starts_with("Alkaline urine pH (6.0) with diagnosed Renal Tubular Acidosis"));
}

#[test]
fn at_most_one_ph_finding() {
    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);
    let plain = patient(&[]);
    for ph in [4.5, 5.9, 6.0, 6.5, 7.0, 7.1, 8.5] {
        let urine = UrineProfile {
            ph,
            ..normal_urine()
        };
        for p in [None, Some(&rta), Some(&plain)] {
            assert!(ph_findings(&urine, p) <= 1, "ph {ph}");
        }
    }
}

#[test]
fn sodium_requires_hypercalciuria() {
    let borderline = UrineProfile {
        calcium_mg: 150.0,
        sodium_meq: 180.0,
        ..normal_urine()
    };
    let findings = interpret(&borderline, None);
    assert!(!findings.contains(FindingKey::UrineSodium));
    assert!(!findings.contains(FindingKey::UrineCalcium));

    let hypercalciuric = UrineProfile {
        calcium_mg: 151.0,
        ..borderline
    };
    assert!(interpret(&hypercalciuric, None).contains(FindingKey::UrineSodium));
}

#[test]
fn oxalate_between_thresholds_is_not_marked() {
    let urine = UrineProfile {
        oxalate_mg: 80.0,
        ..normal_urine()
    };
    let findings = interpret(&urine, None);
    let oxalate = findings.get(FindingKey::UrineOxalate).unwrap();
    assert!(!oxalate.message().contains("primary hyperoxaluria"));
    assert_eq!(oxalate.severity(), Severity::Abnormal);
}

#[test]
fn cystine_escalates_to_cystinuria() {
    let elevated = UrineProfile {
        cystine_mg: 120.0,
        ..normal_urine()
    };
    let message = interpret(&elevated, None)
        .get(FindingKey::UrineCystine)
        .unwrap()
        .message();
    assert!(!message.ends_with("Highly suggestive of cystinuria."));

    let cystinuric = UrineProfile {
        cystine_mg: 650.0,
        ..normal_urine()
    };
    let message = interpret(&cystinuric, None)
        .get(FindingKey::UrineCystine)
        .unwrap()
        .message();
    assert!(message.ends_with("Highly suggestive of cystinuria."));
}

#[test]
fn diet_markers_are_flagged() {
    let urine = UrineProfile {
        uric_acid_mg: 800.0,
        sulfate_mmol: 35.0,
        ammonium_mmol: 50.0,
        ..normal_urine()
    };
    let findings = interpret(&urine, None);
    assert!(findings.contains(FindingKey::UrineUricAcid));
    assert!(findings.contains(FindingKey::UrineSulfate));
    assert!(findings.contains(FindingKey::UrineAmmonium));
}

#[test]
fn interpretation_is_repeatable() {
    let urine = UrineProfile {
        volume_l: 1.2,
        calcium_mg: 300.0,
        sodium_meq: 200.0,
        ..normal_urine()
    };
    let rta = patient(&[MedicalCondition::RenalTubularAcidosis]);
    assert_eq!(interpret(&urine, Some(&rta)), interpret(&urine, Some(&rta)));
}

#[test]
fn record_missing_analyte_fails_before_interpreting() {
    let record = json!({ "volume_L": 1.5, "ph": 6.0 });
    match interpret_record(&record, None) {
        Err(RulesError::Record(e)) => {
            assert_eq!(e.to_string(), "missing required field: calcium_mg")
        }
        other => panic!("expected missing field error, got {other:?}"),
    }
}

#[test]
fn notes_render_keys_and_messages() {
    let urine = UrineProfile {
        citrate_mg: 250.0,
        ..normal_urine()
    };
    let notes = interpret(&urine, None).notes();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].key, FindingKey::UrineCitrate);
    assert!(notes[0].message.starts_with("Low urine citrate (250 mg/d)."));
}
