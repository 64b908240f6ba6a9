use serde::Serialize;

use lithos_core::models::finding::{FindingKey, FindingNote};

/// How far a finding departs from the reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational, not tied to a measurement.
    Info,
    Abnormal,
    /// Abnormal and past a second, disease-suggestive threshold.
    Marked,
}

/// One interpretation finding together with the measurement that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum Finding {
    LowVolume { volume_l: f64 },
    AcidicPh { ph: f64 },
    AlkalinePhWithRta { ph: f64 },
    VeryAlkalinePh { ph: f64 },
    Hypercalciuria { calcium_mg: f64 },
    ElevatedOxalate { oxalate_mg: f64, primary_hyperoxaluria: bool },
    Hypocitraturia { citrate_mg: f64 },
    Hyperuricosuria { uric_acid_mg: f64 },
    HighSodium { sodium_meq: f64 },
    HighSulfate { sulfate_mmol: f64 },
    HighAmmonium { ammonium_mmol: f64 },
    ElevatedCystine { cystine_mg: f64, cystinuria: bool },
    SupersaturationTargets,
}

impl Finding {
    pub fn key(&self) -> FindingKey {
        match self {
            Finding::LowVolume { .. } => FindingKey::UrineVolume,
            Finding::AcidicPh { .. }
            | Finding::AlkalinePhWithRta { .. }
            | Finding::VeryAlkalinePh { .. } => FindingKey::UrinePh,
            Finding::Hypercalciuria { .. } => FindingKey::UrineCalcium,
            Finding::ElevatedOxalate { .. } => FindingKey::UrineOxalate,
            Finding::Hypocitraturia { .. } => FindingKey::UrineCitrate,
            Finding::Hyperuricosuria { .. } => FindingKey::UrineUricAcid,
            Finding::HighSodium { .. } => FindingKey::UrineSodium,
            Finding::HighSulfate { .. } => FindingKey::UrineSulfate,
            Finding::HighAmmonium { .. } => FindingKey::UrineAmmonium,
            Finding::ElevatedCystine { .. } => FindingKey::UrineCystine,
            Finding::SupersaturationTargets => FindingKey::SupersaturationTargets,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Finding::SupersaturationTargets => Severity::Info,
            Finding::ElevatedOxalate {
                primary_hyperoxaluria: true,
                ..
            }
            | Finding::ElevatedCystine {
                cystinuria: true, ..
            } => Severity::Marked,
            _ => Severity::Abnormal,
        }
    }

    /// Human-readable text shown to the clinician. Volume and pH are
    /// decimal readings and always keep their fractional digit ("2.0").
    pub fn message(&self) -> String {
        match self {
            Finding::LowVolume { volume_l } => format!(
                "Low urine volume ({volume_l:?} L/d). Goal is ~2.5 L/d for reducing recurrence \
                 risk."
            ),
            Finding::AcidicPh { ph } => {
                format!("Acidic urine pH ({ph:?}). May increase risk of uric acid stones.")
            }
            Finding::AlkalinePhWithRta { ph } => format!(
                "Alkaline urine pH ({ph:?}) with diagnosed Renal Tubular Acidosis (RTA). \
                 Suggests a risk for calcium phosphate stones."
            ),
            Finding::VeryAlkalinePh { ph } => format!(
                "Very alkaline urine pH ({ph:?}). May indicate urine infection by bacteria \
                 with urease and a risk for struvite stones."
            ),
            Finding::Hypercalciuria { calcium_mg } => format!(
                "Hypercalciuria ({calcium_mg} mg/d). Levels >150 mg/d increase stone risk. \
                 Correlate with urine sodium."
            ),
            Finding::ElevatedOxalate {
                oxalate_mg,
                primary_hyperoxaluria,
            } => {
                let mut message = format!(
                    "Elevated urine oxalate ({oxalate_mg} mg/d). Values >40 mg/d are excessive."
                );
                if *primary_hyperoxaluria {
                    message.push_str(" For values >80 mg/d, consider primary hyperoxaluria.");
                }
                message
            }
            Finding::Hypocitraturia { citrate_mg } => format!(
                "Low urine citrate ({citrate_mg} mg/d). Values <400 mg/d may limit risk for \
                 calcareous stones."
            ),
            Finding::Hyperuricosuria { uric_acid_mg } => format!(
                "High urine uric acid ({uric_acid_mg} mg/d). Consider xanthine oxidase \
                 inhibitor or reduced purine intake if recurrent calcium oxalate or uric acid \
                 stones persist."
            ),
            Finding::HighSodium { sodium_meq } => format!(
                "High urine sodium ({sodium_meq} mEq). If hypercalciuria is present, a goal of \
                 <100 mEq/d is sought."
            ),
            Finding::HighSulfate { sulfate_mmol } => format!(
                "High urine sulfate ({sulfate_mmol} mmol/d). Suggests excessive dietary animal \
                 protein."
            ),
            Finding::HighAmmonium { ammonium_mmol } => format!(
                "High urine ammonium ({ammonium_mmol} mmol/d). Suggests excess acid production \
                 from diet, chronic diarrhea, or other cause."
            ),
            Finding::ElevatedCystine {
                cystine_mg,
                cystinuria,
            } => {
                let mut message = format!(
                    "Elevated urine cystine ({cystine_mg} mg/d). Normal individuals typically \
                     excrete <30 mg/d. Patients with cystinuria generally excrete >400 mg/d."
                );
                if *cystinuria {
                    message.push_str(" Highly suggestive of cystinuria.");
                }
                message
            }
            Finding::SupersaturationTargets => "General supersaturation targets for reducing \
                 risk are <4 for calcium oxalate stones and <1 for calcium phosphate and uric \
                 acid stones."
                .to_string(),
        }
    }

    pub fn note(&self) -> FindingNote {
        FindingNote {
            key: self.key(),
            message: self.message(),
        }
    }
}

/// Interpretation result: at most one finding per [`FindingKey`], kept in
/// the order the rules produced them. Look findings up by key; position
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FindingsMap {
    findings: Vec<Finding>,
}

impl FindingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finding, replacing any existing finding with the same key
    /// in place.
    pub fn insert(&mut self, finding: Finding) {
        let key = finding.key();
        match self.findings.iter_mut().find(|f| f.key() == key) {
            Some(existing) => *existing = finding,
            None => self.findings.push(finding),
        }
    }

    pub fn get(&self, key: FindingKey) -> Option<&Finding> {
        self.findings.iter().find(|f| f.key() == key)
    }

    pub fn contains(&self, key: FindingKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = FindingKey> + '_ {
        self.findings.iter().map(Finding::key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn notes(&self) -> Vec<FindingNote> {
        self.findings.iter().map(Finding::note).collect()
    }
}

impl FromIterator<Finding> for FindingsMap {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        let mut map = FindingsMap::new();
        for finding in iter {
            map.insert(finding);
        }
        map
    }
}
