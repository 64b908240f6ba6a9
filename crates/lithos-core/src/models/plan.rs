use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::finding::FindingNote;
use super::stone::StoneType;

/// Snapshot of a generated chronic management plan: the interpretation it
/// was derived from and the ordered recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanRecord {
    pub id: Uuid,
    pub stone_type: StoneType,
    pub findings: Vec<FindingNote>,
    pub recommendations: Vec<String>,
    pub created_at: jiff::Timestamp,
}

impl PlanRecord {
    pub fn new(
        stone_type: StoneType,
        findings: Vec<FindingNote>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stone_type,
            findings,
            recommendations,
            created_at: jiff::Timestamp::now(),
        }
    }
}
