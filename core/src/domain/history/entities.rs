use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{assessment::entities::AssessmentResult, common::generate_uuid_v7};

/// A saved assessment in the device-local history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub result: AssessmentResult,
}

impl HistoryEntry {
    pub fn new(result: AssessmentResult) -> Self {
        Self {
            id: generate_uuid_v7(),
            saved_at: Utc::now(),
            result,
        }
    }
}
