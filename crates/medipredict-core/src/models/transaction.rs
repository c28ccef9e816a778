use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::disease::DiseaseType;
use super::token_count::TokenCount;

/// A completed prediction transaction: one traced call to the external model.
///
/// Kept in memory for the session only; clinical inputs are not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionTransaction {
    pub id: Uuid,
    pub disease_type: DiseaseType,
    pub model_id: String,
    pub usage: TokenCount,
    pub started_at: jiff::Timestamp,
    pub completed_at: jiff::Timestamp,
}
