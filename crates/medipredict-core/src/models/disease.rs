use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A condition the system can assess.
///
/// The serialized form is the human-readable name, which is also what the
/// prompt embeds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum DiseaseType {
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[serde(rename = "Breast Cancer")]
    BreastCancer,
}

impl DiseaseType {
    pub const ALL: [DiseaseType; 3] = [
        DiseaseType::Diabetes,
        DiseaseType::HeartDisease,
        DiseaseType::BreastCancer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseType::Diabetes => "Diabetes",
            DiseaseType::HeartDisease => "Heart Disease",
            DiseaseType::BreastCancer => "Breast Cancer",
        }
    }
}

impl fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
