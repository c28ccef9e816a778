use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::disease::DiseaseType;
use crate::models::patient::PatientData;

/// Ordinal risk classification assigned to a prediction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission's worth of input to the prediction service.
///
/// Immutable once built. Serializes as
/// `{"diseaseType": ..., "patientData": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    patient_data: PatientData,
}

impl PredictionRequest {
    /// Pair a disease with its patient record.
    ///
    /// The only check is that the record belongs to `disease_type`.
    pub fn new(disease_type: DiseaseType, patient_data: PatientData) -> Result<Self, CoreError> {
        let actual = patient_data.disease_type();
        if actual != disease_type {
            return Err(CoreError::DiseaseMismatch {
                expected: disease_type,
                actual,
            });
        }
        Ok(Self { patient_data })
    }

    pub fn disease_type(&self) -> DiseaseType {
        self.patient_data.disease_type()
    }

    pub fn patient_data(&self) -> &PatientData {
        &self.patient_data
    }
}

/// The structured risk assessment returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictionResult {
    /// Probability-style score in `[0, 100]`.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub analysis: String,
    pub contributing_factors: Vec<String>,
    pub recommendations: Vec<String>,
}
