//! Presentation model for a completed assessment.
//!
//! Everything here is a direct projection of a [`PredictionResult`]; no
//! scores are recomputed.

use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::prediction::{PredictionResult, RiskLevel};
use serde::Serialize;
use ts_rs::TS;

/// Badge and gauge colour for a risk level.
pub fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "#10b981",
        RiskLevel::Moderate => "#f59e0b",
        RiskLevel::High => "#f97316",
        RiskLevel::Critical => "#ef4444",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultView {
    /// e.g. "Heart Disease Assessment".
    pub heading: String,
    /// e.g. "High Risk".
    pub badge: String,
    pub risk_score: f64,
    /// e.g. "42%".
    pub score_label: String,
    pub risk_level: RiskLevel,
    pub color: String,
    pub analysis: String,
    pub contributing_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ResultView {
    pub fn new(disease_type: DiseaseType, result: &PredictionResult) -> Self {
        Self {
            heading: format!("{disease_type} Assessment"),
            badge: format!("{} Risk", result.risk_level),
            risk_score: result.risk_score,
            score_label: format!("{}%", result.risk_score),
            risk_level: result.risk_level,
            color: risk_color(result.risk_level).to_string(),
            analysis: result.analysis.clone(),
            contributing_factors: result.contributing_factors.clone(),
            recommendations: result.recommendations.clone(),
        }
    }
}
