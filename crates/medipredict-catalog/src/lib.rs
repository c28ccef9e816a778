//! medipredict-catalog
//!
//! The disease catalog and form controller. Pure data and validation, no
//! network dependency. Defines the fields, constraints, and defaults of each
//! assessable condition, and how raw form input becomes a typed patient
//! record.

pub mod controller;
pub mod diseases;
pub mod error;
pub mod form;

use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::patient::PatientData;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use form::{FormField, ValidationError};

/// Trait implemented by each assessable condition.
pub trait Disease: Send + Sync {
    fn disease_type(&self) -> DiseaseType;

    /// Heading shown on the dashboard card and the form.
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// The form inputs, in display order.
    fn fields(&self) -> &[FormField];

    fn field(&self, id: &str) -> Option<&FormField> {
        self.fields().iter().find(|f| f.id == id)
    }

    /// Check every field's default against that field's own constraints.
    fn validate_defaults(&self) -> Vec<ValidationError> {
        self.fields()
            .iter()
            .filter_map(|f| f.check(&f.default_value).err())
            .collect()
    }

    /// Serializable snapshot for the front-end.
    fn config(&self) -> DiseaseConfig {
        DiseaseConfig {
            disease_type: self.disease_type(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            fields: self.fields().to_vec(),
        }
    }

    /// Format patient data as a key/value block for inclusion in a prompt.
    fn to_structured_input(&self, data: &PatientData) -> String {
        let mut output = String::new();
        for field in self.fields() {
            if let Some(value) = data.field(&field.id) {
                output.push_str(&format!("- {} ({}): {}", field.label, field.id, value));
                if let Some(unit) = field.unit() {
                    output.push_str(&format!(" {unit}"));
                }
                output.push('\n');
            }
        }
        output
    }
}

/// Static description of one assessable condition and its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseConfig {
    pub disease_type: DiseaseType,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

/// Return every disease, in dashboard order.
pub fn all_diseases() -> Vec<Box<dyn Disease>> {
    DiseaseType::ALL.into_iter().map(get_disease).collect()
}

/// Look up the definition for a disease.
pub fn get_disease(disease_type: DiseaseType) -> Box<dyn Disease> {
    match disease_type {
        DiseaseType::Diabetes => Box::new(diseases::diabetes::Diabetes),
        DiseaseType::HeartDisease => Box::new(diseases::heart_disease::HeartDisease),
        DiseaseType::BreastCancer => Box::new(diseases::breast_cancer::BreastCancer),
    }
}
