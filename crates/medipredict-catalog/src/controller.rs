//! Form controller: default values and per-field input handling.
//!
//! Raw input arrives as text from the form. Number fields must parse to a
//! finite number; select fields must name one of their options. What happens
//! to a parsed number outside its field's range is governed by
//! [`InputPolicy`].

use medipredict_core::models::field_value::FieldValue;
use medipredict_core::models::patient::PatientData;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CatalogError;
use crate::form::{FieldKind, FormField};
use crate::{Disease, get_disease};

/// Treatment of numeric input that parses but violates the field's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InputPolicy {
    /// Out-of-range or off-step values are rejected; the field keeps its value.
    #[default]
    Reject,
    /// Values are clamped into `[min, max]`. Step is not enforced.
    Clamp,
    /// Any finite number is stored as typed.
    AcceptAsIs,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormController {
    policy: InputPolicy,
}

impl FormController {
    pub fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Build the patient record with every field at its default.
    pub fn initialize(&self, disease: &dyn Disease) -> Result<PatientData, CatalogError> {
        let defaults = disease
            .fields()
            .iter()
            .map(|f| (f.id.as_str(), &f.default_value));
        Ok(PatientData::from_values(disease.disease_type(), defaults)?)
    }

    /// Apply one edit. Invalid input leaves the record unchanged.
    pub fn set_field(&self, data: &PatientData, field_id: &str, raw: &str) -> PatientData {
        match self.try_set_field(data, field_id, raw) {
            Ok(next) => next,
            Err(e) => {
                debug!(field_id, raw, error = %e, "form input rejected");
                data.clone()
            }
        }
    }

    /// Apply one edit, reporting why input was rejected.
    pub fn try_set_field(
        &self,
        data: &PatientData,
        field_id: &str,
        raw: &str,
    ) -> Result<PatientData, CatalogError> {
        let disease = get_disease(data.disease_type());
        let field = disease
            .field(field_id)
            .ok_or_else(|| CatalogError::UnknownField {
                disease: disease.disease_type().to_string(),
                field_id: field_id.to_string(),
            })?;

        let value = self.parse(field, raw)?;
        Ok(data.with_field(field_id, &value)?)
    }

    fn parse(&self, field: &FormField, raw: &str) -> Result<FieldValue, CatalogError> {
        match &field.kind {
            FieldKind::Number { range, .. } => {
                let n = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| CatalogError::NotANumber {
                        field_id: field.id.clone(),
                        raw: raw.to_string(),
                    })?;

                let n = match self.policy {
                    InputPolicy::Reject => {
                        field.check(&FieldValue::Number(n))?;
                        n
                    }
                    InputPolicy::Clamp => range.clamp(n),
                    InputPolicy::AcceptAsIs => n,
                };
                Ok(FieldValue::Number(n))
            }
            FieldKind::Select { .. } => {
                let value = FieldValue::Text(raw.to_string());
                field.check(&value)?;
                Ok(value)
            }
        }
    }
}
