use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::options::SelectOption;

/// A single form value: numeric input or a selected option label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    pub fn from_option<T: SelectOption>(option: T) -> Self {
        FieldValue::Text(option.as_str().to_string())
    }

    /// Read this value as the numeric content of `field_id`.
    pub(crate) fn number(&self, field_id: &str) -> Result<f64, CoreError> {
        self.as_number().ok_or_else(|| CoreError::FieldType {
            field_id: field_id.to_string(),
            expected: "a number",
        })
    }

    /// Read this value as one of the labelled options of `field_id`.
    pub(crate) fn option<T: SelectOption>(&self, field_id: &str) -> Result<T, CoreError> {
        let label = self.as_text().ok_or_else(|| CoreError::FieldType {
            field_id: field_id.to_string(),
            expected: "an option label",
        })?;
        T::from_label(label).ok_or_else(|| CoreError::InvalidOption {
            field_id: field_id.to_string(),
            value: label.to_string(),
        })
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}
