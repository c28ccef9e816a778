use medipredict_core::models::field_value::FieldValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Bounds and granularity for a numeric input. Every part is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl NumericRange {
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step: Some(1.0),
        }
    }

    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub const fn step_only(step: f64) -> Self {
        Self {
            min: None,
            max: None,
            step: Some(step),
        }
    }

    pub fn in_bounds(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// In bounds and on a step boundary (measured from `min`, or zero).
    pub fn contains(&self, value: f64) -> bool {
        if !self.in_bounds(value) {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min.unwrap_or(0.0);
            let remainder = offset.rem_euclid(step);
            // Within 1e-9 of a step counts as on-step.
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

/// How a field is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Number {
        unit: Option<String>,
        range: NumericRange,
    },
    Select {
        options: Vec<String>,
    },
}

/// One input on a disease form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub default_value: FieldValue,
    /// Help text shown next to the label.
    pub description: Option<String>,
}

impl FormField {
    pub fn number(
        id: &str,
        label: &str,
        unit: Option<&str>,
        range: NumericRange,
        default: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number {
                unit: unit.map(str::to_string),
                range,
            },
            default_value: FieldValue::Number(default),
            description: None,
        }
    }

    pub fn select(id: &str, label: &str, options: Vec<&'static str>, default: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                options: options.into_iter().map(str::to_string).collect(),
            },
            default_value: FieldValue::Text(default.to_string()),
            description: None,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn unit(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Number { unit, .. } => unit.as_deref(),
            FieldKind::Select { .. } => None,
        }
    }

    /// Check `value` against this field's own constraints.
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let problem = match (&self.kind, value) {
            (FieldKind::Number { range, .. }, FieldValue::Number(n)) => {
                if !n.is_finite() {
                    Some(format!("{}: {n} is not a finite number", self.label))
                } else if !range.contains(*n) {
                    Some(format!(
                        "{}: {n} is outside range [{}, {}] step {}",
                        self.label,
                        fmt_bound(range.min),
                        fmt_bound(range.max),
                        fmt_bound(range.step),
                    ))
                } else {
                    None
                }
            }
            (FieldKind::Select { options }, FieldValue::Text(s)) => {
                if options.is_empty() {
                    Some(format!("{}: no options declared", self.label))
                } else if !options.iter().any(|o| o == s) {
                    Some(format!("{}: '{s}' is not one of {options:?}", self.label))
                } else {
                    None
                }
            }
            (FieldKind::Number { .. }, FieldValue::Text(s)) => {
                Some(format!("{}: expected a number, got '{s}'", self.label))
            }
            (FieldKind::Select { .. }, FieldValue::Number(n)) => {
                Some(format!("{}: expected an option, got {n}", self.label))
            }
        };

        match problem {
            Some(message) => Err(ValidationError {
                field_id: self.id.clone(),
                value: value.clone(),
                message,
            }),
            None => Ok(()),
        }
    }
}

fn fmt_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "-".to_string(), |b| b.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    pub value: FieldValue,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_tolerates_float_noise() {
        let range = NumericRange::step_only(0.0001);
        assert!(range.contains(0.09));
        assert!(range.contains(0.08));
        assert!(!range.contains(0.00015));
    }

    #[test]
    fn bounded_range_defaults_to_whole_steps() {
        let range = NumericRange::bounded(0.0, 20.0);
        assert!(range.contains(3.0));
        assert!(!range.contains(2.5));
        assert!(!range.contains(21.0));
    }

    #[test]
    fn clamp_respects_open_bounds() {
        let range = NumericRange::step_only(0.1);
        assert_eq!(range.clamp(-5.0), -5.0);

        let range = NumericRange::bounded(10.0, 60.0);
        assert_eq!(range.clamp(5.0), 10.0);
        assert_eq!(range.clamp(75.0), 60.0);
    }
}
