use medipredict_core::models::disease::DiseaseType;

use crate::Disease;
use crate::form::{FormField, NumericRange};

/// Type 2 diabetes screening, modelled on the Pima Indians Diabetes dataset.
pub struct Diabetes;

impl Disease for Diabetes {
    fn disease_type(&self) -> DiseaseType {
        DiseaseType::Diabetes
    }

    fn title(&self) -> &str {
        "Diabetes Prediction"
    }

    fn description(&self) -> &str {
        "Assess the risk of Type 2 Diabetes based on glucose, BMI, and insulin levels."
    }

    fn fields(&self) -> &[FormField] {
        static FIELDS: std::sync::LazyLock<Vec<FormField>> = std::sync::LazyLock::new(|| {
            vec![
                FormField::number(
                    "pregnancies",
                    "Pregnancies",
                    None,
                    NumericRange::bounded(0.0, 20.0),
                    0.0,
                ),
                FormField::number(
                    "glucose",
                    "Glucose Level",
                    Some("mg/dL"),
                    NumericRange::bounded(0.0, 300.0),
                    120.0,
                )
                .describe("Plasma glucose concentration 2 hours into an oral glucose tolerance test"),
                FormField::number(
                    "bp",
                    "Blood Pressure",
                    Some("mm Hg"),
                    NumericRange::bounded(0.0, 200.0),
                    70.0,
                )
                .describe("Diastolic blood pressure"),
                FormField::number(
                    "skinThickness",
                    "Skin Thickness",
                    Some("mm"),
                    NumericRange::bounded(0.0, 100.0),
                    20.0,
                ),
                FormField::number(
                    "insulin",
                    "Insulin Level",
                    Some("mu U/ml"),
                    NumericRange::bounded(0.0, 900.0),
                    79.0,
                ),
                FormField::number(
                    "bmi",
                    "BMI",
                    None,
                    NumericRange::bounded(10.0, 60.0).with_step(0.1),
                    25.0,
                ),
                FormField::number(
                    "pedigree",
                    "Diabetes Pedigree Function",
                    None,
                    NumericRange::bounded(0.0, 3.0).with_step(0.001),
                    0.5,
                ),
                FormField::number(
                    "age",
                    "Age",
                    None,
                    NumericRange::bounded(1.0, 120.0),
                    30.0,
                ),
            ]
        });
        &FIELDS
    }
}
