use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::options::{ChestPainType, SelectOption, Sex, TrueFalse, YesNo};

use crate::Disease;
use crate::form::{FormField, NumericRange};

/// Cardiovascular risk, modelled on the Cleveland Heart Disease dataset.
/// Select options come from the typed option enums so the form and the
/// patient record cannot drift apart.
pub struct HeartDisease;

impl Disease for HeartDisease {
    fn disease_type(&self) -> DiseaseType {
        DiseaseType::HeartDisease
    }

    fn title(&self) -> &str {
        "Heart Disease Prediction"
    }

    fn description(&self) -> &str {
        "Evaluate cardiovascular health using metrics like chest pain type, cholesterol, and max heart rate."
    }

    fn fields(&self) -> &[FormField] {
        static FIELDS: std::sync::LazyLock<Vec<FormField>> = std::sync::LazyLock::new(|| {
            vec![
                FormField::number("age", "Age", None, NumericRange::bounded(1.0, 120.0), 45.0),
                FormField::select("sex", "Sex", Sex::options(), Sex::Male.as_str()),
                FormField::select(
                    "cp",
                    "Chest Pain Type",
                    ChestPainType::options(),
                    ChestPainType::TypicalAngina.as_str(),
                ),
                FormField::number(
                    "trestbps",
                    "Resting Blood Pressure",
                    Some("mm Hg"),
                    NumericRange::bounded(50.0, 250.0),
                    120.0,
                ),
                FormField::number(
                    "chol",
                    "Serum Cholesterol",
                    Some("mg/dl"),
                    NumericRange::bounded(100.0, 600.0),
                    200.0,
                ),
                FormField::select(
                    "fbs",
                    "Fasting Blood Sugar > 120 mg/dl",
                    TrueFalse::options(),
                    TrueFalse::False.as_str(),
                ),
                FormField::number(
                    "thalach",
                    "Max Heart Rate",
                    None,
                    NumericRange::bounded(50.0, 250.0),
                    150.0,
                ),
                FormField::select(
                    "exang",
                    "Exercise Induced Angina",
                    YesNo::options(),
                    YesNo::No.as_str(),
                ),
            ]
        });
        &FIELDS
    }
}
