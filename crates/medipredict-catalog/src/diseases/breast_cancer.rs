use medipredict_core::models::disease::DiseaseType;

use crate::Disease;
use crate::form::{FormField, NumericRange};

/// Tumor malignancy, modelled on the Wisconsin Breast Cancer dataset.
/// These measurements carry no bounds, only an input granularity.
pub struct BreastCancer;

impl Disease for BreastCancer {
    fn disease_type(&self) -> DiseaseType {
        DiseaseType::BreastCancer
    }

    fn title(&self) -> &str {
        "Breast Cancer Risk"
    }

    fn description(&self) -> &str {
        "Analyze tumor features like radius, texture, and smoothness to predict malignancy."
    }

    fn fields(&self) -> &[FormField] {
        static FIELDS: std::sync::LazyLock<Vec<FormField>> = std::sync::LazyLock::new(|| {
            let items = [
                ("radius_mean", "Radius Mean", 0.01, 14.0, Some("Mean of distances from center to points on the perimeter")),
                ("texture_mean", "Texture Mean", 0.01, 19.0, Some("Standard deviation of gray-scale values")),
                ("perimeter_mean", "Perimeter Mean", 0.1, 90.0, None),
                ("area_mean", "Area Mean", 0.1, 600.0, None),
                ("smoothness_mean", "Smoothness Mean", 0.0001, 0.09, Some("Local variation in radius lengths")),
                ("concavity_mean", "Concavity Mean", 0.0001, 0.08, Some("Severity of concave portions of the contour")),
            ];

            items
                .iter()
                .map(|(id, label, step, default, description)| {
                    let field =
                        FormField::number(id, label, None, NumericRange::step_only(*step), *default);
                    match description {
                        Some(d) => field.describe(d),
                        None => field,
                    }
                })
                .collect()
        });
        &FIELDS
    }
}
