//! Typed patient records, one per disease.
//!
//! The form layer addresses values by field id (`"glucose"`, `"cp"`, ...), so
//! every record exposes id-based `get`/`set` on top of its named fields. The
//! serialized field names are the field ids.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::disease::DiseaseType;
use crate::models::field_value::FieldValue;
use crate::models::options::{ChestPainType, SelectOption, Sex, TrueFalse, YesNo};

/// A strongly typed set of clinical inputs for one disease.
pub trait PatientRecord: Clone + PartialEq + Serialize + DeserializeOwned {
    const DISEASE: DiseaseType;

    /// Field ids in form order.
    const FIELD_IDS: &'static [&'static str];

    fn get(&self, field_id: &str) -> Option<FieldValue>;

    fn set(&mut self, field_id: &str, value: &FieldValue) -> Result<(), CoreError>;
}

fn unknown_field(disease: DiseaseType, field_id: &str) -> CoreError {
    CoreError::UnknownField {
        disease,
        field_id: field_id.to_string(),
    }
}

// ── Diabetes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct DiabetesData {
    pub pregnancies: f64,
    /// Plasma glucose, mg/dL.
    pub glucose: f64,
    /// Diastolic blood pressure, mm Hg.
    pub bp: f64,
    #[serde(rename = "skinThickness")]
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub pedigree: f64,
    pub age: f64,
}

impl PatientRecord for DiabetesData {
    const DISEASE: DiseaseType = DiseaseType::Diabetes;

    const FIELD_IDS: &'static [&'static str] = &[
        "pregnancies",
        "glucose",
        "bp",
        "skinThickness",
        "insulin",
        "bmi",
        "pedigree",
        "age",
    ];

    fn get(&self, field_id: &str) -> Option<FieldValue> {
        let value = match field_id {
            "pregnancies" => self.pregnancies,
            "glucose" => self.glucose,
            "bp" => self.bp,
            "skinThickness" => self.skin_thickness,
            "insulin" => self.insulin,
            "bmi" => self.bmi,
            "pedigree" => self.pedigree,
            "age" => self.age,
            _ => return None,
        };
        Some(FieldValue::Number(value))
    }

    fn set(&mut self, field_id: &str, value: &FieldValue) -> Result<(), CoreError> {
        let slot = match field_id {
            "pregnancies" => &mut self.pregnancies,
            "glucose" => &mut self.glucose,
            "bp" => &mut self.bp,
            "skinThickness" => &mut self.skin_thickness,
            "insulin" => &mut self.insulin,
            "bmi" => &mut self.bmi,
            "pedigree" => &mut self.pedigree,
            "age" => &mut self.age,
            _ => return Err(unknown_field(Self::DISEASE, field_id)),
        };
        *slot = value.number(field_id)?;
        Ok(())
    }
}

// ── Heart disease ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct HeartDiseaseData {
    pub age: f64,
    pub sex: Sex,
    /// Chest pain type.
    pub cp: ChestPainType,
    /// Resting blood pressure, mm Hg.
    pub trestbps: f64,
    /// Serum cholesterol, mg/dl.
    pub chol: f64,
    /// Fasting blood sugar above 120 mg/dl.
    pub fbs: TrueFalse,
    /// Maximum heart rate achieved.
    pub thalach: f64,
    /// Exercise induced angina.
    pub exang: YesNo,
}

impl PatientRecord for HeartDiseaseData {
    const DISEASE: DiseaseType = DiseaseType::HeartDisease;

    const FIELD_IDS: &'static [&'static str] = &[
        "age", "sex", "cp", "trestbps", "chol", "fbs", "thalach", "exang",
    ];

    fn get(&self, field_id: &str) -> Option<FieldValue> {
        let value = match field_id {
            "age" => FieldValue::Number(self.age),
            "sex" => FieldValue::from_option(self.sex),
            "cp" => FieldValue::from_option(self.cp),
            "trestbps" => FieldValue::Number(self.trestbps),
            "chol" => FieldValue::Number(self.chol),
            "fbs" => FieldValue::from_option(self.fbs),
            "thalach" => FieldValue::Number(self.thalach),
            "exang" => FieldValue::from_option(self.exang),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, field_id: &str, value: &FieldValue) -> Result<(), CoreError> {
        match field_id {
            "age" => self.age = value.number(field_id)?,
            "sex" => self.sex = value.option(field_id)?,
            "cp" => self.cp = value.option(field_id)?,
            "trestbps" => self.trestbps = value.number(field_id)?,
            "chol" => self.chol = value.number(field_id)?,
            "fbs" => self.fbs = value.option(field_id)?,
            "thalach" => self.thalach = value.number(field_id)?,
            "exang" => self.exang = value.option(field_id)?,
            _ => return Err(unknown_field(Self::DISEASE, field_id)),
        }
        Ok(())
    }
}

// ── Breast cancer ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct BreastCancerData {
    pub radius_mean: f64,
    pub texture_mean: f64,
    pub perimeter_mean: f64,
    pub area_mean: f64,
    pub smoothness_mean: f64,
    pub concavity_mean: f64,
}

impl PatientRecord for BreastCancerData {
    const DISEASE: DiseaseType = DiseaseType::BreastCancer;

    const FIELD_IDS: &'static [&'static str] = &[
        "radius_mean",
        "texture_mean",
        "perimeter_mean",
        "area_mean",
        "smoothness_mean",
        "concavity_mean",
    ];

    fn get(&self, field_id: &str) -> Option<FieldValue> {
        let value = match field_id {
            "radius_mean" => self.radius_mean,
            "texture_mean" => self.texture_mean,
            "perimeter_mean" => self.perimeter_mean,
            "area_mean" => self.area_mean,
            "smoothness_mean" => self.smoothness_mean,
            "concavity_mean" => self.concavity_mean,
            _ => return None,
        };
        Some(FieldValue::Number(value))
    }

    fn set(&mut self, field_id: &str, value: &FieldValue) -> Result<(), CoreError> {
        let slot = match field_id {
            "radius_mean" => &mut self.radius_mean,
            "texture_mean" => &mut self.texture_mean,
            "perimeter_mean" => &mut self.perimeter_mean,
            "area_mean" => &mut self.area_mean,
            "smoothness_mean" => &mut self.smoothness_mean,
            "concavity_mean" => &mut self.concavity_mean,
            _ => return Err(unknown_field(Self::DISEASE, field_id)),
        };
        *slot = value.number(field_id)?;
        Ok(())
    }
}

// ── Tagged union ─────────────────────────────────────────────────────────────

/// Patient inputs for exactly one disease.
///
/// Serializes adjacently tagged, e.g.
/// `{"diseaseType": "Diabetes", "patientData": {"glucose": 120, ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "diseaseType", content = "patientData")]
#[ts(export)]
pub enum PatientData {
    #[serde(rename = "Diabetes")]
    Diabetes(DiabetesData),
    #[serde(rename = "Heart Disease")]
    HeartDisease(HeartDiseaseData),
    #[serde(rename = "Breast Cancer")]
    BreastCancer(BreastCancerData),
}

impl PatientData {
    pub fn disease_type(&self) -> DiseaseType {
        match self {
            PatientData::Diabetes(_) => DiseaseType::Diabetes,
            PatientData::HeartDisease(_) => DiseaseType::HeartDisease,
            PatientData::BreastCancer(_) => DiseaseType::BreastCancer,
        }
    }

    /// Field ids of the given disease, in form order.
    pub fn field_ids_for(disease: DiseaseType) -> &'static [&'static str] {
        match disease {
            DiseaseType::Diabetes => DiabetesData::FIELD_IDS,
            DiseaseType::HeartDisease => HeartDiseaseData::FIELD_IDS,
            DiseaseType::BreastCancer => BreastCancerData::FIELD_IDS,
        }
    }

    pub fn field(&self, field_id: &str) -> Option<FieldValue> {
        match self {
            PatientData::Diabetes(r) => r.get(field_id),
            PatientData::HeartDisease(r) => r.get(field_id),
            PatientData::BreastCancer(r) => r.get(field_id),
        }
    }

    /// All `(field id, value)` pairs, in form order.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        Self::field_ids_for(self.disease_type())
            .iter()
            .filter_map(|id| self.field(id).map(|v| (*id, v)))
            .collect()
    }

    /// Return a copy with one field replaced. `self` is left untouched.
    pub fn with_field(&self, field_id: &str, value: &FieldValue) -> Result<Self, CoreError> {
        let mut next = self.clone();
        match &mut next {
            PatientData::Diabetes(r) => r.set(field_id, value)?,
            PatientData::HeartDisease(r) => r.set(field_id, value)?,
            PatientData::BreastCancer(r) => r.set(field_id, value)?,
        }
        Ok(next)
    }

    /// Build a record from a complete set of `(field id, value)` pairs.
    ///
    /// Every field of the disease must be supplied; unknown ids are rejected.
    pub fn from_values<'a, I>(disease: DiseaseType, values: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
    {
        let field_ids = Self::field_ids_for(disease);

        let mut map = serde_json::Map::new();
        for (id, value) in values {
            if !field_ids.iter().any(|known| *known == id) {
                return Err(unknown_field(disease, id));
            }
            map.insert(id.to_string(), serde_json::to_value(value)?);
        }
        if let Some(missing) = field_ids.iter().find(|id| !map.contains_key(**id)) {
            return Err(CoreError::MissingField(missing.to_string()));
        }

        let object = serde_json::Value::Object(map);
        let data = match disease {
            DiseaseType::Diabetes => PatientData::Diabetes(serde_json::from_value(object)?),
            DiseaseType::HeartDisease => {
                PatientData::HeartDisease(serde_json::from_value(object)?)
            }
            DiseaseType::BreastCancer => {
                PatientData::BreastCancer(serde_json::from_value(object)?)
            }
        };
        Ok(data)
    }
}
