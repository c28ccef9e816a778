//! Prompt construction for risk prediction.
//!
//! The prompt is a pure function of the request: the same request always
//! renders byte-identical text.

use medipredict_catalog::get_disease;
use medipredict_core::error::CoreError;
use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::patient::PatientData;
use medipredict_core::models::prediction::PredictionRequest;

const ROLE: &str =
    "Act as an advanced medical diagnostic system (simulating Random Forest/XGBoost logic).";

const INSTRUCTIONS: &str = "\
Instructions:
1. Analyze the vital signs and metrics based on standard medical datasets \
(e.g., Pima Indians Diabetes, Cleveland Heart Disease, Wisconsin Breast Cancer).
2. Estimate a risk probability (0-100%).
3. Provide a clinical explanation.
4. Be realistic but cautious.

IMPORTANT: This is for a simulation/educational tool.";

/// Pair a disease with the patient record collected for it.
pub fn build_request(
    disease_type: DiseaseType,
    patient_data: PatientData,
) -> Result<PredictionRequest, CoreError> {
    PredictionRequest::new(disease_type, patient_data)
}

/// Render the natural-language instruction block sent to the model.
pub fn build_prompt(request: &PredictionRequest) -> String {
    let disease = get_disease(request.disease_type());
    let data_block = disease.to_structured_input(request.patient_data());

    format!(
        "{ROLE}\n\n\
         Task: Analyze the following patient data for risk of **{}**.\n\n\
         Patient Data:\n\
         {data_block}\n\
         {INSTRUCTIONS}\n",
        request.disease_type(),
    )
}
