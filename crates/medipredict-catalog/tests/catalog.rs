use medipredict_catalog::form::FieldKind;
use medipredict_catalog::{all_diseases, get_disease};
use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::field_value::FieldValue;
use medipredict_core::models::patient::PatientData;

#[test]
fn every_default_satisfies_its_own_constraints() {
    for disease in all_diseases() {
        let errors = disease.validate_defaults();
        assert!(
            errors.is_empty(),
            "{} has invalid defaults: {:?}",
            disease.title(),
            errors.iter().map(|e| &e.message).collect::<Vec<_>>()
        );
    }
}

#[test]
fn select_fields_have_options_containing_default() {
    for disease in all_diseases() {
        for field in disease.fields() {
            if let FieldKind::Select { options } = &field.kind {
                assert!(!options.is_empty(), "{} has no options", field.id);
                let default = field.default_value.as_text().unwrap();
                assert!(options.iter().any(|o| o == default));
            }
        }
    }
}

#[test]
fn field_ids_are_unique_and_match_records() {
    for disease in all_diseases() {
        let ids: Vec<_> = disease.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, PatientData::field_ids_for(disease.disease_type()));
    }
}

#[test]
fn catalog_lists_diseases_in_dashboard_order() {
    let types: Vec<_> = all_diseases().iter().map(|d| d.disease_type()).collect();
    assert_eq!(types, DiseaseType::ALL);
}

#[test]
fn heart_disease_options_come_from_typed_enums() {
    let heart = get_disease(DiseaseType::HeartDisease);
    let cp = heart.field("cp").unwrap();
    let FieldKind::Select { options } = &cp.kind else {
        panic!("cp should be a select field");
    };
    assert_eq!(
        options,
        &[
            "Typical Angina",
            "Atypical Angina",
            "Non-anginal Pain",
            "Asymptomatic"
        ]
    );
}

#[test]
fn structured_input_lists_labels_values_and_units() {
    let diabetes = get_disease(DiseaseType::Diabetes);
    let data = medipredict_catalog::controller::FormController::default()
        .initialize(diabetes.as_ref())
        .unwrap();

    let block = diabetes.to_structured_input(&data);
    assert!(block.contains("- Glucose Level (glucose): 120 mg/dL\n"));
    assert!(block.contains("- BMI (bmi): 25\n"));
    assert!(block.starts_with("- Pregnancies (pregnancies): 0\n"));
    assert_eq!(block.lines().count(), 8);
}

#[test]
fn config_snapshot_serializes_for_front_end() {
    let config = get_disease(DiseaseType::BreastCancer).config();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["disease_type"], "Breast Cancer");
    assert_eq!(json["fields"][0]["id"], "radius_mean");
    assert_eq!(json["fields"][0]["kind"]["type"], "number");
    assert_eq!(
        config.fields[4].default_value,
        FieldValue::Number(0.09)
    );
}
