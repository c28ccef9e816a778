use medipredict_catalog::controller::{FormController, InputPolicy};
use medipredict_catalog::error::CatalogError;
use medipredict_catalog::get_disease;
use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::field_value::FieldValue;
use medipredict_core::models::patient::PatientData;

fn defaults(disease: DiseaseType) -> PatientData {
    FormController::default()
        .initialize(get_disease(disease).as_ref())
        .unwrap()
}

#[test]
fn initialize_sets_every_field_to_its_default() {
    for disease_type in DiseaseType::ALL {
        let disease = get_disease(disease_type);
        let data = defaults(disease_type);
        assert_eq!(data.disease_type(), disease_type);
        for field in disease.fields() {
            assert_eq!(data.field(&field.id).as_ref(), Some(&field.default_value));
        }
    }
}

#[test]
fn initialize_is_repeatable() {
    assert_eq!(defaults(DiseaseType::Diabetes), defaults(DiseaseType::Diabetes));
}

#[test]
fn numeric_edit_is_applied() {
    let data = defaults(DiseaseType::Diabetes);
    let next = FormController::default().set_field(&data, "glucose", "145");
    assert_eq!(next.field("glucose"), Some(FieldValue::Number(145.0)));
}

#[test]
fn non_numeric_input_is_ignored() {
    let controller = FormController::default();
    let data = defaults(DiseaseType::Diabetes);

    assert_eq!(controller.set_field(&data, "glucose", "abc"), data);
    assert_eq!(controller.set_field(&data, "glucose", ""), data);
    assert_eq!(controller.set_field(&data, "glucose", "NaN"), data);

    assert!(matches!(
        controller.try_set_field(&data, "glucose", "abc"),
        Err(CatalogError::NotANumber { .. })
    ));
}

#[test]
fn select_input_must_be_an_option() {
    let controller = FormController::default();
    let data = defaults(DiseaseType::HeartDisease);

    let next = controller.set_field(&data, "sex", "Female");
    assert_eq!(next.field("sex"), Some(FieldValue::from("Female")));

    assert_eq!(controller.set_field(&data, "sex", "Unknown"), data);
    assert!(matches!(
        controller.try_set_field(&data, "sex", "Unknown"),
        Err(CatalogError::Validation(_))
    ));
}

#[test]
fn unknown_field_is_ignored() {
    let controller = FormController::default();
    let data = defaults(DiseaseType::BreastCancer);

    assert_eq!(controller.set_field(&data, "glucose", "100"), data);
    assert!(matches!(
        controller.try_set_field(&data, "glucose", "100"),
        Err(CatalogError::UnknownField { .. })
    ));
}

#[test]
fn reject_policy_keeps_value_when_out_of_range() {
    let controller = FormController::new(InputPolicy::Reject);
    let data = defaults(DiseaseType::Diabetes);

    assert_eq!(controller.set_field(&data, "bmi", "75"), data);
    assert_eq!(controller.set_field(&data, "pregnancies", "2.5"), data);
}

#[test]
fn clamp_policy_pins_to_bounds() {
    let controller = FormController::new(InputPolicy::Clamp);
    let data = defaults(DiseaseType::Diabetes);

    let next = controller.set_field(&data, "bmi", "75");
    assert_eq!(next.field("bmi"), Some(FieldValue::Number(60.0)));

    let next = controller.set_field(&data, "age", "-3");
    assert_eq!(next.field("age"), Some(FieldValue::Number(1.0)));
}

#[test]
fn accept_as_is_policy_stores_any_finite_number() {
    let controller = FormController::new(InputPolicy::AcceptAsIs);
    let data = defaults(DiseaseType::Diabetes);

    let next = controller.set_field(&data, "bmi", "75.25");
    assert_eq!(next.field("bmi"), Some(FieldValue::Number(75.25)));

    assert_eq!(controller.set_field(&data, "bmi", "inf"), data);
}

#[test]
fn unbounded_fields_accept_large_values_on_step() {
    let controller = FormController::default();
    let data = defaults(DiseaseType::BreastCancer);

    let next = controller.set_field(&data, "area_mean", "1500.5");
    assert_eq!(next.field("area_mean"), Some(FieldValue::Number(1500.5)));
}
