use super::*;
use crate::model::value::{ParameterMap, ParameterValue, Sex};
use crate::pipeline::Measurements;
use crate::pipeline::stage1_classify::run_stage1;

fn run(panel: Panel, entries: &[(&str, ParameterValue)], sex: Sex) -> Stage2Output {
    let params: ParameterMap = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let m = Measurements::canonicalize(panel, &params);
    run_stage2(panel, &run_stage1(panel, &m, sex))
}

#[test]
fn test_get_differential_by_direction() {
    let low = get_differential(Panel::Cbc, "Hemoglobin", Status::Low).unwrap();
    assert_eq!(low.title, "Low Hemoglobin (Anemia)");
    let critical = get_differential(Panel::Cbc, "Hemoglobin", Status::CriticalLow).unwrap();
    assert_eq!(critical.title, low.title);
    assert!(get_differential(Panel::Cbc, "Hemoglobin", Status::Normal).is_none());
    assert!(get_differential(Panel::Cbc, "Hemoglobin", Status::Unknown).is_none());
    assert!(get_differential(Panel::Cbc, "XYZ_Unknown", Status::High).is_none());
}

#[test]
fn test_differential_is_namespaced_by_panel() {
    assert!(get_differential(Panel::Lft, "Onco_LDH", Status::High).is_none());
    assert!(get_differential(Panel::Lft, "AFP", Status::High).is_none());
    assert!(get_differential(Panel::Oncology, "AFP", Status::High).is_some());
}

#[test]
fn test_qualitative_abnormal_bundle() {
    let bundle = get_differential(Panel::Rheumatology, "ANA", Status::Abnormal).unwrap();
    assert!(!bundle.differentials.is_empty());
    assert!(get_differential(Panel::Rheumatology, "ANA", Status::High).is_none());
}

#[test]
fn test_findings_and_critical_lists() {
    let out = run(
        Panel::Kft,
        &[
            ("Potassium", ParameterValue::new(7.0, "mEq/L")),
            ("Sodium", ParameterValue::new(130.0, "mEq/L")),
            ("Chloride", ParameterValue::new(100.0, "mEq/L")),
        ],
        Sex::Default,
    );
    assert_eq!(out.parameters.len(), 3);
    assert_eq!(out.abnormalities.len(), 2);
    assert_eq!(out.critical_values.len(), 1);
    assert_eq!(out.critical_values[0].parameter, "Potassium");
    assert!(out.critical_values[0].status.is_critical());
    assert!(out.parameters["Potassium"].differential.is_some());
    assert!(out.parameters["Chloride"].differential.is_none());
}

#[test]
fn test_unit_falls_back_to_reference_unit() {
    let out = run(
        Panel::Cbc,
        &[("Hemoglobin", ParameterValue::new(9.0, ""))],
        Sex::Male,
    );
    assert_eq!(out.parameters["Hemoglobin"].unit, "g/dL");
    let out = run(
        Panel::Cbc,
        &[("Hemoglobin", ParameterValue::new(90.0, "g/L"))],
        Sex::Male,
    );
    assert_eq!(out.parameters["Hemoglobin"].unit, "g/L");
}

#[test]
fn test_learning_text_attached_where_authored() {
    let out = run(
        Panel::Kft,
        &[("Creatinine", ParameterValue::new(1.0, "mg/dL"))],
        Sex::Male,
    );
    assert!(out.parameters["Creatinine"].learning.is_some());
    let out = run(
        Panel::Cbc,
        &[("MCV", ParameterValue::new(85.0, "fL"))],
        Sex::Male,
    );
    assert!(out.parameters["MCV"].learning.is_none());
}

#[test]
fn test_unknown_parameter_has_no_differential() {
    let out = run(
        Panel::Cbc,
        &[("XYZ_Unknown", ParameterValue::new(5.0, ""))],
        Sex::Default,
    );
    let p = &out.parameters["XYZ_Unknown"];
    assert_eq!(p.classification.status, Status::Unknown);
    assert!(p.differential.is_none());
    assert!(out.abnormalities.is_empty());
}
