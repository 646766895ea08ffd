use super::*;

fn map(entries: &[(&str, ParameterValue)]) -> ParameterMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_canonicalize_resolves_aliases() {
    let m = Measurements::canonicalize(
        Panel::Cbc,
        &map(&[
            ("Hb", ParameterValue::new(9.0, "g/dL")),
            ("PLT", ParameterValue::new(250.0, "")),
        ]),
    );
    assert_eq!(m.number("Hemoglobin"), Some(9.0));
    assert_eq!(m.number("Platelets"), Some(250.0));
    assert!(m.get("Hb").is_none());
    assert_eq!(m.len(), 2);
}

#[test]
fn test_canonical_entry_beats_alias() {
    let m = Measurements::canonicalize(
        Panel::Cbc,
        &map(&[
            ("HGB", ParameterValue::new(8.0, "g/dL")),
            ("Hemoglobin", ParameterValue::new(9.0, "g/dL")),
        ]),
    );
    assert_eq!(m.number("Hemoglobin"), Some(9.0));
    assert_eq!(m.len(), 1);
}

#[test]
fn test_oncology_ldh_namespaced() {
    let params = map(&[("LDH", ParameterValue::new(600.0, "IU/L"))]);
    let onco = Measurements::canonicalize(Panel::Oncology, &params);
    assert_eq!(onco.number("Onco_LDH"), Some(600.0));
    let lft = Measurements::canonicalize(Panel::Lft, &params);
    assert_eq!(lft.number("LDH"), Some(600.0));
}

#[test]
fn test_positive_and_text_accessors() {
    let m = Measurements::canonicalize(
        Panel::Urine,
        &map(&[
            ("Urine_Nitrite", ParameterValue::new(" Positive ", "")),
            ("Urine_RBC", ParameterValue::new(0.0, "/hpf")),
        ]),
    );
    assert_eq!(m.text("Urine_Nitrite").as_deref(), Some("positive"));
    assert_eq!(m.number("Urine_RBC"), Some(0.0));
    assert_eq!(m.positive("Urine_RBC"), None);
    assert_eq!(m.number("Urine_Nitrite"), None);
    assert!(m.text("Urine_Bacteria").is_none());
}

#[test]
fn test_supplemented_keeps_owned_entries() {
    let owned = map(&[
        ("Onco_LDH", ParameterValue::new(500.0, "U/L")),
        ("AFP", ParameterValue::new(5.0, "ng/mL")),
    ]);
    let all = map(&[
        ("LDH", ParameterValue::new(200.0, "U/L")),
        ("AFP", ParameterValue::new(9.0, "ng/mL")),
        ("Albumin", ParameterValue::new(3.0, "g/dL")),
    ]);
    let m = Measurements::canonicalize(Panel::Oncology, &owned).supplemented(Panel::Oncology, &all);
    assert_eq!(m.number("Onco_LDH"), Some(500.0));
    assert_eq!(m.number("AFP"), Some(5.0));
    assert_eq!(m.number("Albumin"), Some(3.0));
    assert_eq!(m.len(), 3);
}
