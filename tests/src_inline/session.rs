use super::*;
use crate::model::value::Sex;
use crate::panels::Panel;
use crate::pipeline::analyze;

#[test]
fn test_insert_replaces_whole_entry() {
    let mut store = ParameterStore::new();
    assert!(store.is_empty());
    assert_eq!(store.insert(" Hb ", ParameterValue::new(9.0, "g/dL")), None);
    let old = store.insert("Hb", ParameterValue::new(90.0, "g/L"));
    assert_eq!(old, Some(ParameterValue::new(9.0, "g/dL")));
    assert_eq!(store.len(), 1);
    assert_eq!(store.parameters()["Hb"], ParameterValue::new(90.0, "g/L"));
}

#[test]
fn test_merge_overwrites_per_entry() {
    let mut store = ParameterStore::new();
    store.insert("ALT", ParameterValue::new(40.0, "U/L"));
    store.insert("AST", ParameterValue::new(30.0, "U/L"));

    let mut upload = ParameterMap::new();
    upload.insert("ALT".to_string(), ParameterValue::new(120.0, "IU/L"));
    upload.insert("ALP".to_string(), ParameterValue::new(90.0, "U/L"));
    store.merge(&upload);

    assert_eq!(store.len(), 3);
    assert_eq!(store.parameters()["ALT"], ParameterValue::new(120.0, "IU/L"));
    assert_eq!(store.parameters()["AST"], ParameterValue::new(30.0, "U/L"));
}

#[test]
fn test_remove_and_clear() {
    let mut store = ParameterStore::new();
    store.insert("TSH", ParameterValue::new(2.0, "mIU/L"));
    store.insert("FT4", ParameterValue::new(1.2, "ng/dL"));
    assert!(store.remove(" TSH").is_some());
    assert!(store.remove("TSH").is_none());
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn test_store_feeds_analysis() {
    let mut store = ParameterStore::new();
    store.insert("Hemoglobin", ParameterValue::new(9.0, "g/dL"));
    let result = analyze(Panel::Cbc, store.parameters(), Sex::Male);
    assert_eq!(result.abnormal_count, 1);
}
