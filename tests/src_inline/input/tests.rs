use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_labqc_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const DOC: &str = r#"{
  "sex": "female",
  "parameters": {
    "Hemoglobin": {"value": 9, "unit": "g/dL"},
    " MCV ": {"value": 72.5, "unit": "fL"},
    "Urine_Nitrite": {"value": "Positive"},
    "Ferritin": {"value": null, "unit": "ng/mL"}
  }
}"#;

#[test]
fn test_parse_document_values_and_units() {
    let input = parse_document(DOC.as_bytes(), None).unwrap();
    assert_eq!(input.sex, Sex::Female);
    assert_eq!(input.parameters.len(), 3);
    assert_eq!(
        input.parameters["Hemoglobin"],
        ParameterValue::new(9.0, "g/dL")
    );
    assert_eq!(input.parameters["MCV"].value, Value::Numeric(72.5));
    assert_eq!(
        input.parameters["Urine_Nitrite"],
        ParameterValue::new("Positive", "")
    );
}

#[test]
fn test_null_values_are_dropped() {
    let input = parse_document(DOC.as_bytes(), None).unwrap();
    assert!(!input.parameters.contains_key("Ferritin"));
    assert_eq!(input.dropped, vec!["Ferritin".to_string()]);
}

#[test]
fn test_sex_override_and_default() {
    let input = parse_document(DOC.as_bytes(), Some(Sex::Male)).unwrap();
    assert_eq!(input.sex, Sex::Male);

    let input = parse_document(r#"{"parameters": {"TSH": {"value": 2.1}}}"#.as_bytes(), None).unwrap();
    assert_eq!(input.sex, Sex::Default);

    let input = parse_document(
        r#"{"sex": "unspecified", "parameters": {"TSH": {"value": 2.1}}}"#.as_bytes(),
        None,
    )
    .unwrap();
    assert_eq!(input.sex, Sex::Default);
}

#[test]
fn test_clinical_context_is_optional() {
    let input = parse_document(DOC.as_bytes(), None).unwrap();
    assert_eq!(input.context, ClinicalContext::default());

    let input = parse_document(
        r#"{"parameters": {"ALT": {"value": 400}}, "context": {"shock": true, "reason": "known_disease"}}"#
            .as_bytes(),
        None,
    )
    .unwrap();
    assert!(input.context.shock);
    assert!(!input.context.hemolysis);
    assert!(input.context.is_emergency());
    assert!(input.context.is_chronic());
}

#[test]
fn test_empty_parameter_name_rejected() {
    let err = parse_document(r#"{"parameters": {"  ": {"value": 1}}}"#.as_bytes(), None).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = parse_document("{not json".as_bytes(), None).unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}

#[test]
fn test_load_plain_and_gz_files() {
    let dir = make_temp_dir();
    let plain = dir.join("labs.json");
    let gz = dir.join("labs.json.gz");
    write_file(&plain, DOC);
    write_gz(&gz, DOC);

    let a = load_input(&plain, None).unwrap();
    let b = load_input(&gz, None).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.parameters.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = make_temp_dir();
    let err = load_input(&dir.join("absent.json"), None).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_load_rejects_document_without_values() {
    let dir = make_temp_dir();
    let path = dir.join("empty.json");
    write_file(&path, r#"{"sex": "male", "parameters": {"ALT": {"value": null}}}"#);
    let err = load_input(&path, None).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}
