use super::*;
use crate::model::indices::round_to;
use crate::model::reference::{RangeDef, lookup_range, range, range_nc};

const TABLE: &[RangeDef] = &[
    range("X", Sex::Male, 10.0, 20.0, 5.0, 30.0, "u"),
    range("X", Sex::Default, 8.0, 18.0, 4.0, 28.0, "u"),
    range_nc("Y", Sex::Default, 1.0, 2.0, ""),
];

#[test]
fn test_sex_parse_variants() {
    assert_eq!(Sex::parse("Male"), Sex::Male);
    assert_eq!(Sex::parse(" m "), Sex::Male);
    assert_eq!(Sex::parse("FEMALE"), Sex::Female);
    assert_eq!(Sex::parse("f"), Sex::Female);
    assert_eq!(Sex::parse("other"), Sex::Default);
    assert_eq!(Sex::parse(""), Sex::Default);
}

#[test]
fn test_value_numeric_view() {
    assert_eq!(Value::Numeric(9.0).as_number(), Some(9.0));
    assert_eq!(Value::from(" 9.5 ").as_number(), Some(9.5));
    assert_eq!(Value::from("Positive").as_number(), None);
    assert_eq!(Value::Numeric(f64::NAN).as_number(), None);
    assert_eq!(Value::from("NaN").as_number(), None);
}

#[test]
fn test_value_deserializes_untagged() {
    let p: ParameterValue = serde_json::from_str(r#"{"value": 9.0, "unit": "g/dL"}"#).unwrap();
    assert_eq!(p.value, Value::Numeric(9.0));
    assert_eq!(p.unit, "g/dL");

    let p: ParameterValue = serde_json::from_str(r#"{"value": "1+"}"#).unwrap();
    assert_eq!(p.value, Value::Qualitative("1+".to_string()));
    assert_eq!(p.unit, "");
}

#[test]
fn test_lookup_range_prefers_exact_sex() {
    let male = lookup_range(TABLE, "X", Sex::Male).unwrap();
    assert_eq!(male.low, 10.0);
    let female = lookup_range(TABLE, "X", Sex::Female).unwrap();
    assert_eq!(female.low, 8.0);
    let default = lookup_range(TABLE, "X", Sex::Default).unwrap();
    assert_eq!(default.low, 8.0);
    assert!(lookup_range(TABLE, "Z", Sex::Male).is_none());
}

#[test]
fn test_range_without_critical_tier() {
    let y = lookup_range(TABLE, "Y", Sex::Female).unwrap();
    assert_eq!(y.critical_low, None);
    assert_eq!(y.critical_high, None);
}

#[test]
fn test_status_direction_strips_critical() {
    assert_eq!(Status::CriticalHigh.direction(), Some(Direction::High));
    assert_eq!(Status::High.direction(), Some(Direction::High));
    assert_eq!(Status::CriticalLow.direction(), Some(Direction::Low));
    assert_eq!(Status::Abnormal.direction(), Some(Direction::Abnormal));
    assert_eq!(Status::Normal.direction(), None);
    assert_eq!(Status::Unknown.direction(), None);
}

#[test]
fn test_status_flags_and_colors() {
    assert!(Status::Low.is_abnormal());
    assert!(Status::Abnormal.is_abnormal());
    assert!(!Status::Unknown.is_abnormal());
    assert!(!Status::Normal.is_abnormal());
    assert!(Status::CriticalLow.is_critical());
    assert!(!Status::Abnormal.is_critical());
    assert_eq!(Status::Normal.color(), Color::Green);
    assert_eq!(Status::High.color(), Color::Orange);
    assert_eq!(Status::CriticalHigh.color(), Color::Red);
    assert_eq!(Status::Unknown.color(), Color::Gray);
}

#[test]
fn test_status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Status::CriticalLow).unwrap(), "\"critical_low\"");
    assert_eq!(Status::CriticalHigh.as_str(), "critical_high");
}

#[test]
fn test_severity_tiers() {
    assert_eq!(Severity::tiered(1.5, 1.5, 3.0), Severity::Pass);
    assert_eq!(Severity::tiered(-2.0, 1.5, 3.0), Severity::Warning);
    assert_eq!(Severity::tiered(3.0, 1.5, 3.0), Severity::Warning);
    assert_eq!(Severity::tiered(-7.0, 1.5, 3.0), Severity::Error);
    assert!(Severity::Error > Severity::Warning);
    assert!(Severity::Info < Severity::Warning);
}

#[test]
fn test_overall_pass_record() {
    let record = QualityCheckResult::overall_pass();
    assert_eq!(record.rule, "Overall Quality Assessment");
    assert_eq!(record.severity, Severity::Pass);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(4.074, 2), 4.07);
    assert_eq!(round_to(16.04, 1), 16.0);
    assert_eq!(round_to(140.6, 0), 141.0);
}

#[test]
fn test_clinical_context_flags() {
    let context = ClinicalContext::default();
    assert!(!context.is_emergency());
    assert!(!context.is_chronic());

    let context = ClinicalContext {
        acute_injury: true,
        reason: Some(" Routine ".to_string()),
        ..ClinicalContext::default()
    };
    assert!(context.is_emergency());
    assert!(context.is_chronic());

    let context = ClinicalContext {
        reason: Some("new_finding".to_string()),
        ..ClinicalContext::default()
    };
    assert!(!context.is_chronic());
}
