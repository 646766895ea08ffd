use super::*;
use crate::model::quality::OVERALL_QUALITY_RULE;
use crate::model::value::{ParameterMap, ParameterValue};

fn checks(panel: Panel, entries: &[(&str, ParameterValue)]) -> Vec<QualityCheckResult> {
    let params: ParameterMap = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let m = Measurements::canonicalize(panel, &params);
    run_stage4(panel, &m, Sex::Default)
}

fn n(v: f64) -> ParameterValue {
    ParameterValue::new(v, "")
}

fn t(s: &str) -> ParameterValue {
    ParameterValue::new(s, "")
}

fn find<'a>(out: &'a [QualityCheckResult], rule: &str) -> &'a QualityCheckResult {
    out.iter()
        .find(|c| c.rule == rule)
        .unwrap_or_else(|| panic!("missing rule {rule}"))
}

#[test]
fn test_rule_of_threes_error() {
    let out = checks(Panel::Cbc, &[("RBC", n(5.0)), ("Hemoglobin", n(8.0))]);
    let c = find(&out, RULE_RBC_HB);
    assert_eq!(c.severity, Severity::Error);
    assert_eq!(c.expected, Some(15.0));
    assert_eq!(c.actual, Some(8.0));
    assert_eq!(c.deviation, Some(7.0));
    assert!(c.interpretation.ends_with("Likely sample or transcription error."));
}

#[test]
fn test_rule_of_threes_tiers() {
    let out = checks(Panel::Cbc, &[("RBC", n(5.0)), ("Hb", n(17.0))]);
    assert_eq!(find(&out, RULE_RBC_HB).severity, Severity::Warning);

    let out = checks(Panel::Cbc, &[("RBC", n(5.0)), ("Hb", n(16.5))]);
    assert_eq!(find(&out, RULE_RBC_HB).severity, Severity::Pass);
}

#[test]
fn test_consistent_cbc_passes_every_rule() {
    let out = checks(
        Panel::Cbc,
        &[
            ("RBC", n(5.0)),
            ("Hemoglobin", n(15.0)),
            ("Hematocrit", n(45.0)),
            ("MCV", n(90.0)),
            ("MCH", n(30.0)),
            ("MCHC", n(33.0)),
        ],
    );
    for rule in [RULE_RBC_HB, RULE_HB_HCT, RULE_MCV, RULE_MCH, RULE_MCHC] {
        assert_eq!(find(&out, rule).severity, Severity::Pass, "{rule}");
    }
    assert!(out.iter().all(|c| c.rule != OVERALL_QUALITY_RULE));
}

#[test]
fn test_mcv_consistency_tiers() {
    let out = checks(Panel::Cbc, &[("RBC", n(5.0)), ("HCT", n(45.0)), ("MCV", n(97.0))]);
    let c = find(&out, RULE_MCV);
    assert_eq!(c.severity, Severity::Warning);
    assert_eq!(c.expected, Some(90.0));
    assert_eq!(c.deviation, Some(7.0));

    let out = checks(Panel::Cbc, &[("RBC", n(5.0)), ("HCT", n(45.0)), ("MCV", n(102.0))]);
    assert_eq!(find(&out, RULE_MCV).severity, Severity::Error);
}

#[test]
fn test_mchc_upper_limit() {
    let out = checks(Panel::Cbc, &[("MCHC", n(37.0))]);
    let c = find(&out, RULE_MCHC);
    assert_eq!(c.severity, Severity::Warning);
    assert!(c.interpretation.contains("spherocytosis"));

    let out = checks(Panel::Cbc, &[("MCHC", n(36.5))]);
    assert_eq!(find(&out, RULE_MCHC).severity, Severity::Pass);
}

#[test]
fn test_wbc_differential_sum() {
    let full = [
        ("Neutrophils", n(60.0)),
        ("Lymphocytes", n(30.0)),
        ("Monocytes", n(6.0)),
        ("Eosinophils", n(3.0)),
        ("Basophils", n(1.0)),
    ];
    let out = checks(Panel::Cbc, &full);
    let c = find(&out, RULE_WBC_DIFF);
    assert_eq!(c.severity, Severity::Pass);
    assert_eq!(c.actual, Some(100.0));

    let mut short = full.clone();
    short[0] = ("Neutrophils", n(50.0));
    let out = checks(Panel::Cbc, &short);
    assert_eq!(find(&out, RULE_WBC_DIFF).severity, Severity::Warning);

    // all five are required
    let out = checks(Panel::Cbc, &full[..4]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rule, OVERALL_QUALITY_RULE);
}

#[test]
fn test_platelet_mpv_relationship() {
    let out = checks(Panel::Cbc, &[("Platelets", n(500.0)), ("MPV", n(13.0))]);
    assert_eq!(find(&out, RULE_PLT_MPV).severity, Severity::Info);

    let out = checks(Panel::Cbc, &[("PLT", n(100.0)), ("MPV", n(7.0))]);
    let c = find(&out, RULE_PLT_MPV);
    assert_eq!(c.severity, Severity::Info);
    assert!(c.interpretation.contains("underproduction"));

    for (plt, mpv) in [(250.0, 10.0), (500.0, 7.0), (100.0, 13.0)] {
        let out = checks(Panel::Cbc, &[("Platelets", n(plt)), ("MPV", n(mpv))]);
        assert!(out.iter().all(|c| c.rule != RULE_PLT_MPV), "{plt}/{mpv}");
    }
}

#[test]
fn test_bun_creatinine_assessment() {
    let out = checks(Panel::Kft, &[("BUN", n(30.0)), ("Creatinine", n(1.0))]);
    let c = find(&out, RULE_BUN_CR);
    assert_eq!(c.severity, Severity::Warning);
    assert_eq!(
        c.interpretation,
        "BUN/Cr ratio: 30.0. Elevated: consider prerenal causes, GI bleeding."
    );

    let out = checks(Panel::Kft, &[("BUN", n(15.0)), ("Creatinine", n(1.0))]);
    let c = find(&out, RULE_BUN_CR);
    assert_eq!(c.severity, Severity::Pass);
    assert_eq!(c.interpretation, "BUN/Cr ratio: 15.0. Normal range.");

    let out = checks(Panel::Kft, &[("BUN", n(5.0)), ("Creatinine", n(1.0))]);
    assert!(find(&out, RULE_BUN_CR).interpretation.contains("Low"));
}

#[test]
fn test_urea_bun_concordance() {
    let out = checks(Panel::Kft, &[("Urea", n(42.8)), ("BUN", n(20.0))]);
    assert_eq!(find(&out, RULE_UREA_BUN).severity, Severity::Pass);

    let out = checks(Panel::Kft, &[("Urea", n(80.0)), ("BUN", n(20.0))]);
    let c = find(&out, RULE_UREA_BUN);
    assert_eq!(c.severity, Severity::Warning);
    assert_eq!(c.expected, Some(42.8));
}

#[test]
fn test_friedewald_validity_and_lipid_sum() {
    let out = checks(
        Panel::Lipid,
        &[("TC", n(200.0)), ("HDL", n(50.0)), ("TG", n(150.0)), ("LDL", n(120.0))],
    );
    assert_eq!(find(&out, RULE_FRIEDEWALD).severity, Severity::Pass);
    let sum = find(&out, RULE_LIPID_SUM);
    assert_eq!(sum.severity, Severity::Pass);
    assert_eq!(sum.expected, Some(200.0));

    let out = checks(
        Panel::Lipid,
        &[("TC", n(200.0)), ("HDL", n(50.0)), ("TG", n(450.0)), ("LDL", n(120.0))],
    );
    assert_eq!(find(&out, RULE_FRIEDEWALD).severity, Severity::Warning);
    assert!(out.iter().all(|c| c.rule != RULE_LIPID_SUM));

    let out = checks(
        Panel::Lipid,
        &[("TC", n(300.0)), ("HDL", n(50.0)), ("TG", n(150.0)), ("LDL", n(120.0))],
    );
    assert_eq!(find(&out, RULE_LIPID_SUM).severity, Severity::Warning);
}

#[test]
fn test_hba1c_glucose_concordance() {
    let out = checks(Panel::Sugar, &[("HbA1c", n(7.0)), ("Fasting_Glucose", n(90.0))]);
    let c = find(&out, RULE_A1C_GLUCOSE);
    assert_eq!(c.severity, Severity::Info);
    assert_eq!(c.expected, Some(154.0));

    let out = checks(Panel::Sugar, &[("HbA1c", n(7.0)), ("FBS", n(150.0))]);
    assert_eq!(find(&out, RULE_A1C_GLUCOSE).severity, Severity::Pass);
}

#[test]
fn test_urine_dipstick_vs_microscopy() {
    let out = checks(Panel::Urine, &[("Urine_Blood", t("Positive")), ("Urine_RBC", n(1.0))]);
    assert_eq!(find(&out, RULE_URINE_BLOOD).severity, Severity::Warning);

    let out = checks(Panel::Urine, &[("Urine_Blood", t("Negative")), ("Urine_RBC", n(1.0))]);
    assert_eq!(find(&out, RULE_URINE_BLOOD).severity, Severity::Pass);

    let out = checks(
        Panel::Urine,
        &[("Leukocyte_Esterase", t("2+")), ("Urine_WBC", n(2.0))],
    );
    assert_eq!(find(&out, RULE_URINE_LE).severity, Severity::Info);
}

#[test]
fn test_free_psa_exceeding_total_is_error() {
    let out = checks(Panel::Oncology, &[("Free_PSA", n(5.0)), ("Total_PSA", n(4.0))]);
    let c = find(&out, RULE_PSA);
    assert_eq!(c.severity, Severity::Error);

    let out = checks(Panel::Oncology, &[("Free_PSA", n(1.0)), ("PSA", n(4.0))]);
    assert_eq!(find(&out, RULE_PSA).severity, Severity::Pass);
}

#[test]
fn test_no_applicable_rule_yields_overall_pass() {
    for panel in [Panel::Lft, Panel::Tft, Panel::Rheumatology] {
        let out = checks(panel, &[("ALT", n(500.0))]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule, OVERALL_QUALITY_RULE);
        assert_eq!(out[0].severity, Severity::Pass);
    }
    let out = checks(Panel::Cbc, &[]);
    assert_eq!(out, vec![QualityCheckResult::overall_pass()]);
}
