use super::*;
use crate::model::indices::IndexValue;
use crate::model::value::{ParameterMap, ParameterValue};
use crate::pipeline::indices::cbc::{CALCULATED_ANC, CORRECTED_RETIC, MENTZER, NLR};
use crate::pipeline::indices::kft::{
    ANION_GAP, BUN_CREATININE_RATIO, CALCULATED_BUN, CKD_STAGE, CORRECTED_CALCIUM,
};
use crate::pipeline::indices::lft::{
    AG_RATIO, AST_ALT_RATIO, CALCULATED_GLOBULIN, CALCULATED_INDIRECT_BILIRUBIN, INJURY_PATTERN,
    INJURY_SEVERITY, R_VALUE,
};
use crate::pipeline::indices::lipid::{
    FRIEDEWALD_LDL, LDL_HDL_RATIO, NON_HDL, PANCREATITIS_RISK, TC_HDL_RATIO,
};
use crate::pipeline::indices::oncology::{GCT_RISK, PSA_RATIO};
use crate::pipeline::indices::sugar::{CALCULATED_EAG, CALCULATED_HOMA_IR};

fn indices(panel: Panel, entries: &[(&str, f64)], sex: Sex) -> IndexMap {
    let params: ParameterMap = entries
        .iter()
        .map(|(k, v)| (k.to_string(), ParameterValue::new(*v, "")))
        .collect();
    let m = Measurements::canonicalize(panel, &params);
    run_stage3(Stage3Inputs {
        panel,
        measurements: &m,
        sex,
    })
}

fn number(map: &IndexMap, key: &str) -> f64 {
    map[key].value.as_number().unwrap()
}

fn text(map: &IndexMap, key: &str) -> String {
    match &map[key].value {
        IndexValue::Text(s) => s.clone(),
        IndexValue::Number(v) => panic!("expected text index, got {v}"),
    }
}

#[test]
fn test_mentzer_index_and_guard() {
    let out = indices(Panel::Cbc, &[("MCV", 70.0), ("RBC", 5.5)], Sex::Male);
    assert_eq!(number(&out, MENTZER), 12.7);
    assert!(out[MENTZER].interpretation.contains("thalassemia trait"));

    let out = indices(Panel::Cbc, &[("MCV", 70.0), ("RBC", 4.0)], Sex::Male);
    assert!(out[MENTZER].interpretation.contains("iron deficiency"));

    let out = indices(Panel::Cbc, &[("MCV", 70.0), ("RBC", 0.0)], Sex::Male);
    assert!(!out.contains_key(MENTZER));
}

#[test]
fn test_nlr_bands_upper_inclusive() {
    let out = indices(Panel::Cbc, &[("Neutrophils", 60.0), ("Lymphocytes", 20.0)], Sex::Default);
    assert_eq!(number(&out, NLR), 3.0);
    assert_eq!(out[NLR].interpretation, "Normal (1-3)");

    let out = indices(Panel::Cbc, &[("Neutrophils", 90.0), ("Lymphocytes", 10.0)], Sex::Default);
    assert!(out[NLR].interpretation.starts_with("Mild"));

    let out = indices(Panel::Cbc, &[("Neutrophils", 95.0), ("Lymphocytes", 10.0)], Sex::Default);
    assert!(out[NLR].interpretation.starts_with("Severe"));

    let out = indices(Panel::Cbc, &[("Neutrophils", 60.0), ("Lymphocytes", 0.0)], Sex::Default);
    assert!(!out.contains_key(NLR));
}

#[test]
fn test_calculated_anc_and_retic() {
    let out = indices(
        Panel::Cbc,
        &[("WBC", 2.0), ("Neutrophils", 40.0), ("Reticulocytes", 3.0), ("Hematocrit", 30.0)],
        Sex::Default,
    );
    assert_eq!(number(&out, CALCULATED_ANC), 0.8);
    assert!(out[CALCULATED_ANC].interpretation.contains("Moderate neutropenia"));
    assert_eq!(number(&out, CORRECTED_RETIC), 2.0);
    assert!(out[CORRECTED_RETIC].interpretation.starts_with("2%: adequate"));
}

#[test]
fn test_lft_hepatocellular_pattern() {
    let out = indices(Panel::Lft, &[("ALT", 330.0), ("ALP", 120.0)], Sex::Male);
    assert_eq!(number(&out, R_VALUE), 10.0);
    assert_eq!(text(&out, INJURY_PATTERN), "Hepatocellular");
    assert_eq!(number(&out, INJURY_SEVERITY), 10.0);
    assert!(out[INJURY_SEVERITY].interpretation.starts_with("Severe"));
}

#[test]
fn test_lft_cholestatic_and_isolated_patterns() {
    let out = indices(Panel::Lft, &[("ALT", 33.0), ("ALP", 480.0)], Sex::Male);
    assert_eq!(number(&out, R_VALUE), 0.25);
    assert_eq!(text(&out, INJURY_PATTERN), "Cholestatic");

    let out = indices(
        Panel::Lft,
        &[("ALT", 20.0), ("AST", 20.0), ("ALP", 100.0), ("Total_Bilirubin", 2.5)],
        Sex::Male,
    );
    assert_eq!(text(&out, INJURY_PATTERN), "Isolated Hyperbilirubinemia");
    assert_eq!(number(&out, INJURY_SEVERITY), 1.0);
    assert!(out[INJURY_SEVERITY].interpretation.starts_with("Mild"));
}

#[test]
fn test_lft_r_value_uses_female_uln() {
    let out = indices(Panel::Lft, &[("ALT", 125.0), ("ALP", 120.0)], Sex::Female);
    assert_eq!(number(&out, R_VALUE), 5.0);
    assert_eq!(text(&out, INJURY_PATTERN), "Hepatocellular");
}

#[test]
fn test_lft_r_value_guard() {
    let out = indices(Panel::Lft, &[("ALT", 100.0), ("ALP", 0.0)], Sex::Male);
    assert!(!out.contains_key(R_VALUE));
    assert!(!out.contains_key(INJURY_PATTERN));
}

#[test]
fn test_lft_ratios_and_derived_values() {
    let out = indices(
        Panel::Lft,
        &[
            ("AST", 100.0),
            ("ALT", 40.0),
            ("Total_Protein", 7.0),
            ("Albumin", 4.0),
            ("Total_Bilirubin", 2.0),
            ("Direct_Bilirubin", 0.5),
        ],
        Sex::Male,
    );
    assert_eq!(number(&out, AST_ALT_RATIO), 2.5);
    assert!(out[AST_ALT_RATIO].interpretation.starts_with("2.50:1"));
    assert!(out[AST_ALT_RATIO].interpretation.contains("alcoholic"));
    assert_eq!(number(&out, CALCULATED_GLOBULIN), 3.0);
    assert_eq!(number(&out, AG_RATIO), 1.33);
    assert_eq!(number(&out, CALCULATED_INDIRECT_BILIRUBIN), 1.5);
    assert!(!out.contains_key(INJURY_SEVERITY));
}

#[test]
fn test_anion_gap_elevated() {
    let out = indices(
        Panel::Kft,
        &[("Sodium", 140.0), ("Chloride", 100.0), ("Bicarbonate", 24.0)],
        Sex::Default,
    );
    assert_eq!(number(&out, ANION_GAP), 16.0);
    assert!(out[ANION_GAP].interpretation.starts_with("Elevated"));
    assert!(out[ANION_GAP].interpretation.contains("MUDPILES"));
}

#[test]
fn test_anion_gap_normal_and_low() {
    let out = indices(
        Panel::Kft,
        &[("Na", 140.0), ("Cl", 104.0), ("HCO3", 24.0)],
        Sex::Default,
    );
    assert_eq!(number(&out, ANION_GAP), 12.0);
    assert_eq!(out[ANION_GAP].interpretation, "Normal");

    let out = indices(
        Panel::Kft,
        &[("Sodium", 135.0), ("Chloride", 105.0), ("Bicarbonate", 25.0)],
        Sex::Default,
    );
    assert!(out[ANION_GAP].interpretation.starts_with("Low"));
}

#[test]
fn test_bun_creatinine_ratio() {
    let out = indices(Panel::Kft, &[("BUN", 30.0), ("Creatinine", 1.0)], Sex::Male);
    assert_eq!(number(&out, BUN_CREATININE_RATIO), 30.0);
    assert_eq!(
        out[BUN_CREATININE_RATIO].interpretation,
        "Prerenal (dehydration, CHF, GI bleed)"
    );

    let out = indices(Panel::Kft, &[("BUN", 15.0), ("Creatinine", 1.0)], Sex::Male);
    assert_eq!(out[BUN_CREATININE_RATIO].interpretation, "Normal");

    let out = indices(Panel::Kft, &[("BUN", 15.0), ("Creatinine", 0.0)], Sex::Male);
    assert!(!out.contains_key(BUN_CREATININE_RATIO));
}

#[test]
fn test_corrected_calcium_guard() {
    let out = indices(Panel::Kft, &[("Calcium", 8.0), ("Albumin", 3.0)], Sex::Default);
    assert_eq!(number(&out, CORRECTED_CALCIUM), 8.8);

    let out = indices(Panel::Kft, &[("Calcium", 8.0), ("Albumin", 4.0)], Sex::Default);
    assert!(!out.contains_key(CORRECTED_CALCIUM));

    let out = indices(Panel::Kft, &[("Calcium", 8.0), ("Albumin", 4.5)], Sex::Default);
    assert!(!out.contains_key(CORRECTED_CALCIUM));
}

#[test]
fn test_ckd_stage_breakpoints() {
    for (egfr, code) in [
        (95.0, "G1"),
        (90.0, "G1"),
        (60.0, "G2"),
        (50.0, "G3a"),
        (45.0, "G3a"),
        (30.0, "G3b"),
        (15.0, "G4"),
        (10.0, "G5"),
    ] {
        let out = indices(Panel::Kft, &[("eGFR", egfr)], Sex::Default);
        assert_eq!(text(&out, CKD_STAGE), code);
    }
}

#[test]
fn test_calculated_bun_only_without_bun() {
    let out = indices(Panel::Kft, &[("Urea", 42.8)], Sex::Default);
    assert_eq!(number(&out, CALCULATED_BUN), 20.0);

    let out = indices(Panel::Kft, &[("Urea", 42.8), ("BUN", 20.0)], Sex::Default);
    assert!(!out.contains_key(CALCULATED_BUN));
}

#[test]
fn test_lipid_indices() {
    let out = indices(
        Panel::Lipid,
        &[("Total_Cholesterol", 200.0), ("HDL", 50.0), ("Triglycerides", 150.0), ("LDL", 150.0)],
        Sex::Male,
    );
    assert_eq!(number(&out, TC_HDL_RATIO), 4.0);
    assert!(out[TC_HDL_RATIO].interpretation.contains("Optimal"));
    assert_eq!(number(&out, NON_HDL), 150.0);
    assert!(out[NON_HDL].interpretation.contains("Elevated"));
    assert_eq!(number(&out, FRIEDEWALD_LDL), 120.0);
    assert_eq!(number(&out, LDL_HDL_RATIO), 3.0);
    assert!(out[LDL_HDL_RATIO].interpretation.contains("Elevated"));
    assert!(!out.contains_key(PANCREATITIS_RISK));
}

#[test]
fn test_friedewald_absent_when_tg_at_least_400() {
    let out = indices(
        Panel::Lipid,
        &[("TC", 250.0), ("HDL", 40.0), ("TG", 400.0)],
        Sex::Male,
    );
    assert!(!out.contains_key(FRIEDEWALD_LDL));
    assert!(out.contains_key(TC_HDL_RATIO));
}

#[test]
fn test_pancreatitis_risk() {
    let out = indices(Panel::Lipid, &[("Triglycerides", 500.0)], Sex::Male);
    assert_eq!(text(&out, PANCREATITIS_RISK), "HIGH");
}

#[test]
fn test_homa_ir_scenario() {
    let out = indices(Panel::Sugar, &[("Fasting_Glucose", 110.0), ("Insulin", 15.0)], Sex::Default);
    assert_eq!(number(&out, CALCULATED_HOMA_IR), 4.07);
    assert_eq!(out[CALCULATED_HOMA_IR].interpretation, "4.07: Insulin resistant (≥2.5)");
}

#[test]
fn test_eag_from_hba1c() {
    let out = indices(Panel::Sugar, &[("HbA1c", 7.0)], Sex::Default);
    assert_eq!(number(&out, CALCULATED_EAG), 154.0);
    assert_eq!(out[CALCULATED_EAG].formula, "eAG = 28.7 × HbA1c - 46.7");
}

#[test]
fn test_psa_ratio_bands() {
    let out = indices(Panel::Oncology, &[("Free_PSA", 1.5), ("Total_PSA", 10.0)], Sex::Male);
    assert_eq!(number(&out, PSA_RATIO), 15.0);
    assert!(out[PSA_RATIO].interpretation.contains("Intermediate"));

    let out = indices(Panel::Oncology, &[("Free_PSA", 0.5), ("PSA", 10.0)], Sex::Male);
    assert!(out[PSA_RATIO].interpretation.contains("High risk"));

    let out = indices(Panel::Oncology, &[("Free_PSA", 3.0), ("Total_PSA", 10.0)], Sex::Male);
    assert!(out[PSA_RATIO].interpretation.contains("Likely benign"));

    let out = indices(Panel::Oncology, &[("Free_PSA", 0.5), ("Total_PSA", 0.0)], Sex::Male);
    assert!(!out.contains_key(PSA_RATIO));
}

#[test]
fn test_gct_risk_classes() {
    let good = indices(
        Panel::Oncology,
        &[("AFP", 500.0), ("Beta_hCG", 1000.0), ("LDH", 300.0)],
        Sex::Male,
    );
    assert_eq!(text(&good, GCT_RISK), "Good prognosis");

    let intermediate = indices(
        Panel::Oncology,
        &[("AFP", 2000.0), ("Beta_hCG", 1000.0), ("Onco_LDH", 300.0)],
        Sex::Male,
    );
    assert_eq!(text(&intermediate, GCT_RISK), "Intermediate prognosis");

    let poor = indices(
        Panel::Oncology,
        &[("AFP", 20000.0), ("Beta_hCG", 1000.0), ("Onco_LDH", 300.0)],
        Sex::Male,
    );
    assert_eq!(text(&poor, GCT_RISK), "Poor prognosis");

    let missing = indices(Panel::Oncology, &[("AFP", 500.0), ("Beta_hCG", 1000.0)], Sex::Male);
    assert!(!missing.contains_key(GCT_RISK));
}

#[test]
fn test_panels_without_indices() {
    let out = indices(Panel::Tft, &[("TSH", 8.0), ("FT4", 0.5)], Sex::Default);
    assert!(out.is_empty());
    let out = indices(Panel::Urine, &[("Urine_WBC", 20.0)], Sex::Default);
    assert!(out.is_empty());
}
