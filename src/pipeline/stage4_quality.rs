use crate::model::indices::round_to;
use crate::model::quality::{QualityCheckResult, Severity};
use crate::model::reference::lookup_qualitative;
use crate::model::status::Status;
use crate::model::value::Sex;
use crate::panels::Panel;
use crate::pipeline::Measurements;
use crate::pipeline::indices::kft::UREA_TO_BUN;
use crate::pipeline::indices::lipid::FRIEDEWALD_TG_LIMIT;
use crate::pipeline::indices::sugar::eag;
use crate::pipeline::stage1_classify::{classify_qualitative, get_reference_range};

pub const RULE_RBC_HB: &str = "Rule of Threes (RBC x 3 = Hb)";
pub const RULE_HB_HCT: &str = "Rule of Threes (Hb x 3 = Hct)";
pub const RULE_MCV: &str = "MCV Consistency (Hct x 10 / RBC = MCV)";
pub const RULE_MCH: &str = "MCH Consistency (Hb x 10 / RBC = MCH)";
pub const RULE_MCHC: &str = "MCHC Upper Limit";
pub const RULE_WBC_DIFF: &str = "WBC Differential Sum";
pub const RULE_PLT_MPV: &str = "Platelet-MPV Relationship";
pub const RULE_BUN_CR: &str = "BUN/Creatinine Ratio Assessment";
pub const RULE_UREA_BUN: &str = "Urea/BUN Concordance";
pub const RULE_FRIEDEWALD: &str = "Friedewald Validity";
pub const RULE_LIPID_SUM: &str = "Lipid Sum Consistency";
pub const RULE_A1C_GLUCOSE: &str = "HbA1c/Glucose Concordance";
pub const RULE_URINE_BLOOD: &str = "Dipstick Blood vs Microscopy RBC";
pub const RULE_URINE_LE: &str = "Leukocyte Esterase vs Microscopy WBC";
pub const RULE_PSA: &str = "Free PSA vs Total PSA";

const WBC_DIFFERENTIAL: &[&str] = &["Neutrophils", "Lymphocytes", "Monocytes", "Eosinophils", "Basophils"];

fn deviation_check(
    rule: &'static str,
    expected: f64,
    actual: f64,
    severity: Severity,
    interpretation: String,
) -> QualityCheckResult {
    QualityCheckResult {
        rule,
        expected: Some(round_to(expected, 2)),
        actual: Some(actual),
        deviation: Some(round_to((actual - expected).abs(), 2)),
        severity,
        interpretation,
    }
}

fn note(rule: &'static str, severity: Severity, interpretation: String) -> QualityCheckResult {
    QualityCheckResult {
        rule,
        expected: None,
        actual: None,
        deviation: None,
        severity,
        interpretation,
    }
}

fn tiered_message(severity: Severity, ok: &str, off: &str) -> String {
    match severity {
        Severity::Pass => ok.to_string(),
        Severity::Error => format!("{off} Likely sample or transcription error."),
        _ => off.to_string(),
    }
}

fn cbc_checks(m: &Measurements, sex: Sex, out: &mut Vec<QualityCheckResult>) {
    let rbc = m.number("RBC");
    let hb = m.number("Hemoglobin");
    let hct = m.number("Hematocrit");

    if let (Some(rbc), Some(hb)) = (rbc, hb) {
        let expected = rbc * 3.0;
        let severity = Severity::tiered(hb - expected, 1.5, 3.0);
        out.push(deviation_check(
            RULE_RBC_HB,
            expected,
            hb,
            severity,
            tiered_message(
                severity,
                "Hemoglobin consistent with RBC count.",
                &format!("Hemoglobin {hb} deviates from expected {:.1} (RBC x 3).", expected),
            ),
        ));
    }

    if let (Some(hb), Some(hct)) = (hb, hct) {
        let expected = hb * 3.0;
        let severity = Severity::tiered(hct - expected, 3.0, 6.0);
        out.push(deviation_check(
            RULE_HB_HCT,
            expected,
            hct,
            severity,
            tiered_message(
                severity,
                "Hematocrit consistent with hemoglobin.",
                &format!("Hematocrit {hct} deviates from expected {:.1} (Hb x 3).", expected),
            ),
        ));
    }

    if let (Some(hct), Some(rbc), Some(mcv)) = (hct, m.positive("RBC"), m.number("MCV")) {
        let expected = hct * 10.0 / rbc;
        let severity = Severity::tiered(mcv - expected, 5.0, 10.0);
        out.push(deviation_check(
            RULE_MCV,
            expected,
            mcv,
            severity,
            tiered_message(
                severity,
                "Reported MCV matches calculated value.",
                &format!("Reported MCV {mcv} differs from calculated {:.1} fL.", expected),
            ),
        ));
    }

    if let (Some(hb), Some(rbc), Some(mch)) = (hb, m.positive("RBC"), m.number("MCH")) {
        let expected = hb * 10.0 / rbc;
        let severity = Severity::tiered(mch - expected, 2.0, 4.0);
        out.push(deviation_check(
            RULE_MCH,
            expected,
            mch,
            severity,
            tiered_message(
                severity,
                "Reported MCH matches calculated value.",
                &format!("Reported MCH {mch} differs from calculated {:.1} pg.", expected),
            ),
        ));
    }

    if let Some(mchc) = m.number("MCHC") {
        let (severity, interpretation) = if mchc > 36.5 {
            (
                Severity::Warning,
                format!(
                    "MCHC {mchc} exceeds 36.5 g/dL: consider spherocytosis, cold agglutinins or lipemia artifact."
                ),
            )
        } else {
            (Severity::Pass, "MCHC within physiological limit.".to_string())
        };
        out.push(QualityCheckResult {
            rule: RULE_MCHC,
            expected: Some(36.5),
            actual: Some(mchc),
            deviation: None,
            severity,
            interpretation,
        });
    }

    let diff: Option<Vec<f64>> = WBC_DIFFERENTIAL.iter().map(|name| m.number(name)).collect();
    if let Some(diff) = diff {
        let sum = round_to(diff.iter().sum(), 1);
        let severity = Severity::tiered(sum - 100.0, 5.0, 10.0);
        out.push(deviation_check(
            RULE_WBC_DIFF,
            100.0,
            sum,
            severity,
            tiered_message(
                severity,
                "Differential percentages sum to ~100%.",
                &format!("Differential percentages sum to {sum}%."),
            ),
        ));
    }

    if let (Some(plt), Some(mpv)) = (m.number("Platelets"), m.number("MPV")) {
        let plt_range = get_reference_range(Panel::Cbc, "Platelets", sex);
        let mpv_range = get_reference_range(Panel::Cbc, "MPV", sex);
        if let (Some(pr), Some(mr)) = (plt_range, mpv_range) {
            let interpretation = if plt > pr.high && mpv > mr.high {
                Some("Platelets and MPV both elevated: consider reactive thrombocytosis with young platelets or a myeloproliferative process.")
            } else if plt < pr.low && mpv < mr.low {
                Some("Platelets and MPV both low: suggests marrow underproduction rather than peripheral destruction.")
            } else {
                None
            };
            if let Some(interpretation) = interpretation {
                out.push(note(RULE_PLT_MPV, Severity::Info, interpretation.to_string()));
            }
        }
    }
}

fn kft_checks(m: &Measurements, out: &mut Vec<QualityCheckResult>) {
    if let (Some(bun), Some(cr)) = (m.number("BUN"), m.positive("Creatinine")) {
        let ratio = bun / cr;
        let (severity, verdict) = if (10.0..=20.0).contains(&ratio) {
            (Severity::Pass, "Normal range.")
        } else if ratio > 20.0 {
            (Severity::Warning, "Elevated: consider prerenal causes, GI bleeding.")
        } else {
            (Severity::Warning, "Low: consider liver disease, malnutrition, intrinsic renal.")
        };
        out.push(QualityCheckResult {
            rule: RULE_BUN_CR,
            expected: None,
            actual: Some(round_to(ratio, 1)),
            deviation: None,
            severity,
            interpretation: format!("BUN/Cr ratio: {ratio:.1}. {verdict}"),
        });
    }

    if let (Some(urea), Some(bun)) = (m.number("Urea"), m.positive("BUN")) {
        let expected = bun * UREA_TO_BUN;
        let relative = (urea - expected).abs() / expected;
        let (severity, interpretation) = if relative > 0.15 {
            (
                Severity::Warning,
                format!("Urea {urea} does not match BUN x 2.14 ({expected:.1}); check units."),
            )
        } else {
            (Severity::Pass, "Urea and BUN concordant.".to_string())
        };
        out.push(deviation_check(RULE_UREA_BUN, expected, urea, severity, interpretation));
    }
}

fn lipid_checks(m: &Measurements, out: &mut Vec<QualityCheckResult>) {
    let tc = m.number("Total_Cholesterol");
    let hdl = m.number("HDL");
    let tg = m.number("Triglycerides");

    if let (Some(_), Some(_), Some(tg)) = (tc, hdl, tg) {
        let (severity, interpretation) = if tg >= FRIEDEWALD_TG_LIMIT {
            (
                Severity::Warning,
                format!("Triglycerides {tg} mg/dL: Friedewald LDL invalid, use direct LDL."),
            )
        } else {
            (Severity::Pass, "Friedewald estimate valid (TG <400).".to_string())
        };
        out.push(note(RULE_FRIEDEWALD, severity, interpretation));
    }

    if let (Some(tc), Some(hdl), Some(tg), Some(ldl)) = (tc, hdl, tg, m.number("LDL"))
        && tg < FRIEDEWALD_TG_LIMIT
        && tc > 0.0
    {
        let expected = hdl + ldl + tg / 5.0;
        let relative = (tc - expected).abs() / tc;
        let (severity, interpretation) = if relative > 0.10 {
            (
                Severity::Warning,
                format!(
                    "HDL + LDL + TG/5 = {expected:.0} differs from total cholesterol {tc} by more than 10%."
                ),
            )
        } else {
            (Severity::Pass, "Lipid fractions add up to total cholesterol.".to_string())
        };
        out.push(deviation_check(RULE_LIPID_SUM, expected, tc, severity, interpretation));
    }
}

fn sugar_checks(m: &Measurements, out: &mut Vec<QualityCheckResult>) {
    if let (Some(a1c), Some(fg)) = (m.number("HbA1c"), m.number("Fasting_Glucose")) {
        let expected = eag(a1c);
        let (severity, interpretation) = if (expected - fg).abs() > 50.0 {
            (
                Severity::Info,
                format!(
                    "Fasting glucose {fg} differs from HbA1c-derived eAG {expected} by >50 mg/dL: consider recent dietary change, hemoglobinopathy or altered RBC lifespan."
                ),
            )
        } else {
            (Severity::Pass, "HbA1c and fasting glucose concordant.".to_string())
        };
        out.push(deviation_check(RULE_A1C_GLUCOSE, expected, fg, severity, interpretation));
    }
}

fn dipstick_positive(m: &Measurements, name: &str) -> bool {
    let Some(input) = m.get(name) else {
        return false;
    };
    lookup_qualitative(Panel::Urine.tables().qualitative, name)
        .is_some_and(|def| classify_qualitative(&input.value, def).status == Status::Abnormal)
}

fn urine_checks(m: &Measurements, out: &mut Vec<QualityCheckResult>) {
    if m.get("Urine_Blood").is_some()
        && let Some(rbc) = m.number("Urine_RBC")
    {
        let (severity, interpretation) = if dipstick_positive(m, "Urine_Blood") && rbc <= 2.0 {
            (
                Severity::Warning,
                format!(
                    "Dipstick blood positive with {rbc} RBC/hpf: consider hemoglobinuria, myoglobinuria or lysed cells."
                ),
            )
        } else {
            (Severity::Pass, "Dipstick blood and microscopy concordant.".to_string())
        };
        out.push(note(RULE_URINE_BLOOD, severity, interpretation));
    }

    if m.get("Urine_Leukocyte_Esterase").is_some()
        && let Some(wbc) = m.number("Urine_WBC")
    {
        let (severity, interpretation) =
            if dipstick_positive(m, "Urine_Leukocyte_Esterase") && wbc <= 5.0 {
                (
                    Severity::Info,
                    format!("Leukocyte esterase positive with {wbc} WBC/hpf: cells may have lysed in dilute or old sample."),
                )
            } else {
                (Severity::Pass, "Leukocyte esterase and microscopy concordant.".to_string())
            };
        out.push(note(RULE_URINE_LE, severity, interpretation));
    }
}

fn oncology_checks(m: &Measurements, out: &mut Vec<QualityCheckResult>) {
    if let (Some(free), Some(total)) = (m.number("Free_PSA"), m.number("Total_PSA")) {
        let (severity, interpretation) = if free > total {
            (
                Severity::Error,
                format!("Free PSA {free} exceeds total PSA {total}: not physiologically possible."),
            )
        } else {
            (Severity::Pass, "Free PSA does not exceed total PSA.".to_string())
        };
        out.push(QualityCheckResult {
            rule: RULE_PSA,
            expected: None,
            actual: Some(free),
            deviation: None,
            severity,
            interpretation,
        });
    }
}

/// Never returns an empty list: with no applicable rule the result is a
/// single overall pass record.
pub fn run_stage4(panel: Panel, measurements: &Measurements, sex: Sex) -> Vec<QualityCheckResult> {
    let mut out = Vec::new();
    match panel {
        Panel::Cbc => cbc_checks(measurements, sex, &mut out),
        Panel::Kft => kft_checks(measurements, &mut out),
        Panel::Lipid => lipid_checks(measurements, &mut out),
        Panel::Sugar => sugar_checks(measurements, &mut out),
        Panel::Urine => urine_checks(measurements, &mut out),
        Panel::Oncology => oncology_checks(measurements, &mut out),
        Panel::Lft | Panel::Tft | Panel::Rheumatology => {}
    }

    for check in &out {
        if check.severity >= Severity::Warning {
            tracing::warn!(
                panel = panel.id(),
                rule = check.rule,
                severity = check.severity.as_str(),
                "{}",
                check.interpretation
            );
        }
    }

    if out.is_empty() {
        out.push(QualityCheckResult::overall_pass());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_quality.rs"]
mod tests;
