use crate::model::context::ClinicalContext;
use crate::model::indices::{IndexMap, round_to};
use crate::model::result::{Pathway, PathwayKind, Recommendation, SeverityRow};
use crate::model::status::Direction;
use crate::model::value::Sex;
use crate::panels::Panel;
use crate::panels::tables::lft::{
    ALP_ULN, DIRECT_BILIRUBIN_ULN, TOTAL_BILIRUBIN_ULN, alt_uln, ast_uln,
};
use crate::panels::tables::tft::{FT3_HIGH, FT4_HIGH, FT4_LOW, TSH_HIGH, TSH_LOW};
use crate::pipeline::Measurements;
use crate::pipeline::indices::lft::{INJURY_SEVERITY, InjuryPattern, R_VALUE, injury_pattern};
use crate::pipeline::stage2_differential::Stage2Output;

pub struct Stage5Inputs<'a> {
    pub panel: Panel,
    pub measurements: &'a Measurements,
    pub sex: Sex,
    pub stage2: &'a Stage2Output,
    pub indices: &'a IndexMap,
    pub context: &'a ClinicalContext,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage5Output {
    pub pattern_summary: String,
    pub recommendations: Vec<Recommendation>,
    pub educational_content: String,
    /// Liver panel only.
    pub pathway: Option<Pathway>,
    pub severity_table: Vec<SeverityRow>,
}

fn direction_of(stage2: &Stage2Output, name: &str) -> Option<Direction> {
    stage2
        .parameters
        .get(name)
        .and_then(|p| p.classification.status.direction())
}

fn is_low(stage2: &Stage2Output, name: &str) -> bool {
    direction_of(stage2, name) == Some(Direction::Low)
}

fn is_high(stage2: &Stage2Output, name: &str) -> bool {
    direction_of(stage2, name) == Some(Direction::High)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn cbc_patterns(m: &Measurements, s2: &Stage2Output) -> Vec<String> {
    let mut patterns = Vec::new();
    if is_low(s2, "Hemoglobin") {
        let line = match m.number("MCV") {
            Some(mcv) if mcv < 80.0 => format!(
                "**Microcytic anemia**: low hemoglobin with MCV {mcv} fL (iron deficiency, thalassemia trait, anemia of chronic disease)"
            ),
            Some(mcv) if mcv > 100.0 => format!(
                "**Macrocytic anemia**: low hemoglobin with MCV {mcv} fL (B12 or folate deficiency, liver disease, alcohol, myelodysplasia)"
            ),
            Some(mcv) => format!(
                "**Normocytic anemia**: low hemoglobin with MCV {mcv} fL (acute blood loss, hemolysis, chronic kidney disease, marrow failure)"
            ),
            None => "**Anemia**: low hemoglobin; MCV needed to classify morphology".to_string(),
        };
        patterns.push(line);
    }
    if is_low(s2, "Hemoglobin") && is_low(s2, "WBC") && is_low(s2, "Platelets") {
        patterns.push(
            "**Pancytopenia**: all three cell lines reduced; evaluate for marrow failure, infiltration, hypersplenism or B12 deficiency"
                .to_string(),
        );
    }
    if is_high(s2, "WBC") {
        let detail = if is_high(s2, "Neutrophils") {
            "with neutrophilia (bacterial infection, stress, steroids)"
        } else if is_high(s2, "Lymphocytes") {
            "with lymphocytosis (viral infection, CLL)"
        } else {
            "(infection, inflammation, hematologic malignancy)"
        };
        patterns.push(format!("**Leukocytosis** {detail}"));
    }
    patterns
}

/// The injury pattern only counts when at least one liver marker is abnormal.
fn active_injury_pattern(m: &Measurements, sex: Sex, s2: &Stage2Output) -> Option<InjuryPattern> {
    let any_abnormal = ["ALT", "AST", "ALP", "Total_Bilirubin"]
        .iter()
        .any(|name| is_high(s2, name));
    if any_abnormal {
        injury_pattern(m, sex)
    } else {
        None
    }
}

fn synthetic_failure(m: &Measurements) -> bool {
    m.number("INR").is_some_and(|inr| inr > 1.5)
        || m.positive("Albumin").is_some_and(|alb| alb < 2.5)
}

fn lft_patterns(m: &Measurements, sex: Sex, s2: &Stage2Output, indices: &IndexMap) -> Vec<String> {
    let mut patterns = Vec::new();
    if let Some(pattern) = active_injury_pattern(m, sex, s2) {
        let r = indices
            .get(R_VALUE)
            .map(|idx| format!(" (R = {})", idx.value))
            .unwrap_or_default();
        patterns.push(format!(
            "**{} pattern**{r}: {}",
            pattern.label(),
            pattern.description()
        ));
        if let Some(severity) = indices.get(INJURY_SEVERITY) {
            patterns.push(format!("**Severity**: {}", severity.interpretation));
        }
    }
    let mut synthetic = Vec::new();
    if let Some(inr) = m.number("INR").filter(|v| *v > 1.1) {
        synthetic.push(format!("INR {inr}"));
    }
    if let Some(pt) = m.number("PT").filter(|v| *v > 13.0) {
        synthetic.push(format!("PT {pt} sec"));
    }
    if is_low(s2, "Albumin") {
        synthetic.push("low albumin".to_string());
    }
    if !synthetic.is_empty() {
        patterns.push(format!(
            "**Impaired synthetic function**: {}",
            synthetic.join(", ")
        ));
    }
    patterns
}

fn kft_patterns(m: &Measurements, s2: &Stage2Output) -> Vec<String> {
    let mut patterns = Vec::new();
    if is_high(s2, "Creatinine") {
        let prerenal = match (m.number("BUN"), m.positive("Creatinine")) {
            (Some(bun), Some(cr)) => bun / cr > 20.0,
            _ => false,
        };
        if prerenal {
            patterns.push("**Prerenal azotemia pattern**: elevated BUN/Cr ratio >20:1".to_string());
        } else {
            patterns.push("**Renal impairment**: elevated creatinine".to_string());
        }
    }
    let mut electrolytes = Vec::new();
    if let Some(na) = m.number("Sodium") {
        if na < 136.0 {
            electrolytes.push("hyponatremia");
        }
        if na > 145.0 {
            electrolytes.push("hypernatremia");
        }
    }
    if let Some(k) = m.number("Potassium") {
        if k < 3.5 {
            electrolytes.push("hypokalemia");
        }
        if k > 5.0 {
            electrolytes.push("hyperkalemia");
        }
    }
    if !electrolytes.is_empty() {
        patterns.push(format!(
            "**Electrolyte abnormalities**: {}",
            electrolytes.join(", ")
        ));
    }
    patterns
}

fn lipid_patterns(m: &Measurements) -> Vec<String> {
    let mut patterns = Vec::new();
    if let Some(ldl) = m.number("LDL") {
        let tier = if ldl < 70.0 {
            "At optimal level for very high-risk patients"
        } else if ldl < 100.0 {
            "Optimal for high-risk; above goal for very high-risk"
        } else if ldl < 130.0 {
            "Near/above optimal; above goal for most patients with risk factors"
        } else if ldl < 160.0 {
            "Borderline high"
        } else if ldl < 190.0 {
            "High"
        } else {
            "Very high: consider familial hypercholesterolemia screening"
        };
        patterns.push(format!("**LDL Assessment**: {tier}"));
    }
    if let Some(tg) = m.number("Triglycerides") {
        let tier = if tg < 150.0 {
            "Normal"
        } else if tg < 200.0 {
            "Borderline (150-199)"
        } else if tg < 500.0 {
            "High (200-499)"
        } else {
            "VERY HIGH (≥500), PANCREATITIS RISK"
        };
        patterns.push(format!("**Triglyceride Assessment**: {tier}"));
    }
    patterns
}

fn sugar_patterns(m: &Measurements) -> Vec<String> {
    let mut patterns = Vec::new();
    if let Some(fg) = m.number("Fasting_Glucose") {
        if fg >= 126.0 {
            patterns.push("**Fasting glucose ≥126**: Diagnostic of diabetes (if confirmed)".to_string());
        } else if fg >= 100.0 {
            patterns.push("**Fasting glucose 100-125**: Impaired fasting glucose (prediabetes)".to_string());
        }
    }
    if let Some(a1c) = m.number("HbA1c") {
        if a1c >= 6.5 {
            patterns.push("**HbA1c ≥6.5%**: Diagnostic of diabetes".to_string());
        } else if a1c >= 5.7 {
            patterns.push("**HbA1c 5.7-6.4%**: Prediabetes".to_string());
        }
    }
    patterns
}

fn tft_patterns(m: &Measurements) -> Vec<String> {
    let (Some(tsh), Some(ft4)) = (m.number("TSH"), m.number("FT4")) else {
        return Vec::new();
    };
    let ft4_normal = (FT4_LOW..=FT4_HIGH).contains(&ft4);
    let line = if tsh > TSH_HIGH && ft4 < FT4_LOW {
        "**Primary Hypothyroidism**: High TSH + Low FT4"
    } else if tsh > TSH_HIGH && ft4_normal {
        "**Subclinical Hypothyroidism**: High TSH + Normal FT4"
    } else if tsh < TSH_LOW && ft4 > FT4_HIGH {
        "**Overt Hyperthyroidism**: Low TSH + High FT4"
    } else if tsh < TSH_LOW && ft4_normal {
        if m.number("FT3").is_some_and(|ft3| ft3 > FT3_HIGH) {
            "**T3 Thyrotoxicosis**: Low TSH + Normal FT4 + High FT3"
        } else {
            "**Subclinical Hyperthyroidism**: Low TSH + Normal FT4"
        }
    } else if tsh < TSH_LOW && ft4 < FT4_LOW {
        "**Central Hypothyroidism**: Low TSH + Low FT4 (pituitary/hypothalamic)"
    } else if tsh > TSH_HIGH && ft4 > FT4_HIGH {
        "**TSH-Secreting Adenoma or Thyroid Hormone Resistance**: High TSH + High FT4"
    } else {
        return Vec::new();
    };
    vec![line.to_string()]
}

fn urine_patterns(m: &Measurements) -> Vec<String> {
    let mut patterns = Vec::new();
    let text = |name: &str| m.text(name).unwrap_or_default();
    let nitrite = text("Urine_Nitrite");
    let le = text("Urine_Leukocyte_Esterase");
    let bacteria = text("Urine_Bacteria");
    let signs = [
        contains_any(&nitrite, &["positive", "+"]),
        contains_any(&le, &["positive", "+"]),
        m.number("Urine_WBC").is_some_and(|wbc| wbc > 5.0),
        contains_any(&bacteria, &["many", "moderate", "++"]),
    ]
    .iter()
    .filter(|hit| **hit)
    .count();
    if signs >= 2 {
        patterns.push(
            "**UTI Pattern**: Multiple findings suggest urinary tract infection. Recommend urine culture."
                .to_string(),
        );
    }
    if let Some(acr) = m.number("Albumin_Creatinine_Ratio") {
        if acr >= 300.0 {
            patterns.push(
                "**Macroalbuminuria (ACR ≥300)**: Significant proteinuria. Evaluate for diabetic/glomerular disease."
                    .to_string(),
            );
        } else if acr >= 30.0 {
            patterns.push(
                "**Microalbuminuria (ACR 30-299)**: Early nephropathy. Optimize BP and glucose control."
                    .to_string(),
            );
        }
    }
    patterns
}

fn rheumatology_patterns(m: &Measurements) -> Vec<String> {
    let mut patterns = Vec::new();
    if m.number("RF").is_some_and(|rf| rf > 14.0) && m.number("Anti_CCP").is_some_and(|ccp| ccp > 20.0) {
        patterns.push(
            "**Seropositive RA Pattern**: RF+ and Anti-CCP+, high probability of rheumatoid arthritis with erosive disease risk."
                .to_string(),
        );
    }

    let ana = m.text("ANA").unwrap_or_default();
    if contains_any(&ana, &["positive", "1:"]) && m.number("Anti_dsDNA").is_some_and(|v| v > 25.0) {
        let mut features = vec!["ANA+", "Anti-dsDNA+"];
        if m.number("Complement_C3").is_some_and(|c3| c3 < 90.0) {
            features.push("Low C3");
        }
        if m.number("Complement_C4").is_some_and(|c4| c4 < 10.0) {
            features.push("Low C4");
        }
        patterns.push(format!(
            "**SLE Pattern**: {}, evaluate for systemic lupus erythematosus.",
            features.join(", ")
        ));
    }

    let aps = ["Anti_Cardiolipin_IgG", "Anti_Cardiolipin_IgM", "Beta2_Glycoprotein"]
        .iter()
        .filter(|name| m.number(name).is_some_and(|v| v > 20.0))
        .count()
        + usize::from(
            m.text("Lupus_Anticoagulant")
                .is_some_and(|la| la.contains("positive")),
        );
    if aps >= 2 {
        patterns.push(
            "**Antiphospholipid Syndrome Pattern**: Multiple APS markers positive, evaluate for thrombotic risk."
                .to_string(),
        );
    }
    patterns
}

fn oncology_patterns(m: &Measurements) -> Vec<String> {
    let mut patterns = Vec::new();
    if m.number("AFP").is_some_and(|afp| afp > 400.0) {
        patterns.push(
            "**Markedly Elevated AFP**: Consider hepatocellular carcinoma (in cirrhosis) or germ cell tumor."
                .to_string(),
        );
    }
    if m.number("Total_PSA").is_some_and(|psa| psa > 10.0) {
        patterns.push(
            "**PSA >10**: ~50% probability of prostate cancer. Recommend MRI and biopsy.".to_string(),
        );
    }
    patterns
}

pub fn no_pattern_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Cbc => "No significant hematologic pattern identified.",
        Panel::Lft => "No significant hepatic injury pattern identified.",
        Panel::Kft => "No significant renal or electrolyte pattern identified.",
        Panel::Lipid => "No significant lipid pattern identified.",
        Panel::Sugar => "No significant glycemic pattern identified.",
        Panel::Urine => "No significant urinary pattern identified.",
        Panel::Tft => "No significant thyroid pattern identified.",
        Panel::Rheumatology => "No significant autoimmune pattern identified.",
        Panel::Oncology => "No significant tumor marker pattern identified.",
    }
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Shock or acute injury overrides everything; a hemolysis flag comes next;
/// otherwise the injury pattern picks the work-up.
pub fn determine_pathway(
    context: &ClinicalContext,
    pattern: Option<InjuryPattern>,
    m: &Measurements,
) -> Pathway {
    let pathway = |kind: PathwayKind, title: &'static str, lines: Vec<String>| Pathway {
        kind,
        title,
        emergency: kind == PathwayKind::Emergency,
        steps: lines,
    };
    if context.is_emergency() {
        return pathway(
            PathwayKind::Emergency,
            "Critical Care Pathway",
            steps(&[
                "Provide immediate hemodynamic support (ABC protocol, IV access, fluids)",
                "Obtain blood cultures before antibiotics",
                "Start empiric antibiotics if sepsis suspected",
                "Urgent RUQ imaging (bedside ultrasound if available)",
                "Consider ICU admission",
                "Check acetaminophen level, consider N-acetylcysteine",
                "Hepatology/GI emergent consultation",
            ]),
        );
    }
    if context.hemolysis {
        return pathway(
            PathwayKind::Hemolysis,
            "Hemolysis Evaluation Pathway",
            steps(&[
                "CBC with differential and reticulocyte count",
                "Peripheral blood smear review",
                "LDH, haptoglobin, indirect bilirubin levels",
                "Direct Coombs test (DAT)",
                "Consider hematology consultation",
            ]),
        );
    }
    match pattern {
        Some(InjuryPattern::IsolatedHyperbilirubinemia) => {
            let total = m.number("Total_Bilirubin").unwrap_or(0.0);
            let direct = m.number("Direct_Bilirubin").unwrap_or(0.0);
            let indirect = total - direct;
            pathway(
                PathwayKind::IsolatedBilirubin,
                "Isolated Hyperbilirubinemia Pathway",
                vec![
                    "Key question: is the excess unconjugated or conjugated?".to_string(),
                    format!("Indirect (unconjugated) bilirubin: ~{indirect:.1} mg/dL"),
                    "If predominantly indirect: consider Gilbert syndrome (most common), hemolysis".to_string(),
                    "If predominantly direct: consider Dubin-Johnson syndrome, Rotor syndrome".to_string(),
                    "Review medication history".to_string(),
                    "Check CBC with reticulocyte count if hemolysis suspected".to_string(),
                ],
            )
        }
        Some(InjuryPattern::Cholestatic) => pathway(
            PathwayKind::Cholestatic,
            "Cholestatic Injury Pathway (R ≤ 2)",
            steps(&[
                "First step: RUQ ultrasound",
                "If dilated ducts: extrahepatic obstruction, proceed to MRCP/ERCP",
                "If normal ducts: intrahepatic cholestasis; check AMA (PBC) and p-ANCA (PSC), review medications, consider MRCP if PSC suspected",
                "Check GGT to confirm hepatic origin of elevated ALP",
            ]),
        ),
        Some(InjuryPattern::Hepatocellular) => pathway(
            PathwayKind::Hepatocellular,
            "Hepatocellular Injury Pathway (R ≥ 5)",
            steps(&[
                "Viral hepatitis serologies: HBsAg, anti-HBc IgM, anti-HCV, anti-HAV IgM",
                "Acetaminophen level (if acute, ALT >1000)",
                "Alcohol history and AST/ALT ratio assessment",
                "Autoimmune markers: ANA, ASMA, IgG",
                "Iron studies: ferritin, transferrin saturation",
                "Ceruloplasmin (if age <40)",
                "RUQ ultrasound for hepatic steatosis, masses",
                "Medication and supplement review",
            ]),
        ),
        Some(InjuryPattern::Mixed) => pathway(
            PathwayKind::Mixed,
            "Mixed Pattern Pathway (R 2-5)",
            steps(&[
                "Complete viral hepatitis panel (A, B, C, E)",
                "Imaging: RUQ ultrasound, consider MRCP",
                "Autoimmune markers: ANA, ASMA, AMA, IgG, IgM",
                "Drug-induced liver injury assessment (RUCAM)",
                "Consider overlap syndromes (AIH-PBC, AIH-PSC)",
                "Liver biopsy may be needed for definitive diagnosis",
            ]),
        ),
        None => pathway(
            PathwayKind::FurtherEvaluation,
            "Further Evaluation Pathway",
            steps(&[
                "Repeat LFTs in 1-4 weeks if mild elevation and asymptomatic",
                "Review lifestyle factors: alcohol, weight, medications",
                "Consider non-invasive fibrosis assessment if persistent",
                "Hepatology referral if unexplained persistent abnormalities",
            ]),
        ),
    }
}

/// One row per supplied marker. Fold over ULN is rounded to one decimal.
pub fn build_severity_table(m: &Measurements, sex: Sex) -> Vec<SeverityRow> {
    [
        ("ALT", "ALT", alt_uln(sex)),
        ("AST", "AST", ast_uln(sex)),
        ("ALP", "ALP", ALP_ULN),
        ("Total Bilirubin", "Total_Bilirubin", TOTAL_BILIRUBIN_ULN),
        ("Direct Bilirubin", "Direct_Bilirubin", DIRECT_BILIRUBIN_ULN),
    ]
    .into_iter()
    .filter_map(|(parameter, key, uln)| {
        let value = m.number(key)?;
        let elevated = value > uln;
        Some(SeverityRow {
            parameter,
            value,
            uln,
            elevated,
            fold_uln: elevated.then(|| round_to(value / uln, 1)),
        })
    })
    .collect()
}

fn rec(title: &'static str, description: &str) -> Recommendation {
    Recommendation {
        title,
        description: description.to_string(),
    }
}

fn emergency_recommendations() -> Vec<Recommendation> {
    vec![
        rec(
            "Immediate Stabilization",
            "ABC protocol, IV access, fluid resuscitation. Do NOT delay treatment for diagnostics.",
        ),
        rec(
            "Urgent Diagnostics",
            "Blood cultures, CBC, CMP, coagulation profile, type & screen, acetaminophen level, toxicology screen. Bedside RUQ ultrasound.",
        ),
        rec(
            "Empiric Therapy",
            "Broad-spectrum antibiotics if sepsis suspected. N-acetylcysteine if acetaminophen toxicity possible (consider even if level unknown).",
        ),
        rec(
            "Specialist Consultation",
            "Urgent hepatology/GI consultation. Consider transfer to transplant center if acute liver failure.",
        ),
    ]
}

fn lft_recommendations(
    pattern: InjuryPattern,
    m: &Measurements,
    context: &ClinicalContext,
) -> Vec<Recommendation> {
    let mut recs = vec![rec(
        "Confirm Abnormalities",
        "Repeat LFTs in 1-2 weeks to confirm persistence if new finding and patient is asymptomatic.",
    )];
    match pattern {
        InjuryPattern::Hepatocellular => {
            recs.push(rec(
                "Hepatocellular Workup",
                "HBsAg, anti-HBc IgM, anti-HCV, anti-HAV IgM. ANA, ASMA, IgG (autoimmune). Ferritin, TIBC (hemochromatosis). Ceruloplasmin if age <40 (Wilson). Acetaminophen level if acute and ALT >1000.",
            ));
            recs.push(rec(
                "Lifestyle Assessment",
                "Detailed alcohol history (AUDIT questionnaire). Medication and supplement review. BMI, waist circumference, metabolic syndrome evaluation. Consider FIB-4 score.",
            ));
        }
        InjuryPattern::Cholestatic => {
            recs.push(rec(
                "Imaging Priority",
                "RUQ ultrasound with Doppler as first-line. If ducts dilated, MRCP or ERCP. If normal ducts, AMA for PBC, p-ANCA for PSC, consider MRCP.",
            ));
            recs.push(rec(
                "Confirm Hepatic Origin",
                "GGT or 5'-nucleotidase to confirm elevated ALP is of hepatic origin (vs. bone, placental, intestinal).",
            ));
        }
        InjuryPattern::Mixed => {
            recs.push(rec(
                "Comprehensive Evaluation",
                "Full viral panel (HAV, HBV, HCV, HEV). Autoimmune markers (ANA, ASMA, AMA, IgG, IgM). Iron studies, copper studies. Imaging (US + consider MRCP). RUCAM for drug assessment.",
            ));
        }
        InjuryPattern::IsolatedHyperbilirubinemia => {
            recs.push(rec(
                "Fractionate Bilirubin",
                "Distinguish conjugated vs. unconjugated. If predominantly unconjugated and <3 mg/dL with normal CBC, likely Gilbert syndrome (no treatment needed).",
            ));
            recs.push(rec(
                "Hemolysis Workup (if indicated)",
                "CBC, reticulocyte count, peripheral smear, LDH, haptoglobin, direct Coombs test.",
            ));
        }
    }
    if synthetic_failure(m) {
        recs.push(rec(
            "Synthetic Function Concern",
            "Impaired hepatic synthesis suggests advanced disease. Urgent hepatology referral. Evaluate for encephalopathy (asterixis, confusion). Consider MELD score calculation.",
        ));
    }
    let follow_up = if context.is_chronic() {
        "Continue current management. Monitor every 3-6 months. Consider non-invasive fibrosis assessment (FibroScan, FIB-4)."
    } else {
        "Re-evaluate in 4-6 weeks. If persistent, proceed with full workup per pathway. If resolved, likely transient insult (viral, drug, etc.)."
    };
    recs.push(rec("Follow-up Plan", follow_up));
    recs
}

pub fn educational_content(panel: Panel) -> String {
    let tables = panel.tables();
    let mut out = tables.overview.to_string();
    if !tables.learning_points.is_empty() {
        out.push_str("\n\nLearning points:");
        for (i, point) in tables.learning_points.iter().enumerate() {
            out.push_str(&format!("\n{}. {point}", i + 1));
        }
    }
    out
}

pub fn run_stage5(inputs: Stage5Inputs<'_>) -> Stage5Output {
    let Stage5Inputs {
        panel,
        measurements: m,
        sex,
        stage2,
        indices,
        context,
    } = inputs;

    let patterns = match panel {
        Panel::Cbc => cbc_patterns(m, stage2),
        Panel::Lft => lft_patterns(m, sex, stage2, indices),
        Panel::Kft => kft_patterns(m, stage2),
        Panel::Lipid => lipid_patterns(m),
        Panel::Sugar => sugar_patterns(m),
        Panel::Urine => urine_patterns(m),
        Panel::Tft => tft_patterns(m),
        Panel::Rheumatology => rheumatology_patterns(m),
        Panel::Oncology => oncology_patterns(m),
    };
    let pattern_summary = if patterns.is_empty() {
        no_pattern_message(panel).to_string()
    } else {
        patterns.join("\n\n")
    };

    let mut recommendations: Vec<Recommendation> = stage2
        .critical_values
        .iter()
        .map(|finding| Recommendation {
            title: "Critical Value: Verify and Notify",
            description: format!(
                "{} ({}): confirm with a repeat sample and notify the treating clinician immediately.",
                finding.parameter, finding.message
            ),
        })
        .collect();
    let mut pathway = None;
    let mut severity_table = Vec::new();
    if panel == Panel::Lft && !m.is_empty() {
        let pattern = active_injury_pattern(m, sex, stage2);
        let chosen = determine_pathway(context, pattern, m);
        if chosen.emergency {
            recommendations.extend(emergency_recommendations());
        } else if let Some(pattern) = pattern {
            recommendations.extend(lft_recommendations(pattern, m, context));
        }
        severity_table = build_severity_table(m, sex);
        pathway = Some(chosen);
    }

    Stage5Output {
        pattern_summary,
        recommendations,
        educational_content: educational_content(panel),
        pathway,
        severity_table,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_patterns.rs"]
mod tests;
