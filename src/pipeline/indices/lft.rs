use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::model::value::Sex;
use crate::panels::tables::lft::{ALP_ULN, TOTAL_BILIRUBIN_ULN, alt_uln, ast_uln};
use crate::pipeline::Measurements;

pub const R_VALUE: &str = "R Value";
pub const INJURY_PATTERN: &str = "Injury Pattern";
pub const AST_ALT_RATIO: &str = "AST/ALT Ratio";
pub const INJURY_SEVERITY: &str = "Injury Severity";
pub const CALCULATED_GLOBULIN: &str = "Calculated Globulin";
pub const AG_RATIO: &str = "A/G Ratio";
pub const CALCULATED_INDIRECT_BILIRUBIN: &str = "Calculated Indirect Bilirubin";

/// Enzyme ceiling used by the isolated-hyperbilirubinemia check.
const ENZYME_CEILING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryPattern {
    Hepatocellular,
    Cholestatic,
    Mixed,
    IsolatedHyperbilirubinemia,
}

impl InjuryPattern {
    pub fn label(self) -> &'static str {
        match self {
            InjuryPattern::Hepatocellular => "Hepatocellular",
            InjuryPattern::Cholestatic => "Cholestatic",
            InjuryPattern::Mixed => "Mixed",
            InjuryPattern::IsolatedHyperbilirubinemia => "Isolated Hyperbilirubinemia",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InjuryPattern::Hepatocellular => {
                "Predominant aminotransferase elevation (R ≥5): viral, toxic, ischemic or autoimmune hepatitis"
            }
            InjuryPattern::Cholestatic => {
                "Predominant ALP elevation (R ≤2): biliary obstruction, PBC, PSC or infiltrative disease"
            }
            InjuryPattern::Mixed => {
                "Combined hepatocellular and cholestatic features (R 2-5): drug-induced injury is common"
            }
            InjuryPattern::IsolatedHyperbilirubinemia => {
                "Raised bilirubin with normal enzymes: Gilbert syndrome, hemolysis or impaired conjugation"
            }
        }
    }

    pub fn from_r(r: f64) -> Self {
        if r >= 5.0 {
            InjuryPattern::Hepatocellular
        } else if r <= 2.0 {
            InjuryPattern::Cholestatic
        } else {
            InjuryPattern::Mixed
        }
    }
}

pub fn r_value(m: &Measurements, sex: Sex) -> Option<f64> {
    let alt = m.number("ALT")?;
    let alp = m.positive("ALP")?;
    Some(round_to((alt / alt_uln(sex)) / (alp / ALP_ULN), 2))
}

/// Isolated hyperbilirubinemia takes precedence over the R-based pattern.
pub fn injury_pattern(m: &Measurements, sex: Sex) -> Option<InjuryPattern> {
    if let (Some(alt), Some(ast), Some(alp), Some(tb)) = (
        m.number("ALT"),
        m.number("AST"),
        m.number("ALP"),
        m.number("Total_Bilirubin"),
    ) && alt <= ENZYME_CEILING
        && ast <= ENZYME_CEILING
        && alp <= ALP_ULN
        && tb > TOTAL_BILIRUBIN_ULN
    {
        return Some(InjuryPattern::IsolatedHyperbilirubinemia);
    }
    r_value(m, sex).map(InjuryPattern::from_r)
}

/// Highest fold-over-ULN among elevated enzymes; 1.0 when none is raised.
pub fn max_fold(m: &Measurements, sex: Sex) -> Option<f64> {
    let alt = m.number("ALT")?;
    let alp = m.number("ALP")?;
    let mut folds = vec![alt / alt_uln(sex), alp / ALP_ULN];
    if let Some(ast) = m.number("AST") {
        folds.push(ast / ast_uln(sex));
    }
    Some(folds.into_iter().filter(|f| *f > 1.0).fold(1.0, f64::max))
}

pub fn severity_label(fold: f64) -> &'static str {
    if fold < 3.0 {
        "Mild"
    } else if fold < 10.0 {
        "Moderate"
    } else {
        "Severe"
    }
}

pub fn compute(m: &Measurements, sex: Sex, out: &mut IndexMap) {
    if let Some(r) = r_value(m, sex) {
        let pattern = InjuryPattern::from_r(r);
        out.insert(
            R_VALUE.to_string(),
            CalculatedIndex::number(
                r,
                "(ALT / ALT ULN) / (ALP / ALP ULN)",
                format!("{r}: {}", pattern.label()),
                "R ≥5 hepatocellular; R ≤2 cholestatic; 2-5 mixed",
            ),
        );
    }

    if let Some(pattern) = injury_pattern(m, sex) {
        out.insert(
            INJURY_PATTERN.to_string(),
            CalculatedIndex::text(
                pattern.label(),
                "R ratio with isolated bilirubin check",
                pattern.description().to_string(),
                "ULNs: ALT 33 U/L (25 female), ALP 120 U/L",
            ),
        );
    }

    if let (Some(ast), Some(alt)) = (m.number("AST"), m.positive("ALT")) {
        let ratio = round_to(ast / alt, 2);
        let meaning = if ratio > 2.0 {
            "suggestive of alcoholic liver disease"
        } else if ratio > 1.0 {
            "possible cirrhosis or advanced fibrosis"
        } else {
            "typical of non-alcoholic or viral liver injury"
        };
        out.insert(
            AST_ALT_RATIO.to_string(),
            CalculatedIndex::number(
                ratio,
                "AST / ALT",
                format!("{ratio:.2}:1, {meaning}"),
                ">2 alcoholic pattern; >1 possible cirrhosis; ≤1 non-alcoholic",
            ),
        );
    }

    if let Some(fold) = max_fold(m, sex) {
        let fold = round_to(fold, 1);
        out.insert(
            INJURY_SEVERITY.to_string(),
            CalculatedIndex::number(
                fold,
                "max(ALT, AST, ALP fold over ULN)",
                format!("{}: {fold}x ULN", severity_label(fold)),
                "<3x mild; 3-10x moderate; ≥10x severe",
            ),
        );
    }

    if let (Some(tp), Some(alb)) = (m.number("Total_Protein"), m.number("Albumin")) {
        let globulin = round_to(tp - alb, 1);
        out.insert(
            CALCULATED_GLOBULIN.to_string(),
            CalculatedIndex::number(
                globulin,
                "Total Protein - Albumin",
                format!("{globulin} g/dL"),
                "Normal 2.0-3.5 g/dL",
            ),
        );
        if globulin > 0.0 {
            let ratio = round_to(alb / globulin, 2);
            let interpretation = if ratio < 1.0 {
                format!("{ratio}: Low (<1.0), consider chronic liver disease, chronic inflammation or myeloma")
            } else {
                format!("{ratio}: Normal (≥1.0)")
            };
            out.insert(
                AG_RATIO.to_string(),
                CalculatedIndex::number(
                    ratio,
                    "Albumin / (Total Protein - Albumin)",
                    interpretation,
                    "Normal 1.0-2.5",
                ),
            );
        }
    }

    if let (Some(total), Some(direct)) = (m.number("Total_Bilirubin"), m.number("Direct_Bilirubin")) {
        let indirect = round_to(total - direct, 2);
        out.insert(
            CALCULATED_INDIRECT_BILIRUBIN.to_string(),
            CalculatedIndex::number(
                indirect,
                "Total Bilirubin - Direct Bilirubin",
                format!("{indirect} mg/dL"),
                "Predominantly indirect rise suggests hemolysis or Gilbert syndrome",
            ),
        );
    }
}
