use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::panels::tables::oncology::LDH_ULN;
use crate::pipeline::Measurements;

pub const PSA_RATIO: &str = "Free/Total PSA Ratio";
pub const GCT_RISK: &str = "GCT Risk Classification";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GctRisk {
    Good,
    Intermediate,
    Poor,
}

impl GctRisk {
    pub fn label(self) -> &'static str {
        match self {
            GctRisk::Good => "Good prognosis",
            GctRisk::Intermediate => "Intermediate prognosis",
            GctRisk::Poor => "Poor prognosis",
        }
    }

    /// IGCCCG marker cut-offs; AFP ng/mL, hCG mIU/mL, LDH as fold of ULN.
    pub fn classify(afp: f64, hcg: f64, ldh_fold: f64) -> Self {
        if afp > 10_000.0 || hcg > 50_000.0 || ldh_fold > 10.0 {
            GctRisk::Poor
        } else if afp < 1_000.0 && hcg < 5_000.0 && ldh_fold < 1.5 {
            GctRisk::Good
        } else {
            GctRisk::Intermediate
        }
    }
}

pub fn psa_band(pct: f64) -> &'static str {
    if pct < 10.0 {
        "High risk of prostate cancer (<10%)"
    } else if pct <= 25.0 {
        "Intermediate risk (10-25%)"
    } else {
        "Likely benign (>25%)"
    }
}

pub fn compute(m: &Measurements, out: &mut IndexMap) {
    if let (Some(free), Some(total)) = (m.number("Free_PSA"), m.positive("Total_PSA")) {
        let pct = round_to(free / total * 100.0, 1);
        out.insert(
            PSA_RATIO.to_string(),
            CalculatedIndex::number(
                pct,
                "Free PSA / Total PSA × 100",
                format!("{pct}%: {}", psa_band(pct)),
                "Most useful when total PSA is 4-10 ng/mL",
            ),
        );
    }

    if let (Some(afp), Some(hcg), Some(ldh)) = (
        m.number("AFP"),
        m.number("Beta_hCG"),
        m.number("Onco_LDH"),
    ) {
        let fold = ldh / LDH_ULN;
        let risk = GctRisk::classify(afp, hcg, fold);
        out.insert(
            GCT_RISK.to_string(),
            CalculatedIndex::text(
                risk.label(),
                "IGCCCG markers (AFP, hCG, LDH)",
                format!(
                    "{}: AFP {afp} ng/mL, hCG {hcg} mIU/mL, LDH {:.1}x ULN",
                    risk.label(),
                    fold
                ),
                "Applies to non-seminomatous germ cell tumours",
            ),
        );
    }
}
