use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::pipeline::Measurements;

pub const TC_HDL_RATIO: &str = "TC/HDL Ratio";
pub const NON_HDL: &str = "Non-HDL Cholesterol";
pub const FRIEDEWALD_LDL: &str = "Friedewald LDL";
pub const LDL_HDL_RATIO: &str = "LDL/HDL Ratio";
pub const PANCREATITIS_RISK: &str = "Pancreatitis Risk";

/// Friedewald is invalid from this triglyceride level up.
pub const FRIEDEWALD_TG_LIMIT: f64 = 400.0;
pub const PANCREATITIS_TG: f64 = 500.0;

pub fn compute(m: &Measurements, out: &mut IndexMap) {
    let tc = m.number("Total_Cholesterol");
    let hdl = m.number("HDL");
    let tg = m.number("Triglycerides");

    if let (Some(tc), Some(hdl)) = (tc, m.positive("HDL")) {
        let ratio = round_to(tc / hdl, 1);
        let interpretation = if ratio < 4.5 {
            format!("{ratio}: Optimal (<4.5)")
        } else {
            format!("{ratio}: Elevated (increased CV risk)")
        };
        out.insert(
            TC_HDL_RATIO.to_string(),
            CalculatedIndex::number(
                ratio,
                "Total Cholesterol / HDL",
                interpretation,
                "Optimal <4.5 for men, <4.0 for women",
            ),
        );
    }

    if let (Some(tc), Some(hdl)) = (tc, hdl) {
        let non_hdl = round_to(tc - hdl, 0);
        let interpretation = if non_hdl < 130.0 {
            format!("{non_hdl} mg/dL: Optimal (<130)")
        } else {
            format!("{non_hdl} mg/dL: Elevated (target is LDL goal + 30)")
        };
        out.insert(
            NON_HDL.to_string(),
            CalculatedIndex::number(
                non_hdl,
                "Total Cholesterol - HDL",
                interpretation,
                "Secondary target when triglycerides are raised",
            ),
        );
    }

    if let (Some(tc), Some(hdl), Some(tg)) = (tc, hdl, tg)
        && tg < FRIEDEWALD_TG_LIMIT
    {
        let ldl = round_to(tc - hdl - tg / 5.0, 0);
        out.insert(
            FRIEDEWALD_LDL.to_string(),
            CalculatedIndex::number(
                ldl,
                "TC - HDL - TG/5",
                format!("{ldl} mg/dL (calculated; valid if TG <400)"),
                "Not computed when triglycerides are 400 mg/dL or more",
            ),
        );
    }

    if let (Some(ldl), Some(hdl)) = (m.number("LDL"), m.positive("HDL")) {
        let ratio = round_to(ldl / hdl, 1);
        let interpretation = if ratio < 3.0 {
            format!("{ratio}: Optimal (<3.0)")
        } else {
            format!("{ratio}: Elevated (≥3.0)")
        };
        out.insert(
            LDL_HDL_RATIO.to_string(),
            CalculatedIndex::number(ratio, "LDL / HDL", interpretation, "Optimal <3.0"),
        );
    }

    if let Some(tg) = tg
        && tg >= PANCREATITIS_TG
    {
        out.insert(
            PANCREATITIS_RISK.to_string(),
            CalculatedIndex::text(
                "HIGH",
                "Triglycerides ≥500 mg/dL",
                format!("Triglycerides {tg} mg/dL: risk of acute pancreatitis"),
                "Lower triglycerides urgently before addressing LDL",
            ),
        );
    }
}
