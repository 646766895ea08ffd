use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::pipeline::Measurements;

pub const CALCULATED_EAG: &str = "Calculated eAG";
pub const CALCULATED_HOMA_IR: &str = "Calculated HOMA-IR";

pub fn eag(hba1c: f64) -> f64 {
    round_to(28.7 * hba1c - 46.7, 0)
}

pub fn compute(m: &Measurements, out: &mut IndexMap) {
    if let Some(a1c) = m.number("HbA1c") {
        let v = eag(a1c);
        out.insert(
            CALCULATED_EAG.to_string(),
            CalculatedIndex::number(
                v,
                "eAG = 28.7 × HbA1c - 46.7",
                format!("{v} mg/dL average glucose over 2-3 months"),
                "ADAG regression",
            ),
        );
    }

    if let (Some(fg), Some(insulin)) = (m.number("Fasting_Glucose"), m.number("Insulin")) {
        let v = round_to(fg * insulin / 405.0, 2);
        let interpretation = if v < 2.5 {
            format!("{v}: Normal (<2.5)")
        } else {
            format!("{v}: Insulin resistant (≥2.5)")
        };
        out.insert(
            CALCULATED_HOMA_IR.to_string(),
            CalculatedIndex::number(
                v,
                "(Fasting Glucose × Fasting Insulin) / 405",
                interpretation,
                "Glucose in mg/dL, insulin in µIU/mL",
            ),
        );
    }
}
