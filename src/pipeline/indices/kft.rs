use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::pipeline::Measurements;

pub const BUN_CREATININE_RATIO: &str = "BUN/Creatinine Ratio";
pub const ANION_GAP: &str = "Anion Gap";
pub const CORRECTED_CALCIUM: &str = "Corrected Calcium";
pub const CKD_STAGE: &str = "CKD Stage";
pub const CALCULATED_BUN: &str = "Calculated BUN";

/// Urea (mg/dL) per unit of BUN (mg/dL).
pub const UREA_TO_BUN: f64 = 2.14;

const MUDPILES: &str = "Elevated: consider MUDPILES (Methanol, Uremia, DKA, Propylene glycol, \
                        INH/Iron, Lactic acidosis, Ethylene glycol, Salicylates)";

/// Lower-inclusive eGFR breakpoints, best stage first.
const CKD_STAGES: &[(f64, &str, &str)] = &[
    (90.0, "G1", "G1 (Normal or high)"),
    (60.0, "G2", "G2 (Mildly decreased)"),
    (45.0, "G3a", "G3a (Mild-moderately decreased)"),
    (30.0, "G3b", "G3b (Moderate-severely decreased)"),
    (15.0, "G4", "G4 (Severely decreased)"),
];

pub fn ckd_stage(egfr: f64) -> (&'static str, &'static str) {
    CKD_STAGES
        .iter()
        .find(|(floor, _, _)| egfr >= *floor)
        .map(|(_, code, label)| (*code, *label))
        .unwrap_or(("G5", "G5 (Kidney failure)"))
}

pub fn bun_creatinine_band(ratio: f64) -> &'static str {
    if ratio > 20.0 {
        "Prerenal (dehydration, CHF, GI bleed)"
    } else if ratio >= 10.0 {
        "Normal"
    } else {
        "Intrinsic renal disease, liver disease, or malnutrition"
    }
}

pub fn compute(m: &Measurements, out: &mut IndexMap) {
    if let (Some(bun), Some(cr)) = (m.number("BUN"), m.positive("Creatinine")) {
        let ratio = round_to(bun / cr, 1);
        out.insert(
            BUN_CREATININE_RATIO.to_string(),
            CalculatedIndex::number(
                ratio,
                "BUN / Creatinine",
                bun_creatinine_band(ratio).to_string(),
                ">20 prerenal; 10-20 normal; <10 intrinsic/hepatic",
            ),
        );
    }

    if let (Some(na), Some(cl), Some(hco3)) = (
        m.number("Sodium"),
        m.number("Chloride"),
        m.number("Bicarbonate"),
    ) {
        let gap = round_to(na - (cl + hco3), 1);
        let interpretation = if gap > 12.0 {
            MUDPILES.to_string()
        } else if gap >= 8.0 {
            "Normal".to_string()
        } else {
            "Low: consider hypoalbuminemia or multiple myeloma".to_string()
        };
        out.insert(
            ANION_GAP.to_string(),
            CalculatedIndex::number(
                gap,
                "Na - (Cl + HCO3)",
                interpretation,
                "Normal: 8-12 mEq/L (with K+: 10-20)",
            ),
        );
    }

    if let (Some(ca), Some(alb)) = (m.number("Calcium"), m.positive("Albumin"))
        && alb < 4.0
    {
        let corrected = round_to(ca + 0.8 * (4.0 - alb), 1);
        out.insert(
            CORRECTED_CALCIUM.to_string(),
            CalculatedIndex::number(
                corrected,
                "Ca + 0.8 × (4.0 - Albumin)",
                format!("{corrected} mg/dL (corrected for albumin {alb})"),
                "Only applied when albumin is below 4.0 g/dL",
            ),
        );
    }

    if let Some(egfr) = m.number("eGFR") {
        let (code, label) = ckd_stage(egfr);
        out.insert(
            CKD_STAGE.to_string(),
            CalculatedIndex::text(
                code,
                "KDIGO eGFR category",
                label.to_string(),
                "CKD defined as eGFR <60 for ≥3 months",
            ),
        );
    }

    if m.get("BUN").is_none()
        && let Some(urea) = m.number("Urea")
    {
        let bun = round_to(urea / UREA_TO_BUN, 1);
        out.insert(
            CALCULATED_BUN.to_string(),
            CalculatedIndex::number(
                bun,
                "Urea / 2.14",
                format!("{bun} mg/dL"),
                "Derived only when BUN was not reported",
            ),
        );
    }
}
