use crate::model::indices::{CalculatedIndex, IndexMap, round_to};
use crate::pipeline::Measurements;

pub const MENTZER: &str = "Mentzer Index";
pub const NLR: &str = "Neutrophil-Lymphocyte Ratio (NLR)";
pub const CALCULATED_ANC: &str = "Calculated ANC";
pub const CORRECTED_RETIC: &str = "Corrected Reticulocyte Count";

pub fn compute(m: &Measurements, out: &mut IndexMap) {
    if let (Some(mcv), Some(rbc)) = (m.number("MCV"), m.positive("RBC")) {
        let v = round_to(mcv / rbc, 1);
        let interpretation = if v < 13.0 {
            format!("{v}: suggests thalassemia trait (<13)")
        } else {
            format!("{v}: suggests iron deficiency (≥13)")
        };
        out.insert(
            MENTZER.to_string(),
            CalculatedIndex::number(
                v,
                "MCV / RBC",
                interpretation,
                "Only meaningful with microcytosis (MCV <80 fL)",
            ),
        );
    }

    if let (Some(neut), Some(lymph)) = (m.number("Neutrophils"), m.positive("Lymphocytes")) {
        let v = round_to(neut / lymph, 2);
        out.insert(
            NLR.to_string(),
            CalculatedIndex::number(
                v,
                "Neutrophils% / Lymphocytes%",
                nlr_band(v).to_string(),
                "<1 low; 1-3 normal; 3-9 mild to moderate; >9 severe (upper bounds inclusive)",
            ),
        );
    }

    if let (Some(wbc), Some(neut)) = (m.number("WBC"), m.number("Neutrophils")) {
        let v = round_to(wbc * neut / 100.0, 2);
        out.insert(
            CALCULATED_ANC.to_string(),
            CalculatedIndex::number(
                v,
                "WBC × Neutrophils% / 100",
                format!("{v} x10^9/L: {}", anc_band(v)),
                "<0.5 severe; 0.5-1.0 moderate; 1.0-1.5 mild neutropenia",
            ),
        );
    }

    if let (Some(retic), Some(hct)) = (m.number("Reticulocytes"), m.number("Hematocrit")) {
        let v = round_to(retic * hct / 45.0, 2);
        let interpretation = if v < 2.0 {
            format!("{v}%: hypoproliferative (inadequate marrow response)")
        } else {
            format!("{v}%: adequate marrow response")
        };
        out.insert(
            CORRECTED_RETIC.to_string(),
            CalculatedIndex::number(
                v,
                "Reticulocytes% × Hematocrit / 45",
                interpretation,
                "Corrects for the degree of anemia; ≥2% indicates regeneration",
            ),
        );
    }
}

pub fn nlr_band(v: f64) -> &'static str {
    if v < 1.0 {
        "Low (<1)"
    } else if v <= 3.0 {
        "Normal (1-3)"
    } else if v <= 9.0 {
        "Mild to moderate inflammation or stress (3-9)"
    } else {
        "Severe inflammation or stress (>9)"
    }
}

pub fn anc_band(v: f64) -> &'static str {
    if v < 0.5 {
        "Severe neutropenia"
    } else if v < 1.0 {
        "Moderate neutropenia"
    } else if v < 1.5 {
        "Mild neutropenia"
    } else {
        "Normal"
    }
}
