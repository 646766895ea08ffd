use crate::panels::Panel;

/// Maps a reported parameter name to the panel's canonical key.
///
/// Registered keys pass through unchanged. Otherwise the panel's alias table
/// is searched case-insensitively; names that match nothing are returned
/// trimmed but otherwise untouched and later classify as unknown.
pub fn canonical_name(panel: Panel, name: &str) -> &str {
    let trimmed = name.trim();
    if panel.tables().registry.contains(&trimmed) {
        return trimmed;
    }
    alias_target(panel, trimmed).unwrap_or(trimmed)
}

/// Exact spelling first, so `Tg` and `TG` can name different analytes.
pub(crate) fn alias_target(panel: Panel, name: &str) -> Option<&'static str> {
    find_alias(panel, name, true).or_else(|| find_alias(panel, name, false))
}

pub(crate) fn find_alias(panel: Panel, name: &str, exact: bool) -> Option<&'static str> {
    aliases(panel)
        .iter()
        .find(|(alias, _)| {
            if exact {
                *alias == name
            } else {
                alias.eq_ignore_ascii_case(name)
            }
        })
        .map(|(_, canonical)| *canonical)
}

fn aliases(panel: Panel) -> &'static [(&'static str, &'static str)] {
    match panel {
        Panel::Cbc => CBC_ALIASES,
        Panel::Lft => LFT_ALIASES,
        Panel::Kft => KFT_ALIASES,
        Panel::Lipid => LIPID_ALIASES,
        Panel::Sugar => SUGAR_ALIASES,
        Panel::Urine => URINE_ALIASES,
        Panel::Tft => TFT_ALIASES,
        Panel::Rheumatology => RHEUMATOLOGY_ALIASES,
        Panel::Oncology => ONCOLOGY_ALIASES,
    }
}

const CBC_ALIASES: &[(&str, &str)] = &[
    ("Hb", "Hemoglobin"),
    ("HGB", "Hemoglobin"),
    ("Haemoglobin", "Hemoglobin"),
    ("HCT", "Hematocrit"),
    ("PCV", "Hematocrit"),
    ("TLC", "WBC"),
    ("Total_WBC", "WBC"),
    ("PLT", "Platelets"),
    ("Platelet_Count", "Platelets"),
    ("RDW_CV", "RDW"),
    ("Retic", "Reticulocytes"),
    ("Neutrophil", "Neutrophils"),
    ("Lymphocyte", "Lymphocytes"),
    ("Monocyte", "Monocytes"),
    ("Eosinophil", "Eosinophils"),
    ("Basophil", "Basophils"),
];

const LFT_ALIASES: &[(&str, &str)] = &[
    ("SGPT", "ALT"),
    ("SGOT", "AST"),
    ("Alk_Phos", "ALP"),
    ("GGTP", "GGT"),
    ("T_Bil", "Total_Bilirubin"),
    ("TBIL", "Total_Bilirubin"),
    ("D_Bil", "Direct_Bilirubin"),
    ("DBIL", "Direct_Bilirubin"),
    ("I_Bil", "Indirect_Bilirubin"),
    ("TP", "Total_Protein"),
    ("ALB", "Albumin"),
    ("A/G_Ratio", "AG_Ratio"),
];

const KFT_ALIASES: &[(&str, &str)] = &[
    ("Cr", "Creatinine"),
    ("Creat", "Creatinine"),
    ("Blood_Urea_Nitrogen", "BUN"),
    ("Uric", "Uric_Acid"),
    ("GFR", "eGFR"),
    ("Na", "Sodium"),
    ("K", "Potassium"),
    ("Cl", "Chloride"),
    ("HCO3", "Bicarbonate"),
    ("CO2", "Bicarbonate"),
    ("Ca", "Calcium"),
    ("Phosphate", "Phosphorus"),
    ("PO4", "Phosphorus"),
    ("Mg", "Magnesium"),
];

const LIPID_ALIASES: &[(&str, &str)] = &[
    ("TC", "Total_Cholesterol"),
    ("Cholesterol", "Total_Cholesterol"),
    ("HDL_C", "HDL"),
    ("LDL_C", "LDL"),
    ("TG", "Triglycerides"),
    ("Non_HDL_C", "Non_HDL"),
    ("Lpa", "Lp_a"),
];

const SUGAR_ALIASES: &[(&str, &str)] = &[
    ("FBS", "Fasting_Glucose"),
    ("FBG", "Fasting_Glucose"),
    ("FPG", "Fasting_Glucose"),
    ("RBS", "Random_Glucose"),
    ("PPBS", "PP_Glucose"),
    ("A1c", "HbA1c"),
    ("HbA1c%", "HbA1c"),
    ("Fasting_Insulin", "Insulin"),
    ("HOMA-IR", "HOMA_IR"),
];

const URINE_ALIASES: &[(&str, &str)] = &[
    ("pH", "Urine_pH"),
    ("SG", "Specific_Gravity"),
    ("Pus_Cells", "Urine_WBC"),
    ("Nitrite", "Urine_Nitrite"),
    ("Leukocyte_Esterase", "Urine_Leukocyte_Esterase"),
    ("ACR", "Albumin_Creatinine_Ratio"),
    ("UACR", "Albumin_Creatinine_Ratio"),
    ("PCR", "Protein_Creatinine_Ratio"),
];

const TFT_ALIASES: &[(&str, &str)] = &[
    ("Free_T3", "FT3"),
    ("Free_T4", "FT4"),
    ("rT3", "Reverse_T3"),
    ("TPO_Ab", "Anti_TPO"),
    ("Anti_Tg", "Anti_Thyroglobulin"),
    ("TRAb", "TSH_Receptor_Ab"),
    ("Tg", "Thyroglobulin"),
];

const RHEUMATOLOGY_ALIASES: &[(&str, &str)] = &[
    ("Rheumatoid_Factor", "RF"),
    ("CCP", "Anti_CCP"),
    ("dsDNA", "Anti_dsDNA"),
    ("C3", "Complement_C3"),
    ("C4", "Complement_C4"),
    ("hsCRP", "hs_CRP"),
    ("HLA-B27", "HLA_B27"),
];

const ONCOLOGY_ALIASES: &[(&str, &str)] = &[
    ("LDH", "Onco_LDH"),
    ("Thyroglobulin", "Onco_Thyroglobulin"),
    ("PSA", "Total_PSA"),
    ("fPSA", "Free_PSA"),
    ("hCG", "Beta_hCG"),
    ("CA125", "CA_125"),
    ("CA19-9", "CA_19_9"),
    ("CA15-3", "CA_15_3"),
    ("CgA", "Chromogranin_A"),
    ("Ki67", "Ki_67"),
];
