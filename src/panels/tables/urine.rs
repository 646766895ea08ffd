use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::{Abnormal, High};
use crate::model::value::Sex::Default as Any;
use crate::panels::PanelTables;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Urine Routine & Microscopy provides non-invasive assessment of kidney and urinary tract. Dipstick screening plus microscopy for cellular elements, casts, and crystals.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "Urine_Color",
    "Urine_Appearance",
    "Urine_pH",
    "Specific_Gravity",
    "Urine_Protein",
    "Urine_Glucose",
    "Urine_Ketones",
    "Urine_Bilirubin",
    "Urine_Urobilinogen",
    "Urine_Blood",
    "Urine_Nitrite",
    "Urine_Leukocyte_Esterase",
    "Urine_RBC",
    "Urine_WBC",
    "Urine_Epithelial",
    "Urine_Casts",
    "Urine_Crystals",
    "Urine_Bacteria",
    "Urine_Yeast",
    "Protein_Creatinine_Ratio",
    "Albumin_Creatinine_Ratio",
    "Microalbumin",
];

const RANGES: &[RangeDef] = &[
    range("Urine_pH", Any, 4.5, 8.0, 4.0, 9.0, ""),
    range("Specific_Gravity", Any, 1.005, 1.030, 1.000, 1.050, ""),
    range("Urine_RBC", Any, 0.0, 2.0, 0.0, 100.0, "/hpf"),
    range("Urine_WBC", Any, 0.0, 5.0, 0.0, 200.0, "/hpf"),
    range("Urine_Epithelial", Any, 0.0, 5.0, 0.0, 100.0, "/hpf"),
    range("Protein_Creatinine_Ratio", Any, 0.0, 150.0, 0.0, 5000.0, "mg/g"),
    range("Albumin_Creatinine_Ratio", Any, 0.0, 30.0, 0.0, 5000.0, "mg/g"),
    range("Microalbumin", Any, 0.0, 30.0, 0.0, 500.0, "mg/L"),
];

const NEGATIVE: &[&str] = &["negative", "nil", "absent"];
const NONE_SEEN: &[&str] = &["none", "nil", "absent", "none seen"];

const QUALITATIVE: &[QualitativeDef] = &[
    QualitativeDef {
        name: "Urine_Color",
        normal_terms: &["pale yellow", "yellow", "straw", "amber"],
    },
    QualitativeDef {
        name: "Urine_Appearance",
        normal_terms: &["clear", "slightly hazy"],
    },
    QualitativeDef {
        name: "Urine_Protein",
        normal_terms: &["negative", "nil", "absent", "trace"],
    },
    QualitativeDef {
        name: "Urine_Glucose",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Ketones",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Bilirubin",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Urobilinogen",
        normal_terms: &["normal", "negative", "<1.0", "0.2"],
    },
    QualitativeDef {
        name: "Urine_Blood",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Nitrite",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Leukocyte_Esterase",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Urine_Casts",
        normal_terms: &["none", "nil", "absent", "none seen", "occasional hyaline"],
    },
    QualitativeDef {
        name: "Urine_Crystals",
        normal_terms: NONE_SEEN,
    },
    QualitativeDef {
        name: "Urine_Bacteria",
        normal_terms: &["none", "nil", "absent", "none seen", "few"],
    },
    QualitativeDef {
        name: "Urine_Yeast",
        normal_terms: NONE_SEEN,
    },
];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "Urine_Protein",
        Abnormal,
        "Proteinuria",
        &[
            dx(
                "Diabetic Nephropathy",
                "Most common cause of nephrotic-range proteinuria. Microalbuminuria is earliest sign. Screen annually in diabetics.",
            ),
            dx(
                "Glomerulonephritis",
                "Immune-mediated. IgA nephropathy most common worldwide. Check complement, ANA, ANCA, anti-GBM.",
            ),
            dx(
                "Orthostatic Proteinuria",
                "Benign condition in young adults. Protein present only when upright. Split urine collection for diagnosis.",
            ),
            dx(
                "Overflow Proteinuria",
                "Multiple myeloma (Bence Jones protein), myoglobinuria. Dipstick may be negative (detects albumin, not globulins).",
            ),
        ],
    ),
    bundle(
        "Urine_Blood",
        Abnormal,
        "Hematuria",
        &[
            dx(
                "UTI",
                "Most common cause. Dysuria, frequency, positive nitrite/leukocyte esterase. Culture for confirmation.",
            ),
            dx(
                "Nephrolithiasis",
                "Renal colic + hematuria. CT KUB for diagnosis. RBC without casts.",
            ),
            dx(
                "Glomerulonephritis",
                "RBC casts = glomerular origin. Dysmorphic RBCs. IgA nephropathy, post-infectious, lupus nephritis.",
            ),
            dx(
                "Bladder/Renal Cancer",
                "Painless gross hematuria in adults >40. Cystoscopy and imaging required. Risk factors: smoking, chemical exposure.",
            ),
            dx(
                "Contamination/Menstruation",
                "Always consider in females. Clean catch technique important.",
            ),
        ],
    ),
    bundle(
        "Urine_Glucose",
        Abnormal,
        "Glucosuria",
        &[
            dx(
                "Diabetes Mellitus",
                "Glucose spills into urine when blood glucose exceeds renal threshold (~180 mg/dL). Not a screening test for DM.",
            ),
            dx(
                "Renal Glycosuria",
                "Low renal glucose threshold. Benign. Normal blood glucose. Can occur in pregnancy, Fanconi syndrome.",
            ),
            dx(
                "SGLT2 Inhibitors",
                "Mechanism of action causes intentional glucosuria. Expected finding on medication.",
            ),
        ],
    ),
    bundle(
        "Urine_WBC",
        High,
        "Pyuria (Elevated Urine WBC)",
        &[
            dx(
                "Urinary Tract Infection",
                "WBC >5/hpf with positive nitrite and/or leukocyte esterase strongly suggests UTI. Culture >100,000 CFU/mL.",
            ),
            dx(
                "Sterile Pyuria",
                "WBCs without bacteria. Consider: TB, interstitial nephritis, nephrolithiasis, contamination, recently treated UTI, STI (chlamydia).",
            ),
            dx(
                "Interstitial Nephritis",
                "Drug-induced (NSAIDs, antibiotics, PPI). WBC casts, eosinophiluria. Urine eosinophil stain (Hansel).",
            ),
        ],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "Dipstick vs Microscopy: the dipstick is a screening tool with false positives and negatives. Microscopy provides definitive cellular analysis.",
    "UTI Diagnosis: nitrite plus leukocyte esterase plus pyuria (>5 WBC/hpf) strongly suggests UTI. Nitrite is negative with enterococci and pseudomonas. Culture >100,000 CFU/mL is the gold standard.",
    "RBC Casts = Glomerular Disease: casts and dysmorphic RBCs localise hematuria to the glomerulus.",
    "Microalbuminuria Screening: ACR 30-299 mg/g is the first sign of diabetic nephropathy. Screen all diabetics annually.",
    "Specific Gravity: low (<1.005) means dilute urine, high (>1.030) concentrated urine, and a fixed 1.010 suggests tubular damage.",
];
