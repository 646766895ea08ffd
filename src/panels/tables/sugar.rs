use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::{High, Low};
use crate::model::value::Sex::Default as Any;
use crate::panels::PanelTables;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Blood glucose assessment includes acute (fasting/random glucose) and chronic (HbA1c) measurements. HOMA-IR quantifies insulin resistance. C-peptide distinguishes endogenous from exogenous insulin.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "Fasting_Glucose",
    "Random_Glucose",
    "PP_Glucose",
    "HbA1c",
    "eAG",
    "Insulin",
    "C_Peptide",
    "HOMA_IR",
];

const RANGES: &[RangeDef] = &[
    range("Fasting_Glucose", Any, 70.0, 100.0, 40.0, 500.0, "mg/dL"),
    range("Random_Glucose", Any, 70.0, 140.0, 40.0, 600.0, "mg/dL"),
    range("PP_Glucose", Any, 70.0, 140.0, 40.0, 500.0, "mg/dL"),
    range("HbA1c", Any, 4.0, 5.6, 3.0, 15.0, "%"),
    range("eAG", Any, 70.0, 114.0, 50.0, 400.0, "mg/dL"),
    range("Insulin", Any, 2.6, 24.9, 0.0, 200.0, "µIU/mL"),
    range("C_Peptide", Any, 0.8, 3.1, 0.0, 20.0, "ng/mL"),
    range("HOMA_IR", Any, 0.0, 2.5, 0.0, 25.0, ""),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "Fasting_Glucose",
        High,
        "Elevated Fasting Glucose",
        &[
            dx(
                "Diabetes Mellitus",
                "FBG ≥126 mg/dL on two occasions = diabetes. Type 2 most common (>90%). Check HbA1c for confirmation.",
            ),
            dx(
                "Impaired Fasting Glucose (Prediabetes)",
                "FBG 100-125 mg/dL. 5-10% annual conversion to diabetes. Lifestyle intervention reduces risk by 58%.",
            ),
            dx(
                "Stress Hyperglycemia",
                "Acute illness, surgery, trauma, corticosteroids cause transient elevation. Repeat after recovery.",
            ),
            dx(
                "Cushing Syndrome",
                "Cortisol excess causes insulin resistance. Check 24-hour urine cortisol, overnight dexamethasone suppression.",
            ),
            dx(
                "Medications",
                "Corticosteroids, thiazides, atypical antipsychotics, tacrolimus, niacin.",
            ),
        ],
    ),
    bundle(
        "Fasting_Glucose",
        Low,
        "Hypoglycemia",
        &[
            dx(
                "Insulin/Sulfonylurea Excess",
                "Most common cause in diabetics. Check insulin, C-peptide, sulfonylurea screen. Whipple triad required.",
            ),
            dx(
                "Insulinoma",
                "Beta-cell tumor. Inappropriately high insulin and C-peptide with low glucose. 72-hour fast for diagnosis.",
            ),
            dx(
                "Adrenal Insufficiency",
                "Cortisol deficiency impairs gluconeogenesis. Check morning cortisol, ACTH stimulation test.",
            ),
            dx(
                "Liver Failure",
                "Impaired gluconeogenesis and glycogenolysis in severe hepatic disease.",
            ),
            dx(
                "Sepsis",
                "Increased glucose utilization and impaired gluconeogenesis.",
            ),
        ],
    ),
    bundle(
        "HbA1c",
        High,
        "Elevated HbA1c",
        &[
            dx(
                "Diabetes Mellitus",
                "HbA1c ≥6.5% = diabetes. Reflects average glucose over 2-3 months. Target <7% for most adults (ADA).",
            ),
            dx(
                "Prediabetes",
                "HbA1c 5.7-6.4%. Increased risk of diabetes. Lifestyle modification recommended.",
            ),
            dx(
                "Falsely Elevated",
                "Iron deficiency anemia, asplenia, uremia, hypertriglyceridemia can falsely elevate HbA1c. Consider fructosamine in these cases.",
            ),
        ],
    ),
    bundle(
        "HbA1c",
        Low,
        "Low HbA1c",
        &[
            dx(
                "Hemolytic Anemia",
                "Shortened RBC lifespan reduces glycation time, falsely lowering HbA1c.",
            ),
            dx(
                "Recent Transfusion",
                "Donor RBCs dilute glycated hemoglobin.",
            ),
            dx(
                "Hemoglobin Variants",
                "HbS, HbC, HbE can cause falsely low or high HbA1c depending on assay method.",
            ),
        ],
    ),
    bundle(
        "HOMA_IR",
        High,
        "Elevated HOMA-IR (Insulin Resistance)",
        &[
            dx(
                "Metabolic Syndrome",
                "Central obesity, dyslipidemia, hypertension, hyperglycemia. HOMA-IR >2.5 suggests insulin resistance.",
            ),
            dx(
                "PCOS",
                "Insulin resistance is a key feature of polycystic ovary syndrome.",
            ),
            dx(
                "Non-Alcoholic Fatty Liver Disease",
                "Strong association with insulin resistance.",
            ),
            dx(
                "Type 2 Diabetes (early)",
                "Insulin resistance precedes hyperglycemia by years.",
            ),
        ],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "Diagnostic Criteria for Diabetes: FBG ≥126 mg/dL, HbA1c ≥6.5%, 2-hr OGTT ≥200, or random glucose ≥200 with symptoms. Two abnormal tests are needed.",
    "HbA1c Limitations: falsely low in hemolysis, transfusion and hemoglobinopathies; falsely high in iron deficiency and splenectomy. Use fructosamine or CGM when unreliable.",
    "HOMA-IR: simple index of insulin resistance. Values >2.5 indicate resistance. Not standardized across labs.",
    "Hypoglycemia Workup: Whipple triad required. Check insulin, C-peptide, proinsulin and a sulfonylurea screen during the episode.",
    "C-Peptide: produced 1:1 with insulin. Low C-peptide with high insulin means exogenous insulin; high C-peptide with high insulin means endogenous secretion.",
];
