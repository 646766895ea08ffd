use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::{High, Low};
use crate::model::value::Sex::{Default as Any, Female, Male};
use crate::panels::PanelTables;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: LEARNING,
    overview: "The Lipid Profile assesses cardiovascular risk. LDL is the primary treatment target. Non-HDL cholesterol captures all atherogenic particles. Triglycerides >500 carry pancreatitis risk.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "Total_Cholesterol",
    "HDL",
    "LDL",
    "VLDL",
    "Triglycerides",
    "Non_HDL",
    "TC_HDL_Ratio",
    "LDL_HDL_Ratio",
    "ApoA1",
    "ApoB",
    "Lp_a",
];

const RANGES: &[RangeDef] = &[
    range("Total_Cholesterol", Any, 0.0, 200.0, 0.0, 500.0, "mg/dL"),
    range("HDL", Male, 40.0, 60.0, 10.0, 120.0, "mg/dL"),
    range("HDL", Female, 50.0, 60.0, 10.0, 120.0, "mg/dL"),
    range("HDL", Any, 40.0, 60.0, 10.0, 120.0, "mg/dL"),
    range("LDL", Any, 0.0, 100.0, 0.0, 500.0, "mg/dL"),
    range("VLDL", Any, 2.0, 30.0, 0.0, 100.0, "mg/dL"),
    range("Triglycerides", Any, 0.0, 150.0, 0.0, 1000.0, "mg/dL"),
    range("Non_HDL", Any, 0.0, 130.0, 0.0, 400.0, "mg/dL"),
    range("TC_HDL_Ratio", Any, 0.0, 4.5, 0.0, 15.0, ""),
    range("LDL_HDL_Ratio", Any, 0.0, 3.0, 0.0, 10.0, ""),
    range("ApoA1", Any, 120.0, 180.0, 50.0, 250.0, "mg/dL"),
    range("ApoB", Any, 40.0, 100.0, 20.0, 250.0, "mg/dL"),
    range("Lp_a", Any, 0.0, 75.0, 0.0, 500.0, "nmol/L"),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "Total_Cholesterol",
        High,
        "Hypercholesterolemia",
        &[
            dx(
                "Primary/Familial Hypercholesterolemia",
                "Genetic disorder of LDL receptor. FH heterozygous: TC 300-500. FH homozygous: TC >500. Tendon xanthomas, premature ASCVD.",
            ),
            dx(
                "Dietary/Lifestyle",
                "High saturated fat intake, sedentary lifestyle. Most common cause.",
            ),
            dx(
                "Hypothyroidism",
                "Reduced LDL receptor expression. Always check TSH in new hypercholesterolemia.",
            ),
            dx(
                "Nephrotic Syndrome",
                "Hepatic overproduction of lipoproteins in response to albumin loss.",
            ),
            dx(
                "Medications",
                "Corticosteroids, thiazides, retinoids, cyclosporine, protease inhibitors.",
            ),
        ],
    ),
    bundle(
        "Triglycerides",
        High,
        "Hypertriglyceridemia",
        &[
            dx(
                "Metabolic Syndrome/Insulin Resistance",
                "Most common cause. Associated with central obesity, low HDL, hyperglycemia, hypertension.",
            ),
            dx(
                "Diabetes Mellitus",
                "Insulin deficiency impairs lipoprotein lipase activity. TG >500 risk of pancreatitis.",
            ),
            dx(
                "Alcohol Use",
                "Alcohol stimulates hepatic VLDL production. Can cause massive hypertriglyceridemia.",
            ),
            dx(
                "Medications",
                "Estrogens, beta-blockers, thiazides, retinoids, atypical antipsychotics.",
            ),
            dx(
                "Familial Hypertriglyceridemia",
                "Genetic disorders of triglyceride metabolism. Type I (LPL deficiency): TG >1000.",
            ),
        ],
    ),
    bundle(
        "HDL",
        Low,
        "Low HDL-Cholesterol",
        &[
            dx(
                "Metabolic Syndrome",
                "Low HDL is a key component. Associated with insulin resistance, central obesity.",
            ),
            dx(
                "Smoking",
                "Reduces HDL by 5-10 mg/dL. Cessation partially reverses this.",
            ),
            dx(
                "Sedentary Lifestyle",
                "Regular aerobic exercise raises HDL by 5-10%.",
            ),
            dx("Medications", "Beta-blockers, anabolic steroids, progestins."),
        ],
    ),
    bundle(
        "LDL",
        High,
        "Elevated LDL-Cholesterol",
        &[
            dx(
                "Familial Hypercholesterolemia",
                "Genetic LDL receptor dysfunction. Dutch Lipid Clinic Network Score for diagnosis. Early statin therapy critical.",
            ),
            dx("Dietary", "High saturated fat and cholesterol intake."),
            dx(
                "Secondary Causes",
                "Hypothyroidism, nephrotic syndrome, obstructive liver disease, anorexia nervosa.",
            ),
        ],
    ),
    bundle(
        "Lp_a",
        High,
        "Elevated Lipoprotein(a)",
        &[dx(
            "Genetic (Primary)",
            "Lp(a) levels are >90% genetically determined. Independent ASCVD risk factor. >50 mg/dL (>125 nmol/L) = high risk. Not significantly modifiable by lifestyle. PCSK9 inhibitors reduce by ~25%.",
        )],
    ),
];

const LEARNING: &[(&str, &str)] = &[
    (
        "Total_Cholesterol",
        "Desirable <200, Borderline 200-239, High ≥240 mg/dL. Sum of HDL + LDL + VLDL.",
    ),
    (
        "LDL",
        "Primary target for therapy. Goals vary by risk: <70 very high risk, <100 high risk, <130 moderate, <160 low risk. Friedewald: LDL = TC - HDL - (TG/5) if TG<400.",
    ),
    (
        "HDL",
        "Protective factor. <40 (men) or <50 (women) is low. >60 is protective. Exercise, moderate alcohol, and niacin raise HDL.",
    ),
    (
        "Triglycerides",
        "Normal <150, Borderline 150-199, High 200-499, Very High ≥500 (pancreatitis risk). Fasting sample required for accuracy.",
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "LDL is the Primary Target: statin intensity follows 10-year ASCVD risk, though LDL goals are still used clinically.",
    "Non-HDL is Often Better than LDL: TC minus HDL captures all atherogenic particles including VLDL and IDL. It is the secondary target when TG is elevated.",
    "Friedewald Equation Limitations: LDL = TC - HDL - TG/5 is inaccurate when TG >400 or in non-fasting samples.",
    "Lp(a) is Genetically Determined: levels >50 mg/dL (>125 nmol/L) are an independent ASCVD risk factor. Screen once in lifetime.",
    "Triglycerides and Pancreatitis: TG ≥500 carries pancreatitis risk and needs prompt dietary fat restriction and fibrates. TG >1000 suggests LPL deficiency.",
];
