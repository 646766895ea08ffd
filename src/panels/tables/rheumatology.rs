use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::{Abnormal, High, Low};
use crate::model::value::Sex::Default as Any;
use crate::panels::PanelTables;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Rheumatology markers help identify autoimmune diseases. Sensitivity vs specificity trade-offs are critical: ANA is sensitive for SLE; Anti-CCP is specific for RA.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "ANA",
    "ANA_Pattern",
    "RF",
    "Anti_CCP",
    "Anti_dsDNA",
    "Anti_Smith",
    "Complement_C3",
    "Complement_C4",
    "Anti_Phospholipid_IgG",
    "Anti_Phospholipid_IgM",
    "Anti_Cardiolipin_IgG",
    "Anti_Cardiolipin_IgM",
    "Beta2_Glycoprotein",
    "Lupus_Anticoagulant",
    "HLA_B27",
    "CRP",
    "hs_CRP",
    "ASO",
];

const RANGES: &[RangeDef] = &[
    range("RF", Any, 0.0, 14.0, 0.0, 1000.0, "IU/mL"),
    range("Anti_CCP", Any, 0.0, 20.0, 0.0, 500.0, "U/mL"),
    range("Anti_dsDNA", Any, 0.0, 25.0, 0.0, 1000.0, "IU/mL"),
    range("Anti_Smith", Any, 0.0, 20.0, 0.0, 500.0, "U/mL"),
    range("Complement_C3", Any, 90.0, 180.0, 30.0, 300.0, "mg/dL"),
    range("Complement_C4", Any, 10.0, 40.0, 2.0, 80.0, "mg/dL"),
    range("Anti_Phospholipid_IgG", Any, 0.0, 20.0, 0.0, 200.0, "GPL"),
    range("Anti_Phospholipid_IgM", Any, 0.0, 20.0, 0.0, 200.0, "MPL"),
    range("Anti_Cardiolipin_IgG", Any, 0.0, 20.0, 0.0, 200.0, "GPL"),
    range("Anti_Cardiolipin_IgM", Any, 0.0, 20.0, 0.0, 200.0, "MPL"),
    range("Beta2_Glycoprotein", Any, 0.0, 20.0, 0.0, 200.0, "U/mL"),
    range("CRP", Any, 0.0, 5.0, 0.0, 500.0, "mg/L"),
    range("hs_CRP", Any, 0.0, 1.0, 0.0, 50.0, "mg/L"),
    range("ASO", Any, 0.0, 200.0, 0.0, 1000.0, "IU/mL"),
];

const NEGATIVE: &[&str] = &["negative", "not detected", "non-reactive", "absent", "nil"];

const QUALITATIVE: &[QualitativeDef] = &[
    QualitativeDef {
        name: "ANA",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "ANA_Pattern",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "Lupus_Anticoagulant",
        normal_terms: NEGATIVE,
    },
    QualitativeDef {
        name: "HLA_B27",
        normal_terms: NEGATIVE,
    },
];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "ANA",
        Abnormal,
        "Positive ANA",
        &[
            dx(
                "Systemic Lupus Erythematosus",
                "ANA is positive in ~95% of SLE. Confirm with anti-dsDNA, anti-Smith and complement levels.",
            ),
            dx(
                "Drug-Induced Lupus",
                "Homogeneous pattern with anti-histone antibodies. Procainamide, hydralazine, isoniazid.",
            ),
            dx(
                "Other Connective Tissue Disease",
                "Speckled pattern: mixed CTD, Sjogren. Nucleolar: scleroderma. Centromere: limited scleroderma.",
            ),
            dx(
                "Healthy Individuals",
                "Low-titer ANA occurs in 5-15% of healthy people, more often in women and the elderly. Interpret with titer and clinical features.",
            ),
        ],
    ),
    bundle(
        "RF",
        High,
        "Elevated Rheumatoid Factor",
        &[
            dx(
                "Rheumatoid Arthritis",
                "RF positive in 70-80% of RA. Higher titers correlate with more severe disease. Seropositive RA has worse prognosis.",
            ),
            dx(
                "Sjogren Syndrome",
                "RF positive in >90%. Dry eyes, dry mouth. Check anti-SSA/SSB.",
            ),
            dx(
                "Other Autoimmune",
                "SLE, scleroderma, mixed connective tissue disease. RF is not specific.",
            ),
            dx(
                "Infections",
                "Hepatitis C (up to 70% RF+), endocarditis, TB, syphilis. Always check HCV.",
            ),
            dx(
                "Elderly/False Positive",
                "Up to 5-10% of healthy elderly are RF positive. Increases with age.",
            ),
        ],
    ),
    bundle(
        "Anti_CCP",
        High,
        "Elevated Anti-CCP",
        &[
            dx(
                "Rheumatoid Arthritis",
                "More specific than RF (95% vs 80%). Positive years before symptom onset. Predicts erosive disease. RF+/CCP+ = high probability RA.",
            ),
            dx(
                "Other Autoimmune",
                "Occasionally positive in psoriatic arthritis, SLE, Sjogren. Very rarely false positive.",
            ),
        ],
    ),
    bundle(
        "Anti_dsDNA",
        High,
        "Elevated Anti-dsDNA",
        &[
            dx(
                "Systemic Lupus Erythematosus",
                "Highly specific for SLE (>95%). Titers correlate with disease activity, especially lupus nephritis. Monitor serially.",
            ),
            dx(
                "Drug-Induced Lupus",
                "Usually anti-histone antibody positive, not anti-dsDNA. Procainamide, hydralazine, isoniazid.",
            ),
        ],
    ),
    bundle(
        "Complement_C3",
        Low,
        "Low Complement C3",
        &[
            dx(
                "Active SLE",
                "Complement consumption during active flares. Low C3 and C4. Monitor with anti-dsDNA for disease activity.",
            ),
            dx(
                "Post-Infectious GN",
                "Low C3 with normal C4. Transient. Post-streptococcal most common.",
            ),
            dx(
                "Membranoproliferative GN",
                "Persistent low C3. C3 nephritic factor may be present.",
            ),
            dx(
                "Genetic Deficiency",
                "Rare hereditary complement deficiencies predispose to infections and SLE.",
            ),
        ],
    ),
    bundle(
        "CRP",
        High,
        "Elevated CRP",
        &[
            dx(
                "Infection",
                "CRP rises within 6-8 hours of infection, peaks at 48 hours. Bacterial > viral. CRP >100 mg/L strongly suggests bacterial infection.",
            ),
            dx(
                "Autoimmune Inflammation",
                "RA, vasculitis, PMR/GCA, IBD. Notably, SLE often has NORMAL CRP (unless serositis or infection).",
            ),
            dx(
                "Cardiovascular Risk",
                "hs-CRP: <1.0 low risk, 1.0-3.0 average, >3.0 high risk. >10 = acute process (not for CV risk assessment).",
            ),
            dx(
                "Malignancy",
                "Tumor-associated inflammation. Lymphoma, renal cell carcinoma.",
            ),
        ],
    ),
    bundle(
        "ASO",
        High,
        "Elevated ASO Titer",
        &[
            dx(
                "Recent Streptococcal Infection",
                "Rises 1-3 weeks after pharyngitis, peaks at 3-5 weeks. Used to diagnose rheumatic fever (Jones criteria) and post-streptococcal GN.",
            ),
            dx(
                "Rheumatic Fever",
                "Elevated ASO is one of the Jones criteria supporting evidence. Major criteria: carditis, arthritis, chorea, erythema marginatum, subcutaneous nodules.",
            ),
        ],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "ANA Interpretation: a screening test, positive in 95% of SLE but also in 5-15% of healthy individuals. Titer and pattern matter.",
    "RF vs Anti-CCP: RF is sensitive but not specific. Anti-CCP is >95% specific for RA and predicts erosive disease.",
    "Complement in SLE: low C3/C4 means active disease with complement consumption. Normal complement does not exclude SLE.",
    "CRP in Rheumatic Disease: elevated in RA, PMR/GCA and vasculitis but often normal in active SLE, which helps separate a flare from infection.",
    "APS Criteria: one clinical and one laboratory criterion, with the laboratory test positive on two occasions 12 weeks apart.",
];
