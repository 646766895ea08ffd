use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::High;
use crate::model::value::Sex::{Default as Any, Female, Male};
use crate::panels::PanelTables;

/// Upper limit used to express LDH as a multiple of normal for GCT staging.
pub const LDH_ULN: f64 = 280.0;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Tumor markers are primarily used for monitoring, not screening. Rising trends are more informative than single values. Always consider benign causes of elevation.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "AFP",
    "CEA",
    "Onco_LDH",
    "Beta2_Microglobulin",
    "CA_19_9",
    "CA_72_4",
    "CA_15_3",
    "CA_27_29",
    "CA_125",
    "HE4",
    "ROMA_Index",
    "Total_PSA",
    "Free_PSA",
    "PSA_Ratio",
    "Beta_hCG",
    "NSE",
    "CYFRA_21_1",
    "SCC",
    "ProGRP",
    "Calcitonin",
    "Onco_Thyroglobulin",
    "Chromogranin_A",
    "Ki_67",
];

const RANGES: &[RangeDef] = &[
    range("AFP", Any, 0.0, 10.0, 0.0, 50000.0, "ng/mL"),
    range("CEA", Any, 0.0, 3.0, 0.0, 1000.0, "ng/mL"),
    range("Onco_LDH", Any, 140.0, LDH_ULN, 50.0, 5000.0, "IU/L"),
    range("Beta2_Microglobulin", Any, 0.8, 2.4, 0.0, 30.0, "mg/L"),
    range("CA_19_9", Any, 0.0, 37.0, 0.0, 50000.0, "U/mL"),
    range("CA_72_4", Any, 0.0, 6.9, 0.0, 500.0, "U/mL"),
    range("CA_15_3", Any, 0.0, 30.0, 0.0, 500.0, "U/mL"),
    range("CA_27_29", Any, 0.0, 38.0, 0.0, 500.0, "U/mL"),
    range("CA_125", Any, 0.0, 35.0, 0.0, 5000.0, "U/mL"),
    range("HE4", Any, 0.0, 140.0, 0.0, 2000.0, "pmol/L"),
    range("ROMA_Index", Any, 0.0, 11.4, 0.0, 100.0, "%"),
    range("Total_PSA", Any, 0.0, 4.0, 0.0, 500.0, "ng/mL"),
    range("Free_PSA", Any, 0.0, 100.0, 0.0, 100.0, "ng/mL"),
    range("PSA_Ratio", Any, 25.0, 100.0, 0.0, 100.0, "%"),
    range("Beta_hCG", Male, 0.0, 2.0, 0.0, 500000.0, "mIU/mL"),
    range("Beta_hCG", Female, 0.0, 5.0, 0.0, 500000.0, "mIU/mL"),
    range("Beta_hCG", Any, 0.0, 5.0, 0.0, 500000.0, "mIU/mL"),
    range("NSE", Any, 0.0, 16.3, 0.0, 200.0, "ng/mL"),
    range("CYFRA_21_1", Any, 0.0, 3.3, 0.0, 200.0, "ng/mL"),
    range("SCC", Any, 0.0, 1.5, 0.0, 100.0, "ng/mL"),
    range("ProGRP", Any, 0.0, 68.0, 0.0, 5000.0, "pg/mL"),
    range("Calcitonin", Male, 0.0, 8.4, 0.0, 1000.0, "pg/mL"),
    range("Calcitonin", Female, 0.0, 5.0, 0.0, 1000.0, "pg/mL"),
    range("Calcitonin", Any, 0.0, 8.4, 0.0, 1000.0, "pg/mL"),
    range("Onco_Thyroglobulin", Any, 0.0, 55.0, 0.0, 500.0, "ng/mL"),
    range("Chromogranin_A", Any, 0.0, 100.0, 0.0, 1000.0, "ng/mL"),
    range("Ki_67", Any, 0.0, 10.0, 0.0, 100.0, "%"),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "AFP",
        High,
        "Elevated AFP",
        &[
            dx(
                "Hepatocellular Carcinoma",
                "AFP >400 ng/mL in cirrhotic patient is highly suggestive. Screening: AFP + US every 6 months in cirrhosis. Sensitivity ~60%.",
            ),
            dx(
                "Germ Cell Tumors",
                "Nonseminomatous germ cell tumors (yolk sac tumor). Also elevated in testicular teratoma. Part of tumor marker panel with beta-hCG and LDH.",
            ),
            dx(
                "Pregnancy",
                "AFP rises during normal pregnancy. Abnormal levels in pregnancy may indicate neural tube defects or chromosomal abnormalities.",
            ),
            dx(
                "Chronic Liver Disease",
                "Mild elevation (<100) can be seen in cirrhosis, chronic hepatitis without HCC.",
            ),
        ],
    ),
    bundle(
        "CEA",
        High,
        "Elevated CEA",
        &[
            dx(
                "Colorectal Cancer",
                "Primary use: monitoring treatment response and recurrence. Not for screening. Preop level >5 = worse prognosis. Rising CEA post-resection suggests recurrence.",
            ),
            dx(
                "Other GI Cancers",
                "Pancreatic, gastric, esophageal cancers can elevate CEA.",
            ),
            dx("Lung Cancer", "Especially adenocarcinoma. Non-specific."),
            dx(
                "Smoking",
                "Smokers have higher baseline CEA (up to 5-10 ng/mL). Always interpret in context.",
            ),
            dx(
                "Benign Conditions",
                "IBD, pancreatitis, hypothyroidism, liver disease can mildly elevate CEA.",
            ),
        ],
    ),
    bundle(
        "CA_125",
        High,
        "Elevated CA 125",
        &[
            dx(
                "Epithelial Ovarian Cancer",
                "Elevated in ~80% of epithelial ovarian cancers. Better for serous type. Use with HE4 (ROMA index) for risk assessment. Poor screening test due to low specificity.",
            ),
            dx(
                "Endometriosis",
                "Commonly elevated, especially during menstruation. Not useful for diagnosis.",
            ),
            dx(
                "Other Cancers",
                "Endometrial, fallopian tube, peritoneal, breast, lung, pancreatic.",
            ),
            dx(
                "Benign Conditions",
                "Pregnancy, PID, cirrhosis, heart failure, pleural/peritoneal effusions. Any peritoneal inflammation.",
            ),
        ],
    ),
    bundle(
        "Total_PSA",
        High,
        "Elevated PSA",
        &[
            dx(
                "Prostate Cancer",
                "PSA 4-10: ~25% chance of cancer. >10: ~50% chance. PSA velocity >0.75/year and low free/total ratio (<25%) increase suspicion. MRI fusion biopsy for diagnosis.",
            ),
            dx(
                "BPH",
                "Most common cause of PSA elevation. BPH contributes ~0.3 ng/mL per gram of tissue. Free/total ratio usually >25%.",
            ),
            dx(
                "Prostatitis",
                "Acute prostatitis can dramatically elevate PSA. Wait 6-8 weeks after treatment to recheck.",
            ),
            dx(
                "Recent Procedures",
                "DRE causes minimal rise. Prostate biopsy, TURP, catheterization can significantly elevate PSA. Wait 6 weeks.",
            ),
        ],
    ),
    bundle(
        "Beta_hCG",
        High,
        "Elevated Beta-hCG",
        &[
            dx(
                "Pregnancy",
                "Always the first consideration in women of reproductive age. Doubles every 48 hours in early normal pregnancy.",
            ),
            dx(
                "Germ Cell Tumors",
                "Seminoma, choriocarcinoma, embryonal carcinoma. Testicular or extragonadal. Part of GCT staging with AFP and LDH.",
            ),
            dx(
                "Gestational Trophoblastic Disease",
                "Hydatidiform mole, choriocarcinoma. Very high levels (>100,000). US shows snowstorm pattern.",
            ),
        ],
    ),
    bundle(
        "Calcitonin",
        High,
        "Elevated Calcitonin",
        &[
            dx(
                "Medullary Thyroid Cancer (MTC)",
                "Calcitonin is the primary tumor marker. >100 pg/mL highly suspicious for MTC. Screen in MEN2 families. Pentagastrin stimulation test for borderline values.",
            ),
            dx(
                "C-Cell Hyperplasia",
                "Precursor to MTC in MEN2. Mildly elevated calcitonin.",
            ),
            dx(
                "Other Cancers",
                "Small cell lung cancer, carcinoid, VIPoma can produce calcitonin.",
            ),
        ],
    ),
    bundle(
        "Ki_67",
        High,
        "Elevated Ki-67 Proliferation Index",
        &[dx(
            "Aggressive Malignancy",
            "Ki-67 reflects proliferative activity. Breast: <14% low, >30% high. Neuroendocrine tumors: G1 <3%, G2 3-20%, G3 >20%. Lymphoma grading. Higher Ki-67 = more aggressive but often more chemo-responsive.",
        )],
    ),
    bundle(
        "Chromogranin_A",
        High,
        "Elevated Chromogranin A",
        &[
            dx(
                "Neuroendocrine Tumors",
                "Most sensitive marker for NETs. Correlates with tumor burden. Also elevated in carcinoid, pheochromocytoma, medullary thyroid cancer.",
            ),
            dx(
                "PPI Use",
                "Proton pump inhibitors cause gastric ECL cell hyperplasia, raising CgA. MUST stop PPI 2 weeks before testing. Very common false positive.",
            ),
            dx(
                "Renal Impairment",
                "Reduced clearance causes elevated levels. Interpret with caution in CKD.",
            ),
        ],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "Tumor Markers Are NOT Screening Tests, with few exceptions: PSA (controversial), AFP in cirrhosis surveillance, calcitonin in MEN2 families.",
    "Primary Use is Monitoring: a rising trend is more informative than a single value.",
    "False Positives Are Common: CEA in smokers, CA 125 in menstruation or endometriosis, PSA in BPH or prostatitis, Chromogranin A with PPI use.",
    "PSA Interpretation: PSA 4-10 is the gray zone. Free/total ratio, PSA density, velocity and MRI improve specificity.",
    "Ki-67 is Context-Dependent: in breast cancer <14% is luminal A and >30% aggressive; in NETs it defines the grade.",
    "Two-Marker Strategy: AFP + US for HCC, CA 125 + HE4 (ROMA) for ovarian cancer, AFP + hCG for germ cell tumors.",
];
