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
    overview: "Kidney Function Tests assess glomerular filtration (creatinine, eGFR), tubular function (electrolytes), and overall renal homeostasis. BUN/Creatinine ratio helps differentiate prerenal from intrinsic disease.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "Creatinine",
    "BUN",
    "Urea",
    "Uric_Acid",
    "eGFR",
    "Cystatin_C",
    "Sodium",
    "Potassium",
    "Chloride",
    "Bicarbonate",
    "Calcium",
    "Phosphorus",
    "Magnesium",
];

const RANGES: &[RangeDef] = &[
    range("Creatinine", Male, 0.7, 1.3, 0.3, 10.0, "mg/dL"),
    range("Creatinine", Female, 0.6, 1.1, 0.3, 10.0, "mg/dL"),
    range("Creatinine", Any, 0.6, 1.3, 0.3, 10.0, "mg/dL"),
    range("BUN", Any, 7.0, 20.0, 2.0, 100.0, "mg/dL"),
    range("Urea", Any, 15.0, 45.0, 5.0, 200.0, "mg/dL"),
    range("Uric_Acid", Male, 3.5, 7.2, 1.0, 15.0, "mg/dL"),
    range("Uric_Acid", Female, 2.5, 6.0, 1.0, 15.0, "mg/dL"),
    range("Uric_Acid", Any, 2.5, 7.2, 1.0, 15.0, "mg/dL"),
    range("eGFR", Any, 90.0, 120.0, 15.0, 200.0, "mL/min/1.73m²"),
    range("Cystatin_C", Any, 0.55, 1.15, 0.2, 5.0, "mg/L"),
    range("Sodium", Any, 136.0, 145.0, 120.0, 160.0, "mEq/L"),
    range("Potassium", Any, 3.5, 5.0, 2.5, 6.5, "mEq/L"),
    range("Chloride", Any, 98.0, 106.0, 80.0, 120.0, "mEq/L"),
    range("Bicarbonate", Any, 22.0, 29.0, 10.0, 40.0, "mEq/L"),
    range("Calcium", Any, 8.5, 10.5, 6.0, 14.0, "mg/dL"),
    range("Phosphorus", Any, 2.5, 4.5, 1.0, 8.0, "mg/dL"),
    range("Magnesium", Any, 1.7, 2.2, 1.0, 4.0, "mg/dL"),
    // Needed by corrected calcium; classified here so it is not reported unknown.
    range("Albumin", Any, 3.3, 5.5, 1.0, 7.0, "g/dL"),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "Creatinine",
        High,
        "Elevated Creatinine",
        &[
            dx(
                "Acute Kidney Injury (AKI)",
                "Rapid rise in creatinine over hours-days. Prerenal (dehydration, heart failure), intrinsic (ATN, glomerulonephritis), or postrenal (obstruction). Check urine output, fractional excretion of sodium.",
            ),
            dx(
                "Chronic Kidney Disease (CKD)",
                "Gradual elevation with reduced eGFR. Stages 1-5 based on GFR. Most common causes: diabetes, hypertension. Check urine albumin/creatinine ratio, renal ultrasound.",
            ),
            dx(
                "Dehydration/Prerenal",
                "BUN/Creatinine ratio >20:1 suggests prerenal etiology. Responds to IV fluids.",
            ),
            dx(
                "Medications",
                "NSAIDs, ACE inhibitors, ARBs, aminoglycosides, contrast dye can elevate creatinine. Some drugs (trimethoprim, cimetidine) inhibit tubular secretion of creatinine without true GFR reduction.",
            ),
            dx(
                "Rhabdomyolysis",
                "Massive muscle breakdown releases myoglobin. Check CK (markedly elevated), urine myoglobin. Dark urine. Risk of AKI.",
            ),
        ],
    ),
    bundle(
        "BUN",
        High,
        "Elevated BUN",
        &[
            dx(
                "Prerenal Azotemia",
                "BUN rises disproportionately to creatinine (ratio >20:1). Dehydration, CHF, GI bleeding (protein load).",
            ),
            dx(
                "GI Bleeding",
                "Blood in GI tract is digested as protein, increasing BUN. BUN/Cr ratio often >30:1.",
            ),
            dx(
                "High Protein Diet/Catabolism",
                "Increased protein intake, burns, sepsis, corticosteroids increase urea production.",
            ),
            dx(
                "Renal Failure",
                "Both BUN and creatinine rise proportionally in intrinsic renal disease.",
            ),
        ],
    ),
    bundle(
        "Sodium",
        Low,
        "Hyponatremia (<136 mEq/L)",
        &[
            dx(
                "SIADH",
                "Euvolemic hyponatremia. Common causes: CNS disease, pulmonary disease, medications (SSRIs, carbamazepine). Check urine osmolality (>100), urine sodium (>40).",
            ),
            dx(
                "Heart Failure/Cirrhosis",
                "Hypervolemic hyponatremia. Dilutional due to fluid retention despite total body sodium excess.",
            ),
            dx(
                "Diuretic Use",
                "Thiazides are the most common medication cause. Hypovolemic hyponatremia.",
            ),
            dx(
                "Hypothyroidism/Adrenal Insufficiency",
                "Endocrine causes. Check TSH, morning cortisol.",
            ),
            dx(
                "Psychogenic Polydipsia",
                "Excessive water intake overwhelming renal diluting capacity.",
            ),
        ],
    ),
    bundle(
        "Sodium",
        High,
        "Hypernatremia (>145 mEq/L)",
        &[
            dx(
                "Dehydration/Water Loss",
                "Most common cause. Inadequate water intake, insensible losses, diarrhea. Free water deficit calculation needed.",
            ),
            dx(
                "Diabetes Insipidus",
                "Central (lack of ADH) or nephrogenic (resistance to ADH). Large volumes of dilute urine. Water deprivation test for diagnosis.",
            ),
            dx(
                "Osmotic Diuresis",
                "Hyperglycemia, mannitol, urea cause water loss exceeding sodium loss.",
            ),
        ],
    ),
    bundle(
        "Potassium",
        Low,
        "Hypokalemia (<3.5 mEq/L)",
        &[
            dx(
                "GI Losses",
                "Diarrhea, vomiting, NG suction. Check urine potassium to differentiate renal vs extrarenal losses.",
            ),
            dx(
                "Diuretic Use",
                "Loop and thiazide diuretics cause renal potassium wasting. Check urine K >20 mEq/L.",
            ),
            dx(
                "Renal Tubular Acidosis",
                "Types I and II cause hypokalemia. Check arterial blood gas, urine pH.",
            ),
            dx(
                "Hyperaldosteronism",
                "Primary (Conn syndrome) or secondary. Hypertension + hypokalemia + metabolic alkalosis. Check aldosterone/renin ratio.",
            ),
        ],
    ),
    bundle(
        "Potassium",
        High,
        "Hyperkalemia (>5.0 mEq/L)",
        &[
            dx(
                "Pseudohyperkalemia",
                "Hemolyzed sample, fist clenching, prolonged tourniquet. ALWAYS rule out first. Repeat with proper technique.",
            ),
            dx(
                "Renal Failure",
                "Most common true cause. Reduced renal excretion. Critical when >6.0: ECG changes, cardiac arrest risk.",
            ),
            dx(
                "Medications",
                "ACE inhibitors, ARBs, spironolactone, NSAIDs, trimethoprim, heparin.",
            ),
            dx(
                "Acidosis",
                "Metabolic acidosis causes transcellular shift of K+ out of cells. DKA is a classic cause.",
            ),
            dx(
                "Tissue Destruction",
                "Rhabdomyolysis, tumor lysis syndrome, massive hemolysis, burns.",
            ),
        ],
    ),
    bundle(
        "Calcium",
        High,
        "Hypercalcemia",
        &[
            dx(
                "Primary Hyperparathyroidism",
                "Most common outpatient cause. Elevated PTH with elevated calcium. Parathyroid adenoma (85%).",
            ),
            dx(
                "Malignancy",
                "Most common inpatient cause. PTHrP-mediated (squamous cell, renal, breast) or osteolytic metastases (myeloma, breast). Check PTHrP, PTH.",
            ),
            dx(
                "Vitamin D Excess",
                "Granulomatous disease (sarcoidosis, TB) or exogenous. Check 25-OH and 1,25-OH vitamin D.",
            ),
            dx(
                "Thiazide Diuretics",
                "Decrease renal calcium excretion.",
            ),
        ],
    ),
    bundle(
        "Calcium",
        Low,
        "Hypocalcemia",
        &[
            dx(
                "Hypoparathyroidism",
                "Post-surgical (most common), autoimmune. Low PTH with low calcium.",
            ),
            dx(
                "Vitamin D Deficiency",
                "Inadequate sun exposure, malabsorption. Low 25-OH vitamin D. Secondary hyperparathyroidism.",
            ),
            dx(
                "Chronic Kidney Disease",
                "Reduced 1,25-OH vitamin D production, hyperphosphatemia.",
            ),
            dx(
                "Hypoalbuminemia",
                "Corrected calcium = measured Ca + 0.8 × (4.0 - albumin). Ionized calcium may be normal.",
            ),
        ],
    ),
    bundle(
        "eGFR",
        Low,
        "Reduced eGFR",
        &[
            dx(
                "CKD Stage 3a (45-59)",
                "Mildly to moderately decreased. Monitor every 3-6 months. Control BP, glucose. Avoid nephrotoxins.",
            ),
            dx(
                "CKD Stage 3b (30-44)",
                "Moderately to severely decreased. Nephrology referral. Monitor for complications (anemia, bone disease).",
            ),
            dx(
                "CKD Stage 4 (15-29)",
                "Severely decreased. Prepare for renal replacement therapy. AV fistula planning.",
            ),
            dx(
                "CKD Stage 5 (<15)",
                "Kidney failure. Dialysis or transplant needed. Urgent nephrology management.",
            ),
        ],
    ),
    bundle(
        "Uric_Acid",
        High,
        "Hyperuricemia",
        &[
            dx(
                "Gout",
                "Crystal arthropathy. Monosodium urate crystals in joint fluid. Acute flares, tophi. Not all hyperuricemia causes gout.",
            ),
            dx(
                "Renal Disease",
                "Decreased renal excretion is the most common cause of hyperuricemia.",
            ),
            dx(
                "Tumor Lysis Syndrome",
                "Massive cell turnover releases purines. Usually post-chemotherapy. Check K+, phosphorus, calcium, LDH.",
            ),
            dx(
                "Metabolic Syndrome",
                "Associated with insulin resistance, hypertension, dyslipidemia.",
            ),
        ],
    ),
];

const LEARNING: &[(&str, &str)] = &[
    (
        "Creatinine",
        "Creatinine is produced from muscle metabolism at a constant rate. It is freely filtered by the glomerulus and not reabsorbed. Serum creatinine is inversely related to GFR but is an insensitive marker: GFR must decline ~50% before creatinine rises above normal. Muscle mass, diet (cooked meat), and certain drugs affect levels independently of GFR.",
    ),
    (
        "BUN",
        "Blood Urea Nitrogen reflects both renal function and protein metabolism. Unlike creatinine, BUN is reabsorbed in the collecting duct (enhanced by ADH). The BUN/Creatinine ratio is diagnostically valuable: >20:1 suggests prerenal disease or GI bleeding; <10:1 suggests liver disease or malnutrition.",
    ),
    (
        "eGFR",
        "Estimated GFR is calculated using CKD-EPI equation (2021 race-free equation) from creatinine, age, and sex. It is more sensitive than creatinine alone for detecting early CKD. CKD is defined as eGFR <60 for ≥3 months. Staging: G1 ≥90, G2 60-89, G3a 45-59, G3b 30-44, G4 15-29, G5 <15.",
    ),
    (
        "Sodium",
        "Sodium is the primary determinant of serum osmolality and ECF volume. Hyponatremia is the most common electrolyte disorder in hospitalized patients. Always assess volume status first (hypovolemic vs euvolemic vs hypervolemic). Rapid correction risks osmotic demyelination syndrome; correct ≤8 mEq/L per 24 hours.",
    ),
    (
        "Potassium",
        "Potassium is the major intracellular cation. 98% is intracellular. Small changes in serum K+ have major effects on cardiac conduction. Hyperkalemia >6.0 is a medical emergency: check ECG for peaked T waves, widened QRS, sine wave pattern. Treatment: calcium gluconate (cardioprotection), insulin+glucose, kayexalate, dialysis.",
    ),
    (
        "Calcium",
        "Total calcium includes protein-bound (40%), complexed (10%), and ionized/free (50%). Only ionized calcium is physiologically active. Always correct for albumin: corrected Ca = measured Ca + 0.8 × (4.0 - albumin). Calcium homeostasis involves PTH, vitamin D, and calcitonin.",
    ),
    (
        "Phosphorus",
        "Phosphorus is inversely related to calcium via PTH. In CKD, phosphorus rises as GFR falls, stimulating PTH (secondary hyperparathyroidism) and contributing to renal osteodystrophy. Acute severe hypophosphatemia (<1.0) can cause rhabdomyolysis, respiratory failure, and cardiac dysfunction.",
    ),
    (
        "Magnesium",
        "Magnesium is often the forgotten electrolyte. Hypomagnesemia causes refractory hypokalemia and hypocalcemia; always check Mg when K or Ca are low and not responding to replacement. Common causes: alcoholism, diuretics, PPI use, diarrhea.",
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "Creatinine vs GFR: creatinine is a late marker. GFR must drop ~50% before creatinine rises. eGFR is more sensitive for early CKD detection.",
    "BUN/Creatinine Ratio: separates prerenal (>20:1) from intrinsic renal disease (~10-15:1) and flags GI bleeding or liver disease at the extremes.",
    "Anion Gap: Na - (Cl + HCO3), normally 8-12 mEq/L. An elevated gap points to unmeasured anions (MUDPILES); a low gap suggests hypoalbuminemia or paraproteins.",
    "Corrected Calcium: adjust total calcium for albumin before calling hypocalcemia. Ionized calcium is definitive when in doubt.",
];
