use crate::model::differential::{Differential, DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range_nc};
use crate::model::status::Direction::{High, Low};
use crate::model::value::Sex::{self, Default as Any, Female, Male};
use crate::panels::PanelTables;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Liver Function Tests include both biochemical markers of injury (ALT, AST, ALP) and functional markers of synthetic capacity (albumin, PT/INR). The R value helps classify injury pattern.",
    learning_points: LEARNING_POINTS,
};

/// Upper limits used by the R value and fold-of-ULN calculations.
pub const ALP_ULN: f64 = 120.0;
pub const TOTAL_BILIRUBIN_ULN: f64 = 1.0;
pub const DIRECT_BILIRUBIN_ULN: f64 = 0.3;

pub fn alt_uln(sex: Sex) -> f64 {
    match sex {
        Female => 25.0,
        _ => 33.0,
    }
}

pub fn ast_uln(sex: Sex) -> f64 {
    match sex {
        Female => 32.0,
        _ => 40.0,
    }
}

const REGISTRY: &[&str] = &[
    "ALT",
    "AST",
    "ALP",
    "GGT",
    "Total_Bilirubin",
    "Direct_Bilirubin",
    "Indirect_Bilirubin",
    "Total_Protein",
    "Albumin",
    "Globulin",
    "AG_Ratio",
    "LDH",
    "PT",
    "INR",
];

// Liver enzymes carry no critical tier.
const RANGES: &[RangeDef] = &[
    range_nc("ALT", Male, 0.0, 33.0, "IU/L"),
    range_nc("ALT", Female, 0.0, 25.0, "IU/L"),
    range_nc("ALT", Any, 0.0, 33.0, "IU/L"),
    range_nc("AST", Male, 0.0, 40.0, "IU/L"),
    range_nc("AST", Female, 0.0, 32.0, "IU/L"),
    range_nc("AST", Any, 0.0, 40.0, "IU/L"),
    range_nc("GGT", Male, 0.0, 60.0, "IU/L"),
    range_nc("GGT", Female, 0.0, 40.0, "IU/L"),
    range_nc("GGT", Any, 0.0, 60.0, "IU/L"),
    range_nc("ALP", Any, 30.0, 120.0, "IU/L"),
    range_nc("Total_Bilirubin", Any, 0.3, 1.0, "mg/dL"),
    range_nc("Direct_Bilirubin", Any, 0.0, 0.3, "mg/dL"),
    range_nc("Indirect_Bilirubin", Any, 0.2, 0.8, "mg/dL"),
    range_nc("Total_Protein", Any, 6.0, 8.3, "g/dL"),
    range_nc("Albumin", Any, 3.3, 5.5, "g/dL"),
    range_nc("Globulin", Any, 2.0, 3.5, "g/dL"),
    range_nc("AG_Ratio", Any, 1.0, 2.2, ""),
    range_nc("LDH", Any, 140.0, 280.0, "IU/L"),
    range_nc("PT", Any, 11.0, 13.0, "seconds"),
    range_nc("INR", Any, 0.8, 1.1, ""),
];

const QUALITATIVE: &[QualitativeDef] = &[];

pub const HEPATOCELLULAR: &[Differential] = &[
    dx(
        "Viral Hepatitis (A, B, C, E)",
        "Most common infectious cause of hepatocellular injury worldwide. ALT is typically higher than AST. Acute hepatitis A/E: often self-limited. Hepatitis B/C: can become chronic. Order: HBsAg, anti-HBc IgM, anti-HCV, anti-HAV IgM, anti-HEV IgM.",
    ),
    dx(
        "Drug-Induced Liver Injury (DILI)",
        "Acetaminophen is the most common cause of acute liver failure. Many drugs and supplements can cause hepatocellular injury. Detailed medication and supplement history is essential. Causality assessment using RUCAM score. Acetaminophen level if overdose suspected.",
    ),
    dx(
        "Alcoholic Liver Disease",
        "AST/ALT ratio >2:1 is characteristic. AST rarely exceeds 300 IU/L in isolated alcoholic hepatitis. GGT is usually markedly elevated. Assess for Maddrey discriminant function if alcoholic hepatitis suspected.",
    ),
    dx(
        "Non-Alcoholic Fatty Liver Disease (NAFLD/NASH)",
        "Most common cause of chronic transaminase elevation in Western countries. Associated with metabolic syndrome, obesity, diabetes. ALT usually > AST. Ultrasound may show hepatic steatosis. FIB-4 or NAFLD Fibrosis Score for risk stratification.",
    ),
    dx(
        "Autoimmune Hepatitis",
        "Predominantly affects women. Check ANA, ASMA, anti-LKM1, IgG levels. Can present acutely or chronically. Liver biopsy often needed for definitive diagnosis. Responds to immunosuppression.",
    ),
    dx(
        "Wilson Disease",
        "Consider in patients <40 years. Low ceruloplasmin, high 24-hour urine copper, Kayser-Fleischer rings on slit lamp exam. AST/ALT ratio may be >2:1 with ALP/bilirubin ratio <4 in acute Wilson disease.",
    ),
    dx(
        "Hemochromatosis",
        "Hereditary iron overload. Elevated ferritin and transferrin saturation (>45%). HFE gene testing (C282Y, H63D). Liver biopsy or MRI for iron quantification.",
    ),
    dx(
        "Ischemic Hepatitis (Shock Liver)",
        "Massive transaminase elevation (often >1000 IU/L) following hypotension or cardiac failure. LDH is markedly elevated. ALT/LDH ratio <1.5. Rapid improvement with hemodynamic support.",
    ),
];

pub const CHOLESTATIC: &[Differential] = &[
    dx(
        "Choledocholithiasis (Common Bile Duct Stones)",
        "Most common cause of extrahepatic cholestasis. RUQ ultrasound is first-line imaging. Dilated bile ducts on ultrasound lead to MRCP or ERCP. May present with Charcot triad (fever, jaundice, RUQ pain) or Reynold pentad (+ hypotension, altered mental status).",
    ),
    dx(
        "Primary Biliary Cholangitis (PBC)",
        "Autoimmune destruction of intrahepatic bile ducts. Anti-mitochondrial antibody (AMA) is diagnostic (>95% specific). Predominantly affects middle-aged women. IgM elevated. Treatment: ursodeoxycholic acid (UDCA).",
    ),
    dx(
        "Primary Sclerosing Cholangitis (PSC)",
        "Chronic cholestatic disease with strictures and dilatation of bile ducts. MRCP shows \"beading\" pattern. Strong association with IBD (especially ulcerative colitis). p-ANCA may be positive. Increased risk of cholangiocarcinoma.",
    ),
    dx(
        "Pancreatic Head Mass / Cholangiocarcinoma",
        "Painless jaundice in older adults should raise concern for malignancy. CT abdomen with contrast or MRCP for evaluation. CA 19-9 may be elevated. ERCP for tissue diagnosis and stenting.",
    ),
    dx(
        "Drug-Induced Cholestasis",
        "Many drugs can cause cholestatic injury: amoxicillin-clavulanate, oral contraceptives, anabolic steroids, erythromycin, chlorpromazine. Usually resolves after drug withdrawal.",
    ),
    dx(
        "Intrahepatic Cholestasis of Pregnancy",
        "Pruritus and elevated bile acids in the third trimester. Risk of fetal complications. Treatment: UDCA. Delivery typically recommended at 36-37 weeks.",
    ),
];

pub const MIXED: &[Differential] = &[
    dx(
        "Drug-Induced Liver Injury (Mixed Pattern)",
        "Many drugs produce a mixed hepatocellular-cholestatic pattern. Phenytoin, sulfonamides, and amoxicillin-clavulanate are common culprits. Assess with RUCAM score.",
    ),
    dx(
        "Granulomatous Hepatitis",
        "Causes include sarcoidosis, tuberculosis, fungal infections, drug reactions. Mixed pattern on LFTs. Liver biopsy shows granulomas.",
    ),
    dx(
        "Autoimmune Hepatitis with Cholestatic Features",
        "Overlap syndromes (AIH-PBC, AIH-PSC) can present with mixed pattern. Check ANA, ASMA, AMA. Liver biopsy often necessary for classification.",
    ),
    dx(
        "Infiltrative Liver Disease",
        "Lymphoma, amyloidosis, sarcoidosis can infiltrate the liver causing mixed injury pattern. Imaging and liver biopsy for diagnosis.",
    ),
];

pub const ISOLATED_HYPERBILIRUBINEMIA: &[Differential] = &[
    dx(
        "Gilbert Syndrome",
        "Most common hereditary hyperbilirubinemia (affects ~5-10% of population). Unconjugated (indirect) hyperbilirubinemia with normal liver enzymes and CBC. Bilirubin typically <3 mg/dL. Worsens with fasting, stress, illness. Benign condition requiring no treatment.",
    ),
    dx(
        "Hemolytic Anemia",
        "Unconjugated hyperbilirubinemia from increased RBC destruction. Check: reticulocyte count, LDH (elevated), haptoglobin (low), peripheral smear, direct Coombs test. Many causes: autoimmune, microangiopathic, hereditary (spherocytosis, G6PD, sickle cell).",
    ),
    dx(
        "Crigler-Najjar Syndrome",
        "Type I: severe unconjugated hyperbilirubinemia (>20 mg/dL), absent UGT1A1 activity. Type II: moderate elevation (6-20 mg/dL), responds to phenobarbital. Rare genetic disorder.",
    ),
    dx(
        "Dubin-Johnson / Rotor Syndrome",
        "Conjugated (direct) hyperbilirubinemia with normal enzymes. Benign hereditary conditions. Dubin-Johnson: black pigmented liver. Rotor: no liver pigmentation. No treatment needed.",
    ),
    dx(
        "Ineffective Erythropoiesis",
        "Conditions like megaloblastic anemia, thalassemia, or myelodysplastic syndrome can cause unconjugated hyperbilirubinemia from destruction of RBC precursors in the marrow.",
    ),
];

const SYNTHETIC_FAILURE: &[Differential] = &[
    dx(
        "Cirrhosis",
        "Chronic loss of hepatocyte mass lowers albumin synthesis and prolongs PT/INR. Enzymes may be near normal. Assess with MELD or Child-Pugh score.",
    ),
    dx(
        "Acute Liver Failure",
        "INR >1.5 with encephalopathy in a patient without prior liver disease. Urgent hepatology referral and transplant evaluation.",
    ),
    dx(
        "Non-Hepatic Causes",
        "Low albumin also follows nephrotic syndrome, protein-losing enteropathy, malnutrition and systemic inflammation. Vitamin K deficiency and anticoagulants prolong PT.",
    ),
];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle("ALT", High, "Hepatocellular Injury Pattern", HEPATOCELLULAR),
    bundle("AST", High, "Hepatocellular Injury Pattern", HEPATOCELLULAR),
    bundle("ALP", High, "Cholestatic Injury Pattern", CHOLESTATIC),
    bundle("GGT", High, "Cholestatic Injury Pattern", CHOLESTATIC),
    bundle(
        "Direct_Bilirubin",
        High,
        "Conjugated Hyperbilirubinemia",
        CHOLESTATIC,
    ),
    bundle(
        "Total_Bilirubin",
        High,
        "Hyperbilirubinemia",
        ISOLATED_HYPERBILIRUBINEMIA,
    ),
    bundle(
        "Indirect_Bilirubin",
        High,
        "Unconjugated Hyperbilirubinemia",
        ISOLATED_HYPERBILIRUBINEMIA,
    ),
    bundle(
        "Albumin",
        Low,
        "Impaired Synthetic Function",
        SYNTHETIC_FAILURE,
    ),
    bundle("INR", High, "Impaired Synthetic Function", SYNTHETIC_FAILURE),
    bundle("PT", High, "Impaired Synthetic Function", SYNTHETIC_FAILURE),
];

const LEARNING_POINTS: &[&str] = &[
    "Pattern Recognition: the R value (ALT fold-elevation divided by ALP fold-elevation) classifies liver injury. R >= 5 is hepatocellular, R 2-5 is mixed, R <= 2 is cholestatic.",
    "Biochemical vs. Functional Tests: ALT, AST, ALP and GGT indicate injury; albumin, PT/INR and bilirubin indicate capacity. Markedly elevated ALT with normal albumin/INR means preserved function, as in acute viral hepatitis.",
    "AST/ALT Ratio (De Ritis Ratio): above 2:1 strongly suggests alcoholic liver disease, above 1:1 may indicate cirrhosis of any etiology, below 1:1 is typical of NAFLD or viral hepatitis.",
    "Severity: below 3x ULN is often monitored, 3-10x ULN requires systematic workup, above 10x ULN needs urgent evaluation.",
];
