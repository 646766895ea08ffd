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
    learning: &[],
    overview: "The Complete Blood Count is the most commonly ordered blood test. It provides information about three cell lines: red blood cells (oxygen transport), white blood cells (immune function), and platelets (hemostasis).",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "RBC",
    "Hemoglobin",
    "Hematocrit",
    "MCV",
    "MCH",
    "MCHC",
    "RDW",
    "RDW_SD",
    "Reticulocytes",
    "WBC",
    "Neutrophils",
    "Lymphocytes",
    "Monocytes",
    "Eosinophils",
    "Basophils",
    "Platelets",
    "MPV",
    "PDW",
    "ESR",
    "ANC",
    "ALC",
];

const RANGES: &[RangeDef] = &[
    range("RBC", Male, 4.5, 5.5, 2.0, 8.0, "x10^12/L"),
    range("RBC", Female, 4.0, 5.0, 2.0, 8.0, "x10^12/L"),
    range("RBC", Any, 4.0, 5.5, 2.0, 8.0, "x10^12/L"),
    range("Hemoglobin", Male, 13.5, 17.5, 7.0, 20.0, "g/dL"),
    range("Hemoglobin", Female, 12.0, 16.0, 7.0, 20.0, "g/dL"),
    range("Hemoglobin", Any, 12.0, 17.5, 7.0, 20.0, "g/dL"),
    range("Hematocrit", Male, 38.3, 48.6, 20.0, 60.0, "%"),
    range("Hematocrit", Female, 35.5, 44.9, 20.0, 60.0, "%"),
    range("Hematocrit", Any, 35.5, 48.6, 20.0, 60.0, "%"),
    range("MCV", Any, 80.0, 100.0, 50.0, 130.0, "fL"),
    range("MCH", Any, 27.0, 33.0, 15.0, 45.0, "pg"),
    range("MCHC", Any, 32.0, 36.0, 25.0, 40.0, "g/dL"),
    range("RDW", Any, 11.5, 14.5, 8.0, 30.0, "%"),
    range("RDW_SD", Any, 35.0, 56.0, 25.0, 80.0, "fL"),
    range("Reticulocytes", Any, 0.5, 2.5, 0.0, 15.0, "%"),
    range("WBC", Any, 4.0, 11.0, 1.0, 30.0, "x10^9/L"),
    range("Neutrophils", Any, 40.0, 70.0, 5.0, 95.0, "%"),
    range("Lymphocytes", Any, 20.0, 40.0, 3.0, 80.0, "%"),
    range("Monocytes", Any, 2.0, 8.0, 0.0, 25.0, "%"),
    range("Eosinophils", Any, 1.0, 4.0, 0.0, 30.0, "%"),
    range("Basophils", Any, 0.0, 1.0, 0.0, 10.0, "%"),
    range("Platelets", Any, 150.0, 400.0, 20.0, 1000.0, "x10^9/L"),
    range("MPV", Any, 7.5, 12.5, 5.0, 15.0, "fL"),
    range("PDW", Any, 9.0, 17.0, 5.0, 25.0, "fL"),
    range("ESR", Male, 0.0, 15.0, 0.0, 100.0, "mm/hr"),
    range("ESR", Female, 0.0, 20.0, 0.0, 100.0, "mm/hr"),
    range("ESR", Any, 0.0, 20.0, 0.0, 100.0, "mm/hr"),
    range("ANC", Any, 1.5, 8.0, 0.5, 20.0, "x10^9/L"),
    range("ALC", Any, 1.0, 4.0, 0.2, 15.0, "x10^9/L"),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "RBC",
        Low,
        "Decreased RBC Count (Anemia)",
        &[
            dx(
                "Iron Deficiency Anemia",
                "Most common cause worldwide. Microcytic, hypochromic RBCs. Low MCV, MCH, MCHC, elevated RDW. Check ferritin and iron studies.",
            ),
            dx(
                "Vitamin B12/Folate Deficiency",
                "Megaloblastic anemia with high MCV. Hypersegmented neutrophils. Check B12, folate, methylmalonic acid.",
            ),
            dx(
                "Anemia of Chronic Disease (ACD/AI)",
                "Second most common. Usually normocytic. Ferritin normal/elevated. Low serum iron, low TIBC.",
            ),
            dx(
                "Hemolytic Anemia",
                "Premature RBC destruction. Elevated reticulocytes, LDH, indirect bilirubin. Low haptoglobin.",
            ),
            dx(
                "Aplastic Anemia",
                "Bone marrow failure with pancytopenia. Low reticulocyte count. Requires bone marrow biopsy.",
            ),
            dx(
                "Thalassemia",
                "Inherited globin synthesis disorder. Microcytic with relatively high RBC count. Hemoglobin electrophoresis diagnostic.",
            ),
            dx(
                "Chronic Kidney Disease",
                "Decreased erythropoietin production. Usually normocytic. Check renal function.",
            ),
            dx(
                "Myelodysplastic Syndrome (MDS)",
                "Clonal disorder with ineffective hematopoiesis. Often macrocytic. Bone marrow biopsy required.",
            ),
        ],
    ),
    bundle(
        "RBC",
        High,
        "Elevated RBC Count (Erythrocytosis/Polycythemia)",
        &[
            dx(
                "Polycythemia Vera",
                "Myeloproliferative neoplasm. JAK2 V617F mutation in ~95%. Risk of thrombosis.",
            ),
            dx(
                "Secondary Polycythemia",
                "Reactive from chronic hypoxia (COPD, sleep apnea, high altitude), EPO-secreting tumors.",
            ),
            dx(
                "Dehydration",
                "Decreased plasma volume causes apparent increase. Resolves with hydration.",
            ),
            dx(
                "Thalassemia Trait",
                "Elevated RBC with low MCV and low-normal Hb. Mentzer index (MCV/RBC) <13.",
            ),
        ],
    ),
    bundle(
        "Hemoglobin",
        Low,
        "Low Hemoglobin (Anemia)",
        &[
            dx(
                "Iron Deficiency Anemia",
                "Most common cause globally. Fatigue, pallor, dyspnea. Check ferritin, iron studies.",
            ),
            dx(
                "Hemorrhage (Acute or Chronic)",
                "Acute blood loss dilutional effect takes 24-48 hrs. Chronic loss causes iron deficiency.",
            ),
            dx(
                "Hemoglobinopathies",
                "Sickle cell, thalassemias. Hemoglobin electrophoresis or HPLC diagnostic.",
            ),
            dx(
                "Bone Marrow Infiltration",
                "Leukemia, lymphoma, metastatic cancer. Leukoerythroblastic picture on smear.",
            ),
        ],
    ),
    bundle(
        "Hemoglobin",
        High,
        "Elevated Hemoglobin",
        &[
            dx(
                "Polycythemia Vera",
                "Hb >16.5 g/dL (men) or >16.0 g/dL (women) is major criterion.",
            ),
            dx(
                "Chronic Hypoxia",
                "Compensatory from COPD, heart disease, sleep apnea, high altitude.",
            ),
            dx(
                "Dehydration",
                "Hemoconcentration from volume depletion. Corrects with hydration.",
            ),
            dx(
                "Spurious (Lipemia/High WBC)",
                "Very high WBC, lipemia, or monoclonal proteins cause turbidity artifact.",
            ),
        ],
    ),
    bundle(
        "MCV",
        Low,
        "Microcytosis (Low MCV)",
        &[
            dx(
                "Iron Deficiency Anemia",
                "Most common cause. Low MCV with elevated RDW.",
            ),
            dx(
                "Thalassemia Trait",
                "Low MCV with normal/slightly elevated RDW. RBC count often normal/elevated. Mentzer index <13.",
            ),
            dx(
                "Anemia of Chronic Disease",
                "Usually normocytic but can be microcytic in ~30%. Ferritin normal/elevated.",
            ),
            dx(
                "Sideroblastic Anemia",
                "Congenital or acquired. Ring sideroblasts on bone marrow iron stain.",
            ),
            dx(
                "Lead Poisoning",
                "Inhibits heme synthesis. Basophilic stippling. Check blood lead level.",
            ),
        ],
    ),
    bundle(
        "MCV",
        High,
        "Macrocytosis (High MCV)",
        &[
            dx(
                "Vitamin B12 Deficiency",
                "Megaloblastic anemia, MCV often >110 fL. Hypersegmented neutrophils.",
            ),
            dx(
                "Folate Deficiency",
                "Similar to B12 without neurological features. Alcoholism, poor diet, medications.",
            ),
            dx(
                "Myelodysplastic Syndrome",
                "Clonal disorder with dysplastic morphology. Common cause in elderly.",
            ),
            dx(
                "Alcoholism/Liver Disease",
                "Direct toxic effect or folate deficiency or altered lipid metabolism.",
            ),
            dx("Hypothyroidism", "Mild macrocytosis. Check TSH and free T4."),
            dx(
                "Reticulocytosis",
                "Reticulocytes are larger than mature RBCs. Check reticulocyte count.",
            ),
            dx(
                "Medications",
                "Hydroxyurea, methotrexate, azathioprine, zidovudine.",
            ),
        ],
    ),
    bundle(
        "MCHC",
        Low,
        "Low MCHC (Hypochromia)",
        &[
            dx(
                "Iron Deficiency Anemia",
                "Most common cause. Decreased hemoglobin synthesis.",
            ),
            dx("Thalassemia", "Decreased globin chain synthesis."),
            dx("Sideroblastic Anemia", "Impaired heme synthesis."),
        ],
    ),
    bundle(
        "MCHC",
        High,
        "High MCHC",
        &[
            dx(
                "Hereditary Spherocytosis",
                "RBC membrane defect. MCHC truly elevated >36 g/dL. EMA binding test diagnostic.",
            ),
            dx(
                "Cold Agglutinin Disease",
                "Spurious from RBC agglutination. Warming sample to 37C resolves.",
            ),
            dx(
                "Severe Lipemia",
                "Turbidity falsely elevates hemoglobin measurement.",
            ),
            dx(
                "Hemoglobin C Disease",
                "RBC dehydration from Hb C crystals. Target cells on smear.",
            ),
        ],
    ),
    bundle(
        "RDW",
        High,
        "Elevated RDW (Anisocytosis)",
        &[
            dx(
                "Iron Deficiency Anemia",
                "Early finding. Mixed normocytic and microcytic cells.",
            ),
            dx(
                "B12/Folate Deficiency",
                "Mixed population of macrocytes and normocytes.",
            ),
            dx(
                "Myelodysplastic Syndrome",
                "Dysplastic erythropoiesis with variable cell sizes.",
            ),
            dx(
                "Post-Transfusion",
                "Transfused RBCs differ in size from patient cells.",
            ),
            dx(
                "Mixed Nutritional Deficiency",
                "Combined iron and B12/folate deficiency.",
            ),
            dx("Hemoglobinopathies", "Variable RBC shapes and sizes."),
        ],
    ),
    bundle(
        "WBC",
        Low,
        "Leukopenia (Low WBC)",
        &[
            dx(
                "Neutropenia",
                "Most common cause. Viral infections, drugs, autoimmune, marrow failure.",
            ),
            dx(
                "Viral Infections",
                "HIV, hepatitis, EBV, CMV, influenza cause transient leukopenia.",
            ),
            dx(
                "Aplastic Anemia",
                "Pancytopenia with hypocellular bone marrow.",
            ),
            dx(
                "Drug-Induced",
                "Chemotherapy, clozapine, carbamazepine, methimazole, sulfonamides.",
            ),
            dx(
                "Autoimmune",
                "SLE, rheumatoid arthritis can cause neutropenia or lymphopenia.",
            ),
            dx("Hypersplenism", "Splenomegaly sequesters WBCs."),
        ],
    ),
    bundle(
        "WBC",
        High,
        "Leukocytosis (High WBC)",
        &[
            dx(
                "Bacterial Infection",
                "Most common cause. Left shift, toxic granulation, Dohle bodies.",
            ),
            dx(
                "Stress/Physiologic",
                "Catecholamine demargination of neutrophils.",
            ),
            dx(
                "Corticosteroid Use",
                "Demargination and decreased migration to tissues.",
            ),
            dx(
                "Chronic Myeloid Leukemia (CML)",
                "Full myeloid maturation spectrum. Basophilia. BCR-ABL1.",
            ),
            dx(
                "Acute Leukemia",
                "Can present with very high WBC with circulating blasts.",
            ),
            dx("Smoking", "Chronic mild neutrophilic leukocytosis."),
        ],
    ),
    bundle(
        "Platelets",
        Low,
        "Thrombocytopenia (Low Platelets)",
        &[
            dx(
                "Immune Thrombocytopenia (ITP)",
                "Autoimmune destruction. Diagnosis of exclusion. Large platelets on smear.",
            ),
            dx(
                "Pseudothrombocytopenia",
                "EDTA-induced clumping. Check smear. Repeat with citrate tube.",
            ),
            dx(
                "DIC",
                "Consumptive coagulopathy. Elevated PT/PTT, low fibrinogen, schistocytes.",
            ),
            dx(
                "TTP/HUS",
                "Microangiopathic hemolytic anemia. Schistocytes. ADAMTS13 for TTP.",
            ),
            dx(
                "Bone Marrow Failure",
                "Aplastic anemia, MDS, leukemia. Usually with other cytopenias.",
            ),
            dx(
                "Drug-Induced",
                "HIT, valproic acid, quinine, chemotherapy.",
            ),
            dx(
                "Liver Disease/Hypersplenism",
                "Portal hypertension with platelet sequestration.",
            ),
        ],
    ),
    bundle(
        "Platelets",
        High,
        "Thrombocytosis (High Platelets)",
        &[
            dx(
                "Reactive Thrombocytosis",
                "Most common (>80%). Infection, inflammation, iron deficiency, surgery.",
            ),
            dx(
                "Essential Thrombocythemia",
                "Myeloproliferative neoplasm. JAK2, CALR, or MPL mutations.",
            ),
            dx(
                "Iron Deficiency",
                "Reactive thrombocytosis. Normalizes with iron replacement.",
            ),
            dx("Post-Splenectomy", "Loss of splenic sequestration."),
        ],
    ),
    bundle(
        "MPV",
        Low,
        "Low MPV (Small Platelets)",
        &[
            dx(
                "Bone Marrow Suppression",
                "Decreased megakaryopoiesis produces small platelets.",
            ),
            dx(
                "Wiskott-Aldrich Syndrome",
                "X-linked. Characteristically small platelets with thrombocytopenia.",
            ),
            dx("Hypersplenism", "Spleen sequesters larger platelets."),
        ],
    ),
    bundle(
        "MPV",
        High,
        "High MPV (Large Platelets)",
        &[
            dx(
                "Immune Thrombocytopenia (ITP)",
                "Compensatory large, young platelets.",
            ),
            dx(
                "Inherited Platelet Disorders",
                "Bernard-Soulier, Gray platelet syndrome, MYH9-related disease.",
            ),
            dx(
                "EDTA Artifact",
                "Prolonged EDTA exposure causes platelet swelling.",
            ),
        ],
    ),
    bundle(
        "Neutrophils",
        Low,
        "Neutropenia",
        &[
            dx(
                "Drug-Induced",
                "Chemotherapy, clozapine, carbamazepine, methimazole.",
            ),
            dx(
                "Viral Infections",
                "HIV, hepatitis, EBV, CMV, parvovirus B19.",
            ),
            dx(
                "Autoimmune Neutropenia",
                "Primary or secondary (SLE, Felty syndrome).",
            ),
            dx(
                "Benign Ethnic Neutropenia",
                "Common in African descent. ANC 1.0-1.5 without increased risk.",
            ),
        ],
    ),
    bundle(
        "Neutrophils",
        High,
        "Neutrophilia",
        &[
            dx(
                "Bacterial Infection",
                "Most common. Left shift, toxic granulation.",
            ),
            dx("Corticosteroid Effect", "Demargination from vessel walls."),
            dx(
                "Myeloproliferative Neoplasms",
                "CML with persistent neutrophilia and basophilia.",
            ),
        ],
    ),
    bundle(
        "Lymphocytes",
        Low,
        "Lymphopenia",
        &[
            dx("HIV/AIDS", "CD4+ T cell depletion."),
            dx(
                "Corticosteroid Use",
                "Lymphocyte redistribution and apoptosis.",
            ),
            dx(
                "Severe Infection/Sepsis",
                "Lymphocyte apoptosis. Poor prognostic sign.",
            ),
        ],
    ),
    bundle(
        "Lymphocytes",
        High,
        "Lymphocytosis",
        &[
            dx(
                "Viral Infections",
                "EBV, CMV, hepatitis. Reactive lymphocytes on smear.",
            ),
            dx(
                "Chronic Lymphocytic Leukemia (CLL)",
                "Mature lymphocytes >5 x10^9/L. Smudge cells.",
            ),
            dx("Pertussis", "Marked lymphocytosis especially in children."),
        ],
    ),
    bundle(
        "Eosinophils",
        High,
        "Eosinophilia",
        &[
            dx(
                "Allergic Conditions",
                "Asthma, allergic rhinitis, eczema. Most common cause.",
            ),
            dx("Parasitic Infections", "Tissue-invasive helminths."),
            dx(
                "Hypereosinophilic Syndrome",
                "Persistent >1.5 x10^9/L with organ damage.",
            ),
        ],
    ),
    bundle(
        "Basophils",
        High,
        "Basophilia",
        &[
            dx("Chronic Myeloid Leukemia", "Characteristic finding in CML."),
            dx(
                "Other Myeloproliferative Neoplasms",
                "PV, myelofibrosis.",
            ),
            dx(
                "Allergic/Hypersensitivity",
                "Immediate hypersensitivity reactions.",
            ),
        ],
    ),
    bundle(
        "Monocytes",
        High,
        "Monocytosis",
        &[
            dx(
                "Chronic Infections",
                "TB, endocarditis, brucellosis, fungal infections.",
            ),
            dx("CMML", "Persistent monocytosis >1 x10^9/L for >3 months."),
            dx(
                "Recovery from Neutropenia",
                "Monocytes recover before neutrophils.",
            ),
        ],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "Mentzer Index: MCV / RBC below 13 favours thalassemia trait; 13 or above favours iron deficiency. It separates the two commonest microcytic anemias before iron studies return.",
    "Rule of Threes: RBC x 3 should approximate hemoglobin, and hemoglobin x 3 should approximate hematocrit. Large deviations point to analyzer artifact (cold agglutinins, lipemia) or transcription error.",
    "RDW: a high RDW with low MCV suggests iron deficiency; a normal RDW with low MCV suggests thalassemia trait.",
    "Neutrophil-to-Lymphocyte Ratio: an inexpensive marker of systemic inflammation. Values above 3 are mildly raised and values above 9 indicate severe physiological stress or sepsis.",
    "Reticulocytes: correct the raw percentage for anemia (Retic x Hct / 45). A corrected count below 2% with anemia means the marrow is not responding.",
];
