use crate::model::differential::{DifferentialDef, bundle, dx};
use crate::model::reference::{QualitativeDef, RangeDef, range};
use crate::model::status::Direction::{High, Low};
use crate::model::value::Sex::Default as Any;
use crate::panels::PanelTables;

pub const TSH_LOW: f64 = 0.4;
pub const TSH_HIGH: f64 = 4.0;
pub const FT4_LOW: f64 = 0.8;
pub const FT4_HIGH: f64 = 1.8;
pub const FT3_HIGH: f64 = 4.2;

pub const TABLES: PanelTables = PanelTables {
    registry: REGISTRY,
    ranges: RANGES,
    qualitative: QUALITATIVE,
    differentials: DIFFERENTIALS,
    learning: &[],
    overview: "Thyroid Function Tests follow a hierarchical approach: TSH first, then FT4/FT3. The inverse log-linear TSH-FT4 relationship makes TSH the most sensitive screening test.",
    learning_points: LEARNING_POINTS,
};

const REGISTRY: &[&str] = &[
    "TSH",
    "T3",
    "T4",
    "FT3",
    "FT4",
    "Reverse_T3",
    "T3_Uptake",
    "Anti_TPO",
    "Anti_Thyroglobulin",
    "TSH_Receptor_Ab",
    "Thyroglobulin",
];

const RANGES: &[RangeDef] = &[
    range("TSH", Any, TSH_LOW, TSH_HIGH, 0.01, 50.0, "mIU/L"),
    range("T3", Any, 80.0, 200.0, 30.0, 500.0, "ng/dL"),
    range("T4", Any, 5.0, 12.0, 2.0, 25.0, "µg/dL"),
    range("FT3", Any, 2.3, FT3_HIGH, 1.0, 10.0, "pg/mL"),
    range("FT4", Any, FT4_LOW, FT4_HIGH, 0.3, 5.0, "ng/dL"),
    range("Reverse_T3", Any, 10.0, 24.0, 5.0, 80.0, "ng/dL"),
    range("T3_Uptake", Any, 24.0, 37.0, 15.0, 55.0, "%"),
    range("Anti_TPO", Any, 0.0, 35.0, 0.0, 2000.0, "IU/mL"),
    range("Anti_Thyroglobulin", Any, 0.0, 40.0, 0.0, 2000.0, "IU/mL"),
    range("TSH_Receptor_Ab", Any, 0.0, 1.75, 0.0, 50.0, "IU/L"),
    range("Thyroglobulin", Any, 0.0, 55.0, 0.0, 500.0, "ng/mL"),
];

const QUALITATIVE: &[QualitativeDef] = &[];

const DIFFERENTIALS: &[DifferentialDef] = &[
    bundle(
        "TSH",
        High,
        "Elevated TSH",
        &[
            dx(
                "Primary Hypothyroidism",
                "High TSH + low FT4. Most common: Hashimoto thyroiditis (anti-TPO+). Also post-thyroidectomy, post-radioiodine, iodine deficiency.",
            ),
            dx(
                "Subclinical Hypothyroidism",
                "High TSH + normal FT4. Treat if TSH >10, symptoms present, or anti-TPO positive. Monitor if TSH 4-10.",
            ),
            dx(
                "Recovery from Non-Thyroidal Illness",
                "TSH may transiently rise to 10-20 during recovery phase of sick euthyroid syndrome.",
            ),
            dx(
                "TSH-Secreting Pituitary Adenoma",
                "Rare. High TSH + high FT4. Inappropriate TSH secretion. MRI pituitary.",
            ),
        ],
    ),
    bundle(
        "TSH",
        Low,
        "Suppressed TSH",
        &[
            dx(
                "Graves Disease",
                "Most common cause of hyperthyroidism. Diffuse goiter, ophthalmopathy, dermopathy. TSH receptor antibodies positive. Radioiodine uptake elevated and diffuse.",
            ),
            dx(
                "Toxic Multinodular Goiter",
                "Multiple autonomous nodules. More common in elderly. Radioiodine scan shows patchy uptake.",
            ),
            dx(
                "Thyroiditis (Subacute/Painless)",
                "Transient thyrotoxicosis from thyroid destruction. Painful (de Quervain) or painless (postpartum). Low radioiodine uptake distinguishes from Graves.",
            ),
            dx(
                "Exogenous Thyroid Hormone",
                "Overtreatment, factitious use. Low thyroglobulin if exogenous.",
            ),
            dx(
                "Central Hypothyroidism",
                "Pituitary/hypothalamic disease. Low/normal TSH + low FT4. Check other pituitary hormones. MRI pituitary.",
            ),
        ],
    ),
    bundle(
        "Anti_TPO",
        High,
        "Elevated Anti-TPO Antibodies",
        &[
            dx(
                "Hashimoto Thyroiditis",
                "Most common cause of hypothyroidism in iodine-sufficient areas. Anti-TPO positive in >90%. Lymphocytic infiltration of thyroid.",
            ),
            dx(
                "Graves Disease",
                "Anti-TPO can be positive in 50-80% of Graves patients. TSH receptor antibody is more specific.",
            ),
            dx(
                "Other Autoimmune Diseases",
                "Can be positive in Type 1 DM, SLE, RA, Sjogren without thyroid disease (5-10% of general population).",
            ),
        ],
    ),
    bundle(
        "TSH_Receptor_Ab",
        High,
        "Elevated TSH Receptor Antibodies (TRAb)",
        &[dx(
            "Graves Disease",
            "Highly specific (>99%). Stimulating antibodies cause hyperthyroidism. Useful for diagnosis, monitoring, and predicting relapse. Important in pregnancy (neonatal thyrotoxicosis risk).",
        )],
    ),
];

const LEARNING_POINTS: &[&str] = &[
    "TSH is the Screening Test: it is the most sensitive indicator of thyroid function. If abnormal, check FT4 (and FT3 if hyperthyroid).",
    "Inverse Log-Linear Relationship: a 2-fold change in FT4 causes a 100-fold change in TSH.",
    "Pattern Recognition: high TSH with low FT4 is primary hypothyroidism; low TSH with high FT4 is hyperthyroidism; low TSH with low FT4 points to the pituitary.",
    "Antibodies Tell the Etiology: anti-TPO for Hashimoto, TRAb for Graves, anti-Tg for thyroid cancer monitoring.",
    "Sick Euthyroid Syndrome: acute illness can lower T3, TSH and FT4. Avoid diagnosing thyroid disease during acute illness unless clinically obvious.",
];
