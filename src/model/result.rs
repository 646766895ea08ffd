use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::differential::DifferentialBundle;
use crate::model::indices::IndexMap;
use crate::model::quality::QualityCheckResult;
use crate::model::status::{Classification, Status};
use crate::model::value::{Sex, Value};
use crate::panels::Panel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterResult {
    pub value: Value,
    pub unit: String,
    pub classification: Classification,
    pub differential: Option<&'static DifferentialBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning: Option<&'static str>,
}

/// Abnormal or critical parameter, listed in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub parameter: String,
    pub value: Value,
    pub unit: String,
    pub status: Status,
    pub message: String,
    pub differential: Option<&'static DifferentialBundle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayKind {
    Emergency,
    Hemolysis,
    IsolatedBilirubin,
    Cholestatic,
    Hepatocellular,
    Mixed,
    FurtherEvaluation,
}

/// Ordered diagnostic steps for the liver panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pathway {
    pub kind: PathwayKind,
    pub title: &'static str,
    pub emergency: bool,
    pub steps: Vec<String>,
}

/// One liver marker against its upper limit of normal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityRow {
    pub parameter: &'static str,
    pub value: f64,
    pub uln: f64,
    pub elevated: bool,
    /// Fold over ULN, only when elevated.
    pub fold_uln: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelAnalysisResult {
    pub panel: Panel,
    pub sex: Sex,
    pub parameters: BTreeMap<String, ParameterResult>,
    pub abnormalities: Vec<Finding>,
    pub critical_values: Vec<Finding>,
    pub quality_checks: Vec<QualityCheckResult>,
    pub calculated_indices: IndexMap,
    pub total_parameters: usize,
    pub abnormal_count: usize,
    pub critical_count: usize,
    pub pattern_summary: String,
    pub educational_content: String,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathway: Option<Pathway>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severity_table: Vec<SeverityRow>,
    /// Text values supplied for numeric-only parameters.
    pub skipped: Vec<String>,
}
