//! Laboratory panel classification: reference-range tiers, differential
//! lookup, derived indices, internal consistency checks and a per-panel
//! aggregate result.

pub mod input;
pub mod logging;
pub mod model;
pub mod panels;
pub mod pipeline;
pub mod report;
pub mod session;

pub use model::{
    CalculatedIndex, Classification, ClinicalContext, DifferentialBundle, Finding, PanelAnalysisResult,
    ParameterMap, ParameterValue, QualityCheckResult, Recommendation, Severity, Sex, Status, Value,
};
pub use panels::{Panel, find_panel_for_parameter};
pub use pipeline::stage1_classify::{classify, get_reference_range};
pub use pipeline::stage2_differential::get_differential;
pub use pipeline::{analyze, analyze_all, analyze_all_with_context, analyze_with_context};
pub use session::ParameterStore;
