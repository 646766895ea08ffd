pub mod context;
pub mod differential;
pub mod indices;
pub mod quality;
pub mod reference;
pub mod result;
pub mod status;
pub mod value;

pub use context::ClinicalContext;
pub use differential::{Differential, DifferentialBundle};
pub use indices::{CalculatedIndex, IndexMap, IndexValue};
pub use quality::{QualityCheckResult, Severity};
pub use reference::ReferenceRange;
pub use result::{
    Finding, PanelAnalysisResult, ParameterResult, Pathway, PathwayKind, Recommendation, SeverityRow,
};
pub use status::{Classification, Color, Direction, Status};
pub use value::{ParameterMap, ParameterValue, Sex, Value};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
