use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Pass,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Pass => "pass",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Tiered by absolute deviation: within `tolerance` passes, beyond
    /// `error_at` is an error, in between a warning.
    pub fn tiered(deviation: f64, tolerance: f64, error_at: f64) -> Severity {
        let d = deviation.abs();
        if d > error_at {
            Severity::Error
        } else if d > tolerance {
            Severity::Warning
        } else {
            Severity::Pass
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityCheckResult {
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,
    pub severity: Severity,
    pub interpretation: String,
}

pub const OVERALL_QUALITY_RULE: &str = "Overall Quality Assessment";

impl QualityCheckResult {
    pub fn overall_pass() -> Self {
        Self {
            rule: OVERALL_QUALITY_RULE,
            expected: None,
            actual: None,
            deviation: None,
            severity: Severity::Pass,
            interpretation: "No internal consistency issues detected.".to_string(),
        }
    }
}
