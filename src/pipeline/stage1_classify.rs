use std::collections::BTreeMap;

use crate::model::reference::{QualitativeDef, ReferenceRange, lookup_qualitative, lookup_range};
use crate::model::status::{Classification, Status};
use crate::model::value::{ParameterValue, Sex, Value};
use crate::panels::Panel;
use crate::pipeline::Measurements;

pub const NO_REFERENCE_MESSAGE: &str = "No reference range available";

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedParameter {
    pub input: ParameterValue,
    pub classification: Classification,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage1Output {
    pub classified: BTreeMap<String, ClassifiedParameter>,
    /// Text values for parameters that only have a numeric range.
    pub skipped: Vec<String>,
}

pub fn get_reference_range(panel: Panel, name: &str, sex: Sex) -> Option<ReferenceRange> {
    lookup_range(panel.tables().ranges, name, sex)
}

/// Classifies one value against `panel`'s tables.
///
/// Returns `None` only when the parameter has a numeric range but the value
/// is text that does not parse as a number; such values are skipped rather
/// than reported. A number given for a parameter with only qualitative terms
/// is unknown.
pub fn classify(panel: Panel, name: &str, value: &Value, sex: Sex) -> Option<Classification> {
    let tables = panel.tables();
    let range = get_reference_range(panel, name, sex);
    if let (Some(range), Some(v)) = (range.as_ref(), value.as_number()) {
        return Some(classify_numeric(v, range));
    }
    if range.is_none() && matches!(value, Value::Numeric(_)) {
        return Some(unknown(value));
    }
    if let Some(def) = lookup_qualitative(tables.qualitative, name) {
        return Some(classify_qualitative(value, def));
    }
    if range.is_some() {
        return None;
    }
    Some(unknown(value))
}

/// Strict inequalities throughout: bounds themselves classify one tier
/// healthier. Absent critical bounds never fire.
pub fn classify_numeric(v: f64, range: &ReferenceRange) -> Classification {
    let status = if range.critical_low.is_some_and(|cl| v < cl) {
        Status::CriticalLow
    } else if range.critical_high.is_some_and(|ch| v > ch) {
        Status::CriticalHigh
    } else if v < range.low {
        Status::Low
    } else if v > range.high {
        Status::High
    } else {
        Status::Normal
    };
    let prefix = match status {
        Status::CriticalLow => "CRITICAL LOW",
        Status::CriticalHigh => "CRITICAL HIGH",
        Status::Low => "LOW",
        Status::High => "HIGH",
        _ => "NORMAL",
    };
    let shown = if range.unit.is_empty() {
        format!("{v}")
    } else {
        format!("{v} {}", range.unit)
    };
    Classification {
        value: Value::Numeric(v),
        unit: range.unit.to_string(),
        low: Some(range.low),
        high: Some(range.high),
        critical_low: range.critical_low,
        critical_high: range.critical_high,
        status,
        message: format!("{prefix}: {shown} (Ref: {}-{})", range.low, range.high),
        color: status.color(),
    }
}

pub fn classify_qualitative(value: &Value, def: &QualitativeDef) -> Classification {
    let text = value.as_text();
    let lowered = text.trim().to_lowercase();
    let is_normal = def
        .normal_terms
        .iter()
        .any(|term| lowered.contains(&term.to_lowercase()));
    let status = if is_normal {
        Status::Normal
    } else {
        Status::Abnormal
    };
    let message = if is_normal {
        format!("Normal: {text}")
    } else {
        format!("Abnormal: {text}")
    };
    Classification {
        value: value.clone(),
        unit: String::new(),
        low: None,
        high: None,
        critical_low: None,
        critical_high: None,
        status,
        message,
        color: status.color(),
    }
}

fn unknown(value: &Value) -> Classification {
    Classification {
        value: value.clone(),
        unit: String::new(),
        low: None,
        high: None,
        critical_low: None,
        critical_high: None,
        status: Status::Unknown,
        message: NO_REFERENCE_MESSAGE.to_string(),
        color: Status::Unknown.color(),
    }
}

pub fn run_stage1(panel: Panel, measurements: &Measurements, sex: Sex) -> Stage1Output {
    let mut out = Stage1Output::default();
    for (name, input) in measurements.iter() {
        match classify(panel, name, &input.value, sex) {
            Some(classification) => {
                out.classified.insert(
                    name.to_string(),
                    ClassifiedParameter {
                        input: input.clone(),
                        classification,
                    },
                );
            }
            None => {
                tracing::debug!(panel = panel.id(), parameter = name, value = %input.value, "skipping non-numeric value");
                out.skipped.push(name.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_classify.rs"]
mod tests;
