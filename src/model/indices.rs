use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndexValue {
    Number(f64),
    Text(String),
}

impl IndexValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            IndexValue::Number(v) => Some(*v),
            IndexValue::Text(_) => None,
        }
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Number(v) => write!(f, "{v}"),
            IndexValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedIndex {
    pub value: IndexValue,
    pub formula: &'static str,
    pub interpretation: String,
    pub note: &'static str,
}

impl CalculatedIndex {
    pub fn number(value: f64, formula: &'static str, interpretation: String, note: &'static str) -> Self {
        Self {
            value: IndexValue::Number(value),
            formula,
            interpretation,
            note,
        }
    }

    pub fn text(value: &str, formula: &'static str, interpretation: String, note: &'static str) -> Self {
        Self {
            value: IndexValue::Text(value.to_string()),
            formula,
            interpretation,
            note,
        }
    }
}

/// Keyed by display name, e.g. "Anion Gap".
pub type IndexMap = BTreeMap<String, CalculatedIndex>;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
