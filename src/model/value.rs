use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference-range partition key. `Default` doubles as the fallback bucket.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Default,
}

impl Sex {
    pub fn parse(raw: &str) -> Sex {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            _ => Sex::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Default => "Default",
        }
    }
}

/// A measured value: numeric, or a qualitative report string such as a
/// dipstick reading or an antibody titer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(f64),
    Qualitative(String),
}

impl Value {
    /// Numeric view of the value. Text that parses as a finite number counts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Numeric(v) if v.is_finite() => Some(*v),
            Value::Numeric(_) => None,
            Value::Qualitative(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Value::Numeric(v) => format!("{v}"),
            Value::Qualitative(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(v) => write!(f, "{v}"),
            Value::Qualitative(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Numeric(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Qualitative(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: Value,
    #[serde(default)]
    pub unit: String,
}

impl ParameterValue {
    pub fn new(value: impl Into<Value>, unit: &str) -> Self {
        Self {
            value: value.into(),
            unit: unit.to_string(),
        }
    }
}

/// Input to one panel analysis, keyed by parameter name.
pub type ParameterMap = BTreeMap<String, ParameterValue>;
