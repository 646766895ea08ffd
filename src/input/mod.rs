pub mod reader;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::context::ClinicalContext;
use crate::model::value::{ParameterMap, ParameterValue, Sex, Value};

pub use reader::open_maybe_gz;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    unit: String,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    parameters: BTreeMap<String, RawParameter>,
    #[serde(default)]
    context: ClinicalContext,
}

/// A loaded lab document: patient sex plus the non-null parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LabInput {
    pub sex: Sex,
    pub parameters: ParameterMap,
    /// Names whose value was null in the document.
    pub dropped: Vec<String>,
    pub context: ClinicalContext,
}

pub fn parse_document(reader: impl Read, sex_override: Option<Sex>) -> Result<LabInput, InputError> {
    let raw: RawDocument = serde_json::from_reader(reader)?;

    let mut parameters = ParameterMap::new();
    let mut dropped = Vec::new();
    for (name, param) in raw.parameters {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(InputError::InvalidInput(
                "parameter with empty name".to_string(),
            ));
        }
        match param.value {
            Some(value) => {
                parameters.insert(
                    name,
                    ParameterValue {
                        value,
                        unit: param.unit,
                    },
                );
            }
            None => dropped.push(name),
        }
    }

    let sex = sex_override
        .or_else(|| raw.sex.as_deref().map(Sex::parse))
        .unwrap_or_default();

    Ok(LabInput {
        sex,
        parameters,
        dropped,
        context: raw.context,
    })
}

/// Loads `path` (plain or `.gz` JSON). `sex_override` wins over the
/// document's own `sex` field.
pub fn load_input(path: &Path, sex_override: Option<Sex>) -> Result<LabInput, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = open_maybe_gz(path)?;
    let input = parse_document(reader, sex_override)?;
    tracing::info!(
        path = %path.display(),
        parameters = input.parameters.len(),
        dropped = input.dropped.len(),
        sex = input.sex.as_str(),
        "input loaded"
    );
    if input.parameters.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} contains no parameters with values",
            path.display()
        )));
    }
    Ok(input)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
