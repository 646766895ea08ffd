pub mod indices;
pub mod stage1_classify;
pub mod stage2_differential;
pub mod stage3_indices;
pub mod stage4_quality;
pub mod stage5_patterns;
pub mod stage6_aggregate;

use std::collections::BTreeMap;

use crate::model::value::{ParameterMap, ParameterValue};
use crate::panels::{Panel, canonical_name};

pub use stage6_aggregate::{analyze, analyze_all, analyze_all_with_context, analyze_with_context};

/// One panel's inputs keyed by canonical parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    entries: BTreeMap<String, ParameterValue>,
}

impl Measurements {
    /// Resolves aliases against `panel`. When both an alias and the canonical
    /// key are supplied, the canonical entry wins.
    pub fn canonicalize(panel: Panel, parameters: &ParameterMap) -> Self {
        let mut entries = BTreeMap::new();
        let mut aliased = Vec::new();
        for (name, value) in parameters {
            let canonical = canonical_name(panel, name);
            if canonical == name.as_str() {
                entries.insert(canonical.to_string(), value.clone());
            } else {
                aliased.push((canonical.to_string(), value.clone()));
            }
        }
        for (name, value) in aliased {
            entries.entry(name).or_insert(value);
        }
        Self { entries }
    }

    /// Adds entries from a wider map without replacing any already held.
    pub fn supplemented(mut self, panel: Panel, supporting: &ParameterMap) -> Self {
        for (name, value) in Self::canonicalize(panel, supporting).entries {
            self.entries.entry(name).or_insert(value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|p| p.value.as_number())
    }

    /// Numeric and strictly positive; the guard for divisors.
    pub fn positive(&self, name: &str) -> Option<f64> {
        self.number(name).filter(|v| *v > 0.0)
    }

    /// Lower-cased, trimmed text of the value, numeric or not.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|p| p.value.as_text().trim().to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/measurements.rs"]
mod tests;
