use crate::model::value::{ParameterMap, ParameterValue};

/// Caller-owned accumulation of parameters across uploads or manual edits.
/// The engine never holds one; pass `parameters()` into `analyze`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    parameters: ParameterMap,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing entry of the same name; returns the old one.
    pub fn insert(&mut self, name: &str, value: ParameterValue) -> Option<ParameterValue> {
        self.parameters.insert(name.trim().to_string(), value)
    }

    /// Entry-wise overwrite. Value and unit are never mixed between the
    /// old and the new entry.
    pub fn merge(&mut self, other: &ParameterMap) {
        for (name, value) in other {
            self.insert(name, value.clone());
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.parameters.remove(name.trim())
    }

    pub fn clear(&mut self) {
        self.parameters.clear();
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &ParameterMap {
        &self.parameters
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
