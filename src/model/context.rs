use serde::{Deserialize, Serialize};

/// Bedside facts that steer the liver work-up. Every field is optional in
/// the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalContext {
    pub shock: bool,
    pub acute_injury: bool,
    pub hemolysis: bool,
    /// Why the labs were drawn, e.g. `new_finding`, `known_disease`, `routine`.
    pub reason: Option<String>,
}

impl ClinicalContext {
    pub fn is_emergency(&self) -> bool {
        self.shock || self.acute_injury
    }

    /// Known disease or routine monitoring, as opposed to a new finding.
    pub fn is_chronic(&self) -> bool {
        self.reason.as_deref().is_some_and(|reason| {
            let reason = reason.trim();
            reason.eq_ignore_ascii_case("known_disease") || reason.eq_ignore_ascii_case("routine")
        })
    }
}
