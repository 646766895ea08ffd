use std::collections::BTreeMap;

use crate::model::differential::{DifferentialBundle, lookup_bundle};
use crate::model::result::{Finding, ParameterResult};
use crate::model::status::Status;
use crate::panels::Panel;
use crate::pipeline::stage1_classify::Stage1Output;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage2Output {
    pub parameters: BTreeMap<String, ParameterResult>,
    pub abnormalities: Vec<Finding>,
    pub critical_values: Vec<Finding>,
}

/// Bundle for the direction of `status`; `critical_*` shares the bundle of
/// its plain tier. Normal and unknown never resolve.
pub fn get_differential(
    panel: Panel,
    name: &str,
    status: Status,
) -> Option<&'static DifferentialBundle> {
    let direction = status.direction()?;
    lookup_bundle(panel.tables().differentials, name, direction)
}

pub fn run_stage2(panel: Panel, stage1: &Stage1Output) -> Stage2Output {
    let tables = panel.tables();
    let mut out = Stage2Output::default();

    for (name, classified) in &stage1.classified {
        let classification = &classified.classification;
        let status = classification.status;
        let differential = get_differential(panel, name, status);
        let unit = if classified.input.unit.is_empty() {
            classification.unit.clone()
        } else {
            classified.input.unit.clone()
        };

        if status.is_abnormal() {
            let finding = Finding {
                parameter: name.clone(),
                value: classified.input.value.clone(),
                unit: unit.clone(),
                status,
                message: classification.message.clone(),
                differential,
            };
            if status.is_critical() {
                tracing::warn!(panel = panel.id(), parameter = %name, message = %classification.message, "critical value");
                out.critical_values.push(finding.clone());
            }
            out.abnormalities.push(finding);
        }

        out.parameters.insert(
            name.clone(),
            ParameterResult {
                value: classified.input.value.clone(),
                unit,
                classification: classification.clone(),
                differential,
                learning: tables.learning_for(name),
            },
        );
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_differential.rs"]
mod tests;
