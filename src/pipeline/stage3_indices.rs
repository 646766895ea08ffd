use crate::model::indices::IndexMap;
use crate::model::value::Sex;
use crate::panels::Panel;
use crate::pipeline::Measurements;
use crate::pipeline::indices::{cbc, kft, lft, lipid, oncology, sugar};

pub struct Stage3Inputs<'a> {
    pub panel: Panel,
    pub measurements: &'a Measurements,
    pub sex: Sex,
}

pub fn run_stage3(inputs: Stage3Inputs<'_>) -> IndexMap {
    let m = inputs.measurements;
    let mut out = IndexMap::new();
    match inputs.panel {
        Panel::Cbc => cbc::compute(m, &mut out),
        Panel::Lft => lft::compute(m, inputs.sex, &mut out),
        Panel::Kft => kft::compute(m, &mut out),
        Panel::Lipid => lipid::compute(m, &mut out),
        Panel::Sugar => sugar::compute(m, &mut out),
        Panel::Oncology => oncology::compute(m, &mut out),
        Panel::Urine | Panel::Tft | Panel::Rheumatology => {}
    }
    tracing::debug!(panel = inputs.panel.id(), indices = out.len(), "indices computed");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_indices.rs"]
mod tests;
