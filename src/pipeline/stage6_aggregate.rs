use std::collections::BTreeMap;

use crate::model::context::ClinicalContext;
use crate::model::result::PanelAnalysisResult;
use crate::model::value::{ParameterMap, Sex};
use crate::panels::{Panel, find_panel_for_parameter};
use crate::pipeline::Measurements;
use crate::pipeline::stage1_classify::run_stage1;
use crate::pipeline::stage2_differential::run_stage2;
use crate::pipeline::stage3_indices::{Stage3Inputs, run_stage3};
use crate::pipeline::stage4_quality::run_stage4;
use crate::pipeline::stage5_patterns::{Stage5Inputs, run_stage5};

/// Runs every stage for one panel. Pure: the same map and sex always give
/// the same result.
pub fn analyze(panel: Panel, parameters: &ParameterMap, sex: Sex) -> PanelAnalysisResult {
    analyze_with_context(panel, parameters, sex, &ClinicalContext::default())
}

pub fn analyze_with_context(
    panel: Panel,
    parameters: &ParameterMap,
    sex: Sex,
    context: &ClinicalContext,
) -> PanelAnalysisResult {
    analyze_panel(panel, parameters, parameters, sex, context)
}

/// `owned` is what gets classified. Indices, quality rules and patterns also
/// see `supporting`, so a formula can use a value another panel owns.
fn analyze_panel(
    panel: Panel,
    owned: &ParameterMap,
    supporting: &ParameterMap,
    sex: Sex,
    context: &ClinicalContext,
) -> PanelAnalysisResult {
    let classified = Measurements::canonicalize(panel, owned);
    let stage1 = run_stage1(panel, &classified, sex);
    let stage2 = run_stage2(panel, &stage1);

    let measurements = classified.supplemented(panel, supporting);
    let calculated_indices = run_stage3(Stage3Inputs {
        panel,
        measurements: &measurements,
        sex,
    });
    let quality_checks = run_stage4(panel, &measurements, sex);
    let stage5 = run_stage5(Stage5Inputs {
        panel,
        measurements: &measurements,
        sex,
        stage2: &stage2,
        indices: &calculated_indices,
        context,
    });

    let result = PanelAnalysisResult {
        panel,
        sex,
        total_parameters: stage2.parameters.len(),
        abnormal_count: stage2.abnormalities.len(),
        critical_count: stage2.critical_values.len(),
        parameters: stage2.parameters,
        abnormalities: stage2.abnormalities,
        critical_values: stage2.critical_values,
        quality_checks,
        calculated_indices,
        pattern_summary: stage5.pattern_summary,
        educational_content: stage5.educational_content,
        recommendations: stage5.recommendations,
        pathway: stage5.pathway,
        severity_table: stage5.severity_table,
        skipped: stage1.skipped,
    };

    tracing::info!(
        panel = panel.id(),
        parameters = result.total_parameters,
        abnormal = result.abnormal_count,
        critical = result.critical_count,
        indices = result.calculated_indices.len(),
        inputs = measurements.len(),
        "panel analyzed"
    );
    result
}

/// Splits a mixed map by owning panel and analyzes each non-empty panel in
/// registry order.
pub fn analyze_all(parameters: &ParameterMap, sex: Sex) -> Vec<PanelAnalysisResult> {
    analyze_all_with_context(parameters, sex, &ClinicalContext::default())
}

pub fn analyze_all_with_context(
    parameters: &ParameterMap,
    sex: Sex,
    context: &ClinicalContext,
) -> Vec<PanelAnalysisResult> {
    let mut grouped: BTreeMap<Panel, ParameterMap> = BTreeMap::new();
    for (name, value) in parameters {
        grouped
            .entry(find_panel_for_parameter(name))
            .or_default()
            .insert(name.clone(), value.clone());
    }
    Panel::all()
        .iter()
        .filter_map(|panel| {
            grouped
                .get(panel)
                .map(|owned| analyze_panel(*panel, owned, parameters, sex, context))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_aggregate.rs"]
mod tests;
