use serde::Serialize;

use crate::model::result::PanelAnalysisResult;

#[derive(Serialize)]
struct SummaryDocument<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    result: &'a PanelAnalysisResult,
}

pub fn render_summary_json(result: &PanelAnalysisResult) -> Result<String, serde_json::Error> {
    let doc = SummaryDocument {
        tool: "kira-labqc",
        version: env!("CARGO_PKG_VERSION"),
        result,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
