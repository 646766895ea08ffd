use crate::model::result::PanelAnalysisResult;
use crate::report::format_optional;

pub const HEADER: &str = "Parameter\tValue\tUnit\tStatus\tReference Low\tReference High";

fn cell(raw: &str) -> String {
    raw.replace(['\t', '\n', '\r'], " ")
}

pub fn render_parameters_tsv(result: &PanelAnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for (name, param) in &result.parameters {
        let c = &param.classification;
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            cell(name),
            cell(&param.value.as_text()),
            cell(&param.unit),
            c.status.as_str(),
            format_optional(c.low),
            format_optional(c.high),
        ));
    }
    out
}
