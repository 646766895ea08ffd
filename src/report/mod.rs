pub mod json;
pub mod text;
pub mod tsv;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::result::PanelAnalysisResult;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::tsv::render_parameters_tsv;

pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";
pub const PARAMETERS_FILE: &str = "parameters.tsv";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `summary.json`, `report.txt` and `parameters.tsv` into `out_dir`.
pub fn write_reports(result: &PanelAnalysisResult, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    write_text(&out_dir.join(SUMMARY_FILE), &render_summary_json(result)?)?;
    write_text(&out_dir.join(REPORT_FILE), &render_report_text(result))?;
    write_text(&out_dir.join(PARAMETERS_FILE), &render_parameters_tsv(result))?;
    tracing::info!(panel = result.panel.id(), out = %out_dir.display(), "reports written");
    Ok(())
}

/// One subdirectory per panel, named by panel id.
pub fn write_all_reports(
    results: &[PanelAnalysisResult],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    let mut dirs = Vec::with_capacity(results.len());
    for result in results {
        let dir = out_dir.join(result.panel.id());
        write_reports(result, &dir)?;
        dirs.push(dir);
    }
    Ok(dirs)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

pub fn format_optional(v: Option<f64>) -> String {
    v.map(|v| format!("{v}")).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
