use crate::model::result::{Finding, PanelAnalysisResult};

fn push_findings(out: &mut String, findings: &[Finding], with_differential: bool) {
    if findings.is_empty() {
        out.push_str("None\n");
        return;
    }
    for f in findings {
        out.push_str(&format!("- {}: {}\n", f.parameter, f.message));
        if !with_differential {
            continue;
        }
        if let Some(bundle) = f.differential {
            out.push_str(&format!("  {}\n", bundle.title));
            for dx in bundle.differentials {
                out.push_str(&format!("    * {}: {}\n", dx.condition, dx.discussion));
            }
        }
    }
}

pub fn render_report_text(result: &PanelAnalysisResult) -> String {
    let mut out = String::new();

    let title = format!("{} Laboratory Analysis Report", result.panel.name());
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("Sex: {}\n", result.sex.as_str()));
    out.push_str(&format!(
        "Parameters: {}  Abnormal: {}  Critical: {}\n\n",
        result.total_parameters, result.abnormal_count, result.critical_count
    ));

    out.push_str("1. Parameters\n");
    for (name, p) in &result.parameters {
        let unit = if p.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", p.unit)
        };
        out.push_str(&format!(
            "{name}: {}{unit} [{}] {}\n",
            p.value,
            p.classification.status.as_str(),
            p.classification.message
        ));
    }
    if !result.skipped.is_empty() {
        out.push_str(&format!(
            "Skipped (non-numeric): {}\n",
            result.skipped.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("2. Critical values\n");
    push_findings(&mut out, &result.critical_values, false);
    out.push('\n');

    out.push_str("3. Abnormal findings\n");
    push_findings(&mut out, &result.abnormalities, true);
    out.push('\n');

    out.push_str("4. Calculated indices\n");
    if result.calculated_indices.is_empty() {
        out.push_str("None\n");
    }
    for (name, idx) in &result.calculated_indices {
        out.push_str(&format!(
            "{name}: {} ({}) {}\n",
            idx.value, idx.formula, idx.interpretation
        ));
    }
    out.push('\n');

    out.push_str("5. Quality checks\n");
    for check in &result.quality_checks {
        out.push_str(&format!(
            "[{}] {}: {}\n",
            check.severity.as_str(),
            check.rule,
            check.interpretation
        ));
    }
    out.push('\n');

    out.push_str("6. Pattern summary\n");
    out.push_str(&result.pattern_summary);
    out.push_str("\n\n");
    if !result.severity_table.is_empty() {
        out.push_str("Severity vs ULN\n");
        for row in &result.severity_table {
            let fold = row
                .fold_uln
                .map(|f| format!("{f}x"))
                .unwrap_or_else(|| "-".to_string());
            let status = if row.elevated { "ELEVATED" } else { "Normal" };
            out.push_str(&format!(
                "{}: {} (ULN {}) {status} {fold}\n",
                row.parameter, row.value, row.uln
            ));
        }
        out.push('\n');
    }
    if let Some(pathway) = &result.pathway {
        let marker = if pathway.emergency { " [EMERGENCY]" } else { "" };
        out.push_str(&format!("Pathway: {}{marker}\n", pathway.title));
        for step in &pathway.steps {
            out.push_str(&format!("- {step}\n"));
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        out.push_str("7. Recommendations\n");
        for rec in &result.recommendations {
            out.push_str(&format!("- {}: {}\n", rec.title, rec.description));
        }
        out.push('\n');
    }

    out.push_str("Learning\n");
    out.push_str(&result.educational_content);
    out.push('\n');
    out
}
