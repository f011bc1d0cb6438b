//! Markdown rendering of an assembled report, for previews and text
//! hand-off. Byte-level PDF rendering is a downstream collaborator's job.

use ddr_types::DiagnosticReport;

/// Renders the report as a numbered markdown document.
pub fn render_markdown(report: &DiagnosticReport) -> String {
    let mut lines: Vec<String> = vec![
        "# Detailed Diagnostic Report".to_string(),
        String::new(),
        "## 1. Property Issue Summary".to_string(),
    ];
    lines.extend(bullets(&report.property_issue_summary));

    lines.push("\n## 2. Area-wise Observations".to_string());
    for (area, items) in &report.area_wise_observations {
        lines.push(format!("### {area}"));
        lines.extend(bullets(items));
    }

    lines.push("\n## 3. Probable Root Cause".to_string());
    lines.extend(bullets(&report.probable_root_cause));

    lines.push("\n## 4. Severity Assessment (with reasoning)".to_string());
    lines.push(format!(
        "- Severity Level: {}",
        report.severity_assessment.level
    ));
    lines.push(format!(
        "- Reasoning: {}",
        report.severity_assessment.reasoning
    ));

    lines.push("\n## 5. Recommended Actions".to_string());
    lines.extend(bullets(&report.recommended_actions));

    lines.push("\n## 6. Additional Notes".to_string());
    lines.extend(bullets(&report.additional_notes));

    lines.push("\n## 7. Missing or Unclear Information".to_string());
    lines.extend(bullets(&report.missing_or_unclear_information));

    lines.push("\n## 8. Conflicts".to_string());
    lines.extend(bullets(&report.conflicts));

    lines.push("\n## 9. Confidence Scores".to_string());
    lines.push(format!(
        "- Extraction: {:.2}",
        report.confidence_scores.extraction
    ));
    lines.push(format!(
        "- Completeness: {:.2}",
        report.confidence_scores.completeness
    ));
    lines.push(format!(
        "- Consistency: {:.2}",
        report.confidence_scores.consistency
    ));

    lines.join("\n") + "\n"
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("- {item}")).collect()
}
