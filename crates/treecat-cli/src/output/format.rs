use std::path::Path;

use treecat_core::CollectReport;

use super::OutputFormat;

pub fn format_report(report: &CollectReport, output_path: &Path, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_report_text(report, output_path),
    }
}

fn format_report_text(report: &CollectReport, output_path: &Path) -> String {
    let mut out = format!(
        "Wrote {} ({} file(s), {} bytes)",
        output_path.display(),
        report.files_written,
        report.bytes_written
    );
    if report.read_errors > 0 {
        out.push_str(&format!(
            "\n  {} file(s) could not be read as text",
            report.read_errors
        ));
    }
    out
}
