//! Self-contained HTML export of a diagnostic report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::Result;
use cyclelens_report::types::DiagnosticReport;
use cyclelens_report::{DocumentOptions, render_diagnostic};

/// Bytes plus the file name they should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub content: Vec<u8>,
    pub filename: String,
}

impl ExportedFile {
    /// Persist into `dir`, creating it when missing.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        info!(path = %path.display(), bytes = self.content.len(), "wrote export");
        Ok(path)
    }
}

/// Replace anything that is not safe in a file name with `-`.
pub fn sanitize_filename_segment(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '-');
    if cleaned.is_empty() {
        "project".to_string()
    } else {
        cleaned.to_string()
    }
}

/// `{project}-diagnostic-{cycleId}-{YYYY-MM-DD}.html`
pub fn diagnostic_filename(project_name: &str, cycle_id: &str, date: &str) -> String {
    format!(
        "{}-diagnostic-{}-{date}.html",
        sanitize_filename_segment(project_name),
        sanitize_filename_segment(cycle_id)
    )
}

pub fn export_diagnostic_html(
    report: &DiagnosticReport,
    project_name: &str,
    dark_mode: bool,
) -> ExportedFile {
    let html = render_diagnostic(
        report,
        &DocumentOptions {
            project_name: project_name.to_string(),
            dark_mode,
        },
    );
    let date = Utc::now().format("%Y-%m-%d").to_string();
    ExportedFile {
        filename: diagnostic_filename(project_name, &report.cycle_id, &date),
        content: html.into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_pattern() {
        assert_eq!(
            diagnostic_filename("acme", "a-b-c", "2024-05-01"),
            "acme-diagnostic-a-b-c-2024-05-01.html"
        );
    }

    #[test]
    fn unsafe_project_names_are_sanitized() {
        assert_eq!(sanitize_filename_segment("../../etc/passwd"), "etc-passwd");
        assert_eq!(sanitize_filename_segment("my app"), "my-app");
        assert_eq!(sanitize_filename_segment("<script>"), "script");
        assert_eq!(sanitize_filename_segment("   "), "project");
    }

    #[test]
    fn export_renders_html_page() {
        let report = DiagnosticReport {
            cycle_id: "a-b".into(),
            ..Default::default()
        };
        let file = export_diagnostic_html(&report, "acme", true);
        let html = String::from_utf8(file.content).expect("utf8");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@media print"));
        assert!(file.filename.starts_with("acme-diagnostic-a-b-"));
        assert!(file.filename.ends_with(".html"));
    }

    #[test]
    fn write_to_creates_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = ExportedFile {
            content: b"<html></html>".to_vec(),
            filename: "x.html".into(),
        };
        let path = file.write_to(&dir.path().join("nested")).expect("write");
        assert_eq!(fs::read(path).expect("read"), b"<html></html>");
    }
}
