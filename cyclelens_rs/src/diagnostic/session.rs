//! Caller-facing state around report generation and export.
//!
//! Mirrors what a UI holding a diagnostic needs: the current report, a
//! "generating" flag, and the last error of each kind as plain text. A
//! failed generation never leaves a partial report behind.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{DiagnosticRequest, export_diagnostic_html, generate_diagnostic_report};
use cyclelens_report::types::DiagnosticReport;

/// Message used when generation dies without a typed error.
pub const GENERATION_FAILED: &str = "Failed to generate report";

#[derive(Debug, Default)]
pub struct DiagnosticSession {
    report: Option<DiagnosticReport>,
    generating: bool,
    error: Option<String>,
    export_error: Option<String>,
}

impl DiagnosticSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> Option<&DiagnosticReport> {
        self.report.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn export_error(&self) -> Option<&str> {
        self.export_error.as_deref()
    }

    /// Generate a report, replacing whatever the session held.
    pub fn generate(&mut self, request: &DiagnosticRequest<'_>) -> Option<&DiagnosticReport> {
        self.generating = true;
        self.report = None;
        self.error = None;
        self.export_error = None;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| generate_diagnostic_report(request)));
        self.generating = false;

        match outcome {
            Ok(Ok(report)) => {
                self.report = Some(report);
            }
            Ok(Err(err)) => {
                warn!(error = %err, "diagnostic generation failed");
                self.error = Some(err.to_string());
            }
            Err(_) => {
                warn!("diagnostic generation panicked");
                self.error = Some(GENERATION_FAILED.to_string());
            }
        }
        self.report.as_ref()
    }

    /// Export the held report to `dir`. Failures are recorded, not retried.
    pub fn export_to(&mut self, dir: &Path, project_name: &str, dark_mode: bool) -> Option<PathBuf> {
        self.export_error = None;
        let Some(report) = &self.report else {
            self.export_error = Some("No report to export".to_string());
            return None;
        };

        match export_diagnostic_html(report, project_name, dark_mode).write_to(dir) {
            Ok(path) => Some(path),
            Err(err) => {
                warn!(error = %err, "diagnostic export failed");
                self.export_error = Some(err.to_string());
                None
            }
        }
    }

    /// Drop the report and any errors.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CircularDependencyInfo, DependencyGraph};

    fn cycle(items: &[&str]) -> CircularDependencyInfo {
        CircularDependencyInfo {
            cycle: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn successful_generation_holds_report() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all = vec![target.clone()];
        let mut session = DiagnosticSession::new();

        assert!(session.generate(&DiagnosticRequest::new(&target, &graph, &all)).is_some());
        assert!(!session.is_generating());
        assert!(session.error().is_none());
        assert_eq!(session.report().map(|r| r.cycle_id.as_str()), Some("a-b"));
    }

    #[test]
    fn failed_generation_keeps_no_partial_report() {
        let good = cycle(&["a", "b"]);
        let empty = cycle(&[]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let mut session = DiagnosticSession::new();

        session.generate(&DiagnosticRequest::new(&good, &graph, &all));
        assert!(session.report().is_some());

        assert!(session.generate(&DiagnosticRequest::new(&empty, &graph, &all)).is_none());
        assert!(session.report().is_none());
        assert!(!session.is_generating());
        assert_eq!(session.error(), Some("cannot diagnose an empty cycle"));
    }

    #[test]
    fn export_without_report_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = DiagnosticSession::new();
        assert!(session.export_to(dir.path(), "acme", false).is_none());
        assert_eq!(session.export_error(), Some("No report to export"));
    }

    #[test]
    fn export_writes_file() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = DiagnosticSession::new();
        session.generate(&DiagnosticRequest::new(&target, &graph, &all));

        let path = session.export_to(dir.path(), "acme", false).expect("exported");
        assert!(path.exists());
        assert!(session.export_error().is_none());

        session.clear();
        assert!(session.report().is_none());
    }

    #[test]
    fn export_failure_is_textual() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let dir = tempfile::tempdir().expect("tempdir");
        // a regular file where the output directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").expect("write");

        let mut session = DiagnosticSession::new();
        session.generate(&DiagnosticRequest::new(&target, &graph, &all));
        assert!(session.export_to(&blocker, "acme", false).is_none());
        assert!(session.export_error().is_some());
        assert!(session.report().is_some());
    }
}
