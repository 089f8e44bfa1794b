//! Error type shared by the diagnostic and serializer pipelines.
//!
//! Missing optional upstream data is never an error: every section builder
//! has a documented fallback. What remains are genuinely unusable inputs and
//! the serializer's fail-fast format check.

use thiserror::Error;

/// Errors surfaced by report generation and export.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The cycle has no packages once normalized.
    #[error("cannot diagnose an empty cycle")]
    EmptyCycle,

    /// The requested output format is not one of json, html, markdown.
    #[error("unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// A section name that `ReportSections` does not know.
    #[error("unknown report section: {0}")]
    UnknownSection(String),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
