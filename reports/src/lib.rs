//! # cyclelens-report
//!
//! Leptos SSR renderer for exported circular-dependency diagnoses.
//!
//! This crate owns the [`types::DiagnosticReport`] data model and turns one
//! report into a single self-contained HTML page: inline CSS, inline SVG,
//! no scripts and no external resources, so the file can be mailed around
//! or printed as is.
//!
//! ## Quick Start
//!
//! ```rust
//! use cyclelens_report::{render_diagnostic, DocumentOptions, types::DiagnosticReport};
//!
//! let report = DiagnosticReport {
//!     cycle_id: "app-utils".into(),
//!     ..Default::default()
//! };
//! let options = DocumentOptions {
//!     project_name: "my-monorepo".into(),
//!     dark_mode: false,
//! };
//!
//! let html = render_diagnostic(&report, &options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for report content
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation
//! through Leptos 0.8's `RenderHtml` trait. Text and attribute values are
//! escaped by Leptos; the SVG diagram is escaped by its renderer and embedded
//! as raw markup.

#![doc(html_root_url = "https://docs.rs/cyclelens-report/0.1.0")]

pub mod components;
pub mod styles;
pub mod types;

use components::DiagnosticDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::DiagnosticReport;

/// Page-level options that are not part of the report itself.
#[derive(Clone, Default, Debug)]
pub struct DocumentOptions {
    /// Shown in the page title and header
    pub project_name: String,
    /// Start in the dark palette instead of following the viewer's preference
    pub dark_mode: bool,
}

/// Render a complete HTML page for one diagnostic report.
///
/// Returns a full document including `<!DOCTYPE html>`.
///
/// ```rust
/// use cyclelens_report::{render_diagnostic, DocumentOptions, types::DiagnosticReport};
///
/// let html = render_diagnostic(&DiagnosticReport::default(), &DocumentOptions::default());
/// assert!(html.contains("@media print"));
/// ```
pub fn render_diagnostic(report: &DiagnosticReport, options: &DocumentOptions) -> String {
    let doc = view! {
        <DiagnosticDocument report=report.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
