//! # cyclelens
//!
//! **Explainable circular dependency diagnoses** for monorepos, plus
//! shareable analysis reports.
//!
//! cyclelens does not detect cycles itself. It takes what a detection engine
//! already found (the dependency graph and the list of cycles) and explains
//! one cycle in depth: where it starts, which edge to cut, how to fix it,
//! who else is affected and which other cycles should be fixed at the same
//! time.
//!
//! ## Features
//!
//! - **Diagnostic reports** - Executive summary, cycle diagram (SVG + ASCII),
//!   root cause, fix strategies, blast radius and related cycles
//! - **Self-contained HTML export** - Inline CSS and SVG, printable
//! - **Analysis reports** - JSON, HTML or Markdown with per-section toggles
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use cyclelens::diagnostic::{DiagnosticRequest, generate_diagnostic_report};
//! use cyclelens::types::{CircularDependencyInfo, DependencyGraph};
//!
//! let graph = DependencyGraph::from_edges([("a", "b"), ("b", "a"), ("app", "a")]);
//! let cycles = vec![CircularDependencyInfo {
//!     cycle: vec!["a".into(), "b".into(), "a".into()],
//!     ..Default::default()
//! }];
//!
//! let report = generate_diagnostic_report(&DiagnosticRequest::new(&cycles[0], &graph, &cycles))
//!     .expect("non-empty cycle");
//! assert_eq!(report.cycle_id, "a-b");
//! assert_eq!(report.impact.indirect_dependents, vec!["app".to_string()]);
//! ```
//!
//! ## Serializing Analysis Results
//!
//! ```rust
//! use cyclelens::report::{ReportOptions, build_report_data, generate_report};
//! use cyclelens::types::AnalysisResult;
//!
//! let data = build_report_data(&AnalysisResult {
//!     project_name: Some("acme".into()),
//!     health_score: 92.0,
//!     ..Default::default()
//! });
//! let result = generate_report(&data, &ReportOptions::for_format("markdown")?)?;
//! assert!(result.filename.ends_with(".md"));
//! # Ok::<(), cyclelens::error::ReportError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! cyclelens diagnose --input bundle.json --cycle 0 --out reports/
//! cyclelens report --input analysis.json --format html --sections health,cycles
//! ```

#![doc(html_root_url = "https://docs.rs/cyclelens/0.1.0")]

pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod graph_query;
pub mod report;
pub mod types;

pub use config::CyclelensConfig;
pub use diagnostic::{DiagnosticRequest, DiagnosticSession, generate_diagnostic_report};
pub use error::{ReportError, Result};
pub use report::{ReportFormat, ReportOptions, ReportResult, generate_report};
