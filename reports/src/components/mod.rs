//! Leptos UI components for the exported diagnostic page.
//!
//! # Component Hierarchy
//!
//! ```text
//! DiagnosticDocument
//! ├── ExecutiveSummaryPanel
//! ├── CyclePathPanel       (embedded SVG + ASCII diagram)
//! ├── RootCausePanel
//! ├── FixStrategiesPanel
//! │   └── StrategyItem
//! ├── ImpactPanel          (recursive ripple tree)
//! └── RelatedCyclesPanel
//! ```
//!
//! Components are normally used through [`crate::render_diagnostic`].

mod cycle_path;
mod document;
mod icons;
mod impact;
mod related;
mod root_cause;
mod strategies;
mod summary;

pub use cycle_path::CyclePathPanel;
pub use document::DiagnosticDocument;
pub use icons::*;
pub use impact::ImpactPanel;
pub use related::RelatedCyclesPanel;
pub use root_cause::RootCausePanel;
pub use strategies::FixStrategiesPanel;
pub use summary::ExecutiveSummaryPanel;
