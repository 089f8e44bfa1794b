//! Diagnostic report data types.
//!
//! These types are the immutable output of the diagnostic pipeline. They're
//! designed to be:
//!
//! - **Serializable** - the whole report is plain data and round-trips through JSON
//! - **Clone-friendly** - components take owned props without borrowing issues
//! - **Default-able** - tests build partial reports with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use cyclelens_report::types::{DiagnosticReport, ExecutiveSummary, Severity};
//!
//! let report = DiagnosticReport {
//!     cycle_id: "core-utils".into(),
//!     summary: ExecutiveSummary {
//!         title: "Circular dependency between 2 packages".into(),
//!         severity: Severity::Critical,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert_eq!(report.summary.severity.as_str(), "critical");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a diagnosed cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed before anything else
    Critical,
    /// Should be fixed soon
    High,
    /// Worth scheduling
    Medium,
    /// Cosmetic
    #[default]
    Low,
}

impl Severity {
    /// Lowercase label used in markup and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Estimated effort to remove a cycle or apply a strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// Minutes of work
    Low,
    /// An hour or two
    #[default]
    Medium,
    /// Half a day or more
    High,
}

impl Effort {
    /// Lowercase label used in markup and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

/// Blast-radius risk of leaving a cycle in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// More than half of the monorepo is affected
    Critical,
    /// A large share of the monorepo, or a core package, is affected
    High,
    /// A noticeable share of the monorepo is affected
    Medium,
    /// Contained
    #[default]
    Low,
}

impl RiskLevel {
    /// Lowercase label used in markup and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// Whether the cycle is a direct two-way dependency or spans several hops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleKind {
    /// `a -> b -> a`
    #[default]
    Direct,
    /// `a -> b -> c -> a` and longer
    Indirect,
}

impl CycleKind {
    /// Lowercase label used in markup and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleKind::Direct => "direct",
            CycleKind::Indirect => "indirect",
        }
    }
}

/// Complete diagnosis of a single circular dependency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    /// `diag-{cycleId}-{epochMillis}`
    pub id: String,
    /// Stable identifier derived from the cycle's package names
    pub cycle_id: String,
    pub generated_at: DateTime<Utc>,
    pub summary: ExecutiveSummary,
    pub visualization: CyclePathVisualization,
    pub root_cause: RootCauseDetails,
    pub fix_strategies: Vec<FixStrategyGuide>,
    pub impact: ImpactAssessmentDetails,
    pub related_cycles: Vec<RelatedCycleInfo>,
    pub metadata: DiagnosticMetadata,
}

/// Headline section of the report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub title: String,
    /// The cycle rendered as `a → b → c → a`
    pub description: String,
    pub severity: Severity,
    pub cycle_kind: CycleKind,
    pub affected_packages: usize,
    pub estimated_effort: Effort,
    pub key_findings: Vec<String>,
    pub recommended_action: String,
}

/// A package placed on the circular layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleNode {
    /// Full package name
    pub id: String,
    /// Final path segment of the package name
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Set on the package root-cause analysis blames
    pub is_origin: bool,
}

/// Source location of the import that creates an edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeTrace {
    pub file: String,
    pub line: u32,
    pub statement: String,
}

/// A dependency edge between two consecutive cycle members.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleEdge {
    pub from: String,
    pub to: String,
    pub is_breaking_point: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<EdgeTrace>,
}

/// The single edge recommended for removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakingPoint {
    pub from: String,
    pub to: String,
    pub reason: String,
    /// Root-cause confidence when the edge came from root-cause analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Cycle geometry together with both rendered diagrams.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePathVisualization {
    pub nodes: Vec<CycleNode>,
    pub edges: Vec<CycleEdge>,
    pub svg: String,
    pub ascii: String,
    pub breaking_point: BreakingPoint,
}

/// Another package that may be the real origin of the cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeCandidate {
    pub package: String,
    pub confidence: f64,
    pub reason: String,
}

/// A file/line pointing at a problematic import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReference {
    pub file: String,
    pub line: u32,
    pub import_statement: String,
}

/// One hop of the causal chain, as surfaced in the report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalStep {
    pub from: String,
    pub to: String,
    pub is_critical: bool,
    pub reason: String,
}

/// Root-cause attribution section.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseDetails {
    pub explanation: String,
    /// 0-100
    pub confidence: f64,
    pub originating_package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problematic_edge: Option<(String, String)>,
    pub causal_chain: Vec<CausalStep>,
    pub alternative_candidates: Vec<AlternativeCandidate>,
    pub code_references: Vec<CodeReference>,
}

/// A numbered step of a fix guide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixStep {
    /// 1-based
    pub order: usize,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
}

/// Import statements before and after applying a strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippets {
    pub before: String,
    pub after: String,
}

/// A fix strategy normalized into a step-by-step guide.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixStrategyGuide {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub effort: Effort,
    /// 0-10
    pub suitability: f64,
    pub estimated_time: String,
    pub steps: Vec<FixStep>,
    pub code_snippets: CodeSnippets,
    pub benefits: Vec<String>,
    pub drawbacks: Vec<String>,
}

/// A package that transitively depends on the cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RippleNode {
    pub package: String,
    /// 0 for cycle members
    pub depth: usize,
    pub dependents: Vec<RippleNode>,
}

impl RippleNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.dependents.iter().map(RippleNode::size).sum::<usize>()
    }
}

/// Blast-radius section.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessmentDetails {
    pub direct_participants: Vec<String>,
    pub indirect_dependents: Vec<String>,
    pub direct_count: usize,
    pub indirect_count: usize,
    pub total_affected_count: usize,
    /// Rounded share of all packages, 0-100
    pub percentage_of_monorepo: u32,
    pub risk_level: RiskLevel,
    pub ripple_effect: Vec<RippleNode>,
}

/// A different cycle that shares packages with the diagnosed one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCycleInfo {
    pub cycle_id: String,
    pub packages: Vec<String>,
    pub shared_packages: Vec<String>,
    /// 0-100
    pub overlap_percentage: u32,
    pub recommend_fix_together: bool,
    pub reason: String,
}

/// Timing and provenance of the report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticMetadata {
    pub generated_at: DateTime<Utc>,
    pub generation_duration_ms: f64,
    pub tool_version: String,
    pub total_packages: usize,
}
