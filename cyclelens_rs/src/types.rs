//! Input contracts produced by the upstream detection engine.
//!
//! cyclelens never builds these itself: the dependency graph and the list of
//! detected cycles arrive as JSON and are read-only for the duration of one
//! report. Field names follow the upstream camelCase JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use cyclelens_report::types::{CycleKind, Effort, RiskLevel, RippleNode};

/// Severity label attached by the detection engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Critical,
    #[default]
    Warning,
    Info,
    /// Anything the engine may add later
    #[serde(other)]
    Other,
}

/// A directed `from -> to` pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
}

impl EdgeRef {
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }
}

/// One hop of the causal chain built by root-cause analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalLink {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub is_critical: bool,
    #[serde(default)]
    pub reason: String,
}

/// Upstream root-cause attribution for a cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseAnalysis {
    pub originating_package: String,
    pub problematic_edge: EdgeRef,
    /// 0-100
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub chain: Vec<CausalLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_edge: Option<EdgeRef>,
}

/// A single step of an upstream fix guide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_after: Option<String>,
}

/// Step-by-step guide attached to a strategy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyGuide {
    #[serde(default)]
    pub steps: Vec<GuideStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// Import statements before and after applying a strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDiff {
    #[serde(default)]
    pub before: Vec<String>,
    #[serde(default)]
    pub after: Vec<String>,
}

/// A fix strategy proposed by the detection engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixStrategy {
    /// e.g. `extract-shared`, `dependency-inversion`, `merge-packages`
    #[serde(rename = "type", default)]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effort: Effort,
    /// 0-10
    #[serde(default)]
    pub suitability: f64,
    /// Overrides the cycle's priority score when ranking recommendations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub drawbacks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide: Option<StrategyGuide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_diff: Option<ImportDiff>,
}

/// Location of the import statement behind one cycle edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTrace {
    pub from: String,
    pub to: String,
    pub file: String,
    pub line: u32,
    pub statement: String,
}

/// Impact data precomputed upstream; trusted as is when present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    #[serde(default)]
    pub direct_participants: Vec<String>,
    #[serde(default)]
    pub indirect_dependents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripple_effect: Option<Vec<RippleNode>>,
}

/// One detected circular dependency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularDependencyInfo {
    /// Open (`[a,b,c]`) or closed (`[a,b,c,a]`) package sequence
    pub cycle: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: CycleKind,
    #[serde(default)]
    pub severity: FindingSeverity,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub complexity: f64,
    #[serde(default)]
    pub priority_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<RootCauseAnalysis>,
    #[serde(default)]
    pub fix_strategies: Vec<FixStrategy>,
    #[serde(default)]
    pub import_traces: Vec<ImportTrace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_assessment: Option<ImpactAssessment>,
}

impl CircularDependencyInfo {
    /// The cycle without its closing repeat of the first package.
    pub fn packages(&self) -> &[String] {
        normalize_cycle(&self.cycle)
    }

    /// Import trace recorded for the `from -> to` edge, if any.
    pub fn trace_for(&self, from: &str, to: &str) -> Option<&ImportTrace> {
        self.import_traces
            .iter()
            .find(|t| t.from == from && t.to == to)
    }
}

/// Drop a trailing element equal to the first (closed-loop representation).
pub fn normalize_cycle(cycle: &[String]) -> &[String] {
    match (cycle.first(), cycle.last()) {
        (Some(first), Some(last)) if cycle.len() > 1 && first == last => &cycle[..cycle.len() - 1],
        _ => cycle,
    }
}

/// Final path segment of a package name: `@acme/utils` -> `utils`.
pub fn short_name(package: &str) -> &str {
    package.rsplit('/').next().unwrap_or(package)
}

/// Dependency section an edge comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    #[default]
    Dependencies,
    DevDependencies,
    PeerDependencies,
    OptionalDependencies,
    #[serde(other)]
    Other,
}

/// A package in the workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// `from` depends on `to`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type", default)]
    pub kind: DependencyKind,
    #[serde(default)]
    pub version_range: String,
}

/// Workspace dependency graph. Read-only input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub nodes: BTreeMap<String, PackageNode>,
    #[serde(default)]
    pub edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    /// Build a graph from `(from, to)` pairs; handy for fixtures and tests.
    pub fn from_edges<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = DependencyGraph::default();
        for (from, to) in pairs {
            for name in [from, to] {
                graph
                    .nodes
                    .entry(name.to_string())
                    .or_insert_with(|| PackageNode {
                        name: name.to_string(),
                        ..Default::default()
                    });
            }
            if let Some(node) = graph.nodes.get_mut(from) {
                node.dependencies.push(to.to_string());
            }
            graph.edges.push(DependencyEdge {
                from: from.to_string(),
                to: to.to_string(),
                kind: DependencyKind::Dependencies,
                version_range: "workspace:*".to_string(),
            });
        }
        graph
    }
}

/// Input file of `cyclelens diagnose`: the graph plus every detected cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticBundle {
    #[serde(default)]
    pub graph: DependencyGraph,
    #[serde(default)]
    pub cycles: Vec<CircularDependencyInfo>,
    /// Falls back to the number of graph nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_packages: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl DiagnosticBundle {
    pub fn total_packages(&self) -> usize {
        self.total_packages.unwrap_or(self.graph.nodes.len())
    }
}

// ============================================================================
// Analysis results consumed by the report serializer
// ============================================================================

/// A package resolved to several incompatible versions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConflict {
    #[serde(rename = "packageName", alias = "package")]
    pub package: String,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub severity: FindingSeverity,
    #[serde(default)]
    pub affected_packages: Vec<String>,
}

/// One weighted factor of the health score.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthFactor {
    pub name: String,
    /// 0-100
    pub score: f64,
    /// 0-1
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

fn default_weight() -> f64 {
    1.0
}

/// Structured health score with its factor breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreDetails {
    pub overall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub factors: Vec<HealthFactor>,
}

/// The comprehensive shape carries either a bare number or a structured score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthScoreInput {
    Score(f64),
    Detailed(HealthScoreDetails),
}

impl Default for HealthScoreInput {
    fn default() -> Self {
        HealthScoreInput::Score(100.0)
    }
}

/// Legacy analysis result shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub total_packages: usize,
    #[serde(default)]
    pub health_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_factors: Option<Vec<HealthFactor>>,
    #[serde(default)]
    pub circular_dependencies: Vec<CircularDependencyInfo>,
    #[serde(default)]
    pub version_conflicts: Vec<VersionConflict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
}

/// Provenance block of the comprehensive shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub project_name: String,
    #[serde(default)]
    pub total_packages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_duration_ms: Option<f64>,
}

/// Current analysis result shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAnalysisResult {
    pub metadata: AnalysisMetadata,
    #[serde(default)]
    pub health_score: HealthScoreInput,
    #[serde(default)]
    pub circular_dependencies: Vec<CircularDependencyInfo>,
    #[serde(default)]
    pub version_conflicts: Vec<VersionConflict>,
}

/// Either analysis shape, as found in an input file.
///
/// The comprehensive shape is tried first because its `metadata` block is
/// mandatory; everything else falls through to the legacy shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisInput {
    Comprehensive(ComprehensiveAnalysisResult),
    Legacy(AnalysisResult),
}
