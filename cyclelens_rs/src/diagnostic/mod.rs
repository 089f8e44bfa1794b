//! Diagnostic report engine.
//!
//! Turns one detected cycle, the workspace graph and every other known
//! cycle into an immutable [`DiagnosticReport`]. Each section has its own
//! builder module; this module stamps identity and timing around them.
//!
//! ```text
//! CircularDependencyInfo + DependencyGraph + all cycles
//!     -> geometry -> diagram (vector + text)
//!     -> root_cause, fix_strategy, impact, related
//!     -> DiagnosticReport -> export (HTML bytes)
//! ```

pub mod diagram;
pub mod export;
pub mod fix_strategy;
pub mod geometry;
pub mod impact;
pub mod related;
pub mod root_cause;
pub mod session;

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use crate::classify::{classify_effort, classify_severity, touches_core_package};
use crate::error::{ReportError, Result};
use crate::graph_query::RIPPLE_MAX_DEPTH;
use crate::types::{CircularDependencyInfo, DependencyGraph, normalize_cycle, short_name};
use cyclelens_report::types::{
    DiagnosticMetadata, DiagnosticReport, ExecutiveSummary, FixStrategyGuide,
    ImpactAssessmentDetails, RelatedCycleInfo, RootCauseDetails,
};
use diagram::{DiagramRenderer, Theme};
use geometry::CycleLayout;

pub use export::{ExportedFile, export_diagnostic_html};
pub use session::DiagnosticSession;

/// Stable cycle identifier: the normalized cycle's short names joined by `-`.
///
/// `[a, b, c, a]` and `[a, b, c]` both give `a-b-c`.
pub fn cycle_id(cycle: &[String]) -> String {
    normalize_cycle(cycle)
        .iter()
        .map(|p| short_name(p))
        .collect::<Vec<_>>()
        .join("-")
}

/// Everything one report is built from. All inputs are borrowed read-only.
#[derive(Clone, Debug)]
pub struct DiagnosticRequest<'a> {
    pub cycle: &'a CircularDependencyInfo,
    pub graph: &'a DependencyGraph,
    /// Every known cycle, the target included
    pub all_cycles: &'a [CircularDependencyInfo],
    pub total_packages: usize,
    pub project_name: String,
    pub is_dark_mode: bool,
    pub ripple_max_depth: usize,
}

impl<'a> DiagnosticRequest<'a> {
    /// Request with defaults: package count from the graph, light theme,
    /// default ripple depth.
    pub fn new(
        cycle: &'a CircularDependencyInfo,
        graph: &'a DependencyGraph,
        all_cycles: &'a [CircularDependencyInfo],
    ) -> Self {
        Self {
            cycle,
            graph,
            all_cycles,
            total_packages: graph.nodes.len(),
            project_name: String::new(),
            is_dark_mode: false,
            ripple_max_depth: RIPPLE_MAX_DEPTH,
        }
    }
}

/// Build the full report for `request.cycle`.
///
/// Fails only when the cycle is empty; missing optional upstream data falls
/// back to defaults section by section.
pub fn generate_diagnostic_report(request: &DiagnosticRequest<'_>) -> Result<DiagnosticReport> {
    let info = request.cycle;
    let packages = info.packages();
    if packages.is_empty() {
        return Err(ReportError::EmptyCycle);
    }

    let id = cycle_id(&info.cycle);
    let started = Instant::now();

    let layout = geometry::build_layout(info);
    let theme = if request.is_dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    };
    let svg = DiagramRenderer::Vector { theme }.render(&layout);
    let ascii = DiagramRenderer::Text.render(&layout);
    debug!(cycle = %id, nodes = layout.nodes.len(), "built cycle geometry");

    let root_cause = root_cause::format_root_cause(info);
    let fix_strategies = fix_strategy::format_strategies(&info.fix_strategies);
    debug!(cycle = %id, strategies = fix_strategies.len(), "formatted root cause and strategies");

    let impact = impact::assess_impact(
        info,
        request.graph,
        request.total_packages,
        request.ripple_max_depth,
    );
    let related_cycles = related::find_related_cycles(info, request.all_cycles);
    debug!(
        cycle = %id,
        affected = impact.total_affected_count,
        related = related_cycles.len(),
        "assessed impact"
    );

    let summary = executive_summary(
        info,
        &layout,
        &root_cause,
        &fix_strategies,
        &impact,
        &related_cycles,
    );

    let generation_duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    let generated_at = Utc::now();

    let report = DiagnosticReport {
        id: format!("diag-{id}-{}", generated_at.timestamp_millis()),
        cycle_id: id,
        generated_at,
        summary,
        visualization: cyclelens_report::types::CyclePathVisualization {
            nodes: layout.nodes,
            edges: layout.edges,
            svg,
            ascii,
            breaking_point: layout.breaking_point,
        },
        root_cause,
        fix_strategies,
        impact,
        related_cycles,
        metadata: DiagnosticMetadata {
            generated_at: Utc::now(),
            generation_duration_ms,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            total_packages: request.total_packages,
        },
    };

    info!(
        project = %request.project_name,
        report = %report.id,
        severity = report.summary.severity.as_str(),
        duration_ms = generation_duration_ms,
        "generated diagnostic report"
    );
    Ok(report)
}

fn executive_summary(
    info: &CircularDependencyInfo,
    layout: &CycleLayout,
    root_cause: &RootCauseDetails,
    strategies: &[FixStrategyGuide],
    impact: &ImpactAssessmentDetails,
    related: &[RelatedCycleInfo],
) -> ExecutiveSummary {
    let packages = info.packages();
    let severity = classify_severity(packages, info.priority_score);
    let estimated_effort = classify_effort(packages, info.complexity);

    let mut path: Vec<&str> = packages.iter().map(String::as_str).collect();
    if let Some(first) = packages.first() {
        path.push(first);
    }

    let mut key_findings = vec![format!(
        "{} packages form a {} cycle.",
        packages.len(),
        info.kind.as_str()
    )];
    if touches_core_package(packages) {
        key_findings.push("A core or shared package is part of the cycle.".to_string());
    }
    if root_cause.confidence > 0.0 {
        key_findings.push(format!(
            "Most likely origin: {} ({:.0}% confidence).",
            root_cause.originating_package, root_cause.confidence
        ));
    }
    key_findings.push(format!(
        "{} packages affected ({}% of the monorepo), {} risk.",
        impact.total_affected_count,
        impact.percentage_of_monorepo,
        impact.risk_level.as_str()
    ));
    let together = related.iter().filter(|r| r.recommend_fix_together).count();
    if together > 0 {
        key_findings.push(format!(
            "{together} related cycle(s) share packages and should be fixed together."
        ));
    }

    let breaking = &layout.breaking_point;
    key_findings.push(format!(
        "Suggested breaking point: {} → {}.",
        breaking.from, breaking.to
    ));

    let recommended_action = strategies
        .first()
        .map(|s| s.title.clone())
        .unwrap_or_else(|| format!("Remove or invert the dependency {} → {}.", breaking.from, breaking.to));

    ExecutiveSummary {
        title: format!(
            "{} circular dependency across {} packages",
            capitalize(info.kind.as_str()),
            packages.len()
        ),
        description: format!(
            "{}. Each package depends on the next and the last depends back on the first.",
            path.join(" → ")
        ),
        severity,
        cycle_kind: info.kind,
        affected_packages: packages.len(),
        estimated_effort,
        key_findings,
        recommended_action,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CycleKind, Effort, FixStrategy};
    use cyclelens_report::types::{RiskLevel, Severity};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cycle(items: &[&str]) -> CircularDependencyInfo {
        CircularDependencyInfo {
            cycle: names(items),
            ..Default::default()
        }
    }

    fn graph() -> DependencyGraph {
        let mut graph =
            DependencyGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("d", "a"), ("e", "d")]);
        graph.nodes.insert("f".into(), Default::default());
        graph
    }

    #[test]
    fn cycle_id_ignores_closing_repeat() {
        assert_eq!(cycle_id(&names(&["a", "b", "c", "a"])), "a-b-c");
        assert_eq!(cycle_id(&names(&["a", "b", "c"])), "a-b-c");
        assert_eq!(cycle_id(&names(&["@acme/ui", "@acme/api"])), "ui-api");
    }

    #[test]
    fn empty_cycle_fails() {
        let target = cycle(&[]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let err = generate_diagnostic_report(&DiagnosticRequest::new(&target, &graph, &all))
            .unwrap_err();
        assert!(matches!(err, ReportError::EmptyCycle));
    }

    #[test]
    fn report_wires_every_section() {
        let all = vec![cycle(&["a", "b", "c", "a"]), cycle(&["a", "b", "x"])];
        let graph = graph();
        let mut request = DiagnosticRequest::new(&all[0], &graph, &all);
        request.total_packages = 6;

        let report = generate_diagnostic_report(&request).expect("report");

        assert_eq!(report.cycle_id, "a-b-c");
        assert!(report.id.starts_with("diag-a-b-c-"));
        assert_eq!(report.summary.severity, Severity::Medium);
        assert_eq!(report.summary.cycle_kind, CycleKind::Direct);
        assert_eq!(report.summary.affected_packages, 3);
        assert_eq!(report.summary.description.split(" → ").count(), 4);
        assert_eq!(report.visualization.nodes.len(), 3);
        assert_eq!(report.visualization.ascii.matches("BREAK HERE").count(), 1);
        assert!(report.visualization.svg.starts_with("<svg"));
        assert_eq!(report.impact.percentage_of_monorepo, 83);
        assert_eq!(report.impact.risk_level, RiskLevel::Critical);
        assert_eq!(report.related_cycles.len(), 1);
        assert!(report.metadata.generation_duration_ms >= 0.0);
        assert_eq!(report.metadata.total_packages, 6);
    }

    #[test]
    fn request_defaults_count_graph_nodes() {
        let target = cycle(&["a", "b"]);
        let graph = graph();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let request = DiagnosticRequest::new(&target, &graph, &all);
        assert_eq!(request.total_packages, 6);
        assert_eq!(request.ripple_max_depth, RIPPLE_MAX_DEPTH);
    }

    #[test]
    fn recommended_action_prefers_best_strategy() {
        let mut target = cycle(&["a", "b"]);
        target.fix_strategies = vec![
            FixStrategy {
                title: "Merge packages".into(),
                effort: Effort::High,
                suitability: 3.0,
                ..Default::default()
            },
            FixStrategy {
                title: "Extract shared module".into(),
                effort: Effort::Low,
                suitability: 9.0,
                ..Default::default()
            },
        ];
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let report =
            generate_diagnostic_report(&DiagnosticRequest::new(&target, &graph, &all)).expect("report");
        assert_eq!(report.summary.recommended_action, "Extract shared module");
        assert_eq!(report.fix_strategies[0].title, "Extract shared module");
    }

    #[test]
    fn recommended_action_falls_back_to_breaking_edge() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let report =
            generate_diagnostic_report(&DiagnosticRequest::new(&target, &graph, &all)).expect("report");
        assert!(report.summary.recommended_action.contains("b → a"));
    }

    #[test]
    fn dark_mode_switches_svg_palette() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let mut request = DiagnosticRequest::new(&target, &graph, &all);
        request.is_dark_mode = true;
        let report = generate_diagnostic_report(&request).expect("report");
        assert!(report.visualization.svg.contains("#0d1117"));
    }

    #[test]
    fn report_serializes_as_plain_json() {
        let target = cycle(&["a", "b"]);
        let graph = DependencyGraph::default();
        let all: Vec<CircularDependencyInfo> = Vec::new();
        let report =
            generate_diagnostic_report(&DiagnosticRequest::new(&target, &graph, &all)).expect("report");
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["cycleId"], "a-b");
        assert!(json["visualization"]["breakingPoint"].is_object());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("direct"), "Direct");
        assert_eq!(capitalize(""), "");
    }
}
