//! Circular layout of a cycle and breaking-point selection.
//!
//! Nodes sit evenly on a circle starting at twelve o'clock and going
//! clockwise. Edges connect consecutive members plus the wraparound edge,
//! so an `n`-package cycle always has exactly `n` edges.

use std::f64::consts::PI;

use crate::types::{CircularDependencyInfo, short_name};
use cyclelens_report::types::{BreakingPoint, CycleEdge, CycleNode, EdgeTrace};

/// Center of the layout in diagram coordinates.
pub const CENTER: (f64, f64) = (200.0, 200.0);

/// Radius of the layout circle.
pub const RADIUS: f64 = 150.0;

/// Nodes, edges and the chosen breaking point of one cycle.
#[derive(Clone, Debug, Default)]
pub struct CycleLayout {
    pub nodes: Vec<CycleNode>,
    pub edges: Vec<CycleEdge>,
    pub breaking_point: BreakingPoint,
}

impl CycleLayout {
    /// The edge flagged as the breaking point.
    pub fn breaking_edge(&self) -> Option<&CycleEdge> {
        self.edges.iter().find(|edge| edge.is_breaking_point)
    }

    pub fn node(&self, id: &str) -> Option<&CycleNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Place `packages` on the layout circle.
///
/// Angle of node `i` is `2π·i/n − π/2`. `origin` marks the package that
/// root-cause analysis blames.
pub fn layout_nodes(packages: &[String], origin: Option<&str>) -> Vec<CycleNode> {
    let n = packages.len().max(1) as f64;
    packages
        .iter()
        .enumerate()
        .map(|(i, package)| {
            let angle = 2.0 * PI * i as f64 / n - PI / 2.0;
            CycleNode {
                id: package.clone(),
                label: short_name(package).to_string(),
                x: round2(CENTER.0 + RADIUS * angle.cos()),
                y: round2(CENTER.1 + RADIUS * angle.sin()),
                is_origin: origin == Some(package.as_str()),
            }
        })
        .collect()
}

/// Consecutive pairs plus the wraparound pair, with import traces attached.
pub fn build_edges(info: &CircularDependencyInfo) -> Vec<CycleEdge> {
    let packages = info.packages();
    let n = packages.len();
    (0..n)
        .map(|i| {
            let from = &packages[i];
            let to = &packages[(i + 1) % n];
            CycleEdge {
                from: from.clone(),
                to: to.clone(),
                is_breaking_point: false,
                trace: info.trace_for(from, to).map(|t| EdgeTrace {
                    file: t.file.clone(),
                    line: t.line,
                    statement: t.statement.clone(),
                }),
            }
        })
        .collect()
}

/// Pick the edge to cut.
///
/// The root cause's critical edge wins when it is one of the cycle's own
/// edges; otherwise the edge closing the loop (last → first) is used.
pub fn select_breaking_point(info: &CircularDependencyInfo, edges: &[CycleEdge]) -> BreakingPoint {
    if let Some(root_cause) = &info.root_cause {
        if let Some(critical) = &root_cause.critical_edge {
            if edges.iter().any(|e| critical.matches(&e.from, &e.to)) {
                return BreakingPoint {
                    from: critical.from.clone(),
                    to: critical.to.clone(),
                    reason: format!(
                        "Root cause analysis identified this edge as the critical link ({:.0}% confidence).",
                        root_cause.confidence
                    ),
                    confidence: Some(root_cause.confidence),
                };
            }
        }
    }

    match edges.last() {
        Some(closing) => BreakingPoint {
            from: closing.from.clone(),
            to: closing.to.clone(),
            reason: "This edge closes the loop back to the first package; removing it breaks the cycle."
                .to_string(),
            confidence: None,
        },
        None => BreakingPoint::default(),
    }
}

/// Full geometry for one cycle with exactly one edge flagged.
pub fn build_layout(info: &CircularDependencyInfo) -> CycleLayout {
    let origin = info
        .root_cause
        .as_ref()
        .map(|rc| rc.originating_package.as_str());
    let nodes = layout_nodes(info.packages(), origin);
    let mut edges = build_edges(info);
    let breaking_point = select_breaking_point(info, &edges);

    if let Some(edge) = edges
        .iter_mut()
        .find(|e| e.from == breaking_point.from && e.to == breaking_point.to)
    {
        edge.is_breaking_point = true;
    }

    CycleLayout {
        nodes,
        edges,
        breaking_point,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeRef, ImportTrace, RootCauseAnalysis};

    fn info(cycle: &[&str]) -> CircularDependencyInfo {
        CircularDependencyInfo {
            cycle: cycle.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn with_critical_edge(mut info: CircularDependencyInfo, from: &str, to: &str) -> CircularDependencyInfo {
        info.root_cause = Some(RootCauseAnalysis {
            originating_package: from.to_string(),
            problematic_edge: EdgeRef {
                from: from.into(),
                to: to.into(),
            },
            confidence: 90.0,
            explanation: "x".into(),
            chain: vec![],
            critical_edge: Some(EdgeRef {
                from: from.into(),
                to: to.into(),
            }),
        });
        info
    }

    #[test]
    fn first_node_sits_at_twelve_o_clock() {
        let nodes = layout_nodes(&["a".into(), "b".into(), "c".into(), "d".into()], None);
        assert_eq!((nodes[0].x, nodes[0].y), (200.0, 50.0));
        assert_eq!((nodes[1].x, nodes[1].y), (350.0, 200.0));
        assert_eq!((nodes[2].x, nodes[2].y), (200.0, 350.0));
        assert_eq!((nodes[3].x, nodes[3].y), (50.0, 200.0));
    }

    #[test]
    fn nodes_are_evenly_spaced_on_the_circle() {
        let names: Vec<String> = (0..7).map(|i| format!("p{i}")).collect();
        for node in layout_nodes(&names, None) {
            let r = ((node.x - CENTER.0).powi(2) + (node.y - CENTER.1).powi(2)).sqrt();
            assert!((r - RADIUS).abs() < 0.05, "node {} off circle: {r}", node.id);
        }
    }

    #[test]
    fn labels_use_short_names_and_origin_is_marked() {
        let nodes = layout_nodes(&["@acme/a".into(), "@acme/b".into()], Some("@acme/b"));
        assert_eq!(nodes[0].label, "a");
        assert!(!nodes[0].is_origin);
        assert!(nodes[1].is_origin);
    }

    #[test]
    fn edges_include_wraparound() {
        let edges = build_edges(&info(&["a", "b", "c", "a"]));
        let pairs: Vec<(&str, &str)> = edges.iter().map(|e| (e.from.as_str(), e.to.as_str())).collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c"), ("c", "a")]);
    }

    #[test]
    fn edges_attach_matching_traces() {
        let mut cycle = info(&["a", "b"]);
        cycle.import_traces.push(ImportTrace {
            from: "b".into(),
            to: "a".into(),
            file: "b/src/index.ts".into(),
            line: 3,
            statement: "import { x } from 'a'".into(),
        });
        let edges = build_edges(&cycle);
        assert!(edges[0].trace.is_none());
        assert_eq!(edges[1].trace.as_ref().map(|t| t.line), Some(3));
    }

    #[test]
    fn breaking_point_defaults_to_closing_edge() {
        let layout = build_layout(&info(&["a", "b", "c"]));
        assert_eq!(
            (layout.breaking_point.from.as_str(), layout.breaking_point.to.as_str()),
            ("c", "a")
        );
        assert!(layout.breaking_point.confidence.is_none());
    }

    #[test]
    fn breaking_point_prefers_critical_edge() {
        let layout = build_layout(&with_critical_edge(info(&["a", "b", "c"]), "a", "b"));
        assert_eq!(layout.breaking_point.from, "a");
        assert_eq!(layout.breaking_point.to, "b");
        assert!(layout.breaking_point.reason.contains("90%"));
    }

    #[test]
    fn foreign_critical_edge_falls_back() {
        let layout = build_layout(&with_critical_edge(info(&["a", "b", "c"]), "x", "y"));
        assert_eq!(layout.breaking_point.from, "c");
        assert_eq!(layout.breaking_point.to, "a");
    }

    #[test]
    fn exactly_one_edge_is_flagged_and_it_belongs_to_the_cycle() {
        for cycle in [
            info(&["a", "b"]),
            info(&["a", "b", "c", "d", "a"]),
            with_critical_edge(info(&["a", "b", "c"]), "b", "c"),
            with_critical_edge(info(&["a", "b", "c"]), "c", "b"),
        ] {
            let layout = build_layout(&cycle);
            let flagged: Vec<_> = layout.edges.iter().filter(|e| e.is_breaking_point).collect();
            assert_eq!(flagged.len(), 1);
            assert_eq!(flagged[0].from, layout.breaking_point.from);
            assert_eq!(flagged[0].to, layout.breaking_point.to);
        }
    }

    #[test]
    fn empty_cycle_has_no_geometry() {
        let layout = build_layout(&info(&[]));
        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
        assert!(layout.breaking_edge().is_none());
    }
}
