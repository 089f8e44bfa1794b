//! Impact / blast-radius section.
//!
//! Precomputed-first: an upstream `impactAssessment` is reshaped as is and
//! the graph is never walked for that cycle.

use tracing::debug;

use crate::classify::{affected_percentage, classify_risk};
use crate::graph_query::{build_ripple_tree, find_indirect_dependents};
use crate::types::{
    CircularDependencyInfo, DependencyGraph, ImpactAssessment, RippleNode, RiskLevel,
};
use cyclelens_report::types::ImpactAssessmentDetails;

pub fn assess_impact(
    info: &CircularDependencyInfo,
    graph: &DependencyGraph,
    total_packages: usize,
    ripple_max_depth: usize,
) -> ImpactAssessmentDetails {
    if let Some(given) = &info.impact_assessment {
        debug!(cycle = ?info.packages(), "using precomputed impact assessment");
        return reshape(given, info.packages(), total_packages);
    }

    let direct = info.packages().to_vec();
    let indirect = find_indirect_dependents(&direct, graph);
    let ripple = build_ripple_tree(&direct, graph, ripple_max_depth);
    details(direct, indirect, info.packages(), total_packages, None, ripple)
}

fn reshape(
    given: &ImpactAssessment,
    packages: &[String],
    total_packages: usize,
) -> ImpactAssessmentDetails {
    let ripple = given.ripple_effect.clone().unwrap_or_else(|| {
        given
            .direct_participants
            .iter()
            .map(|package| RippleNode {
                package: package.clone(),
                depth: 0,
                dependents: Vec::new(),
            })
            .collect()
    });
    details(
        given.direct_participants.clone(),
        given.indirect_dependents.clone(),
        packages,
        total_packages,
        given.risk_level,
        ripple,
    )
}

fn details(
    direct: Vec<String>,
    indirect: Vec<String>,
    packages: &[String],
    total_packages: usize,
    risk_level: Option<RiskLevel>,
    ripple_effect: Vec<RippleNode>,
) -> ImpactAssessmentDetails {
    let total_affected = direct.len() + indirect.len();
    let risk_level =
        risk_level.unwrap_or_else(|| classify_risk(total_affected, total_packages, packages));
    ImpactAssessmentDetails {
        direct_count: direct.len(),
        indirect_count: indirect.len(),
        total_affected_count: total_affected,
        percentage_of_monorepo: affected_percentage(total_affected, total_packages).round() as u32,
        risk_level,
        direct_participants: direct,
        indirect_dependents: indirect,
        ripple_effect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_query::RIPPLE_MAX_DEPTH;

    fn cycle(names: &[&str]) -> CircularDependencyInfo {
        CircularDependencyInfo {
            cycle: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn graph() -> DependencyGraph {
        DependencyGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("d", "a"), ("e", "d")])
    }

    #[test]
    fn computes_from_graph() {
        let impact = assess_impact(&cycle(&["a", "b", "c", "a"]), &graph(), 6, RIPPLE_MAX_DEPTH);
        assert_eq!(impact.direct_participants, vec!["a", "b", "c"]);
        assert_eq!(impact.direct_count, 3);
        assert_eq!(impact.indirect_dependents, vec!["d", "e"]);
        assert_eq!(impact.indirect_count, 2);
        assert_eq!(impact.total_affected_count, 5);
        assert_eq!(impact.percentage_of_monorepo, 83);
        assert_eq!(impact.risk_level, RiskLevel::Critical);
        assert_eq!(impact.ripple_effect.len(), 3);
    }

    #[test]
    fn zero_packages_is_low_risk() {
        let impact = assess_impact(&cycle(&["a", "b", "c"]), &graph(), 0, RIPPLE_MAX_DEPTH);
        assert_eq!(impact.percentage_of_monorepo, 0);
        assert_eq!(impact.risk_level, RiskLevel::Low);
    }

    #[test]
    fn precomputed_assessment_is_trusted() {
        let mut info = cycle(&["a", "b", "c"]);
        info.impact_assessment = Some(ImpactAssessment {
            direct_participants: vec!["a".into(), "b".into(), "c".into()],
            indirect_dependents: vec!["z".into()],
            risk_level: Some(RiskLevel::Medium),
            ripple_effect: None,
        });
        // the graph says d and e; the upstream data wins
        let impact = assess_impact(&info, &graph(), 100, RIPPLE_MAX_DEPTH);
        assert_eq!(impact.indirect_dependents, vec!["z"]);
        assert_eq!(impact.total_affected_count, 4);
        assert_eq!(impact.percentage_of_monorepo, 4);
        assert_eq!(impact.risk_level, RiskLevel::Medium);
        assert!(impact.ripple_effect.iter().all(|n| n.depth == 0 && n.dependents.is_empty()));
    }

    #[test]
    fn precomputed_without_risk_is_classified() {
        let mut info = cycle(&["a", "b"]);
        info.impact_assessment = Some(ImpactAssessment {
            direct_participants: vec!["a".into(), "b".into()],
            indirect_dependents: vec!["c".into(), "d".into()],
            ..Default::default()
        });
        let impact = assess_impact(&info, &DependencyGraph::default(), 5, RIPPLE_MAX_DEPTH);
        assert_eq!(impact.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn core_escalation_uses_cycle_packages() {
        let mut info = cycle(&["@acme/core", "b"]);
        info.impact_assessment = Some(ImpactAssessment {
            indirect_dependents: vec!["c".into()],
            ..Default::default()
        });
        let impact = assess_impact(&info, &DependencyGraph::default(), 100, RIPPLE_MAX_DEPTH);
        assert!(impact.direct_participants.is_empty());
        assert_eq!(impact.percentage_of_monorepo, 1);
        assert_eq!(impact.risk_level, RiskLevel::High);
    }
}
