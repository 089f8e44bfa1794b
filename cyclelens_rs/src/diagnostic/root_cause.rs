//! Root-cause section.

use std::collections::HashSet;

use crate::types::CircularDependencyInfo;
use cyclelens_report::types::{AlternativeCandidate, CausalStep, CodeReference, RootCauseDetails};

/// Below this confidence the section suggests other suspects.
pub const ALTERNATIVES_BELOW_CONFIDENCE: f64 = 80.0;

/// Confidence penalty applied to alternative candidates.
const ALTERNATIVE_PENALTY: f64 = 20.0;

pub const NOT_AVAILABLE: &str = "Root cause analysis not available for this cycle.";

pub fn format_root_cause(info: &CircularDependencyInfo) -> RootCauseDetails {
    let code_references = code_references(info);

    let Some(root_cause) = &info.root_cause else {
        return RootCauseDetails {
            explanation: NOT_AVAILABLE.to_string(),
            confidence: 0.0,
            originating_package: info.packages().first().cloned().unwrap_or_default(),
            problematic_edge: None,
            causal_chain: Vec::new(),
            alternative_candidates: Vec::new(),
            code_references,
        };
    };

    let alternative_candidates = if root_cause.confidence < ALTERNATIVES_BELOW_CONFIDENCE {
        let confidence = (root_cause.confidence - ALTERNATIVE_PENALTY).max(0.0);
        let mut seen = HashSet::new();
        root_cause
            .chain
            .iter()
            .filter(|link| link.is_critical && link.from != root_cause.originating_package)
            .filter(|link| seen.insert(link.from.as_str()))
            .map(|link| AlternativeCandidate {
                package: link.from.clone(),
                confidence,
                reason: format!(
                    "Critical link {} → {} in the causal chain",
                    link.from, link.to
                ),
            })
            .collect()
    } else {
        Vec::new()
    };

    RootCauseDetails {
        explanation: root_cause.explanation.clone(),
        confidence: root_cause.confidence,
        originating_package: root_cause.originating_package.clone(),
        problematic_edge: Some((
            root_cause.problematic_edge.from.clone(),
            root_cause.problematic_edge.to.clone(),
        )),
        causal_chain: root_cause
            .chain
            .iter()
            .map(|link| CausalStep {
                from: link.from.clone(),
                to: link.to.clone(),
                is_critical: link.is_critical,
                reason: link.reason.clone(),
            })
            .collect(),
        alternative_candidates,
        code_references,
    }
}

fn code_references(info: &CircularDependencyInfo) -> Vec<CodeReference> {
    info.import_traces
        .iter()
        .map(|trace| CodeReference {
            file: trace.file.clone(),
            line: trace.line,
            import_statement: trace.statement.clone(),
        })
        .collect()
}
