//! Fix-strategy section.

use crate::types::{Effort, FixStrategy, StrategyGuide};
use cyclelens_report::types::{CodeSnippets, FixStep, FixStrategyGuide};

/// Typical time to apply a strategy of the given effort.
pub fn estimated_time_for(effort: Effort) -> &'static str {
    match effort {
        Effort::Low => "15-30 minutes",
        Effort::Medium => "1-2 hours",
        Effort::High => "2-4 hours",
    }
}

/// Steps and time estimate for a strategy.
///
/// The single place where an absent guide turns into defaults: no steps and
/// the effort-based estimate.
pub fn resolve_guide(guide: Option<&StrategyGuide>, effort: Effort) -> (Vec<FixStep>, String) {
    match guide {
        Some(guide) => {
            let steps = guide
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| FixStep {
                    order: i + 1,
                    title: step.title.clone(),
                    description: step.description.clone(),
                    code_snippet: step.code_after.clone(),
                })
                .collect();
            let time = guide
                .estimated_time
                .clone()
                .unwrap_or_else(|| estimated_time_for(effort).to_string());
            (steps, time)
        }
        None => (Vec::new(), estimated_time_for(effort).to_string()),
    }
}

fn code_snippets(strategy: &FixStrategy) -> CodeSnippets {
    let diff = strategy.import_diff.as_ref();
    CodeSnippets {
        before: diff
            .and_then(|d| d.before.first().cloned())
            .unwrap_or_default(),
        after: diff
            .and_then(|d| d.after.first().cloned())
            .unwrap_or_default(),
    }
}

pub fn format_strategy(strategy: &FixStrategy) -> FixStrategyGuide {
    let (steps, estimated_time) = resolve_guide(strategy.guide.as_ref(), strategy.effort);
    FixStrategyGuide {
        kind: strategy.kind.clone(),
        title: strategy.title.clone(),
        description: strategy.description.clone(),
        effort: strategy.effort,
        suitability: strategy.suitability,
        estimated_time,
        steps,
        code_snippets: code_snippets(strategy),
        benefits: strategy.benefits.clone(),
        drawbacks: strategy.drawbacks.clone(),
    }
}

/// All strategies of a cycle, most suitable first.
pub fn format_strategies(strategies: &[FixStrategy]) -> Vec<FixStrategyGuide> {
    let mut guides: Vec<FixStrategyGuide> = strategies.iter().map(format_strategy).collect();
    guides.sort_by(|a, b| b.suitability.total_cmp(&a.suitability));
    guides
}
