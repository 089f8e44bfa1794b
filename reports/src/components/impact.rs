//! Impact assessment panel with the ripple tree

use leptos::prelude::*;

use crate::components::icons::{ICON_GRAPH, Icon};
use crate::types::{ImpactAssessmentDetails, RippleNode};

/// Blast radius: counts, share of the monorepo, risk and the ripple tree.
#[component]
pub fn ImpactPanel(impact: ImpactAssessmentDetails) -> impl IntoView {
    let risk = impact.risk_level.as_str();

    view! {
        <section class="panel impact-panel">
            <h2>
                <Icon path=ICON_GRAPH />
                " Impact Assessment "
                <span class=format!("badge badge-{}", risk)>{format!("{} risk", risk)}</span>
            </h2>
            <div class="stat-grid">
                <div class="stat">
                    <span class="stat-value">{impact.direct_count.to_string()}</span>
                    <span class="stat-label">"Direct participants"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{impact.indirect_count.to_string()}</span>
                    <span class="stat-label">"Indirect dependents"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{impact.total_affected_count.to_string()}</span>
                    <span class="stat-label">"Total affected"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{format!("{}%", impact.percentage_of_monorepo)}</span>
                    <span class="stat-label">"Of monorepo"</span>
                </div>
            </div>
            {(!impact.indirect_dependents.is_empty()).then(|| view! {
                <h3>"Indirect dependents"</h3>
                <p>
                    {impact.indirect_dependents.iter().map(|pkg| view! {
                        <code>{pkg.clone()}</code>
                        " "
                    }).collect::<Vec<_>>()}
                </p>
            })}
            {(!impact.ripple_effect.is_empty()).then(|| view! {
                <h3>"Ripple effect"</h3>
                <ul class="ripple">
                    {impact.ripple_effect.iter().cloned().map(ripple_item).collect::<Vec<_>>()}
                </ul>
            })}
        </section>
    }
}

// Plain function instead of a component: the tree is recursive and needs a
// concrete return type.
fn ripple_item(node: RippleNode) -> AnyView {
    let label = if node.depth == 0 {
        "cycle".to_string()
    } else {
        format!("depth {}", node.depth)
    };
    let children = node.dependents;

    view! {
        <li>
            <code>{node.package}</code>
            <span class="ripple-depth">{label}</span>
            {(!children.is_empty()).then(|| view! {
                <ul>
                    {children.into_iter().map(ripple_item).collect::<Vec<_>>()}
                </ul>
            })}
        </li>
    }
    .into_any()
}
