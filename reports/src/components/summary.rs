//! Executive summary panel

use leptos::prelude::*;

use crate::components::icons::{ICON_SQUARES_FOUR, Icon};
use crate::types::ExecutiveSummary;

/// Headline of the report: severity badge, the cycle path, effort and the
/// key findings.
#[component]
pub fn ExecutiveSummaryPanel(summary: ExecutiveSummary) -> impl IntoView {
    let severity = summary.severity.as_str();

    view! {
        <section class="panel summary-panel">
            <h2>
                <Icon path=ICON_SQUARES_FOUR />
                " Executive Summary "
                <span class=format!("badge badge-{}", severity)>{severity}</span>
            </h2>
            <p><strong>{summary.title.clone()}</strong></p>
            <p><code>{summary.description.clone()}</code></p>
            <div class="stat-grid">
                <div class="stat">
                    <span class="stat-value">{summary.affected_packages.to_string()}</span>
                    <span class="stat-label">"Packages in cycle"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{summary.cycle_kind.as_str()}</span>
                    <span class="stat-label">"Cycle type"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{summary.estimated_effort.as_str()}</span>
                    <span class="stat-label">"Estimated effort"</span>
                </div>
            </div>
            {(!summary.key_findings.is_empty()).then(|| view! {
                <h3>"Key findings"</h3>
                <ul>
                    {summary.key_findings.iter().map(|finding| view! {
                        <li>{finding.clone()}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            })}
            <p>
                <span class="muted">"Recommended action: "</span>
                {summary.recommended_action.clone()}
            </p>
        </section>
    }
}
