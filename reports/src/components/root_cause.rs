//! Root cause panel

use leptos::prelude::*;

use crate::components::icons::{ICON_TERMINAL, ICON_WARNING_CIRCLE, Icon};
use crate::types::RootCauseDetails;

/// Root-cause attribution with causal chain, alternatives and code references.
#[component]
pub fn RootCausePanel(root_cause: RootCauseDetails) -> impl IntoView {
    let RootCauseDetails {
        explanation,
        confidence,
        originating_package,
        problematic_edge,
        causal_chain,
        alternative_candidates,
        code_references,
    } = root_cause;

    view! {
        <section class="panel root-cause-panel">
            <h2>
                <Icon path=ICON_WARNING_CIRCLE />
                " Root Cause"
            </h2>
            <p>{explanation}</p>
            <div class="stat-grid">
                <div class="stat">
                    <span class="stat-value"><code>{originating_package}</code></span>
                    <span class="stat-label">"Originating package"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{format!("{:.0}%", confidence)}</span>
                    <span class="stat-label">"Confidence"</span>
                </div>
            </div>
            {problematic_edge.map(|(from, to)| view! {
                <p>
                    <span class="muted">"Problematic edge: "</span>
                    <code>{from}</code>
                    " → "
                    <code>{to}</code>
                </p>
            })}
            {(!causal_chain.is_empty()).then(|| view! {
                <h3>"Causal chain"</h3>
                <ol>
                    {causal_chain.into_iter().map(|step| {
                        let marker = if step.is_critical { " (critical)" } else { "" };
                        view! {
                            <li>
                                <code>{step.from}</code>
                                " → "
                                <code>{step.to}</code>
                                <strong>{marker}</strong>
                                <span class="muted">{format!(" {}", step.reason)}</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ol>
            })}
            {(!alternative_candidates.is_empty()).then(|| view! {
                <h3>"Alternative candidates"</h3>
                <ul>
                    {alternative_candidates.into_iter().map(|alt| view! {
                        <li>
                            <code>{alt.package}</code>
                            {format!(" ({:.0}%) ", alt.confidence)}
                            <span class="muted">{alt.reason}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            })}
            {(!code_references.is_empty()).then(|| view! {
                <h3>
                    <Icon path=ICON_TERMINAL size="14" />
                    " Code references"
                </h3>
                <table>
                    <tr>
                        <th>"Location"</th>
                        <th>"Import"</th>
                    </tr>
                    {code_references.into_iter().map(|r| view! {
                        <tr>
                            <td><code>{format!("{}:{}", r.file, r.line)}</code></td>
                            <td><code>{r.import_statement}</code></td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </table>
            })}
        </section>
    }
}
