//! Fix strategies panel

use leptos::prelude::*;

use crate::components::icons::{ICON_LIGHTNING, Icon};
use crate::types::FixStrategyGuide;

/// Ordered fix guides with steps and before/after snippets.
#[component]
pub fn FixStrategiesPanel(strategies: Vec<FixStrategyGuide>) -> impl IntoView {
    if strategies.is_empty() {
        return view! {
            <section class="panel strategies-panel">
                <h2>
                    <Icon path=ICON_LIGHTNING />
                    " Fix Strategies"
                </h2>
                <p class="muted">"No fix strategies were suggested for this cycle."</p>
            </section>
        }
        .into_any();
    }

    view! {
        <section class="panel strategies-panel">
            <h2>
                <Icon path=ICON_LIGHTNING />
                " Fix Strategies"
            </h2>
            {strategies.into_iter().enumerate().map(|(idx, strategy)| view! {
                <StrategyItem strategy=strategy idx=idx />
            }).collect::<Vec<_>>()}
        </section>
    }
    .into_any()
}

#[component]
fn StrategyItem(strategy: FixStrategyGuide, idx: usize) -> impl IntoView {
    let effort = strategy.effort.as_str();
    let has_snippets =
        !strategy.code_snippets.before.is_empty() || !strategy.code_snippets.after.is_empty();

    view! {
        <div class="strategy">
            <h3>
                {format!("{}. {} ", idx + 1, strategy.title)}
                <span class=format!("badge badge-{}", effort)>{format!("{} effort", effort)}</span>
            </h3>
            <p>{strategy.description.clone()}</p>
            <p class="muted">
                {format!(
                    "Suitability {:.0}/10 · Estimated time {} · {}",
                    strategy.suitability, strategy.estimated_time, strategy.kind
                )}
            </p>
            {(!strategy.steps.is_empty()).then(|| view! {
                <ol class="steps">
                    {strategy.steps.iter().map(|step| view! {
                        <li>
                            <strong>{step.title.clone()}</strong>
                            " "
                            <span>{step.description.clone()}</span>
                            {step.code_snippet.clone().map(|code| view! {
                                <pre><code>{code}</code></pre>
                            })}
                        </li>
                    }).collect::<Vec<_>>()}
                </ol>
            })}
            {has_snippets.then(|| view! {
                <table>
                    <tr>
                        <th>"Before"</th>
                        <th>"After"</th>
                    </tr>
                    <tr>
                        <td><pre><code>{strategy.code_snippets.before.clone()}</code></pre></td>
                        <td><pre><code>{strategy.code_snippets.after.clone()}</code></pre></td>
                    </tr>
                </table>
            })}
            {(!strategy.benefits.is_empty()).then(|| view! {
                <p>
                    <span class="muted">"Benefits: "</span>
                    {strategy.benefits.join(", ")}
                </p>
            })}
            {(!strategy.drawbacks.is_empty()).then(|| view! {
                <p>
                    <span class="muted">"Drawbacks: "</span>
                    {strategy.drawbacks.join(", ")}
                </p>
            })}
        </div>
    }
}
