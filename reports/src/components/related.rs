//! Related cycles panel

use leptos::prelude::*;

use crate::components::icons::{ICON_GRAPH, Icon};
use crate::types::RelatedCycleInfo;

/// Other cycles sharing packages with this one.
#[component]
pub fn RelatedCyclesPanel(related: Vec<RelatedCycleInfo>) -> impl IntoView {
    view! {
        <section class="panel related-panel">
            <h2>
                <Icon path=ICON_GRAPH />
                " Related Cycles"
            </h2>
            {if related.is_empty() {
                view! { <p class="muted">"No other cycle shares packages with this one."</p> }.into_any()
            } else {
                view! {
                    <table>
                        <tr>
                            <th>"Cycle"</th>
                            <th>"Shared packages"</th>
                            <th>"Overlap"</th>
                            <th>"Notes"</th>
                        </tr>
                        {related.into_iter().map(|info| {
                            let class = if info.recommend_fix_together { "related-together" } else { "" };
                            view! {
                                <tr>
                                    <td><code>{info.cycle_id}</code></td>
                                    <td>{info.shared_packages.join(", ")}</td>
                                    <td>{format!("{}%", info.overlap_percentage)}</td>
                                    <td class=class>{info.reason}</td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </table>
                }.into_any()
            }}
        </section>
    }
}
