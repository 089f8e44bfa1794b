//! Cycle path visualization panel
//!
//! Embeds the pre-rendered SVG diagram and the ASCII fallback. The SVG is
//! produced (and escaped) by the diagram renderer, so it is injected as raw
//! markup here.

use leptos::prelude::*;

use crate::components::icons::{ICON_GRAPH, Icon};
use crate::types::CyclePathVisualization;

/// Diagram, breaking point and the edge table with import traces.
#[component]
pub fn CyclePathPanel(visualization: CyclePathVisualization) -> impl IntoView {
    let breaking = visualization.breaking_point.clone();
    let confidence = breaking
        .confidence
        .map(|c| format!(" ({:.0}% confidence)", c))
        .unwrap_or_default();

    view! {
        <section class="panel cycle-panel">
            <h2>
                <Icon path=ICON_GRAPH />
                " Cycle Path"
            </h2>
            <div class="diagram" inner_html=visualization.svg.clone()></div>
            <h3>"Breaking point"</h3>
            <p>
                <code>{breaking.from.clone()}</code>
                " → "
                <code>{breaking.to.clone()}</code>
                {confidence}
            </p>
            <p class="muted">{breaking.reason.clone()}</p>
            <h3>"Edges"</h3>
            <table>
                <tr>
                    <th>"From"</th>
                    <th>"To"</th>
                    <th>"Import"</th>
                </tr>
                {visualization.edges.iter().map(|edge| {
                    let marker = if edge.is_breaking_point { " ✂" } else { "" };
                    let trace = edge
                        .trace
                        .as_ref()
                        .map(|t| format!("{}:{} {}", t.file, t.line, t.statement))
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td><code>{edge.from.clone()}</code></td>
                            <td><code>{edge.to.clone()}</code>{marker}</td>
                            <td class="muted">{trace}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </table>
            <h3>"Text diagram"</h3>
            <pre>{visualization.ascii.clone()}</pre>
        </section>
    }
}
