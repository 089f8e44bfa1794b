//! Root document component - the complete exported HTML page
//!
//! Single column layout: header, then one panel per report section.

use super::{
    CyclePathPanel, ExecutiveSummaryPanel, FixStrategiesPanel, ImpactPanel, RelatedCyclesPanel,
    RootCausePanel,
};
use crate::DocumentOptions;
use crate::styles::{CSP, REPORT_CSS};
use crate::types::DiagnosticReport;
use leptos::prelude::*;

/// The complete HTML document for one diagnostic report
#[component]
pub fn DiagnosticDocument(report: DiagnosticReport, options: DocumentOptions) -> impl IntoView {
    let theme_class = if options.dark_mode { "dark" } else { "light" };
    let title = format!("{} · circular dependency {}", options.project_name, report.cycle_id);
    let generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let footer = format!(
        "Generated by cyclelens v{} in {:.1} ms · report {}",
        report.metadata.tool_version, report.metadata.generation_duration_ms, report.id
    );

    view! {
        <html lang="en" class=theme_class>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <header class="page-header">
                        <h1>{options.project_name.clone()}</h1>
                        <p class="muted">
                            "Circular dependency diagnosis · "
                            <code>{report.cycle_id.clone()}</code>
                            {format!(" · {}", generated)}
                        </p>
                    </header>
                    <ExecutiveSummaryPanel summary=report.summary />
                    <CyclePathPanel visualization=report.visualization />
                    <RootCausePanel root_cause=report.root_cause />
                    <FixStrategiesPanel strategies=report.fix_strategies />
                    <ImpactPanel impact=report.impact />
                    <RelatedCyclesPanel related=report.related_cycles />
                    <footer class="page-footer">{footer}</footer>
                </div>
            </body>
        </html>
    }
}
