//! Standalone HTML rendition of a report.
//!
//! Plain string building; every string that came from the analysis input
//! goes through [`escape_html`] before it touches markup.

use super::ReportOptions;
use super::builder::{ReportData, SeverityCounts};

const STYLE: &str = r#"
:root { --fg: #1f2328; --muted: #57606a; --border: #d0d7de; --bg: #ffffff; --panel: #f6f8fa;
  --critical: #cf222e; --high: #bc4c00; --medium: #9a6700; --low: #1a7f37; --accent: #0969da; }
* { box-sizing: border-box; }
body { margin: 0; font: 14px/1.5 system-ui, -apple-system, "Segoe UI", sans-serif; color: var(--fg); background: var(--bg); }
main { max-width: 960px; margin: 0 auto; padding: 32px 24px; }
h1 { margin: 0 0 4px; font-size: 26px; }
h2 { margin: 32px 0 12px; font-size: 19px; border-bottom: 1px solid var(--border); padding-bottom: 6px; }
.project { color: var(--muted); margin: 0 0 16px; }
dl.meta { display: grid; grid-template-columns: max-content 1fr; gap: 4px 16px; margin: 0; color: var(--muted); }
dl.meta dt { font-weight: 600; }
dl.meta dd { margin: 0; }
.score { display: flex; align-items: baseline; gap: 12px; }
.score .value { font-size: 40px; font-weight: 700; }
.score .grade { font-size: 22px; font-weight: 700; padding: 2px 10px; border-radius: 6px; background: var(--panel); }
.counts { display: flex; gap: 12px; flex-wrap: wrap; margin: 8px 0 16px; }
.counts span { padding: 2px 10px; border-radius: 12px; background: var(--panel); font-weight: 600; }
table { width: 100%; border-collapse: collapse; margin: 8px 0; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid var(--border); vertical-align: top; }
th { background: var(--panel); }
code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 12px; }
.sev-critical { color: var(--critical); font-weight: 600; }
.sev-high { color: var(--high); font-weight: 600; }
.sev-medium { color: var(--medium); }
.sev-low { color: var(--low); }
.quick-win { color: var(--low); font-weight: 600; }
.muted { color: var(--muted); }
footer { margin-top: 40px; color: var(--muted); font-size: 12px; }
@media print {
  body { font-size: 11px; }
  main { max-width: none; padding: 0; }
  h2 { break-after: avoid; }
  table, tr { break-inside: avoid; }
  footer { display: none; }
}
"#;

/// Escape text for HTML content and attribute values.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn render_counts(out: &mut String, total: usize, counts: &SeverityCounts) {
    out.push_str(&format!(
        "<div class=\"counts\"><span>Total: {}</span><span class=\"sev-critical\">Critical: {}</span><span class=\"sev-high\">High: {}</span><span class=\"sev-medium\">Medium: {}</span><span class=\"sev-low\">Low: {}</span></div>",
        total, counts.critical, counts.high, counts.medium, counts.low
    ));
}

fn render_metadata(out: &mut String, data: &ReportData) {
    let meta = &data.metadata;
    out.push_str("<dl class=\"meta\">");
    out.push_str(&format!(
        "<dt>Generated</dt><dd>{}</dd>",
        meta.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if let Some(analyzed_at) = meta.analyzed_at {
        out.push_str(&format!(
            "<dt>Analyzed</dt><dd>{}</dd>",
            analyzed_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    out.push_str(&format!("<dt>Packages</dt><dd>{}</dd>", meta.total_packages));
    if let Some(ms) = meta.analysis_duration_ms {
        out.push_str(&format!("<dt>Analysis time</dt><dd>{:.0} ms</dd>", ms));
    }
    out.push_str(&format!(
        "<dt>Tool version</dt><dd>{}</dd>",
        escape_html(&meta.tool_version)
    ));
    out.push_str("</dl>");
}

fn render_health(out: &mut String, data: &ReportData) {
    let health = &data.health_score;
    out.push_str("<section id=\"health-score\"><h2>Health Score</h2>");
    out.push_str(&format!(
        "<div class=\"score\"><span class=\"value\">{:.0}</span><span class=\"muted\">/ 100</span><span class=\"grade\">{}</span></div>",
        health.overall,
        escape_html(&health.grade)
    ));
    out.push_str("<table><tr><th>Factor</th><th>Score</th><th>Weight</th><th>Description</th></tr>");
    for factor in &health.factors {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{:.0}</td><td>{:.0}%</td><td>{}</td></tr>",
            escape_html(&factor.name),
            factor.score,
            factor.weight * 100.0,
            escape_html(&factor.description)
        ));
    }
    out.push_str("</table></section>");
}

fn render_cycles(out: &mut String, data: &ReportData) {
    let summary = &data.circular_dependencies;
    out.push_str("<section id=\"circular-dependencies\"><h2>Circular Dependencies</h2>");
    render_counts(out, summary.total, &summary.counts);
    if summary.cycles.is_empty() {
        out.push_str("<p class=\"muted\">No circular dependencies found.</p>");
    } else {
        out.push_str("<table><tr><th>Cycle</th><th>Packages</th><th>Type</th><th>Severity</th><th>Priority</th></tr>");
        for cycle in &summary.cycles {
            let severity = cycle.severity.as_str();
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td>{}</td><td>{}</td><td class=\"sev-{severity}\">{severity}</td><td>{:.1}</td></tr>",
                escape_html(&cycle.cycle_id),
                escape_html(&cycle.packages.join(" → ")),
                cycle.kind.as_str(),
                cycle.priority_score
            ));
        }
        out.push_str("</table>");
    }
    out.push_str("</section>");
}

fn render_conflicts(out: &mut String, data: &ReportData) {
    let summary = &data.version_conflicts;
    out.push_str("<section id=\"version-conflicts\"><h2>Version Conflicts</h2>");
    render_counts(out, summary.total, &summary.counts);
    if summary.conflicts.is_empty() {
        out.push_str("<p class=\"muted\">No version conflicts found.</p>");
    } else {
        out.push_str("<table><tr><th>Package</th><th>Versions</th><th>Severity</th><th>Affected packages</th></tr>");
        for conflict in &summary.conflicts {
            let severity = conflict.severity.as_str();
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td>{}</td><td class=\"sev-{severity}\">{severity}</td><td>{}</td></tr>",
                escape_html(&conflict.package),
                escape_html(&conflict.versions.join(", ")),
                escape_html(&conflict.affected_packages.join(", "))
            ));
        }
        out.push_str("</table>");
    }
    out.push_str("</section>");
}

fn render_recommendations(out: &mut String, data: &ReportData) {
    let recommendations = &data.fix_recommendations;
    out.push_str("<section id=\"fix-recommendations\"><h2>Fix Recommendations</h2>");
    if recommendations.is_empty() {
        out.push_str("<p class=\"muted\">No fix recommendations.</p>");
    } else {
        out.push_str("<table><tr><th>Priority</th><th>Cycle</th><th>Recommendation</th><th>Effort</th><th>Impact</th><th></th></tr>");
        for rec in recommendations {
            out.push_str(&format!(
                "<tr><td>{:.1}</td><td><code>{}</code></td><td><strong>{}</strong><br><span class=\"muted\">{}</span></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                rec.priority,
                escape_html(&rec.cycle_id),
                escape_html(&rec.title),
                escape_html(&rec.description),
                rec.effort.as_str(),
                rec.impact.as_str(),
                if rec.quick_win {
                    "<span class=\"quick-win\">Quick win</span>"
                } else {
                    ""
                }
            ));
        }
        out.push_str("</table>");
    }
    out.push_str("</section>");
}

pub fn generate_html_report(data: &ReportData, options: &ReportOptions) -> String {
    let project = escape_html(&data.metadata.project_name);
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&format!(
        "<title>{project} - Dependency Analysis Report</title><style>{STYLE}</style></head><body><main>"
    ));
    out.push_str(&format!(
        "<header><h1>Dependency Analysis Report</h1><p class=\"project\">{project}</p>"
    ));
    if options.include_metadata {
        render_metadata(&mut out, data);
    }
    out.push_str("</header>");

    let sections = &options.sections;
    if sections.health_score {
        render_health(&mut out, data);
    }
    if sections.circular_dependencies {
        render_cycles(&mut out, data);
    }
    if sections.version_conflicts {
        render_conflicts(&mut out, data);
    }
    if sections.fix_recommendations {
        render_recommendations(&mut out, data);
    }

    out.push_str("<footer>Generated by cyclelens</footer></main></body></html>\n");
    out
}
