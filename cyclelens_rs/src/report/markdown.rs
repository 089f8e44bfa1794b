//! Markdown rendition of a report.

use super::ReportOptions;
use super::builder::{ReportData, SeverityCounts};

/// Make an external string inert inside Markdown.
///
/// HTML metacharacters become entities (Markdown renderers pass raw HTML
/// through), Markdown metacharacters are backslash-escaped and line breaks
/// are flattened so table rows stay intact.
pub fn escape_markdown(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' | '#' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

fn counts_line(out: &mut String, total: usize, counts: &SeverityCounts) {
    out.push_str(&format!(
        "**Total:** {} | **Critical:** {} | **High:** {} | **Medium:** {} | **Low:** {}\n\n",
        total, counts.critical, counts.high, counts.medium, counts.low
    ));
}

fn render_metadata(out: &mut String, data: &ReportData) {
    let meta = &data.metadata;
    out.push_str(&format!(
        "- **Generated:** {}\n",
        meta.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if let Some(analyzed_at) = meta.analyzed_at {
        out.push_str(&format!(
            "- **Analyzed:** {}\n",
            analyzed_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    out.push_str(&format!("- **Packages:** {}\n", meta.total_packages));
    if let Some(ms) = meta.analysis_duration_ms {
        out.push_str(&format!("- **Analysis time:** {:.0} ms\n", ms));
    }
    out.push_str(&format!(
        "- **Tool version:** {}\n\n",
        escape_markdown(&meta.tool_version)
    ));
}

fn render_health(out: &mut String, data: &ReportData) {
    let health = &data.health_score;
    out.push_str("## Health Score\n\n");
    out.push_str(&format!(
        "**{:.0} / 100** (grade {})\n\n",
        health.overall,
        escape_markdown(&health.grade)
    ));
    out.push_str("| Factor | Score | Weight | Description |\n|---|---|---|---|\n");
    for factor in &health.factors {
        out.push_str(&format!(
            "| {} | {:.0} | {:.0}% | {} |\n",
            escape_markdown(&factor.name),
            factor.score,
            factor.weight * 100.0,
            escape_markdown(&factor.description)
        ));
    }
    out.push('\n');
}

fn render_cycles(out: &mut String, data: &ReportData) {
    let summary = &data.circular_dependencies;
    out.push_str("## Circular Dependencies\n\n");
    counts_line(out, summary.total, &summary.counts);
    if summary.cycles.is_empty() {
        out.push_str("_No circular dependencies found._\n\n");
        return;
    }
    out.push_str("| Cycle | Packages | Type | Severity | Priority |\n|---|---|---|---|---|\n");
    for cycle in &summary.cycles {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {:.1} |\n",
            escape_markdown(&cycle.cycle_id),
            escape_markdown(&cycle.packages.join(" → ")),
            cycle.kind.as_str(),
            cycle.severity.as_str(),
            cycle.priority_score
        ));
    }
    out.push('\n');
}

fn render_conflicts(out: &mut String, data: &ReportData) {
    let summary = &data.version_conflicts;
    out.push_str("## Version Conflicts\n\n");
    counts_line(out, summary.total, &summary.counts);
    if summary.conflicts.is_empty() {
        out.push_str("_No version conflicts found._\n\n");
        return;
    }
    out.push_str("| Package | Versions | Severity | Affected packages |\n|---|---|---|---|\n");
    for conflict in &summary.conflicts {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_markdown(&conflict.package),
            escape_markdown(&conflict.versions.join(", ")),
            conflict.severity.as_str(),
            escape_markdown(&conflict.affected_packages.join(", "))
        ));
    }
    out.push('\n');
}

fn render_recommendations(out: &mut String, data: &ReportData) {
    out.push_str("## Fix Recommendations\n\n");
    if data.fix_recommendations.is_empty() {
        out.push_str("_No fix recommendations._\n\n");
        return;
    }
    for (i, rec) in data.fix_recommendations.iter().enumerate() {
        out.push_str(&format!(
            "{}. **{}**{} (cycle {})\n",
            i + 1,
            escape_markdown(&rec.title),
            if rec.quick_win { " - quick win" } else { "" },
            escape_markdown(&rec.cycle_id)
        ));
        out.push_str(&format!(
            "   - Priority {:.1}, effort {}, impact {}\n",
            rec.priority,
            rec.effort.as_str(),
            rec.impact.as_str()
        ));
        if !rec.description.is_empty() {
            out.push_str(&format!("   - {}\n", escape_markdown(&rec.description)));
        }
    }
    out.push('\n');
}

pub fn generate_markdown_report(data: &ReportData, options: &ReportOptions) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&format!(
        "# Dependency Analysis Report: {}\n\n",
        escape_markdown(&data.metadata.project_name)
    ));
    if options.include_metadata {
        render_metadata(&mut out, data);
    }

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

    out.push_str("---\n_Generated by cyclelens_\n");
    out
}
