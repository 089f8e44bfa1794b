//! CSS styles for the exported diagnostic page.
//!
//! The page is self-contained: everything lives in one inline `<style>`
//! block, there are no web fonts, no external stylesheets and no scripts.
//!
//! # Customization
//!
//! ```rust
//! use cyclelens_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! assert!(combined.contains("@media print"));
//! ```
//!
//! The stylesheet must not contain `<`, `>` or `&`: it is emitted as a text
//! node and those characters would be entity-encoded.

/// Complete CSS for the diagnostic page.
///
/// Light palette by default, dark palette when the root element carries the
/// `dark` class or the viewer prefers a dark color scheme, and print rules
/// that drop backgrounds and keep sections on one page where possible.
pub const REPORT_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-panel: #f6f8fa;
    --border: #d0d7de;
    --text: #1f2328;
    --text-dim: #59636e;
    --accent: #0969da;
    --critical: #cf222e;
    --high: #bc4c00;
    --medium: #9a6700;
    --low: #1a7f37;
    --code-bg: #eff2f5;
}

html.dark {
    --bg: #0d1117;
    --bg-panel: #161b22;
    --border: #30363d;
    --text: #e6edf3;
    --text-dim: #8d96a0;
    --accent: #4493f8;
    --critical: #f85149;
    --high: #db6d28;
    --medium: #d29922;
    --low: #3fb950;
    --code-bg: #1f242c;
}

@media (prefers-color-scheme: dark) {
    html:not(.light) {
        --bg: #0d1117;
        --bg-panel: #161b22;
        --border: #30363d;
        --text: #e6edf3;
        --text-dim: #8d96a0;
        --accent: #4493f8;
        --critical: #f85149;
        --high: #db6d28;
        --medium: #d29922;
        --low: #3fb950;
        --code-bg: #1f242c;
    }
}

* { box-sizing: border-box; }

body {
    margin: 0;
    padding: 32px;
    background: var(--bg);
    color: var(--text);
    font-family: system-ui, -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
    line-height: 1.5;
}

.page { max-width: 980px; margin: 0 auto; }

.page-header { border-bottom: 1px solid var(--border); margin-bottom: 24px; padding-bottom: 12px; }
.page-header h1 { margin: 0 0 4px 0; font-size: 24px; }
.page-header .muted { font-size: 13px; }

.muted { color: var(--text-dim); }

.panel {
    background: var(--bg-panel);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 16px 20px;
    margin-bottom: 20px;
    break-inside: avoid;
}

.panel h2 { margin: 0 0 12px 0; font-size: 18px; }
.panel h3 { margin: 16px 0 8px 0; font-size: 15px; }

.badge {
    display: inline-block;
    padding: 2px 8px;
    border-radius: 999px;
    font-size: 12px;
    font-weight: 600;
    text-transform: uppercase;
    color: #ffffff;
}
.badge-critical { background: var(--critical); }
.badge-high { background: var(--high); }
.badge-medium { background: var(--medium); }
.badge-low { background: var(--low); }

.stat-grid { display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0; }
.stat { flex: 1 1 140px; border: 1px solid var(--border); border-radius: 8px; padding: 8px 12px; }
.stat-value { display: block; font-size: 20px; font-weight: 700; }
.stat-label { display: block; font-size: 12px; color: var(--text-dim); }

.diagram { display: flex; justify-content: center; margin: 12px 0; }
.diagram svg { max-width: 100%; height: auto; }

pre, code {
    font-family: "JetBrains Mono", ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 13px;
}
pre { background: var(--code-bg); border-radius: 8px; padding: 12px; overflow-x: auto; }
code { background: var(--code-bg); border-radius: 4px; padding: 1px 4px; }
pre code { background: transparent; padding: 0; }

table { border-collapse: collapse; width: 100%; margin: 8px 0; }
th, td { border: 1px solid var(--border); padding: 6px 8px; font-size: 14px; text-align: left; vertical-align: top; }
th { background: var(--bg); }

ol.steps li { margin-bottom: 8px; }

.strategy { border-top: 1px solid var(--border); padding-top: 12px; margin-top: 12px; }
.strategy:first-of-type { border-top: none; margin-top: 0; padding-top: 0; }

.ripple, .ripple ul { list-style: none; padding-left: 18px; margin: 0; }
.ripple li { position: relative; }
.ripple-depth { font-size: 11px; color: var(--text-dim); margin-left: 6px; }

.related-together { color: var(--critical); font-weight: 600; }

.page-footer { font-size: 12px; color: var(--text-dim); margin-top: 32px; text-align: center; }

@media print {
    body { padding: 0; background: #ffffff; color: #000000; }
    .panel { background: #ffffff; border-color: #999999; page-break-inside: avoid; }
    .badge { border: 1px solid #000000; color: #000000; background: #ffffff; }
    pre { white-space: pre-wrap; border: 1px solid #cccccc; }
    .page-footer { display: none; }
}
"#;

/// Content Security Policy for the exported page: no network, no scripts.
pub const CSP: &str = "default-src 'none'; img-src data:; style-src 'unsafe-inline';";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_has_print_rules() {
        assert!(REPORT_CSS.contains("@media print"));
    }

    #[test]
    fn css_survives_text_escaping() {
        assert!(!REPORT_CSS.contains('<'));
        assert!(!REPORT_CSS.contains('>'));
        assert!(!REPORT_CSS.contains('&'));
    }

    #[test]
    fn csp_blocks_scripts() {
        assert!(!CSP.contains("script-src"));
        assert!(CSP.contains("default-src 'none'"));
    }
}
