//! Diagram renderers for a laid-out cycle.
//!
//! Both renderers consume the same [`CycleLayout`]; the assembler asks for
//! each variant explicitly. The vector output is embedded verbatim into the
//! exported page, so every piece of text in it goes through [`escape_xml`].

use std::fmt::Write as _;

use super::geometry::CycleLayout;
use cyclelens_report::types::CycleEdge;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 460.0;
const NODE_RADIUS: f64 = 30.0;
const LABEL_MAX_CHARS: usize = 10;
const EDGE_BEND: f64 = 18.0;

/// Color scheme of the vector diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

struct Palette {
    background: &'static str,
    node_fill: &'static str,
    node_stroke: &'static str,
    text: &'static str,
    muted: &'static str,
    edge: &'static str,
    breaking: &'static str,
    origin: &'static str,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                node_fill: "#f6f8fa",
                node_stroke: "#57606a",
                text: "#1f2328",
                muted: "#57606a",
                edge: "#8c959f",
                breaking: "#cf222e",
                origin: "#bf8700",
            },
            Theme::Dark => Palette {
                background: "#0d1117",
                node_fill: "#161b22",
                node_stroke: "#8b949e",
                text: "#e6edf3",
                muted: "#8b949e",
                edge: "#6e7681",
                breaking: "#f85149",
                origin: "#d29922",
            },
        }
    }
}

/// The two ways a cycle can be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramRenderer {
    /// Scalable SVG with a themed palette
    Vector { theme: Theme },
    /// Fixed-width ASCII boxes and arrows
    Text,
}

impl DiagramRenderer {
    pub fn render(&self, layout: &CycleLayout) -> String {
        match self {
            DiagramRenderer::Vector { theme } => render_svg(layout, *theme),
            DiagramRenderer::Text => render_ascii(layout),
        }
    }
}

/// Escape text for XML/HTML content and attribute values.
pub fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{head}…")
    }
}

fn render_svg(layout: &CycleLayout, theme: Theme) -> String {
    let p = theme.palette();
    let mut svg = String::new();

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="Circular dependency diagram">"#,
        w = WIDTH,
        h = HEIGHT
    );
    let _ = write!(
        svg,
        concat!(
            "<defs>",
            r#"<marker id="arrow" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="7" markerHeight="7" orient="auto"><path d="M0,0 L10,5 L0,10 z" fill="{edge}"/></marker>"#,
            r#"<marker id="arrow-break" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="7" markerHeight="7" orient="auto"><path d="M0,0 L10,5 L0,10 z" fill="{breaking}"/></marker>"#,
            r#"<filter id="glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="3" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            "</defs>"
        ),
        edge = p.edge,
        breaking = p.breaking
    );
    let _ = write!(
        svg,
        r#"<rect width="{WIDTH}" height="{HEIGHT}" rx="12" fill="{}"/>"#,
        p.background
    );

    // Edges first so nodes paint over the line ends.
    for edge in &layout.edges {
        if let Some(path) = edge_path(layout, edge) {
            if edge.is_breaking_point {
                let _ = write!(
                    svg,
                    r#"<path d="{path}" fill="none" stroke="{}" stroke-width="3" stroke-dasharray="8 5" filter="url(#glow)" marker-end="url(#arrow-break)"><title>Breaking point: {} → {}</title></path>"#,
                    p.breaking,
                    escape_xml(&edge.from),
                    escape_xml(&edge.to)
                );
            } else {
                let _ = write!(
                    svg,
                    r#"<path d="{path}" fill="none" stroke="{}" stroke-width="2" marker-end="url(#arrow)"/>"#,
                    p.edge
                );
            }
        }
    }

    for node in &layout.nodes {
        let (stroke, stroke_width) = if node.is_origin {
            (p.origin, 3)
        } else {
            (p.node_stroke, 2)
        };
        let _ = write!(
            svg,
            r#"<g class="node"><title>{}</title><circle cx="{}" cy="{}" r="{NODE_RADIUS}" fill="{}" stroke="{stroke}" stroke-width="{stroke_width}"/><text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="system-ui, sans-serif" font-size="11" fill="{}">{}</text></g>"#,
            escape_xml(&node.id),
            node.x,
            node.y,
            p.node_fill,
            node.x,
            node.y,
            p.text,
            escape_xml(&truncate_label(&node.label))
        );
    }

    render_legend(&mut svg, &p, layout.nodes.iter().any(|n| n.is_origin));
    svg.push_str("</svg>");
    svg
}

fn render_legend(svg: &mut String, p: &Palette, has_origin: bool) {
    let y = HEIGHT - 40.0;
    let _ = write!(
        svg,
        r#"<g class="legend" font-family="system-ui, sans-serif" font-size="11" fill="{muted}"><line x1="20" y1="{y}" x2="50" y2="{y}" stroke="{edge}" stroke-width="2"/><text x="56" y="{ty}">Dependency</text><line x1="140" y1="{y}" x2="170" y2="{y}" stroke="{breaking}" stroke-width="3" stroke-dasharray="8 5"/><text x="176" y="{ty}">Breaking point</text>"#,
        muted = p.muted,
        edge = p.edge,
        breaking = p.breaking,
        ty = y + 4.0
    );
    if has_origin {
        let _ = write!(
            svg,
            r#"<circle cx="286" cy="{y}" r="7" fill="none" stroke="{origin}" stroke-width="3"/><text x="298" y="{ty}">Root cause</text>"#,
            origin = p.origin,
            ty = y + 4.0
        );
    }
    svg.push_str("</g>");
}

/// Quadratic curve between two node rims, bent to the right of travel so
/// that `a → b` and `b → a` don't overlap.
fn edge_path(layout: &CycleLayout, edge: &CycleEdge) -> Option<String> {
    let from = layout.node(&edge.from)?;
    let to = layout.node(&edge.to)?;
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= 2.0 * NODE_RADIUS {
        // Self-loop or overlapping nodes: small arc above the node.
        let (x, y) = (from.x, from.y - NODE_RADIUS);
        return Some(format!(
            "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            x - 10.0,
            y,
            x - 30.0,
            y - 40.0,
            x + 30.0,
            y - 40.0,
            x + 10.0,
            y
        ));
    }
    let (ux, uy) = (dx / len, dy / len);
    let (sx, sy) = (from.x + ux * NODE_RADIUS, from.y + uy * NODE_RADIUS);
    let (ex, ey) = (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS);
    let (cx, cy) = ((sx + ex) / 2.0 - uy * EDGE_BEND, (sy + ey) / 2.0 + ux * EDGE_BEND);
    Some(format!(
        "M{sx:.1},{sy:.1} Q{cx:.1},{cy:.1} {ex:.1},{ey:.1}"
    ))
}

fn render_ascii(layout: &CycleLayout) -> String {
    let width = layout
        .nodes
        .iter()
        .map(|n| n.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(8)
        + 4;
    let center = " ".repeat(width / 2);
    let border = format!("+{}+", "-".repeat(width - 2));

    let draw_box = |out: &mut String, name: &str| {
        let pad = width - 4 - name.chars().count();
        let _ = writeln!(out, "{border}");
        let _ = writeln!(out, "| {name}{} |", " ".repeat(pad));
        let _ = writeln!(out, "{border}");
    };

    let mut out = String::new();
    let Some(first) = layout.nodes.first() else {
        return out;
    };

    for edge in &layout.edges {
        draw_box(&mut out, &edge.from);
        if edge.is_breaking_point {
            let location = edge
                .trace
                .as_ref()
                .map(|t| format!(" ({}:{})", t.file, t.line))
                .unwrap_or_default();
            let _ = writeln!(out, "{center}X   <-- BREAK HERE{location}");
        } else {
            let _ = writeln!(out, "{center}|");
        }
        let _ = writeln!(out, "{center}v");
    }
    draw_box(&mut out, &first.id);
    out.push_str("(cycle repeats)\n");
    out
}
