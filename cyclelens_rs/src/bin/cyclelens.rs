use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use cyclelens::config::CyclelensConfig;
use cyclelens::diagnostic::{DiagnosticRequest, DiagnosticSession};
use cyclelens::graph_query::format_ripple_text;
use cyclelens::report::{ReportSections, build_from_input, generate_report};
use cyclelens::types::{AnalysisInput, DiagnosticBundle};
use cyclelens_report::types::{DiagnosticReport, RiskLevel, Severity};

#[derive(Parser, Debug)]
#[command(author, version, about = "Explain circular dependencies and export analysis reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML); defaults to .cyclelens/config.toml in the working directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Diagnose one cycle and export a self-contained HTML report
    Diagnose {
        /// Bundle JSON: {graph, cycles, totalPackages?, projectName?}
        #[arg(long, short)]
        input: PathBuf,

        /// Index of the cycle in the bundle
        #[arg(long, default_value_t = 0)]
        cycle: usize,

        /// Project name for the page title and file name
        #[arg(long)]
        project: Option<String>,

        /// Dark palette
        #[arg(long)]
        dark: bool,

        /// Print the report as JSON to stdout instead of exporting HTML
        #[arg(long)]
        json: bool,

        /// Output directory
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Serialize an analysis result as JSON, HTML or Markdown
    Report {
        /// Analysis result JSON (legacy or comprehensive shape)
        #[arg(long, short)]
        input: PathBuf,

        /// json, html or markdown
        #[arg(long, short)]
        format: Option<String>,

        /// Comma-separated sections: healthScore, circularDependencies,
        /// versionConflicts, fixRecommendations
        #[arg(long, value_delimiter = ',')]
        sections: Option<Vec<String>>,

        /// Leave the metadata block out
        #[arg(long)]
        no_metadata: bool,

        /// Output directory
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = match &cli.config {
        Some(path) => CyclelensConfig::load_from_path(path),
        None => CyclelensConfig::load(Path::new(".")),
    };
    debug!(?config, "loaded config");

    match cli.command {
        Commands::Diagnose {
            input,
            cycle,
            project,
            dark,
            json,
            out,
        } => diagnose(&config, &input, cycle, project, dark, json, out),
        Commands::Report {
            input,
            format,
            sections,
            no_metadata,
            out,
        } => report(&config, &input, format, sections, no_metadata, out),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn diagnose(
    config: &CyclelensConfig,
    input: &Path,
    index: usize,
    project: Option<String>,
    dark: bool,
    json: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let bundle: DiagnosticBundle = read_json(input)?;
    let target = bundle.cycles.get(index).ok_or_else(|| {
        anyhow!(
            "Cycle index {index} out of range ({} cycles in {})",
            bundle.cycles.len(),
            input.display()
        )
    })?;

    let project_name = project
        .or_else(|| bundle.project_name.clone())
        .or_else(|| config.project_name.clone())
        .unwrap_or_else(|| "project".to_string());
    let dark_mode = dark || config.diagnostic.dark_mode;

    let mut request = DiagnosticRequest::new(target, &bundle.graph, &bundle.cycles);
    request.total_packages = bundle.total_packages();
    request.project_name = project_name.clone();
    request.is_dark_mode = dark_mode;
    request.ripple_max_depth = config.diagnostic.ripple_max_depth;

    let mut session = DiagnosticSession::new();
    if session.generate(&request).is_none() {
        bail!(
            "{}",
            session.error().unwrap_or("Failed to generate report")
        );
    }

    if json {
        if let Some(report) = session.report() {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        return Ok(());
    }

    let out_dir = out
        .or_else(|| config.diagnostic.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let Some(path) = session.export_to(&out_dir, &project_name, dark_mode) else {
        bail!(
            "Export failed: {}",
            session.export_error().unwrap_or("unknown error")
        );
    };
    info!(path = %path.display(), "diagnostic exported");

    if let Some(report) = session.report() {
        print_diagnostic_summary(report, &path);
    }
    Ok(())
}

fn report(
    config: &CyclelensConfig,
    input: &Path,
    format: Option<String>,
    sections: Option<Vec<String>>,
    no_metadata: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let analysis: AnalysisInput = read_json(input)?;
    let data = build_from_input(&analysis);

    let mut options = config.report.options().context("Invalid [report] config")?;
    if let Some(format) = format {
        options.format = format.parse()?;
    }
    if let Some(sections) = sections {
        options.sections = ReportSections::from_names(&sections)?;
    }
    if no_metadata {
        options.include_metadata = false;
    }

    let result = generate_report(&data, &options)?;

    let out_dir = out
        .or_else(|| config.report.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join(&result.filename);
    fs::write(&path, &result.content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {} ({}, {} bytes)",
        "Wrote".green().bold(),
        path.display(),
        result.format,
        result.size_bytes
    );
    Ok(())
}

fn severity_badge(severity: Severity) -> colored::ColoredString {
    let label = severity.as_str().to_uppercase();
    match severity {
        Severity::Critical => label.as_str().red().bold(),
        Severity::High => label.as_str().red(),
        Severity::Medium => label.as_str().yellow(),
        Severity::Low => label.as_str().green(),
    }
}

fn risk_label(risk: RiskLevel) -> colored::ColoredString {
    match risk {
        RiskLevel::Critical => risk.as_str().red().bold(),
        RiskLevel::High => risk.as_str().red(),
        RiskLevel::Medium => risk.as_str().yellow(),
        RiskLevel::Low => risk.as_str().green(),
    }
}

fn print_diagnostic_summary(report: &DiagnosticReport, path: &Path) {
    let summary = &report.summary;
    println!(
        "{} {} [{}]",
        "Cycle".bold(),
        report.cycle_id.cyan(),
        severity_badge(summary.severity)
    );
    println!("  {}", summary.description);
    let breaking = &report.visualization.breaking_point;
    println!(
        "  {} {} → {}",
        "Breaking point:".bold(),
        breaking.from.yellow(),
        breaking.to.yellow()
    );
    println!(
        "  {} {} packages ({}%), risk {}",
        "Impact:".bold(),
        report.impact.total_affected_count,
        report.impact.percentage_of_monorepo,
        risk_label(report.impact.risk_level)
    );
    println!(
        "  {} {} (effort {})",
        "Recommended:".bold(),
        summary.recommended_action,
        summary.estimated_effort.as_str()
    );
    if !report.related_cycles.is_empty() {
        println!(
            "  {} {}",
            "Related cycles:".bold(),
            report
                .related_cycles
                .iter()
                .map(|r| r.cycle_id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let ripple = format_ripple_text(&report.impact.ripple_effect);
    if !ripple.is_empty() {
        println!("\n{}", "Ripple effect:".bold());
        for line in ripple.lines() {
            println!("  {}", line.dimmed());
        }
    }
    println!("\n{} {}", "Wrote".green().bold(), path.display());
}
