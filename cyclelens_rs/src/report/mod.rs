//! Analysis report serializer.
//!
//! `AnalysisInput -> ReportData -> (json | html | markdown) -> ReportResult`.
//! Section gating and metadata inclusion come from [`ReportOptions`] and are
//! honored identically by all three formats.

pub mod builder;
pub mod html;
pub mod json;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::diagnostic::export::sanitize_filename_segment;
use crate::error::{ReportError, Result};

pub use builder::{
    ReportData, build_from_input, build_report_data, build_report_data_from_comprehensive,
};

/// Output format of the serializer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Html,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Which report sections to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSections {
    pub health_score: bool,
    pub circular_dependencies: bool,
    pub version_conflicts: bool,
    pub fix_recommendations: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self::all()
    }
}

impl ReportSections {
    pub fn all() -> Self {
        Self {
            health_score: true,
            circular_dependencies: true,
            version_conflicts: true,
            fix_recommendations: true,
        }
    }

    pub fn none() -> Self {
        Self {
            health_score: false,
            circular_dependencies: false,
            version_conflicts: false,
            fix_recommendations: false,
        }
    }

    /// Enable only the named sections.
    ///
    /// Accepts camelCase, kebab-case and snake_case spellings plus the short
    /// aliases `health`, `cycles`, `conflicts` and `recommendations`.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections = Self::none();
        for name in names {
            let raw = name.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let key: String = raw
                .chars()
                .filter(|c| *c != '-' && *c != '_')
                .collect::<String>()
                .to_ascii_lowercase();
            match key.as_str() {
                "healthscore" | "health" => sections.health_score = true,
                "circulardependencies" | "cycles" => sections.circular_dependencies = true,
                "versionconflicts" | "conflicts" => sections.version_conflicts = true,
                "fixrecommendations" | "recommendations" => sections.fix_recommendations = true,
                _ => return Err(ReportError::UnknownSection(raw.to_string())),
            }
        }
        Ok(sections)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub sections: ReportSections,
    pub include_metadata: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            sections: ReportSections::all(),
            include_metadata: true,
        }
    }
}

impl ReportOptions {
    /// Options for a format given by name; unknown names fail.
    pub fn for_format(format: &str) -> Result<Self> {
        Ok(Self {
            format: format.parse()?,
            ..Self::default()
        })
    }
}

/// Serialized report ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportResult {
    pub content: Vec<u8>,
    pub filename: String,
    pub format: ReportFormat,
    pub size_bytes: usize,
}

/// `{project}-analysis-report-{YYYY-MM-DD}.{ext}`
pub fn report_filename(data: &ReportData, format: ReportFormat) -> String {
    format!(
        "{}-analysis-report-{}.{}",
        sanitize_filename_segment(&data.metadata.project_name),
        data.metadata.generated_at.format("%Y-%m-%d"),
        format.extension()
    )
}

pub fn generate_report(data: &ReportData, options: &ReportOptions) -> Result<ReportResult> {
    let content = match options.format {
        ReportFormat::Json => json::generate_json_report(data, options)?,
        ReportFormat::Html => html::generate_html_report(data, options),
        ReportFormat::Markdown => markdown::generate_markdown_report(data, options),
    };
    let content = content.into_bytes();
    let result = ReportResult {
        filename: report_filename(data, options.format),
        format: options.format,
        size_bytes: content.len(),
        content,
    };
    info!(
        file = %result.filename,
        format = %result.format,
        bytes = result.size_bytes,
        "generated analysis report"
    );
    Ok(result)
}
