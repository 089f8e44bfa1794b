//! Configuration file support for cyclelens.
//!
//! Loads optional `.cyclelens/config.toml` from the working directory.
//! Command-line flags override anything set here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::graph_query::RIPPLE_MAX_DEPTH;
use crate::report::{ReportFormat, ReportOptions, ReportSections};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CyclelensConfig {
    /// Project name used in titles and file names
    pub project_name: Option<String>,
    pub report: ReportConfig,
    pub diagnostic: DiagnosticConfig,
}

/// `[report]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// json, html or markdown
    pub format: Option<String>,
    /// Section names to emit; empty means all
    pub sections: Vec<String>,
    pub include_metadata: bool,
    pub output_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: None,
            sections: Vec::new(),
            include_metadata: true,
            output_dir: None,
        }
    }
}

impl ReportConfig {
    /// Serializer options described by this table.
    ///
    /// Unknown format or section names are errors.
    pub fn options(&self) -> Result<ReportOptions> {
        let format = match &self.format {
            Some(name) => name.parse()?,
            None => ReportFormat::default(),
        };
        let sections = if self.sections.is_empty() {
            ReportSections::all()
        } else {
            ReportSections::from_names(&self.sections)?
        };
        Ok(ReportOptions {
            format,
            sections,
            include_metadata: self.include_metadata,
        })
    }
}

/// `[diagnostic]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    pub dark_mode: bool,
    /// Depth bound of the ripple tree
    pub ripple_max_depth: usize,
    pub output_dir: Option<PathBuf>,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            ripple_max_depth: RIPPLE_MAX_DEPTH,
            output_dir: None,
        }
    }
}

impl CyclelensConfig {
    /// Load config from `.cyclelens/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".cyclelens").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config");
                Self::default()
            }
        }
    }
}
