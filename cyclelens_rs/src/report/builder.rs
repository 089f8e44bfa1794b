//! Canonical report model and the builders that fill it.
//!
//! Two upstream shapes (legacy and comprehensive) collapse into one
//! [`ReportData`]; every serializer reads only this model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::cycle_id;
use crate::types::{
    AnalysisInput, AnalysisResult, CircularDependencyInfo, ComprehensiveAnalysisResult, CycleKind,
    Effort, FindingSeverity, HealthFactor, HealthScoreInput, VersionConflict,
};
use cyclelens_report::types::Severity;

/// Suitability from which a recommendation counts as high impact.
pub const HIGH_IMPACT_SUITABILITY: f64 = 7.0;
/// Suitability from which a recommendation counts as medium impact.
pub const MEDIUM_IMPACT_SUITABILITY: f64 = 4.0;

const UNKNOWN_PROJECT: &str = "Unknown Project";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub project_name: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_duration_ms: Option<f64>,
    pub total_packages: usize,
    pub tool_version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthFactorSummary {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreSummary {
    pub overall: f64,
    pub grade: String,
    pub factors: Vec<HealthFactorSummary>,
}

/// Counts per severity bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub cycle_id: String,
    pub packages: Vec<String>,
    #[serde(rename = "type")]
    pub kind: CycleKind,
    pub severity: Severity,
    pub priority_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularDependencySummary {
    pub total: usize,
    #[serde(flatten)]
    pub counts: SeverityCounts,
    pub cycles: Vec<CycleSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    pub package: String,
    pub versions: Vec<String>,
    pub severity: Severity,
    pub affected_packages: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConflictSummary {
    pub total: usize,
    #[serde(flatten)]
    pub counts: SeverityCounts,
    pub conflicts: Vec<ConflictSummary>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl ImpactLevel {
    pub fn from_suitability(suitability: f64) -> Self {
        if suitability >= HIGH_IMPACT_SUITABILITY {
            ImpactLevel::High
        } else if suitability >= MEDIUM_IMPACT_SUITABILITY {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::High => "high",
            ImpactLevel::Medium => "medium",
            ImpactLevel::Low => "low",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRecommendation {
    pub cycle_id: String,
    pub packages: Vec<String>,
    pub strategy: String,
    pub title: String,
    pub description: String,
    pub effort: Effort,
    pub suitability: f64,
    pub priority: f64,
    pub impact: ImpactLevel,
    pub quick_win: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub metadata: ReportMetadata,
    pub health_score: HealthScoreSummary,
    pub circular_dependencies: CircularDependencySummary,
    pub version_conflicts: VersionConflictSummary,
    pub fix_recommendations: Vec<FixRecommendation>,
}

/// Collapse an upstream severity label into a report bucket.
pub fn bucket_severity(severity: FindingSeverity) -> Severity {
    match severity {
        FindingSeverity::Critical => Severity::Critical,
        FindingSeverity::Warning => Severity::High,
        FindingSeverity::Info => Severity::Medium,
        FindingSeverity::Other => Severity::Low,
    }
}

/// Letter grade of a 0-100 score.
pub fn grade_for(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

pub fn is_quick_win(effort: Effort, suitability: f64) -> bool {
    effort == Effort::Low && suitability >= HIGH_IMPACT_SUITABILITY
}

fn health_score(overall: f64, grade: Option<&str>, factors: Option<&[HealthFactor]>) -> HealthScoreSummary {
    let factors = match factors {
        Some(factors) if !factors.is_empty() => factors
            .iter()
            .map(|f| HealthFactorSummary {
                name: f.name.clone(),
                score: f.score,
                weight: f.weight,
                description: f.description.clone(),
            })
            .collect(),
        _ => vec![HealthFactorSummary {
            name: "Overall".to_string(),
            score: overall,
            weight: 1.0,
            description: "Overall dependency health".to_string(),
        }],
    };
    HealthScoreSummary {
        overall,
        grade: grade
            .map(str::to_string)
            .unwrap_or_else(|| grade_for(overall).to_string()),
        factors,
    }
}

fn circular_summary(cycles: &[CircularDependencyInfo]) -> CircularDependencySummary {
    let mut counts = SeverityCounts::default();
    let cycles = cycles
        .iter()
        .map(|info| {
            let severity = bucket_severity(info.severity);
            counts.add(severity);
            CycleSummary {
                cycle_id: cycle_id(&info.cycle),
                packages: info.packages().to_vec(),
                kind: info.kind,
                severity,
                priority_score: info.priority_score,
            }
        })
        .collect::<Vec<_>>();
    CircularDependencySummary {
        total: cycles.len(),
        counts,
        cycles,
    }
}

fn conflict_summary(conflicts: &[VersionConflict]) -> VersionConflictSummary {
    let mut counts = SeverityCounts::default();
    let conflicts = conflicts
        .iter()
        .map(|conflict| {
            let severity = bucket_severity(conflict.severity);
            counts.add(severity);
            ConflictSummary {
                package: conflict.package.clone(),
                versions: conflict.versions.clone(),
                severity,
                affected_packages: conflict.affected_packages.clone(),
            }
        })
        .collect::<Vec<_>>();
    VersionConflictSummary {
        total: conflicts.len(),
        counts,
        conflicts,
    }
}

/// One recommendation per strategy per cycle, highest priority first.
///
/// The sort is stable, so equal priorities keep cycle/strategy order.
pub fn fix_recommendations(cycles: &[CircularDependencyInfo]) -> Vec<FixRecommendation> {
    let mut recommendations: Vec<FixRecommendation> = cycles
        .iter()
        .flat_map(|info| {
            let id = cycle_id(&info.cycle);
            info.fix_strategies.iter().map(move |strategy| FixRecommendation {
                cycle_id: id.clone(),
                packages: info.packages().to_vec(),
                strategy: strategy.kind.clone(),
                title: strategy.title.clone(),
                description: strategy.description.clone(),
                effort: strategy.effort,
                suitability: strategy.suitability,
                priority: strategy.priority.unwrap_or(info.priority_score),
                impact: ImpactLevel::from_suitability(strategy.suitability),
                quick_win: is_quick_win(strategy.effort, strategy.suitability),
            })
        })
        .collect();
    recommendations.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    recommendations
}

fn metadata(
    project_name: &str,
    total_packages: usize,
    analyzed_at: Option<DateTime<Utc>>,
    analysis_duration_ms: Option<f64>,
) -> ReportMetadata {
    ReportMetadata {
        project_name: project_name.to_string(),
        generated_at: Utc::now(),
        analyzed_at,
        analysis_duration_ms,
        total_packages,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn project_or_unknown(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_PROJECT,
    }
}

/// Build from the legacy shape.
pub fn build_report_data(result: &AnalysisResult) -> ReportData {
    ReportData {
        metadata: metadata(
            project_or_unknown(result.project_name.as_deref()),
            result.total_packages,
            result.analyzed_at,
            None,
        ),
        health_score: health_score(result.health_score, None, result.health_factors.as_deref()),
        circular_dependencies: circular_summary(&result.circular_dependencies),
        version_conflicts: conflict_summary(&result.version_conflicts),
        fix_recommendations: fix_recommendations(&result.circular_dependencies),
    }
}

/// Build from the comprehensive shape; the health score may be a bare
/// number or a structured breakdown.
pub fn build_report_data_from_comprehensive(result: &ComprehensiveAnalysisResult) -> ReportData {
    let health = match &result.health_score {
        HealthScoreInput::Score(score) => health_score(*score, None, None),
        HealthScoreInput::Detailed(details) => health_score(
            details.overall,
            details.grade.as_deref(),
            Some(details.factors.as_slice()),
        ),
    };
    let meta = &result.metadata;
    ReportData {
        metadata: metadata(
            project_or_unknown(Some(&meta.project_name)),
            meta.total_packages,
            meta.analyzed_at,
            meta.analysis_duration_ms,
        ),
        health_score: health,
        circular_dependencies: circular_summary(&result.circular_dependencies),
        version_conflicts: conflict_summary(&result.version_conflicts),
        fix_recommendations: fix_recommendations(&result.circular_dependencies),
    }
}

pub fn build_from_input(input: &AnalysisInput) -> ReportData {
    match input {
        AnalysisInput::Comprehensive(result) => build_report_data_from_comprehensive(result),
        AnalysisInput::Legacy(result) => build_report_data(result),
    }
}
