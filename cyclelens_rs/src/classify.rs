//! Severity, effort and risk heuristics.
//!
//! Pure functions of cycle shape and metadata. The "core"/"shared" name
//! check is a naming-convention heuristic: a plain, case-sensitive substring
//! match on the package name.

use crate::types::{Effort, RiskLevel};

pub use cyclelens_report::types::Severity;

/// Package name fragments that mark a package as widely depended on.
const CORE_MARKERS: [&str; 2] = ["core", "shared"];

/// Whether any package looks like a core/shared package by name.
pub fn touches_core_package(packages: &[String]) -> bool {
    packages
        .iter()
        .any(|name| CORE_MARKERS.iter().any(|marker| name.contains(marker)))
}

/// Executive-summary severity, first matching rule wins:
///
/// 1. any core/shared package → critical
/// 2. more than 5 packages → critical
/// 3. 4+ packages or priority score above 7 → high
/// 4. exactly 3 packages → medium
/// 5. otherwise low
pub fn classify_severity(packages: &[String], priority_score: f64) -> Severity {
    let len = packages.len();
    if touches_core_package(packages) || len > 5 {
        Severity::Critical
    } else if len >= 4 || priority_score > 7.0 {
        Severity::High
    } else if len == 3 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Effort to break the cycle.
pub fn classify_effort(packages: &[String], complexity: f64) -> Effort {
    let len = packages.len();
    if len == 2 && complexity < 3.0 {
        Effort::Low
    } else if len > 4 || complexity > 7.0 {
        Effort::High
    } else {
        Effort::Medium
    }
}

/// Share of the monorepo affected, in percent (unrounded).
///
/// Zero when the package count is unknown.
pub fn affected_percentage(total_affected: usize, total_packages: usize) -> f64 {
    if total_packages == 0 {
        return 0.0;
    }
    total_affected as f64 / total_packages as f64 * 100.0
}

/// Blast-radius risk from the affected share.
///
/// Thresholds are strict: >50 critical, >25 high, a core/shared member
/// lifts anything below that to high, >10 medium, otherwise low.
pub fn classify_risk(total_affected: usize, total_packages: usize, packages: &[String]) -> RiskLevel {
    if total_packages == 0 {
        return RiskLevel::Low;
    }
    let percentage = affected_percentage(total_affected, total_packages);
    if percentage > 50.0 {
        RiskLevel::Critical
    } else if percentage > 25.0 {
        RiskLevel::High
    } else if touches_core_package(packages) {
        RiskLevel::High
    } else if percentage > 10.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
