//! Cross-cycle overlap detection.
//!
//! The target is skipped by identity: another cycle with exactly the same
//! packages is still a distinct finding and is reported.

use std::collections::HashSet;

use super::cycle_id;
use crate::types::CircularDependencyInfo;
use cyclelens_report::types::RelatedCycleInfo;

/// Overlap (percent) from which two cycles should be fixed together.
pub const FIX_TOGETHER_OVERLAP: u32 = 30;

pub fn find_related_cycles(
    target: &CircularDependencyInfo,
    all_cycles: &[CircularDependencyInfo],
) -> Vec<RelatedCycleInfo> {
    let target_packages = target.packages();

    all_cycles
        .iter()
        .filter(|other| !std::ptr::eq(*other, target))
        .filter_map(|other| {
            let other_packages = other.packages();
            let other_set: HashSet<&str> = other_packages.iter().map(String::as_str).collect();

            let mut seen = HashSet::new();
            let shared: Vec<String> = target_packages
                .iter()
                .filter(|p| other_set.contains(p.as_str()) && seen.insert(p.as_str()))
                .cloned()
                .collect();
            if shared.is_empty() {
                return None;
            }

            let larger = target_packages.len().max(other_packages.len()).max(1);
            let overlap = ((shared.len() as f64 / larger as f64) * 100.0).round() as u32;
            let fix_together = overlap >= FIX_TOGETHER_OVERLAP || shared.len() >= 2;
            let listed = shared.join(", ");
            let reason = if fix_together {
                format!(
                    "Shares {} package(s) ({listed}); fixing both cycles together avoids touching the same code twice.",
                    shared.len()
                )
            } else {
                format!("Shares {listed}; the cycles can be fixed independently.")
            };

            Some(RelatedCycleInfo {
                cycle_id: cycle_id(other_packages),
                packages: other_packages.to_vec(),
                shared_packages: shared,
                overlap_percentage: overlap.min(100),
                recommend_fix_together: fix_together,
                reason,
            })
        })
        .collect()
}
