//! JSON rendition of a report.

use serde_json::{Map, Value};

use super::ReportOptions;
use super::builder::ReportData;
use crate::error::Result;

/// Pretty-printed object holding only the enabled sections.
///
/// With every section and the metadata disabled this is `{}`.
pub fn generate_json_report(data: &ReportData, options: &ReportOptions) -> Result<String> {
    let sections = &options.sections;
    let mut root = Map::new();

    if options.include_metadata {
        root.insert("metadata".into(), serde_json::to_value(&data.metadata)?);
    }
    if sections.health_score {
        root.insert("healthScore".into(), serde_json::to_value(&data.health_score)?);
    }
    if sections.circular_dependencies {
        root.insert(
            "circularDependencies".into(),
            serde_json::to_value(&data.circular_dependencies)?,
        );
    }
    if sections.version_conflicts {
        root.insert(
            "versionConflicts".into(),
            serde_json::to_value(&data.version_conflicts)?,
        );
    }
    if sections.fix_recommendations {
        root.insert(
            "fixRecommendations".into(),
            serde_json::to_value(&data.fix_recommendations)?,
        );
    }

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportSections, build_report_data};
    use crate::types::AnalysisResult;

    fn parse(options: &ReportOptions) -> Map<String, Value> {
        let data = build_report_data(&AnalysisResult::default());
        let text = generate_json_report(&data, options).expect("json");
        match serde_json::from_str(&text).expect("valid json") {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn everything_disabled_is_empty_object() {
        let options = ReportOptions {
            sections: ReportSections::none(),
            include_metadata: false,
            ..Default::default()
        };
        assert!(parse(&options).is_empty());
    }

    #[test]
    fn everything_enabled_has_five_keys() {
        let map = parse(&ReportOptions::default());
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "circularDependencies",
                "fixRecommendations",
                "healthScore",
                "metadata",
                "versionConflicts"
            ]
        );
    }

    #[test]
    fn single_section() {
        let options = ReportOptions {
            sections: ReportSections {
                version_conflicts: true,
                ..ReportSections::none()
            },
            include_metadata: false,
            ..Default::default()
        };
        let map = parse(&options);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("versionConflicts"));
    }

    #[test]
    fn output_is_pretty_printed() {
        let data = build_report_data(&AnalysisResult::default());
        let text = generate_json_report(&data, &ReportOptions::default()).expect("json");
        assert!(text.contains("\n  \""));
    }
}
