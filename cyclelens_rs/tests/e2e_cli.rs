//! End-to-end CLI tests for cyclelens.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_path().join(name)
}

/// Get a command pointing to the cyclelens binary
fn cyclelens() -> Command {
    let mut cmd = cargo_bin_cmd!("cyclelens");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The single file written into `dir` with the given extension.
fn written_file(dir: &Path, extension: &str) -> PathBuf {
    let files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read out dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    assert_eq!(files.len(), 1, "expected one .{extension} file, got {files:?}");
    files[0].clone()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        cyclelens()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("diagnose"))
            .stdout(predicate::str::contains("report"));
    }

    #[test]
    fn shows_version() {
        cyclelens()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_input_fails_with_context() {
        cyclelens()
            .args(["report", "--input", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"));
    }
}

// ============================================
// Diagnose
// ============================================

mod diagnose {
    use super::*;

    #[test]
    fn exports_html_and_prints_summary() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["diagnose", "--input"])
            .arg(fixture("diagnose_bundle.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("a-b-c"))
            .stdout(predicate::str::contains("Breaking point"))
            .stdout(predicate::str::contains("Wrote"));

        let html_path = written_file(out.path(), "html");
        let name = html_path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name");
        assert!(name.starts_with("acme-diagnostic-a-b-c-"), "{name}");

        let html = fs::read_to_string(&html_path).expect("read html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("@media print"));
        assert!(html.contains("BREAK HERE"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn json_output_carries_full_report() {
        let out = TempDir::new().expect("temp dir");
        let output = cyclelens()
            .current_dir(out.path())
            .args(["diagnose", "--json", "--input"])
            .arg(fixture("diagnose_bundle.json"))
            .output()
            .expect("run cyclelens");
        assert!(output.status.success());

        let report: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("report json");
        assert_eq!(report["cycleId"], "a-b-c");
        assert_eq!(report["summary"]["severity"], "high");
        assert_eq!(report["impact"]["directCount"], 3);
        assert_eq!(report["impact"]["indirectCount"], 3);
        assert_eq!(report["impact"]["percentageOfMonorepo"], 100);
        assert_eq!(report["impact"]["riskLevel"], "critical");
        assert_eq!(report["visualization"]["breakingPoint"]["from"], "@acme/c");
        assert_eq!(report["visualization"]["breakingPoint"]["to"], "@acme/a");
        assert_eq!(report["fixStrategies"][0]["title"], "Extract the helper into @acme/shared-format");
        assert_eq!(report["fixStrategies"][0]["estimatedTime"], "30 minutes");
        assert_eq!(report["fixStrategies"][1]["estimatedTime"], "1-2 hours");
        assert_eq!(report["rootCause"]["alternativeCandidates"][0]["package"], "@acme/b");
        assert_eq!(report["rootCause"]["alternativeCandidates"][0]["confidence"], 52.0);
        assert_eq!(report["relatedCycles"][0]["recommendFixTogether"], true);

        // nothing exported in JSON mode
        assert_eq!(fs::read_dir(out.path()).expect("read dir").count(), 0);
    }

    #[test]
    fn second_cycle_by_index() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["diagnose", "--json", "--cycle", "1", "--input"])
            .arg(fixture("diagnose_bundle.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("\"cycleId\": \"a-b-x\""))
            .stdout(predicate::str::contains("Root cause analysis not available"));
    }

    #[test]
    fn out_of_range_cycle_fails() {
        cyclelens()
            .args(["diagnose", "--cycle", "7", "--input"])
            .arg(fixture("diagnose_bundle.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("out of range"));
    }

    #[test]
    fn project_flag_overrides_bundle_name() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["diagnose", "--project", "../escape me", "--dark", "--input"])
            .arg(fixture("diagnose_bundle.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();

        let html_path = written_file(out.path(), "html");
        let name = html_path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name");
        assert!(name.starts_with("escape-me-diagnostic-"), "{name}");
        let html = fs::read_to_string(&html_path).expect("read html");
        assert!(html.contains("class=\"dark\""));
    }
}

// ============================================
// Report
// ============================================

mod report {
    use super::*;

    #[test]
    fn legacy_input_to_json() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["report", "--input"])
            .arg(fixture("analysis_legacy.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("acme-analysis-report-"));

        let path = written_file(out.path(), "json");
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("json");
        assert_eq!(value.as_object().map(|o| o.len()), Some(5));
        assert_eq!(value["healthScore"]["grade"], "C");
        assert_eq!(value["circularDependencies"]["critical"], 1);
        assert_eq!(value["circularDependencies"]["medium"], 1);
        assert_eq!(value["versionConflicts"]["high"], 1);
        let recs = value["fixRecommendations"].as_array().expect("recommendations");
        assert_eq!(recs[0]["title"], "Merge a and b");
        assert_eq!(recs[1]["quickWin"], true);
    }

    #[test]
    fn comprehensive_input_to_markdown() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["report", "--format", "markdown", "--input"])
            .arg(fixture("analysis_comprehensive.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();

        let path = written_file(out.path(), "md");
        let md = fs::read_to_string(path).expect("read");
        assert!(md.starts_with("# Dependency Analysis Report: acme-platform"));
        assert!(md.contains("**91 / 100** (grade A)"));
        assert!(md.contains("| Version consistency | 97 | 50% |"));
    }

    #[test]
    fn html_escapes_hostile_names() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args(["report", "--format", "html", "--input"])
            .arg(fixture("analysis_xss.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();

        let html = fs::read_to_string(written_file(out.path(), "html")).expect("read");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn sections_and_metadata_flags() {
        let out = TempDir::new().expect("temp dir");
        cyclelens()
            .current_dir(out.path())
            .args([
                "report",
                "--sections",
                "healthScore,versionConflicts",
                "--no-metadata",
                "--input",
            ])
            .arg(fixture("analysis_legacy.json"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();

        let value: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(written_file(out.path(), "json")).expect("read"),
        )
        .expect("json");
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["healthScore", "versionConflicts"]);
    }

    #[test]
    fn unsupported_format_fails() {
        cyclelens()
            .args(["report", "--format", "pdf", "--input"])
            .arg(fixture("analysis_legacy.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported report format: pdf"));
    }

    #[test]
    fn unknown_section_fails() {
        cyclelens()
            .args(["report", "--sections", "charts", "--input"])
            .arg(fixture("analysis_legacy.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown report section: charts"));
    }

    #[test]
    fn config_file_sets_defaults() {
        let root = TempDir::new().expect("temp dir");
        let config_dir = root.path().join(".cyclelens");
        fs::create_dir_all(&config_dir).expect("config dir");
        fs::write(
            config_dir.join("config.toml"),
            "[report]\nformat = \"html\"\noutput_dir = \"out\"\n",
        )
        .expect("write config");

        cyclelens()
            .current_dir(root.path())
            .args(["report", "--input"])
            .arg(fixture("analysis_legacy.json"))
            .assert()
            .success();

        let html = fs::read_to_string(written_file(&root.path().join("out"), "html")).expect("read");
        assert!(html.contains("@media print"));
    }
}
