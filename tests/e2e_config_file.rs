/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn full_report() -> String {
    fixtures_path()
        .join("gradle-dependencies.txt")
        .to_str()
        .unwrap()
        .to_string()
}

fn run_in(dir: &Path, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("deptree")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_configuration_and_format() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
format: flat
configuration: compileClasspath
"#,
        );

        let output = run_in(dir.path(), &["-i", &full_report()]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["configuration"], "compileClasspath");
        assert_eq!(json["by_identity"]["org.opensearch:opensearch"], "2.18.0");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_strict() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
configuration: runtimeClasspath
strict: true
"#,
        );

        let output = run_in(dir.path(), &["-i", &full_report()]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = run_in(dir.path(), &["-i", &full_report(), "-c", "compileClasspath"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        // Default format is nested JSON
        assert!(json["dependencies"].is_object());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
        assert!(!stderr.contains("Loaded config from"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
configuration: compileClasspath
exclude_packages:
  - guava
"#,
        );

        let output = run_in(dir.path(), &["-i", &full_report()]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'exclude_packages' will be ignored"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom-config.yml");
        write_config(
            &config_path,
            r#"
format: tree
configuration: compileClasspath
lossless: true
"#,
        );

        let output = run_in(
            dir.path(),
            &["-i", &full_report(), "--config", config_path.to_str().unwrap()],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("+--- org.opensearch:opensearch:2.18.0\n|    +--- "));
        assert!(stdout.ends_with("\\--- org.apache.lucene:lucene-core:9.12.0 (c)\n"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();
        let output = run_in(
            dir.path(),
            &["-i", &full_report(), "--config", "nonexistent-config.yml"],
        );
        assert_eq!(output.status.code(), Some(3)); // ApplicationError
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_value_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "indent_width: 0\n");

        let output = run_in(
            dir.path(),
            &["-i", &full_report(), "--config", config_path.to_str().unwrap()],
        );
        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("indent_width must be at least 1"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
format: tree
configuration: compileClasspath
"#,
        );

        let output = run_in(dir.path(), &["-i", &full_report(), "-f", "flat"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(json["by_path"].is_object());
    }

    #[test]
    fn test_cli_configuration_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
format: flat
configuration: annotationProcessor
"#,
        );

        let output = run_in(
            dir.path(),
            &["-i", &full_report(), "-c", "runtimeClasspath"],
        );

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["configuration"], "runtimeClasspath");
        assert_eq!(json["by_identity"]["org.opensearch:opensearch-core"], "2.18.0");
    }

    #[test]
    fn test_cli_strict_with_config_non_strict() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deptree.config.yml"),
            r#"
configuration: runtimeClasspath
strict: false
"#,
        );

        let output = run_in(dir.path(), &["-i", &full_report(), "--strict"]);
        assert_eq!(output.status.code(), Some(1));
    }
}
