use assert_cmd::Command;
use harscope_core::har::Status;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[allow(deprecated)]
fn get_harscope_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("harscope")
}

fn har_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Test that the full report matches the reference output byte for byte
#[test]
fn test_report_matches_reference_output() {
    // Arrange
    let input = fixture_path("sample.har");
    let expected = fs::read_to_string(fixture_path("sample.report.txt")).unwrap();

    // Act & Assert
    Command::new(get_harscope_bin())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

/// Test that an empty capture still prints every table header
#[test]
fn test_empty_capture_prints_headers_only() {
    let expected = fs::read_to_string(fixture_path("empty.report.txt")).unwrap();

    Command::new(get_harscope_bin())
        .arg(fixture_path("empty.har"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_malformed_json_prints_single_error_line() {
    let output = Command::new(get_harscope_bin())
        .arg(fixture_path("malformed.har"))
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Error reading file: "));
    assert!(!stdout.contains("Total Requests"));
}

#[test]
fn test_missing_file_prints_error() {
    Command::new(get_harscope_bin())
        .arg("/nonexistent/capture.har")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Error reading file: "))
        .stdout(predicate::str::contains("Total Requests").not());
}

#[test]
fn test_non_object_root_is_a_load_error() {
    let file = har_file("[1, 2, 3]");

    Command::new(get_harscope_bin())
        .arg(file.path())
        .assert()
        .failure()
        .stdout(
            "Error reading file: expected a JSON object at the top level, found an array\n",
        );
}

#[test]
fn test_no_arguments_prints_usage() {
    Command::new(get_harscope_bin())
        .assert()
        .failure()
        .stdout("Usage: harscope <file_path>\n");
}

#[test]
fn test_verbose_logging_keeps_stdout_clean() {
    let expected = fs::read_to_string(fixture_path("sample.report.txt")).unwrap();

    Command::new(get_harscope_bin())
        .arg("--verbose")
        .arg(fixture_path("sample.har"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected))
        .stderr(predicate::str::contains("Successfully parsed HAR file with 17 entries"));
}

/// Test that an entry without a response still shows up using defaults
#[test]
fn test_entry_without_response_uses_defaults() {
    // Arrange
    let file = har_file(
        r#"{"log": {"entries": [
            {"time": 10, "request": {"url": "https://example.com/a"},
             "response": {"status": 200, "content": {"size": 512}},
             "timings": {"wait": 8, "receive": 2, "connect": 0}},
            {"request": {"url": "https://example.com/bare"}}
        ]}}"#,
    );

    // Act
    let output = Command::new(get_harscope_bin())
        .arg(file.path())
        .output()
        .unwrap();

    // Assert
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Total Requests: 2\n"));
    assert!(stdout.contains("0.00       | N/A    | 0.00       | https://example.com/bare\n"));
    assert!(stdout.contains("0.00       | 0.00       | https://example.com/bare\n"));
    assert!(stdout.contains("0.0      | 0.0      | 0.0      | https://example.com/bare\n"));
    assert!(stdout.contains("0.50       | 10.00      | https://example.com/a\n"));
}

/// Test the library entry point used by the binary
#[test]
fn test_build_report_ranks_sample() {
    // Arrange
    let input = fixture_path("sample.har");

    // Act
    let report = harscope_cli::commands::report::build_report(&input).unwrap();

    // Assert
    assert_eq!(report.total_requests, 17);
    assert_eq!(report.slowest.len(), 15);
    assert_eq!(report.largest.len(), 15);
    assert_eq!(report.timing_breakdown.len(), 10);

    // 1250ms tie: app.js was recorded before users?page=1
    assert_eq!(report.slowest[2].url, "https://cdn.example.com/static/app.js");
    assert_eq!(
        report.slowest[3].url,
        "https://api.example.com/api/v1/users?page=1"
    );
    assert_eq!(report.slowest[0].status, Status::Code(500));

    // 1 MiB tie: hero.jpg was recorded before vendor.js
    assert_eq!(report.largest[0].url, "https://cdn.example.com/img/hero.jpg");
    assert_eq!(report.largest[1].url, "https://cdn.example.com/static/vendor.js");
    assert_eq!(report.largest[0].size_kb(), 1024.0);

    assert_eq!(report.timing_breakdown[..], report.slowest[..10]);
}

#[test]
fn test_build_report_wraps_load_error() {
    let err = harscope_cli::commands::report::build_report(&fixture_path("malformed.har"))
        .unwrap_err();

    assert!(format!("{:#}", err).starts_with("Error reading file: "));
}

#[test]
fn test_long_urls_are_truncated_everywhere() {
    let long_url = format!("https://example.com/{}", "p".repeat(200));
    let file = har_file(&format!(
        r#"{{"log": {{"entries": [{{"time": 1, "request": {{"url": "{long_url}"}}}}]}}}}"#
    ));

    let output = Command::new(get_harscope_bin())
        .arg(file.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let shown = &long_url[..100];
    assert_eq!(stdout.matches(&format!("| {shown}\n")).count(), 3);
    assert!(!stdout.contains(&long_url[..101]));
}
