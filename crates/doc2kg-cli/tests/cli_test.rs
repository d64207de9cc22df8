//! Black-box tests of the installed binaries.
//!
//! Argument and error handling is checked unconditionally. Extraction output is
//! checked when pdfium can be bound; otherwise those tests skip, or fail when
//! `DOC2KG_REQUIRE_PDFIUM` is set.

mod helpers;

use helpers::{pdfium_unavailable, pdfium_unavailable_json, run_bin, stdout_json, stdout_text, write_single_page_pdf};
use serde_json::Value;
use serial_test::serial;
use tempfile::tempdir;

#[test]
fn test_extract_text_missing_args() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_text"), &[]);

    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "Usage: extract_text <pdf_path>");
}

#[test]
fn test_extract_images_missing_args() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_images"), &["doc.pdf", "out"]);

    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(value["error"], "Usage: extract_images <pdf_path> <output_dir> <doc_id>");
}

#[test]
fn test_extract_text_regions_missing_args() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_text_regions"), &["doc.pdf"]);

    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(
        value["error"],
        "Usage: extract_text_regions <pdf_path> <regions_json_or_filepath>"
    );
}

#[test]
fn test_extract_text_sentences_missing_args() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_text_sentences"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error"], "Usage: extract_text_sentences <pdf_path>");
}

#[test]
fn test_cli_extract_text_missing_args_prints_plain_usage() {
    let output = run_bin(env!("CARGO_BIN_EXE_cli_extract_text"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_text(&output), "Usage: cli_extract_text <filename>");
}

#[test]
fn test_cli_extract_text_rejects_extra_args() {
    let output = run_bin(env!("CARGO_BIN_EXE_cli_extract_text"), &["a.pdf", "b.pdf"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_text(&output), "Usage: cli_extract_text <filename>");
}

#[test]
#[serial]
fn test_extra_args_are_ignored() {
    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_text"),
        &["/nonexistent/missing.pdf", "unused", "arguments"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["success"], false);
}

#[test]
fn test_help_exits_zero() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_text"), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--config"));
}

#[test]
#[serial]
fn test_extract_text_nonexistent_file() {
    let output = run_bin(env!("CARGO_BIN_EXE_extract_text"), &["/nonexistent/missing.pdf"]);

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["success"], false);
    assert!(!value["error"].as_str().unwrap().is_empty());
    assert!(value.get("text").is_none());
}

#[test]
#[serial]
fn test_extract_text_regions_invalid_json() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_single_page_pdf(&pdf, "Some text");

    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_text_regions"),
        &[pdf.to_str().unwrap(), "{not valid json"],
    );

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["success"], false);
    assert_eq!(value["error_kind"], "parse");
    assert!(value["error"].as_str().unwrap().contains("Invalid region mapping"));
}

#[test]
#[serial]
fn test_extract_images_creates_output_dir_before_failing() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("images").join("nested");

    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_images"),
        &["/nonexistent/missing.pdf", output_dir.to_str().unwrap(), "doc"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["success"], false);
    assert!(output_dir.is_dir());
}

#[test]
#[serial]
fn test_bad_config_is_reported_as_json() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[header_footer]\nband_ratio = 2.0\n").unwrap();

    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_text"),
        &["--config", config.to_str().unwrap(), "doc.pdf"],
    );

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["success"], false);
    assert_eq!(value["error_kind"], "parse");
}

#[test]
#[serial]
fn test_extract_text_success() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_single_page_pdf(&pdf, "Hello from the command line.");

    let output = run_bin(env!("CARGO_BIN_EXE_extract_text"), &[pdf.to_str().unwrap()]);
    let value = stdout_json(&output);
    if pdfium_unavailable_json(&value) {
        return;
    }

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(value["success"], true);
    assert_eq!(value["pages"], 1);
    assert!(value["text"].as_str().unwrap().contains("Hello from the command line."));
}

#[test]
#[serial]
fn test_extract_text_regions_from_file() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_single_page_pdf(&pdf, "Region text");
    let regions = dir.path().join("regions.json");
    std::fs::write(&regions, r#"{"1": [[0, 0, 1, 1]]}"#).unwrap();

    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_text_regions"),
        &[pdf.to_str().unwrap(), regions.to_str().unwrap()],
    );
    let value = stdout_json(&output);
    if pdfium_unavailable_json(&value) {
        return;
    }

    assert_eq!(value["success"], true);
    assert_eq!(value["text"], "Region text");
}

#[test]
#[serial]
fn test_extract_images_success() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_single_page_pdf(&pdf, "Rendered");
    let output_dir = dir.path().join("images");

    let output = run_bin(
        env!("CARGO_BIN_EXE_extract_images"),
        &[pdf.to_str().unwrap(), output_dir.to_str().unwrap(), "report"],
    );
    let value = stdout_json(&output);
    if pdfium_unavailable_json(&value) {
        return;
    }

    assert_eq!(value["success"], true);
    assert_eq!(value["images"], serde_json::json!(["report.1.png"]));
    assert!(output_dir.join("report.1.png").is_file());
}

#[test]
#[serial]
fn test_cli_extract_text_prints_raw_text() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("doc.pdf");
    write_single_page_pdf(&pdf, "Plain output");

    let output = run_bin(env!("CARGO_BIN_EXE_cli_extract_text"), &[pdf.to_str().unwrap()]);
    let stdout = stdout_text(&output);
    if pdfium_unavailable(&stdout) {
        return;
    }

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "Plain output");
}

#[test]
#[serial]
fn test_cli_extract_text_prints_raw_error() {
    let output = run_bin(env!("CARGO_BIN_EXE_cli_extract_text"), &["/nonexistent/missing.pdf"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_text(&output);
    assert!(!stdout.is_empty());
    assert!(serde_json::from_str::<Value>(&stdout).is_err());
}
