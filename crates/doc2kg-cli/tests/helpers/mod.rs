//! Shared fixtures for the binary tests: process spawning, JSON output
//! parsing, pdfium availability and generated PDFs.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

/// Set to make pdfium-backed tests fail instead of skipping when the library is missing.
pub const REQUIRE_PDFIUM_ENV: &str = "DOC2KG_REQUIRE_PDFIUM";

pub fn run_bin(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn stdout_json(output: &Output) -> Value {
    let stdout = stdout_text(output);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

pub fn pdfium_required() -> bool {
    std::env::var_os(REQUIRE_PDFIUM_ENV).is_some_and(|value| !value.is_empty() && value != "0")
}

/// Whether a binary's failure message says pdfium could not be bound.
///
/// Returns `true` (skip) with a note on stderr, or panics when
/// `DOC2KG_REQUIRE_PDFIUM` is set.
pub fn pdfium_unavailable(message: &str) -> bool {
    if !message.contains("Pdfium library unavailable") {
        return false;
    }
    if pdfium_required() {
        panic!("{} is set but pdfium cannot be bound: {}", REQUIRE_PDFIUM_ENV, message);
    }
    eprintln!("SKIPPED: pdfium not available; set {} to fail instead", REQUIRE_PDFIUM_ENV);
    true
}

/// [`pdfium_unavailable`] for a JSON response.
pub fn pdfium_unavailable_json(value: &Value) -> bool {
    value["success"] == false
        && value["error_kind"] == "resource_missing"
        && pdfium_unavailable(value["error"].as_str().unwrap_or_default())
}

/// One-page US Letter PDF with a single line of 12 pt Helvetica text.
pub fn write_single_page_pdf(path: &Path, text: &str) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}
