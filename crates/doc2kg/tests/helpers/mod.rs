//! Shared fixtures for the pdfium-backed integration tests.
//!
//! PDFs are generated on the fly with lopdf so the tests need no checked-in
//! documents. Pages are US Letter (612 x 792 pt) and text is 12 pt Helvetica.

#![allow(dead_code)]

use doc2kg::{PdfBackend, PdfiumConfig};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::Path;

pub const PAGE_WIDTH: i64 = 612;
pub const PAGE_HEIGHT: i64 = 792;

/// A line of text whose baseline starts at `(x, y)` in PDF user space.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub x: i64,
    pub y: i64,
    pub text: String,
}

pub fn run(x: i64, y: i64, text: &str) -> TextRun {
    TextRun {
        x,
        y,
        text: text.to_string(),
    }
}

/// Lines stacked from the top of the page, 16 pt apart.
pub fn lines(texts: &[&str]) -> Vec<TextRun> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| run(72, 700 - 16 * i as i64, text))
        .collect()
}

/// Write a PDF with one page per entry of `pages`.
pub fn write_pdf(path: &Path, pages: &[Vec<TextRun>]) -> anyhow::Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for runs in pages {
        let mut operations = Vec::new();
        for text_run in runs {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![text_run.x.into(), text_run.y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(text_run.text.as_str())]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path)?;
    Ok(())
}

/// Set to make pdfium-backed tests fail instead of skipping when the library is missing.
pub const REQUIRE_PDFIUM_ENV: &str = "DOC2KG_REQUIRE_PDFIUM";

pub fn pdfium_required() -> bool {
    std::env::var_os(REQUIRE_PDFIUM_ENV).is_some_and(|value| !value.is_empty() && value != "0")
}

/// Bind pdfium, or `None` (with a note on stderr) when the library isn't installed.
///
/// Panics instead of skipping when `DOC2KG_REQUIRE_PDFIUM` is set.
pub fn backend_or_skip() -> Option<PdfBackend> {
    match PdfBackend::new(&PdfiumConfig::default()) {
        Ok(backend) => Some(backend),
        Err(e) if pdfium_required() => panic!("{} is set but pdfium cannot be bound: {}", REQUIRE_PDFIUM_ENV, e),
        Err(e) => {
            eprintln!("SKIPPED: pdfium not available ({}); set {} to fail instead", e, REQUIRE_PDFIUM_ENV);
            None
        }
    }
}

/// Collapse all whitespace so texts from different pdfium calls compare equal.
pub fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
