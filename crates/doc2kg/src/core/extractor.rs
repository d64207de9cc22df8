//! The four extraction operations.
//!
//! Each operation is a single pass: validate input, open the document, walk the
//! pages, post-process, drop the document. Any failure is returned as a
//! `Doc2kgError`; nothing is retried and written images are not rolled back.

use crate::core::config::HeaderFooterConfig;
use crate::core::io::{ensure_dir, validate_file_exists};
use crate::pdf::{
    PdfBackend, RegionMap, extract_body_text_from_pdf_document, extract_region_text_from_pdf_document,
    extract_text_from_pdf_document, render_page_to_image, rendering::PageRenderOptions,
};
use crate::text::{SentenceModel, join_sentences, normalize_flowing_text, normalize_region_text};
use crate::types::{ImageExtraction, TextExtraction};
use crate::Result;
use image::ImageFormat;
use std::path::Path;

/// Extract all text of a PDF as one whitespace-normalized line.
///
/// Page texts (empty pages included) are joined with a blank line and then
/// normalized with [`normalize_flowing_text`].
pub fn extract_text(backend: &PdfBackend, path: impl AsRef<Path>) -> Result<TextExtraction> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let document = backend.open(path)?;
    let pages = document.pages().len() as usize;
    let page_texts = extract_text_from_pdf_document(&document)?;

    let text = normalize_flowing_text(&page_texts.join("\n\n"));
    tracing::info!("Extracted {} chars from {} pages of {}", text.len(), pages, path.display());

    Ok(TextExtraction { text, pages })
}

/// Extract body text without running headers/footers, one sentence per paragraph.
///
/// The top and bottom `config.band_ratio` of each page are cut away, non-empty
/// page texts are joined with a blank line, and the result is re-segmented with
/// `model`. The model's `max_length` is raised when the text is longer.
pub fn extract_text_sentences(
    backend: &PdfBackend,
    path: impl AsRef<Path>,
    config: &HeaderFooterConfig,
    model: &mut SentenceModel,
) -> Result<TextExtraction> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let document = backend.open(path)?;
    let pages = document.pages().len() as usize;
    let page_texts = extract_body_text_from_pdf_document(&document, config.band_ratio)?;

    let raw_text = page_texts
        .iter()
        .filter(|text| !text.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n");

    if raw_text.len() > model.max_length() {
        tracing::debug!(
            "Raising sentence model max_length from {} to {}",
            model.max_length(),
            raw_text.len() + 1
        );
        model.set_max_length(raw_text.len() + 1);
    }

    let text = join_sentences(model.sentences(&raw_text)?);
    tracing::info!(
        "Extracted {} chars of sentence text from {} pages of {}",
        text.len(),
        pages,
        path.display()
    );

    Ok(TextExtraction { text, pages })
}

/// Extract text restricted to the regions in `regions`.
///
/// Region texts are joined per page with `"\n"`, pages with a blank line, and
/// the result is normalized with [`normalize_region_text`], which keeps line breaks.
pub fn extract_text_regions(
    backend: &PdfBackend,
    path: impl AsRef<Path>,
    regions: &RegionMap,
) -> Result<TextExtraction> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let document = backend.open(path)?;
    let pages = document.pages().len() as usize;
    let page_texts = extract_region_text_from_pdf_document(&document, regions)?;

    let text = normalize_region_text(&page_texts.join("\n\n"));
    tracing::info!(
        "Extracted {} chars from regions on {} of {} pages of {}",
        text.len(),
        page_texts.len(),
        pages,
        path.display()
    );

    Ok(TextExtraction { text, pages })
}

/// Parse `regions_json` and run [`extract_text_regions`].
///
/// The mapping is parsed before the document is opened, so malformed JSON fails
/// without touching the PDF.
pub fn extract_text_regions_json(
    backend: &PdfBackend,
    path: impl AsRef<Path>,
    regions_json: &str,
) -> Result<TextExtraction> {
    let regions = RegionMap::from_json(regions_json)?;
    extract_text_regions(backend, path, &regions)
}

/// Render every page to `{doc_id}.{page_number}.png` inside `output_dir`.
///
/// The output directory is created (with parents) if needed. Returns the file
/// names in page order.
pub fn extract_images(
    backend: &PdfBackend,
    path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    doc_id: &str,
    options: &PageRenderOptions,
) -> Result<ImageExtraction> {
    let path = path.as_ref();
    let output_dir = output_dir.as_ref();

    ensure_dir(output_dir)?;
    validate_file_exists(path)?;

    let document = backend.open(path)?;
    let mut images = Vec::with_capacity(document.pages().len() as usize);

    for (page_idx, page) in document.pages().iter().enumerate() {
        let image_filename = page_image_filename(doc_id, page_idx + 1);
        let image_path = output_dir.join(&image_filename);

        let image = render_page_to_image(&page, options)?;
        image.save_with_format(&image_path, ImageFormat::Png)?;

        tracing::debug!("Wrote {}", image_path.display());
        images.push(image_filename);
    }

    tracing::info!(
        "Rendered {} pages of {} into {}",
        images.len(),
        path.display(),
        output_dir.display()
    );

    Ok(ImageExtraction { images })
}

/// File name for the image of a 1-based page.
pub fn page_image_filename(doc_id: &str, page_number: usize) -> String {
    format!("{}.{}.png", doc_id, page_number)
}
