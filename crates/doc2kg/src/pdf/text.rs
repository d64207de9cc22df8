//! PDF text extraction module.
//!
//! Page-level text helpers on top of pdfium-render: full-page text, text inside
//! an absolute rectangle, and text with the running header/footer bands cut away.

use super::error::{PdfError, Result};
use super::geometry::PageRect;
use pdfium_render::prelude::*;

/// Fraction of the page height treated as running header, and again as footer.
pub const DEFAULT_BAND_RATIO: f32 = 0.10;

/// The page's visible rectangle: its crop box, else its media box, else its size.
pub fn visible_rect(page: &PdfPage<'_>) -> PageRect {
    let boundaries = page.boundaries();
    match boundaries.crop().or_else(|_| boundaries.media()) {
        Ok(boundary) => PageRect::from_pdf_rect(&boundary.bounds),
        Err(e) => {
            tracing::debug!("Page has no readable crop or media box, using page size: {}", e);
            PageRect::new(0.0, 0.0, page.width().value, page.height().value)
        }
    }
}

pub fn extract_page_text(page: &PdfPage<'_>) -> Result<String> {
    let text = page
        .text()
        .map_err(|e| PdfError::TextExtractionFailed(format!("Page text extraction failed: {}", e)))?;

    Ok(canonical_line_breaks(text.all()))
}

pub fn extract_page_text_in_rect(page: &PdfPage<'_>, rect: PageRect) -> Result<String> {
    let text = page
        .text()
        .map_err(|e| PdfError::TextExtractionFailed(format!("Page text extraction failed: {}", e)))?;

    Ok(canonical_line_breaks(text.inside_rect(rect.to_pdf_rect())))
}

/// pdfium ends every generated line with `"\r\n"`; reduce those to `"\n"`.
fn canonical_line_breaks(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

/// Page text with the top and bottom `band_ratio` of the page height removed.
///
/// Pages too short for both bands are extracted whole. When the cropped
/// extraction fails the uncropped page text is returned instead.
pub fn extract_page_text_without_margins(page: &PdfPage<'_>, band_ratio: f32) -> Result<String> {
    match cropped_page_text(page, band_ratio) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("Cropped text extraction failed, falling back to full page: {}", e);
            extract_page_text(page)
        }
    }
}

fn cropped_page_text(page: &PdfPage<'_>, band_ratio: f32) -> Result<String> {
    let visible = visible_rect(page);
    let band = visible.height() * band_ratio;

    match visible.between_bands(band, band) {
        Some(body) => extract_page_text_in_rect(page, body),
        None => {
            tracing::debug!(
                "Page height {} too small for {} pt header/footer bands",
                visible.height(),
                band
            );
            extract_page_text(page)
        }
    }
}

/// Extract the text of every page, in page order.
///
/// Pages are processed one at a time and released as the iterator advances.
pub fn extract_text_from_pdf_document(document: &PdfDocument<'_>) -> Result<Vec<String>> {
    let page_count = document.pages().len() as usize;
    let mut page_texts = Vec::with_capacity(page_count);

    for (page_idx, page) in document.pages().iter().enumerate() {
        let text = extract_page_text(&page)?;
        tracing::debug!("Page {}: {} bytes of text", page_idx + 1, text.len());
        page_texts.push(text);
    }

    Ok(page_texts)
}

/// Extract the text of every page with header and footer bands removed.
pub fn extract_body_text_from_pdf_document(document: &PdfDocument<'_>, band_ratio: f32) -> Result<Vec<String>> {
    let page_count = document.pages().len() as usize;
    let mut page_texts = Vec::with_capacity(page_count);

    for (page_idx, page) in document.pages().iter().enumerate() {
        let text = extract_page_text_without_margins(&page, band_ratio)?;
        tracing::debug!("Page {}: {} bytes of body text", page_idx + 1, text.len());
        page_texts.push(text);
    }

    Ok(page_texts)
}
