//! Region-restricted text extraction.
//!
//! A [`RegionMap`] is the parsed form of the region argument:
//!
//! ```json
//! {"1": [[0.1, 0.1, 0.5, 0.9]], "3": [[0, 0, 1, 0.5], [0, 0.5, 1, 1]]}
//! ```
//!
//! Keys are 1-based page numbers as strings and are matched verbatim, so `"01"`
//! never matches page 1. Keys naming pages the document does not have are ignored.

use super::error::Result;
use super::geometry::Region;
use super::text::{extract_page_text_in_rect, visible_rect};
use crate::error::Doc2kgError;
use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionMap {
    pages: HashMap<String, Vec<Region>>,
}

impl RegionMap {
    /// Parse a region mapping from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Doc2kgError::parsing_with_source(format!("Invalid region mapping: {}", e), e))
    }

    pub fn insert(&mut self, page_number: usize, regions: Vec<Region>) {
        self.pages.insert(page_number.to_string(), regions);
    }

    /// Regions for a 1-based page number, if any were supplied.
    pub fn regions_for_page(&self, page_number: usize) -> Option<&[Region]> {
        self.pages.get(&page_number.to_string()).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Extract the text of each requested region, grouped per page.
///
/// Each region's text is trimmed and dropped when empty; the remaining region
/// texts of a page are joined with `"\n"`. Pages that yield no region text do
/// not appear in the output.
pub fn extract_region_text_from_pdf_document(document: &PdfDocument<'_>, regions: &RegionMap) -> Result<Vec<String>> {
    let mut page_texts = Vec::new();

    for (page_idx, page) in document.pages().iter().enumerate() {
        let page_number = page_idx + 1;
        let Some(page_regions) = regions.regions_for_page(page_number) else {
            continue;
        };

        let visible = visible_rect(&page);
        let mut region_texts = Vec::with_capacity(page_regions.len());

        for region in page_regions {
            let rect = region.resolve(&visible);
            let text = extract_page_text_in_rect(&page, rect)?;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            region_texts.push(text.to_string());
        }

        tracing::debug!(
            "Page {}: {} of {} regions produced text",
            page_number,
            region_texts.len(),
            page_regions.len()
        );

        if !region_texts.is_empty() {
            page_texts.push(region_texts.join("\n"));
        }
    }

    Ok(page_texts)
}
