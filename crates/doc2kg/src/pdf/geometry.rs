//! Page rectangles and normalized regions.
//!
//! Two coordinate frames meet here:
//!
//! - **PDF user space** ([`PageRect`]): points, origin at the bottom-left,
//!   `top > bottom` for a well-formed rectangle. This is what pdfium consumes.
//! - **Visible top-down frame** ([`Region`]): ratios of the page's visible
//!   rectangle (its crop box) measured from the visible top-left corner, as
//!   `[left, top, right, bottom]`.
//!
//! Region ratios are neither range-checked nor ordered. A reversed region maps
//! to a reversed rectangle and whatever pdfium returns for it is what the caller
//! gets.

use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};

/// An absolute rectangle in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl PageRect {
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// The band left after removing `header` points from the top and `footer`
    /// points from the bottom, or `None` when the bands would overlap.
    pub fn between_bands(&self, header: f32, footer: f32) -> Option<PageRect> {
        if header + footer > self.height() {
            return None;
        }

        Some(PageRect::new(self.left, self.bottom + footer, self.right, self.top - header))
    }

    pub(crate) fn from_pdf_rect(rect: &PdfRect) -> Self {
        Self::new(rect.left().value, rect.bottom().value, rect.right().value, rect.top().value)
    }

    pub(crate) fn to_pdf_rect(self) -> PdfRect {
        PdfRect::new_from_values(self.bottom, self.left, self.top, self.right)
    }
}

/// A `[left, top, right, bottom]` rectangle expressed as ratios of the visible page area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region(pub [f64; 4]);

impl Region {
    pub const FULL_PAGE: Region = Region([0.0, 0.0, 1.0, 1.0]);

    /// Map the ratios onto absolute coordinates of `visible`.
    ///
    /// Interpolation runs between the visible top-left corner `(vX0, vY0)` and
    /// bottom-right corner `(vX1, vY1)` of the top-down frame, e.g.
    /// `abs_left = vX0 + x0 * (vX1 - vX0)`, and the result is flipped back into
    /// PDF user space.
    pub fn resolve(&self, visible: &PageRect) -> PageRect {
        let [x0, y0, x1, y1] = self.0;
        let width = f64::from(visible.width());
        let height = f64::from(visible.height());
        let left = f64::from(visible.left);
        let top = f64::from(visible.top);

        PageRect {
            left: (left + x0 * width) as f32,
            top: (top - y0 * height) as f32,
            right: (left + x1 * width) as f32,
            bottom: (top - y1 * height) as f32,
        }
    }
}
