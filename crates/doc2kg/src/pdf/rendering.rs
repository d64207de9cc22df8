use super::error::{PdfError, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};

const PDF_POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRenderOptions {
    pub target_dpi: i32,
    pub max_image_dimension: i32,
    pub auto_adjust_dpi: bool,
    pub min_dpi: i32,
    pub max_dpi: i32,
}

impl Default for PageRenderOptions {
    fn default() -> Self {
        Self {
            target_dpi: 300,
            max_image_dimension: 65536,
            auto_adjust_dpi: false,
            min_dpi: 72,
            max_dpi: 600,
        }
    }
}

impl PageRenderOptions {
    /// DPI to use for a page of the given size in points.
    ///
    /// Fixed at `target_dpi` unless `auto_adjust_dpi` is set. Then the DPI is
    /// lowered until the longer side fits in `max_image_dimension` pixels and
    /// the result is kept within `[min_dpi, max_dpi]`, with `min_dpi` taking
    /// precedence over the size limit.
    pub fn effective_dpi(&self, width_points: f64, height_points: f64) -> i32 {
        if !self.auto_adjust_dpi {
            return self.target_dpi;
        }

        let longest_inches = width_points.max(height_points) / PDF_POINTS_PER_INCH;
        let dpi = if longest_inches > 0.0 {
            let fitting_dpi = (f64::from(self.max_image_dimension) / longest_inches).floor() as i32;
            self.target_dpi.min(fitting_dpi)
        } else {
            self.target_dpi
        };

        dpi.min(self.max_dpi).max(self.min_dpi)
    }
}

/// Target bitmap size in pixels for a page of the given size at `dpi`.
pub fn target_pixel_size(width_points: f32, height_points: f32, dpi: i32) -> (i32, i32) {
    let scale = dpi as f64 / PDF_POINTS_PER_INCH;
    let width = ((width_points as f64 * scale).round() as i32).max(1);
    let height = ((height_points as f64 * scale).round() as i32).max(1);
    (width, height)
}

pub fn render_page_to_image(page: &PdfPage<'_>, options: &PageRenderOptions) -> Result<DynamicImage> {
    let width_points = page.width().value;
    let height_points = page.height().value;

    let dpi = options.effective_dpi(width_points as f64, height_points as f64);
    let (target_width, target_height) = target_pixel_size(width_points, height_points, dpi);

    let config = PdfRenderConfig::new()
        .set_target_width(target_width)
        .set_target_height(target_height)
        .rotate_if_landscape(PdfPageRenderRotation::None, false);

    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| PdfError::RenderingFailed(format!("Failed to render page: {}", e)))?;

    let image = bitmap.as_image().into_rgb8();

    Ok(DynamicImage::ImageRgb8(image))
}
