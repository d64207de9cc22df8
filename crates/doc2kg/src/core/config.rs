//! Extraction configuration.
//!
//! Every field has a default that reproduces the stock behavior (300 DPI, 10%
//! header/footer bands, English sentence model, system pdfium), so a missing or
//! empty config file changes nothing.

use crate::pdf::rendering::PageRenderOptions;
use crate::pdf::text::DEFAULT_BAND_RATIO;
use crate::text::sentences::DEFAULT_MODEL;
use crate::{Doc2kgError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "doc2kg.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub pdfium: PdfiumConfig,
    pub render: PageRenderOptions,
    pub header_footer: HeaderFooterConfig,
    pub sentences: SentenceConfig,
}

/// Where to find the pdfium shared library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfiumConfig {
    /// Directory containing the platform pdfium library. `None` uses the system search path.
    pub library_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderFooterConfig {
    /// Fraction of the page height cut from the top, and again from the bottom.
    pub band_ratio: f32,
}

impl Default for HeaderFooterConfig {
    fn default() -> Self {
        Self {
            band_ratio: DEFAULT_BAND_RATIO,
        }
    }
}

/// Sentence segmentation settings.
///
/// The model's length limit is not configurable here: the sentence operation
/// raises it to fit whatever text the document yields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    pub model: String,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Doc2kgError::Config` if the file can't be read, is invalid TOML,
    /// or fails validation.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Doc2kgError::config(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Doc2kgError::config(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, choosing the format from its extension (`.json`, else TOML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Discover configuration file in parent directories.
    ///
    /// Searches for `doc2kg.toml` in the current directory and its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir().map_err(Doc2kgError::Io)?;
        Self::discover_from(&current)
    }

    /// Like [`discover`](Self::discover), starting at `start` instead of the current directory.
    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!("Using config file {}", candidate.display());
                return Ok(Some(Self::from_toml_file(candidate)?));
            }
        }

        Ok(None)
    }

    pub fn validate(&self) -> Result<()> {
        let band_ratio = self.header_footer.band_ratio;
        if !(0.0..=0.5).contains(&band_ratio) {
            return Err(Doc2kgError::config(format!(
                "header_footer.band_ratio must be between 0 and 0.5, got {}",
                band_ratio
            )));
        }

        if self.render.target_dpi <= 0 {
            return Err(Doc2kgError::config(format!(
                "render.target_dpi must be positive, got {}",
                self.render.target_dpi
            )));
        }

        if self.render.min_dpi > self.render.max_dpi {
            return Err(Doc2kgError::config(format!(
                "render.min_dpi ({}) must not exceed render.max_dpi ({})",
                self.render.min_dpi, self.render.max_dpi
            )));
        }

        if self.sentences.model.trim().is_empty() {
            return Err(Doc2kgError::config("sentences.model must not be empty"));
        }

        Ok(())
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Doc2kgError::config_with_source(format!("Failed to read config file {}: {}", path.display(), e), e)
    })
}
