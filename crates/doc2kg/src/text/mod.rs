//! Text post-processing: whitespace normalization and sentence segmentation.

pub mod normalize;
pub mod sentences;

pub use normalize::{normalize_flowing_text, normalize_region_text};
pub use sentences::{SentenceModel, join_sentences};
