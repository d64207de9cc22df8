//! Sentence segmentation.
//!
//! A [`SentenceModel`] is loaded by name and owned by the caller. Segmentation
//! starts from Unicode sentence boundaries (UAX #29) and then repairs the two
//! things that go wrong on PDF text:
//!
//! - UAX #29 breaks after every line feed, but PDF lines wrap mid-sentence. A
//!   piece is only closed when it ends in terminal punctuation or a blank line.
//! - Abbreviations ("Dr.", "e.g.", "Fig.") and initials ("J. Tolkien") do not
//!   close a sentence.
//!
//! Words that are also ordinary English ("no", "p") only count as
//! abbreviations in front of a number, "al." only after "et", and a single
//! capital letter only counts as an initial when a name follows it on the
//! same line.

use crate::error::{Doc2kgError, Result};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_MODEL: &str = "en";
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

const INSTALLED_MODELS: &[&str] = &["en", "xx"];

const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf", "approx", "fig",
    "figs", "eq", "eqs", "ref", "refs", "dept", "inc", "ltd", "corp", "jan", "feb", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "lt", "sgt", "capt", "gov", "rev", "hon", "u.s", "u.k", "a.m", "p.m",
];

/// Abbreviations that are only abbreviations when a number follows ("No. 5", "pp. 12-14").
const ENGLISH_NUMBERED_ABBREVIATIONS: &[&str] = &["no", "nos", "p", "pp", "vol", "vols", "sec", "ch"];

/// Capitalized words that usually open a sentence rather than continue a name.
const ENGLISH_SENTENCE_STARTERS: &[&str] = &[
    "A", "After", "All", "Also", "An", "And", "As", "At", "Before", "But", "Each", "For", "He", "Her", "His",
    "How", "However", "I", "If", "In", "It", "Its", "Many", "Most", "My", "No", "On", "One", "Or", "Our", "She",
    "So", "Some", "That", "The", "Their", "Then", "There", "These", "They", "This", "Those", "Thus", "To", "We",
    "What", "When", "Where", "While", "Who", "Why", "Yes", "You",
];

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?', '…', '。', '！', '？'];
const CLOSING_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '}', '’', '”', '»'];
const OPENING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '{', '‘', '“', '«'];

#[derive(Debug, Clone)]
pub struct SentenceModel {
    name: String,
    rules: Option<EnglishRules>,
    max_length: usize,
}

#[derive(Debug, Clone)]
struct EnglishRules {
    abbreviations: HashSet<&'static str>,
    numbered: HashSet<&'static str>,
    starters: HashSet<&'static str>,
}

impl EnglishRules {
    fn new() -> Self {
        Self {
            abbreviations: ENGLISH_ABBREVIATIONS.iter().copied().collect(),
            numbered: ENGLISH_NUMBERED_ABBREVIATIONS.iter().copied().collect(),
            starters: ENGLISH_SENTENCE_STARTERS.iter().copied().collect(),
        }
    }

    /// Whether the final `word.` of `core` continues into `next_word`.
    fn continues(&self, core: &str, next_word: Option<&str>, same_line: bool) -> bool {
        let mut words = core.rsplit(char::is_whitespace);
        let last_word = words.next().unwrap_or(core).trim_start_matches(OPENING_PUNCTUATION);
        let word = last_word.strip_suffix('.').unwrap_or(last_word);
        let lower = word.to_lowercase();

        if self.abbreviations.contains(lower.as_str()) {
            return true;
        }

        if lower == "al" {
            return words.next().is_some_and(|prev| prev.eq_ignore_ascii_case("et"));
        }

        if self.numbered.contains(lower.as_str()) {
            return next_word.is_some_and(|next| next.starts_with(|c: char| c.is_ascii_digit()));
        }

        same_line && is_initial(word) && next_word.is_some_and(|next| self.starts_name(next))
    }

    fn starts_name(&self, next_word: &str) -> bool {
        if is_initial(next_word.strip_suffix('.').unwrap_or(next_word)) && next_word.ends_with('.') {
            return true;
        }

        let bare = next_word.trim_end_matches(|c: char| !c.is_alphanumeric());
        bare.starts_with(char::is_uppercase) && !self.starters.contains(bare)
    }
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(first), None) if first.is_uppercase())
}

impl SentenceModel {
    /// Load an installed model by name.
    ///
    /// # Errors
    ///
    /// Returns `Doc2kgError::ResourceMissing` if no model with that name is installed.
    pub fn load(name: &str) -> Result<Self> {
        let rules = match name {
            "en" => Some(EnglishRules::new()),
            "xx" => None,
            other => {
                return Err(Doc2kgError::ResourceMissing(format!(
                    "Sentence model '{}' is not installed (available: {})",
                    other,
                    INSTALLED_MODELS.join(", ")
                )));
            }
        };

        tracing::debug!("Loaded sentence model '{}'", name);

        Ok(Self {
            name: name.to_string(),
            rules,
            max_length: DEFAULT_MAX_LENGTH,
        })
    }

    pub fn installed_models() -> &'static [&'static str] {
        INSTALLED_MODELS
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    /// Split `text` into sentences. Returned slices keep their surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `text` is longer than `max_length` bytes.
    pub fn sentences<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        if text.len() > self.max_length {
            return Err(Doc2kgError::config(format!(
                "Text of {} bytes exceeds max_length {} of sentence model '{}'",
                text.len(),
                self.max_length,
                self.name
            )));
        }

        let mut sentences = Vec::new();
        let mut start = 0;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let end = offset + piece.len();
            if self.closes_sentence(&text[start..end], &text[end..]) {
                sentences.push(&text[start..end]);
                start = end;
            }
        }

        if start < text.len() {
            sentences.push(&text[start..]);
        }

        Ok(sentences)
    }

    fn closes_sentence(&self, candidate: &str, rest: &str) -> bool {
        let trimmed = candidate.trim_end();
        if trimmed.is_empty() {
            return false;
        }

        let trailing = &candidate[trimmed.len()..];
        let line_breaks = trailing.matches('\n').count();
        if line_breaks >= 2 {
            return true;
        }

        let core = trimmed.trim_end_matches(CLOSING_PUNCTUATION);
        if !core.ends_with(TERMINAL_PUNCTUATION) {
            return false;
        }

        match &self.rules {
            Some(rules) if core.ends_with('.') => {
                let next_word = rest
                    .split_whitespace()
                    .next()
                    .map(|word| word.trim_start_matches(OPENING_PUNCTUATION));
                !rules.continues(core, next_word, line_breaks == 0)
            }
            _ => true,
        }
    }
}

/// Re-join sentences: each is trimmed, its line breaks become spaces, empty
/// sentences are dropped, and the rest are separated by blank lines.
pub fn join_sentences<'t>(sentences: impl IntoIterator<Item = &'t str>) -> String {
    sentences
        .into_iter()
        .map(|sentence| sentence.trim().replace("\r\n", " ").replace(['\n', '\r'], " "))
        .filter(|sentence| !sentence.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
