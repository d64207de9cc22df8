//! Whitespace normalization policies.
//!
//! Two policies exist and they are intentionally not merged:
//!
//! | step | [`normalize_flowing_text`] | [`normalize_region_text`] |
//! |---|---|---|
//! | line-wrap hyphen `-\s*\n` | removed | removed |
//! | tabs | each run of tabs -> one space | each tab -> one space |
//! | whitespace runs | `\s+` -> one space (newlines too) | `[^\S\r\n]+` -> one space, `\r`/`\n` kept |

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LINE_WRAP_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s*\n").expect("Line-wrap hyphen regex pattern is valid and should compile"));
static TAB_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").expect("Tab runs regex pattern is valid and should compile"));
static SINGLE_TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t").expect("Tab regex pattern is valid and should compile"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Whitespace runs regex pattern is valid and should compile"));
static INLINE_WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\S\r\n]+").expect("Inline whitespace runs regex pattern is valid and should compile")
});

#[inline]
fn chain_replacements<'a>(mut text: Cow<'a, str>, replacements: &[(&Regex, &str)]) -> Cow<'a, str> {
    for (pattern, replacement) in replacements {
        if pattern.is_match(&text) {
            text = Cow::Owned(pattern.replace_all(&text, *replacement).into_owned());
        }
    }
    text
}

/// Normalize text for the plain extractor: the result is a single flowing line.
pub fn normalize_flowing_text(text: &str) -> String {
    chain_replacements(
        Cow::Borrowed(text),
        &[
            (&*LINE_WRAP_HYPHEN, ""),
            (&*TAB_RUNS, " "),
            (&*WHITESPACE_RUNS, " "),
        ],
    )
    .into_owned()
}

/// Normalize text for the region extractor: line structure survives.
pub fn normalize_region_text(text: &str) -> String {
    chain_replacements(
        Cow::Borrowed(text),
        &[
            (&*LINE_WRAP_HYPHEN, ""),
            (&*SINGLE_TAB, " "),
            (&*INLINE_WHITESPACE_RUNS, " "),
        ],
    )
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flowing_dehyphenates_line_wrap() {
        assert_eq!(normalize_flowing_text("sys-\ntem"), "system");
        assert_eq!(normalize_flowing_text("sys-  \ntem"), "system");
        assert_eq!(normalize_flowing_text("sys-\r\ntem"), "system");
    }

    #[test]
    fn test_flowing_keeps_inline_hyphen() {
        assert_eq!(normalize_flowing_text("well-known fact"), "well-known fact");
    }

    #[test]
    fn test_flowing_collapses_everything() {
        let text = "First\tline\t\twith tabs\n\nSecond   line\r\nthird";
        let normalized = normalize_flowing_text(text);
        assert_eq!(normalized, "First line with tabs Second line third");
        assert!(!normalized.contains('\t'));
        assert!(!normalized.contains('\n'));
        assert!(!normalized.contains("  "));
    }

    #[test]
    fn test_flowing_collapses_unicode_whitespace() {
        assert_eq!(normalize_flowing_text("a\u{00A0}\u{2003} b"), "a b");
    }

    #[test]
    fn test_flowing_page_separator() {
        assert_eq!(normalize_flowing_text("page one\n\npage two"), "page one page two");
    }

    #[test]
    fn test_flowing_hyphen_swallows_blank_lines() {
        assert_eq!(normalize_flowing_text("end-\n\n\nnext"), "endnext");
    }

    #[test]
    fn test_flowing_empty() {
        assert_eq!(normalize_flowing_text(""), "");
    }

    #[test]
    fn test_region_dehyphenates_line_wrap() {
        assert_eq!(normalize_region_text("sys-\ntem"), "system");
    }

    #[test]
    fn test_region_preserves_newlines() {
        let text = "Header  block\nsecond\t\tline\r\nthird";
        assert_eq!(normalize_region_text(text), "Header block\nsecond line\r\nthird");
    }

    #[test]
    fn test_region_keeps_page_separator() {
        assert_eq!(normalize_region_text("page one\n\npage two"), "page one\n\npage two");
    }

    #[test]
    fn test_region_spaces_around_newline_collapse_separately() {
        assert_eq!(normalize_region_text("left   \n   right"), "left \n right");
    }

    #[test]
    fn test_policies_differ_on_newlines() {
        let text = "alpha\nbeta";
        assert_eq!(normalize_flowing_text(text), "alpha beta");
        assert_eq!(normalize_region_text(text), "alpha\nbeta");
    }
}
