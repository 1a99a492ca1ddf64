// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: one canonical form for queries and field text.
//!
//! Anything that is not a word character, whitespace, or a hyphen is dropped.
//! That's the whole whitelist. Arbitrary Unicode goes in, and what comes out is
//! lowercase, trimmed, and single-spaced. An empty result means "no query".

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip punctuation, collapse whitespace.
///
/// With the `unicode-normalization` feature, diacritics are folded first so
/// accented and plain spellings compare equal:
/// - "Café Pro" → "cafe pro"
/// - "Notion (Plus)!" → "notion plus"
/// - "  Wi-Fi   6 " → "wi-fi 6"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Drop combining marks
/// 4. Drop everything outside `[word chars, whitespace, '-']`
/// 5. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    strip_and_collapse(&folded)
}

/// Lightweight normalization without diacritic folding.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    strip_and_collapse(&value.to_lowercase())
}

/// Case- and accent-insensitive key for ordering display names.
///
/// Same folding as [`normalize`] but punctuation and spacing are kept, so
/// "Évernote" sorts with the e's and "A-Team" stays distinct from "ATeam".
#[cfg(feature = "unicode-normalization")]
pub fn fold_case(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn strip_and_collapse(lowered: &str) -> String {
    lowered
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks left behind by NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Letters, digits and underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Does `needle` occur in `haystack` as a whole word?
///
/// An occurrence counts only when the characters on either side (if any) are
/// not word characters. "email" does not contain the word "ai", but
/// "github student pack" contains the word "github".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// URL-style identifier for a display name: "Developer Tools" → "developer-tools".
pub fn slugify(value: &str) -> String {
    normalize(value).replace(' ', "-")
}
