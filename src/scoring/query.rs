// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query preparation: normalize and expand once, score many times.

use crate::synonyms::SynonymDictionary;
use crate::util::normalize;

/// A normalized query together with its synonym expansion.
///
/// Building this is the only place the dictionary is consulted, so ranking a
/// thousand offers costs one expansion, not a thousand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// `terms[0]` is the primary term; the rest are synonyms.
    terms: Vec<String>,
}

impl PreparedQuery {
    pub fn new(raw: &str, dictionary: &SynonymDictionary) -> Self {
        let primary = normalize(raw);
        Self {
            terms: dictionary.expand(&primary),
        }
    }

    /// The normalized query itself.
    pub fn primary(&self) -> &str {
        self.terms.first().map(String::as_str).unwrap_or("")
    }

    /// Expansions, never including the primary term.
    pub fn synonyms(&self) -> &[String] {
        self.terms.get(1..).unwrap_or(&[])
    }

    /// Empty after normalization means "no active query".
    pub fn is_empty(&self) -> bool {
        self.primary().is_empty()
    }
}
