// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded similarity in `[0, 1]` built on edit distance.
//!
//! ```text
//! similarity = 1 - distance / max(len(a), len(b))
//! ```
//!
//! Two short-circuits sit in front of the DP. Equal strings are 1.0. A
//! candidate that fully contains the term is 0.9: containment leaves no doubt
//! about what matched, so it ranks above any typo-distance match. Anything at
//! or below the floor (0.7) is reported as 0.0, because at that distance the
//! "typo" is more likely a different word.

use super::levenshtein_bounded;
use serde::{Deserialize, Serialize};

/// Similarity at or below this is noise, not a near-miss.
pub const MIN_FUZZY_SIMILARITY: f64 = 0.7;

/// Similarity reported when the candidate contains the term verbatim.
pub const SUBSTRING_SIMILARITY: f64 = 0.9;

/// The two knobs of the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyMatcher {
    pub min_similarity: f64,
    pub substring_similarity: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            min_similarity: MIN_FUZZY_SIMILARITY,
            substring_similarity: SUBSTRING_SIMILARITY,
        }
    }
}

impl FuzzyMatcher {
    /// How close is `candidate` to `term`? Zero means "not a match".
    pub fn similarity(&self, term: &str, candidate: &str) -> f64 {
        if term == candidate {
            return 1.0;
        }
        if term.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        if candidate.contains(term) {
            return self.substring_similarity;
        }

        let longest = term.chars().count().max(candidate.chars().count());
        // Any distance above this bound lands at or under the floor
        let max_distance = ((1.0 - self.min_similarity) * longest as f64).floor() as usize;

        match levenshtein_bounded(term, candidate, max_distance) {
            Some(distance) => {
                let similarity = 1.0 - distance as f64 / longest as f64;
                if similarity > self.min_similarity {
                    similarity
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }
}

/// Similarity with the default thresholds.
pub fn similarity(term: &str, candidate: &str) -> f64 {
    FuzzyMatcher::default().similarity(term, candidate)
}
