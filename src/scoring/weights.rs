// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Every tunable number in ranking, in one place.
//!
//! The defaults reproduce the tuned production values. They were found by
//! looking at real queries, not derived, so they are exposed as configuration
//! rather than baked into the scorer. A JSON file may override any subset:
//!
//! ```json
//! { "weights": { "name_exact": 120 }, "threshold": { "long_query_ratio": 0.3 } }
//! ```
//!
//! # Field hierarchy
//!
//! | Field        | Primary hit        | Synonym hit |
//! |--------------|--------------------|-------------|
//! | Name         | 100 / 80 / 60      | 25          |
//! | Offer text   | 45                 | 20          |
//! | Category     | 40                 | 20          |
//! | Subcategory  | 35                 | 18          |
//! | Tag          | 35 / 30 / 25       | 15          |
//! | Description  | 10                 | 5           |
//!
//! Name fuzzy bonuses are `floor(similarity × 50)` for the whole name and
//! `floor(similarity × 55)` for the best single word, together never more
//! than `name_fuzzy_cap` (55).
//!
//! No single weight may exceed [`MAX_WEIGHT`].

use crate::error::{read_json, Error, Result};
use crate::fuzzy::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static DEFAULT_CONFIG: LazyLock<RankingConfig> = LazyLock::new(RankingConfig::default);

/// Upper bound for any single field weight.
pub const MAX_WEIGHT: u32 = 10_000;

/// Points awarded per field and match kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name_exact: u32,
    pub name_prefix: u32,
    pub name_contains: u32,
    /// Multiplier for whole-name fuzzy similarity.
    pub name_fuzzy_whole: u32,
    /// Multiplier for best-word fuzzy similarity.
    pub name_fuzzy_word: u32,
    /// Ceiling on the two fuzzy bonuses combined.
    pub name_fuzzy_cap: u32,
    pub name_synonym: u32,
    pub offer_contains: u32,
    pub offer_synonym: u32,
    pub category_contains: u32,
    pub category_synonym: u32,
    pub subcategory_contains: u32,
    pub subcategory_synonym: u32,
    pub tag_exact: u32,
    pub tag_contains: u32,
    /// Tag appears in the query as a whole word.
    pub tag_in_query: u32,
    pub tag_synonym: u32,
    pub description_contains: u32,
    pub description_synonym: u32,
}

impl FieldWeights {
    /// Every weight with its config key.
    pub fn entries(&self) -> [(&'static str, u32); 19] {
        [
            ("name_exact", self.name_exact),
            ("name_prefix", self.name_prefix),
            ("name_contains", self.name_contains),
            ("name_fuzzy_whole", self.name_fuzzy_whole),
            ("name_fuzzy_word", self.name_fuzzy_word),
            ("name_fuzzy_cap", self.name_fuzzy_cap),
            ("name_synonym", self.name_synonym),
            ("offer_contains", self.offer_contains),
            ("offer_synonym", self.offer_synonym),
            ("category_contains", self.category_contains),
            ("category_synonym", self.category_synonym),
            ("subcategory_contains", self.subcategory_contains),
            ("subcategory_synonym", self.subcategory_synonym),
            ("tag_exact", self.tag_exact),
            ("tag_contains", self.tag_contains),
            ("tag_in_query", self.tag_in_query),
            ("tag_synonym", self.tag_synonym),
            ("description_contains", self.description_contains),
            ("description_synonym", self.description_synonym),
        ]
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name_exact: 100,
            name_prefix: 80,
            name_contains: 60,
            name_fuzzy_whole: 50,
            name_fuzzy_word: 55,
            name_fuzzy_cap: 55,
            name_synonym: 25,
            offer_contains: 45,
            offer_synonym: 20,
            category_contains: 40,
            category_synonym: 20,
            subcategory_contains: 35,
            subcategory_synonym: 18,
            tag_exact: 35,
            tag_contains: 30,
            tag_in_query: 25,
            tag_synonym: 15,
            description_contains: 10,
            description_synonym: 5,
        }
    }
}

/// Dynamic cutoff relative to the best score in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceThreshold {
    /// Ratio for queries shorter than `short_query_chars`.
    pub short_query_ratio: f64,
    pub long_query_ratio: f64,
    pub short_query_chars: usize,
}

impl Default for RelevanceThreshold {
    fn default() -> Self {
        Self {
            short_query_ratio: 0.10,
            long_query_ratio: 0.25,
            short_query_chars: 3,
        }
    }
}

impl RelevanceThreshold {
    /// Short queries are broad by nature, so they keep more of the tail.
    pub fn ratio_for(&self, primary: &str) -> f64 {
        if primary.chars().count() < self.short_query_chars {
            self.short_query_ratio
        } else {
            self.long_query_ratio
        }
    }
}

/// Everything the scorer and ranker need besides the synonym dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub weights: FieldWeights,
    pub fuzzy: FuzzyMatcher,
    pub threshold: RelevanceThreshold,
}

impl RankingConfig {
    /// Shared instance of the defaults.
    pub fn default_ref() -> &'static RankingConfig {
        &DEFAULT_CONFIG
    }

    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RankingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config: RankingConfig = read_json(path)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded ranking config");
        Ok(config)
    }

    /// Reject values that would break the ranking guarantees.
    ///
    /// Exact beats prefix beats contains, and the fuzzy cap stays below the
    /// contains tier. Weights stay under [`MAX_WEIGHT`]; ratios and
    /// similarities stay in range.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if let Some((key, value)) = w.entries().into_iter().find(|(_, value)| *value > MAX_WEIGHT) {
            return Err(invalid(format!(
                "{} must be at most {}, got {}",
                key, MAX_WEIGHT, value
            )));
        }
        if !(w.name_exact > w.name_prefix && w.name_prefix > w.name_contains) {
            return Err(invalid(format!(
                "name weights must satisfy exact > prefix > contains (got {} / {} / {})",
                w.name_exact, w.name_prefix, w.name_contains
            )));
        }
        if w.name_fuzzy_cap >= w.name_contains {
            return Err(invalid(format!(
                "name_fuzzy_cap ({}) must stay below name_contains ({})",
                w.name_fuzzy_cap, w.name_contains
            )));
        }

        let t = &self.threshold;
        for (label, ratio) in [
            ("short_query_ratio", t.short_query_ratio),
            ("long_query_ratio", t.long_query_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(invalid(format!("{} must be within [0, 1], got {}", label, ratio)));
            }
        }

        let f = &self.fuzzy;
        if !(0.0..1.0).contains(&f.min_similarity) {
            return Err(invalid(format!(
                "min_similarity must be within [0, 1), got {}",
                f.min_similarity
            )));
        }
        if !(f.substring_similarity > 0.0 && f.substring_similarity <= 1.0) {
            return Err(invalid(format!(
                "substring_similarity must be within (0, 1], got {}",
                f.substring_similarity
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}
