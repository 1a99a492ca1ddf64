// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance: one offer, one query, one number.
//!
//! Field dominates everything. A name match should almost always beat a match
//! buried in the description, and within the name, exact beats prefix beats
//! substring beats fuzzy. Typo tolerance is a safety net, never a way for an
//! irrelevant offer to jump the queue.
//!
//! Scores are additive across fields. Within the name the primary-term rules
//! are exclusive (first hit wins); the two fuzzy bonuses only apply when none
//! of exact/prefix/contains fired. They stack with each other, but the sum is
//! capped at `name_fuzzy_cap` so a fuzzy-only name never reaches the contains
//! tier.
//!
//! All additions saturate. A config with huge weights ranks oddly, but it
//! never wraps a top match to the bottom.
//!
//! ```text
//! name         exact 100 | prefix 80 | contains 60 | fuzzy ≤ 55           (+25 per synonym)
//! offer text   contains 45                                              (+20 per synonym)
//! category     contains 40                                              (+20 per synonym)
//! subcategory  contains 35                                              (+18 per synonym)
//! each tag     equals 35 | contains 30 | tag-word-in-query 25           (+15 per synonym)
//! description  contains 10                                              (+5 per synonym)
//! ```
//!
//! All field text is normalized the same way as the query before comparison.

use super::query::PreparedQuery;
use super::weights::RankingConfig;
use crate::types::Offer;
use crate::util::{contains_word, normalize};

/// Points contributed by each field. `total()` is the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub name: u32,
    pub offer: u32,
    pub category: u32,
    pub subcategory: u32,
    pub tags: u32,
    pub description: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        [self.offer, self.category, self.subcategory, self.tags, self.description]
            .into_iter()
            .fold(self.name, u32::saturating_add)
    }

    pub fn is_match(&self) -> bool {
        self.total() > 0
    }
}

/// Score every field of `offer` against a prepared, non-empty query.
///
/// An empty query has no defined score. Callers (the ranker) must check
/// [`PreparedQuery::is_empty`] first; here it simply scores zero.
pub fn score_breakdown(offer: &Offer, query: &PreparedQuery, config: &RankingConfig) -> ScoreBreakdown {
    let primary = query.primary();
    if primary.is_empty() {
        return ScoreBreakdown::default();
    }

    let synonyms = query.synonyms();
    let w = &config.weights;

    let name = normalize(&offer.name);
    let mut breakdown = ScoreBreakdown {
        name: score_name(&name, primary, config)
            .saturating_add(synonym_points(&name, synonyms, w.name_synonym)),
        ..ScoreBreakdown::default()
    };

    breakdown.offer = score_plain_field(
        &offer.offer,
        primary,
        synonyms,
        w.offer_contains,
        w.offer_synonym,
    );

    if let Some(category) = offer.category_main.as_deref() {
        breakdown.category = score_plain_field(
            category,
            primary,
            synonyms,
            w.category_contains,
            w.category_synonym,
        );
    }

    if let Some(subcategory) = offer.category_sub.as_deref() {
        breakdown.subcategory = score_plain_field(
            subcategory,
            primary,
            synonyms,
            w.subcategory_contains,
            w.subcategory_synonym,
        );
    }

    breakdown.tags = offer
        .tags
        .iter()
        .map(|tag| score_tag(&normalize(tag), primary, synonyms, config))
        .fold(0, u32::saturating_add);

    breakdown.description = score_plain_field(
        &offer.description,
        primary,
        synonyms,
        w.description_contains,
        w.description_synonym,
    );

    breakdown
}

/// Total relevance of `offer` for a prepared query.
pub fn score_prepared(offer: &Offer, query: &PreparedQuery, config: &RankingConfig) -> u32 {
    score_breakdown(offer, query, config).total()
}

/// Primary-term rules for the name. Exclusive tiers, then fuzzy fallback.
fn score_name(name: &str, primary: &str, config: &RankingConfig) -> u32 {
    let w = &config.weights;

    if name == primary {
        return w.name_exact;
    }
    if name.starts_with(primary) {
        return w.name_prefix;
    }
    if name.contains(primary) {
        return w.name_contains;
    }

    let mut points: u32 = 0;

    let whole = config.fuzzy.similarity(primary, name);
    if whole > 0.0 {
        points = points.saturating_add(scaled(whole, w.name_fuzzy_whole));
    }

    let best_word = name
        .split(' ')
        .map(|word| config.fuzzy.similarity(primary, word))
        .fold(0.0_f64, f64::max);
    if best_word > 0.0 {
        points = points.saturating_add(scaled(best_word, w.name_fuzzy_word));
    }

    points.min(w.name_fuzzy_cap)
}

fn score_tag(tag: &str, primary: &str, synonyms: &[String], config: &RankingConfig) -> u32 {
    if tag.is_empty() {
        return 0;
    }

    let w = &config.weights;
    let primary_points = if tag == primary {
        w.tag_exact
    } else if tag.contains(primary) {
        w.tag_contains
    } else if contains_word(primary, tag) {
        // "github student pack" carries the tag "github"
        w.tag_in_query
    } else {
        0
    };

    primary_points.saturating_add(synonym_points(tag, synonyms, w.tag_synonym))
}

/// Substring hit on the primary term plus a flat bonus per synonym hit.
fn score_plain_field(
    raw: &str,
    primary: &str,
    synonyms: &[String],
    contains_points: u32,
    synonym_weight: u32,
) -> u32 {
    let text = normalize(raw);
    if text.is_empty() {
        return 0;
    }

    let primary_points = if text.contains(primary) {
        contains_points
    } else {
        0
    };

    primary_points.saturating_add(synonym_points(&text, synonyms, synonym_weight))
}

fn synonym_points(text: &str, synonyms: &[String], weight: u32) -> u32 {
    let hits = synonyms.iter().filter(|synonym| text.contains(synonym.as_str())).count();
    u32::try_from(hits).unwrap_or(u32::MAX).saturating_mul(weight)
}

#[inline]
fn scaled(similarity: f64, weight: u32) -> u32 {
    (similarity * f64::from(weight)).floor() as u32
}
