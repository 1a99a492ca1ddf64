// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score everything, sort, then cut the noise.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Name length** - ascending (shorter, more specific names surface first)
//! 3. **Offer id** - ascending, for absolute determinism
//!
//! The cutoff is relative, not absolute. Scores for "ai" and for
//! "github student pack" live on very different scales, so a fixed number
//! would either keep junk for one or drop real hits for the other. Instead
//! anything below `top_score × ratio` goes, with a looser ratio for short
//! queries since those are broad by nature.

use super::core::{score_breakdown, ScoreBreakdown};
use super::query::PreparedQuery;
use super::weights::RankingConfig;
use crate::synonyms::SynonymDictionary;
use crate::types::{Offer, ScoredOffer};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compare two scored offers for ranking.
pub fn compare_scored(a: &ScoredOffer<'_>, b: &ScoredOffer<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.offer.name.chars().count().cmp(&b.offer.name.chars().count()))
        .then_with(|| a.offer.id.cmp(&b.offer.id))
}

/// Drop everything scoring below `top × ratio`. Input must already be sorted.
pub fn apply_threshold(ranked: &mut Vec<ScoredOffer<'_>>, ratio: f64) {
    let Some(top) = ranked.first().map(|r| r.score) else {
        return;
    };
    let cutoff = f64::from(top) * ratio;
    ranked.retain(|r| f64::from(r.score) >= cutoff);
}

/// Relevance ranker: a synonym dictionary plus the ranking constants.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    dictionary: &'a SynonymDictionary,
    config: &'a RankingConfig,
}

impl Default for Ranker<'static> {
    fn default() -> Self {
        Self::new(SynonymDictionary::builtin(), RankingConfig::default_ref())
    }
}

impl<'a> Ranker<'a> {
    pub fn new(dictionary: &'a SynonymDictionary, config: &'a RankingConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn config(&self) -> &RankingConfig {
        self.config
    }

    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, self.dictionary)
    }

    /// Relevance of one offer for a raw query.
    pub fn score(&self, offer: &Offer, query: &str) -> u32 {
        self.explain(offer, query).total()
    }

    /// Per-field contributions for one offer and a raw query.
    pub fn explain(&self, offer: &Offer, query: &str) -> ScoreBreakdown {
        score_breakdown(offer, &self.prepare(query), self.config)
    }

    /// Score, filter to matches, sort and threshold.
    ///
    /// Returns `None` when the query is empty after normalization: there is
    /// nothing to rank by, and the caller keeps its own ordering.
    pub fn rank_scored<'o>(
        &self,
        offers: impl IntoIterator<Item = &'o Offer>,
        query: &PreparedQuery,
    ) -> Option<Vec<ScoredOffer<'o>>> {
        if query.is_empty() {
            return None;
        }

        let candidates: Vec<&'o Offer> = offers.into_iter().collect();
        let mut ranked = self.score_all(&candidates, query);
        let matched = ranked.len();

        ranked.sort_by(compare_scored);
        let ratio = self.config.threshold.ratio_for(query.primary());
        apply_threshold(&mut ranked, ratio);

        tracing::debug!(
            query = query.primary(),
            synonyms = query.synonyms().len(),
            candidates = candidates.len(),
            matched,
            kept = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            ratio,
            "ranked offers"
        );

        Some(ranked)
    }

    /// Ranked offers for a raw query, or the input unchanged if the query is empty.
    pub fn rank<'o>(&self, offers: impl IntoIterator<Item = &'o Offer>, query: &str) -> Vec<&'o Offer> {
        let offers: Vec<&'o Offer> = offers.into_iter().collect();
        let prepared = self.prepare(query);

        match self.rank_scored(offers.iter().copied(), &prepared) {
            Some(ranked) => ranked.into_iter().map(|r| r.offer).collect(),
            None => offers,
        }
    }

    #[cfg(feature = "parallel")]
    fn score_all<'o>(&self, candidates: &[&'o Offer], query: &PreparedQuery) -> Vec<ScoredOffer<'o>> {
        candidates
            .par_iter()
            .filter_map(|&offer| self.score_one(offer, query))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all<'o>(&self, candidates: &[&'o Offer], query: &PreparedQuery) -> Vec<ScoredOffer<'o>> {
        candidates
            .iter()
            .filter_map(|&offer| self.score_one(offer, query))
            .collect()
    }

    fn score_one<'o>(&self, offer: &'o Offer, query: &PreparedQuery) -> Option<ScoredOffer<'o>> {
        let score = score_breakdown(offer, query, self.config).total();
        (score > 0).then_some(ScoredOffer { offer, score })
    }
}
