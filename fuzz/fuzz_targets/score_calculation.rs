// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation and ranking invariants.
//!
//! Arbitrary offers, arbitrary queries. Scoring must not panic, must agree
//! with its own breakdown, and ranking must come back sorted, thresholded and
//! deterministic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use offerscope::scoring::compare_scored;
use offerscope::testing::OfferBuilder;
use offerscope::{Offer, Ranker, ScoredOffer};

#[derive(Debug, Arbitrary)]
struct FuzzOffer {
    name: String,
    offer: String,
    description: String,
    category: Option<(String, Option<String>)>,
    tags: Vec<String>,
    featured: bool,
}

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    offers: Vec<FuzzOffer>,
}

fn build(id: usize, input: &FuzzOffer) -> Offer {
    // Cap lengths to avoid timeouts
    let cap = |s: &str| s.chars().take(64).collect::<String>();

    let mut builder = OfferBuilder::new(id as u64, &cap(&input.name))
        .offer(&cap(&input.offer))
        .description(&cap(&input.description))
        .tags(input.tags.iter().take(8).map(String::as_str));
    if let Some((main, sub)) = &input.category {
        builder = builder.category(&cap(main), sub.as_deref());
    }
    if input.featured {
        builder = builder.featured();
    }
    builder.build()
}

fuzz_target!(|input: RankInput| {
    let query: String = input.query.chars().take(100).collect();
    let offers: Vec<Offer> = input
        .offers
        .iter()
        .take(32)
        .enumerate()
        .map(|(id, offer)| build(id, offer))
        .collect();

    let ranker = Ranker::default();

    // INVARIANT: score is the sum of its parts
    for offer in &offers {
        assert_eq!(ranker.score(offer, &query), ranker.explain(offer, &query).total());
    }

    let prepared = ranker.prepare(&query);
    let Some(ranked) = ranker.rank_scored(&offers, &prepared) else {
        // Empty query: ranking leaves the input alone
        assert_eq!(ranker.rank(&offers, &query).len(), offers.len());
        return;
    };

    // INVARIANT: results are sorted and every score is positive
    for pair in ranked.windows(2) {
        assert_ne!(compare_scored(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
    }
    assert!(ranked.iter().all(|r: &ScoredOffer<'_>| r.score > 0));

    // INVARIANT: ranking is deterministic
    let again = ranker.rank_scored(&offers, &prepared).unwrap_or_default();
    let first: Vec<u64> = ranked.iter().map(|r| r.offer.id).collect();
    let second: Vec<u64> = again.iter().map(|r| r.offer.id).collect();
    assert_eq!(first, second, "ranking changed between runs");
});
