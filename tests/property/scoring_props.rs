//! Property tests for scoring and ranking.

use crate::common::OfferBuilder;
use offerscope::{normalize, Offer, Ranker};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

prop_compose! {
    fn offer_strategy()(
        id in 1u64..10_000,
        name in phrase_strategy(),
        offer in phrase_strategy(),
        description in phrase_strategy(),
        main in word_strategy(),
        sub in word_strategy(),
        tags in prop::collection::vec(word_strategy(), 0..4),
        featured in any::<bool>(),
    ) -> Offer {
        let mut builder = OfferBuilder::new(id, &name)
            .offer(&offer)
            .description(&description)
            .category(&main, Some(sub.as_str()))
            .tags(tags.iter().map(String::as_str));
        if featured {
            builder = builder.featured();
        }
        builder.build()
    }
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Offer>> {
    prop::collection::vec(offer_strategy(), 0..40).prop_map(|mut offers| {
        // Ids must be unique within a catalog
        for (index, offer) in offers.iter_mut().enumerate() {
            offer.id = index as u64 + 1;
        }
        offers
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scoring never panics on arbitrary Unicode, and explain agrees with score.
    #[test]
    fn prop_score_total_on_any_input(name in "\\PC{0,30}", query in "\\PC{0,20}") {
        let offer = OfferBuilder::new(1, &name).description(&name).tags([name.as_str()]).build();
        let ranker = Ranker::default();
        prop_assert_eq!(ranker.score(&offer, &query), ranker.explain(&offer, &query).total());
    }

    /// Exact > prefix > contains > any fuzzy-only match, for the same name field.
    #[test]
    fn prop_name_tiers_monotonic(term in word_strategy(), suffix in word_strategy(), other in word_strategy()) {
        let ranker = Ranker::default();
        let exact = ranker.explain(&OfferBuilder::new(1, &term).build(), &term).name;
        let prefix = ranker.explain(&OfferBuilder::new(2, &format!("{} {}", term, suffix)).build(), &term).name;
        let contains = ranker.explain(&OfferBuilder::new(3, &format!("{} {}", suffix, term)).build(), &term).name;
        prop_assume!(!other.contains(term.as_str()));
        let fuzzy = ranker.explain(&OfferBuilder::new(4, &other).build(), &term).name;

        // Synonym bonuses are the same for all four only if none fire
        prop_assume!(ranker.prepare(&term).synonyms().is_empty());
        prop_assert!(exact > prefix);
        prop_assert!(prefix >= contains);
        prop_assert!(contains > fuzzy);
    }

    /// Ranked output is non-increasing and nothing sits below the cutoff.
    #[test]
    fn prop_ranked_sorted_and_thresholded(offers in catalog_strategy(), query in phrase_strategy()) {
        let ranker = Ranker::default();
        let prepared = ranker.prepare(&query);
        let ranked = ranker.rank_scored(&offers, &prepared).unwrap();

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        if let Some(top) = ranked.first().map(|r| r.score) {
            let cutoff = f64::from(top) * ranker.config().threshold.ratio_for(prepared.primary());
            for r in &ranked {
                prop_assert!(r.score > 0);
                prop_assert!(f64::from(r.score) >= cutoff);
            }
        }
    }

    /// Every ranked offer came from the input and appears once.
    #[test]
    fn prop_ranked_is_subset(offers in catalog_strategy(), query in phrase_strategy()) {
        let ranked = Ranker::default().rank(&offers, &query);
        let mut ids: Vec<u64> = ranked.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), ranked.len());
        prop_assert!(ranked.len() <= offers.len());
    }

    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(input in "\\PC{0,40}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }
}
